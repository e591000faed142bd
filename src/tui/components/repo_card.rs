//! # Repository Cards
//!
//! A `RepoCard` shows one recommendation: name, URL, language tag, star
//! count, a coloured difficulty badge and at most three good-first-issues,
//! each as a title line followed by its link.
//! `CardGrid` lays cards out two per row when there is room, one otherwise.
//!
//! Both widgets build their lines up front so `calculate_height` and
//! `render` can never disagree about how tall a card is.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::{Difficulty, Repository};

/// Narrowest card that still reads well; below twice this the grid is single-column.
pub const MIN_CARD_WIDTH: u16 = 34;
/// Columns of blank space between cards in the same row.
pub const CARD_GAP: u16 = 1;
const MAX_DESCRIPTION_LINES: usize = 2;
/// Borders (2) plus one column of padding per side.
const CARD_HORIZONTAL_OVERHEAD: u16 = 4;
const CARD_VERTICAL_OVERHEAD: u16 = 2;

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
        Difficulty::Unknown => Color::DarkGray,
    }
}

fn badge_style(difficulty: Difficulty) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(difficulty_color(difficulty))
        .add_modifier(Modifier::BOLD)
}

/// Cut `text` down to `width` display columns, ending in `…` when shortened.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[derive(Clone, Copy)]
pub struct RepoCard<'a> {
    pub repo: &'a Repository,
}

impl<'a> RepoCard<'a> {
    pub fn new(repo: &'a Repository) -> Self {
        Self { repo }
    }

    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let width = inner_width as usize;
        let difficulty = self.repo.difficulty_level();
        let mut lines = Vec::new();

        let mut meta = Vec::new();
        if !self.repo.language.is_empty() {
            meta.push(Span::styled(
                format!("[{}]", self.repo.language),
                Style::default().fg(Color::Magenta),
            ));
            meta.push(Span::raw(" "));
        }
        meta.push(Span::styled(
            format!("★ {}", self.repo.stars),
            Style::default().fg(Color::Yellow),
        ));
        meta.push(Span::raw(" "));
        meta.push(Span::styled(format!(" {} ", difficulty.label()), badge_style(difficulty)));
        lines.push(Line::from(meta));

        lines.push(Line::styled(
            truncate_to_width(&self.repo.url, width),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ));

        let description = self.repo.description.trim();
        if !description.is_empty() && width > 0 {
            let options = textwrap::Options::new(width)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace);
            let wrapped = textwrap::wrap(description, options);
            let overflow = wrapped.len() > MAX_DESCRIPTION_LINES;
            for (i, line) in wrapped.iter().take(MAX_DESCRIPTION_LINES).enumerate() {
                let text = if overflow && i == MAX_DESCRIPTION_LINES - 1 {
                    truncate_to_width(&format!("{line}…"), width)
                } else {
                    line.to_string()
                };
                lines.push(Line::styled(text, Style::default().fg(Color::Gray)));
            }
        }

        let issues = self.repo.visible_issues();
        if !issues.is_empty() {
            lines.push(Line::styled(
                "Good first issues:",
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for issue in issues {
                lines.push(Line::from(vec![
                    Span::raw("• "),
                    Span::styled(
                        truncate_to_width(&issue.title, width.saturating_sub(2)),
                        Style::default().fg(Color::Cyan),
                    ),
                ]));
                lines.push(Line::styled(
                    format!("  {}", truncate_to_width(&issue.url, width.saturating_sub(2))),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::UNDERLINED),
                ));
            }
        }

        lines
    }

    pub fn calculate_height(repo: &Repository, width: u16) -> u16 {
        let inner = width.saturating_sub(CARD_HORIZONTAL_OVERHEAD);
        RepoCard::new(repo).lines(inner).len() as u16 + CARD_VERTICAL_OVERHEAD
    }
}

impl Widget for RepoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let difficulty = self.repo.difficulty_level();
        let title_width = area.width.saturating_sub(CARD_HORIZONTAL_OVERHEAD) as usize;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(difficulty_color(difficulty)).add_modifier(Modifier::DIM))
            .title(Span::styled(
                truncate_to_width(&self.repo.name, title_width),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}

/// Recommendation cards arranged in rows.
#[derive(Clone, Copy)]
pub struct CardGrid<'a> {
    pub repos: &'a [Repository],
}

impl<'a> CardGrid<'a> {
    pub fn new(repos: &'a [Repository]) -> Self {
        Self { repos }
    }

    pub fn columns(width: u16) -> usize {
        if width >= MIN_CARD_WIDTH * 2 + CARD_GAP { 2 } else { 1 }
    }

    fn card_width(width: u16) -> u16 {
        let cols = Self::columns(width) as u16;
        width.saturating_sub(CARD_GAP * (cols - 1)) / cols
    }

    fn row_heights(repos: &[Repository], width: u16) -> Vec<u16> {
        let card_width = Self::card_width(width);
        repos
            .chunks(Self::columns(width))
            .map(|row| {
                row.iter()
                    .map(|repo| RepoCard::calculate_height(repo, card_width))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn calculate_height(repos: &[Repository], width: u16) -> u16 {
        Self::row_heights(repos, width).iter().sum()
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card_width = Self::card_width(area.width);
        let columns = Self::columns(area.width);
        let heights = Self::row_heights(self.repos, area.width);

        let mut y = area.y;
        for (row, height) in self.repos.chunks(columns).zip(heights) {
            for (col, repo) in row.iter().enumerate() {
                let x = area.x + col as u16 * (card_width + CARD_GAP);
                let rect = Rect::new(x, y, card_width, height).intersection(area);
                if !rect.is_empty() {
                    RepoCard::new(repo).render(rect, buf);
                }
            }
            y = y.saturating_add(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Issue;

    fn repo(name: &str, description: &str, issues: usize) -> Repository {
        Repository {
            name: name.to_string(),
            url: format!("https://github.com/example/{name}"),
            description: description.to_string(),
            language: "Python".to_string(),
            stars: 10,
            difficulty: "Beginner".to_string(),
            good_first_issues: (0..issues)
                .map(|i| Issue {
                    title: format!("{name} issue {i}"),
                    url: format!("https://github.com/example/{name}/issues/{i}"),
                })
                .collect(),
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly", 7), "exactly");
        assert_eq!(truncate_to_width("truncated", 5), "trun…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_difficulty_colors() {
        assert_eq!(difficulty_color(Difficulty::Beginner), Color::Green);
        assert_eq!(difficulty_color(Difficulty::Intermediate), Color::Yellow);
        assert_eq!(difficulty_color(Difficulty::Advanced), Color::Red);
        assert_eq!(difficulty_color(Difficulty::Unknown), Color::DarkGray);
    }

    #[test]
    fn test_card_height_counts_issues_up_to_three() {
        // meta + url + borders
        let bare = RepoCard::calculate_height(&repo("a", "", 0), 40);
        assert_eq!(bare, 2 + CARD_VERTICAL_OVERHEAD);

        // + header + 3 issues (title and link each), even though 5 exist
        let busy = RepoCard::calculate_height(&repo("a", "", 5), 40);
        assert_eq!(busy, bare + 1 + 3 * 2);
    }

    #[test]
    fn test_description_capped_at_two_lines() {
        let long = "word ".repeat(100);
        let height = RepoCard::calculate_height(&repo("a", &long, 0), 40);
        assert_eq!(height, 2 + MAX_DESCRIPTION_LINES as u16 + CARD_VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_grid_columns_follow_width() {
        assert_eq!(CardGrid::columns(MIN_CARD_WIDTH * 2 + CARD_GAP), 2);
        assert_eq!(CardGrid::columns(MIN_CARD_WIDTH * 2), 1);
        assert_eq!(CardGrid::columns(20), 1);
    }

    #[test]
    fn test_grid_height_two_columns_is_one_row() {
        let repos = vec![repo("a", "", 1), repo("b", "", 1)];
        let card = RepoCard::calculate_height(&repos[0], CardGrid::card_width(100));
        assert_eq!(CardGrid::calculate_height(&repos, 100), card);
        // Single column stacks them
        let narrow_card = RepoCard::calculate_height(&repos[0], 40);
        assert_eq!(CardGrid::calculate_height(&repos, 40), narrow_card * 2);
    }

    #[test]
    fn test_card_renders_badge_and_issues() {
        let r = repo("foo", "d", 5);
        let area = Rect::new(0, 0, 50, RepoCard::calculate_height(&r, 50));
        let mut buf = Buffer::empty(area);
        RepoCard::new(&r).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("foo"));
        assert!(text.contains("Beginner"));
        assert!(text.contains("[Python]"));
        assert!(text.contains("foo issue 2"));
        assert!(!text.contains("foo issue 3"));
    }

    #[test]
    fn test_card_shows_issue_links() {
        let mut r = repo("foo", "", 0);
        r.good_first_issues = vec![Issue {
            title: "Fix".to_string(),
            url: "https://x/issues/1".to_string(),
        }];
        let area = Rect::new(0, 0, 60, RepoCard::calculate_height(&r, 60));
        let mut buf = Buffer::empty(area);
        RepoCard::new(&r).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("• Fix"));
        assert!(text.contains("https://x/issues/1"));
    }

    #[test]
    fn test_card_without_issues_has_no_issue_header() {
        let r = repo("foo", "d", 0);
        let area = Rect::new(0, 0, 50, RepoCard::calculate_height(&r, 50));
        let mut buf = Buffer::empty(area);
        RepoCard::new(&r).render(area, &mut buf);

        assert!(!buffer_text(&buf).contains("Good first issues"));
    }
}
