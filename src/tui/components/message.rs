use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::message::{Message as ChatMessage, Sender};
use crate::tui::components::repo_card::CardGrid;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

const LOADING_FRAMES: [&str; 4] = ["●○○", "○●○", "○○●", "○●○"];

/// A stateless component that renders one chat message.
///
/// Created fresh each frame by `MessageList`. User messages are green,
/// bot messages blue. A bot reply with recommendations gets a card grid
/// below its text; the loading placeholder gets an animated indicator
/// instead of a body.
///
/// [`calculate_height`](Self::calculate_height) wraps text with `textwrap`
/// and renders those same wrapped lines, so predicted and drawn heights match.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
    /// Drives the loading animation.
    pub spinner_frame: usize,
}

fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Green),
        Sender::Bot => Style::default().fg(Color::Blue),
    }
}

fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "you",
        Sender::Bot => "xolak",
    }
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage, spinner_frame: usize) -> Self {
        Self {
            message,
            spinner_frame,
        }
    }

    fn text_lines(message: &ChatMessage, content_width: u16) -> Vec<String> {
        match message.text.as_deref() {
            Some(text) if !message.is_loading && !text.trim().is_empty() => {
                wrap_text(text, content_width)
            }
            _ => Vec::new(),
        }
    }

    /// Height of the body between the borders: text, a blank spacer, then cards.
    fn body_height(message: &ChatMessage, content_width: u16) -> u16 {
        if message.is_loading {
            return 1;
        }
        let text = Self::text_lines(message, content_width).len() as u16;
        let cards = CardGrid::calculate_height(&message.repositories, content_width);
        let spacer = u16::from(text > 0 && cards > 0);
        (text + spacer + cards).max(1)
    }

    /// Calculate the height required for this message given a width.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Too narrow for borders + padding: still take one row
            return 1;
        }
        Self::body_height(message, content_width) + VERTICAL_OVERHEAD
    }
}

impl Widget for Message<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let msg = self.message;
        let style = sender_style(msg.sender);
        let border_style = style.add_modifier(Modifier::DIM);
        let timestamp = msg.timestamp.format("%H:%M").to_string();

        let block = Block::bordered()
            .title(sender_label(msg.sender))
            .title(Line::from(timestamp).right_aligned())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        if msg.is_loading {
            let frame = LOADING_FRAMES[self.spinner_frame % LOADING_FRAMES.len()];
            let placeholder = Line::from(vec![
                Span::styled(frame, style),
                Span::styled(
                    " looking for projects",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ),
            ]);
            Paragraph::new(placeholder).render(inner, buf);
            return;
        }

        let text: Vec<Line> = Message::text_lines(msg, inner.width)
            .into_iter()
            .map(Line::from)
            .collect();
        let text_height = text.len() as u16;
        Paragraph::new(text).style(style).render(inner, buf);

        if msg.repositories.is_empty() {
            return;
        }
        let offset = if text_height > 0 { text_height + 1 } else { 0 };
        let grid_area = Rect {
            y: inner.y.saturating_add(offset),
            height: inner.height.saturating_sub(offset),
            ..inner
        };
        CardGrid::new(&msg.repositories).render(grid_area, buf);
    }
}
