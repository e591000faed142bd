//! # InputBox Component
//!
//! Multi-line text entry for queries.
//!
//! Text is hard-wrapped by display width (no word wrapping) so the cursor's
//! screen position is simply the end of the wrapped prefix before it.
//!
//! Submitting does not clear the buffer. The parent clears it once the chat
//! controller accepts the query, so text typed while a request is in flight
//! survives the rejected submit.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Left + right borders
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown before the box scrolls internally
const MAX_VISIBLE_LINES: u16 = 5;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter pressed with non-blank text
    Submit(String),
    ContentChanged,
}

/// Split `text` into rows no wider than `width` columns, breaking on `\n`.
fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut used = 0;
    for c in text.chars() {
        if c == '\n' {
            lines.push(String::new());
            used = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if used > 0 && used + w > width {
            lines.push(String::new());
            used = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push(c);
        }
        used += w;
    }
    lines
}

fn display_width(line: &str) -> usize {
    line.chars().map(|c| c.width().unwrap_or(0)).sum()
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

pub struct InputBox {
    pub buffer: String,
    /// Cursor as a byte offset into `buffer`
    cursor: usize,
    /// Prop: a request is in flight
    pub busy: bool,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            busy: false,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// (row, column) of the cursor within the wrapped content.
    fn cursor_row_col(&self, width: usize) -> (usize, usize) {
        if width == 0 {
            return (0, 0);
        }
        let prefix = hard_wrap(&self.buffer[..self.cursor], width);
        let row = prefix.len() - 1;
        let col = prefix.last().map(|l| display_width(l)).unwrap_or(0);
        if col >= width { (row + 1, 0) } else { (row, col) }
    }

    fn visual_rows(&self, width: usize) -> usize {
        if width == 0 {
            return 1;
        }
        let rows = hard_wrap(&self.buffer, width).len();
        rows.max(self.cursor_row_col(width).0 + 1)
    }

    /// Box height for the current buffer, between one and `MAX_VISIBLE_LINES` rows of text.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        let width = area_width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let rows = u16::try_from(self.visual_rows(width))
            .unwrap_or(u16::MAX)
            .clamp(1, MAX_VISIBLE_LINES);
        rows + VERTICAL_OVERHEAD
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let (cursor_row, cursor_col) = self.cursor_row_col(width);
        let scroll = cursor_row.saturating_sub(MAX_VISIBLE_LINES as usize - 1);

        let lines: Vec<Line> = hard_wrap(&self.buffer, width.max(1))
            .into_iter()
            .skip(scroll)
            .take(MAX_VISIBLE_LINES as usize)
            .map(Line::from)
            .collect();

        let (title, style) = if self.busy {
            (
                " Waiting for recommendations... ",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        } else {
            (
                " Describe the project you want (Enter: send, Shift+Enter: newline) ",
                Style::default().fg(Color::Green),
            )
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title);
        frame.render_widget(Paragraph::new(lines).block(block).style(style), area);

        let x = area.x + 1 + cursor_col as u16;
        let y = area.y + 1 + (cursor_row - scroll) as u16;
        frame.set_cursor_position((x, y));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert_str(&normalized);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                (!self.buffer.trim().is_empty()).then(|| InputEvent::Submit(self.buffer.clone()))
            }
            _ => None,
        }
    }
}
