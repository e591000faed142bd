//! # Landing Header Component
//!
//! Shown above the chat until the user sends their first query.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const TAGLINE: &str = "Describe the kind of project you want to work on";

pub struct LandingPage {
    frame_index: usize,
}

impl LandingPage {
    /// Rows the header occupies, including a blank line underneath.
    pub const HEIGHT: u16 = 4;

    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        // Caret blinks a few times per second at the redraw rate
        let caret = if (self.frame_index / 4) % 2 == 0 { "_" } else { " " };

        vec![
            Line::from(Span::styled(
                "X O L A K",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(TAGLINE, Style::default().fg(Color::Gray)),
                Span::styled(caret, Style::default().fg(Color::Magenta)),
            ]),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
