//! # TitleBar Component
//!
//! One-line status bar across the top of the screen:
//!
//! ```text
//! Xolak ● connected (http://localhost:8080) | agent: a1b2 | Searching... | ↓ New
//! ```
//!
//! Stateless: every field is a prop copied from `App` or `TuiState` each frame.
//! Segments are dropped right to left when the terminal is too narrow, since
//! ratatui clips the line at the area edge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Connectivity;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub connectivity: Connectivity,
    pub backend_url: &'a str,
    pub agent_id: Option<&'a str>,
    pub status_message: &'a str,
    /// Whether there's content below the current scroll position
    pub has_unseen_content: bool,
}

fn connectivity_color(connectivity: Connectivity) -> Color {
    match connectivity {
        Connectivity::Unknown => Color::Yellow,
        Connectivity::Connected => Color::Green,
        Connectivity::Disconnected => Color::Red,
    }
}

impl TitleBar<'_> {
    fn line(&self) -> Line<'static> {
        let separator = || Span::styled(" | ", Style::default().fg(Color::DarkGray));

        let mut spans = vec![
            Span::styled("Xolak", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                format!("● {}", self.connectivity.label()),
                Style::default().fg(connectivity_color(self.connectivity)),
            ),
            Span::styled(
                format!(" ({})", self.backend_url),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if let Some(agent) = self.agent_id {
            spans.push(separator());
            spans.push(Span::raw(format!("agent: {agent}")));
        }
        if !self.status_message.is_empty() {
            spans.push(separator());
            spans.push(Span::raw(self.status_message.to_string()));
        }
        if self.has_unseen_content {
            spans.push(separator());
            spans.push(Span::styled("↓ New", Style::default().fg(Color::Cyan)));
        }

        Line::from(spans)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
