//! # MessageList Component
//!
//! Scrollable view of the conversation.
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent scroll state) and the message log
//! (props). Heights are recomputed each frame from `Message::calculate_height`;
//! the log is short-lived and small, so there is no layout cache.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::MessageLog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Scroll state for the message list. Persisted in `TuiState`.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Total content height from the last render
    pub content_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Keep the offset inside the content so the view never scrolls past the last message.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll once the user scrolls back to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// True when content exists below the visible window.
    pub fn has_unseen_content(&self) -> bool {
        self.scroll_state.offset().y < self.max_scroll()
    }
}

pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a MessageLog,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, messages: &'a MessageLog, spinner_frame: usize) -> Self {
        Self {
            state,
            messages,
            spinner_frame,
        }
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column

        let heights: Vec<u16> = self
            .messages
            .iter()
            .map(|m| Message::calculate_height(m, content_width))
            .collect();
        let total_height = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, height) in self.messages.iter().zip(heights) {
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Message::new(message, self.spinner_frame), rect);
            y_offset = y_offset.saturating_add(height);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Scroll handling lives on the state: `MessageList` is rebuilt every frame.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}
