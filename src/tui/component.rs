use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props arrive as struct fields; `render` takes `&mut self` so a component
/// can refresh caches (heights, scroll offsets) while it draws, the same way
/// ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component reports to its parent.
    type Event;

    /// Returns `Some` when the parent needs to react.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
