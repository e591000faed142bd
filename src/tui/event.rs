use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,
    RecheckHealth,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String), // Bracketed paste, newlines preserved
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Translate a key press into a `TuiEvent`.
///
/// Only an unmodified Enter submits. Enter with any modifier, and Ctrl+J
/// (what most legacy terminals send for Ctrl+Enter), insert a newline.
pub fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    // Kitty protocol also reports releases and repeats
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let mods = key.modifiers;
    match key.code {
        KeyCode::Enter if mods.is_empty() => Some(TuiEvent::Submit),
        KeyCode::Enter => Some(TuiEvent::InputChar('\n')),
        KeyCode::Char('j') if mods.contains(KeyModifiers::CONTROL) => Some(TuiEvent::InputChar('\n')),
        KeyCode::Char('c') if mods.contains(KeyModifiers::CONTROL) => Some(TuiEvent::Quit),
        KeyCode::Char('r') if mods.contains(KeyModifiers::CONTROL) => Some(TuiEvent::RecheckHealth),
        KeyCode::Char(_) if mods.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(TuiEvent::InputChar(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),
        KeyCode::Left => Some(TuiEvent::CursorLeft),
        KeyCode::Right => Some(TuiEvent::CursorRight),
        KeyCode::Home => Some(TuiEvent::CursorHome),
        KeyCode::End => Some(TuiEvent::CursorEnd),
        KeyCode::Up => Some(TuiEvent::ScrollUp),
        KeyCode::Down => Some(TuiEvent::ScrollDown),
        KeyCode::PageUp => Some(TuiEvent::ScrollPageUp),
        KeyCode::PageDown => Some(TuiEvent::ScrollPageDown),
        KeyCode::Esc => Some(TuiEvent::Quit),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let mapped = match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(mapped)
}
