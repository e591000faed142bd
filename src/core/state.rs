//! # Application State
//!
//! Core chat state for Xolak. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── messages: MessageLog          // conversation, oldest first
//! ├── phase: Phase                  // idle / awaiting response
//! ├── connectivity: Connectivity    // unknown / connected / disconnected
//! ├── agent_id: Option<String>      // last agent id reported by the backend
//! ├── status_message: String        // title bar text
//! └── backend_url: String           // shown in the title bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::message::MessageLog;

pub const DEFAULT_GREETING: &str = "Hi! Tell me what kind of open-source project you'd like to \
    work on and I'll suggest some repositories to contribute to.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Unknown,
    Connected,
    Disconnected,
}

impl Connectivity {
    pub fn label(self) -> &'static str {
        match self {
            Connectivity::Unknown => "checking",
            Connectivity::Connected => "connected",
            Connectivity::Disconnected => "disconnected",
        }
    }
}

pub struct App {
    pub messages: MessageLog,
    pub phase: Phase,
    pub connectivity: Connectivity,
    pub agent_id: Option<String>,
    pub status_message: String,
    pub backend_url: String,
    /// The disconnect warning is only ever appended once.
    pub(crate) health_warning_shown: bool,
}

impl App {
    /// Creates the chat with its greeting already in the log.
    pub fn new(backend_url: String, greeting: &str) -> Self {
        let mut messages = MessageLog::new();
        messages.push_bot(greeting.to_string());
        Self {
            messages,
            phase: Phase::Idle,
            connectivity: Connectivity::Unknown,
            agent_id: None,
            status_message: String::from("Welcome to Xolak!"),
            backend_url,
            health_warning_shown: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    /// True once the user has sent anything (hides the landing header).
    pub fn has_user_messages(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.sender == crate::core::message::Sender::User)
    }
}
