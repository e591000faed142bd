//! # Actions
//!
//! Everything that can happen in Xolak becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Backend answers? That's `Action::QueryResolved(response)`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an [`Effect`] describing the I/O the caller should run next.
//! No I/O happens here; see `effects::perform` for that half.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{ApiError, QueryResponse};
use crate::core::state::{App, Connectivity, Phase};

pub const DEFAULT_RESPONSE_TEXT: &str = "Here are some repositories that match what you're looking for.";

pub const BACKEND_HINT: &str = "Please make sure the backend server is running.";

pub const HEALTH_WARNING: &str = "I can't reach the recommendation backend right now. \
    Please make sure the backend server is running. You can still type; \
    press Ctrl+R to check again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Chat view opened.
    Mount,
    /// Result of a health check.
    HealthChecked(bool),
    /// User asked to re-run the health check.
    RecheckHealth,
    /// User submitted the input box contents.
    Submit(String),
    QueryResolved(QueryResponse),
    QueryFailed(ApiError),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    CheckHealth,
    /// Send this text to the backend.
    Query(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount | Action::RecheckHealth => {
            set_idle_status(app, "Checking backend...");
            Effect::CheckHealth
        }

        Action::HealthChecked(ok) => {
            if ok {
                app.connectivity = Connectivity::Connected;
                set_idle_status(app, "Backend ready");
            } else {
                app.connectivity = Connectivity::Disconnected;
                set_idle_status(app, "Backend unreachable");
                if !app.health_warning_shown {
                    app.health_warning_shown = true;
                    app.messages.push_bot(HEALTH_WARNING.to_string());
                }
            }
            info!("Health check resolved: {:?}", app.connectivity);
            Effect::None
        }

        Action::Submit(text) => {
            if text.trim().is_empty() {
                debug!("Ignoring blank submission");
                return Effect::None;
            }
            if app.phase == Phase::AwaitingResponse {
                debug!("Ignoring submission while a query is in flight");
                return Effect::None;
            }

            app.messages.push_user(text.clone());
            app.messages.push_loading();
            app.phase = Phase::AwaitingResponse;
            app.status_message = String::from("Searching...");
            Effect::Query(text)
        }

        Action::QueryResolved(response) => {
            app.messages.remove_loading();
            let text = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RESPONSE_TEXT.to_string());
            let count = response.recommendations.len();
            app.messages
                .push_bot_with_repositories(text, response.recommendations);
            if response.agent_id.is_some() {
                app.agent_id = response.agent_id;
            }
            app.connectivity = Connectivity::Connected;
            app.phase = Phase::Idle;
            app.status_message = format!("{count} recommendation(s)");
            Effect::None
        }

        Action::QueryFailed(err) => {
            warn!("Query failed: {}", err);
            app.messages.remove_loading();
            app.messages.push_bot(explain_failure(&err));
            app.connectivity = Connectivity::Disconnected;
            app.phase = Phase::Idle;
            app.status_message = String::from("Request failed");
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Health status text never replaces "Searching..." while a query is pending.
fn set_idle_status(app: &mut App, status: &str) {
    if app.phase == Phase::Idle {
        app.status_message = status.to_string();
    }
}

/// Turns a failed query into the text shown to the user.
pub fn explain_failure(err: &ApiError) -> String {
    match err {
        ApiError::Unreachable(_) => {
            format!("The recommendation backend is unreachable. {BACKEND_HINT}")
        }
        ApiError::Timeout(_) => String::from("The request timed out. Please try again."),
        ApiError::Transport(_) => {
            format!("Cannot connect to the backend server. {BACKEND_HINT}")
        }
        ApiError::Status { .. } => format!("Sorry, the backend returned an error. {err}"),
        ApiError::Parse(_) => String::from(
            "Sorry, something unexpected went wrong while handling your request. Please try again.",
        ),
    }
}
