use std::fmt;

use async_trait::async_trait;

use super::types::QueryResponse;

/// Errors returned by [`Backend::query_agent`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered with a non-2xx status. `body` is the raw response text.
    Status { status: u16, body: String },
    /// The transport gave up waiting for the server.
    Timeout(String),
    /// Nothing is listening at the configured address.
    Unreachable(String),
    /// Any other failure while sending the request or reading the response.
    Transport(String),
    /// Response body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            ApiError::Timeout(msg) => write!(f, "request timed out: {msg}"),
            ApiError::Unreachable(msg) => write!(f, "backend unreachable: {msg}"),
            ApiError::Transport(msg) => write!(f, "fetch failed: {msg}"),
            ApiError::Parse(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_connect() {
            ApiError::Unreachable(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// The recommendation service as seen by the chat controller.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns true when the health endpoint answered with a 2xx status.
    /// Never fails; transport errors resolve to `false`.
    async fn check_health(&self) -> bool;

    /// Sends a free-text query and returns the parsed recommendations.
    async fn query_agent(&self, query: &str) -> Result<QueryResponse, ApiError>;
}
