//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{ApiError, Backend, QueryResponse};
use crate::core::state::{App, DEFAULT_GREETING};

/// A backend that answers from a script instead of the network.
///
/// Queries pop replies in order; once the script runs dry every query
/// resolves to an empty `QueryResponse`.
pub struct ScriptedBackend {
    healthy: bool,
    replies: Mutex<VecDeque<Result<QueryResponse, ApiError>>>,
    queries: Mutex<Vec<String>>,
    health_calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn healthy() -> Self {
        Self::with_health(true)
    }

    pub fn unhealthy() -> Self {
        Self::with_health(false)
    }

    fn with_health(healthy: bool) -> Self {
        Self {
            healthy,
            replies: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
            health_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_reply(self, reply: Result<QueryResponse, ApiError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn health_calls(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn check_health(&self) -> bool {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.healthy
    }

    async fn query_agent(&self, query: &str) -> Result<QueryResponse, ApiError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(QueryResponse::default()))
    }
}

/// Creates a test App pointed at a dummy backend URL.
pub fn test_app() -> App {
    App::new("http://localhost:8080".to_string(), DEFAULT_GREETING)
}
