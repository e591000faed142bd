//! HTTP implementation of [`Backend`] against the recommendation service.
//!
//! Two endpoints, both relative to the configured base URL:
//! - `GET  /api/health`       any 2xx means reachable
//! - `POST /api/query-agent`  `{ "query": ... }` → `QueryResponse`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::backend::{ApiError, Backend};
use super::types::{QueryRequest, QueryResponse};

pub const HEALTH_PATH: &str = "/api/health";
pub const QUERY_PATH: &str = "/api/query-agent";

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Builds a backend for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn check_health(&self) -> bool {
        let url = self.endpoint(HEALTH_PATH);
        debug!("Checking backend health at {}", url);

        match self.client.get(&url).send().await {
            Ok(response) => {
                info!("Health check response: {}", response.status());
                response.status().is_success()
            }
            Err(e) => {
                warn!("Backend health check failed: {}", e);
                false
            }
        }
    }

    async fn query_agent(&self, query: &str) -> Result<QueryResponse, ApiError> {
        let url = self.endpoint(QUERY_PATH);
        info!("Query request to {} ({} bytes)", url, query.len());
        debug!("Query: {}", query);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| {
                warn!("Query request failed: {}", e);
                ApiError::from(e)
            })?;

        let status = response.status();
        debug!("Query response status: {}", status);
        debug!("Query response headers: {:?}", response.headers());

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error response: {} - {}", status.as_u16(), body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        info!(
            "Query response: {} recommendations, agent_id={:?}",
            parsed.recommendations.len(),
            parsed.agent_id
        );
        Ok(parsed)
    }
}
