//! PTV Timetable API HTTP client.
//!
//! Provides async methods for querying departure boards. Handles request
//! signing, concurrency limiting and conversion to domain types.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Departure;

use super::convert::convert_board;
use super::error::FeedError;
use super::sign::sign_path;
use super::source::{BoardQuery, BoardSource};
use super::types::DeparturesResponse;

/// Default base URL for the PTV Timetable API.
pub const DEFAULT_BASE_URL: &str = "https://timetableapi.ptv.vic.gov.au";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct PtvConfig {
    /// Developer id sent as `devid`
    pub dev_id: String,
    /// Shared key used to sign requests
    pub api_key: String,
    /// Base URL for the API (defaults to production PTV)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PtvConfig {
    /// Create a new config with the given credentials.
    pub fn new(dev_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// PTV Timetable API client.
///
/// Uses a semaphore to limit concurrent requests. Cloning is cheap and
/// clones share the connection pool and the limit.
#[derive(Debug, Clone)]
pub struct PtvClient {
    http: reqwest::Client,
    base_url: String,
    dev_id: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl PtvClient {
    /// Create a new PTV client with the given configuration.
    pub fn new(config: PtvConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dev_id: config.dev_id,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// The full signed URL for a board query.
    pub fn signed_url(&self, query: &BoardQuery) -> String {
        format!(
            "{}{}",
            self.base_url,
            sign_path(&query.path(), &self.dev_id, &self.api_key)
        )
    }

    /// Get a stop's departure board.
    ///
    /// Returns departures in feed order with route numbers and direction
    /// names resolved.
    pub async fn get_departures(&self, query: &BoardQuery) -> Result<Vec<Departure>, FeedError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FeedError::Closed)?;

        let url = self.signed_url(query);
        debug!(stop = %query.stop, path = %query.path(), "Fetching departure board");

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FeedError::Unauthorized);
        }

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: reason.to_string(),
            });
        }

        let body = response.text().await?;

        let board: DeparturesResponse = serde_json::from_str(&body).map_err(|e| {
            debug!(body = %body.chars().take(500).collect::<String>(), "Unparsable board");
            FeedError::Json {
                message: e.to_string(),
            }
        })?;

        let departures = convert_board(&board)?;
        debug!(stop = %query.stop, count = departures.len(), "Fetched departure board");
        Ok(departures)
    }
}

impl BoardSource for PtvClient {
    async fn fetch_board(&self, query: &BoardQuery) -> Result<Vec<Departure>, FeedError> {
        self.get_departures(query).await
    }
}
