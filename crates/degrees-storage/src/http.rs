//! HTTP record store for a Moviebuff-style JSON API.
//!
//! Every record is served at `GET {base_url}/{id}`. A `404` maps to
//! [`StorageError::NotFound`]; any other non-success status, and any network
//! failure, maps to [`StorageError::Transport`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{StorageError, StorageResult};
use crate::traits::{validate_record_id, RecordStore};

/// Default base URL of the public data source.
pub const DEFAULT_BASE_URL: &str = "https://data.moviebuff.com";

/// Configuration for the HTTP record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStoreConfig {
    /// Base URL records are resolved against.
    pub base_url: String,
    /// Timeout for a single request, including reading the body.
    pub request_timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl HttpStoreConfig {
    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

/// HTTP implementation of RecordStore.
///
/// Holds one `reqwest::Client`, so connections are pooled across fetches.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecordStore {
    /// Creates a store from configuration.
    pub fn from_config(config: &HttpStoreConfig) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("degrees/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StorageError::Transport {
                id: String::new(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the URL a record is fetched from.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    #[instrument(skip(self))]
    async fn fetch_record(&self, id: &str) -> StorageResult<Value> {
        validate_record_id(id)?;
        let url = self.record_url(id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StorageError::Transport {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(%url, %status, "record response");

        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            return Err(StorageError::Transport {
                id: id.to_string(),
                message: format!("unexpected status {status}"),
            });
        }

        // A body that stalls or breaks off is a transport failure, not bad JSON.
        let body = response.bytes().await.map_err(|e| StorageError::Transport {
            id: id.to_string(),
            message: format!("failed to read body: {e}"),
        })?;

        serde_json::from_slice(&body).map_err(|e| StorageError::InvalidResponse {
            id: id.to_string(),
            message: e.to_string(),
        })
    }
}
