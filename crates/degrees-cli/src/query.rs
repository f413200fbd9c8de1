//! Wiring of a store, the expansion cache and the finder for one query.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use degrees_domain::{ExpansionCache, SeparationFinder};
use degrees_storage::{
    HttpRecordStore, MemoryRecordStore, RecordStore, StorageError, StorageResult,
};

use crate::adapters::RecordStoreProvider;
use crate::config::AppConfig;

/// Error type for rejected query arguments and store setup.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("{which} identifier must not be empty")]
    EmptyIdentifier { which: &'static str },

    #[error("unknown backend: {backend}")]
    UnknownBackend { backend: String },

    #[error("memory backend requires a fixture path")]
    MissingFixture,

    #[error("failed to open record store: {0}")]
    Store(#[from] StorageError),
}

/// The record store selected by `provider.backend`.
#[derive(Debug)]
pub enum ConfiguredStore {
    Http(HttpRecordStore),
    Memory(MemoryRecordStore),
}

impl ConfiguredStore {
    /// Opens the configured backend; the memory backend loads its fixture eagerly.
    pub fn from_config(config: &AppConfig) -> Result<Self, QueryError> {
        match config.provider.backend.as_str() {
            "http" => Ok(Self::Http(HttpRecordStore::from_config(
                &config.http_store_config(),
            )?)),
            "memory" => {
                let path = config
                    .provider
                    .fixture_path
                    .as_deref()
                    .ok_or(QueryError::MissingFixture)?;
                Ok(Self::Memory(MemoryRecordStore::from_fixture(path)?))
            }
            other => Err(QueryError::UnknownBackend {
                backend: other.to_string(),
            }),
        }
    }

    /// Backend name as written in configuration.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl RecordStore for ConfiguredStore {
    async fn fetch_record(&self, id: &str) -> StorageResult<Value> {
        match self {
            Self::Http(store) => store.fetch_record(id).await,
            Self::Memory(store) => store.fetch_record(id).await,
        }
    }
}

/// Rejects empty or whitespace-only identifiers.
pub fn validate_identifiers(source: &str, target: &str) -> Result<(), QueryError> {
    if source.trim().is_empty() {
        return Err(QueryError::EmptyIdentifier { which: "source" });
    }
    if target.trim().is_empty() {
        return Err(QueryError::EmptyIdentifier { which: "target" });
    }
    Ok(())
}

/// Builds a finder over `store` with the configured limits and fetch timeout.
pub fn build_finder<S>(
    store: Arc<S>,
    config: &AppConfig,
) -> SeparationFinder<RecordStoreProvider<S>>
where
    S: RecordStore + 'static,
{
    let provider = Arc::new(RecordStoreProvider::new(store));
    let mut cache = ExpansionCache::new(provider);
    if let Some(fetch_timeout) = config.fetch_timeout() {
        cache = cache.with_fetch_timeout(fetch_timeout);
    }
    SeparationFinder::with_cache(Arc::new(cache), config.search_config())
}
