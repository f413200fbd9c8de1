//! In-memory record store for tests and offline fixtures.
//!
//! Records are kept in a `DashMap` keyed by their `url` field, the same key
//! the HTTP backend uses as a path segment.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::instrument;

use crate::error::{StorageError, StorageResult};
use crate::traits::{validate_record_id, RecordStore};

/// In-memory implementation of RecordStore.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: DashMap<String, Value>,
    fetches: AtomicU64,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in Arc.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Loads a fixture file: a JSON array of records, each carrying a string `url`.
    pub fn from_fixture<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let parsed: Value =
            serde_json::from_str(&contents).map_err(|e| StorageError::InvalidFixture {
                message: format!("{}: {}", path.as_ref().display(), e),
            })?;

        let Value::Array(records) = parsed else {
            return Err(StorageError::InvalidFixture {
                message: "fixture must be a JSON array of records".to_string(),
            });
        };

        let store = Self::new();
        for record in records {
            store.insert_record(record)?;
        }
        Ok(store)
    }

    /// Inserts a record under its `url` field, replacing any previous record.
    pub fn insert_record(&self, record: Value) -> StorageResult<()> {
        let id = record
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| StorageError::InvalidFixture {
                message: format!("record without a string \"url\" field: {record}"),
            })?
            .to_string();
        validate_record_id(&id)?;
        self.records.insert(id, record);
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of `fetch_record` calls served so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    #[instrument(skip(self))]
    async fn fetch_record(&self, id: &str) -> StorageResult<Value> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.records
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }
}
