//! Adapters that bridge the storage layer to the domain layer.
//!
//! The domain layer (degrees-domain) defines `DataProvider`, which hands out
//! typed `Person` and `Collaboration` records. The storage layer
//! (degrees-storage) implements `RecordStore`, which returns raw JSON.
//!
//! `RecordStoreProvider` decodes the JSON and translates storage errors into
//! fetch errors so the search never sees a storage type.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use degrees_domain::model::{Collaboration, Person};
use degrees_domain::{DataProvider, FetchError, FetchResult};
use degrees_storage::{RecordStore, StorageError};

/// Adapter that implements `DataProvider` using a `RecordStore`.
pub struct RecordStoreProvider<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> RecordStoreProvider<S> {
    /// Creates a new adapter wrapping the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, id: &str) -> FetchResult<T> {
        let value = self
            .store
            .fetch_record(id)
            .await
            .map_err(|e| fetch_error(id, e))?;

        serde_json::from_value(value).map_err(|e| FetchError::Decode {
            id: id.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<S: RecordStore> DataProvider for RecordStoreProvider<S> {
    async fn fetch_person(&self, id: &str) -> FetchResult<Person> {
        self.fetch_typed(id).await
    }

    async fn fetch_collaboration(&self, id: &str) -> FetchResult<Collaboration> {
        self.fetch_typed(id).await
    }
}

/// Maps a storage error for `id` onto the domain's fetch error.
fn fetch_error(id: &str, err: StorageError) -> FetchError {
    match err {
        StorageError::NotFound { .. } | StorageError::InvalidId { .. } => {
            FetchError::NotFound { id: id.to_string() }
        }
        StorageError::InvalidResponse { message, .. } => FetchError::Decode {
            id: id.to_string(),
            message,
        },
        other @ (StorageError::Transport { .. }
        | StorageError::InvalidFixture { .. }
        | StorageError::Io(_)) => FetchError::Transport {
            id: id.to_string(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_storage::MemoryRecordStore;
    use serde_json::json;

    fn store_with_sholay() -> Arc<MemoryRecordStore> {
        let store = MemoryRecordStore::new_shared();
        store
            .insert_record(json!({
                "url": "amitabh-bachchan",
                "type": "Person",
                "name": "Amitabh Bachchan",
                "movies": [{"url": "sholay", "name": "Sholay", "role": "Actor"}]
            }))
            .unwrap();
        store
            .insert_record(json!({
                "url": "sholay",
                "type": "Movie",
                "name": "Sholay",
                "cast": [{"url": "amitabh-bachchan", "name": "Amitabh Bachchan", "role": "Actor"}],
                "crew": [{"url": "ramesh-sippy", "name": "Ramesh Sippy", "role": "Director"}]
            }))
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_person_record_is_decoded() {
        let provider = RecordStoreProvider::new(store_with_sholay());

        let person = provider.fetch_person("amitabh-bachchan").await.unwrap();

        assert_eq!(person.name, "Amitabh Bachchan");
        assert_eq!(person.collaborations.len(), 1);
        assert_eq!(person.collaborations[0].id, "sholay");
    }

    #[tokio::test]
    async fn test_collaboration_record_is_decoded() {
        let provider = RecordStoreProvider::new(store_with_sholay());

        let movie = provider.fetch_collaboration("sholay").await.unwrap();

        assert_eq!(movie.name, "Sholay");
        assert_eq!(movie.role_of("ramesh-sippy"), Some("Director"));
    }

    #[tokio::test]
    async fn test_missing_record_maps_to_not_found() {
        let provider = RecordStoreProvider::new(store_with_sholay());

        let err = provider.fetch_person("nobody").await.unwrap_err();

        assert_eq!(
            err,
            FetchError::NotFound {
                id: "nobody".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_id_maps_to_not_found() {
        let provider = RecordStoreProvider::new(store_with_sholay());

        let err = provider.fetch_person("a/b").await.unwrap_err();

        assert!(matches!(err, FetchError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_maps_to_decode_error() {
        let store = MemoryRecordStore::new_shared();
        store
            .insert_record(json!({"url": "odd", "movies": "not a list"}))
            .unwrap();
        let provider = RecordStoreProvider::new(store);

        let err = provider.fetch_person("odd").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode { ref id, .. } if id == "odd"));
    }

    #[test]
    fn test_storage_errors_map_to_fetch_errors() {
        let transport = fetch_error(
            "x",
            StorageError::Transport {
                id: "x".to_string(),
                message: "connection reset".to_string(),
            },
        );
        assert!(matches!(
            transport,
            FetchError::Transport { ref message, .. } if message.contains("connection reset")
        ));

        let decode = fetch_error(
            "x",
            StorageError::InvalidResponse {
                id: "x".to_string(),
                message: "expected value".to_string(),
            },
        );
        assert_eq!(
            decode,
            FetchError::Decode {
                id: "x".to_string(),
                message: "expected value".to_string()
            }
        );
    }
}
