//! Record store trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{StorageError, StorageResult};

/// Source of raw JSON records keyed by identifier.
///
/// Persons and collaborations share one identifier namespace; decoding a
/// record into a typed shape is up to the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches the record stored under `id`.
    async fn fetch_record(&self, id: &str) -> StorageResult<Value>;
}

/// Validates a record identifier before it is used in a lookup.
///
/// Identifiers are single path segments: non-blank, not `.` or `..`, and
/// without `/`, `?` or `#`.
pub fn validate_record_id(id: &str) -> StorageResult<()> {
    if id.trim().is_empty() || matches!(id, "." | "..") || id.contains(['/', '?', '#']) {
        return Err(StorageError::InvalidId { id: id.to_string() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_identifiers_are_valid() {
        assert!(validate_record_id("amitabh-bachchan").is_ok());
        assert!(validate_record_id("sholay-1975").is_ok());
        assert!(validate_record_id("mr.-india").is_ok());
    }

    #[test]
    fn test_blank_and_path_like_identifiers_are_rejected() {
        for id in ["", "  ", ".", "..", "a/b", "a?b=1", "a#b"] {
            assert!(
                matches!(validate_record_id(id), Err(StorageError::InvalidId { .. })),
                "should reject {id:?}"
            );
        }
    }
}
