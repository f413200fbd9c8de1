//! Traits for the data source consulted by the search.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::model::{Collaboration, Person};

/// Source of person and collaboration records.
///
/// Implementations may be remote; the search calls them lazily and only
/// through the expansion cache.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the person with the given identifier.
    async fn fetch_person(&self, id: &str) -> FetchResult<Person>;

    /// Fetches the collaboration with the given identifier.
    async fn fetch_collaboration(&self, id: &str) -> FetchResult<Collaboration>;
}
