//! Domain error types for separation searches.

use thiserror::Error;

/// Errors returned by a data provider when a record cannot be produced.
///
/// These never reach the caller of a search: the frontier treats every
/// fetch failure as a dead branch and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// No record exists for the identifier.
    #[error("record not found: {id}")]
    NotFound { id: String },

    /// Network or backend failure.
    #[error("transport error fetching {id}: {message}")]
    Transport { id: String, message: String },

    /// The record exists but does not have the expected shape.
    #[error("failed to decode record {id}: {message}")]
    Decode { id: String, message: String },

    /// The fetch did not complete within the per-fetch timeout.
    #[error("fetch of {id} timed out after {duration_ms}ms")]
    Timeout { id: String, duration_ms: u64 },
}

/// Result type for data provider operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors surfaced to the caller of a separation search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The reachable graph was exhausted without meeting the target.
    #[error("no connection found between {source_id} and {target_id}")]
    NoConnection { source_id: String, target_id: String },

    /// The target was not found within the configured number of hops.
    #[error("depth limit exceeded (max: {max_depth})")]
    DepthLimitExceeded { max_depth: u32 },

    /// Too many entities were expanded before the target was found.
    #[error("expansion limit exceeded (max: {max_expanded} nodes)")]
    ExpansionLimitExceeded { max_expanded: usize },

    /// The search did not finish within its deadline.
    #[error("timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// A path handed to the reconstructor does not alternate entity/collaboration.
    #[error("malformed path: {message}")]
    MalformedPath { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
