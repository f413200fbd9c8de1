//! Configuration for the separation search.

use std::time::Duration;

/// Configuration for the separation search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of collaboration hops between source and target.
    pub max_depth: u32,
    /// Maximum number of entities expanded by a single search.
    pub max_expanded_nodes: usize,
    /// Deadline for a whole search.
    pub timeout: Duration,
    /// Maximum number of collaboration fetches in flight per expanded entity.
    pub concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_expanded_nodes: 100_000,
            timeout: Duration::from_secs(300),
            concurrency: 8,
        }
    }
}

impl SearchConfig {
    /// Sets the maximum number of hops.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of expanded entities.
    pub fn with_max_expanded_nodes(mut self, max_expanded_nodes: usize) -> Self {
        self.max_expanded_nodes = max_expanded_nodes;
        self
    }

    /// Sets the search deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the fetch concurrency (values below 1 are treated as 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
