//! degrees-domain: Core search logic for degrees of separation
//!
//! This crate contains the lazy-graph search engine:
//! - Person and collaboration records
//! - Expansion cache memoizing data provider lookups
//! - Breadth-first frontier search with depth, expansion and time bounds
//! - Path and role reconstruction
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               degrees-domain                 │
//! ├─────────────────────────────────────────────┤
//! │  model/   - Person & collaboration records  │
//! │  cache/   - Expansion cache                 │
//! │  search/  - Frontier search engine          │
//! └─────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod error;
pub mod model;
pub mod search;

// Re-export commonly used types at the crate root
pub use cache::{CacheMetricsSnapshot, ExpansionCache};
pub use error::{DomainError, DomainResult, FetchError, FetchResult};
pub use search::{DataProvider, SearchConfig, Separation, SeparationFinder};
