//! degrees-storage: Record store layer
//!
//! This crate provides raw record access for the separation search:
//! - RecordStore trait for fetching JSON records by identifier
//! - HTTP implementation for a Moviebuff-style JSON API
//! - In-memory implementation for tests and offline fixtures
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              degrees-storage                 │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs - RecordStore trait definition   │
//! │  http.rs   - HTTP implementation            │
//! │  memory.rs - In-memory implementation       │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use http::{HttpRecordStore, HttpStoreConfig};
pub use memory::MemoryRecordStore;
pub use traits::RecordStore;
