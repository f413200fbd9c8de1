//! # degrees-cli
//!
//! Command-line front end for degrees-of-separation queries.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  degrees (binary)                            │
//! │  - argument parsing, config, logging         │
//! ├─────────────────────────────────────────────┤
//! │  adapters: RecordStore -> DataProvider       │
//! ├──────────────────────┬──────────────────────┤
//! │  degrees-domain      │  degrees-storage     │
//! │  search + cache      │  http / memory       │
//! └──────────────────────┴──────────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod observability;
pub mod query;
pub mod report;

pub use adapters::RecordStoreProvider;
pub use config::{AppConfig, ConfigLoadError};
pub use query::{build_finder, validate_identifiers, ConfiguredStore, QueryError};
