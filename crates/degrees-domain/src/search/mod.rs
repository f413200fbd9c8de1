//! Frontier search for degrees of separation.
//!
//! The search walks an implicit collaboration graph that is discovered one
//! record at a time through a [`DataProvider`].
//!
//! # Architecture Decisions
//!
//! - **Breadth-first order**: The frontier is a FIFO queue, so every entity at
//!   depth *k* is expanded before any entity at depth *k + 1*. The first path
//!   that reaches the target is therefore a shortest one.
//!
//! - **Dead branches**: A person or collaboration that cannot be fetched is
//!   skipped. One bad record never aborts the search.
//!
//! - **Parallel Expansion**: The collaborations of an expanded entity are
//!   fetched concurrently and slotted back by their position in the
//!   filmography, so tie-breaking stays deterministic.
//!
//! - **Bounds**: Maximum depth, maximum number of expanded entities and an
//!   overall deadline keep searches over very large graphs finite.

mod config;
mod context;
mod finder;
mod reconstruct;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::SearchConfig;
pub use finder::{register_search_metrics, SeparationFinder};
pub use traits::DataProvider;
pub use types::{RolePair, SearchPath, Separation, SeparationHop};
