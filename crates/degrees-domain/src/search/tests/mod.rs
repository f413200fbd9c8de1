//! Tests for the separation search.
//!
//! Organized by functionality:
//! - Shortest-path discovery and tie-breaking
//! - Cycles and disconnected graphs
//! - Partial failure tolerance
//! - Caching behavior
//! - Safety features (depth limits, expansion limits, timeouts)
//! - Path reconstruction properties


mod reconstruct_proptest;
