//! Observability for the degrees binary.
//!
//! Logs go to stderr so that stdout only carries the report. Counters are
//! collected by a Prometheus recorder.

mod logging;
mod metrics;

pub use logging::{init_logging, LoggingConfig};
pub use metrics::{init_metrics, MetricsError, MetricsState};
