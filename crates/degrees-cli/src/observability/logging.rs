//! Structured logging for the degrees binary.
//!
//! Logs are written to stderr, either as compact text or as one JSON object
//! per line:
//!
//! ```json
//! {"timestamp":"...","level":"INFO","target":"degrees_domain::search::finder","fields":{"message":"connection found","degree":2}}
//! ```
//!
//! `RUST_LOG` takes precedence over the configured level.

use std::str::FromStr;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingSettings;

/// Output format and verbosity of the log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One JSON object per line instead of compact text
    pub json_format: bool,
    /// Level used when RUST_LOG is not set
    pub default_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            default_level: Level::WARN,
        }
    }
}

impl From<&LoggingSettings> for LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            json_format: settings.json,
            // Levels are validated on load.
            default_level: Level::from_str(&settings.level).unwrap_or(Level::WARN),
        }
    }
}

impl LoggingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_level.to_string()))
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    let _ = tracing_subscriber::registry()
        .with(config.filter())
        .with(output_layer(config.json_format, std::io::stderr))
        .try_init();
}

/// Formatting layer writing to `writer` in the chosen format.
fn output_layer<S, W>(json: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(true)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .boxed()
    }
}
