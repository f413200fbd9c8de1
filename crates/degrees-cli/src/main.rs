//! degrees binary
//!
//! Finds the shortest chain of shared movies between two people.
//!
//! # Usage
//!
//! ```bash
//! # Against the public API
//! degrees amitabh-bachchan robert-de-niro
//!
//! # Against a local fixture
//! degrees --backend memory --fixture demos/fixture.json a c
//!
//! # With a config file and environment overrides
//! DEGREES_SEARCH__MAX_DEPTH=4 degrees --config degrees.yaml a c
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};

use degrees_cli::config::{AppConfig, Overrides};
use degrees_cli::observability::{init_logging, init_metrics, LoggingConfig};
use degrees_cli::report::{render_json, render_text};
use degrees_cli::{build_finder, validate_identifiers, ConfiguredStore};

/// degrees - degrees of separation between two people
#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Record backend: "http" or "memory"
    #[arg(long)]
    backend: Option<String>,

    /// JSON fixture file for the memory backend
    #[arg(long)]
    fixture: Option<String>,

    /// Base URL of the JSON API
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of hops to search
    #[arg(long)]
    max_depth: Option<u32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Dump collected metrics (Prometheus text format) to stderr after the search
    #[arg(long)]
    metrics: bool,

    /// Source person identifier
    source: String,

    /// Target person identifier
    target: String,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            backend: self.backend.clone(),
            fixture_path: self.fixture.clone(),
            base_url: self.base_url.clone(),
            max_depth: self.max_depth,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    validate_identifiers(&args.source, &args.target)?;

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::from_env()?,
    };
    config.apply_overrides(&args.overrides())?;

    init_logging(&LoggingConfig::from(&config.logging));
    let metrics_state = match init_metrics() {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(error = %e, "metrics disabled");
            None
        }
    };

    let store = Arc::new(ConfiguredStore::from_config(&config)?);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = store.backend(),
        "starting search"
    );

    let finder = build_finder(store, &config);
    let result = finder.shortest_path(&args.source, &args.target).await;

    let cache = finder.cache().metrics();
    info!(
        hits = cache.hits,
        misses = cache.misses,
        fetches = cache.fetches,
        failures = cache.failures,
        "cache statistics"
    );
    if args.metrics {
        if let Some(state) = &metrics_state {
            eprint!("{}", state.render());
        }
    }

    let separation = result.map_err(|e| {
        error!(error = %e, "search failed");
        e
    })?;

    if args.json {
        println!("{}", render_json(&separation)?);
    } else {
        print!("{}", render_text(&separation));
    }

    Ok(())
}
