//! Prometheus metrics for the degrees binary.
//!
//! The search and the expansion cache emit counters through the `metrics`
//! facade. This module installs a Prometheus recorder to collect them; the
//! binary can dump the collected values after a search with `--metrics`.
//!
//! # Metrics Collected
//!
//! - `degrees_searches_total` - Searches started (self-queries excluded)
//! - `degrees_cache_hits_total` - Expansion cache hits
//! - `degrees_cache_misses_total` - Expansion cache misses
//! - `degrees_fetch_failures_total` - Failed data provider fetches

use degrees_domain::cache::register_cache_metrics;
use degrees_domain::search::register_search_metrics;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Handle for rendering collected metrics.
#[derive(Clone)]
pub struct MetricsState {
    handle: PrometheusHandle,
}

impl MetricsState {
    pub fn new(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// Renders the current metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Error type for metrics initialization.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("failed to install Prometheus recorder: recorder already installed")]
    AlreadyInstalled,
}

/// Installs the global Prometheus recorder and describes the degrees metrics.
///
/// # Errors
///
/// Returns an error if a recorder is already installed.
pub fn init_metrics() -> Result<MetricsState, MetricsError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|_| MetricsError::AlreadyInstalled)?;

    register_metrics();

    Ok(MetricsState::new(handle))
}

/// Describes every counter the search and the cache emit.
pub(crate) fn register_metrics() {
    register_cache_metrics();
    register_search_metrics();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use degrees_storage::MemoryRecordStore;
    use serde_json::json;

    use crate::config::AppConfig;
    use crate::query::build_finder;

    fn counter_value(rendered: &str, name: &str) -> Option<u64> {
        rendered
            .lines()
            .filter(|line| !line.starts_with('#'))
            .find_map(|line| {
                let (metric, value) = line.rsplit_once(' ')?;
                (metric == name).then(|| value.parse().ok()).flatten()
            })
    }

    fn store() -> Arc<MemoryRecordStore> {
        let store = MemoryRecordStore::new_shared();
        for record in [
            json!({"url": "a", "movies": [{"url": "m1", "name": "M1", "role": "Actor"}]}),
            json!({"url": "b", "movies": [{"url": "m1", "name": "M1", "role": "Actor"}]}),
            json!({
                "url": "m1",
                "name": "M1",
                "cast": [
                    {"url": "a", "name": "A", "role": "Actor"},
                    {"url": "b", "name": "B", "role": "Actor"}
                ]
            }),
        ] {
            store.insert_record(record).unwrap();
        }
        store
    }

    /// Test: Search and cache counters reach the recorder
    #[test]
    fn test_search_and_cache_counters_are_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = MetricsState::new(recorder.handle());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let finder = build_finder(store(), &AppConfig::default());

        ::metrics::with_local_recorder(&recorder, || {
            register_metrics();
            runtime.block_on(async {
                finder.shortest_path("a", "b").await.unwrap();
                finder.shortest_path("a", "b").await.unwrap();
                let _ = finder.shortest_path("a", "nobody").await;
            });
        });

        let rendered = state.render();
        assert_eq!(counter_value(&rendered, "degrees_searches_total"), Some(3));
        // a and m1 are fetched once, then served from the cache.
        assert_eq!(counter_value(&rendered, "degrees_cache_misses_total"), Some(3));
        assert!(counter_value(&rendered, "degrees_cache_hits_total").unwrap_or(0) >= 3);
        assert!(rendered.contains("# HELP degrees_searches_total"));
    }

    /// Test: Failed fetches are counted
    #[test]
    fn test_fetch_failures_are_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = MetricsState::new(recorder.handle());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let finder = build_finder(MemoryRecordStore::new_shared(), &AppConfig::default());

        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                let _ = finder.shortest_path("ghost", "b").await;
            });
        });

        assert_eq!(
            counter_value(&state.render(), "degrees_fetch_failures_total"),
            Some(1)
        );
    }
}
