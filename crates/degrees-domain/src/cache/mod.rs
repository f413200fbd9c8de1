//! Expansion cache memoizing data provider lookups.
//!
//! Every person and collaboration fetched during a search is kept for the
//! lifetime of the cache instance, so repeated lookups of the same identifier
//! (within one search or across searches sharing the instance) reach the data
//! provider once.
//!
//! # Architecture
//!
//! The cache uses two Moka async caches, one per record kind:
//! - Unbounded and without TTL: records are treated as immutable for the
//!   lifetime of the process, so entries are never evicted or invalidated
//! - Concurrent misses for the same key are coalesced into a single
//!   provider call (`try_get_with`), so a hot entity is fetched once
//! - Failures are never stored; a later lookup retries the fetch
//!
//! # Example
//!
//! ```rust,ignore
//! use degrees_domain::cache::ExpansionCache;
//! use std::sync::Arc;
//!
//! let cache = ExpansionCache::new(Arc::new(provider));
//! let person = cache.resolve_person("amitabh-bachchan").await?;
//! assert_eq!(cache.metrics().fetches, 1);
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::time::timeout;

use crate::error::{FetchError, FetchResult};
use crate::model::{Collaboration, Person};
use crate::search::DataProvider;

/// Counters for cache effectiveness.
#[derive(Debug, Default)]
struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
    failures: AtomicU64,
}

/// A point-in-time snapshot of cache metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found no cached value.
    pub misses: u64,
    /// Calls actually made to the data provider.
    pub fetches: u64,
    /// Provider calls that failed (including timeouts).
    pub failures: u64,
}

impl CacheMetricsSnapshot {
    /// Returns the hit ratio (hits / (hits + misses)), or 0.0 before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoizing front for a [`DataProvider`].
///
/// # Thread Safety
///
/// The cache can be shared across concurrent searches through an `Arc`
/// without external synchronization.
pub struct ExpansionCache<P> {
    provider: Arc<P>,
    persons: Cache<String, Arc<Person>>,
    collaborations: Cache<String, Arc<Collaboration>>,
    fetch_timeout: Option<Duration>,
    metrics: CacheMetrics,
}

impl<P> std::fmt::Debug for ExpansionCache<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpansionCache")
            .field("persons", &self.persons.entry_count())
            .field("collaborations", &self.collaborations.entry_count())
            .field("fetch_timeout", &self.fetch_timeout)
            .field("metrics", &self.metrics())
            .finish()
    }
}

impl<P> ExpansionCache<P> {
    /// Creates an empty cache in front of the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            persons: Cache::builder().build(),
            collaborations: Cache::builder().build(),
            fetch_timeout: None,
            metrics: CacheMetrics::default(),
        }
    }

    /// Bounds every provider call by the given timeout.
    ///
    /// A timed-out fetch fails with [`FetchError::Timeout`] and is not cached.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = Some(fetch_timeout);
        self
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// Returns a snapshot of the cache counters.
    pub fn metrics(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            fetches: self.metrics.fetches.load(Ordering::Relaxed),
            failures: self.metrics.failures.load(Ordering::Relaxed),
        }
    }

    /// Returns true if a person record is cached for the identifier.
    pub fn contains_person(&self, id: &str) -> bool {
        self.persons.contains_key(id)
    }

    /// Returns true if a collaboration record is cached for the identifier.
    pub fn contains_collaboration(&self, id: &str) -> bool {
        self.collaborations.contains_key(id)
    }
}

impl<P> ExpansionCache<P>
where
    P: DataProvider + 'static,
{
    /// Resolves a person, fetching it from the provider on a miss.
    pub async fn resolve_person(&self, id: &str) -> FetchResult<Arc<Person>> {
        if let Some(person) = self.persons.get(id).await {
            self.record_hit();
            return Ok(person);
        }
        self.record_miss();

        let fetch = self.provider.fetch_person(id);
        self.persons
            .try_get_with(id.to_string(), self.fetch(id, fetch))
            .await
            .map_err(|e| (*e).clone())
    }

    /// Resolves a collaboration, fetching it from the provider on a miss.
    pub async fn resolve_collaboration(&self, id: &str) -> FetchResult<Arc<Collaboration>> {
        if let Some(collaboration) = self.collaborations.get(id).await {
            self.record_hit();
            return Ok(collaboration);
        }
        self.record_miss();

        let fetch = self.provider.fetch_collaboration(id);
        self.collaborations
            .try_get_with(id.to_string(), self.fetch(id, fetch))
            .await
            .map_err(|e| (*e).clone())
    }

    /// Runs one provider call, applying the fetch timeout and counting the outcome.
    ///
    /// Only the coalesced leader of a miss runs this future.
    async fn fetch<T, F>(&self, id: &str, fetch: F) -> FetchResult<Arc<T>>
    where
        F: Future<Output = FetchResult<T>>,
    {
        self.metrics.fetches.fetch_add(1, Ordering::Relaxed);

        let result = match self.fetch_timeout {
            Some(limit) => match timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout {
                    id: id.to_string(),
                    duration_ms: limit.as_millis() as u64,
                }),
            },
            None => fetch.await,
        };

        if result.is_err() {
            self.metrics.failures.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("degrees_fetch_failures_total").increment(1);
        }

        result.map(Arc::new)
    }

    fn record_hit(&self) {
        self.metrics.hits.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("degrees_cache_hits_total").increment(1);
    }

    fn record_miss(&self) {
        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("degrees_cache_misses_total").increment(1);
    }
}

/// Registers expansion cache metric descriptions.
///
/// Call once during application startup, after a metrics recorder is installed.
///
/// # Metrics Registered
///
/// - `degrees_cache_hits_total` - Lookups answered from the cache
/// - `degrees_cache_misses_total` - Lookups that had to go to the provider
/// - `degrees_fetch_failures_total` - Provider calls that failed
pub fn register_cache_metrics() {
    metrics::describe_counter!(
        "degrees_cache_hits_total",
        "Total number of expansion cache hits"
    );
    metrics::describe_counter!(
        "degrees_cache_misses_total",
        "Total number of expansion cache misses"
    );
    metrics::describe_counter!(
        "degrees_fetch_failures_total",
        "Total number of failed data provider fetches"
    );
}
