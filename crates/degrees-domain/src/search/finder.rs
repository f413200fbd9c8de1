//! Breadth-first separation search over a lazily fetched graph.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::cache::ExpansionCache;
use crate::error::{DomainError, DomainResult};
use crate::model::{Collaboration, Person, DEFAULT_ROLE};

use super::config::SearchConfig;
use super::context::Frontier;
use super::traits::DataProvider;
use super::types::{SearchPath, Separation};

/// Shortest-path search between two people.
///
/// The finder owns a shared [`ExpansionCache`]; searches issued through the
/// same finder (or through finders sharing the cache) reuse every record
/// fetched so far. Each search gets its own frontier and visited set.
pub struct SeparationFinder<P> {
    cache: Arc<ExpansionCache<P>>,
    config: SearchConfig,
}

impl<P> SeparationFinder<P>
where
    P: DataProvider + 'static,
{
    /// Creates a finder with a fresh cache and the default configuration.
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_config(provider, SearchConfig::default())
    }

    /// Creates a finder with a fresh cache and custom configuration.
    pub fn with_config(provider: Arc<P>, config: SearchConfig) -> Self {
        Self::with_cache(Arc::new(ExpansionCache::new(provider)), config)
    }

    /// Creates a finder on top of an existing cache.
    pub fn with_cache(cache: Arc<ExpansionCache<P>>, config: SearchConfig) -> Self {
        Self { cache, config }
    }

    /// Returns the expansion cache.
    pub fn cache(&self) -> &Arc<ExpansionCache<P>> {
        &self.cache
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds the shortest separation chain between two people.
    ///
    /// A query where source and target are the same identifier returns degree
    /// 0 with no hops, without consulting the data provider.
    pub async fn shortest_path(
        &self,
        source_id: &str,
        target_id: &str,
    ) -> DomainResult<Separation> {
        let path = self.find_path(source_id, target_id).await?;
        Separation::from_path(&path)
    }

    /// Finds the shortest alternating entity/collaboration path between two people.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NoConnection`] when the reachable graph is exhausted
    /// - [`DomainError::DepthLimitExceeded`] when only entities beyond
    ///   `max_depth` remained unexplored
    /// - [`DomainError::ExpansionLimitExceeded`] when more than
    ///   `max_expanded_nodes` entities would be expanded
    /// - [`DomainError::Timeout`] when the search deadline passes
    #[instrument(skip(self), fields(max_depth = self.config.max_depth))]
    pub async fn find_path(&self, source_id: &str, target_id: &str) -> DomainResult<SearchPath> {
        if source_id == target_id {
            debug!("source and target are the same entity");
            return Ok(SearchPath::origin(source_id));
        }

        metrics::counter!("degrees_searches_total").increment(1);
        let started = Instant::now();

        let result = match timeout(self.config.timeout, self.search(source_id, target_id)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::Timeout {
                duration_ms: self.config.timeout.as_millis() as u64,
            }),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(path) => info!(degree = path.degree(), elapsed_ms, "connection found"),
            Err(error) => info!(%error, elapsed_ms, "search ended without a connection"),
        }

        result
    }

    async fn search(&self, source_id: &str, target_id: &str) -> DomainResult<SearchPath> {
        let mut frontier = Frontier::new(source_id);
        let mut expanded = 0usize;
        let mut truncated = false;

        while let Some(node) = frontier.pop() {
            if node.depth >= self.config.max_depth {
                truncated = true;
                continue;
            }

            expanded += 1;
            if expanded > self.config.max_expanded_nodes {
                return Err(DomainError::ExpansionLimitExceeded {
                    max_expanded: self.config.max_expanded_nodes,
                });
            }

            let person = match self.cache.resolve_person(&node.entity).await {
                Ok(person) => person,
                Err(error) => {
                    warn!(entity = %node.entity, %error, "skipping unresolvable entity");
                    continue;
                }
            };

            debug!(
                entity = %node.entity,
                depth = node.depth,
                collaborations = person.collaborations.len(),
                queued = frontier.len(),
                "expanding entity"
            );

            let resolved = self.resolve_collaborations(&person).await;
            for (reference, collaboration) in person.collaborations.iter().zip(resolved) {
                let Some(collaboration) = collaboration else {
                    continue;
                };

                let left_role = reference
                    .role
                    .as_deref()
                    .filter(|role| !role.is_empty())
                    .or_else(|| collaboration.role_of(&node.entity))
                    .unwrap_or(DEFAULT_ROLE);

                if let Some(hit) = collaboration.participants().find(|p| p.id == target_id) {
                    debug!(
                        expanded,
                        visited = frontier.visited_count(),
                        "target reached"
                    );
                    return Ok(node.extend(&collaboration.name, left_role, hit).to_path());
                }

                for participant in collaboration.participants() {
                    if frontier.is_visited(&participant.id) {
                        continue;
                    }
                    let next = node.extend(&collaboration.name, left_role, participant);
                    frontier.push_unvisited(next);
                }
            }
        }

        if truncated {
            Err(DomainError::DepthLimitExceeded {
                max_depth: self.config.max_depth,
            })
        } else {
            Err(DomainError::NoConnection {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
            })
        }
    }

    /// Resolves every collaboration of `person` concurrently.
    ///
    /// Results land in slots matching the filmography order regardless of
    /// completion order; a failed fetch leaves its slot empty.
    async fn resolve_collaborations(&self, person: &Person) -> Vec<Option<Arc<Collaboration>>> {
        let mut slots: Vec<Option<Arc<Collaboration>>> = vec![None; person.collaborations.len()];

        let cache = &self.cache;
        let pending: Vec<_> = person
            .collaborations
            .iter()
            .enumerate()
            .map(|(index, reference)| async move {
                (index, cache.resolve_collaboration(&reference.id).await)
            })
            .collect();

        let mut fetches = stream::iter(pending).buffer_unordered(self.config.concurrency.max(1));

        while let Some((index, result)) = fetches.next().await {
            match result {
                Ok(collaboration) => slots[index] = Some(collaboration),
                Err(error) => {
                    warn!(
                        person = %person.id,
                        collaboration = %person.collaborations[index].id,
                        %error,
                        "skipping unresolvable collaboration"
                    );
                }
            }
        }

        slots
    }
}

/// Registers search metric descriptions.
///
/// # Metrics Registered
///
/// - `degrees_searches_total` - Number of searches started (self-queries excluded)
pub fn register_search_metrics() {
    metrics::describe_counter!(
        "degrees_searches_total",
        "Total number of separation searches started"
    );
}
