//! Internal frontier state for one search.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::model::Participant;

use super::types::{RolePair, SearchPath};

/// One hop of a path, linked back to the hop before it.
///
/// Nodes discovered through the same parent share that parent's trail, so
/// enqueuing a node costs one allocation instead of a copy of the whole path.
#[derive(Debug)]
pub(crate) struct Trail {
    parent: Option<Arc<Trail>>,
    left: String,
    collaboration: String,
    roles: RolePair,
    right: String,
}

/// A queued entity together with the way it was reached.
#[derive(Debug, Clone)]
pub(crate) struct FrontierNode {
    pub(crate) entity: String,
    /// Number of collaboration hops from the source.
    pub(crate) depth: u32,
    trail: Option<Arc<Trail>>,
}

impl FrontierNode {
    pub(crate) fn origin(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            depth: 0,
            trail: None,
        }
    }

    /// Returns the node reached by following `collaboration` to `participant`.
    pub(crate) fn extend(
        &self,
        collaboration: &str,
        left_role: &str,
        participant: &Participant,
    ) -> Self {
        let trail = Trail {
            parent: self.trail.clone(),
            left: self.entity.clone(),
            collaboration: collaboration.to_string(),
            roles: RolePair::new(left_role, participant.role.as_str()),
            right: participant.id.clone(),
        };
        Self {
            entity: participant.id.clone(),
            depth: self.depth + 1,
            trail: Some(Arc::new(trail)),
        }
    }

    /// Rebuilds the full alternating path from the source to this node.
    pub(crate) fn to_path(&self) -> SearchPath {
        let mut hops = Vec::with_capacity(self.depth as usize);
        let mut cursor = self.trail.as_deref();
        while let Some(hop) = cursor {
            hops.push(hop);
            cursor = hop.parent.as_deref();
        }
        hops.reverse();

        let Some(first) = hops.first() else {
            return SearchPath::origin(&self.entity);
        };

        let mut steps = Vec::with_capacity(hops.len() * 2 + 1);
        steps.push(first.left.clone());
        let mut roles = Vec::with_capacity(hops.len());
        for hop in hops {
            steps.push(hop.collaboration.clone());
            steps.push(hop.right.clone());
            roles.push(hop.roles.clone());
        }
        SearchPath { steps, roles }
    }
}

/// FIFO queue of nodes plus the set of entities already enqueued.
#[derive(Debug)]
pub(crate) struct Frontier {
    queue: VecDeque<FrontierNode>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the source, marked as visited.
    pub(crate) fn new(source: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(source.to_string());
        Self {
            queue: VecDeque::from([FrontierNode::origin(source)]),
            visited,
        }
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierNode> {
        self.queue.pop_front()
    }

    /// Enqueues `node` unless its entity was seen before. Returns true if enqueued.
    pub(crate) fn push_unvisited(&mut self, node: FrontierNode) -> bool {
        if !self.visited.insert(node.entity.clone()) {
            return false;
        }
        self.queue.push_back(node);
        true
    }

    /// Returns true if `entity` was already enqueued in this search.
    pub(crate) fn is_visited(&self, entity: &str) -> bool {
        self.visited.contains(entity)
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
