//! Types produced by the separation search.

use serde::{Deserialize, Serialize};

/// Roles of the two entities joined by one collaboration hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePair {
    /// Role of the entity nearer the source.
    pub left: String,
    /// Role of the entity nearer the target.
    pub right: String,
}

impl RolePair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Raw outcome of a successful search.
///
/// `steps` alternates entity identifier and collaboration name, starting and
/// ending with an entity: `[source, collaboration, entity, …, target]`.
/// `roles` holds one pair per hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPath {
    pub steps: Vec<String>,
    pub roles: Vec<RolePair>,
}

impl SearchPath {
    /// A zero-hop path consisting of the entity alone.
    pub fn origin(entity: &str) -> Self {
        Self {
            steps: vec![entity.to_string()],
            roles: Vec::new(),
        }
    }

    /// Number of collaboration hops in the path.
    pub fn degree(&self) -> usize {
        self.steps.len().saturating_sub(1) / 2
    }
}

/// One hop of a separation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationHop {
    /// 1-based position of the hop in the chain.
    pub number: usize,
    /// Name of the collaboration joining the two entities.
    pub collaboration: String,
    /// Entity nearer the source.
    pub left: String,
    /// Role of `left` in the collaboration.
    pub left_role: String,
    /// Entity nearer the target.
    pub right: String,
    /// Role of `right` in the collaboration.
    pub right_role: String,
}

/// Human-oriented result of a separation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separation {
    /// Number of collaboration hops between source and target.
    pub degree: usize,
    pub hops: Vec<SeparationHop>,
}
