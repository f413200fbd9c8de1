//! Records discovered while walking the collaboration graph.

mod types;

pub use types::{Collaboration, CollaborationRef, Participant, Person, DEFAULT_ROLE};
