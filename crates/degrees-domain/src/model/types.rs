//! Person and collaboration records.
//!
//! Field names follow the JSON records served by the data source, so these
//! types deserialize directly from a fetched record.

use serde::{Deserialize, Serialize};

/// Role reported for an entity whose part in a collaboration is unknown.
pub const DEFAULT_ROLE: &str = "Actor";

/// A person: a node of the collaboration graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Lookup key of the person (e.g., "amitabh-bachchan").
    #[serde(rename = "url")]
    pub id: String,
    /// Record type label as reported by the data source (e.g., "Person").
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Role label, only meaningful inside a collaboration context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Collaborations this person took part in, in source order.
    #[serde(rename = "movies", default)]
    pub collaborations: Vec<CollaborationRef>,
}

impl Person {
    /// Creates a person with no collaborations.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "Person".to_string(),
            name: name.into(),
            role: None,
            collaborations: Vec::new(),
        }
    }

    /// Adds a collaboration reference.
    pub fn with_collaboration(mut self, collaboration: CollaborationRef) -> Self {
        self.collaborations.push(collaboration);
        self
    }
}

/// A collaboration as referenced from a person's filmography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationRef {
    /// Lookup key of the collaboration.
    #[serde(rename = "url")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// The referencing person's role in the collaboration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CollaborationRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.map(str::to_string),
        }
    }
}

/// A participant entry inside a collaboration's cast or crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "url")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Role played in this collaboration.
    #[serde(default)]
    pub role: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// A collaboration (e.g., a movie): a hyperedge connecting its participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    #[serde(rename = "url")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cast: Vec<Participant>,
    #[serde(default)]
    pub crew: Vec<Participant>,
}

impl Collaboration {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cast: Vec::new(),
            crew: Vec::new(),
        }
    }

    pub fn with_cast(mut self, participant: Participant) -> Self {
        self.cast.push(participant);
        self
    }

    pub fn with_crew(mut self, participant: Participant) -> Self {
        self.crew.push(participant);
        self
    }

    /// Iterates over all participants, cast first, then crew.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.cast.iter().chain(self.crew.iter())
    }

    /// Returns the role of the given participant, searching cast then crew.
    pub fn role_of(&self, participant_id: &str) -> Option<&str> {
        self.participants()
            .find(|p| p.id == participant_id)
            .map(|p| p.role.as_str())
            .filter(|role| !role.is_empty())
    }
}
