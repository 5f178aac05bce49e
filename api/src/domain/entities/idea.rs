//! Idea domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of an idea, unique within its owning session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(pub i64);

impl std::fmt::Display for IdeaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single brainstorming item. Immutable once added to a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Idea {
    pub id: IdeaId,
    pub name: String,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
}
