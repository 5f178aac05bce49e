//! Brainstorm session domain entity
//!
//! A session owns an ordered list of ideas. Sessions are created through the
//! session service and only ever mutated by appending ideas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::idea::{Idea, IdeaId};

/// Unique identifier for a brainstorm session, assigned by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub i64);

impl From<i64> for SessionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A brainstorming session and the ideas collected in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrainstormSession {
    pub id: SessionId,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Number of ideas in the session
    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Next free idea id within this session.
    ///
    /// Ids start at 1 and are never reused, so this is one past the
    /// largest id present rather than the length of the list.
    pub fn next_idea_id(&self) -> IdeaId {
        let max = self.ideas.iter().map(|i| i.id.0).max().unwrap_or(0);
        IdeaId(max + 1)
    }

    /// Append a new idea and return its id
    pub fn add_idea(
        &mut self,
        name: String,
        description: Option<String>,
        date_created: DateTime<Utc>,
    ) -> IdeaId {
        let id = self.next_idea_id();
        self.ideas.push(Idea {
            id,
            name,
            description,
            date_created,
        });
        id
    }
}

/// Data needed to store a new session. The repository assigns the id.
#[derive(Debug, Clone)]
pub struct NewBrainstormSession {
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub ideas: Vec<Idea>,
}

impl NewBrainstormSession {
    pub fn new(name: impl Into<String>, date_created: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            date_created,
            ideas: Vec::new(),
        }
    }

    /// Attach a stored session id, producing the full entity
    pub fn into_session(self, id: SessionId) -> BrainstormSession {
        BrainstormSession {
            id,
            name: self.name,
            date_created: self.date_created,
            ideas: self.ideas,
        }
    }
}
