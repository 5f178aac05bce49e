//! Response views
//!
//! Output-facing projections of domain records. Handlers only ever
//! serialize these, never the entities themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{BrainstormSession, Idea};

/// One row of the session list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryView {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub idea_count: usize,
}

/// A single idea
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// A session with all of its ideas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub ideas: Vec<IdeaView>,
}

impl From<&BrainstormSession> for SessionSummaryView {
    fn from(session: &BrainstormSession) -> Self {
        Self {
            id: session.id.0,
            name: session.name.clone(),
            date_created: session.date_created,
            idea_count: session.idea_count(),
        }
    }
}

impl From<&Idea> for IdeaView {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id.0,
            name: idea.name.clone(),
            description: idea.description.clone(),
            date_created: idea.date_created,
        }
    }
}

impl From<&BrainstormSession> for SessionView {
    fn from(session: &BrainstormSession) -> Self {
        Self {
            id: session.id.0,
            name: session.name.clone(),
            date_created: session.date_created,
            ideas: session.ideas.iter().map(IdeaView::from).collect(),
        }
    }
}
