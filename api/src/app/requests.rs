//! Inbound request DTOs
//!
//! Fields are optional so that missing or null values reach the validator
//! and come back as field errors instead of deserialization failures.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldRule, Rule, Validate, ValueKind};

pub const MAX_SESSION_NAME_LENGTH: usize = 100;
pub const MAX_IDEA_NAME_LENGTH: usize = 100;
pub const MAX_IDEA_DESCRIPTION_LENGTH: usize = 1000;

/// Request to start a new brainstorm session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionRequest {
    #[serde(default)]
    pub session_name: Option<String>,
}

#[cfg(test)]
impl NewSessionRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            session_name: Some(name.into()),
        }
    }
}

impl Validate for NewSessionRequest {
    const RULES: &'static [FieldRule] = &[FieldRule {
        field: "sessionName",
        rules: &[
            Rule::Required,
            Rule::Kind(ValueKind::String),
            Rule::MaxLength(MAX_SESSION_NAME_LENGTH),
        ],
    }];
}

/// Request to add an idea to an existing session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdeaRequest {
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
impl NewIdeaRequest {
    pub fn new(session_id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id),
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}

impl Validate for NewIdeaRequest {
    const RULES: &'static [FieldRule] = &[
        FieldRule {
            field: "sessionId",
            rules: &[Rule::Required, Rule::Kind(ValueKind::Integer)],
        },
        FieldRule {
            field: "name",
            rules: &[
                Rule::Required,
                Rule::Kind(ValueKind::String),
                Rule::MaxLength(MAX_IDEA_NAME_LENGTH),
            ],
        },
        FieldRule {
            field: "description",
            rules: &[
                Rule::Kind(ValueKind::String),
                Rule::MaxLength(MAX_IDEA_DESCRIPTION_LENGTH),
            ],
        },
    ];
}
