//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{BrainstormSession, Idea, IdeaId, SessionId};

/// Create a test session with no ideas
pub fn test_session(id: i64) -> BrainstormSession {
    BrainstormSession {
        id: SessionId(id),
        name: format!("Test Session {}", id),
        date_created: Utc.with_ymd_and_hms(2016, 8, 1, 0, 0, 0).unwrap(),
        ideas: vec![],
    }
}

/// Create a test idea with the given id and name
pub fn test_idea(id: i64, name: &str) -> Idea {
    Idea {
        id: IdeaId(id),
        name: name.to_string(),
        description: Some(format!("Description of {}", name)),
        date_created: Utc.with_ymd_and_hms(2016, 8, 1, 12, 0, 0).unwrap(),
    }
}

/// Create a test session holding one idea per name, in order
pub fn test_session_with_ideas(id: i64, names: &[&str]) -> BrainstormSession {
    let mut session = test_session(id);
    session.ideas = names
        .iter()
        .enumerate()
        .map(|(i, name)| test_idea(i as i64 + 1, name))
        .collect();
    session
}

/// The two sessions "Test One" (2016-07-02) and "Test Two" (2016-07-01)
pub fn two_test_sessions() -> Vec<BrainstormSession> {
    vec![
        BrainstormSession {
            id: SessionId(1),
            name: "Test One".to_string(),
            date_created: Utc.with_ymd_and_hms(2016, 7, 2, 0, 0, 0).unwrap(),
            ideas: vec![],
        },
        BrainstormSession {
            id: SessionId(2),
            name: "Test Two".to_string(),
            date_created: Utc.with_ymd_and_hms(2016, 7, 1, 0, 0, 0).unwrap(),
            ideas: vec![],
        },
    ]
}
