//! In-memory adapter for BrainstormSessionRepository

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{BrainstormSession, NewBrainstormSession, SessionId};
use crate::domain::ports::BrainstormSessionRepository;
use crate::error::DomainError;

#[derive(Default)]
struct Store {
    /// Kept in insertion order
    sessions: Vec<BrainstormSession>,
    /// Last id handed out; ids are never reused
    last_id: i64,
}

/// Process-local implementation of BrainstormSessionRepository
#[derive(Default)]
pub struct InMemoryBrainstormSessionRepository {
    store: RwLock<Store>,
}

impl InMemoryBrainstormSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository holding the given sessions with their ids as-is.
    ///
    /// Later `add` calls continue after the largest id seen.
    pub fn with_sessions(sessions: impl IntoIterator<Item = BrainstormSession>) -> Self {
        let sessions: Vec<_> = sessions.into_iter().collect();
        let last_id = sessions.iter().map(|s| s.id.0).max().unwrap_or(0);
        Self {
            store: RwLock::new(Store { sessions, last_id }),
        }
    }

    /// Repository preloaded with a single demo session holding two ideas
    pub fn with_sample_data() -> Self {
        let created = Utc
            .with_ymd_and_hms(2016, 8, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let mut session =
            NewBrainstormSession::new("Test Session 1", created).into_session(SessionId(1));
        session.add_idea(
            "Awesome idea".to_string(),
            Some("Totally awesome idea".to_string()),
            created,
        );
        session.add_idea(
            "Another idea".to_string(),
            Some("Another great idea".to_string()),
            created,
        );
        Self::with_sessions(vec![session])
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.store.read().await.sessions.len()
    }
}

#[async_trait]
impl BrainstormSessionRepository for InMemoryBrainstormSessionRepository {
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        let store = self.store.read().await;
        Ok(store.sessions.clone())
    }

    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        let store = self.store.read().await;
        Ok(store.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn add(&self, session: NewBrainstormSession) -> Result<BrainstormSession, DomainError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let stored = session.into_session(SessionId(store.last_id));
        store.sessions.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.sessions.iter_mut().find(|s| s.id == session.id) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(DomainError::SessionNotFound(session.id)),
        }
    }
}
