//! Mock implementations of port traits
//!
//! These wrap the in-memory adapters and count calls so tests can verify
//! which repository operations a service performed.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::InMemoryBrainstormSessionRepository;
use crate::domain::entities::{BrainstormSession, NewBrainstormSession, SessionId};
use crate::domain::ports::BrainstormSessionRepository;
use crate::error::DomainError;

// ============================================================================
// Recording Session Repository
// ============================================================================

#[derive(Default)]
pub struct RecordingSessionRepository {
    inner: InMemoryBrainstormSessionRepository,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    add_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl RecordingSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with sessions for testing
    pub fn with_sessions(sessions: Vec<BrainstormSession>) -> Self {
        Self {
            inner: InMemoryBrainstormSessionRepository::with_sessions(sessions),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrainstormSessionRepository for RecordingSessionRepository {
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }

    async fn add(&self, session: NewBrainstormSession) -> Result<BrainstormSession, DomainError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.add(session).await
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update(session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn counts_each_operation() {
        let repo = RecordingSessionRepository::new();

        let session = repo
            .add(NewBrainstormSession::new("Counted", Utc::now()))
            .await
            .unwrap();
        repo.get_by_id(session.id).await.unwrap();
        repo.update(&session).await.unwrap();
        repo.list().await.unwrap();
        repo.list().await.unwrap();

        assert_eq!(repo.add_calls(), 1);
        assert_eq!(repo.get_calls(), 1);
        assert_eq!(repo.update_calls(), 1);
        assert_eq!(repo.list_calls(), 2);
    }
}
