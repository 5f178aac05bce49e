//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{BrainstormSession, NewBrainstormSession, SessionId};
use crate::error::DomainError;

/// Repository for brainstorm sessions
///
/// Sessions own their ideas, so ideas are persisted by updating the session.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BrainstormSessionRepository: Send + Sync {
    /// List all sessions in insertion order
    async fn list(&self) -> Result<Vec<BrainstormSession>, DomainError>;

    /// Find a session by ID
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DomainError>;

    /// Store a new session under a freshly assigned id
    async fn add(&self, session: NewBrainstormSession) -> Result<BrainstormSession, DomainError>;

    /// Replace the stored session with the same id.
    ///
    /// Fails with `SessionNotFound` if no session has that id.
    async fn update(&self, session: &BrainstormSession) -> Result<(), DomainError>;
}
