//! Session service
//!
//! Handles listing and creating brainstorm sessions and collecting ideas
//! into them. Requests are validated before the repository is consulted.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::app::requests::{NewIdeaRequest, NewSessionRequest};
use crate::app::views::{IdeaView, SessionSummaryView};
use crate::domain::entities::{BrainstormSession, NewBrainstormSession, SessionId};
use crate::domain::ports::BrainstormSessionRepository;
use crate::domain::validation::Validate;
use crate::error::DomainError;

/// Service for managing brainstorm sessions and their ideas
pub struct SessionService<SR>
where
    SR: BrainstormSessionRepository,
{
    sessions: Arc<SR>,
    /// Serializes writes so a read-modify-write of one session cannot
    /// interleave with another
    write_lock: Mutex<()>,
}

impl<SR> SessionService<SR>
where
    SR: BrainstormSessionRepository,
{
    pub fn new(sessions: Arc<SR>) -> Self {
        Self {
            sessions,
            write_lock: Mutex::new(()),
        }
    }

    /// List every session as a summary, in insertion order
    pub async fn list_sessions(&self) -> Result<Vec<SessionSummaryView>, DomainError> {
        let sessions = self.sessions.list().await?;
        tracing::debug!(count = sessions.len(), "Listed sessions");
        Ok(sessions.iter().map(SessionSummaryView::from).collect())
    }

    /// Fetch a single session with its ideas
    pub async fn get_session(&self, id: SessionId) -> Result<BrainstormSession, DomainError> {
        self.find_session(id).await
    }

    /// Create a new session stamped with the current time
    pub async fn create_session(
        &self,
        request: &NewSessionRequest,
    ) -> Result<BrainstormSession, DomainError> {
        request.validate()?;
        // Presence was checked by the validator
        let name = request.session_name.clone().unwrap_or_default();

        let _guard = self.write_lock.lock().await;
        let session = self
            .sessions
            .add(NewBrainstormSession::new(name, Utc::now()))
            .await?;

        tracing::info!(session_id = %session.id, name = %session.name, "Created session");
        Ok(session)
    }

    /// List the ideas of a session in the order they were added
    pub async fn list_ideas(&self, session_id: SessionId) -> Result<Vec<IdeaView>, DomainError> {
        let session = self.find_session(session_id).await?;
        tracing::debug!(session_id = %session_id, count = session.idea_count(), "Listed ideas");
        Ok(session.ideas.iter().map(IdeaView::from).collect())
    }

    /// Append an idea to a session and return the updated session.
    ///
    /// Validation runs first, so an invalid request fails the same way
    /// whether or not the session exists.
    pub async fn add_idea(&self, request: &NewIdeaRequest) -> Result<BrainstormSession, DomainError> {
        request.validate()?;
        // Presence was checked by the validator
        let session_id = SessionId(request.session_id.unwrap_or_default());
        let name = request.name.clone().unwrap_or_default();

        // Fetch inside the critical section so the update sees every
        // earlier write
        let _guard = self.write_lock.lock().await;
        let mut session = self.find_session(session_id).await?;
        let idea_id = session.add_idea(name, request.description.clone(), Utc::now());
        self.sessions.update(&session).await?;

        tracing::info!(session_id = %session_id, idea_id = %idea_id, "Added idea");
        Ok(session)
    }

    async fn find_session(&self, id: SessionId) -> Result<BrainstormSession, DomainError> {
        match self.sessions.get_by_id(id).await? {
            Some(session) => Ok(session),
            None => {
                tracing::warn!(session_id = %id, "Session not found");
                Err(DomainError::SessionNotFound(id))
            }
        }
    }
}
