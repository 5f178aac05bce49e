//! Idea handlers
//!
//! JSON endpoints for reading and adding the ideas of a session.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::app::{IdeaView, NewIdeaRequest, SessionView};
use crate::domain::entities::SessionId;
use crate::domain::validation::Validate;
use crate::error::AppError;
use crate::AppState;

/// GET /ideas/forSession/:session_id
///
/// List the ideas of a session in insertion order.
pub async fn list_ideas_for_session(
    State(state): State<AppState>,
    session_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<IdeaView>>, AppError> {
    let Path(session_id) = session_id?;
    let ideas = state
        .session_service
        .list_ideas(SessionId(session_id))
        .await?;
    Ok(Json(ideas))
}

/// POST /ideas/create
///
/// Add an idea to a session and return the whole updated session.
pub async fn create_idea(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<SessionView>, AppError> {
    let Json(record) = payload?;
    let request = NewIdeaRequest::from_record(record)?;

    let session = state.session_service.add_idea(&request).await?;

    Ok(Json(SessionView::from(&session)))
}
