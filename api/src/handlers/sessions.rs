//! Session handlers
//!
//! Endpoints for listing, inspecting and creating brainstorm sessions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::{NewSessionRequest, SessionSummaryView, SessionView};
use crate::domain::entities::SessionId;
use crate::domain::validation::Validate;
use crate::error::AppError;
use crate::AppState;

/// Where clients are sent after creating a session
pub const SESSION_LIST_PATH: &str = "/sessions/list";

/// GET /sessions/list
///
/// List all sessions with their idea counts.
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummaryView>>, AppError> {
    let summaries = state.session_service.list_sessions().await?;
    Ok(Json(summaries))
}

/// GET /sessions/:id
///
/// Get a session with all of its ideas.
pub async fn get_session(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SessionView>, AppError> {
    let Path(id) = id?;
    let session = state.session_service.get_session(SessionId(id)).await?;
    Ok(Json(SessionView::from(&session)))
}

/// POST /sessions/create
///
/// Create a new session. Responds with a redirect to the session list and
/// the created session in the body.
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(record) = payload?;
    let request = NewSessionRequest::from_record(record)?;

    let session = state.session_service.create_session(&request).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, SESSION_LIST_PATH)],
        Json(SessionView::from(&session)),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::app::requests::MAX_SESSION_NAME_LENGTH;
    use crate::test_utils::{test_session_with_ideas, two_test_sessions};
    use crate::{build_router, AppState};

    fn server(state: AppState) -> TestServer {
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn list_returns_summaries() {
        let server = server(AppState::with_sessions(two_test_sessions()));

        let response = server.get("/sessions/list").await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["name"], "Test One");
        assert_eq!(body[0]["ideaCount"], 0);
        assert_eq!(body[1]["name"], "Test Two");
        assert_eq!(body[1]["ideaCount"], 0);
    }

    #[tokio::test]
    async fn list_is_empty_without_sessions() {
        let server = server(AppState::with_sessions(vec![]));

        let response = server.get("/sessions/list").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn get_returns_session_with_ideas() {
        let server = server(AppState::with_sessions(vec![test_session_with_ideas(
            123,
            &["One", "Two"],
        )]));

        let response = server.get("/sessions/123").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["id"], 123);
        assert_eq!(body["ideas"][0]["name"], "One");
        assert_eq!(body["ideas"][1]["name"], "Two");
    }

    #[tokio::test]
    async fn get_missing_session_is_404_with_id() {
        let server = server(AppState::with_sessions(vec![]));

        let response = server.get("/sessions/77").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!(77));
    }

    #[tokio::test]
    async fn create_redirects_to_list() {
        let server = server(AppState::with_sessions(two_test_sessions()));

        let response = server
            .post("/sessions/create")
            .json(&json!({"sessionName": "Retro"}))
            .await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "/sessions/list");
        let body: Value = response.json();
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Retro");

        let list: Vec<Value> = server.get("/sessions/list").await.json();
        assert_eq!(list.len(), 3);
    }

    #[tokio::test]
    async fn create_with_null_name_is_400_with_field_errors() {
        let server = server(AppState::with_sessions(two_test_sessions()));

        let response = server
            .post("/sessions/create")
            .json(&json!({"sessionName": null}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "sessionName": ["The sessionName field is required."]
        }));

        let list: Vec<Value> = server.get("/sessions/list").await.json();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn create_with_wrongly_typed_name_is_400_with_field_errors() {
        let server = server(AppState::with_sessions(vec![]));

        let response = server
            .post("/sessions/create")
            .json(&json!({"sessionName": 5}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "sessionName": ["The field sessionName must be of type string."]
        }));
    }

    #[tokio::test]
    async fn create_with_long_name_is_400() {
        let server = server(AppState::with_sessions(vec![]));

        let response = server
            .post("/sessions/create")
            .json(&json!({"sessionName": "x".repeat(MAX_SESSION_NAME_LENGTH + 1)}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body.get("sessionName").is_some());
    }

    #[tokio::test]
    async fn get_with_non_integer_id_is_json_400() {
        let server = server(AppState::with_sessions(two_test_sessions()));

        let response = server.get("/sessions/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Bad request");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn create_with_malformed_body_is_400() {
        let server = server(AppState::with_sessions(vec![]));

        let response = server.post("/sessions/create").text("not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Bad request");
    }
}
