//! Brainstorm API Server
//!
//! A small service for collecting ideas into brainstorming sessions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryBrainstormSessionRepository;
use app::SessionService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService<InMemoryBrainstormSessionRepository>>,
}

impl AppState {
    pub fn new(sessions: Arc<InMemoryBrainstormSessionRepository>) -> Self {
        Self {
            session_service: Arc::new(SessionService::new(sessions)),
        }
    }

    #[cfg(test)]
    pub fn with_sessions(sessions: Vec<domain::entities::BrainstormSession>) -> Self {
        Self::new(Arc::new(InMemoryBrainstormSessionRepository::with_sessions(
            sessions,
        )))
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router with middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Sessions
        .route(handlers::sessions::SESSION_LIST_PATH, get(handlers::list_sessions))
        .route("/sessions/create", post(handlers::create_session))
        .route("/sessions/:id", get(handlers::get_session))
        // Ideas
        .route(
            "/ideas/forSession/:session_id",
            get(handlers::list_ideas_for_session),
        )
        .route("/ideas/create", post(handlers::create_idea))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Brainstorm API...");

    // Create adapters
    let session_repo = if config.seed_sample_data {
        Arc::new(InMemoryBrainstormSessionRepository::with_sample_data())
    } else {
        Arc::new(InMemoryBrainstormSessionRepository::new())
    };
    tracing::info!(
        sessions = session_repo.session_count().await,
        "Session repository ready"
    );

    // Create app state
    let state = AppState::new(session_repo);
    let app = build_router(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
