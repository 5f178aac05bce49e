//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod ideas;
pub mod sessions;

pub use ideas::{create_idea, list_ideas_for_session};
pub use sessions::{create_session, get_session, list_sessions};
