//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the response views.

pub mod requests;
pub mod session_service;
pub mod views;

pub use requests::{NewIdeaRequest, NewSessionRequest};
pub use session_service::SessionService;
pub use views::{IdeaView, SessionSummaryView, SessionView};
