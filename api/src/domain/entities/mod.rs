//! Domain entities
//!
//! Pure domain models for brainstorm sessions and their ideas.

pub mod idea;
pub mod session;

pub use idea::{Idea, IdeaId};
pub use session::{BrainstormSession, NewBrainstormSession, SessionId};
