//! In-memory adapters
//!
//! Implementations of repository traits that keep all state in process.

pub mod session_repo;

pub use session_repo::InMemoryBrainstormSessionRepository;
