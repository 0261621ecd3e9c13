//! Domain traits - Abstractions for infrastructure implementations

pub mod session;

pub use session::{ChatTarget, Session, UserId};
