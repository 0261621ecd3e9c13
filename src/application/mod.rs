//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Messaging: Envelope decoding, command parsing, dispatching
//! - Services: Reactions to decoded events

pub mod errors;
pub mod messaging;
pub mod services;
