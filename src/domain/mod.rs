//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core protocol objects (Envelope, indications, Command)
//! - Traits: Abstractions for infrastructure (Session)

pub mod entities;
pub mod traits;
