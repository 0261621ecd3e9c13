//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Session implementations (console dev mode)

pub mod adapters;
pub mod config;
