//! Application services - Reactions to decoded meeting events

pub mod command_service;
pub mod roster_service;

pub use command_service::CommandService;
pub use roster_service::RosterService;
