//! Application layer errors

use thiserror::Error;

use crate::domain::entities::EventKind;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Envelope payload decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unrecognized event kind: {0}")]
    UnknownKind(i32),

    #[error("Malformed {kind:?} payload: {source}")]
    BadPayload {
        kind: EventKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Chat command errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("No command provided after prefix")]
    Empty,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
