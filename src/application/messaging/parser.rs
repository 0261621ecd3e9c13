//! Command parser - Extracts bot commands from chat text

use crate::application::errors::CommandError;
use crate::domain::entities::Command;

/// Parses chat text into commands addressed to the bot
pub struct CommandParser {
    prefix: String,
}

impl CommandParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parse a chat message body.
    ///
    /// `Ok(None)` means the message does not carry the prefix and is
    /// not addressed to the bot at all. A prefix with nothing after it
    /// is an error, not a command.
    pub fn parse(&self, text: &str) -> Result<Option<Command>, CommandError> {
        let Some(rest) = text.strip_prefix(&self.prefix) else {
            return Ok(None);
        };

        let mut tokens = rest.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(CommandError::Empty);
        };
        let args = tokens.map(str::to_string).collect();

        Ok(Some(Command::new(name, args)))
    }
}
