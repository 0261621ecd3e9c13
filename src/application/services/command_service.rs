//! Command service - Interprets and executes chat commands

use crate::application::errors::CommandError;
use crate::application::messaging::CommandParser;
use crate::domain::entities::{ChatIndication, Command};
use crate::domain::traits::{ChatTarget, Session};

/// Executes `++`-prefixed chat commands against the session
pub struct CommandService {
    parser: CommandParser,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            parser: CommandParser::new(prefix),
        }
    }

    /// Handle one chat indication.
    ///
    /// Messages without the command prefix are not for the bot and are
    /// left alone. Send failures are logged, never propagated; the only
    /// error out of here is an empty command after the prefix.
    pub async fn handle(
        &self,
        session: &dyn Session,
        chat: &ChatIndication,
    ) -> Result<(), CommandError> {
        let Some(command) = self.parser.parse(&chat.text)? else {
            return Ok(());
        };

        self.execute(session, chat, &command).await;
        Ok(())
    }

    async fn execute(&self, session: &dyn Session, chat: &ChatIndication, command: &Command) {
        match command.name.as_str() {
            "rename" => {
                if !command.args.is_empty() {
                    let new_name = command.args_joined();
                    if let Err(e) = session.rename_me(&new_name).await {
                        tracing::warn!("Failed to rename to {}: {}", new_name, e);
                    }
                }
            }
            "mute" => {
                // no arguments means mute, same as an explicit "on"
                match command.first_arg() {
                    None | Some("on") => self.set_muted(session, true).await,
                    Some("off") => self.set_muted(session, false).await,
                    Some(_) => {}
                }
            }
            "screenshare" => {
                // screen share state is expressed inverted on the wire:
                // enabling the share means un-muting it
                let muted = match command.first_arg() {
                    None | Some("on") => false,
                    Some("off") => true,
                    Some(_) => return,
                };
                if let Err(e) = session.set_screen_share_muted(muted).await {
                    tracing::warn!("Failed to set screen share: {}", e);
                }
            }
            "chatlevel" => {
                // garbage levels are dropped rather than echoed back
                if let Some(level) = command.first_arg().and_then(|arg| arg.parse::<i32>().ok()) {
                    if let Err(e) = session.set_chat_level(level).await {
                        tracing::warn!("Failed to set chat level {}: {}", level, e);
                    }
                }
            }
            _ => {
                let reply = format!(
                    "I don't understand this message so I am echoing it: {}",
                    chat.text
                );
                if let Err(e) = session
                    .send_chat_message(ChatTarget::User(chat.dest_node_id), &reply)
                    .await
                {
                    tracing::warn!("Failed to echo message: {}", e);
                }
            }
        }
    }

    async fn set_muted(&self, session: &dyn Session, muted: bool) {
        if let Err(e) = session.set_audio_muted(muted).await {
            tracing::warn!("Failed to set audio mute: {}", e);
        }
        if let Err(e) = session.set_video_muted(muted).await {
            tracing::warn!("Failed to set video mute: {}", e);
        }
    }
}
