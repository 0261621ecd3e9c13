//! Session trait - abstraction for the established meeting connection

use async_trait::async_trait;

use crate::application::errors::BotError;

/// Stable participant identity within a meeting session
pub type UserId = u64;

/// Destination for an outbound chat message.
///
/// Broadcast is its own variant, never a magic participant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTarget {
    /// All participants
    Everyone,
    /// A single participant's node
    User(UserId),
}

/// The established meeting connection the bot acts through.
///
/// Connection setup, outbound serialization, keepalive transport and
/// retry policy all live behind this trait. The bot issues one-way
/// commands only and never caches session-owned state (mute status,
/// display name, chat level).
#[async_trait]
pub trait Session: Send + Sync {
    /// The bot's own participant id in this meeting
    fn self_user_id(&self) -> UserId;

    /// Send a chat message to one participant or to everyone
    async fn send_chat_message(&self, target: ChatTarget, text: &str) -> Result<(), BotError>;

    /// Change the bot's display name
    async fn rename_me(&self, new_name: &str) -> Result<(), BotError>;

    async fn set_audio_muted(&self, muted: bool) -> Result<(), BotError>;

    async fn set_video_muted(&self, muted: bool) -> Result<(), BotError>;

    async fn set_screen_share_muted(&self, muted: bool) -> Result<(), BotError>;

    /// Set who may chat with whom in the meeting
    async fn set_chat_level(&self, level: i32) -> Result<(), BotError>;
}
