//! Console adapter for development/testing
//!
//! Implements the session trait by printing every outbound intent, so
//! the full classify/decode/dispatch pipeline can be driven from a
//! terminal without a live meeting connection.

use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::traits::{ChatTarget, Session, UserId};

/// Console session adapter for local development
pub struct ConsoleSession {
    self_id: UserId,
}

impl ConsoleSession {
    pub fn new(self_id: UserId) -> Self {
        Self { self_id }
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        // arbitrary but stable; stdin-fabricated participants get other ids
        Self::new(1)
    }
}

#[async_trait]
impl Session for ConsoleSession {
    fn self_user_id(&self) -> UserId {
        self.self_id
    }

    async fn send_chat_message(&self, target: ChatTarget, text: &str) -> Result<(), BotError> {
        match target {
            ChatTarget::Everyone => println!("[chat -> everyone] {}", text),
            ChatTarget::User(id) => println!("[chat -> {}] {}", id, text),
        }
        Ok(())
    }

    async fn rename_me(&self, new_name: &str) -> Result<(), BotError> {
        println!("[session] display name set to {:?}", new_name);
        Ok(())
    }

    async fn set_audio_muted(&self, muted: bool) -> Result<(), BotError> {
        println!("[session] audio muted: {}", muted);
        Ok(())
    }

    async fn set_video_muted(&self, muted: bool) -> Result<(), BotError> {
        println!("[session] video muted: {}", muted);
        Ok(())
    }

    async fn set_screen_share_muted(&self, muted: bool) -> Result<(), BotError> {
        println!("[session] screen share muted: {}", muted);
        Ok(())
    }

    async fn set_chat_level(&self, level: i32) -> Result<(), BotError> {
        println!("[session] chat level set to {}", level);
        Ok(())
    }
}
