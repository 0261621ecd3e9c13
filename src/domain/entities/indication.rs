//! Decoded event payloads

use serde::{Deserialize, Serialize};

use crate::domain::traits::session::UserId;

/// A decoded inbound event the bot reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingEvent {
    Roster(RosterIndication),
    Chat(ChatIndication),
}

/// Roster update: participants added to the meeting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterIndication {
    #[serde(default)]
    pub add: Vec<RosterEntry>,
}

/// One participant in a roster update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub id: UserId,
    /// Display name as shown in the participant list
    pub dn: String,
}

/// A chat message with its routing metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatIndication {
    pub text: String,
    /// Origin node to reply to when answering this message directly
    pub dest_node_id: UserId,
}
