//! Inbound event envelope and event kind classification

use serde::{Deserialize, Serialize};

/// Liveness ping from the server, carries no actionable payload
pub const EVT_KEEPALIVE: i32 = 0;
/// Participants added to / removed from the meeting roster
pub const EVT_ROSTER_INDICATION: i32 = 7937;
/// Chat message delivered to the meeting
pub const EVT_CHAT_INDICATION: i32 = 4168;

/// Classification of an envelope's `evt` discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Keepalive,
    RosterIndication,
    ChatIndication,
    Unknown(i32),
}

impl EventKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            EVT_KEEPALIVE => EventKind::Keepalive,
            EVT_ROSTER_INDICATION => EventKind::RosterIndication,
            EVT_CHAT_INDICATION => EventKind::ChatIndication,
            other => EventKind::Unknown(other),
        }
    }

    pub fn is_keepalive(&self) -> bool {
        matches!(self, EventKind::Keepalive)
    }
}

/// A single inbound protocol event: an `evt` tag plus an opaque payload.
///
/// Constructed by the session per inbound frame, consumed exactly once
/// by the dispatcher, never retained.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope {
    pub evt: i32,
    #[serde(default)]
    pub body: serde_json::Value,
}

impl Envelope {
    pub fn new(evt: i32, body: serde_json::Value) -> Self {
        Self { evt, body }
    }

    pub fn keepalive() -> Self {
        Self::new(EVT_KEEPALIVE, serde_json::Value::Null)
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_code(self.evt)
    }
}
