//! Roster service - Welcomes participants joining the meeting

use crate::domain::entities::RosterIndication;
use crate::domain::traits::{ChatTarget, Session};

/// Reacts to roster updates by greeting each new participant
pub struct RosterService;

impl RosterService {
    pub fn new() -> Self {
        Self
    }

    /// Broadcast one welcome per added participant, in roster order.
    ///
    /// The bot's own entry is skipped. A failed send is logged and does
    /// not block the remaining welcomes.
    pub async fn handle(&self, session: &dyn Session, roster: &RosterIndication) {
        let self_id = session.self_user_id();

        for person in &roster.add {
            if person.id == self_id {
                continue;
            }
            let greeting = format!("Welcome to the meeting, {}!", person.dn);
            if let Err(e) = session
                .send_chat_message(ChatTarget::Everyone, &greeting)
                .await
            {
                tracing::warn!("Failed to welcome {}: {}", person.dn, e);
            }
        }
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}
