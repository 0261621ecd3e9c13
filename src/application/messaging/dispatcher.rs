//! Event dispatcher - Routes inbound envelopes to handlers

use crate::application::errors::BotError;
use crate::application::services::{CommandService, RosterService};
use crate::domain::entities::{Envelope, MeetingEvent};
use crate::domain::traits::Session;

use super::decoder;

/// Routes each inbound envelope through classify -> decode -> handle.
///
/// Invoked once per envelope by the session's callback; processing is
/// sequential and stateless, nothing is retained between envelopes.
pub struct EventDispatcher {
    roster: RosterService,
    commands: CommandService,
}

impl EventDispatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            roster: RosterService::new(),
            commands: CommandService::new(prefix),
        }
    }

    /// Session callback for one inbound envelope.
    ///
    /// Only decode failures travel upward, so the session can decide
    /// connection policy; everything else is absorbed here to keep the
    /// loop alive.
    pub async fn on_envelope(
        &self,
        session: &dyn Session,
        envelope: &Envelope,
    ) -> Result<(), BotError> {
        if envelope.kind().is_keepalive() {
            return Ok(());
        }

        let event = match decoder::decode(envelope) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Failed to decode event {}: {}", envelope.evt, e);
                return Err(e.into());
            }
        };
        tracing::debug!("Decoded event: {:?}", event);

        match event {
            MeetingEvent::Roster(roster) => {
                self.roster.handle(session, &roster).await;
            }
            MeetingEvent::Chat(chat) => {
                if let Err(e) = self.commands.handle(session, &chat).await {
                    tracing::warn!("Ignoring chat command: {}", e);
                }
            }
        }

        Ok(())
    }
}
