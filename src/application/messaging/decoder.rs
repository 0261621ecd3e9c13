//! Envelope payload decoder - Converts opaque payloads into typed events

use crate::application::errors::DecodeError;
use crate::domain::entities::{ChatIndication, Envelope, EventKind, MeetingEvent, RosterIndication};

/// Decode an envelope's opaque payload into a typed meeting event.
///
/// Pure and deterministic: identical input always yields identical
/// output. Keepalives never reach this point; the dispatcher drops
/// them before decoding.
pub fn decode(envelope: &Envelope) -> Result<MeetingEvent, DecodeError> {
    match envelope.kind() {
        EventKind::RosterIndication => {
            let roster: RosterIndication = decode_body(envelope, EventKind::RosterIndication)?;
            Ok(MeetingEvent::Roster(roster))
        }
        EventKind::ChatIndication => {
            let chat: ChatIndication = decode_body(envelope, EventKind::ChatIndication)?;
            Ok(MeetingEvent::Chat(chat))
        }
        EventKind::Keepalive | EventKind::Unknown(_) => Err(DecodeError::UnknownKind(envelope.evt)),
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(
    envelope: &Envelope,
    kind: EventKind,
) -> Result<T, DecodeError> {
    serde_json::from_value(envelope.body.clone())
        .map_err(|source| DecodeError::BadPayload { kind, source })
}
