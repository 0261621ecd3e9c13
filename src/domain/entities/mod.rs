//! Domain entities - Protocol objects with no infrastructure dependencies

pub mod command;
pub mod envelope;
pub mod indication;

pub use command::Command;
pub use envelope::{Envelope, EventKind};
pub use indication::{ChatIndication, MeetingEvent, RosterEntry, RosterIndication};
