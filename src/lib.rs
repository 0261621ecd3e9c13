//! meetbot - a meeting bot controlled through chat commands
//!
//! Consumes typed event envelopes from an established real-time meeting
//! session, welcomes arriving participants, and interprets a small
//! `++`-prefixed command language carried in chat messages.

pub mod application;
pub mod domain;
pub mod infrastructure;
