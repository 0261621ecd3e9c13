//! Dispatch pipeline integration tests
//! Run with: cargo test --test dispatch_test

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use meetbot::application::errors::BotError;
use meetbot::application::messaging::EventDispatcher;
use meetbot::domain::entities::envelope::{EVT_CHAT_INDICATION, EVT_ROSTER_INDICATION};
use meetbot::domain::entities::Envelope;
use meetbot::domain::traits::{ChatTarget, Session, UserId};

const BOT_ID: UserId = 42;
const OPERATOR_ID: UserId = 7;

/// One recorded outbound session call
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    SendChat { target: ChatTarget, text: String },
    Rename(String),
    AudioMuted(bool),
    VideoMuted(bool),
    ScreenShareMuted(bool),
    ChatLevel(i32),
}

/// Session double that records every outbound intent
struct MockSession {
    calls: Mutex<Vec<Call>>,
    fail_sends: bool,
}

impl MockSession {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Session for MockSession {
    fn self_user_id(&self) -> UserId {
        BOT_ID
    }

    async fn send_chat_message(&self, target: ChatTarget, text: &str) -> Result<(), BotError> {
        self.record(Call::SendChat {
            target,
            text: text.to_string(),
        });
        if self.fail_sends {
            return Err(BotError::Network("send refused".to_string()));
        }
        Ok(())
    }

    async fn rename_me(&self, new_name: &str) -> Result<(), BotError> {
        self.record(Call::Rename(new_name.to_string()));
        Ok(())
    }

    async fn set_audio_muted(&self, muted: bool) -> Result<(), BotError> {
        self.record(Call::AudioMuted(muted));
        Ok(())
    }

    async fn set_video_muted(&self, muted: bool) -> Result<(), BotError> {
        self.record(Call::VideoMuted(muted));
        Ok(())
    }

    async fn set_screen_share_muted(&self, muted: bool) -> Result<(), BotError> {
        self.record(Call::ScreenShareMuted(muted));
        Ok(())
    }

    async fn set_chat_level(&self, level: i32) -> Result<(), BotError> {
        self.record(Call::ChatLevel(level));
        Ok(())
    }
}

fn dispatcher() -> EventDispatcher {
    EventDispatcher::new("++")
}

fn chat(text: &str) -> Envelope {
    Envelope::new(
        EVT_CHAT_INDICATION,
        json!({"text": text, "dest_node_id": OPERATOR_ID}),
    )
}

async fn dispatch_chat(session: &MockSession, text: &str) {
    dispatcher()
        .on_envelope(session, &chat(text))
        .await
        .expect("chat dispatch should not fail");
}

#[tokio::test]
async fn keepalive_makes_no_session_calls() {
    let session = MockSession::new();
    dispatcher()
        .on_envelope(&session, &Envelope::keepalive())
        .await
        .unwrap();
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn unknown_event_kind_surfaces_decode_error() {
    let session = MockSession::new();
    let result = dispatcher()
        .on_envelope(&session, &Envelope::new(31337, json!({})))
        .await;
    assert!(matches!(result, Err(BotError::Decode(_))));
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn malformed_payload_surfaces_decode_error() {
    let session = MockSession::new();
    let bad = Envelope::new(EVT_CHAT_INDICATION, json!({"text": 5}));
    let result = dispatcher().on_envelope(&session, &bad).await;
    assert!(matches!(result, Err(BotError::Decode(_))));
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn roster_welcomes_everyone_except_the_bot() {
    let session = MockSession::new();
    let roster = Envelope::new(
        EVT_ROSTER_INDICATION,
        json!({"add": [
            {"id": 1, "dn": "Alice"},
            {"id": BOT_ID, "dn": "meetbot"},
            {"id": 2, "dn": "Bob"},
        ]}),
    );
    dispatcher().on_envelope(&session, &roster).await.unwrap();

    assert_eq!(
        session.calls(),
        vec![
            Call::SendChat {
                target: ChatTarget::Everyone,
                text: "Welcome to the meeting, Alice!".to_string(),
            },
            Call::SendChat {
                target: ChatTarget::Everyone,
                text: "Welcome to the meeting, Bob!".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn failed_welcome_does_not_block_the_next_one() {
    let session = MockSession::failing_sends();
    let roster = Envelope::new(
        EVT_ROSTER_INDICATION,
        json!({"add": [
            {"id": 1, "dn": "Alice"},
            {"id": 2, "dn": "Bob"},
        ]}),
    );
    // send failures are absorbed, the loop stays alive
    dispatcher().on_envelope(&session, &roster).await.unwrap();
    assert_eq!(session.calls().len(), 2);
}

#[tokio::test]
async fn unprefixed_chat_is_ignored() {
    let session = MockSession::new();
    dispatch_chat(&session, "good morning all").await;
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn empty_command_makes_no_session_calls() {
    let session = MockSession::new();
    dispatch_chat(&session, "++").await;
    dispatch_chat(&session, "++   ").await;
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn rename_joins_arguments_with_spaces() {
    let session = MockSession::new();
    dispatch_chat(&session, "++rename Bot Two").await;
    assert_eq!(session.calls(), vec![Call::Rename("Bot Two".to_string())]);
}

#[tokio::test]
async fn rename_without_arguments_is_a_noop() {
    let session = MockSession::new();
    dispatch_chat(&session, "++rename").await;
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn mute_defaults_to_on() {
    let session = MockSession::new();
    dispatch_chat(&session, "++mute").await;
    assert_eq!(
        session.calls(),
        vec![Call::AudioMuted(true), Call::VideoMuted(true)]
    );
}

#[tokio::test]
async fn mute_on_and_off() {
    let session = MockSession::new();
    dispatch_chat(&session, "++mute on").await;
    dispatch_chat(&session, "++mute off").await;
    assert_eq!(
        session.calls(),
        vec![
            Call::AudioMuted(true),
            Call::VideoMuted(true),
            Call::AudioMuted(false),
            Call::VideoMuted(false),
        ]
    );
}

#[tokio::test]
async fn mute_garbage_argument_is_a_noop() {
    let session = MockSession::new();
    dispatch_chat(&session, "++mute banana").await;
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn screenshare_toggles_inverted_mute_state() {
    let session = MockSession::new();
    dispatch_chat(&session, "++screenshare").await;
    dispatch_chat(&session, "++screenshare on").await;
    dispatch_chat(&session, "++screenshare off").await;
    dispatch_chat(&session, "++screenshare sideways").await;
    assert_eq!(
        session.calls(),
        vec![
            Call::ScreenShareMuted(false),
            Call::ScreenShareMuted(false),
            Call::ScreenShareMuted(true),
        ]
    );
}

#[tokio::test]
async fn chatlevel_parses_base_ten() {
    let session = MockSession::new();
    dispatch_chat(&session, "++chatlevel 2").await;
    assert_eq!(session.calls(), vec![Call::ChatLevel(2)]);
}

#[tokio::test]
async fn chatlevel_garbage_is_dropped() {
    let session = MockSession::new();
    dispatch_chat(&session, "++chatlevel abc").await;
    dispatch_chat(&session, "++chatlevel").await;
    assert!(session.calls().is_empty());
}

#[tokio::test]
async fn unrecognized_verb_echoes_to_origin() {
    let session = MockSession::new();
    dispatch_chat(&session, "++foo bar").await;
    assert_eq!(
        session.calls(),
        vec![Call::SendChat {
            target: ChatTarget::User(OPERATOR_ID),
            text: "I don't understand this message so I am echoing it: ++foo bar".to_string(),
        }]
    );
}
