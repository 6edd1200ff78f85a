use std::sync::Arc;

use swasthya::error::DialogueError;
use swasthya::kernel::event::Sender;
use swasthya::kernel::intent::RuleId;
use swasthya::kernel::telemetry::TurnKind;
use swasthya::phrases::{FlowId, Language, PhraseTable, Topic};
use swasthya::random::SeededRandom;
use swasthya::session::VOICE_NOTE_MARKER;
use swasthya::{DialogueEngine, EngineConfig, Session};

fn session() -> Session {
    let engine = DialogueEngine::builtin(&EngineConfig::default()).expect("builtin table");
    Session::new(Arc::new(engine), Box::new(SeededRandom::new(21)))
}

fn assert_send<T: Send>() {}

#[test]
fn test_session_is_send() {
    assert_send::<Session>();
}

#[test]
fn test_transcript_keeps_history_across_language_switch() {
    let mut session = session();
    session.start(Language::En).unwrap();
    session.send_text("I have a fever").unwrap();

    let before: Vec<_> = session.transcript().messages().to_vec();
    session.set_language(Language::Hi);
    assert_eq!(session.transcript().messages(), before.as_slice());

    session.select_option("2-3 days").unwrap();

    let transcript: Vec<(Sender, &str)> = session
        .transcript()
        .messages()
        .iter()
        .map(|m| (m.sender, m.text.as_str()))
        .collect();
    assert_eq!(
        transcript,
        vec![
            (
                Sender::Bot,
                "Hello! I'm your health assistant. How can I help you today?"
            ),
            (Sender::User, "I have a fever"),
            (Sender::Bot, "How many days have you had fever? Please tell me:"),
            (Sender::User, "2-3 days"),
            (
                Sender::Bot,
                "2-3 दिन का बुखार हो तो डॉक्टर से सलाह लें। पैरासिटामोल ले सकते हैं। नजदीकी PHC जाएं।"
            ),
            (Sender::Bot, "नजदीकी स्वास्थ्य केंद्र देखना चाहते हैं?"),
        ]
    );
}

#[test]
fn test_stray_option_gets_fallback_reply() {
    let mut session = session();
    session.start(Language::En).unwrap();

    let turn = session.select_option("1 day").unwrap();

    let phrases = PhraseTable::builtin().unwrap();
    let fallbacks: Vec<&str> = Topic::FALLBACKS
        .iter()
        .map(|topic| phrases.lookup(*topic, Language::En).unwrap())
        .collect();
    let reply = turn.first_message().unwrap();
    assert!(fallbacks.contains(&reply.text.as_str()), "{:?}", reply.text);
    assert_eq!(session.telemetry().option_rejections, 1);
}

#[test]
fn test_unknown_quick_action_is_ignored() {
    let mut session = session();
    session.start(Language::En).unwrap();
    let len = session.transcript().len();

    let turn = session.quick_action("teleport").unwrap();

    assert!(turn.is_empty());
    assert_eq!(session.transcript().len(), len);
    assert_eq!(session.telemetry().unknown_quick_actions, 1);
}

#[test]
fn test_known_quick_action_by_id() {
    let mut session = session();
    session.start(Language::Hi).unwrap();

    let turn = session.quick_action("emergency").unwrap();
    assert!(turn.first_message().unwrap().text.contains("108"));
}

#[test]
fn test_telemetry_counts_flows_and_rules() {
    let mut session = session();
    session.start(Language::En).unwrap();
    session.send_text("fever and doctor").unwrap();
    session.select_option("1 day").unwrap();
    session.send_text("cough").unwrap();
    session.send_text("something else entirely").unwrap();
    session.toggle_language();

    let snap = session.telemetry();
    assert_eq!(snap.flow_stats.started, 2);
    assert_eq!(snap.flow_stats.completed, 1);
    assert_eq!(snap.flow_stats.abandoned, 1);
    assert!((snap.flow_stats.completion_rate - 0.5).abs() < f64::EPSILON);
    assert_eq!(snap.rule_hits.get(&RuleId::Fever), Some(&1));
    assert_eq!(snap.rule_hits.get(&RuleId::Cough), Some(&1));
    assert_eq!(snap.rule_hits.get(&RuleId::Appointment), None);
    assert_eq!(snap.fallbacks, 1);
    assert_eq!(snap.language_changes, 1);
    assert_eq!(snap.turn_stats.by_kind.get(&TurnKind::Text), Some(&3));
    assert_eq!(snap.turn_stats.by_kind.get(&TurnKind::Start), Some(&1));
}

#[test]
fn test_voice_note_round_trip() {
    let mut session = session();
    session.start(Language::En).unwrap();

    let turn = session.send_voice_note().unwrap();

    assert_eq!(
        turn.first_message().unwrap().text,
        "I heard your voice message. Can you please also type it?"
    );
    let messages = session.transcript().messages();
    assert_eq!(messages[messages.len() - 2].text, VOICE_NOTE_MARKER);
    assert_eq!(messages[messages.len() - 2].sender, Sender::User);
}

#[test]
fn test_toggle_language_flips() {
    let mut session = session();
    session.start(Language::Hi).unwrap();

    assert_eq!(session.toggle_language(), Language::En);
    assert_eq!(session.language(), Language::En);
    assert_eq!(session.toggle_language(), Language::Hi);
}

#[test]
fn test_blank_text_leaves_transcript_alone() {
    let mut session = session();
    session.start(Language::En).unwrap();
    let len = session.transcript().len();

    assert!(session.send_text("  \t ").unwrap().is_empty());
    assert_eq!(session.transcript().len(), len);
}

#[test]
fn test_transcript_exports_as_json() {
    let mut session = session();
    session.start(Language::En).unwrap();
    session.send_text("cough").unwrap();
    assert_eq!(session.state().active_flow(), Some(FlowId::Cough));

    let json = session.transcript_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().expect("transcript serializes as an array");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["sender"], "bot");
    assert_eq!(entries[1]["sender"], "user");
    assert_eq!(entries[1]["text"], "cough");
    assert_eq!(entries[2]["options"].as_array().map(Vec::len), Some(3));
    assert!(entries[1].get("options").is_none());
}

#[test]
fn test_export_error_message() {
    let err = DialogueError::Export("broken writer".to_string());
    assert_eq!(err.to_string(), "transcript export failed: broken writer");
    assert_ne!(err, DialogueError::Config("broken writer".to_string()));
}
