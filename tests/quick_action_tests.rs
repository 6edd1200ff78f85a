use swasthya::error::DialogueError;
use swasthya::kernel::event::QuickAction;
use swasthya::kernel::state::{DialogueState, Offer};
use swasthya::phrases::{FlowId, Language};
use swasthya::random::SeededRandom;
use swasthya::{DialogueEngine, EngineConfig, Panel, SideEffect};

fn engine() -> DialogueEngine {
    DialogueEngine::builtin(&EngineConfig::default()).expect("builtin table")
}

#[test]
fn test_emergency_names_108_in_both_languages() {
    let engine = engine();

    for language in Language::ALL {
        let mut state = DialogueState::default();
        let mut rng = SeededRandom::new(11);
        engine.start(&mut state, &mut rng, language).unwrap();

        let turn = engine
            .request_quick_action(&mut state, &mut rng, QuickAction::Emergency)
            .unwrap();

        assert!(
            matches!(turn.effects.first(), Some(SideEffect::OpenPanel(Panel::Emergency))),
            "{}: the panel opens before the notice",
            language
        );
        let notice = turn.first_message().unwrap();
        assert!(notice.text.contains("108"), "{}: {:?}", language, notice.text);
        assert!(notice.text.starts_with("🚨"));
    }
}

#[test]
fn test_emergency_leaves_flow_in_progress() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(11);
    engine.start(&mut state, &mut rng, Language::En).unwrap();
    engine.submit_text(&mut state, &mut rng, "cough").unwrap();

    engine
        .request_quick_action(&mut state, &mut rng, QuickAction::Emergency)
        .unwrap();

    assert_eq!(state.active_flow(), Some(FlowId::Cough));
}

#[test]
fn test_symptom_menu_offers_four_symptoms() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(11);
    engine.start(&mut state, &mut rng, Language::Hi).unwrap();
    engine.submit_text(&mut state, &mut rng, "बुखार").unwrap();

    let turn = engine
        .request_quick_action(&mut state, &mut rng, QuickAction::Symptoms)
        .unwrap();

    let menu = turn.first_message().unwrap();
    assert_eq!(menu.text, "आपको कौन सा लक्षण है? बताएं:");
    assert_eq!(menu.options, vec!["बुखार", "खांसी", "सिरदर्द", "पेट दर्द"]);
    assert_eq!(state.active_flow(), None, "the menu replaces the fever flow");
    assert_eq!(state.pending_offer(), Some(Offer::SymptomMenu));
}

#[test]
fn test_appointment_button_matches_keyword_reply() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(11);
    engine.start(&mut state, &mut rng, Language::En).unwrap();

    let turn = engine
        .request_quick_action(&mut state, &mut rng, QuickAction::Appointment)
        .unwrap();
    let message = turn.first_message().unwrap();
    assert_eq!(message.options, vec!["View Centers", "Talk to ASHA Worker"]);

    let centers = engine
        .submit_option(&mut state, &mut rng, "View Centers")
        .unwrap();
    assert_eq!(centers.panels().collect::<Vec<_>>(), vec![Panel::Facilities]);
}

#[test]
fn test_education_tip_then_more_tips_offer() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(11);
    engine.start(&mut state, &mut rng, Language::En).unwrap();

    let rendered_tips: Vec<String> = engine
        .phrases()
        .tips()
        .iter()
        .map(|tip| tip.render(Language::En))
        .collect();

    let turn = engine
        .request_quick_action(&mut state, &mut rng, QuickAction::Education)
        .unwrap();
    let messages: Vec<_> = turn.messages().collect();
    assert_eq!(messages.len(), 2);
    assert!(rendered_tips.contains(&messages[0].text));
    assert_eq!(messages[1].text, "Do you need more health information?");
    assert_eq!(messages[1].options, vec!["Yes, tell more", "Thank you"]);
    assert_eq!(state.pending_offer(), Some(Offer::MoreTips));

    let more = engine
        .submit_option(&mut state, &mut rng, "Yes, tell more")
        .unwrap();
    assert_eq!(more.messages().count(), 2);
    assert!(rendered_tips.contains(&more.first_message().unwrap().text));

    let thanks = engine
        .submit_option(&mut state, &mut rng, "Thank you")
        .unwrap();
    assert_eq!(
        thanks.first_message().unwrap().text,
        "You're welcome! Ask if you need more help. Stay healthy! 🙏"
    );
    assert_eq!(state.pending_offer(), None);
}

#[test]
fn test_quick_action_ids_and_labels() {
    let engine = engine();

    assert_eq!("Emergency".parse::<QuickAction>().unwrap(), QuickAction::Emergency);
    assert_eq!(
        "dance".parse::<QuickAction>().unwrap_err(),
        DialogueError::UnknownQuickAction("dance".to_string())
    );

    let labels: Vec<&str> = QuickAction::ALL
        .into_iter()
        .map(|action| engine.quick_action_label(action, Language::En).unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Check Symptoms", "Book Appointment", "Emergency Help", "Health Tips"]
    );
    assert_eq!(
        engine
            .quick_action_label(QuickAction::Education, Language::Hi)
            .unwrap(),
        "स्वास्थ्य टिप्स"
    );
}
