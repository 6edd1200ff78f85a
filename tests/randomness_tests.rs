use std::collections::HashMap;

use swasthya::kernel::state::DialogueState;
use swasthya::phrases::{Language, Topic};
use swasthya::random::{RandomSource, SeededRandom};
use swasthya::{DialogueEngine, EngineConfig};

const TRIALS: usize = 3000;

fn engine() -> DialogueEngine {
    DialogueEngine::builtin(&EngineConfig::default()).expect("builtin table")
}

/// Always returns the same index, ignoring the requested range.
struct Fixed(usize);

impl RandomSource for Fixed {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

fn assert_roughly_uniform(counts: &HashMap<String, usize>, buckets: usize) {
    assert_eq!(counts.len(), buckets, "every candidate should appear");
    let expected = TRIALS / buckets;
    for (text, count) in counts {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "{:?} chosen {} times, expected about {}",
            text,
            count,
            expected
        );
    }
}

/// Counts draws so tests can see which calls consult the source.
struct Counting(usize);

impl RandomSource for Counting {
    fn pick(&mut self, _len: usize) -> usize {
        self.0 += 1;
        0
    }
}

#[test]
fn test_fallback_choice_is_uniform() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(42);
    engine.start(&mut state, &mut rng, Language::En).unwrap();

    let mut counts = HashMap::new();
    for _ in 0..TRIALS {
        let turn = engine
            .submit_text(&mut state, &mut rng, "hello there")
            .unwrap();
        let text = turn.first_message().unwrap().text.clone();
        *counts.entry(text).or_insert(0) += 1;
    }

    assert_roughly_uniform(&counts, Topic::FALLBACKS.len());
}

#[test]
fn test_health_tip_choice_is_uniform() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut rng = SeededRandom::new(42);
    engine.start(&mut state, &mut rng, Language::Hi).unwrap();

    let mut counts = HashMap::new();
    for _ in 0..TRIALS {
        let turn = engine.request_education(&mut state, &mut rng).unwrap();
        let text = turn.first_message().unwrap().text.clone();
        *counts.entry(text).or_insert(0) += 1;
    }

    assert_roughly_uniform(&counts, engine.phrases().tips().len());
}

#[test]
fn test_injected_source_makes_choice_deterministic() {
    let engine = engine();
    let mut state = DialogueState::default();
    engine.start(&mut state, &mut Fixed(0), Language::En).unwrap();

    let turn = engine
        .submit_text(&mut state, &mut Fixed(1), "no keywords here")
        .unwrap();
    assert_eq!(
        turn.first_message().unwrap().text,
        "Please choose from the options below for more information."
    );

    let tip = engine.request_education(&mut state, &mut Fixed(2)).unwrap();
    assert!(tip
        .first_message()
        .unwrap()
        .text
        .starts_with("Diabetes Management\n"));
}

#[test]
fn test_out_of_range_pick_is_clamped() {
    let engine = engine();
    let mut state = DialogueState::default();
    engine.start(&mut state, &mut Fixed(0), Language::En).unwrap();

    let turn = engine
        .submit_text(&mut state, &mut Fixed(99), "no keywords here")
        .unwrap();
    assert_eq!(
        turn.first_message().unwrap().text,
        "If this is serious, please see a doctor immediately."
    );
}

#[test]
fn test_same_seed_same_replies() {
    let engine = engine();

    let replies = |seed: u64| -> Vec<String> {
        let mut state = DialogueState::default();
        let mut rng = SeededRandom::new(seed);
        engine.start(&mut state, &mut rng, Language::En).unwrap();
        (0..20)
            .map(|_| {
                engine
                    .submit_text(&mut state, &mut rng, "hmm")
                    .unwrap()
                    .first_message()
                    .unwrap()
                    .text
                    .clone()
            })
            .collect()
    };

    assert_eq!(replies(9), replies(9));
}

#[test]
fn test_welcome_and_voice_note_use_only_the_given_source() {
    let engine = engine();
    let mut state = DialogueState::default();
    let mut source = Counting(0);

    let welcome = engine.start(&mut state, &mut source, Language::En).unwrap();
    let voice = engine.submit_voice_note(&mut state, &mut source).unwrap();
    assert_eq!(source.0, 0, "neither reply involves a random choice");
    assert_eq!(
        welcome.first_message().unwrap().text,
        "Hello! I'm your health assistant. How can I help you today?"
    );
    assert_eq!(
        voice.first_message().unwrap().text,
        "I heard your voice message. Can you please also type it?"
    );

    engine
        .submit_text(&mut state, &mut source, "nothing matches")
        .unwrap();
    assert_eq!(source.0, 1);
}
