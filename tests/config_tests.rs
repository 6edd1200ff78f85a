use swasthya::config::{DelayProfile, EngineConfig};
use swasthya::error::DialogueError;
use swasthya::phrases::Language;

#[test]
fn test_empty_config_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.default_language, Language::Hi);
    assert_eq!(config.seed, None);
}

#[test]
fn test_partial_delay_table_keeps_other_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
default_language = "en"
seed = 7

[delays]
typing_ms = 10
"#,
    )
    .unwrap();

    assert_eq!(config.default_language, Language::En);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.delays.typing_ms, 10);
    assert_eq!(config.delays.reply_ms, 1000);
    assert_eq!(config.delays.reply().millis, 1010);
}

#[test]
fn test_bad_language_is_a_config_error() {
    let err = EngineConfig::from_toml_str("default_language = \"fr\"").unwrap_err();
    assert!(matches!(err, DialogueError::Config(_)), "{:?}", err);
}

#[test]
fn test_missing_file_is_a_config_error() {
    let err = EngineConfig::load("/definitely/not/here/swasthya.toml").unwrap_err();
    match err {
        DialogueError::Config(message) => assert!(message.contains("swasthya.toml")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_instant_profile_has_no_delay() {
    let delays = DelayProfile::instant();
    assert!(delays.welcome().is_zero());
    assert!(delays.reply().is_zero());
    assert!(delays.immediate().is_zero());
    assert!(delays.follow_up().is_zero());
}
