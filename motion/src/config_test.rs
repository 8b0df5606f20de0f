#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = MotionConfig::from_json("{}").expect("defaults are valid");
    assert_eq!(cfg, MotionConfig::default());
    assert_eq!(cfg.counter.duration_ms, 2000.0);
    assert_eq!(cfg.counter.threshold, 0.2);
    assert_eq!(cfg.typing.typing_speed_ms, 100.0);
    assert_eq!(cfg.typing.deleting_speed_ms, 50.0);
    assert_eq!(cfg.typing.pause_ms, 1500.0);
    assert_eq!(cfg.typing.threshold, 0.5);
    assert_eq!(cfg.typing.phrases.len(), 4);
    assert_eq!(cfg.typing.phrases[0], "scale profits.");
    assert_eq!(cfg.reveal.throttle_ms, 150.0);
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.menu.close_delay_ms, 300);
    assert_eq!(cfg.level_filter().ok(), Some(log::LevelFilter::Warn));
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = MotionConfig::from_json(r#"{"typing": {"phrases": ["ship faster."]}, "counter": {"duration_ms": 900}}"#)
        .expect("valid config");
    assert_eq!(cfg.typing.phrases, vec!["ship faster.".to_owned()]);
    assert_eq!(cfg.typing.pause_ms, 1500.0);
    assert_eq!(cfg.counter.duration_ms, 900.0);
    assert_eq!(cfg.counter.threshold, 0.2);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(MotionConfig::from_json("{"), Err(MotionError::Json(_))));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(MotionConfig::from_json(r#"{"countr": {}}"#), Err(MotionError::Json(_))));
    assert!(matches!(MotionConfig::from_json(r#"{"reveal": {"delay": 1}}"#), Err(MotionError::Json(_))));
}

#[test]
fn non_positive_durations_are_rejected() {
    assert!(matches!(
        MotionConfig::from_json(r#"{"counter": {"duration_ms": 0}}"#),
        Err(MotionError::InvalidDuration { field: "counter.duration_ms", .. })
    ));
    assert!(matches!(
        MotionConfig::from_json(r#"{"reveal": {"throttle_ms": -5}}"#),
        Err(MotionError::InvalidDuration { field: "reveal.throttle_ms", .. })
    ));
    assert!(matches!(
        MotionConfig::from_json(r#"{"typing": {"deleting_speed_ms": 0}}"#),
        Err(MotionError::InvalidDuration { field: "typing.deleting_speed_ms", .. })
    ));
}

#[test]
fn out_of_range_thresholds_are_rejected() {
    assert!(matches!(
        MotionConfig::from_json(r#"{"typing": {"threshold": 1.2}}"#),
        Err(MotionError::InvalidThreshold { field: "typing.threshold", .. })
    ));
}

#[test]
fn empty_phrases_are_rejected() {
    assert!(matches!(MotionConfig::from_json(r#"{"typing": {"phrases": []}}"#), Err(MotionError::NoPhrases)));
    assert!(matches!(
        MotionConfig::from_json(r#"{"typing": {"phrases": ["a", ""]}}"#),
        Err(MotionError::EmptyPhrase { index: 1 })
    ));
}

#[test]
fn log_level_is_case_insensitive_and_validated() {
    let cfg = MotionConfig::from_json(r#"{"log_level": "DEBUG"}"#).expect("valid level");
    assert_eq!(cfg.level_filter().ok(), Some(log::LevelFilter::Debug));
    assert!(matches!(
        MotionConfig::from_json(r#"{"log_level": "chatty"}"#),
        Err(MotionError::UnknownLogLevel(level)) if level == "chatty"
    ));
}

#[test]
fn typing_config_builds_cycler() {
    let cycler = TypingConfig::default().cycler().expect("default cycler");
    assert_eq!(cycler.text(), "");
}
