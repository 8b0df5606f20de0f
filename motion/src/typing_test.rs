#![allow(clippy::float_cmp)]

use super::*;

const STEP_MS: f64 = 10.0;

fn cycler(phrases: &[&str]) -> PhraseCycler {
    let phrases = phrases.iter().map(|p| (*p).to_owned()).collect();
    let mut c = PhraseCycler::new(phrases, TypingTimings::default()).expect("valid cycler");
    assert_eq!(c.on_visibility_change(Visibility::Visible), FrameRequest::Start);
    c
}

/// Tick every `STEP_MS` from `from` through `to` inclusive.
fn run(c: &mut PhraseCycler, from: f64, to: f64) {
    let mut t = from;
    while t <= to {
        c.tick(t);
        t += STEP_MS;
    }
}

// --- Construction ---

#[test]
fn new_rejects_empty_phrase_list() {
    assert!(matches!(PhraseCycler::new(Vec::new(), TypingTimings::default()), Err(MotionError::NoPhrases)));
}

#[test]
fn new_rejects_empty_phrase() {
    let phrases = vec!["ok".to_owned(), String::new()];
    assert!(matches!(
        PhraseCycler::new(phrases, TypingTimings::default()),
        Err(MotionError::EmptyPhrase { index: 1 })
    ));
}

#[test]
fn new_rejects_non_positive_timings() {
    let timings = TypingTimings { pause_ms: 0.0, ..TypingTimings::default() };
    assert!(matches!(
        PhraseCycler::new(vec!["a".to_owned()], timings),
        Err(MotionError::InvalidDuration { field: "typing.pause_ms", .. })
    ));
}

#[test]
fn initial_state_is_typing_from_start() {
    let c = PhraseCycler::new(vec!["hello".to_owned()], TypingTimings::default()).expect("valid cycler");
    assert_eq!(*c.state(), PhraseCycleState::default());
    assert_eq!(c.phase(), Phase::Typing);
    assert_eq!(c.text(), "");
    assert!(!c.is_observing());
}

// --- Ticking ---

#[test]
fn tick_without_observing_does_nothing() {
    let mut c = PhraseCycler::new(vec!["hello".to_owned()], TypingTimings::default()).expect("valid cycler");
    assert_eq!(c.tick(0.0), Tick { reschedule: false, text_changed: false });
    assert_eq!(c.tick(5000.0), Tick { reschedule: false, text_changed: false });
    assert_eq!(c.state().last_frame_ms, None);
    assert_eq!(c.text(), "");
}

#[test]
fn first_tick_has_zero_delta() {
    let mut c = cycler(&["hello"]);
    let tick = c.tick(123_456.0);
    assert_eq!(tick, Tick { reschedule: true, text_changed: false });
    assert_eq!(c.state().total_delay_ms, 0.0);
    assert_eq!(c.state().last_frame_ms, Some(123_456.0));
}

#[test]
fn types_one_character_per_typing_interval() {
    let mut c = cycler(&["hello"]);
    run(&mut c, 0.0, 90.0);
    assert_eq!(c.text(), "");
    assert!(c.tick(100.0).text_changed);
    assert_eq!(c.text(), "h");
    run(&mut c, 110.0, 300.0);
    assert_eq!(c.text(), "hel");
}

#[test]
fn full_phrase_enters_pause_then_deletes() {
    let mut c = cycler(&["ab"]);
    run(&mut c, 0.0, 200.0);
    assert_eq!(c.text(), "ab");
    assert_eq!(c.phase(), Phase::Paused);
    assert!(c.state().is_deleting);

    // Pause holds the text for the full pause duration.
    run(&mut c, 210.0, 1690.0);
    assert_eq!(c.phase(), Phase::Paused);
    c.tick(1700.0);
    assert_eq!(c.phase(), Phase::Deleting);
    assert_eq!(c.state().total_delay_ms, 0.0);

    run(&mut c, 1710.0, 1750.0);
    assert_eq!(c.text(), "a");
}

#[test]
fn pause_does_not_advance_characters() {
    let mut c = cycler(&["ab"]);
    run(&mut c, 0.0, 200.0);
    let before = c.state().char_index;
    run(&mut c, 210.0, 1000.0);
    assert_eq!(c.state().char_index, before);
}

#[test]
fn phrase_round_trip_advances_to_next_phrase() {
    let mut c = cycler(&["ab", "xyz"]);
    // type 2 chars (200) + pause (1500) + delete 2 chars (100) + pause (1500)
    run(&mut c, 0.0, 3300.0);
    let s = c.state();
    assert_eq!(s.char_index, 0);
    assert!(!s.is_deleting);
    assert!(!s.is_paused);
    assert_eq!(s.phrase_index, 1);
    assert_eq!(c.text(), "");

    run(&mut c, 3310.0, 3400.0);
    assert_eq!(c.text(), "x");
}

#[test]
fn phrase_index_wraps_around() {
    let mut c = cycler(&["a"]);
    // type (100) + pause (1500) + delete (50) lands back on phrase 0.
    run(&mut c, 0.0, 1650.0);
    assert_eq!(c.state().phrase_index, 0);
    assert!(c.state().is_paused);
    assert!(!c.state().is_deleting);
}

#[test]
fn char_index_stays_within_phrase_bounds() {
    let mut c = cycler(&["héllo wörld", "ok"]);
    let mut t = 0.0;
    while t < 20_000.0 {
        c.tick(t);
        let s = c.state();
        let len = ["héllo wörld", "ok"][s.phrase_index].chars().count();
        assert!(s.char_index <= len);
        assert!(c.text().chars().count() == s.char_index);
        t += 7.0;
    }
}

// --- Visibility ---

#[test]
fn visible_while_running_is_unchanged() {
    let mut c = cycler(&["hello"]);
    assert_eq!(c.on_visibility_change(Visibility::Visible), FrameRequest::Unchanged);
}

#[test]
fn hidden_stops_and_clears_timing_only() {
    let mut c = cycler(&["hello"]);
    run(&mut c, 0.0, 250.0);
    assert_eq!(c.text(), "he");

    assert_eq!(c.on_visibility_change(Visibility::Hidden), FrameRequest::Stop);
    let s = *c.state();
    assert_eq!(s.last_frame_ms, None);
    assert_eq!(s.total_delay_ms, 0.0);
    assert_eq!(s.char_index, 2);
    assert!(!c.is_observing());
    assert!(!c.tick(300.0).reschedule);
}

#[test]
fn resume_continues_mid_phrase() {
    let mut c = cycler(&["hello"]);
    run(&mut c, 0.0, 300.0);
    assert_eq!(c.text(), "hel");
    c.on_visibility_change(Visibility::Hidden);

    // Long gap while hidden must not count as elapsed time.
    assert_eq!(c.on_visibility_change(Visibility::Visible), FrameRequest::Start);
    c.tick(60_000.0);
    assert_eq!(c.text(), "hel");
    run(&mut c, 60_010.0, 60_100.0);
    assert_eq!(c.text(), "hell");
    assert!(!c.state().is_deleting);
}

#[test]
fn resume_mid_delete_keeps_direction() {
    let mut c = cycler(&["abc"]);
    // type 300 + pause 1500 + one delete step
    run(&mut c, 0.0, 1850.0);
    assert!(c.state().is_deleting);
    let idx = c.state().char_index;
    assert!(idx < 3 && idx > 0);

    c.on_visibility_change(Visibility::Hidden);
    c.on_visibility_change(Visibility::Visible);
    assert!(c.state().is_deleting);
    assert_eq!(c.state().char_index, idx);
}

#[test]
fn becoming_visible_does_not_render_before_first_tick() {
    let mut c = PhraseCycler::new(vec!["hello".to_owned()], TypingTimings::default()).expect("valid cycler");
    assert_eq!(c.on_visibility_change(Visibility::Visible), FrameRequest::Start);
    assert_eq!(c.text(), "");
    assert!(c.is_observing());
}
