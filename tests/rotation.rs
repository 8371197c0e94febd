//! End-to-end rotation behavior: segmentation, stagger, index movement and
//! the automatic timer.

use rotating_text::segment::reassemble;
use rotating_text::{
    delay, segment, ConfigError, Rotator, RotatorConfig, RotatorState, SegmentStrategy, SplitBy,
    StaggerFrom,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(1000);

fn manual(texts: &[&str], loop_phrases: bool) -> Rotator {
    Rotator::new(
        RotatorConfig::new(texts.iter().copied())
            .with_auto(false)
            .with_loop(loop_phrases),
    )
    .unwrap()
}

#[test]
fn segmentation_reconstructs_phrase() {
    let phrases = [
        "hi there 👋",
        "welcome to eclipse 🌘",
        "stay tuned 🔥",
        "na\u{ef}ve cafe\u{301}",
        "👨\u{200d}👩\u{200d}👧\u{200d}👦 family",
        "x",
    ];
    for phrase in phrases {
        for strategy in [SegmentStrategy::Grapheme, SegmentStrategy::CodePoint] {
            let words = segment(phrase, &SplitBy::Characters, strategy.segmenter());
            assert_eq!(reassemble(&words, " "), phrase, "{strategy:?}");
        }
    }
}

#[test]
fn grapheme_strategy_keeps_emoji_whole() {
    let grapheme = SegmentStrategy::Grapheme.segmenter();
    let graphemes = segment("hi 👋🏽", &SplitBy::Characters, grapheme);
    assert_eq!(graphemes[1].units, ["👋🏽"]);

    let code_point = SegmentStrategy::CodePoint.segmenter();
    let code_points = segment("hi 👋🏽", &SplitBy::Characters, code_point);
    assert_eq!(code_points[1].units.len(), 2);
}

#[test]
fn index_stays_in_bounds() {
    for loop_phrases in [true, false] {
        let mut rotator = manual(&["a", "b", "c", "d"], loop_phrases);
        for _ in 0..25 {
            rotator.next();
            assert!(rotator.index() < 4);
        }
    }
}

#[test]
fn loop_wraps_to_first() {
    let mut rotator = manual(&["a", "b", "c"], true);
    rotator.jump_to(2);
    assert_eq!(rotator.next(), 0);
}

#[test]
fn no_loop_holds_at_last() {
    let mut rotator = manual(&["a", "b", "c"], false);
    rotator.jump_to(2);
    assert_eq!(rotator.next(), 2);
}

#[test]
fn center_stagger_is_symmetric() {
    let d0 = delay(0, 5, StaggerFrom::Center, 1.0);
    let d4 = delay(4, 5, StaggerFrom::Center, 1.0);
    assert!((d0 - d4).abs() < 1e-9);
    assert!((d0 - 2.0).abs() < 1e-9);
    assert!(delay(2, 5, StaggerFrom::Center, 1.0).abs() < 1e-9);
}

#[test]
fn first_stagger_is_linear() {
    assert!((delay(3, 10, StaggerFrom::First, 0.05) - 0.15).abs() < 1e-9);
}

#[test]
fn empty_phrase_list_is_a_configuration_error() {
    let err = Rotator::new(RotatorConfig::new(Vec::<String>::new())).unwrap_err();
    assert_eq!(err, ConfigError::EmptyPhraseList);
    assert_eq!(err.to_string(), "phrase list must be non-empty");
}

#[test]
fn unknown_stagger_origin_is_rejected() {
    assert!(matches!(
        "sideways".parse::<StaggerFrom>(),
        Err(ConfigError::InvalidStaggerFrom(_))
    ));
}

#[test]
fn auto_rotation_cycles_two_phrases() {
    let mut rotator = Rotator::new(
        RotatorConfig::new(["hi", "yo"]).with_rotation_interval(Duration::from_millis(20)),
    )
    .unwrap();
    rotator.mount().unwrap();
    assert_eq!(rotator.state(), RotatorState::Displaying(0));
    assert_eq!(rotator.current(), "hi");

    assert_eq!(rotator.wait_tick(TIMEOUT), 1);
    assert_eq!(rotator.current(), "yo");

    assert_eq!(rotator.wait_tick(TIMEOUT), 1);
    assert_eq!(rotator.current(), "hi");
}

#[test]
fn auto_rotation_notifies_on_next() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut rotator = Rotator::new(
        RotatorConfig::new(["a", "b", "c"])
            .with_rotation_interval(Duration::from_millis(10))
            .on_next(move |i| sink.lock().unwrap().push(i)),
    )
    .unwrap();
    rotator.mount().unwrap();

    for _ in 0..3 {
        assert_eq!(rotator.wait_tick(TIMEOUT), 1);
    }
    assert_eq!(*seen.lock().unwrap(), [1, 2, 0]);
}

#[test]
fn manual_next_works_alongside_timer() {
    let mut rotator = Rotator::new(
        RotatorConfig::new(["a", "b", "c"]).with_rotation_interval(Duration::from_secs(60)),
    )
    .unwrap();
    rotator.mount().unwrap();
    assert_eq!(rotator.next(), 1);
    assert_eq!(rotator.poll(), 0);
    assert_eq!(rotator.index(), 1);
}

#[test]
fn interval_change_replaces_the_timer() {
    let mut rotator = Rotator::new(
        RotatorConfig::new(["a", "b"]).with_rotation_interval(Duration::from_millis(5)),
    )
    .unwrap();
    rotator.mount().unwrap();

    rotator.set_rotation_interval(Duration::from_secs(60)).unwrap();
    assert_eq!(rotator.timer_interval(), Some(Duration::from_secs(60)));

    // The 5ms timer is gone: nothing arrives
    thread::sleep(Duration::from_millis(100));
    assert_eq!(rotator.poll(), 0);
    assert_eq!(rotator.index(), 0);
}

#[test]
fn unmount_stops_rotation() {
    let mut rotator = Rotator::new(
        RotatorConfig::new(["a", "b"]).with_rotation_interval(Duration::from_millis(5)),
    )
    .unwrap();
    rotator.mount().unwrap();
    rotator.unmount();

    thread::sleep(Duration::from_millis(50));
    assert_eq!(rotator.poll(), 0);
    assert_eq!(rotator.wait_tick(Duration::from_millis(20)), 0);
    assert_eq!(rotator.state(), RotatorState::Idle);
}

#[test]
fn disabling_auto_stops_rotation() {
    let mut rotator = Rotator::new(
        RotatorConfig::new(["a", "b"]).with_rotation_interval(Duration::from_millis(5)),
    )
    .unwrap();
    rotator.mount().unwrap();
    rotator.set_auto(false).unwrap();

    thread::sleep(Duration::from_millis(50));
    assert_eq!(rotator.poll(), 0);
}
