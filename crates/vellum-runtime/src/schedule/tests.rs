//! Unit tests for the coalescing schedulers.

use std::time::{Duration, Instant};

use vellum_protocol::ElementInfo;

use super::{DebounceSlot, LongPressTracker, PressClass};

const WAIT: Duration = Duration::from_millis(50);

// ---------------------------------------------------------------------------
// Debounce slot
// ---------------------------------------------------------------------------

#[test]
fn idle_slot_never_fires() {
    let mut slot = DebounceSlot::new(WAIT);
    assert!(!slot.is_pending());
    assert!(!slot.fire_due(Instant::now()));
}

#[test]
fn fires_once_after_the_window() {
    let start = Instant::now();
    let mut slot = DebounceSlot::new(WAIT);
    slot.trigger(start);

    assert!(!slot.fire_due(start + Duration::from_millis(49)));
    assert!(slot.fire_due(start + WAIT));
    assert!(!slot.fire_due(start + Duration::from_millis(200)));
}

#[test]
fn retrigger_replaces_the_deadline() {
    let start = Instant::now();
    let mut slot = DebounceSlot::new(WAIT);
    slot.trigger(start);
    slot.trigger(start + Duration::from_millis(40));

    // The first deadline has been cancelled.
    assert!(!slot.fire_due(start + Duration::from_millis(60)));
    assert!(slot.fire_due(start + Duration::from_millis(90)));
}

#[test]
fn burst_of_triggers_coalesces_to_one_firing() {
    let start = Instant::now();
    let mut slot = DebounceSlot::new(WAIT);
    for offset in 0..5 {
        slot.trigger(start + Duration::from_millis(offset));
    }

    let mut firings = 0;
    for offset in 0..200 {
        if slot.fire_due(start + Duration::from_millis(offset)) {
            firings += 1;
        }
    }
    assert_eq!(firings, 1);
}

#[test]
fn cancel_discards_the_pending_firing() {
    let start = Instant::now();
    let mut slot = DebounceSlot::new(WAIT);
    slot.trigger(start);
    slot.cancel();
    assert!(!slot.fire_due(start + WAIT));
}

// ---------------------------------------------------------------------------
// Long-press tracker
// ---------------------------------------------------------------------------

const DELAY: Duration = Duration::from_millis(500);

fn target() -> ElementInfo {
    ElementInfo::new("IMG")
}

#[test]
fn short_release_classifies_as_short() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());

    assert_eq!(
        tracker.release(start + Duration::from_millis(100)),
        PressClass::Short
    );
    assert!(!tracker.is_pending());
}

#[test]
fn deadline_fires_exactly_once() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());

    assert_eq!(tracker.fire_due(start + Duration::from_millis(499)), None);
    assert_eq!(tracker.fire_due(start + DELAY), Some(target()));
    assert_eq!(tracker.fire_due(start + Duration::from_secs(2)), None);
}

#[test]
fn release_after_fired_deadline_is_long_without_a_pending_target() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());
    let _ = tracker.fire_due(start + DELAY);

    assert_eq!(
        tracker.release(start + Duration::from_millis(600)),
        PressClass::Long { unfired: None }
    );
}

#[test]
fn release_past_threshold_without_a_tick_reports_the_unfired_target() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());

    assert_eq!(
        tracker.release(start + Duration::from_millis(700)),
        PressClass::Long {
            unfired: Some(target())
        }
    );
}

#[test]
fn second_press_replaces_the_first() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());
    tracker.press(start + Duration::from_millis(400), ElementInfo::new("A"));

    // The first press's deadline no longer exists.
    assert_eq!(tracker.fire_due(start + DELAY), None);
    assert_eq!(
        tracker.fire_due(start + Duration::from_millis(900)),
        Some(ElementInfo::new("A"))
    );
}

#[test]
fn cancel_clears_the_pending_press_on_every_exit_path() {
    let start = Instant::now();
    let mut tracker = LongPressTracker::new(DELAY);
    tracker.press(start, target());
    tracker.cancel();

    assert_eq!(tracker.fire_due(start + DELAY), None);
    assert_eq!(tracker.release(start + Duration::from_secs(1)), PressClass::Short);
}
