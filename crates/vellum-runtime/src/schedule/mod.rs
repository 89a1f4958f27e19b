//! Explicit coalescing schedulers.
//!
//! High-frequency DOM signals must not translate one-for-one into transport
//! messages, so the runtime owns one [`DebounceSlot`] per debounced event
//! kind and a single [`LongPressTracker`] for pointer classification. Both
//! are plain state machines driven by a caller-supplied monotonic `now`:
//! trigger (cancel-and-replace), then fire deterministically once the wait
//! elapses. No hidden timers, no closures.

use std::time::{Duration, Instant};

use vellum_protocol::ElementInfo;

/// A single-slot pending timer with cancel-and-replace semantics.
///
/// Triggering while a deadline is pending replaces it, so a burst of N
/// triggers inside the wait window coalesces into exactly one firing.
#[derive(Debug, Clone)]
pub struct DebounceSlot {
    wait: Duration,
    deadline: Option<Instant>,
}

impl DebounceSlot {
    /// Creates a slot with the given coalescing window.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the slot to fire one window from `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns whether a firing is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Fires if the pending deadline has elapsed, clearing the slot.
    ///
    /// Returns `true` at most once per trigger burst.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Outcome of releasing a tracked pointer press.
#[derive(Debug, Clone, PartialEq)]
pub enum PressClass {
    /// The press ended before the long-press threshold.
    Short,
    /// The press lasted at least the threshold.
    Long {
        /// The pressed element, when the deadline had not already fired
        /// through [`LongPressTracker::fire_due`].
        unfired: Option<ElementInfo>,
    },
}

#[derive(Debug, Clone)]
struct PressSlot {
    down_at: Instant,
    deadline: Instant,
    target: ElementInfo,
    fired: bool,
}

/// Tracks at most one pending pointer press at a time.
///
/// A second press before resolution replaces the first, and every exit path
/// (release, leave, cancel) clears the slot so no stale deadline can fire
/// after the pointer left the element.
#[derive(Debug, Clone)]
pub struct LongPressTracker {
    delay: Duration,
    slot: Option<PressSlot>,
}

impl LongPressTracker {
    /// Creates a tracker with the given long-press threshold.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, slot: None }
    }

    /// Records a pointer-down, replacing any pending press.
    pub fn press(&mut self, now: Instant, target: ElementInfo) {
        self.slot = Some(PressSlot {
            down_at: now,
            deadline: now + self.delay,
            target,
            fired: false,
        });
    }

    /// Fires the pending long-press deadline if it has elapsed.
    ///
    /// Returns the pressed element exactly once per press; the slot stays
    /// occupied until an exit path clears it, so the matching release can
    /// still classify the press as long.
    pub fn fire_due(&mut self, now: Instant) -> Option<ElementInfo> {
        let slot = self.slot.as_mut()?;
        if slot.fired || now < slot.deadline {
            return None;
        }
        slot.fired = true;
        Some(slot.target.clone())
    }

    /// Classifies and clears the pending press on pointer release.
    ///
    /// With no pending press the release is short by definition.
    pub fn release(&mut self, now: Instant) -> PressClass {
        let Some(slot) = self.slot.take() else {
            return PressClass::Short;
        };
        if now.duration_since(slot.down_at) >= self.delay {
            PressClass::Long {
                unfired: (!slot.fired).then_some(slot.target),
            }
        } else {
            PressClass::Short
        }
    }

    /// Clears the pending press without classifying it.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Returns whether a press is currently tracked.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests;
