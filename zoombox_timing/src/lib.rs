// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomBox Timing: host-polled one-shot timers.
//!
//! UI runtimes often want to run an action "a little later" on the UI thread,
//! once other input has had a chance to be delivered, and only if some
//! condition still holds by then. This crate models that as a plain value:
//!
//! - [`OneShot::arm`] records a deadline from a host-supplied timestamp.
//! - The host calls [`OneShot::poll`] from its event loop (or a timer
//!   callback) with the current time and a guard closure.
//! - When the deadline has passed, the guard is evaluated **at that moment**,
//!   exactly once, and the timer disarms itself whatever the guard says.
//!
//! Timestamps are milliseconds from any monotonic clock the host chooses.
//! Nothing here spawns threads or reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoombox_timing::{Fire, OneShot};
//!
//! let mut timer = OneShot::new();
//! timer.arm(1_000, 100);
//!
//! assert_eq!(timer.poll(1_050, || true), Fire::Pending);
//! assert_eq!(timer.poll(1_100, || true), Fire::Fired);
//! assert_eq!(timer.poll(1_200, || true), Fire::Idle);
//!
//! // The guard is only consulted when the deadline is reached.
//! timer.arm(2_000, 100);
//! assert_eq!(timer.poll(2_150, || false), Fire::Skipped);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Result of polling a [`OneShot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fire {
    /// The timer is not armed.
    Idle,
    /// The timer is armed and its deadline has not been reached.
    Pending,
    /// The deadline passed and the guard held; the action should run now.
    Fired,
    /// The deadline passed but the guard no longer held; the action is dropped.
    Skipped,
}

impl Fire {
    /// Returns `true` if the caller should run its action.
    #[must_use]
    pub fn is_fired(self) -> bool {
        self == Self::Fired
    }
}

/// A cancelable, single-shot deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<u64>,
}

impl OneShot {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` milliseconds after `now`.
    ///
    /// Re-arming replaces any previous deadline.
    pub fn arm(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarms the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Polls the timer at time `now`.
    ///
    /// `guard` runs only when the deadline has been reached, and the timer is
    /// disarmed by that same call.
    pub fn poll(&mut self, now: u64, guard: impl FnOnce() -> bool) -> Fire {
        match self.deadline {
            None => Fire::Idle,
            Some(deadline) if now < deadline => Fire::Pending,
            Some(_) => {
                self.deadline = None;
                if guard() {
                    Fire::Fired
                } else {
                    Fire::Skipped
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{Fire, OneShot};

    #[test]
    fn fresh_timer_is_idle() {
        let mut timer = OneShot::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(0, || true), Fire::Idle);
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = OneShot::new();
        timer.arm(10, 5);
        assert_eq!(timer.deadline(), Some(15));
        assert_eq!(timer.poll(14, || true), Fire::Pending);
        assert!(timer.poll(15, || true).is_fired());
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(16, || true), Fire::Idle);
    }

    #[test]
    fn guard_is_checked_only_when_due() {
        let mut timer = OneShot::new();
        let calls = Cell::new(0);
        let guard = || {
            calls.set(calls.get() + 1);
            false
        };

        timer.arm(0, 100);
        assert_eq!(timer.poll(50, guard), Fire::Pending);
        assert_eq!(calls.get(), 0);

        assert_eq!(timer.poll(100, guard), Fire::Skipped);
        assert_eq!(calls.get(), 1);
        assert_eq!(timer.poll(200, guard), Fire::Idle);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = OneShot::new();
        timer.arm(0, 10);
        timer.cancel();
        assert_eq!(timer.poll(20, || true), Fire::Idle);
    }

    #[test]
    fn rearm_replaces_deadline() {
        let mut timer = OneShot::new();
        timer.arm(0, 10);
        timer.arm(5, 10);
        assert_eq!(timer.poll(10, || true), Fire::Pending);
        assert_eq!(timer.poll(15, || true), Fire::Fired);
    }

    #[test]
    fn arm_saturates() {
        let mut timer = OneShot::new();
        timer.arm(u64::MAX - 1, 10);
        assert_eq!(timer.deadline(), Some(u64::MAX));
    }
}
