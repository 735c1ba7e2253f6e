//! Poll-driven repeating timer.
//!
//! The simulator loop is single-threaded, so the inflation "timer" is a handle
//! that the loop polls once per frame with the current [`Instant`]. Each poll
//! reports how many periods have elapsed since the last one; a frame that
//! stalls (window drag, debugger) catches up instead of losing ticks.
//!
//! Cancelling is dropping the handle. The controller stores it in an
//! `Option`, so cancel is `take()` and arming replaces any previous handle.

use std::time::{Duration, Instant};

/// A periodic deadline advanced by [`poll`](Self::poll).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
}

impl RepeatingTimer {
    /// Arm a timer whose first period ends at `now + period`.
    pub fn start(
        period: Duration,
        now: Instant,
    ) -> Self {
        Self { period, next_due: now + period }
    }

    #[inline]
    pub const fn period(&self) -> Duration { self.period }

    #[inline]
    pub const fn next_due(&self) -> Instant { self.next_due }

    /// Number of periods that ended at or before `now` since the last poll.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> u32 {
        if now < self.next_due || self.period.is_zero() {
            return 0;
        }

        let behind = now.duration_since(self.next_due);
        let due = behind.as_nanos() / self.period.as_nanos() + 1;
        let due = u32::try_from(due).unwrap_or(u32::MAX);

        self.next_due = self
            .period
            .checked_mul(due)
            .and_then(|advance| self.next_due.checked_add(advance))
            .unwrap_or(now + self.period);
        due
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
