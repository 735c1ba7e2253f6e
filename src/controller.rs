//! Inflation controller: the timed process that drives current toward target.
//!
//! # States
//!
//! ```text
//!            start (guards pass)
//!   ┌──────┐ ─────────────────────▶ ┌───────────┐
//!   │ Idle │                        │ Inflating │ ── tick: current += increment
//!   └──────┘ ◀───────────────────── └───────────┘
//!            stop / tick reaches target
//! ```
//!
//! `start` is refused while either warning is raised or the target is already
//! reached. `stop` is idempotent. The controller owns the only
//! [`RepeatingTimer`] handle; `is_inflating` on the state is true exactly while
//! that handle is armed.
//!
//! Display updates are the owner's job: every call here is followed by a
//! projection in [`Dashboard`](crate::dashboard::Dashboard).

use std::time::{Duration, Instant};

use tracing::{info, trace};

use crate::config::GaugeConfig;
use crate::state::PressureState;
use crate::timer::RepeatingTimer;

/// Controller state, derived from whether the timer handle is armed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Inflating,
}

/// Why a start request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRefusal {
    CriticalLock,
    ManualOverride,
    AtTarget,
}

/// Result of applying one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Current rose and is still below target.
    Advanced,
    /// Current reached target, was clamped to it, and inflation stopped.
    Completed,
    /// No inflation in progress; nothing changed.
    Idle,
}

/// Owns the inflation timer and applies ticks to a [`PressureState`].
#[derive(Clone, Debug)]
pub struct InflationController {
    interval: Duration,
    increment: f64,
    timer: Option<RepeatingTimer>,
}

impl InflationController {
    pub const fn new(
        interval: Duration,
        increment: f64,
    ) -> Self {
        Self { interval, increment, timer: None }
    }

    pub const fn from_config(config: &GaugeConfig) -> Self { Self::new(config.tick_interval, config.tick_increment) }

    #[inline]
    pub const fn phase(&self) -> Phase {
        if self.timer.is_some() { Phase::Inflating } else { Phase::Idle }
    }

    /// Begin inflating, unless a warning is raised or the target is reached.
    ///
    /// Any previously armed timer is cancelled before the new one is armed.
    pub fn start(
        &mut self,
        state: &mut PressureState,
        now: Instant,
    ) -> Result<(), StartRefusal> {
        if state.has_critical_warning {
            return Err(StartRefusal::CriticalLock);
        }
        if state.has_manual_warning {
            return Err(StartRefusal::ManualOverride);
        }
        if state.is_at_target() {
            return Err(StartRefusal::AtTarget);
        }

        self.timer.take();
        self.timer = Some(RepeatingTimer::start(self.interval, now));
        state.is_inflating = true;
        info!(current = state.current_psi, target = state.target_psi, "inflation started");
        Ok(())
    }

    /// Cancel the timer and mark the state idle.
    ///
    /// Returns whether inflation was actually running.
    pub fn stop(
        &mut self,
        state: &mut PressureState,
    ) -> bool {
        let was_running = self.timer.take().is_some();
        state.is_inflating = false;
        if was_running {
            info!(current = state.current_psi, target = state.target_psi, "inflation stopped");
        }
        was_running
    }

    /// Timer periods that have elapsed since the last poll (0 when idle).
    pub fn due_ticks(
        &mut self,
        now: Instant,
    ) -> u32 {
        self.timer.as_mut().map_or(0, |timer| timer.poll(now))
    }

    /// Apply one tick: raise current by the increment, clamping and stopping
    /// at the target.
    pub fn tick(
        &mut self,
        state: &mut PressureState,
    ) -> TickOutcome {
        if self.timer.is_none() {
            return TickOutcome::Idle;
        }

        state.current_psi += self.increment;
        trace!(current = state.current_psi, "inflation tick");

        if state.is_at_target() {
            state.current_psi = state.target_psi;
            self.timer = None;
            state.is_inflating = false;
            info!(target = state.target_psi, "inflation complete");
            return TickOutcome::Completed;
        }
        TickOutcome::Advanced
    }
}

impl Default for InflationController {
    fn default() -> Self { Self::from_config(&GaugeConfig::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
