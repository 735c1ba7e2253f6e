//! The gauge session: state, controller, static face, bars and the latest frame.
//!
//! `Dashboard` is the only owner of mutable gauge data. Every entry point
//! mutates the [`PressureState`] and then calls [`refresh`](Dashboard::refresh),
//! which projects a [`DisplayFrame`], applies a requested stop (and projects
//! again), and copies the active count into both bars. A caller therefore
//! never observes a frame with `stop_requested` set.
//!
//! # Input Handlers
//!
//! | Action | Effect |
//! |--------|--------|
//! | `IncreaseTarget` / `DecreaseTarget` | target ± 1 PSI, clamped to `[0, max]` |
//! | `ToggleActivation` | ignored when locked; stop if running, else try to start |
//! | `ToggleManualWarning` | flip the manual flag (a running inflation stops) |
//! | `TriggerCriticalWarning` | raise the critical flag and stop |
//! | `ResetDemo` | clear both flags, restore startup readings, stop |

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{GaugeConfig, TARGET_STEP_PSI};
use crate::controller::{InflationController, Phase, TickOutcome};
use crate::display::{DisplayFrame, project};
use crate::error::ConfigError;
use crate::gauge::GaugeFace;
use crate::input::Action;
use crate::segments::SegmentBar;
use crate::state::PressureState;

pub struct Dashboard {
    config: GaugeConfig,
    state: PressureState,
    controller: InflationController,
    face: GaugeFace,
    top_bar: SegmentBar,
    bottom_bar: SegmentBar,
    frame: DisplayFrame,
}

impl Dashboard {
    /// Validate `config` and build the startup session, already projected.
    pub fn new(config: GaugeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = PressureState::from_config(&config);
        let frame = project(&state, config.segment_count);
        let mut dashboard = Self {
            controller: InflationController::from_config(&config),
            face: GaugeFace::build(config.max_psi),
            top_bar: SegmentBar::new(config.segment_count),
            bottom_bar: SegmentBar::new(config.segment_count),
            state,
            frame,
            config,
        };
        dashboard.refresh();

        info!(
            max_psi = dashboard.config.max_psi,
            target = dashboard.state.target_psi(),
            segments = dashboard.config.segment_count,
            ticks = dashboard.face.ticks().len(),
            "gauge ready"
        );
        Ok(dashboard)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn config(&self) -> &GaugeConfig { &self.config }

    #[inline]
    pub const fn state(&self) -> &PressureState { &self.state }

    #[inline]
    pub const fn frame(&self) -> &DisplayFrame { &self.frame }

    #[inline]
    pub const fn face(&self) -> &GaugeFace { &self.face }

    #[inline]
    pub const fn top_bar(&self) -> &SegmentBar { &self.top_bar }

    #[inline]
    pub const fn bottom_bar(&self) -> &SegmentBar { &self.bottom_bar }

    #[inline]
    pub const fn phase(&self) -> Phase { self.controller.phase() }

    // -------------------------------------------------------------------------
    // Entry Points
    // -------------------------------------------------------------------------

    /// Apply one user action. `now` anchors the inflation timer when it starts.
    pub fn handle(
        &mut self,
        action: Action,
        now: Instant,
    ) {
        debug!(?action, "input");
        match action {
            Action::IncreaseTarget => self.increase_target(),
            Action::DecreaseTarget => self.decrease_target(),
            Action::ToggleActivation => self.toggle_activation(now),
            Action::ToggleManualWarning => self.toggle_manual_warning(),
            Action::TriggerCriticalWarning => self.trigger_critical_warning(),
            Action::ResetDemo => self.reset_demo(),
        }
    }

    /// Apply every inflation tick due by `now`, refreshing after each one.
    ///
    /// Returns the number of ticks applied. Ticks left over after inflation
    /// ends are discarded.
    pub fn advance(
        &mut self,
        now: Instant,
    ) -> u32 {
        let due = self.controller.due_ticks(now);
        let mut applied = 0;
        for _ in 0..due {
            if self.controller.phase() == Phase::Idle {
                break;
            }
            let outcome = self.controller.tick(&mut self.state);
            applied += 1;
            self.refresh();
            if outcome == TickOutcome::Completed {
                break;
            }
        }
        applied
    }

    /// Re-project the frame, applying any stop it requests.
    fn refresh(&mut self) {
        let segments = self.config.segment_count;
        self.frame = project(&self.state, segments);
        if self.frame.stop_requested {
            self.controller.stop(&mut self.state);
            self.frame = project(&self.state, segments);
        }
        self.top_bar.apply(self.frame.active_segments);
        self.bottom_bar.apply(self.frame.active_segments);
    }

    // -------------------------------------------------------------------------
    // Input Handlers
    // -------------------------------------------------------------------------

    fn increase_target(&mut self) {
        if self.state.raise_target(TARGET_STEP_PSI) {
            debug!(target = self.state.target_psi(), "target raised");
        }
        self.refresh();
    }

    fn decrease_target(&mut self) {
        if self.state.lower_target(TARGET_STEP_PSI) {
            debug!(target = self.state.target_psi(), "target lowered");
        }
        self.refresh();
    }

    fn toggle_activation(
        &mut self,
        now: Instant,
    ) {
        if self.state.is_locked() {
            debug!("activation locked");
            return;
        }
        if self.state.is_inflating() {
            self.controller.stop(&mut self.state);
        } else if let Err(reason) = self.controller.start(&mut self.state, now) {
            debug!(?reason, "start refused");
        }
        self.refresh();
    }

    fn toggle_manual_warning(&mut self) {
        self.state.has_manual_warning = !self.state.has_manual_warning;
        if self.state.has_manual_warning {
            warn!("manual override engaged");
        } else {
            info!("manual override released");
        }
        self.refresh();
    }

    fn trigger_critical_warning(&mut self) {
        self.state.has_critical_warning = true;
        warn!(current = self.state.current_psi(), "critical over-pressure");
        self.controller.stop(&mut self.state);
        self.refresh();
    }

    fn reset_demo(&mut self) {
        self.state.reset(self.config.initial_current_psi, self.config.initial_target_psi);
        self.controller.stop(&mut self.state);
        info!("demo reset");
        self.refresh();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
