//! Pressure state: the single source of truth for the gauge.
//!
//! One `PressureState` exists per session, owned by the
//! [`Dashboard`](crate::dashboard::Dashboard). It stores the raw readings and
//! flags; everything shown on screen is derived from it on demand.
//!
//! # Derived Values
//!
//! | Value | Formula |
//! |-------|---------|
//! | percent | `clamp(current / target * 100, 0, 100)`, or 100 when target is 0 |
//! | active segments | `round(percent / 100 * N)` |
//! | needle angle | `-135 + min(current, max) / max * 270` degrees |
//!
//! The needle clamps at the dial ceiling; the stored current reading does not.
//!
//! # Ownership of the Flags
//!
//! `is_inflating` is written only by the
//! [`InflationController`](crate::controller::InflationController), which keeps
//! it in step with its timer handle. The warning flags are written by the
//! input handlers.

use crate::config::GaugeConfig;
use crate::gauge::{SWEEP_DEG, SWEEP_START_DEG};

/// Readings and override flags for one gauge session.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureState {
    pub(crate) current_psi: f64,
    pub(crate) target_psi: f64,
    max_psi: f64,
    pub(crate) is_inflating: bool,
    pub(crate) has_manual_warning: bool,
    pub(crate) has_critical_warning: bool,
}

impl PressureState {
    /// Create an idle state with both warnings cleared.
    pub const fn new(
        max_psi: f64,
        current_psi: f64,
        target_psi: f64,
    ) -> Self {
        Self {
            current_psi,
            target_psi,
            max_psi,
            is_inflating: false,
            has_manual_warning: false,
            has_critical_warning: false,
        }
    }

    /// Create the startup state described by `config`.
    pub const fn from_config(config: &GaugeConfig) -> Self {
        Self::new(config.max_psi, config.initial_current_psi, config.initial_target_psi)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn current_psi(&self) -> f64 { self.current_psi }

    #[inline]
    pub const fn target_psi(&self) -> f64 { self.target_psi }

    #[inline]
    pub const fn max_psi(&self) -> f64 { self.max_psi }

    #[inline]
    pub const fn is_inflating(&self) -> bool { self.is_inflating }

    #[inline]
    pub const fn has_manual_warning(&self) -> bool { self.has_manual_warning }

    #[inline]
    pub const fn has_critical_warning(&self) -> bool { self.has_critical_warning }

    /// Activation is locked while the critical warning is raised.
    #[inline]
    pub const fn is_locked(&self) -> bool { self.has_critical_warning }

    /// Whether the current reading has reached the target.
    #[inline]
    pub fn is_at_target(&self) -> bool { self.current_psi >= self.target_psi }

    // -------------------------------------------------------------------------
    // Derived Values
    // -------------------------------------------------------------------------

    /// Progress toward the target in percent, always within `0.0..=100.0`.
    ///
    /// A target of zero (or below) counts as already reached.
    pub fn percent(&self) -> f64 {
        if self.target_psi <= 0.0 {
            return 100.0;
        }
        (self.current_psi / self.target_psi * 100.0).clamp(0.0, 100.0)
    }

    /// Number of lit segments out of `segment_count`.
    pub fn active_segments(
        &self,
        segment_count: usize,
    ) -> usize {
        let lit = (self.percent() / 100.0 * segment_count as f64).round() as usize;
        lit.min(segment_count)
    }

    /// Needle rotation in degrees, `-135.0` at zero and `+135.0` at the ceiling.
    pub fn needle_angle(&self) -> f64 {
        let clamped = self.current_psi.clamp(0.0, self.max_psi);
        SWEEP_START_DEG + clamped / self.max_psi * SWEEP_DEG
    }

    // -------------------------------------------------------------------------
    // Mutations (input handlers)
    // -------------------------------------------------------------------------

    /// Raise the target by `step`, saturating at the ceiling.
    ///
    /// Returns `false` when the target was already at the ceiling.
    pub(crate) fn raise_target(
        &mut self,
        step: f64,
    ) -> bool {
        let next = (self.target_psi + step).min(self.max_psi);
        let changed = next != self.target_psi;
        self.target_psi = next;
        changed
    }

    /// Lower the target by `step`, saturating at zero.
    ///
    /// Returns `false` when the target was already zero.
    pub(crate) fn lower_target(
        &mut self,
        step: f64,
    ) -> bool {
        let next = (self.target_psi - step).max(0.0);
        let changed = next != self.target_psi;
        self.target_psi = next;
        changed
    }

    /// Restore the startup readings and clear both warnings.
    ///
    /// The inflating flag is left to the controller, which stops alongside.
    pub(crate) fn reset(
        &mut self,
        current_psi: f64,
        target_psi: f64,
    ) {
        self.current_psi = current_psi;
        self.target_psi = target_psi;
        self.has_manual_warning = false;
        self.has_critical_warning = false;
    }
}

impl Default for PressureState {
    fn default() -> Self { Self::from_config(&GaugeConfig::new()) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(
        current: f64,
        target: f64,
    ) -> PressureState {
        PressureState::new(60.0, current, target)
    }

    // -------------------------------------------------------------------------
    // Construction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_state() {
        let state = PressureState::default();
        assert_eq!(state.current_psi(), 10.0, "Startup current should be 10 PSI");
        assert_eq!(state.target_psi(), 45.0, "Startup target should be 45 PSI");
        assert_eq!(state.max_psi(), 60.0, "Dial ceiling should be 60 PSI");
        assert!(!state.is_inflating(), "Should start idle");
        assert!(!state.has_manual_warning(), "Manual warning should start cleared");
        assert!(!state.has_critical_warning(), "Critical warning should start cleared");
    }

    // -------------------------------------------------------------------------
    // Percent Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_percent_basic() {
        let state = state_at(10.0, 45.0);
        assert!((state.percent() - 22.222).abs() < 0.01, "10/45 should be ~22.2%");
        assert_eq!(state.percent().round(), 22.0);
    }

    #[test]
    fn test_percent_clamps_above_target() {
        assert_eq!(state_at(50.0, 45.0).percent(), 100.0, "Overshoot should clamp to 100%");
    }

    #[test]
    fn test_percent_zero_target_counts_as_reached() {
        assert_eq!(state_at(10.0, 0.0).percent(), 100.0);
        assert_eq!(state_at(0.0, 0.0).percent(), 100.0, "0/0 must not produce NaN");
    }

    // -------------------------------------------------------------------------
    // Active Segment Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_active_segments_rounding() {
        // 22.2% of 15 = 3.33 -> 3
        assert_eq!(state_at(10.0, 45.0).active_segments(15), 3);
        // 50% of 15 = 7.5 -> 8 (round half away from zero)
        assert_eq!(state_at(20.0, 40.0).active_segments(15), 8);
        assert_eq!(state_at(0.0, 45.0).active_segments(15), 0);
        assert_eq!(state_at(45.0, 45.0).active_segments(15), 15);
    }

    #[test]
    fn test_active_segments_monotone_in_current() {
        let mut previous = 0;
        let mut current = 0.0;
        while current <= 60.0 {
            let lit = state_at(current, 45.0).active_segments(15);
            assert!(lit >= previous, "Segments fell from {previous} to {lit} at {current}");
            assert!(lit <= 15, "Segments out of range at {current}");
            previous = lit;
            current += 0.3;
        }
        assert_eq!(previous, 15, "Past the target every segment should be lit");
    }

    // -------------------------------------------------------------------------
    // Needle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_needle_angle_range() {
        assert_eq!(state_at(0.0, 45.0).needle_angle(), -135.0, "Zero maps to start of sweep");
        assert_eq!(state_at(30.0, 45.0).needle_angle(), 0.0, "Half scale points straight up");
        assert_eq!(state_at(60.0, 45.0).needle_angle(), 135.0, "Ceiling maps to end of sweep");
    }

    #[test]
    fn test_needle_clamps_at_ceiling() {
        let state = state_at(75.0, 60.0);
        assert_eq!(state.needle_angle(), 135.0, "Needle must not pass the ceiling");
        assert_eq!(state.current_psi(), 75.0, "Stored reading is not clamped");
    }

    // -------------------------------------------------------------------------
    // Target Adjustment Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_raise_target_saturates() {
        let mut state = state_at(10.0, 59.0);
        assert!(state.raise_target(1.0));
        assert_eq!(state.target_psi(), 60.0);
        assert!(!state.raise_target(1.0), "Raising at the ceiling is a no-op");
        assert_eq!(state.target_psi(), 60.0);
    }

    #[test]
    fn test_lower_target_saturates() {
        let mut state = state_at(10.0, 0.5);
        assert!(state.lower_target(1.0));
        assert_eq!(state.target_psi(), 0.0, "Target must not go negative");
        assert!(!state.lower_target(1.0), "Lowering at zero is a no-op");
    }

    #[test]
    fn test_reset_clears_warnings() {
        let mut state = state_at(33.0, 50.0);
        state.has_manual_warning = true;
        state.has_critical_warning = true;
        state.reset(10.0, 45.0);
        assert_eq!(state, PressureState::default());
    }
}
