//! Display projection: [`PressureState`] in, [`DisplayFrame`] out.
//!
//! `project` has no side effects. Situations that require inflation to stop
//! (target reached while running, a warning raised while running) are reported
//! through [`DisplayFrame::stop_requested`]; the owner stops the controller and
//! projects again, so the frame that reaches the screen is always settled.
//!
//! # Status Resolution
//!
//! First match wins:
//!
//! | Condition | Label | Glow | Readout tint | Stop |
//! |-----------|-------|------|--------------|------|
//! | critical | LOCKED | off | danger | if inflating |
//! | at target and inflating | (unchanged) | (unchanged) | complete | yes |
//! | inflating | DEACTIVATE | on | normal | if manual |
//! | otherwise | ACTIVATE | off | complete when at target | no |
//!
//! The "at target and inflating" row never reaches the screen: its stop
//! request leads to a re-projection that lands on the last row, which shows the
//! same complete tint.
//!
//! # Text Buffers
//!
//! Readouts are formatted into `heapless::String` with `core::fmt::Write`.

use core::fmt::Write;

use heapless::String;

use crate::banner::WarningBanner;
use crate::state::PressureState;

/// Caption on the activation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationLabel {
    Activate,
    Deactivate,
    Locked,
}

impl ActivationLabel {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Activate => "ACTIVATE",
            Self::Deactivate => "DEACTIVATE",
            Self::Locked => "LOCKED",
        }
    }
}

/// Color treatment of the current-pressure readout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadoutTint {
    #[default]
    Normal,
    /// Target reached.
    Complete,
    /// Critical warning raised.
    Danger,
}

/// Everything the widgets need to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFrame {
    /// Current pressure, one decimal place.
    pub current_text: String<12>,
    /// Target pressure, one decimal place.
    pub target_text: String<12>,
    /// Needle rotation in degrees.
    pub needle_angle: f64,
    /// Progress toward target, rounded for display.
    pub percent: u8,
    /// `"{percent}%"`.
    pub percent_text: String<8>,
    /// Lit segments in each bar.
    pub active_segments: usize,
    pub label: ActivationLabel,
    pub glow: bool,
    /// Activation button is disabled.
    pub locked: bool,
    pub tint: ReadoutTint,
    pub banner: WarningBanner,
    /// Inflation is running but must stop before this frame is shown.
    pub stop_requested: bool,
}

/// Project `state` onto a frame for bars of `segment_count` segments.
pub fn project(
    state: &PressureState,
    segment_count: usize,
) -> DisplayFrame {
    // 1. Readouts
    let mut current_text = String::new();
    let _ = write!(current_text, "{:.1}", state.current_psi());
    let mut target_text = String::new();
    let _ = write!(target_text, "{:.1}", state.target_psi());

    // 2-4. Needle, percent, segments
    let needle_angle = state.needle_angle();
    let percent_value = state.percent();
    let percent = percent_value.round() as u8;
    let mut percent_text = String::new();
    let _ = write!(percent_text, "{percent}%");
    let active_segments = state.active_segments(segment_count);

    // 5. Status
    let at_target = state.is_at_target();
    let inflating = state.is_inflating();
    let mut stop_requested = false;

    let (label, glow, tint) = if state.has_critical_warning() {
        (ActivationLabel::Locked, false, ReadoutTint::Danger)
    } else if at_target && inflating {
        stop_requested = true;
        (ActivationLabel::Deactivate, true, ReadoutTint::Complete)
    } else if inflating {
        (ActivationLabel::Deactivate, true, ReadoutTint::Normal)
    } else {
        let tint = if at_target { ReadoutTint::Complete } else { ReadoutTint::Normal };
        (ActivationLabel::Activate, false, tint)
    };

    // 6. Warning banner
    let banner = WarningBanner::from_state(state);
    stop_requested |= banner.requests_stop(inflating);

    DisplayFrame {
        current_text,
        target_text,
        needle_angle,
        percent,
        percent_text,
        active_segments,
        label,
        glow,
        locked: state.is_locked(),
        tint,
        banner,
        stop_requested,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state(
        current: f64,
        target: f64,
        inflating: bool,
    ) -> PressureState {
        let mut s = PressureState::new(60.0, current, target);
        s.is_inflating = inflating;
        s
    }

    // -------------------------------------------------------------------------
    // Readout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_startup_frame() {
        let frame = project(&PressureState::default(), 15);
        assert_eq!(frame.current_text.as_str(), "10.0");
        assert_eq!(frame.target_text.as_str(), "45.0");
        assert_eq!(frame.percent, 22);
        assert_eq!(frame.percent_text.as_str(), "22%");
        assert_eq!(frame.active_segments, 3);
        assert!((frame.needle_angle + 90.0).abs() < 1e-9, "10 of 60 PSI is a sixth of the sweep");
        assert_eq!(frame.label, ActivationLabel::Activate);
        assert!(!frame.glow);
        assert!(!frame.locked);
        assert_eq!(frame.tint, ReadoutTint::Normal);
        assert_eq!(frame.banner, WarningBanner::None);
        assert!(!frame.stop_requested);
    }

    #[test]
    fn test_readout_one_decimal() {
        let frame = project(&state(10.299_999_999_999_997, 45.0, true), 15);
        assert_eq!(frame.current_text.as_str(), "10.3", "Float noise is hidden by rounding");
    }

    #[test]
    fn test_percent_rounds_to_nearest() {
        // 44.8 / 45 = 99.56% -> 100 displayed while still inflating
        let frame = project(&state(44.8, 45.0, true), 15);
        assert_eq!(frame.percent, 100);
        assert!(!frame.stop_requested, "Rounded percent does not count as reached");
    }

    // -------------------------------------------------------------------------
    // Status Resolution Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_inflating_shows_deactivate_with_glow() {
        let frame = project(&state(20.0, 45.0, true), 15);
        assert_eq!(frame.label, ActivationLabel::Deactivate);
        assert!(frame.glow);
        assert_eq!(frame.tint, ReadoutTint::Normal);
        assert!(!frame.stop_requested);
    }

    #[test]
    fn test_reached_while_inflating_requests_stop() {
        let frame = project(&state(45.0, 45.0, true), 15);
        assert!(frame.stop_requested);
        assert_eq!(frame.tint, ReadoutTint::Complete);
    }

    #[test]
    fn test_idle_at_target_is_complete() {
        let frame = project(&state(45.0, 45.0, false), 15);
        assert_eq!(frame.label, ActivationLabel::Activate);
        assert_eq!(frame.tint, ReadoutTint::Complete);
        assert!(!frame.stop_requested);
    }

    #[test]
    fn test_target_lowered_below_current_while_inflating() {
        let frame = project(&state(30.0, 25.0, true), 15);
        assert!(frame.stop_requested, "Moving the target under the reading ends inflation");
        assert_eq!(frame.percent, 100);
    }

    #[test]
    fn test_critical_locks() {
        let mut s = state(20.0, 45.0, false);
        s.has_critical_warning = true;
        let frame = project(&s, 15);
        assert_eq!(frame.label, ActivationLabel::Locked);
        assert_eq!(frame.label.text(), "LOCKED");
        assert!(!frame.glow);
        assert!(frame.locked);
        assert_eq!(frame.tint, ReadoutTint::Danger);
        assert_eq!(frame.banner, WarningBanner::Critical);
        assert!(!frame.stop_requested, "Nothing to stop while idle");
    }

    #[test]
    fn test_critical_while_inflating_requests_stop() {
        let mut s = state(20.0, 45.0, true);
        s.has_critical_warning = true;
        let frame = project(&s, 15);
        assert!(frame.stop_requested);
        assert_eq!(frame.label, ActivationLabel::Locked);
    }

    #[test]
    fn test_manual_while_inflating_requests_stop() {
        let mut s = state(20.0, 45.0, true);
        s.has_manual_warning = true;
        let frame = project(&s, 15);
        assert!(frame.stop_requested);
        assert_eq!(frame.banner, WarningBanner::Manual);
        assert!(!frame.locked, "Manual override does not lock activation");
    }

    #[test]
    fn test_manual_while_idle_only_shows_banner() {
        let mut s = state(20.0, 45.0, false);
        s.has_manual_warning = true;
        let frame = project(&s, 15);
        assert!(!frame.stop_requested);
        assert_eq!(frame.label, ActivationLabel::Activate);
        assert_eq!(frame.banner, WarningBanner::Manual);
    }
}
