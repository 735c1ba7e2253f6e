//! Application configuration constants.
//!
//! Two layers live here:
//!
//! - Compile-time constants for the display surface and frame pacing, used
//!   directly by the rendering code and the simulator loop.
//! - [`GaugeConfig`], the per-session domain parameters (dial ceiling, initial
//!   values, inflation cadence, segment count). Defaults mirror the constants
//!   below; [`GaugeConfig::validate`] rejects values the geometry and fixed-size
//!   buffers cannot represent.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Screen-derived values such as `CENTER_X` are `const`, so no per-frame
//! arithmetic is spent on them. Widget geometry lives in [`layout`](crate::layout).

use std::time::Duration;

use crate::error::ConfigError;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Window upscaling factor for the desktop simulator.
pub const WINDOW_SCALE: u32 = 2;

/// Screen center X coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Period of the inflation timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// PSI added to the current reading on every inflation tick.
pub const TICK_INCREMENT: f64 = 0.3;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Dial ceiling in PSI.
pub const MAX_PSI: f64 = 60.0;

/// Current reading at startup and after a reset.
pub const INITIAL_CURRENT_PSI: f64 = 10.0;

/// Target at startup and after a reset.
pub const INITIAL_TARGET_PSI: f64 = 45.0;

/// PSI change per target button press.
pub const TARGET_STEP_PSI: f64 = 1.0;

/// Segments per progress bar.
pub const SEGMENT_COUNT: usize = 15;

/// Largest dial ceiling the tick buffers can hold (61 ticks at a 2 PSI pitch).
pub const MAX_SUPPORTED_PSI: f64 = 120.0;

/// Smallest segment count that still yields a hue ramp.
pub const MIN_SEGMENTS: usize = 2;

/// Largest segment count a bar can hold.
pub const MAX_SEGMENTS: usize = 32;

// =============================================================================
// Session Configuration
// =============================================================================

/// Domain parameters for one simulator session.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeConfig {
    /// Dial ceiling in PSI.
    pub max_psi: f64,
    /// Current reading at startup and after reset.
    pub initial_current_psi: f64,
    /// Target at startup and after reset.
    pub initial_target_psi: f64,
    /// Inflation timer period.
    pub tick_interval: Duration,
    /// PSI added per inflation tick.
    pub tick_increment: f64,
    /// Segments per progress bar.
    pub segment_count: usize,
}

impl GaugeConfig {
    /// Configuration matching the compile-time defaults.
    pub const fn new() -> Self {
        Self {
            max_psi: MAX_PSI,
            initial_current_psi: INITIAL_CURRENT_PSI,
            initial_target_psi: INITIAL_TARGET_PSI,
            tick_interval: TICK_INTERVAL,
            tick_increment: TICK_INCREMENT,
            segment_count: SEGMENT_COUNT,
        }
    }

    /// Check every field against the ranges the gauge can represent.
    ///
    /// Comparisons are written so that NaN fails every check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_psi > 0.0 && self.max_psi <= MAX_SUPPORTED_PSI) {
            return Err(ConfigError::MaxPsiOutOfRange {
                value: self.max_psi,
                limit: MAX_SUPPORTED_PSI,
            });
        }
        if !(self.initial_current_psi >= 0.0 && self.initial_current_psi <= self.max_psi) {
            return Err(ConfigError::InitialOutOfRange {
                field: "current",
                value: self.initial_current_psi,
                max: self.max_psi,
            });
        }
        if !(self.initial_target_psi >= 0.0 && self.initial_target_psi <= self.max_psi) {
            return Err(ConfigError::InitialOutOfRange {
                field: "target",
                value: self.initial_target_psi,
                max: self.max_psi,
            });
        }
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segment_count) {
            return Err(ConfigError::SegmentCount {
                value: self.segment_count,
                min: MIN_SEGMENTS,
                max: MAX_SEGMENTS,
            });
        }
        if !(self.tick_increment > 0.0 && self.tick_increment.is_finite()) {
            return Err(ConfigError::TickIncrement(self.tick_increment));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

impl Default for GaugeConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Defaults
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_matches_constants() {
        let config = GaugeConfig::default();
        assert_eq!(config.max_psi, 60.0, "Dial ceiling should be 60 PSI");
        assert_eq!(config.initial_current_psi, 10.0, "Initial current should be 10 PSI");
        assert_eq!(config.initial_target_psi, 45.0, "Initial target should be 45 PSI");
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.tick_increment, 0.3);
        assert_eq!(config.segment_count, 15);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GaugeConfig::default().validate(), Ok(()));
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_rejects_non_positive_max() {
        let config = GaugeConfig { max_psi: 0.0, ..GaugeConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::MaxPsiOutOfRange { .. })));
    }

    #[test]
    fn test_rejects_max_beyond_tick_capacity() {
        let config = GaugeConfig { max_psi: 150.0, ..GaugeConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::MaxPsiOutOfRange { .. })));
    }

    #[test]
    fn test_rejects_nan_max() {
        let config = GaugeConfig { max_psi: f64::NAN, ..GaugeConfig::default() };
        assert!(config.validate().is_err(), "NaN ceiling must be rejected");
    }

    #[test]
    fn test_rejects_target_above_max() {
        let config = GaugeConfig { initial_target_psi: 61.0, ..GaugeConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialOutOfRange { field: "target", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_current() {
        let config = GaugeConfig { initial_current_psi: -1.0, ..GaugeConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialOutOfRange { field: "current", .. })
        ));
    }

    #[test]
    fn test_segment_count_bounds() {
        for count in [0, 1, 33] {
            let config = GaugeConfig { segment_count: count, ..GaugeConfig::default() };
            assert!(
                matches!(config.validate(), Err(ConfigError::SegmentCount { .. })),
                "segment_count={count} should be rejected"
            );
        }
        for count in [2, 15, 32] {
            let config = GaugeConfig { segment_count: count, ..GaugeConfig::default() };
            assert_eq!(config.validate(), Ok(()), "segment_count={count} should be accepted");
        }
    }

    #[test]
    fn test_rejects_bad_tick_settings() {
        let config = GaugeConfig { tick_increment: 0.0, ..GaugeConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::TickIncrement(0.0)));

        let config = GaugeConfig { tick_interval: Duration::ZERO, ..GaugeConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }
}
