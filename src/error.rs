//! Configuration errors.
//!
//! The gauge domain itself never fails: disallowed actions are guarded no-ops.
//! The only fallible step is accepting a [`GaugeConfig`](crate::config::GaugeConfig).

use thiserror::Error;

/// Rejected session configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Dial ceiling is not within `(0, limit]`.
    #[error("max pressure must be within (0, {limit}] psi, got {value}")]
    MaxPsiOutOfRange { value: f64, limit: f64 },

    /// Initial current or target lies outside `[0, max]`.
    #[error("initial {field} pressure {value} psi is outside [0, {max}]")]
    InitialOutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// Segment count outside what a bar can hold.
    #[error("segment count must be within [{min}, {max}], got {value}")]
    SegmentCount { value: usize, min: usize, max: usize },

    /// Tick increment is zero, negative or not finite.
    #[error("tick increment must be a positive number of psi, got {0}")]
    TickIncrement(f64),

    /// Tick interval of zero would fire continuously.
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}
