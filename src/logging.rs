//! Tracing subscriber setup for the simulator binary.
//!
//! Logs go to stderr so they never mix with anything the window backend prints.
//!
//! # Filter Priority (highest to lowest)
//!
//! 1. `PRESSURE_GAUGE_LOG` (per-target directives, e.g. `pressure_gauge_sim=trace`)
//! 2. `RUST_LOG`
//! 3. [`DEFAULT_DIRECTIVE`]
//!
//! Set `pressure_gauge_sim::controller=trace` to see every inflation tick.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Project-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "PRESSURE_GAUGE_LOG";

/// Filter used when neither variable holds a usable directive.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_subscriber() {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    tracing_subscriber::registry()
        .with(build_env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi)
                .with_target(true)
                .with_timer(fmt::time::uptime())
                .compact(),
        )
        .init();
}

/// An unparseable variable falls through to the next source.
fn build_env_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV_VAR)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(DEFAULT_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter_does_not_panic() {
        let _filter = build_env_filter();
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }
}
