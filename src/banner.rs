//! Warning banner projection.
//!
//! The banner is a pure function of the two override flags. Critical wins over
//! manual and is a hard lock; manual only pauses. Either one showing while
//! inflation runs asks the owner to stop it.

use crate::state::PressureState;

/// Which warning, if any, the banner area shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WarningBanner {
    #[default]
    None,
    Manual,
    Critical,
}

impl WarningBanner {
    /// Critical suppresses manual.
    pub const fn from_flags(
        has_manual_warning: bool,
        has_critical_warning: bool,
    ) -> Self {
        if has_critical_warning {
            Self::Critical
        } else if has_manual_warning {
            Self::Manual
        } else {
            Self::None
        }
    }

    pub const fn from_state(state: &PressureState) -> Self {
        Self::from_flags(state.has_manual_warning, state.has_critical_warning)
    }

    /// Banner caption, or `None` when nothing is shown.
    pub const fn text(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Manual => Some("MANUAL OVERRIDE SYS ACTIVE"),
            Self::Critical => Some("CRITICAL: OVER-PRESSURE"),
        }
    }

    #[inline]
    pub const fn is_visible(self) -> bool { !matches!(self, Self::None) }

    /// Whether this banner forces a running inflation to stop.
    #[inline]
    pub const fn requests_stop(
        self,
        is_inflating: bool,
    ) -> bool {
        is_inflating && self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_priority() {
        assert_eq!(WarningBanner::from_flags(false, false), WarningBanner::None);
        assert_eq!(WarningBanner::from_flags(true, false), WarningBanner::Manual);
        assert_eq!(WarningBanner::from_flags(false, true), WarningBanner::Critical);
        assert_eq!(
            WarningBanner::from_flags(true, true),
            WarningBanner::Critical,
            "Critical suppresses the manual banner"
        );
    }

    #[test]
    fn test_texts() {
        assert_eq!(WarningBanner::None.text(), None);
        assert_eq!(WarningBanner::Manual.text(), Some("MANUAL OVERRIDE SYS ACTIVE"));
        assert_eq!(WarningBanner::Critical.text(), Some("CRITICAL: OVER-PRESSURE"));
    }

    #[test]
    fn test_requests_stop_only_while_inflating() {
        assert!(WarningBanner::Manual.requests_stop(true));
        assert!(WarningBanner::Critical.requests_stop(true));
        assert!(!WarningBanner::None.requests_stop(true));
        assert!(!WarningBanner::Manual.requests_stop(false));
        assert!(!WarningBanner::Critical.requests_stop(false));
    }
}
