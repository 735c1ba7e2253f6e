//! User actions and pointer hit-testing.
//!
//! Every way of interacting with the gauge reduces to one of six [`Action`]s.
//! Mouse clicks are mapped through the control rectangles in
//! [`layout`](crate::layout); keyboard shortcuts are mapped in the simulator
//! binary, which owns the window backend's key codes.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::layout::{
    ACTIVATE_BUTTON,
    CRITICAL_BUTTON,
    MANUAL_BUTTON,
    RESET_BUTTON,
    TARGET_DOWN_BUTTON,
    TARGET_UP_BUTTON,
};

/// A user intent, independent of the input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    IncreaseTarget,
    DecreaseTarget,
    ToggleActivation,
    ToggleManualWarning,
    TriggerCriticalWarning,
    ResetDemo,
}

/// Clickable controls and the action each one fires.
const CONTROLS: [(Rectangle, Action); 6] = [
    (TARGET_DOWN_BUTTON, Action::DecreaseTarget),
    (TARGET_UP_BUTTON, Action::IncreaseTarget),
    (ACTIVATE_BUTTON, Action::ToggleActivation),
    (MANUAL_BUTTON, Action::ToggleManualWarning),
    (CRITICAL_BUTTON, Action::TriggerCriticalWarning),
    (RESET_BUTTON, Action::ResetDemo),
];

/// Action for a click at `point` (display coordinates), if it hit a control.
///
/// A locked activation button still maps to [`Action::ToggleActivation`]; the
/// handler is the one that ignores it.
pub fn action_for_point(point: Point) -> Option<Action> {
    CONTROLS
        .iter()
        .find(|(rect, _)| rect.contains(point))
        .map(|&(_, action)| action)
}
