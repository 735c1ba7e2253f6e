//! Clickable controls: target -/+, activation button, demo buttons.
//!
//! The activation button has three looks:
//!
//! - **ACTIVATE**: normal button
//! - **DEACTIVATE**: teal fill with a cyan glow outline
//! - **LOCKED**: disabled, dimmed caption, clicks are ignored by the handler
//!
//! The manual demo button is drawn filled while the manual banner is showing,
//! so it reads as a toggle.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{
    banner::WarningBanner,
    colors::{BLACK, CYAN, ORANGE},
    display::DisplayFrame,
    layout::{ACTIVATE_BUTTON, CRITICAL_BUTTON, MANUAL_BUTTON, RESET_BUTTON, TARGET_DOWN_BUTTON, TARGET_UP_BUTTON},
    widgets::primitives::{
        BUTTON_ACTIVE,
        BUTTON_CRITICAL,
        BUTTON_DISABLED,
        BUTTON_MANUAL,
        BUTTON_NORMAL,
        BUTTON_RESET,
        ButtonStyle,
        draw_button,
        draw_glow,
    },
};

/// Manual demo button while the override is engaged.
const BUTTON_MANUAL_ENGAGED: ButtonStyle = ButtonStyle { fill: ORANGE, border: ORANGE, text: BLACK };

/// Style of the activation button for `frame`.
pub const fn activation_style(frame: &DisplayFrame) -> ButtonStyle {
    if frame.locked {
        BUTTON_DISABLED
    } else if frame.glow {
        BUTTON_ACTIVE
    } else {
        BUTTON_NORMAL
    }
}

/// Draw every control.
pub fn draw_controls<D>(
    display: &mut D,
    frame: &DisplayFrame,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_button(display, TARGET_DOWN_BUTTON, "-", BUTTON_NORMAL)?;
    draw_button(display, TARGET_UP_BUTTON, "+", BUTTON_NORMAL)?;

    if frame.glow {
        draw_glow(display, ACTIVATE_BUTTON, CYAN)?;
    }
    draw_button(display, ACTIVATE_BUTTON, frame.label.text(), activation_style(frame))?;

    let manual_style = if frame.banner == WarningBanner::Manual { BUTTON_MANUAL_ENGAGED } else { BUTTON_MANUAL };
    draw_button(display, MANUAL_BUTTON, "MANUAL", manual_style)?;
    draw_button(display, CRITICAL_BUTTON, "CRITICAL", BUTTON_CRITICAL)?;
    draw_button(display, RESET_BUTTON, "RESET", BUTTON_RESET)?;
    Ok(())
}
