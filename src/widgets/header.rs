//! Header bar rendering.
//!
//! # Optimizations Applied
//!
//! ## 1. Pre-computed Position Constants
//! The header rectangle and text anchors come from [`layout`](crate::layout)
//! as `const` values.
//!
//! ## 2. Const `PrimitiveStyle`
//! `HEADER_FILL_STYLE` is computed at compile time.
//!
//! ## 3. Static Strings
//! The status tag is picked from string literals, no formatting needed.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::PrimitiveStyle,
    text::Text,
};

use crate::{
    colors::{CYAN, PANEL, RED},
    display::DisplayFrame,
    layout::{HEADER_RECT, HEADER_STATUS_POS, HEADER_TITLE_POS},
    styles::{CENTERED, LABEL_FONT, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

/// Header background fill.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL);

/// Status tag and its color, if the gauge is in a state worth flagging.
fn status_tag(frame: &DisplayFrame) -> Option<(&'static str, Rgb565)> {
    if frame.locked {
        Some(("LOCKED", RED))
    } else if frame.glow {
        Some(("ACTIVE", CYAN))
    } else {
        None
    }
}

/// Draw the header bar with title and status tag.
pub fn draw_header<D>(
    display: &mut D,
    frame: &DisplayFrame,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display)?;

    Text::with_text_style("PRESSURE CONTROL", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED).draw(display)?;

    if let Some((tag, color)) = status_tag(frame) {
        Text::with_text_style(tag, HEADER_STATUS_POS, MonoTextStyle::new(LABEL_FONT, color), RIGHT_ALIGNED)
            .draw(display)?;
    }
    Ok(())
}
