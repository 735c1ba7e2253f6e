//! Current, target and percent readouts.
//!
//! The current reading uses the large `ProFont` face and is the only text whose
//! color varies, following the frame's [`ReadoutTint`].

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};

use crate::{
    colors::{CYAN, RED, WHITE},
    display::{DisplayFrame, ReadoutTint},
    layout::{CURRENT_LABEL_POS, CURRENT_VALUE_POS, PERCENT_POS, TARGET_LABEL_POS, TARGET_VALUE_POS},
    styles::{CAPTION_FONT, CENTERED, LABEL_STYLE_GRAY, READOUT_FONT, TARGET_STYLE_WHITE},
};

/// Text color for the current reading.
pub const fn tint_color(tint: ReadoutTint) -> Rgb565 {
    match tint {
        ReadoutTint::Normal => WHITE,
        ReadoutTint::Complete => CYAN,
        ReadoutTint::Danger => RED,
    }
}

/// Draw the readout stack in the right-hand column.
pub fn draw_readouts<D>(
    display: &mut D,
    frame: &DisplayFrame,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("CURRENT PSI", CURRENT_LABEL_POS, LABEL_STYLE_GRAY, CENTERED).draw(display)?;
    Text::with_text_style(
        &frame.current_text,
        CURRENT_VALUE_POS,
        MonoTextStyle::new(READOUT_FONT, tint_color(frame.tint)),
        CENTERED,
    )
    .draw(display)?;

    Text::with_text_style("TARGET", TARGET_LABEL_POS, LABEL_STYLE_GRAY, CENTERED).draw(display)?;
    Text::with_text_style(&frame.target_text, TARGET_VALUE_POS, TARGET_STYLE_WHITE, CENTERED).draw(display)?;

    Text::with_text_style(
        &frame.percent_text,
        PERCENT_POS,
        MonoTextStyle::new(CAPTION_FONT, CYAN),
        CENTERED,
    )
    .draw(display)?;
    Ok(())
}
