//! Low-level drawing primitives shared across widgets.
//!
//! # Buttons
//!
//! Every clickable control is a filled rectangle with a 1px border and a
//! caption centered inside it. The three colors come from a [`ButtonStyle`];
//! the common variants are `const` so no style is built per frame.
//!
//! # Glow
//!
//! The display has no blur, so "glow" is approximated by a 1px outline drawn
//! just outside a shape in a bright tint. Callers keep at least 1px of empty
//! space around glowing shapes (see `SEGMENT_GAP` in [`layout`](crate::layout)).

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{OffsetOutline, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::colors::{CYAN, DARK_TEAL, DIM_GRAY, GRAY, ORANGE, PANEL, RED, WHITE};
use crate::styles::{CENTERED_MIDDLE, LABEL_FONT};

/// Fill, border and caption colors of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonStyle {
    pub fill: Rgb565,
    pub border: Rgb565,
    pub text: Rgb565,
}

/// Regular control: dark panel, cyan border.
pub const BUTTON_NORMAL: ButtonStyle = ButtonStyle { fill: PANEL, border: CYAN, text: WHITE };

/// Activation button while inflating.
pub const BUTTON_ACTIVE: ButtonStyle = ButtonStyle { fill: DARK_TEAL, border: CYAN, text: WHITE };

/// Disabled control: gray border, dimmed caption.
pub const BUTTON_DISABLED: ButtonStyle = ButtonStyle { fill: PANEL, border: GRAY, text: DIM_GRAY };

/// Manual override demo button (orange accent).
pub const BUTTON_MANUAL: ButtonStyle = ButtonStyle { fill: PANEL, border: ORANGE, text: ORANGE };

/// Critical demo button (red accent).
pub const BUTTON_CRITICAL: ButtonStyle = ButtonStyle { fill: PANEL, border: RED, text: RED };

/// Reset demo button (neutral).
pub const BUTTON_RESET: ButtonStyle = ButtonStyle { fill: PANEL, border: WHITE, text: WHITE };

/// Draw a bordered button with a centered caption in the label font.
pub fn draw_button<D>(
    display: &mut D,
    rect: Rectangle,
    caption: &str,
    style: ButtonStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_framed_rect(display, rect, style.fill, style.border)?;
    Text::with_text_style(
        caption,
        rect.center(),
        MonoTextStyle::new(LABEL_FONT, style.text),
        CENTERED_MIDDLE,
    )
    .draw(display)?;
    Ok(())
}

/// Fill `rect` and stroke a 1px border inside its edge.
pub fn draw_framed_rect<D>(
    display: &mut D,
    rect: Rectangle,
    fill: Rgb565,
    border: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    rect.into_styled(style).draw(display)
}

/// Stroke a 1px outline just outside `rect`.
pub fn draw_glow<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    rect.offset(1)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
}
