//! Warning banner overlay.
//!
//! The banner sits in a fixed strip above the demo buttons with a white border,
//! like a status popup, but stays up for as long as its flag is raised. Only
//! one banner shows at a time; [`WarningBanner`] already resolves the priority.
//!
//! | Banner | Background | Text |
//! |--------|------------|------|
//! | Critical | red | white |
//! | Manual | orange | black |
//!
//! # Optimizations Applied
//!
//! ## 1. Pre-computed Geometry
//! Border and background rectangles are `const`, derived from
//! [`BANNER_RECT`](crate::layout::BANNER_RECT).
//!
//! ## 2. Const `PrimitiveStyle`
//! Fill styles are computed at compile time.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    banner::WarningBanner,
    colors::{BLACK, ORANGE, RED, WHITE},
    layout::BANNER_RECT,
    styles::{CAPTION_FONT, CENTERED_MIDDLE},
};

// =============================================================================
// Pre-computed Geometry and Styles
// =============================================================================

/// Border rectangle (outer white rectangle).
const BORDER_RECT: Rectangle = BANNER_RECT;

/// Background rectangle, inset 2px inside the border.
const BACKGROUND_RECT: Rectangle = Rectangle::new(
    Point::new(BANNER_RECT.top_left.x + 2, BANNER_RECT.top_left.y + 2),
    Size::new(BANNER_RECT.size.width - 4, BANNER_RECT.size.height - 4),
);

/// Caption anchor (center of the strip).
const TEXT_POS: Point = Point::new(
    BANNER_RECT.top_left.x + (BANNER_RECT.size.width / 2) as i32,
    BANNER_RECT.top_left.y + (BANNER_RECT.size.height / 2) as i32,
);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
const ORANGE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(ORANGE);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw `banner`. Nothing is drawn for [`WarningBanner::None`].
pub fn draw_banner<D>(
    display: &mut D,
    banner: WarningBanner,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(caption) = banner.text() else {
        return Ok(());
    };
    let (fill, text_color) = if banner == WarningBanner::Critical { (RED_FILL, WHITE) } else { (ORANGE_FILL, BLACK) };

    BORDER_RECT.into_styled(WHITE_FILL).draw(display)?;
    BACKGROUND_RECT.into_styled(fill).draw(display)?;
    Text::with_text_style(caption, TEXT_POS, MonoTextStyle::new(CAPTION_FONT, text_color), CENTERED_MIDDLE)
        .draw(display)?;
    Ok(())
}
