//! Dial face and needle.
//!
//! The face geometry is computed once by [`GaugeFace::build`]; this module only
//! maps it from dial space to pixels (see [`dial_to_screen`]) and picks styles.
//!
//! | Element | Style |
//! |---------|-------|
//! | Rim | gray, 2px |
//! | Minor tick | gray, 1px |
//! | Major tick | white, 2px |
//! | Danger tick | orange, 1px (2px when major) |
//! | Numerals | white 6x10, centered on the label radius |
//! | Needle | cyan, 2px, with a filled hub |

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{CYAN, GRAY, ORANGE, WHITE},
    gauge::{DIAL_CENTER, GaugeFace, NEEDLE_RADIUS, Tick, TickKind, polar},
    layout::{dial_length, dial_to_screen},
    styles::{CENTERED_MIDDLE, LABEL_STYLE_WHITE},
};

/// Rim radius in dial space, just outside the tick ring.
const RIM_RADIUS: f32 = 48.0;

/// Hub diameter in pixels.
const HUB_DIAMETER: u32 = 8;

const RIM_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 2);
const MINOR_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const MAJOR_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);
const DANGER_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ORANGE, 1);
const DANGER_MAJOR_TICK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ORANGE, 2);
const NEEDLE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(CYAN, 2);
const HUB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CYAN);

/// Line style for a tick.
pub const fn tick_style(tick: &Tick) -> PrimitiveStyle<Rgb565> {
    match (tick.kind, tick.is_major) {
        (TickKind::Danger, true) => DANGER_MAJOR_TICK_STYLE,
        (TickKind::Danger, false) => DANGER_TICK_STYLE,
        (TickKind::Major, _) => MAJOR_TICK_STYLE,
        (TickKind::Minor, _) => MINOR_TICK_STYLE,
    }
}

/// Draw the rim, every tick and the numerals.
pub fn draw_dial_face<D>(
    display: &mut D,
    face: &GaugeFace,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = dial_to_screen(DIAL_CENTER);
    Circle::with_center(center, dial_length(RIM_RADIUS * 2.0))
        .into_styled(RIM_STYLE)
        .draw(display)?;

    for tick in face.ticks() {
        Line::new(dial_to_screen(tick.inner), dial_to_screen(tick.outer))
            .into_styled(tick_style(tick))
            .draw(display)?;
    }

    for label in face.labels() {
        let mut text: String<6> = String::new();
        let _ = write!(text, "{}", label.value);
        Text::with_text_style(&text, dial_to_screen(label.position), LABEL_STYLE_WHITE, CENTERED_MIDDLE)
            .draw(display)?;
    }
    Ok(())
}

/// Draw the needle at `angle_deg` on the sweep, plus the center hub.
pub fn draw_needle<D>(
    display: &mut D,
    angle_deg: f64,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = dial_to_screen(DIAL_CENTER);
    let tip = dial_to_screen(polar(angle_deg, NEEDLE_RADIUS));
    Line::new(center, tip).into_styled(NEEDLE_STYLE).draw(display)?;
    Circle::with_center(center, HUB_DIAMETER).into_styled(HUB_STYLE).draw(display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_style_by_kind() {
        let face = GaugeFace::build(60.0);
        let style_of = |v: u16| face.ticks().iter().find(|t| t.value == v).map(tick_style);
        assert_eq!(style_of(4), Some(MINOR_TICK_STYLE));
        assert_eq!(style_of(20), Some(MAJOR_TICK_STYLE));
        assert_eq!(style_of(44), Some(DANGER_TICK_STYLE));
        assert_eq!(style_of(50), Some(DANGER_MAJOR_TICK_STYLE), "Danger majors stay thick");
    }

    #[test]
    fn test_needle_points_up_at_half_scale() {
        let center = dial_to_screen(DIAL_CENTER);
        let tip = dial_to_screen(polar(0.0, NEEDLE_RADIUS));
        assert_eq!(tip.x, center.x, "Zero degrees is vertical");
        assert!(tip.y < center.y, "and points up");
    }
}
