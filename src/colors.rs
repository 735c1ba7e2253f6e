//! Color constants and HSL helpers for the gauge display.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! Fixed palette entries are written directly as `Rgb565::new(r, g, b)` with
//! channel values in those ranges.
//!
//! # Translucent Segment Colors
//!
//! The segment bars are specified as HSLA colors. The display has no alpha
//! channel, so [`hsla_over`] composites the color over a known background in
//! 8-bit space and only then narrows to Rgb565.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Default text and major ticks.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Critical banner and danger readout tint.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Accent cyan (#00f3ff). Needle, completed readout, active button glow.
pub const CYAN: Rgb565 = Rgb565::new(0, 60, 31);

/// Accent orange (#ff7a00). Danger-zone ticks and the manual override banner.
pub const ORANGE: Rgb565 = Rgb565::new(31, 30, 0);

/// Dark gray for the dial rim, minor ticks and panel borders.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Mid gray for disabled button text.
pub const DIM_GRAY: Rgb565 = Rgb565::new(14, 28, 14);

/// Dark teal fill for the activation button while inflating.
pub const DARK_TEAL: Rgb565 = Rgb565::new(0, 20, 10);

/// Near-black panel fill for buttons and the header bar.
pub const PANEL: Rgb565 = Rgb565::new(3, 6, 3);

/// Background in 8-bit space, used as the compositing base for HSLA colors.
pub const BACKGROUND_888: Rgb888 = Rgb888::BLACK;

// =============================================================================
// HSL Conversion
// =============================================================================

/// Convert HSL (hue in degrees, saturation and lightness in `0.0..=1.0`) to RGB.
pub fn hsl_to_rgb(
    hue: f32,
    saturation: f32,
    lightness: f32,
) -> Rgb888 {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let h = hue.rem_euclid(360.0) / 60.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb888::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Composite an HSLA color over `background` and narrow the result to Rgb565.
pub fn hsla_over(
    hue: f32,
    saturation: f32,
    lightness: f32,
    alpha: f32,
    background: Rgb888,
) -> Rgb565 {
    let fg = hsl_to_rgb(hue, saturation, lightness);
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| to_channel((f32::from(f) * a + f32::from(b) * (1.0 - a)) / 255.0);
    Rgb565::from(Rgb888::new(
        mix(fg.r(), background.r()),
        mix(fg.g(), background.g()),
        mix(fg.b(), background.b()),
    ))
}

#[inline]
fn to_channel(unit: f32) -> u8 { (unit.clamp(0.0, 1.0) * 255.0).round() as u8 }

// =============================================================================
// Unit Tests
// =============================================================================
