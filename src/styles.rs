//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible in embedded-graphics
//! 0.8, so every fixed style lives here in the binary's read-only data instead of
//! being rebuilt inside each draw function.
//!
//! # Dynamic Color Styles
//!
//! The readouts change color with the [`ReadoutTint`](crate::display::ReadoutTint)
//! and the activation button dims when locked. For these, the font references are
//! exposed (`LABEL_FONT`, `CAPTION_FONT`, `READOUT_FONT`) so callers can build
//! `MonoTextStyle::new(FONT, color)` with only the color varying.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text on the alphabetic baseline. Used for readouts and titles.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered both ways. Used for dial numerals and button captions, where the
/// anchor point is the middle of the glyph box.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned text. Used for the status tag in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium caption font (10x20 pixels). Banner and percent readout.
pub const CAPTION_FONT: &MonoFont = &FONT_10X20;

/// Large readout font (`ProFont` 24pt). Current pressure.
pub const READOUT_FONT: &MonoFont = &PROFONT_24_POINT;


// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for labels on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for secondary labels ("CURRENT", "TARGET").
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Medium white text for the header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Medium white text for the target readout (`ProFont` 18pt), sized to fit
/// between the -/+ buttons.
pub const TARGET_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
