//! Widget components for the pressure gauge display.
//!
//! This module organizes all visual components into logical submodules:
//!
//! - [`dial`]: Gauge face (rim, ticks, numerals) and needle
//! - [`bars`]: Fifteen-segment hue bars above and below the readouts
//! - [`readouts`]: Current / target / percent text
//! - [`controls`]: Target -/+, activation and demo buttons
//! - [`header`]: Title bar with status tag
//! - [`banner`]: Manual / critical warning strip
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Architecture
//!
//! Every widget draws from a [`DisplayFrame`](crate::display::DisplayFrame) or
//! one of the model types behind it and never touches [`PressureState`](crate::state::PressureState)
//! directly. [`draw_dashboard`] composes them back to front:
//!
//! 1. Clear to black
//! 2. Header, dial face, needle
//! 3. Both segment bars
//! 4. Readouts and controls
//! 5. Banner on top
//!
//! # Optimizations Applied
//!
//! ## Static Styles
//! All widgets use the constants from the [`styles`](crate::styles) module and
//! `const` `PrimitiveStyle`s where the color is fixed.
//!
//! ## Generic Draw Target
//! Drawing functions take any `DrawTarget<Color = Rgb565>` and propagate its
//! error, so the same code paints the simulator window and test displays.

pub mod banner;
pub mod bars;
pub mod controls;
pub mod dial;
pub mod header;
pub mod primitives;
pub mod readouts;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

pub use banner::draw_banner;
pub use bars::draw_segment_bar;
pub use controls::draw_controls;
pub use dial::{draw_dial_face, draw_needle};
pub use header::draw_header;
pub use readouts::draw_readouts;

use crate::{
    colors::BLACK,
    dashboard::Dashboard,
    layout::{BOTTOM_BAR, TOP_BAR},
};

/// Paint the whole dashboard for its current frame.
pub fn draw_dashboard<D>(
    display: &mut D,
    dashboard: &Dashboard,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let frame = dashboard.frame();

    display.clear(BLACK)?;
    draw_header(display, frame)?;
    draw_dial_face(display, dashboard.face())?;
    draw_needle(display, frame.needle_angle)?;
    draw_segment_bar(display, TOP_BAR, dashboard.top_bar())?;
    draw_segment_bar(display, BOTTOM_BAR, dashboard.bottom_bar())?;
    draw_readouts(display, frame)?;
    draw_controls(display, frame)?;
    draw_banner(display, frame.banner)
}
