//! Screen layout: every widget rectangle and anchor point, computed at compile time.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              PRESSURE CONTROL          ACTIVE │  header 22px
//! ├──────────────────────┬───────────────────────┤
//! │                      │ ▮▮▮▮▮▯▯▯▯▯▯▯▯▯▯        │  top bar
//! │        dial          │      CURRENT PSI      │
//! │     (150 x 150)      │         32.4          │
//! │                      │  [-]  TARGET  [+]     │
//! │                      │         45.0          │
//! │                      │          72%          │
//! │                      │ ▮▮▮▮▮▯▯▯▯▯▯▯▯▯▯        │  bottom bar
//! │                      │ [     ACTIVATE     ]  │
//! ├──────────────────────┴───────────────────────┤
//! │          CRITICAL: OVER-PRESSURE             │  banner
//! │ [ MANUAL ]     [ CRITICAL ]     [ RESET ]    │  demo buttons
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Text positions are anchor points for the styles they are drawn with (see
//! [`styles`](crate::styles)); rectangles double as hit areas for mouse input.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{CENTER_X, SCREEN_WIDTH};
use crate::gauge::DialPoint;

// =============================================================================
// Header
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 22;

pub const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Title baseline, centered.
pub const HEADER_TITLE_POS: Point = Point::new(CENTER_X, 16);

/// Status tag baseline, right-aligned 5px from the edge.
pub const HEADER_STATUS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 15);

// =============================================================================
// Dial
// =============================================================================

/// Screen position of dial-space (0, 0).
pub const DIAL_ORIGIN: Point = Point::new(10, 28);

/// Pixels per dial-space unit.
pub const DIAL_SCALE: f32 = 1.5;

/// Map a dial-space point to the nearest screen pixel.
pub fn dial_to_screen(p: DialPoint) -> Point {
    Point::new(
        DIAL_ORIGIN.x + (p.x * DIAL_SCALE).round() as i32,
        DIAL_ORIGIN.y + (p.y * DIAL_SCALE).round() as i32,
    )
}

/// Scale a dial-space length to pixels.
pub fn dial_length(units: f32) -> u32 { (units * DIAL_SCALE).round().max(0.0) as u32 }

// =============================================================================
// Right Column: Bars, Readouts, Controls
// =============================================================================

/// Left edge of the right-hand column.
pub const COLUMN_X: i32 = 170;

/// Width of the right-hand column.
pub const COLUMN_WIDTH: u32 = 140;

/// Horizontal center of the right-hand column.
pub const COLUMN_CENTER_X: i32 = COLUMN_X + (COLUMN_WIDTH / 2) as i32;

/// Height of a segment bar.
pub const BAR_HEIGHT: u32 = 12;

/// Gap between neighbouring segments.
pub const SEGMENT_GAP: u32 = 2;

pub const TOP_BAR: Rectangle = Rectangle::new(Point::new(COLUMN_X, 30), Size::new(COLUMN_WIDTH, BAR_HEIGHT));

pub const CURRENT_LABEL_POS: Point = Point::new(COLUMN_CENTER_X, 56);
pub const CURRENT_VALUE_POS: Point = Point::new(COLUMN_CENTER_X, 82);

/// Target -/+ button size.
const STEP_BUTTON_SIZE: Size = Size::new(28, 26);

pub const TARGET_DOWN_BUTTON: Rectangle = Rectangle::new(Point::new(COLUMN_X, 88), STEP_BUTTON_SIZE);

pub const TARGET_UP_BUTTON: Rectangle = Rectangle::new(
    Point::new(COLUMN_X + (COLUMN_WIDTH - STEP_BUTTON_SIZE.width) as i32, 88),
    STEP_BUTTON_SIZE,
);

pub const TARGET_LABEL_POS: Point = Point::new(COLUMN_CENTER_X, 97);
pub const TARGET_VALUE_POS: Point = Point::new(COLUMN_CENTER_X, 114);

pub const PERCENT_POS: Point = Point::new(COLUMN_CENTER_X, 138);

pub const BOTTOM_BAR: Rectangle = Rectangle::new(Point::new(COLUMN_X, 146), Size::new(COLUMN_WIDTH, BAR_HEIGHT));

pub const ACTIVATE_BUTTON: Rectangle = Rectangle::new(Point::new(COLUMN_X, 164), Size::new(COLUMN_WIDTH, 24));

// =============================================================================
// Bottom Strip: Banner and Demo Buttons
// =============================================================================

pub const BANNER_RECT: Rectangle = Rectangle::new(Point::new(10, 190), Size::new(300, 24));

/// Demo button size (three across).
const DEMO_BUTTON_SIZE: Size = Size::new(96, 20);

pub const MANUAL_BUTTON: Rectangle = Rectangle::new(Point::new(10, 216), DEMO_BUTTON_SIZE);
pub const CRITICAL_BUTTON: Rectangle = Rectangle::new(Point::new(112, 216), DEMO_BUTTON_SIZE);
pub const RESET_BUTTON: Rectangle = Rectangle::new(Point::new(214, 216), DEMO_BUTTON_SIZE);

// =============================================================================
// Unit Tests
// =============================================================================
