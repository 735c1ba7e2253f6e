// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f64->f32, f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // usize/u32->f32 in geometry calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for screen coordinates
#![allow(clippy::cast_sign_loss)] // f64->u8/u32 where the value is clamped non-negative
#![allow(clippy::struct_excessive_bools)] // PressureState and DisplayFrame carry plain flags

//! Pressure gauge simulator.
//!
//! A single-screen control panel: a dial with a needle, two fifteen-segment hue
//! bars, current / target / percent readouts, and a handful of buttons. When
//! activated, the reading climbs by 0.3 PSI every 100 ms until it reaches the
//! target. Two demo warnings block or interrupt inflation:
//!
//! - **Manual override**: toggled on and off, stops a running inflation
//! - **Critical warning**: latched until reset, locks the activation button
//!
//! # Data Flow
//!
//! ```text
//!   Action ──┐
//!            ├──► Dashboard ──► PressureState ──► project() ──► DisplayFrame ──► widgets
//!   tick ────┘        ▲                                              │
//!                     └───────────── stop_requested ◄────────────────┘
//! ```
//!
//! [`PressureState`](state::PressureState) is the only mutable model.
//! [`display::project`] turns it into a [`DisplayFrame`](display::DisplayFrame)
//! with every derived value precomputed, and the [`widgets`] draw from that
//! frame alone. The [`dashboard::Dashboard`] owns the loop between them and is
//! the only place that mutates state.
//!
//! # Optimizations Applied
//!
//! ## 1. Heapless Strings
//! Readout text is formatted into `heapless::String<N>` buffers inside the frame.
//!
//! ## 2. Pre-computed Layout and Styles
//! Rectangles, anchors and text styles are `const` (see [`layout`] and [`styles`]).
//!
//! ## 3. Static Gauge Face
//! Tick geometry and numerals are computed once per session into fixed-capacity
//! vectors (see [`gauge::GaugeFace`]).
//!
//! ## 4. Redraw on Change
//! The simulator only repaints when the projected frame differs from the last
//! one drawn (see [`render::RenderState`]).

pub mod banner;
pub mod colors;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod gauge;
pub mod input;
pub mod layout;
pub mod logging;
pub mod render;
pub mod segments;
pub mod state;
pub mod styles;
pub mod timer;
pub mod widgets;
