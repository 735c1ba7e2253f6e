//! Render state tracking for optimized display updates.
//!
//! The gauge redraws the whole screen, but only when something visible changed.
//! A [`DisplayFrame`] captures everything visible (the dial face and hues are
//! static), so comparing it with the last drawn frame decides whether the
//! frame needs painting.
//!
//! # Update Strategy
//!
//! | Situation | Redraw |
//! |-----------|--------|
//! | First frame | Yes (full clear) |
//! | Frame changed (tick, input) | Yes |
//! | Frame unchanged (idle gauge) | No, window is just presented again |
//!
//! While inflating this means ~10 redraws per second (one per tick) rather than
//! one per loop iteration.

use crate::display::DisplayFrame;

/// Tracks the last painted frame.
pub struct RenderState {
    /// Frame most recently handed to the widgets.
    last_drawn: Option<DisplayFrame>,

    /// Redraws performed since creation.
    redraws: u32,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self { last_drawn: None, redraws: 0 }
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.last_drawn.is_none() }

    /// Whether `frame` differs from what is on screen.
    pub fn needs_redraw(
        &self,
        frame: &DisplayFrame,
    ) -> bool {
        self.last_drawn.as_ref() != Some(frame)
    }

    /// Record that `frame` has been painted.
    pub fn mark_drawn(
        &mut self,
        frame: &DisplayFrame,
    ) {
        self.last_drawn = Some(frame.clone());
        self.redraws = self.redraws.wrapping_add(1);
    }

    #[inline]
    pub const fn redraws(&self) -> u32 { self.redraws }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
