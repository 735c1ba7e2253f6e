//! Segmented progress bars.
//!
//! Each bar is a row of discrete segments whose hue ramps linearly from
//! orange (30 degrees) at the first segment to cyan (180 degrees) at the last.
//! Hues are fixed when the bar is built; only the `active` flags change, and
//! they are rewritten on every display projection.
//!
//! Two bars are shown, above and below the readouts. Both are driven from the
//! same active count so they always mirror each other.

use heapless::Vec;

use crate::config::MAX_SEGMENTS;

/// Hue of the first segment, in degrees.
pub const HUE_START: f32 = 30.0;

/// Hue span across the bar, in degrees.
pub const HUE_SPAN: f32 = 150.0;

/// One segment of a progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentDescriptor {
    hue: f32,
    active: bool,
}

impl SegmentDescriptor {
    #[inline]
    pub const fn hue(&self) -> f32 { self.hue }

    #[inline]
    pub const fn is_active(&self) -> bool { self.active }
}

/// Hue of segment `index` in a bar of `count` segments.
pub fn segment_hue(
    index: usize,
    count: usize,
) -> f32 {
    if count < 2 {
        return HUE_START;
    }
    HUE_START + (index as f32 / (count - 1) as f32) * HUE_SPAN
}

/// A bar of up to [`MAX_SEGMENTS`] segments.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentBar {
    segments: Vec<SegmentDescriptor, MAX_SEGMENTS>,
}

impl SegmentBar {
    /// Build a bar of `count` inactive segments (capped at [`MAX_SEGMENTS`]).
    pub fn new(count: usize) -> Self {
        let count = count.min(MAX_SEGMENTS);
        let segments = (0..count)
            .map(|i| SegmentDescriptor { hue: segment_hue(i, count), active: false })
            .collect();
        Self { segments }
    }

    /// Light the first `active` segments and clear the rest.
    pub fn apply(
        &mut self,
        active: usize,
    ) {
        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.active = i < active;
        }
    }

    #[inline]
    pub fn segments(&self) -> &[SegmentDescriptor] { &self.segments }

    #[inline]
    pub fn len(&self) -> usize { self.segments.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Number of segments currently lit.
    pub fn active_count(&self) -> usize { self.segments.iter().filter(|s| s.active).count() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Hue Ramp Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hue_endpoints() {
        assert_eq!(segment_hue(0, 15), 30.0, "First segment is orange");
        assert_eq!(segment_hue(14, 15), 180.0, "Last segment is cyan");
    }

    #[test]
    fn test_hue_midpoint() {
        assert_eq!(segment_hue(7, 15), 105.0, "Middle of 15 segments is halfway along the ramp");
    }

    #[test]
    fn test_hue_strictly_increasing() {
        let bar = SegmentBar::new(15);
        for pair in bar.segments().windows(2) {
            assert!(pair[1].hue() > pair[0].hue(), "Hue must rise along the bar");
        }
    }

    // -------------------------------------------------------------------------
    // Bar Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_bar_inactive() {
        let bar = SegmentBar::new(15);
        assert_eq!(bar.len(), 15);
        assert_eq!(bar.active_count(), 0, "Bars start with nothing lit");
    }

    #[test]
    fn test_apply_lights_prefix() {
        let mut bar = SegmentBar::new(15);
        bar.apply(4);
        let lit: std::vec::Vec<bool> = bar.segments().iter().map(SegmentDescriptor::is_active).collect();
        assert!(lit[..4].iter().all(|&a| a), "First four segments lit");
        assert!(lit[4..].iter().all(|&a| !a), "Remaining segments dark");
    }

    #[test]
    fn test_apply_shrinks_and_saturates() {
        let mut bar = SegmentBar::new(15);
        bar.apply(15);
        assert_eq!(bar.active_count(), 15);
        bar.apply(2);
        assert_eq!(bar.active_count(), 2, "Lowering the count darkens segments again");
        bar.apply(99);
        assert_eq!(bar.active_count(), 15, "Counts past the end light the whole bar");
    }

    #[test]
    fn test_apply_keeps_hues() {
        let mut bar = SegmentBar::new(15);
        let before: std::vec::Vec<f32> = bar.segments().iter().map(SegmentDescriptor::hue).collect();
        bar.apply(9);
        let after: std::vec::Vec<f32> = bar.segments().iter().map(SegmentDescriptor::hue).collect();
        assert_eq!(before, after, "Hues are fixed at construction");
    }

    #[test]
    fn test_capacity_cap() {
        assert_eq!(SegmentBar::new(100).len(), MAX_SEGMENTS);
    }
}
