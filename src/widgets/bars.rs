//! Segmented progress bar rendering.
//!
//! Segment colors follow the hue stored on each [`SegmentDescriptor`]:
//!
//! | State | Fill | Border | Halo |
//! |-------|------|--------|------|
//! | active | `hsla(h, 100%, 50%, 0.9)` | none | `hsla(h, 100%, 50%, 0.8)` |
//! | inactive | `hsla(h, 100%, 20%, 0.3)` | `hsla(h, 100%, 50%, 0.5)` | none |
//!
//! Alpha is composited over the black background (see
//! [`hsla_over`](crate::colors::hsla_over)).
//!
//! Segments share the bar width evenly with a fixed gap; any remainder pixels
//! are split on both ends so the bar stays centered.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    colors::{BACKGROUND_888, hsla_over},
    layout::SEGMENT_GAP,
    segments::{SegmentBar, SegmentDescriptor},
    widgets::primitives::{draw_framed_rect, draw_glow},
};

/// Colors for one segment: fill, border, optional glow halo.
pub fn segment_colors(segment: &SegmentDescriptor) -> (Rgb565, Rgb565, Option<Rgb565>) {
    let h = segment.hue();
    if segment.is_active() {
        let fill = hsla_over(h, 1.0, 0.5, 0.9, BACKGROUND_888);
        (fill, fill, Some(hsla_over(h, 1.0, 0.5, 0.8, BACKGROUND_888)))
    } else {
        (
            hsla_over(h, 1.0, 0.2, 0.3, BACKGROUND_888),
            hsla_over(h, 1.0, 0.5, 0.5, BACKGROUND_888),
            None,
        )
    }
}

/// Screen rectangle of segment `index` out of `count` inside `bar`.
pub fn segment_rect(
    bar: Rectangle,
    index: usize,
    count: usize,
) -> Rectangle {
    if count == 0 {
        return Rectangle::zero();
    }
    let count = count as u32;
    let gaps = SEGMENT_GAP * (count - 1);
    let width = bar.size.width.saturating_sub(gaps) / count;
    let used = width * count + gaps;
    let margin = (bar.size.width.saturating_sub(used) / 2) as i32;
    let x = bar.top_left.x + margin + (index as u32 * (width + SEGMENT_GAP)) as i32;
    Rectangle::new(Point::new(x, bar.top_left.y), Size::new(width, bar.size.height))
}

/// Draw every segment of `bar` inside `area`.
pub fn draw_segment_bar<D>(
    display: &mut D,
    area: Rectangle,
    bar: &SegmentBar,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let count = bar.len();
    for (i, segment) in bar.segments().iter().enumerate() {
        let rect = segment_rect(area, i, count);
        let (fill, border, glow) = segment_colors(segment);
        if let Some(halo) = glow {
            draw_glow(display, rect, halo)?;
        }
        draw_framed_rect(display, rect, fill, border)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TOP_BAR;

    #[test]
    fn test_segments_fit_and_do_not_touch() {
        let count = 15;
        let first = segment_rect(TOP_BAR, 0, count);
        let last = segment_rect(TOP_BAR, count - 1, count);
        assert!(first.top_left.x >= TOP_BAR.top_left.x, "First segment inside the bar");
        let (Some(last_br), Some(bar_br)) = (last.bottom_right(), TOP_BAR.bottom_right()) else {
            panic!("segments should have area");
        };
        assert!(last_br.x <= bar_br.x, "Last segment inside the bar");

        for i in 0..count - 1 {
            let a = segment_rect(TOP_BAR, i, count);
            let b = segment_rect(TOP_BAR, i + 1, count);
            let gap = b.top_left.x - (a.top_left.x + a.size.width as i32);
            assert_eq!(gap, SEGMENT_GAP as i32, "Gap between {i} and {}", i + 1);
        }
    }

    #[test]
    fn test_segment_width_for_default_bar() {
        // (140 - 14 * 2) / 15 = 7 px, 7 px left over
        let rect = segment_rect(TOP_BAR, 0, 15);
        assert_eq!(rect.size, Size::new(7, TOP_BAR.size.height));
        assert_eq!(rect.top_left.x, TOP_BAR.top_left.x + 3, "Remainder split across both ends");
    }

    #[test]
    fn test_active_segment_has_halo() {
        let mut bar = SegmentBar::new(15);
        bar.apply(1);
        let (_, _, lit_glow) = segment_colors(&bar.segments()[0]);
        let (_, _, dark_glow) = segment_colors(&bar.segments()[1]);
        assert!(lit_glow.is_some(), "Active segment glows");
        assert!(dark_glow.is_none(), "Inactive segment does not");
    }
}
