//! Static dial face geometry.
//!
//! The dial is defined in a 100x100 "dial space" centered on (50, 50), the
//! same coordinate system the widgets scale onto the screen. The face is built
//! once per session by [`GaugeFace::build`]; only the needle moves afterwards.
//!
//! # Tick Layout
//!
//! - One tick every [`TICK_PITCH_PSI`] from 0 to the ceiling inclusive
//! - Major ticks every [`MAJOR_TICK_PSI`], drawn longer and labelled
//! - Ticks at or above [`DANGER_ZONE_PSI`] use the danger style
//!
//! Angles use the sweep `-135..=+135` degrees with 0 pointing straight up, so
//! conversion to screen coordinates rotates by -90 degrees first.
//!
//! # Memory
//!
//! Ticks and labels are stored in `heapless::Vec`. Capacities cover the largest
//! accepted ceiling ([`MAX_SUPPORTED_PSI`](crate::config::MAX_SUPPORTED_PSI)).

use heapless::Vec;

// =============================================================================
// Dial Geometry Constants
// =============================================================================

/// Needle angle at zero, in degrees from vertical.
pub const SWEEP_START_DEG: f64 = -135.0;

/// Total needle travel in degrees.
pub const SWEEP_DEG: f64 = 270.0;

/// Dial center in dial space.
pub const DIAL_CENTER: DialPoint = DialPoint::new(50.0, 50.0);

/// Outer end of every tick.
pub const TICK_OUTER_RADIUS: f32 = 45.0;

/// Inner end of a major tick.
pub const MAJOR_TICK_INNER_RADIUS: f32 = 36.0;

/// Inner end of a minor tick.
pub const MINOR_TICK_INNER_RADIUS: f32 = 41.0;

/// Radius at which numerals are centered.
pub const LABEL_RADIUS: f32 = 26.0;

/// Needle length from the center.
pub const NEEDLE_RADIUS: f32 = 38.0;

/// PSI between adjacent ticks.
pub const TICK_PITCH_PSI: u16 = 2;

/// PSI between major ticks.
pub const MAJOR_TICK_PSI: u16 = 10;

/// Ticks from this value upward use the danger style.
pub const DANGER_ZONE_PSI: u16 = 40;

/// Tick capacity (121 PSI span / 2 PSI pitch, rounded up).
pub const MAX_TICKS: usize = 64;

/// Label capacity (one per major tick).
pub const MAX_LABELS: usize = 16;

// =============================================================================
// Types
// =============================================================================

/// A point in dial space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialPoint {
    pub x: f32,
    pub y: f32,
}

impl DialPoint {
    pub const fn new(
        x: f32,
        y: f32,
    ) -> Self {
        Self { x, y }
    }
}

/// Visual class of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    Minor,
    Major,
    /// In the danger zone, whether major or minor.
    Danger,
}

/// One tick mark, as a line from `inner` to `outer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: u16,
    pub angle_deg: f32,
    pub inner: DialPoint,
    pub outer: DialPoint,
    pub kind: TickKind,
    /// Major ticks keep their length and label inside the danger zone.
    pub is_major: bool,
}

/// A numeral drawn next to a major tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLabel {
    pub value: u16,
    pub position: DialPoint,
}

/// The static dial: all ticks and their labels.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeFace {
    max_psi: f64,
    ticks: Vec<Tick, MAX_TICKS>,
    labels: Vec<TickLabel, MAX_LABELS>,
}

// =============================================================================
// Geometry
// =============================================================================

/// Sweep angle in degrees for `value` on a dial topping out at `max_psi`.
pub fn angle_for(
    value: f64,
    max_psi: f64,
) -> f64 {
    SWEEP_START_DEG + value / max_psi * SWEEP_DEG
}

/// Point at `radius` from the dial center along a sweep angle.
pub fn polar(
    angle_deg: f64,
    radius: f32,
) -> DialPoint {
    let rad = (angle_deg - 90.0).to_radians();
    DialPoint::new(
        DIAL_CENTER.x + radius * rad.cos() as f32,
        DIAL_CENTER.y + radius * rad.sin() as f32,
    )
}

impl GaugeFace {
    /// Build the face for a dial ceiling of `max_psi`.
    ///
    /// Ticks beyond the buffer capacity are dropped; a validated
    /// [`GaugeConfig`](crate::config::GaugeConfig) never reaches that point.
    pub fn build(max_psi: f64) -> Self {
        let mut ticks = Vec::new();
        let mut labels = Vec::new();

        let last = if max_psi > 0.0 { max_psi.floor() as u16 } else { 0 };
        for value in (0..=last).step_by(TICK_PITCH_PSI as usize) {
            let angle = angle_for(f64::from(value), max_psi);
            let is_major = value % MAJOR_TICK_PSI == 0;
            let kind = if value >= DANGER_ZONE_PSI {
                TickKind::Danger
            } else if is_major {
                TickKind::Major
            } else {
                TickKind::Minor
            };
            let inner_radius = if is_major { MAJOR_TICK_INNER_RADIUS } else { MINOR_TICK_INNER_RADIUS };

            let tick = Tick {
                value,
                angle_deg: angle as f32,
                inner: polar(angle, inner_radius),
                outer: polar(angle, TICK_OUTER_RADIUS),
                kind,
                is_major,
            };
            if ticks.push(tick).is_err() {
                break;
            }

            if is_major {
                let _ = labels.push(TickLabel { value, position: polar(angle, LABEL_RADIUS) });
            }
        }

        Self { max_psi, ticks, labels }
    }

    #[inline]
    pub const fn max_psi(&self) -> f64 { self.max_psi }

    #[inline]
    pub fn ticks(&self) -> &[Tick] { &self.ticks }

    #[inline]
    pub fn labels(&self) -> &[TickLabel] { &self.labels }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(
        a: DialPoint,
        b: DialPoint,
    ) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_face_counts() {
        let face = GaugeFace::build(60.0);
        assert_eq!(face.ticks().len(), 31, "0..=60 step 2 gives 31 ticks");
        assert_eq!(face.labels().len(), 7, "Labels at 0, 10, ..., 60");
        let values: std::vec::Vec<u16> = face.labels().iter().map(|l| l.value).collect();
        assert_eq!(values, [0, 10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_tick_kinds() {
        let face = GaugeFace::build(60.0);
        let kind_of = |v: u16| face.ticks().iter().find(|t| t.value == v).map(|t| t.kind);
        assert_eq!(kind_of(2), Some(TickKind::Minor));
        assert_eq!(kind_of(10), Some(TickKind::Major));
        assert_eq!(kind_of(38), Some(TickKind::Minor));
        assert_eq!(kind_of(40), Some(TickKind::Danger), "Major ticks in the danger zone are danger");
        assert_eq!(kind_of(42), Some(TickKind::Danger), "Minor ticks in the danger zone are danger");
    }

    #[test]
    fn test_danger_major_keeps_length() {
        let face = GaugeFace::build(60.0);
        let Some(tick) = face.ticks().iter().find(|t| t.value == 50) else {
            panic!("tick 50 missing");
        };
        assert!(tick.is_major);
        assert!(close(tick.inner, polar(f64::from(tick.angle_deg), MAJOR_TICK_INNER_RADIUS)));
    }

    #[test]
    fn test_odd_ceiling_stops_below_max() {
        let face = GaugeFace::build(25.0);
        let last = face.ticks().last().map(|t| t.value);
        assert_eq!(last, Some(24), "Last tick is the largest even value <= ceiling");
    }

    #[test]
    fn test_largest_supported_ceiling_fits() {
        let face = GaugeFace::build(120.0);
        assert_eq!(face.ticks().len(), 61);
        assert_eq!(face.labels().len(), 13);
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_angle_for_endpoints() {
        assert_eq!(angle_for(0.0, 60.0), -135.0);
        assert_eq!(angle_for(30.0, 60.0), 0.0);
        assert_eq!(angle_for(60.0, 60.0), 135.0);
    }

    #[test]
    fn test_polar_straight_up() {
        assert!(close(polar(0.0, 45.0), DialPoint::new(50.0, 5.0)), "0 degrees points up");
        assert!(close(polar(90.0, 45.0), DialPoint::new(95.0, 50.0)), "90 degrees points right");
    }

    #[test]
    fn test_first_tick_lower_left() {
        let face = GaugeFace::build(60.0);
        let zero = face.ticks()[0];
        assert!(zero.outer.x < DIAL_CENTER.x, "Zero tick sits left of center");
        assert!(zero.outer.y > DIAL_CENTER.y, "Zero tick sits below center");
        assert!(close(zero.outer, polar(-135.0, TICK_OUTER_RADIUS)));
    }
}
