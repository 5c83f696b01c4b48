//! Geometric hit-testing: board-local points to dart scores.
//!
//! Coordinates are screen oriented: the origin is the board center, `x` grows
//! to the right and `y` grows downward, so sector index 0 (the 20) sits at
//! 12 o'clock and indices advance clockwise.
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::constants::{
    BULL_RADIUS, BULL_SCORE, CANVAS_CENTER, DOUBLE_INNER_RADIUS, DOUBLE_MULTIPLIER,
    DOUBLE_OUTER_RADIUS, OUTER_BULL_RADIUS, OUTER_BULL_SCORE, SECTOR_COUNT, SECTOR_NUMBERS,
    SECTOR_OFFSET, SECTOR_WIDTH, TRIPLE_INNER_RADIUS, TRIPLE_MULTIPLIER, TRIPLE_OUTER_RADIUS,
};
use crate::numbers::floor_f64_to_u32;
use crate::throw::ScoreLabel;

/// A click location relative to the board center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a pixel position on the drawing surface into board-local coordinates.
    #[must_use]
    pub fn from_canvas(canvas_x: f64, canvas_y: f64) -> Self {
        Self::new(canvas_x - CANVAS_CENTER, canvas_y - CANVAS_CENTER)
    }

    /// Translate back into drawing-surface pixels.
    #[must_use]
    pub fn to_canvas(self) -> (f64, f64) {
        (self.x + CANVAS_CENTER, self.y + CANVAS_CENTER)
    }

    /// Point at `radius` from the center along the middle of sector `index`.
    #[must_use]
    pub fn in_sector(index: usize, radius: f64) -> Self {
        Self::polar(sector_center_angle(index), radius)
    }

    /// Point at `radius` along the screen angle `angle` (0 = 3 o'clock, clockwise).
    #[must_use]
    pub fn polar(angle: f64, radius: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Screen angle in `(-PI, PI]`, as returned by `atan2(dy, dx)`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Scoring area a point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    Bull,
    OuterBull,
    /// Plain sector score. Includes points lying exactly on a ring wire.
    Single,
    Triple,
    Double,
    Miss,
}

impl Ring {
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Triple => TRIPLE_MULTIPLIER,
            Self::Double => DOUBLE_MULTIPLIER,
            Self::Bull | Self::OuterBull | Self::Single | Self::Miss => 1,
        }
    }

    /// Radius-only zone lookup with strict comparisons against every wire.
    /// Non-finite radii miss the board.
    #[must_use]
    pub fn for_radius(radius: f64) -> Self {
        if !radius.is_finite() {
            Self::Miss
        } else if radius < BULL_RADIUS {
            Self::Bull
        } else if radius < OUTER_BULL_RADIUS {
            Self::OuterBull
        } else if radius > TRIPLE_INNER_RADIUS && radius < TRIPLE_OUTER_RADIUS {
            Self::Triple
        } else if radius > DOUBLE_INNER_RADIUS && radius < DOUBLE_OUTER_RADIUS {
            Self::Double
        } else if radius > DOUBLE_OUTER_RADIUS {
            Self::Miss
        } else {
            Self::Single
        }
    }
}

/// Result of hit-testing a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub ring: Ring,
    pub sector_index: usize,
    /// Score before the ring multiplier: 0, 1..=20, 25 or 50.
    pub raw_score: u32,
    pub final_score: u32,
    pub label: ScoreLabel,
}

/// Angular sector for a point, in `0..SECTOR_COUNT`.
#[must_use]
pub fn sector_index(point: Point) -> usize {
    let mut angle = point.angle();
    while angle < -SECTOR_OFFSET {
        angle += TAU;
    }
    let slot = floor_f64_to_u32((angle + SECTOR_OFFSET) / SECTOR_WIDTH);
    usize::try_from(slot).unwrap_or(0) % SECTOR_COUNT
}

/// Number printed on sector `index` (wrapping).
#[must_use]
pub const fn sector_number(index: usize) -> u8 {
    SECTOR_NUMBERS[index % SECTOR_COUNT]
}

/// Screen angle through the middle of sector `index`.
#[must_use]
pub fn sector_center_angle(index: usize) -> f64 {
    let steps = u32::try_from(index % SECTOR_COUNT).unwrap_or(0);
    f64::from(steps).mul_add(SECTOR_WIDTH, -FRAC_PI_2)
}

/// Screen angles `(start, end)` of the wires bounding sector `index`.
#[must_use]
pub fn sector_bounds(index: usize) -> (f64, f64) {
    let center = sector_center_angle(index);
    let half = SECTOR_WIDTH / 2.0;
    (center - half, center + half)
}

/// Classify a board-local point into a dart score.
#[must_use]
pub fn classify(point: Point) -> Classification {
    let sector_index = sector_index(point);
    let number = sector_number(sector_index);
    let ring = Ring::for_radius(point.radius());

    let (raw_score, label) = match ring {
        Ring::Bull => (BULL_SCORE, ScoreLabel::Bull),
        Ring::OuterBull => (OUTER_BULL_SCORE, ScoreLabel::OuterBull),
        Ring::Triple => (u32::from(number), ScoreLabel::Triple(number)),
        Ring::Double => (u32::from(number), ScoreLabel::Double(number)),
        Ring::Single => (u32::from(number), ScoreLabel::Single(number)),
        Ring::Miss => (0, ScoreLabel::Miss),
    };
    let final_score = floor_f64_to_u32(f64::from(raw_score * ring.multiplier()));

    Classification {
        ring,
        sector_index,
        raw_score,
        final_score,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_centers_follow_board_order() {
        for (index, expected) in SECTOR_NUMBERS.iter().enumerate() {
            let hit = classify(Point::in_sector(index, 50.0));
            assert_eq!(hit.sector_index, index);
            assert_eq!(hit.label, ScoreLabel::Single(*expected));
            assert_eq!(hit.final_score, u32::from(*expected));
        }
    }

    #[test]
    fn twenty_is_straight_up_on_screen() {
        let hit = classify(Point::new(0.0, -50.0));
        assert_eq!(hit.label, ScoreLabel::Single(20));
        let hit = classify(Point::new(0.0, 50.0));
        assert_eq!(hit.label, ScoreLabel::Single(3));
        let hit = classify(Point::new(50.0, 0.0));
        assert_eq!(hit.label, ScoreLabel::Single(6));
        let hit = classify(Point::new(-50.0, 0.0));
        assert_eq!(hit.label, ScoreLabel::Single(11));
    }

    #[test]
    fn rings_apply_multipliers() {
        let triple = classify(Point::in_sector(0, 103.0));
        assert_eq!(triple.ring, Ring::Triple);
        assert_eq!(triple.raw_score, 20);
        assert_eq!(triple.final_score, 60);
        assert_eq!(triple.label.to_string(), "T20");

        let double = classify(Point::in_sector(11, 166.0));
        assert_eq!(double.final_score, 38);
        assert_eq!(double.label.to_string(), "D19");
    }

    #[test]
    fn bulls_override_sector_lookup() {
        let bull = classify(Point::new(3.0, 2.0));
        assert_eq!(bull.final_score, 50);
        assert_eq!(bull.label.to_string(), "BULL");

        let outer = classify(Point::new(0.0, 6.35));
        assert_eq!(outer.final_score, 25);
        assert_eq!(outer.label.to_string(), "25");

        let outer_edge = classify(Point::new(15.99, 0.0));
        assert_eq!(outer_edge.ring, Ring::OuterBull);
    }

    #[test]
    fn outside_the_double_wire_is_a_miss() {
        for radius in [170.01, 200.0, 1_000.0] {
            let hit = classify(Point::in_sector(4, radius));
            assert_eq!(hit.ring, Ring::Miss);
            assert_eq!(hit.final_score, 0);
            assert_eq!(hit.label.to_string(), "0");
        }
    }

    #[test]
    fn wires_score_the_plain_sector() {
        for radius in [16.0, 99.0, 107.0, 162.0, 170.0] {
            let hit = classify(Point::new(0.0, -radius));
            assert_eq!(hit.ring, Ring::Single, "radius {radius}");
            assert_eq!(hit.final_score, 20, "radius {radius}");
            assert_eq!(hit.label.to_string(), "20");
        }
    }

    #[test]
    fn sector_wire_between_five_and_twenty() {
        let (start, end) = sector_bounds(0);
        let just_inside = classify(Point::polar(start + 1e-6, 50.0));
        assert_eq!(just_inside.label, ScoreLabel::Single(20));
        let just_before = classify(Point::polar(start - 1e-6, 50.0));
        assert_eq!(just_before.label, ScoreLabel::Single(5));
        let next = classify(Point::polar(end + 1e-6, 50.0));
        assert_eq!(next.label, ScoreLabel::Single(1));
    }

    #[test]
    fn canvas_round_trip() {
        let point = Point::from_canvas(250.0, 147.0);
        assert!((point.y + 103.0).abs() < f64::EPSILON);
        assert_eq!(classify(point).label.to_string(), "T20");
        assert_eq!(point.to_canvas(), (250.0, 147.0));
    }

    #[test]
    fn non_finite_points_miss() {
        for point in [
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, f64::NAN),
            Point::new(f64::INFINITY, 10.0),
            Point::new(5.0, f64::NEG_INFINITY),
        ] {
            let hit = classify(point);
            assert_eq!(hit.ring, Ring::Miss);
            assert_eq!(hit.final_score, 0);
            assert_eq!(hit.label, ScoreLabel::Miss);
        }
    }
}
