//! Display-ready numbers derived from the throw log. Read-only and recomputed
//! from scratch after every mutation.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{EMPTY_SLOT_LABEL, VISIT_SIZE};
use crate::geometry::Point;
use crate::numbers::{count_to_f64, sum_to_f64};
use crate::session::{GamePhase, GameSession, Overlay};
use crate::throw::ThrowRecord;
use crate::throw_log::ThrowLog;
use crate::visits::{NotableThrows, TierCounts, VisitAggregate};

/// Three-dart average over the darts actually thrown.
#[must_use]
pub fn three_dart_average(throws: &[ThrowRecord]) -> f64 {
    let darts = throws.iter().filter(|t| !t.is_placeholder()).count();
    let scored: u64 = throws.iter().map(|t| u64::from(t.final_score())).sum();
    3.0 * sum_to_f64(scored) / count_to_f64(darts.max(1))
}

#[must_use]
pub fn format_average(average: f64) -> String {
    format!("{average:.2}")
}

/// Position of a dart of the visit in progress, for marker rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Point,
    /// The most recent dart on the board.
    pub current: bool,
}

/// Scoreboard row for the visit in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentVisit {
    pub slots: [String; VISIT_SIZE],
    /// Slot holding the latest dart; `None` before the first throw.
    pub current_slot: Option<usize>,
    pub markers: SmallVec<[Marker; VISIT_SIZE]>,
}

impl CurrentVisit {
    #[must_use]
    pub fn from_log(log: &ThrowLog) -> Self {
        let mut slots: [String; VISIT_SIZE] =
            std::array::from_fn(|_| EMPTY_SLOT_LABEL.to_string());
        if log.is_empty() {
            return Self {
                slots,
                current_slot: None,
                markers: SmallVec::new(),
            };
        }

        let visit = log.tail_from(log.current_visit_start());
        for (slot, throw) in slots.iter_mut().zip(visit) {
            *slot = throw.label().to_string();
        }

        let positions: SmallVec<[Point; VISIT_SIZE]> =
            visit.iter().filter_map(ThrowRecord::position).collect();
        let last = positions.len().saturating_sub(1);
        let markers = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| Marker {
                position,
                current: index == last,
            })
            .collect();

        Self {
            slots,
            current_slot: Some(visit.len() - 1),
            markers,
        }
    }
}

/// Numbers for the leg in progress (501 mode only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegStats {
    pub leg_number: u32,
    pub legs_won: u32,
    pub starting_score: u32,
    pub remaining: i64,
    pub darts: usize,
    pub average: f64,
    pub average_display: String,
    pub phase: GamePhase,
    pub overlay: Option<Overlay>,
    pub show_new_leg: bool,
}

impl LegStats {
    #[must_use]
    pub fn compute(log: &ThrowLog, session: &GameSession) -> Self {
        let leg = log.tail_from(session.leg_start_throw());
        let average = three_dart_average(leg);
        Self {
            leg_number: session.leg_number(),
            legs_won: session.legs_won(),
            starting_score: session.starting_score(),
            remaining: session.remaining(log),
            darts: leg.iter().filter(|t| !t.is_placeholder()).count(),
            average,
            average_display: format_average(average),
            phase: session.phase(),
            overlay: session.overlay(),
            show_new_leg: session.show_new_leg(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsProjection {
    /// Log length, not-thrown placeholders included.
    pub total_throws: usize,
    pub visit_count: usize,
    pub average: f64,
    pub average_display: String,
    pub tiers: TierCounts,
    pub notables: NotableThrows,
    pub current_visit: CurrentVisit,
    pub leg: Option<LegStats>,
}

impl StatsProjection {
    #[must_use]
    pub fn compute(log: &ThrowLog, session: Option<&GameSession>) -> Self {
        let aggregate = VisitAggregate::from_log(log);
        let average = three_dart_average(log.as_slice());
        Self {
            total_throws: log.len(),
            visit_count: aggregate.totals.len(),
            average,
            average_display: format_average(average),
            tiers: aggregate.tiers,
            notables: aggregate.notables,
            current_visit: CurrentVisit::from_log(log),
            leg: session.map(|session| LegStats::compute(log, session)),
        }
    }
}

impl Default for StatsProjection {
    fn default() -> Self {
        Self::compute(&ThrowLog::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dart(sector: usize, radius: f64) -> ThrowRecord {
        ThrowRecord::from_point(Point::in_sector(sector, radius))
    }

    #[test]
    fn empty_log_projection() {
        let stats = StatsProjection::default();
        assert_eq!(stats.total_throws, 0);
        assert_eq!(stats.visit_count, 0);
        assert_eq!(stats.average_display, "0.00");
        assert_eq!(stats.current_visit.slots, [".", ".", "."]);
        assert_eq!(stats.current_visit.current_slot, None);
        assert!(stats.leg.is_none());
    }

    #[test]
    fn average_is_per_three_darts() {
        let mut log = ThrowLog::new();
        log.push(dart(0, 103.0));
        log.push(dart(0, 50.0));
        let stats = StatsProjection::compute(&log, None);
        assert!((stats.average - 120.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_display, "120.00");
        assert_eq!(stats.visit_count, 1);
    }

    #[test]
    fn current_visit_rolls_over_every_three_darts() {
        let mut log = ThrowLog::new();
        for _ in 0..3 {
            log.push(dart(0, 103.0));
        }
        let visit = CurrentVisit::from_log(&log);
        assert_eq!(visit.slots, ["T20", "T20", "T20"]);
        assert_eq!(visit.current_slot, Some(2));

        log.push(ThrowRecord::bounce_out());
        let visit = CurrentVisit::from_log(&log);
        assert_eq!(visit.slots, ["0", ".", "."]);
        assert_eq!(visit.current_slot, Some(0));
        assert!(visit.markers.is_empty());
    }

    #[test]
    fn markers_skip_bounce_outs_and_flag_the_latest() {
        let mut log = ThrowLog::new();
        log.push(dart(0, 50.0));
        log.push(ThrowRecord::bounce_out());
        log.push(dart(1, 50.0));
        let visit = CurrentVisit::from_log(&log);
        assert_eq!(visit.markers.len(), 2);
        assert!(!visit.markers[0].current);
        assert!(visit.markers[1].current);
    }

    #[test]
    fn placeholders_do_not_dilute_the_average() {
        let mut log = ThrowLog::new();
        log.push(dart(0, 103.0));
        log.pad_visit();
        assert!((three_dart_average(log.as_slice()) - 180.0).abs() < f64::EPSILON);
    }
}
