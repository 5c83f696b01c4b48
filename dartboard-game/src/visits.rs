//! Visit aggregation: groups of three consecutive throws, score tiers and
//! notable-dart tallies. Everything here is recomputed from the log.
use serde::{Deserialize, Serialize};

use crate::constants::{TIER_91_MIN, TIER_131_MIN, TIER_171_MIN, TIER_MAX, VISIT_SIZE};
use crate::throw::{ScoreLabel, ThrowRecord};
use crate::throw_log::ThrowLog;

/// Borrowed view over up to three consecutive throws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit<'a> {
    pub index: usize,
    pub throws: &'a [ThrowRecord],
}

impl Visit<'_> {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.throws.iter().map(ThrowRecord::final_score).sum()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.throws.len() == VISIT_SIZE
    }

    #[must_use]
    pub fn tier(&self) -> Option<VisitTier> {
        if self.is_complete() {
            VisitTier::classify(self.total())
        } else {
            None
        }
    }
}

/// Partition a slice of throws into visits, starting at its first element.
pub fn visits(throws: &[ThrowRecord]) -> impl Iterator<Item = Visit<'_>> {
    throws
        .chunks(VISIT_SIZE)
        .enumerate()
        .map(|(index, throws)| Visit { index, throws })
}

/// Visit totals for the whole log, the final partial visit included.
#[must_use]
pub fn visit_totals(log: &ThrowLog) -> Vec<u32> {
    visits(log.as_slice()).map(|visit| visit.total()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitTier {
    S180,
    S171,
    S131,
    S91,
}

impl VisitTier {
    /// Tier for a visit total; totals below 91 are not tracked.
    #[must_use]
    pub const fn classify(total: u32) -> Option<Self> {
        if total == TIER_MAX {
            Some(Self::S180)
        } else if total >= TIER_171_MIN && total < TIER_MAX {
            Some(Self::S171)
        } else if total >= TIER_131_MIN && total < TIER_171_MIN {
            Some(Self::S131)
        } else if total >= TIER_91_MIN && total < TIER_131_MIN {
            Some(Self::S91)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S180 => "180",
            Self::S171 => "171+",
            Self::S131 => "131+",
            Self::S91 => "91+",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub s180: u32,
    pub s171: u32,
    pub s131: u32,
    pub s91: u32,
}

impl TierCounts {
    pub fn record(&mut self, tier: VisitTier) {
        let slot = match tier {
            VisitTier::S180 => &mut self.s180,
            VisitTier::S171 => &mut self.s171,
            VisitTier::S131 => &mut self.s131,
            VisitTier::S91 => &mut self.s91,
        };
        *slot += 1;
    }

    #[must_use]
    pub const fn get(&self, tier: VisitTier) -> u32 {
        match tier {
            VisitTier::S180 => self.s180,
            VisitTier::S171 => self.s171,
            VisitTier::S131 => self.s131,
            VisitTier::S91 => self.s91,
        }
    }
}

/// Counts of individually notable darts, matched by scoreboard label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotableThrows {
    pub t20: u32,
    /// T19, T18 and T17 share one counter.
    pub t19_to_t17: u32,
    pub d20: u32,
    pub d16: u32,
    pub bull: u32,
}

impl NotableThrows {
    pub fn record(&mut self, label: ScoreLabel) {
        match label {
            ScoreLabel::Triple(20) => self.t20 += 1,
            ScoreLabel::Triple(17..=19) => self.t19_to_t17 += 1,
            ScoreLabel::Double(20) => self.d20 += 1,
            ScoreLabel::Double(16) => self.d16 += 1,
            ScoreLabel::Bull => self.bull += 1,
            _ => {}
        }
    }
}

/// Full aggregate over a throw log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitAggregate {
    pub totals: Vec<u32>,
    pub tiers: TierCounts,
    pub notables: NotableThrows,
}

impl VisitAggregate {
    #[must_use]
    pub fn from_log(log: &ThrowLog) -> Self {
        let mut tiers = TierCounts::default();
        let mut totals = Vec::with_capacity(log.visit_count());
        for visit in visits(log.as_slice()) {
            totals.push(visit.total());
            if let Some(tier) = visit.tier() {
                tiers.record(tier);
            }
        }

        let mut notables = NotableThrows::default();
        for throw in log {
            notables.record(throw.label());
        }

        Self {
            totals,
            tiers,
            notables,
        }
    }
}
