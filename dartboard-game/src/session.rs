//! 501 leg state machine.
//!
//! The session never owns throws. It reads the shared [`ThrowLog`], keeps the
//! visit index where the current leg starts, and schedules the deferred
//! overlay effects that follow a checkout or a bust. Time is a caller-supplied
//! millisecond clock so the machine stays deterministic.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::constants::{UNFINISHABLE_REMAINDER, VISIT_SIZE};
use crate::numbers::signed_difference;
use crate::throw_log::ThrowLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    PausedCheckout,
    PausedBust,
}

impl GamePhase {
    #[must_use]
    pub const fn is_paused(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Overlay shown over the board once the display delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    Checkout,
    Bust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BustReason {
    /// The visit took the score below zero.
    Overshoot,
    /// Exactly zero, but the last dart was not a double or the bull.
    NoDoubleFinish,
    /// One left, which no double can finish.
    LeavesOne,
}

/// Result of evaluating the leg after a dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegOutcome {
    Continue { remaining: i64 },
    Checkout,
    Bust(BustReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingEffect {
    RevealOverlay(Overlay),
    /// Zero the busted visit, pad it to three darts and resume play.
    ResolveBust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    pub due_ms: u64,
    pub effect: PendingEffect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    starting_score: u32,
    leg_start_visit: usize,
    phase: GamePhase,
    overlay: Option<Overlay>,
    show_new_leg: bool,
    leg_number: u32,
    legs_won: u32,
    pending: SmallVec<[ScheduledEffect; 2]>,
}

impl GameSession {
    #[must_use]
    pub fn new(starting_score: u32) -> Self {
        Self {
            starting_score,
            leg_start_visit: 0,
            phase: GamePhase::Active,
            overlay: None,
            show_new_leg: false,
            leg_number: 1,
            legs_won: 0,
            pending: SmallVec::new(),
        }
    }

    #[must_use]
    pub const fn starting_score(&self) -> u32 {
        self.starting_score
    }

    /// Visit index where the current leg begins.
    #[must_use]
    pub const fn leg_start_index(&self) -> usize {
        self.leg_start_visit
    }

    /// Log index of the first throw of the current leg.
    #[must_use]
    pub const fn leg_start_throw(&self) -> usize {
        self.leg_start_visit * VISIT_SIZE
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.phase.is_paused()
    }

    #[must_use]
    pub const fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    #[must_use]
    pub const fn show_new_leg(&self) -> bool {
        self.show_new_leg
    }

    #[must_use]
    pub const fn leg_number(&self) -> u32 {
        self.leg_number
    }

    #[must_use]
    pub const fn legs_won(&self) -> u32 {
        self.legs_won
    }

    #[must_use]
    pub fn pending(&self) -> &[ScheduledEffect] {
        &self.pending
    }

    /// Earliest due time among pending effects.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|scheduled| scheduled.due_ms).min()
    }

    /// Score left in the current leg. Negative after an overshoot.
    #[must_use]
    pub fn remaining(&self, log: &ThrowLog) -> i64 {
        let scored: u64 = log
            .tail_from(self.leg_start_throw())
            .iter()
            .map(|throw| u64::from(throw.final_score()))
            .sum();
        signed_difference(u64::from(self.starting_score), scored)
    }

    /// Judge the leg after a dart has been appended while active.
    pub fn evaluate_append(
        &mut self,
        log: &ThrowLog,
        now_ms: u64,
        config: &EngineConfig,
    ) -> LegOutcome {
        let remaining = self.remaining(log);
        let finished_on_double = log
            .last()
            .is_some_and(|throw| throw.label().is_finishing_double());

        let outcome = match remaining {
            r if r < 0 => LegOutcome::Bust(BustReason::Overshoot),
            0 if finished_on_double => LegOutcome::Checkout,
            0 => LegOutcome::Bust(BustReason::NoDoubleFinish),
            UNFINISHABLE_REMAINDER => LegOutcome::Bust(BustReason::LeavesOne),
            r => LegOutcome::Continue { remaining: r },
        };

        match outcome {
            LegOutcome::Checkout => {
                info!("leg {} checked out", self.leg_number);
                self.phase = GamePhase::PausedCheckout;
                self.schedule(
                    now_ms.saturating_add(config.checkout_reveal_ms),
                    PendingEffect::RevealOverlay(Overlay::Checkout),
                );
            }
            LegOutcome::Bust(reason) => {
                info!("leg {} bust: {reason:?} (remaining {remaining})", self.leg_number);
                self.phase = GamePhase::PausedBust;
                self.schedule(
                    now_ms.saturating_add(config.checkout_reveal_ms),
                    PendingEffect::RevealOverlay(Overlay::Bust),
                );
                self.schedule(
                    now_ms.saturating_add(config.bust_cleanup_ms),
                    PendingEffect::ResolveBust,
                );
            }
            LegOutcome::Continue { .. } => {}
        }
        outcome
    }

    fn schedule(&mut self, due_ms: u64, effect: PendingEffect) {
        self.pending.push(ScheduledEffect { due_ms, effect });
    }

    /// Apply every pending effect due at `now_ms`, oldest first.
    pub fn fire_due(&mut self, log: &mut ThrowLog, now_ms: u64) -> Vec<PendingEffect> {
        let mut due: Vec<ScheduledEffect> = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.due_ms <= now_ms {
                due.push(*scheduled);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|scheduled| scheduled.due_ms);

        due.into_iter()
            .map(|scheduled| {
                self.apply_effect(log, scheduled.effect);
                scheduled.effect
            })
            .collect()
    }

    fn apply_effect(&mut self, log: &mut ThrowLog, effect: PendingEffect) {
        debug!("firing {effect:?} in phase {:?}", self.phase);
        match effect {
            PendingEffect::RevealOverlay(overlay) => {
                self.overlay = Some(overlay);
                if overlay == Overlay::Checkout {
                    self.show_new_leg = true;
                }
            }
            PendingEffect::ResolveBust => {
                let start = log.current_visit_start().max(self.leg_start_throw());
                log.zero_from(start);
                log.pad_visit();
                self.phase = GamePhase::Active;
                self.overlay = None;
            }
        }
    }

    pub fn cancel_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!("cancelling {} pending effect(s)", self.pending.len());
            self.pending.clear();
        }
    }

    /// Back to a fresh first leg. Pending effects survive only when `keep_pending` is set.
    pub fn reset(&mut self, keep_pending: bool) {
        let pending = if keep_pending {
            std::mem::take(&mut self.pending)
        } else {
            SmallVec::new()
        };
        *self = Self {
            pending,
            ..Self::new(self.starting_score)
        };
    }

    /// A throw was removed. Leaving a pause reveals the leg controls.
    pub fn on_undo(&mut self) {
        if self.is_paused() {
            self.phase = GamePhase::Active;
            self.overlay = None;
            self.show_new_leg = true;
        }
    }

    /// Whether closing the current leg would change anything.
    #[must_use]
    pub fn can_start_new_leg(&self, log: &ThrowLog) -> bool {
        self.is_paused() || self.show_new_leg || log.len() > self.leg_start_throw()
    }

    /// Close the current leg, padding an interrupted visit, and start counting again.
    pub fn start_new_leg(&mut self, log: &mut ThrowLog) {
        if self.phase == GamePhase::PausedCheckout || self.overlay == Some(Overlay::Checkout) {
            self.legs_won += 1;
        }
        let padded = log.pad_visit();
        self.leg_start_visit = log.visit_count();
        self.phase = GamePhase::Active;
        self.overlay = None;
        self.show_new_leg = false;
        self.leg_number += 1;
        info!(
            "leg {} starts at visit {} ({padded} placeholder(s))",
            self.leg_number, self.leg_start_visit
        );
    }
}
