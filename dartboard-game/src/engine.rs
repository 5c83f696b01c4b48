//! The scoring engine: one owned state object driven by discrete commands.
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, Mode, TimerPolicy};
use crate::geometry::Point;
use crate::session::{GameSession, LegOutcome, PendingEffect};
use crate::stats::StatsProjection;
use crate::throw::ThrowRecord;
use crate::throw_log::ThrowLog;

/// Input events accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// A click at a board-local point.
    Throw(Point),
    BounceOut,
    UndoLast,
    Reset,
    ConfirmNewLeg,
    EnterPractice,
    EnterGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// A checkout or bust is on display.
    Paused,
    /// Leg commands only exist in 501 mode.
    PracticeMode,
    /// The current leg has no darts to close.
    NothingToClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Thrown {
        record: ThrowRecord,
        leg: Option<LegOutcome>,
    },
    /// Undo result; `None` when the log was already empty.
    Undone(Option<ThrowRecord>),
    Cleared,
    LegStarted {
        leg_number: u32,
    },
    ModeChanged(Mode),
    Rejected(RejectReason),
}

impl CommandOutcome {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Serializable snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineView {
    pub mode: Mode,
    pub throws: ThrowLog,
    pub stats: StatsProjection,
    pub next_deadline_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DartEngine {
    config: EngineConfig,
    mode: Mode,
    log: ThrowLog,
    session: Option<GameSession>,
    stats: StatsProjection,
}

impl Default for DartEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DartEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mode = config.default_mode;
        let session = mode
            .is_game()
            .then(|| GameSession::new(config.starting_score));
        let mut engine = Self {
            config,
            mode,
            log: ThrowLog::new(),
            session,
            stats: StatsProjection::default(),
        };
        engine.refresh();
        engine
    }

    #[must_use]
    pub fn practice() -> Self {
        Self::new(EngineConfig::default().with_mode(Mode::Practice))
    }

    #[must_use]
    pub fn game() -> Self {
        Self::new(EngineConfig::default().with_mode(Mode::Game))
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn log(&self) -> &ThrowLog {
        &self.log
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn projection(&self) -> &StatsProjection {
        &self.stats
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_paused)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.session.as_ref().and_then(GameSession::next_deadline)
    }

    #[must_use]
    pub fn view(&self) -> EngineView {
        EngineView {
            mode: self.mode,
            throws: self.log.clone(),
            stats: self.stats.clone(),
            next_deadline_ms: self.next_deadline(),
        }
    }

    /// Fire deferred effects due at `now_ms`, then apply `command`.
    pub fn apply(&mut self, command: Command, now_ms: u64) -> CommandOutcome {
        self.advance(now_ms);
        let outcome = match command {
            Command::Throw(point) => self.append(ThrowRecord::from_point(point), now_ms),
            Command::BounceOut => self.append(ThrowRecord::bounce_out(), now_ms),
            Command::UndoLast => self.undo_last(),
            Command::Reset => self.reset(),
            Command::ConfirmNewLeg => self.confirm_new_leg(),
            Command::EnterPractice => self.enter_mode(Mode::Practice),
            Command::EnterGame => self.enter_mode(Mode::Game),
        };
        debug!("{command:?} -> {outcome:?}");
        outcome
    }

    /// Fire every deferred effect due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<PendingEffect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let fired = session.fire_due(&mut self.log, now_ms);
        if !fired.is_empty() {
            self.refresh();
        }
        fired
    }

    fn append(&mut self, record: ThrowRecord, now_ms: u64) -> CommandOutcome {
        if self.is_paused() {
            return CommandOutcome::Rejected(RejectReason::Paused);
        }
        self.log.push(record);
        let leg = self
            .session
            .as_mut()
            .map(|session| session.evaluate_append(&self.log, now_ms, &self.config));
        self.refresh();
        CommandOutcome::Thrown { record, leg }
    }

    fn undo_last(&mut self) -> CommandOutcome {
        let removed = self.log.pop();
        let cancel = self.config.timer_policy == TimerPolicy::CancelOnMutation;
        if let (Some(session), Some(_)) = (self.session.as_mut(), removed) {
            session.on_undo();
            if cancel {
                session.cancel_pending();
            }
        }
        self.refresh();
        CommandOutcome::Undone(removed)
    }

    fn reset(&mut self) -> CommandOutcome {
        self.log.clear();
        let keep_pending = self.config.timer_policy == TimerPolicy::Preserve;
        if let Some(session) = self.session.as_mut() {
            session.reset(keep_pending);
        }
        info!("throw log cleared ({} mode)", self.mode.label());
        self.refresh();
        CommandOutcome::Cleared
    }

    fn confirm_new_leg(&mut self) -> CommandOutcome {
        let Some(session) = self.session.as_mut() else {
            return CommandOutcome::Rejected(RejectReason::PracticeMode);
        };
        if !session.can_start_new_leg(&self.log) {
            return CommandOutcome::Rejected(RejectReason::NothingToClose);
        }
        if self.config.timer_policy == TimerPolicy::CancelOnMutation {
            session.cancel_pending();
        }
        session.start_new_leg(&mut self.log);
        let leg_number = session.leg_number();
        self.refresh();
        CommandOutcome::LegStarted { leg_number }
    }

    fn enter_mode(&mut self, mode: Mode) -> CommandOutcome {
        info!("entering {} mode", mode.label());
        self.mode = mode;
        self.log.clear();
        self.session = mode
            .is_game()
            .then(|| GameSession::new(self.config.starting_score));
        self.refresh();
        CommandOutcome::ModeChanged(mode)
    }

    fn refresh(&mut self) {
        self.stats = StatsProjection::compute(&self.log, self.session.as_ref());
    }
}
