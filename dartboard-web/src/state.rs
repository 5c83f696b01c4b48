//! Reducer wrapping the scoring engine for the component tree.
use dartboard_game::{Command, CommandOutcome, DartEngine, EngineConfig, EngineView};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerAction {
    Apply { command: Command, now_ms: u64 },
    /// A deferred effect may be due.
    Tick { now_ms: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    pub engine: DartEngine,
    pub last_outcome: Option<CommandOutcome>,
}

impl TrackerState {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: DartEngine::new(config),
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> EngineView {
        self.engine.view()
    }
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Reducible for TrackerState {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TrackerAction::Apply { command, now_ms } => {
                let outcome = next.engine.apply(command, now_ms);
                if outcome.is_rejected() {
                    log::debug!("command {command:?} rejected: {outcome:?}");
                }
                next.last_outcome = Some(outcome);
            }
            TrackerAction::Tick { now_ms } => {
                if next.engine.advance(now_ms).is_empty() {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Milliseconds until the engine's next deferred effect, if any.
#[must_use]
pub fn delay_until(deadline_ms: Option<u64>, now_ms: u64) -> Option<i32> {
    deadline_ms.map(|deadline| i32::try_from(deadline.saturating_sub(now_ms)).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dartboard_game::{Mode, Overlay, Point};

    fn reduce(state: Rc<TrackerState>, action: TrackerAction) -> Rc<TrackerState> {
        state.reduce(action)
    }

    #[test]
    fn apply_records_the_outcome() {
        let state = Rc::new(TrackerState::default());
        let next = reduce(
            state,
            TrackerAction::Apply {
                command: Command::Throw(Point::in_sector(0, 103.0)),
                now_ms: 0,
            },
        );
        assert_eq!(next.view().stats.total_throws, 1);
        assert!(matches!(next.last_outcome, Some(CommandOutcome::Thrown { .. })));
    }

    #[test]
    fn idle_tick_keeps_the_same_state() {
        let state = Rc::new(TrackerState::default());
        let next = reduce(Rc::clone(&state), TrackerAction::Tick { now_ms: 10_000 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn tick_reveals_the_overlay() {
        let config = EngineConfig {
            starting_score: 40,
            ..EngineConfig::default().with_mode(Mode::Game)
        };
        let state = Rc::new(TrackerState::new(config));
        let state = reduce(
            state,
            TrackerAction::Apply {
                command: Command::Throw(Point::in_sector(0, 166.0)),
                now_ms: 0,
            },
        );
        assert_eq!(delay_until(state.engine.next_deadline(), 250), Some(750));
        let state = reduce(state, TrackerAction::Tick { now_ms: 1_000 });
        let leg = state.view().stats.leg.unwrap();
        assert_eq!(leg.overlay, Some(Overlay::Checkout));
        assert!(leg.show_new_leg);
    }

    #[test]
    fn delay_saturates_for_past_deadlines() {
        assert_eq!(delay_until(Some(100), 500), Some(0));
        assert_eq!(delay_until(None, 500), None);
    }
}
