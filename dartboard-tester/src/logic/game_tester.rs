use anyhow::Result;
use dartboard_game::constants::{TIER_MAX, UNFINISHABLE_REMAINDER, VISIT_SIZE};
use dartboard_game::visits::visits;
use dartboard_game::{
    Command, CommandOutcome, DartEngine, EngineConfig, EngineView, GamePhase, LegOutcome, Mode,
    PendingEffect, StatsProjection,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use super::thrower::{AimStrategy, Thrower};

/// Simulated time between consecutive commands.
pub const DART_INTERVAL_MS: u64 = 800;
pub const DEFAULT_MAX_DARTS: usize = 90;
pub const DEFAULT_SKILL_PX: f64 = 8.0;

/// Declarative plan for running a simulated session.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub mode: Mode,
    pub strategy: AimStrategy,
    pub skill_px: f64,
    pub max_darts: usize,
    pub undo_rate: f64,
    pub bounce_rate: f64,
    pub config: EngineConfig,
    pub expectations: Vec<SimulationExpectation>,
}

impl SimulationPlan {
    #[must_use]
    pub fn new(mode: Mode, strategy: AimStrategy) -> Self {
        Self {
            mode,
            strategy,
            skill_px: DEFAULT_SKILL_PX,
            max_darts: DEFAULT_MAX_DARTS,
            undo_rate: 0.0,
            bounce_rate: 0.0,
            config: EngineConfig::default(),
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_darts(mut self, max_darts: usize) -> Self {
        self.max_darts = max_darts;
        self
    }

    #[must_use]
    pub const fn with_skill(mut self, skill_px: f64) -> Self {
        self.skill_px = skill_px;
        self
    }

    #[must_use]
    pub fn with_undo_rate(mut self, rate: f64) -> Self {
        self.undo_rate = rate.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_bounce_rate(mut self, rate: f64) -> Self {
        self.bounce_rate = rate.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: impl Into<SimulationExpectation>) -> Self {
        self.expectations.push(expectation.into());
        self
    }
}

/// Assertion hook run after a simulation completes.
type SimulationExpectationFn =
    Arc<dyn Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static>;

#[derive(Clone)]
pub struct SimulationExpectation(SimulationExpectationFn);

impl std::fmt::Debug for SimulationExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationExpectation").finish()
    }
}

impl SimulationExpectation {
    pub fn evaluate(&self, summary: &SimulationSummary) -> Result<()> {
        (self.0)(summary)
    }
}

impl<F> From<F> for SimulationExpectation
where
    F: Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self(Arc::new(f))
    }
}

/// Complete record of a simulated session.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub mode: Mode,
    pub strategy: AimStrategy,
    pub darts_thrown: usize,
    pub undos: usize,
    pub rejected: usize,
    pub checkouts: u32,
    pub busts: u32,
    pub legs_won: u32,
    /// Invariant breaches observed while the session ran.
    pub violations: Vec<String>,
    pub final_view: EngineView,
}

impl SimulationSummary {
    pub const fn average(&self) -> f64 {
        self.final_view.stats.average
    }
}

/// Headless deterministic runner for the scoring engine.
#[derive(Debug, Clone, Copy)]
pub struct GameTester {
    verbose: bool,
}

impl GameTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_plan(&self, plan: &SimulationPlan, seed: u64) -> Result<SimulationSummary> {
        let thrower = Thrower::new(plan.strategy, plan.skill_px)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine = DartEngine::new(plan.config.clone().with_mode(plan.mode));
        let mut run = RunState::default();
        let mut now_ms = 0_u64;

        if self.verbose {
            println!(
                "🎯 Starting simulation | seed:{seed} mode:{} strategy:{} skill:{}",
                plan.mode.label(),
                thrower.strategy().label(),
                plan.skill_px
            );
        }

        while run.darts < plan.max_darts {
            now_ms += DART_INTERVAL_MS;
            let fired = engine.advance(now_ms);
            run.check_fired(&engine, &fired);

            if engine.projection().leg.as_ref().is_some_and(|leg| leg.show_new_leg) {
                let outcome = engine.apply(Command::ConfirmNewLeg, now_ms);
                run.record(&engine, &outcome, self.verbose);
                continue;
            }
            if engine.is_paused() {
                let Some(deadline) = engine.next_deadline() else {
                    run.violations
                        .push("engine paused with no timer pending".to_string());
                    break;
                };
                now_ms = now_ms.max(deadline);
                continue;
            }

            let command = if !engine.log().is_empty() && rng.gen_bool(plan.undo_rate) {
                Command::UndoLast
            } else if rng.gen_bool(plan.bounce_rate) {
                Command::BounceOut
            } else {
                let remaining = engine.projection().leg.as_ref().map(|leg| leg.remaining);
                Command::Throw(thrower.release(remaining, &mut rng))
            };
            let outcome = engine.apply(command, now_ms);
            run.record(&engine, &outcome, self.verbose);
        }

        settle(&mut engine, &mut run);

        Ok(SimulationSummary {
            seed,
            mode: plan.mode,
            strategy: plan.strategy,
            darts_thrown: run.darts,
            undos: run.undos,
            rejected: run.rejected,
            checkouts: run.checkouts,
            busts: run.busts,
            legs_won: engine.session().map_or(0, |s| s.legs_won()),
            violations: run.violations,
            final_view: engine.view(),
        })
    }
}

#[derive(Debug, Default)]
struct RunState {
    darts: usize,
    undos: usize,
    rejected: usize,
    checkouts: u32,
    busts: u32,
    violations: Vec<String>,
}

impl RunState {
    fn record(&mut self, engine: &DartEngine, outcome: &CommandOutcome, verbose: bool) {
        match outcome {
            CommandOutcome::Thrown { record, leg } => {
                self.darts += 1;
                match leg {
                    Some(LegOutcome::Checkout) => {
                        self.checkouts += 1;
                        if verbose {
                            println!("🏁 Checkout on {} after {} darts", record.label(), self.darts);
                        }
                    }
                    Some(LegOutcome::Bust(reason)) => {
                        self.busts += 1;
                        if verbose {
                            println!("💥 Bust ({reason:?}) on {}", record.label());
                        }
                    }
                    _ => {}
                }
            }
            CommandOutcome::Undone(Some(_)) => self.undos += 1,
            CommandOutcome::Rejected(reason) => {
                self.rejected += 1;
                self.violations
                    .push(format!("unexpected rejection: {reason:?}"));
            }
            _ => {}
        }
        self.check_invariants(engine);
    }

    fn check_fired(&mut self, engine: &DartEngine, fired: &[PendingEffect]) {
        if fired.contains(&PendingEffect::ResolveBust) && engine.log().len() % VISIT_SIZE != 0 {
            self.violations.push(format!(
                "bust cleanup left a partial visit ({} throws)",
                engine.log().len()
            ));
        }
        if !fired.is_empty() {
            self.check_invariants(engine);
        }
    }

    fn check_invariants(&mut self, engine: &DartEngine) {
        let stats = engine.projection();
        if *stats != StatsProjection::compute(engine.log(), engine.session()) {
            self.violations
                .push("cached projection differs from a fresh recompute".to_string());
        }
        if stats.total_throws != engine.log().len() {
            self.violations.push(format!(
                "total_throws {} != log length {}",
                stats.total_throws,
                engine.log().len()
            ));
        }
        if let Some(visit) = visits(engine.log().as_slice()).find(|v| v.total() > TIER_MAX) {
            self.violations.push(format!(
                "visit {} scored {} (> {TIER_MAX})",
                visit.index,
                visit.total()
            ));
        }
        if let Some(leg) = stats.leg.as_ref()
            && leg.phase == GamePhase::Active
            && leg.remaining <= UNFINISHABLE_REMAINDER
        {
            self.violations
                .push(format!("active leg stands on {}", leg.remaining));
        }
    }
}

/// Fire every outstanding timer so the final view is at rest.
fn settle(engine: &mut DartEngine, run: &mut RunState) {
    while let Some(deadline) = engine.next_deadline() {
        let fired = engine.advance(deadline);
        run.check_fired(engine, &fired);
    }
}
