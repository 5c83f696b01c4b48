use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::game_tester::{GameTester, SimulationPlan, SimulationSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    /// Mean three-dart average across iterations.
    pub mean_average: f64,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    tester: GameTester,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self {
            tester: GameTester::new(verbose),
            verbose,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (mode: {} seed: {})",
                    scenario.name.bright_white(),
                    scenario.plan.mode.label(),
                    seed
                );
            }

            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();
        let mut averages = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));

            let failure = match self.tester.run_plan(&scenario.plan, iteration_seed) {
                Ok(summary) => {
                    averages.push(summary.average());
                    evaluate_expectations(&scenario.plan, &summary)
                        .map(|err| describe_failure(i, &summary, &err))
                }
                Err(err) => Some(format!("Iteration {}: {err:#}", i + 1)),
            };

            if let Some(message) = failure {
                if self.verbose {
                    println!(
                        "  ❌ Iteration {}/{} failed: {}",
                        i + 1,
                        iterations,
                        message.clone().red()
                    );
                }
                failures.push(message);
            } else {
                successes += 1;
                let duration = start_time.elapsed();
                performance_data.push(duration);
                if self.verbose {
                    println!("  ✅ Iteration {}/{} passed ({duration:?})", i + 1, iterations);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };
        let mean_average = if averages.is_empty() {
            0.0
        } else {
            averages.iter().sum::<f64>() / dartboard_game::numbers::count_to_f64(averages.len())
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            mean_average,
            average_duration,
            performance_data,
        }
    }
}

fn evaluate_expectations(plan: &SimulationPlan, summary: &SimulationSummary) -> Option<String> {
    if let Some(violation) = summary.violations.first() {
        return Some(format!(
            "{violation} (+{} more)",
            summary.violations.len() - 1
        ));
    }
    plan.expectations
        .iter()
        .find_map(|expectation| expectation.evaluate(summary).err())
        .map(|err| err.to_string())
}

fn describe_failure(iteration: usize, summary: &SimulationSummary, err: &str) -> String {
    format!(
        "Iteration {} (mode {}, strategy {}, seed {}, darts {}, checkouts {}, busts {}, average {}): {}",
        iteration + 1,
        summary.mode.label(),
        summary.strategy.label(),
        summary.seed,
        summary.darts_thrown,
        summary.checkouts,
        summary.busts,
        summary.final_view.stats.average_display,
        err
    )
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::AimStrategy;
    use dartboard_game::Mode;

    fn scenario(plan: SimulationPlan) -> TestScenario {
        TestScenario::simulation("Unit", plan)
    }

    fn never_satisfied(_: &SimulationSummary) -> anyhow::Result<()> {
        anyhow::bail!("never satisfied")
    }

    #[test]
    fn failing_expectation_marks_the_result() {
        let plan = SimulationPlan::new(Mode::Practice, AimStrategy::Scatter)
            .with_max_darts(3)
            .with_expectation(never_satisfied);
        let results = LogicTester::new(false).run_scenario(&scenario(plan), &[1, 2], 2);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.passed));
        assert!(results[0].failures[0].contains("never satisfied"));
    }

    #[test]
    fn results_serialize_durations_as_millis() {
        let plan = SimulationPlan::new(Mode::Practice, AimStrategy::Treble20).with_max_darts(3);
        let results = LogicTester::new(false).run_scenario(&scenario(plan), &[7], 1);
        let json = serde_json::to_value(&results[0]).unwrap();
        assert!(json["average_duration"].is_u64());
        assert_eq!(json["seed"], 7);
        assert_eq!(json["passed"], true);
    }
}
