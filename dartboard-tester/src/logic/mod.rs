pub mod game_tester;
pub mod reports;
pub mod tester;
pub mod thrower;

pub use game_tester::{GameTester, SimulationPlan, SimulationSummary};
pub use tester::{LogicTester, ScenarioResult};
pub use thrower::AimStrategy;
