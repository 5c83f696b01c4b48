use anyhow::{Result, ensure};
use dartboard_game::{EngineConfig, Mode};

use super::TestScenario;
use crate::logic::{AimStrategy, SimulationPlan, SimulationSummary};

const CATALOG: &[(&str, &str)] = &[
    ("smoke", "Practice mode, random darts across the whole board"),
    ("maximums", "Practice mode, perfect treble 20s every visit"),
    ("game-checkout", "501 with a realistic checkout routine"),
    ("bust-recovery", "161 with treble 20s only, so every visit busts on its third dart"),
    ("undo-and-bounce", "501 with random undos and bounce-outs mixed in"),
    ("leg-cycle", "Perfect checkout play through many legs"),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Resolve a catalog key to a runnable scenario built on `base` config.
pub fn get_scenario(name: &str, base: &EngineConfig) -> Option<TestScenario> {
    let (key, description) = CATALOG.iter().find(|(key, _)| *key == name)?;
    let plan = match *key {
        "smoke" => SimulationPlan::new(Mode::Practice, AimStrategy::Scatter)
            .with_max_darts(60)
            .with_expectation(all_darts_logged),
        "maximums" => SimulationPlan::new(Mode::Practice, AimStrategy::Treble20)
            .with_skill(0.0)
            .with_max_darts(30)
            .with_expectation(every_visit_is_a_maximum),
        "game-checkout" => SimulationPlan::new(Mode::Game, AimStrategy::Checkout)
            .with_skill(3.0)
            .with_max_darts(900)
            .with_expectation(wins_a_leg),
        "bust-recovery" => SimulationPlan::new(Mode::Game, AimStrategy::Treble20)
            .with_skill(0.0)
            .with_max_darts(30)
            .with_config(EngineConfig {
                starting_score: 161,
                ..base.clone()
            })
            .with_expectation(busts_never_finish),
        "undo-and-bounce" => SimulationPlan::new(Mode::Game, AimStrategy::Checkout)
            .with_skill(6.0)
            .with_undo_rate(0.15)
            .with_bounce_rate(0.1)
            .with_max_darts(300)
            .with_expectation(all_darts_logged),
        "leg-cycle" => SimulationPlan::new(Mode::Game, AimStrategy::Checkout)
            .with_skill(0.0)
            .with_max_darts(100)
            .with_expectation(ten_dart_legs),
        _ => return None,
    };
    let plan = if *key == "bust-recovery" {
        plan
    } else {
        plan.with_config(base.clone())
    };
    log::debug!("resolved scenario {key}: {description}");
    Some(TestScenario::simulation(*key, plan))
}

fn all_darts_logged(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.rejected == 0, "{} commands rejected", summary.rejected);
    let logged = summary.final_view.stats.total_throws;
    if summary.mode == Mode::Practice {
        ensure!(
            logged == summary.darts_thrown - summary.undos,
            "log holds {logged} throws after {} darts and {} undos",
            summary.darts_thrown,
            summary.undos
        );
    }
    Ok(())
}

fn every_visit_is_a_maximum(summary: &SimulationSummary) -> Result<()> {
    let stats = &summary.final_view.stats;
    ensure!(
        usize::try_from(stats.tiers.s180).ok() == Some(stats.visit_count),
        "{} maximums over {} visits",
        stats.tiers.s180,
        stats.visit_count
    );
    ensure!(
        stats.average_display == "180.00",
        "average {}",
        stats.average_display
    );
    Ok(())
}

fn wins_a_leg(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.checkouts >= 1, "no checkout in {} darts", summary.darts_thrown);
    Ok(())
}

fn busts_never_finish(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        usize::try_from(summary.busts).ok() == Some(summary.darts_thrown / 3),
        "{} busts in {} darts",
        summary.busts,
        summary.darts_thrown
    );
    ensure!(summary.checkouts == 0, "treble 20s cannot check out 41");
    ensure!(
        summary.final_view.throws.len() % 3 == 0,
        "log ends mid-visit after bust cleanup"
    );
    let remaining = summary.final_view.stats.leg.as_ref().map(|leg| leg.remaining);
    ensure!(remaining == Some(161), "remaining {remaining:?}, expected 161");
    Ok(())
}

fn ten_dart_legs(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.busts == 0, "perfect play busted {} times", summary.busts);
    ensure!(
        usize::try_from(summary.checkouts).ok() == Some(summary.darts_thrown / 10),
        "{} checkouts in {} darts",
        summary.checkouts,
        summary.darts_thrown
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_resolves() {
        for (key, _) in list_scenarios() {
            assert!(get_scenario(key, &EngineConfig::default()).is_some(), "{key}");
        }
        assert!(get_scenario("nope", &EngineConfig::default()).is_none());
    }

    #[test]
    fn base_config_reaches_the_plan() {
        let base = EngineConfig {
            starting_score: 301,
            ..EngineConfig::default()
        };
        let scenario = get_scenario("game-checkout", &base).unwrap();
        assert_eq!(scenario.plan.config.starting_score, 301);
        let pinned = get_scenario("bust-recovery", &base).unwrap();
        assert_eq!(pinned.plan.config.starting_score, 161);
    }
}
