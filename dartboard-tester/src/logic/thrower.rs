//! Simulated dart player: picks a target for the current score and scatters
//! the release around it with Gaussian noise.
use anyhow::{Result, anyhow};
use dartboard_game::Point;
use dartboard_game::constants::{DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS, SECTOR_NUMBERS};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

const TREBLE_AIM_RADIUS: f64 = 103.0;
const SINGLE_AIM_RADIUS: f64 = 60.0;
const SCATTER_MAX_RADIUS: f64 = 180.0;
const HIGHEST_DOUBLE_FINISH: i64 = 40;
const BULL_FINISH: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimStrategy {
    /// Every dart at treble 20.
    Treble20,
    /// Score on treble 20, then set up and take out a double.
    Checkout,
    /// Uniform spray across the board, misses included.
    Scatter,
}

impl AimStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Treble20 => "treble-20",
            Self::Checkout => "checkout",
            Self::Scatter => "scatter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Thrower {
    strategy: AimStrategy,
    scatter: Normal<f64>,
}

impl Thrower {
    /// `skill_px` is the standard deviation of the release error in board units.
    pub fn new(strategy: AimStrategy, skill_px: f64) -> Result<Self> {
        let scatter = Normal::new(0.0, skill_px)
            .map_err(|err| anyhow!("invalid thrower skill {skill_px}: {err}"))?;
        Ok(Self { strategy, scatter })
    }

    pub const fn strategy(&self) -> AimStrategy {
        self.strategy
    }

    /// Board point where the dart lands, given the leg's remaining score.
    pub fn release<R: Rng + ?Sized>(&self, remaining: Option<i64>, rng: &mut R) -> Point {
        let aim = match self.strategy {
            AimStrategy::Treble20 => treble(20),
            AimStrategy::Checkout => remaining.map_or_else(|| treble(20), checkout_target),
            AimStrategy::Scatter => {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                let radius = rng.gen_range(0.0..SCATTER_MAX_RADIUS);
                Point::polar(angle, radius)
            }
        };
        Point::new(
            aim.x + self.scatter.sample(rng),
            aim.y + self.scatter.sample(rng),
        )
    }
}

/// Target for a simple finishing routine on `remaining`.
pub fn checkout_target(remaining: i64) -> Point {
    if remaining == BULL_FINISH {
        return Point::new(0.0, 0.0);
    }
    if remaining > 60 {
        return treble(20);
    }
    if remaining <= HIGHEST_DOUBLE_FINISH && remaining % 2 == 0 {
        return double(remaining / 2);
    }
    // Leave an even double: 40 from above, anything even from below.
    let setup = if remaining > HIGHEST_DOUBLE_FINISH {
        remaining - HIGHEST_DOUBLE_FINISH
    } else {
        1
    };
    single(setup)
}

fn sector_of(number: i64) -> usize {
    SECTOR_NUMBERS
        .iter()
        .position(|&n| i64::from(n) == number)
        .unwrap_or(0)
}

fn treble(number: i64) -> Point {
    Point::in_sector(sector_of(number), TREBLE_AIM_RADIUS)
}

fn double(number: i64) -> Point {
    let mid = f64::midpoint(DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS);
    Point::in_sector(sector_of(number), mid)
}

fn single(number: i64) -> Point {
    Point::in_sector(sector_of(number), SINGLE_AIM_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dartboard_game::{ScoreLabel, classify};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn checkout_targets_follow_the_routine() {
        assert_eq!(classify(checkout_target(501)).label, ScoreLabel::Triple(20));
        assert_eq!(classify(checkout_target(40)).label, ScoreLabel::Double(20));
        assert_eq!(classify(checkout_target(32)).label, ScoreLabel::Double(16));
        assert_eq!(classify(checkout_target(50)).label, ScoreLabel::Bull);
        assert_eq!(classify(checkout_target(21)).label, ScoreLabel::Single(1));
        assert_eq!(classify(checkout_target(57)).label, ScoreLabel::Single(17));
        assert_eq!(classify(checkout_target(2)).label, ScoreLabel::Double(1));
    }

    #[test]
    fn perfect_thrower_hits_the_aim_point() {
        let thrower = Thrower::new(AimStrategy::Treble20, 0.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            let hit = classify(thrower.release(None, &mut rng));
            assert_eq!(hit.final_score, 60);
        }
    }

    #[test]
    fn negative_skill_is_rejected() {
        assert!(Thrower::new(AimStrategy::Scatter, -1.0).is_err());
    }
}
