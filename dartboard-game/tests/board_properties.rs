use dartboard_game::constants::{
    BULL_RADIUS, DOUBLE_OUTER_RADIUS, OUTER_BULL_RADIUS, SECTOR_COUNT, SECTOR_NUMBERS,
};
use dartboard_game::{Command, DartEngine, Point, Ring, ScoreLabel, classify};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

const SAMPLE_SIZE: usize = 5_000;

fn random_point(rng: &mut ChaCha8Rng, min_radius: f64, max_radius: f64) -> Point {
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(min_radius..max_radius);
    Point::polar(angle, radius)
}

#[test]
fn everything_outside_the_double_wire_misses() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0DA7_5170);
    for _ in 0..SAMPLE_SIZE {
        let point = random_point(&mut rng, DOUBLE_OUTER_RADIUS + 1e-9, 400.0);
        let hit = classify(point);
        assert_eq!(hit.ring, Ring::Miss, "{point:?}");
        assert_eq!(hit.final_score, 0);
        assert_eq!(hit.label, ScoreLabel::Miss);
    }
}

#[test]
fn bull_rings_ignore_sectors() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB011);
    for _ in 0..SAMPLE_SIZE {
        let inner = classify(random_point(&mut rng, 0.0, BULL_RADIUS));
        assert_eq!(inner.final_score, 50);
        assert_eq!(inner.label.to_string(), "BULL");

        let outer = classify(random_point(&mut rng, BULL_RADIUS, OUTER_BULL_RADIUS));
        assert_eq!(outer.final_score, 25);
        assert_eq!(outer.label.to_string(), "25");
    }
}

#[test]
fn scores_stay_within_dart_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5C0E);
    for _ in 0..SAMPLE_SIZE {
        let hit = classify(random_point(&mut rng, 0.0, 250.0));
        assert!(hit.final_score <= 60);
        assert!(hit.sector_index < SECTOR_COUNT);
        assert!(matches!(hit.raw_score, 0..=20 | 25 | 50));
        if let ScoreLabel::Single(n) | ScoreLabel::Double(n) | ScoreLabel::Triple(n) = hit.label {
            assert_eq!(n, SECTOR_NUMBERS[hit.sector_index]);
            assert_eq!(hit.final_score, hit.raw_score * hit.ring.multiplier());
        }
    }
}

#[test]
fn sector_centers_cycle_through_the_board() {
    for index in 0..SECTOR_COUNT * 2 {
        let hit = classify(Point::in_sector(index, 50.0));
        assert_eq!(hit.raw_score, u32::from(SECTOR_NUMBERS[index % SECTOR_COUNT]));
    }
    assert_eq!(classify(Point::in_sector(0, 50.0)).raw_score, 20);
    assert_eq!(classify(Point::in_sector(1, 50.0)).raw_score, 1);
    assert_eq!(classify(Point::in_sector(19, 50.0)).raw_score, 5);
}

#[test]
fn append_then_undo_restores_everything() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0DD);
    let mut engine = DartEngine::practice();
    for _ in 0..50 {
        engine.apply(Command::Throw(random_point(&mut rng, 0.0, 200.0)), 0);
        let before = engine.view();
        engine.apply(Command::Throw(random_point(&mut rng, 0.0, 200.0)), 0);
        engine.apply(Command::UndoLast, 0);
        assert_eq!(engine.view(), before);

        engine.apply(Command::BounceOut, 0);
        engine.apply(Command::UndoLast, 0);
        assert_eq!(engine.view(), before);
    }
}

#[test]
fn append_then_undo_restores_the_leg() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x1E6);
    let mut engine = DartEngine::game();
    // Six kept darts score at most 360, so no dart here can finish or bust the leg.
    for _ in 0..6 {
        engine.apply(Command::Throw(random_point(&mut rng, 0.0, 200.0)), 0);
        let before = engine.view();
        let leg_before = before.stats.leg.clone().unwrap();

        let outcome = engine.apply(Command::Throw(random_point(&mut rng, 0.0, 200.0)), 0);
        assert!(!outcome.is_rejected());
        assert!(!engine.is_paused());
        engine.apply(Command::UndoLast, 0);

        let leg_after = engine.projection().leg.clone().unwrap();
        assert_eq!(leg_after.remaining, leg_before.remaining);
        assert_eq!(leg_after.darts, leg_before.darts);
        assert_eq!(leg_after.average_display, leg_before.average_display);
        assert_eq!(leg_after.average.to_bits(), leg_before.average.to_bits());
        assert_eq!(engine.view(), before);

        engine.apply(Command::BounceOut, 0);
        engine.apply(Command::UndoLast, 0);
        assert_eq!(engine.view(), before);
    }
}

#[test]
fn projection_is_stable_without_mutation() {
    let mut engine = DartEngine::game();
    engine.apply(Command::Throw(Point::in_sector(0, 103.0)), 0);
    engine.apply(Command::BounceOut, 0);
    let first = engine.view();
    assert!(engine.advance(0).is_empty());
    assert_eq!(engine.view(), first);
    assert_eq!(engine.view(), engine.view());
}
