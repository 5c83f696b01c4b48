//! Centralized board geometry and game tuning constants.
//!
//! The radii and the sector order define the scoring contract of the board:
//! changing any of them changes which score a click produces, so they live
//! in code rather than in external configuration.

use std::f64::consts::PI;

// Board geometry -----------------------------------------------------------
pub const BULL_RADIUS: f64 = 6.35;
pub const OUTER_BULL_RADIUS: f64 = 16.0;
pub const TRIPLE_INNER_RADIUS: f64 = 99.0;
pub const TRIPLE_OUTER_RADIUS: f64 = 107.0;
pub const DOUBLE_INNER_RADIUS: f64 = 162.0;
pub const DOUBLE_OUTER_RADIUS: f64 = 170.0;

/// Sector numbers clockwise from 12 o'clock.
pub const SECTOR_NUMBERS: [u8; SECTOR_COUNT] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];
pub const SECTOR_COUNT: usize = 20;
pub const SECTOR_WIDTH: f64 = PI / 10.0;
/// Offset that moves the wire between sectors 5 and 20 onto angle zero.
pub const SECTOR_OFFSET: f64 = 11.0 * PI / 20.0;

pub const BULL_SCORE: u32 = 50;
pub const OUTER_BULL_SCORE: u32 = 25;
pub const DOUBLE_MULTIPLIER: u32 = 2;
pub const TRIPLE_MULTIPLIER: u32 = 3;

// Rendering surface --------------------------------------------------------
pub const CANVAS_SIZE: f64 = 500.0;
pub const CANVAS_CENTER: f64 = CANVAS_SIZE / 2.0;
pub const NUMBER_RING_RADIUS: f64 = 200.0;
pub const SURROUND_RADIUS: f64 = 225.5;
pub const SPOKE_OUTER_RADIUS: f64 = 180.0;

// Visits and tiers ---------------------------------------------------------
pub const VISIT_SIZE: usize = 3;
pub const TIER_MAX: u32 = 180;
pub const TIER_171_MIN: u32 = 171;
pub const TIER_131_MIN: u32 = 131;
pub const TIER_91_MIN: u32 = 91;

// 501 game ------------------------------------------------------------------
pub const STARTING_SCORE: u32 = 501;
/// Remaining score that can never be finished on a double.
pub const UNFINISHABLE_REMAINDER: i64 = 1;
pub const CHECKOUT_REVEAL_MS: u64 = 1_000;
pub const BUST_CLEANUP_MS: u64 = 2_500;

// Display -------------------------------------------------------------------
pub const EMPTY_SLOT_LABEL: &str = ".";
pub const NOT_THROWN_LABEL: &str = "-";
pub const BULL_LABEL: &str = "BULL";
