//! Dartboard Scoring Engine
//!
//! Platform-agnostic core logic for the dartboard tracker: hit-testing clicks
//! into dart scores, the throw log, visit statistics and the 501 leg state
//! machine. This crate has no UI or platform-specific dependencies.

pub mod config;
pub mod constants;
pub mod engine;
pub mod geometry;
pub mod numbers;
pub mod session;
pub mod stats;
pub mod throw;
pub mod throw_log;
pub mod visits;

// Re-export commonly used types
pub use config::{ConfigError, EngineConfig, Mode, TimerPolicy};
pub use engine::{Command, CommandOutcome, DartEngine, EngineView, RejectReason};
pub use geometry::{Classification, Point, Ring, classify, sector_index, sector_number};
pub use session::{
    BustReason, GamePhase, GameSession, LegOutcome, Overlay, PendingEffect, ScheduledEffect,
};
pub use stats::{CurrentVisit, LegStats, Marker, StatsProjection, format_average};
pub use throw::{LabelParseError, ScoreLabel, ThrowKind, ThrowRecord};
pub use throw_log::ThrowLog;
pub use visits::{NotableThrows, TierCounts, Visit, VisitAggregate, VisitTier, visits};
