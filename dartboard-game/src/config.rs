//! Engine configuration loaded from JSON with per-field defaults.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{BUST_CLEANUP_MS, CHECKOUT_REVEAL_MS, STARTING_SCORE};

/// What happens to a pending overlay effect when the log changes before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPolicy {
    /// Drop pending effects on undo, reset, new leg and mode switches.
    #[default]
    CancelOnMutation,
    /// Let pending effects fire against whatever the log holds at that time.
    Preserve,
}

/// Which scoring mode the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Free throwing with running statistics.
    #[default]
    Practice,
    /// 501 count-down with bust and checkout detection.
    Game,
}

impl Mode {
    #[must_use]
    pub const fn is_game(self) -> bool {
        matches!(self, Self::Game)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Practice => "practice",
            Self::Game => "501",
        }
    }
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("starting score must be at least {min} (got {value})")]
    StartingScoreTooLow { min: u32, value: u32 },
    #[error("bust cleanup ({cleanup_ms} ms) must not precede the overlay ({reveal_ms} ms)")]
    CleanupBeforeReveal { reveal_ms: u64, cleanup_ms: u64 },
    #[error("invalid engine config JSON: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "EngineConfig::default_starting_score")]
    pub starting_score: u32,
    /// Delay between the deciding throw and the checkout/bust overlay.
    #[serde(default = "EngineConfig::default_checkout_reveal_ms")]
    pub checkout_reveal_ms: u64,
    /// Delay between a bust and the cleanup of the busted visit.
    #[serde(default = "EngineConfig::default_bust_cleanup_ms")]
    pub bust_cleanup_ms: u64,
    #[serde(default)]
    pub timer_policy: TimerPolicy,
    #[serde(default)]
    pub default_mode: Mode,
}

impl EngineConfig {
    /// Smallest starting score that still needs a double to finish.
    pub const MIN_STARTING_SCORE: u32 = 2;

    const fn default_starting_score() -> u32 {
        STARTING_SCORE
    }

    const fn default_checkout_reveal_ms() -> u64 {
        CHECKOUT_REVEAL_MS
    }

    const fn default_bust_cleanup_ms() -> u64 {
        BUST_CLEANUP_MS
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or violates an invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_score < Self::MIN_STARTING_SCORE {
            return Err(ConfigError::StartingScoreTooLow {
                min: Self::MIN_STARTING_SCORE,
                value: self.starting_score,
            });
        }
        if self.bust_cleanup_ms < self.checkout_reveal_ms {
            return Err(ConfigError::CleanupBeforeReveal {
                reveal_ms: self.checkout_reveal_ms,
                cleanup_ms: self.bust_cleanup_ms,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_timer_policy(mut self, policy: TimerPolicy) -> Self {
        self.timer_policy = policy;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_score: Self::default_starting_score(),
            checkout_reveal_ms: Self::default_checkout_reveal_ms(),
            bust_cleanup_ms: Self::default_bust_cleanup_ms(),
            timer_policy: TimerPolicy::default(),
            default_mode: Mode::default(),
        }
    }
}
