//! Throw records and scoreboard labels.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{BULL_LABEL, NOT_THROWN_LABEL, OUTER_BULL_SCORE, SECTOR_NUMBERS};
use crate::geometry::{Point, classify};

/// Scoreboard text for a throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ScoreLabel {
    Single(u8),
    Double(u8),
    Triple(u8),
    OuterBull,
    Bull,
    /// Outside the board or bounced out.
    Miss,
    /// Placeholder padding an interrupted visit.
    NotThrown,
}

impl ScoreLabel {
    /// Whether a dart with this label may finish a leg.
    #[must_use]
    pub const fn is_finishing_double(self) -> bool {
        matches!(self, Self::Double(_) | Self::Bull)
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "D{n}"),
            Self::Triple(n) => write!(f, "T{n}"),
            Self::OuterBull => write!(f, "{OUTER_BULL_SCORE}"),
            Self::Bull => f.write_str(BULL_LABEL),
            Self::Miss => f.write_str("0"),
            Self::NotThrown => f.write_str(NOT_THROWN_LABEL),
        }
    }
}

impl From<ScoreLabel> for String {
    fn from(label: ScoreLabel) -> Self {
        label.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized score label '{0}'")]
pub struct LabelParseError(pub String);

impl FromStr for ScoreLabel {
    type Err = LabelParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let sector = |digits: &str| {
            digits
                .parse::<u8>()
                .ok()
                .filter(|n| SECTOR_NUMBERS.contains(n))
                .ok_or_else(|| LabelParseError(text.to_string()))
        };
        match text {
            BULL_LABEL => Ok(Self::Bull),
            NOT_THROWN_LABEL => Ok(Self::NotThrown),
            "0" => Ok(Self::Miss),
            "25" => Ok(Self::OuterBull),
            _ => {
                if let Some(rest) = text.strip_prefix('D') {
                    sector(rest).map(Self::Double)
                } else if let Some(rest) = text.strip_prefix('T') {
                    sector(rest).map(Self::Triple)
                } else {
                    sector(text).map(Self::Single)
                }
            }
        }
    }
}

impl TryFrom<String> for ScoreLabel {
    type Error = LabelParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

/// How a throw entered the log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThrowKind {
    Normal { position: Point },
    BounceOut,
    NotThrown,
}

/// A single entry of the throw log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowRecord {
    #[serde(flatten)]
    kind: ThrowKind,
    raw_score: Option<u32>,
    final_score: u32,
    label: ScoreLabel,
}

impl ThrowRecord {
    /// Hit-test a board-local point and record the resulting dart.
    #[must_use]
    pub fn from_point(position: Point) -> Self {
        let hit = classify(position);
        Self {
            kind: ThrowKind::Normal { position },
            raw_score: Some(hit.raw_score),
            final_score: hit.final_score,
            label: hit.label,
        }
    }

    #[must_use]
    pub const fn bounce_out() -> Self {
        Self {
            kind: ThrowKind::BounceOut,
            raw_score: Some(0),
            final_score: 0,
            label: ScoreLabel::Miss,
        }
    }

    #[must_use]
    pub const fn not_thrown() -> Self {
        Self {
            kind: ThrowKind::NotThrown,
            raw_score: None,
            final_score: 0,
            label: ScoreLabel::NotThrown,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ThrowKind {
        self.kind
    }

    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self.kind {
            ThrowKind::Normal { position } => Some(position),
            ThrowKind::BounceOut | ThrowKind::NotThrown => None,
        }
    }

    #[must_use]
    pub const fn raw_score(&self) -> Option<u32> {
        self.raw_score
    }

    #[must_use]
    pub const fn final_score(&self) -> u32 {
        self.final_score
    }

    #[must_use]
    pub const fn label(&self) -> ScoreLabel {
        self.label
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.kind, ThrowKind::NotThrown)
    }

    /// Cancel the score of a busted dart. The label is kept for the scoreboard.
    pub(crate) fn zero_score(&mut self) {
        self.final_score = 0;
    }
}
