use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DrawtickError;

/// Prize tiers, lowest first so that `Ord` follows match quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub enum PrizeTier {
    NoPrize,
    Group7,
    Group6,
    Group5,
    Group4,
    Group3,
    Group2,
    Group1,
}

impl PrizeTier {
    /// Every tier that pays out, highest first.
    pub const WINNING: [PrizeTier; 7] = [
        PrizeTier::Group1,
        PrizeTier::Group2,
        PrizeTier::Group3,
        PrizeTier::Group4,
        PrizeTier::Group5,
        PrizeTier::Group6,
        PrizeTier::Group7,
    ];

    pub fn value(self) -> f64 {
        match self {
            PrizeTier::Group1 => 1.0,
            PrizeTier::Group2 => 0.85,
            PrizeTier::Group3 => 0.7,
            PrizeTier::Group4 => 0.55,
            PrizeTier::Group5 => 0.4,
            PrizeTier::Group6 => 0.25,
            PrizeTier::Group7 => 0.1,
            PrizeTier::NoPrize => 0.0,
        }
    }

    /// Prize paid for a single winning ticket in this tier.
    /// Groups 1-4 are estimated averages, Groups 5-7 are fixed.
    pub fn prize_amount(self) -> u64 {
        match self {
            PrizeTier::Group1 => 1_000_000,
            PrizeTier::Group2 => 100_000,
            PrizeTier::Group3 => 50_000,
            PrizeTier::Group4 => 2_000,
            PrizeTier::Group5 => 50,
            PrizeTier::Group6 => 25,
            PrizeTier::Group7 => 10,
            PrizeTier::NoPrize => 0,
        }
    }

    pub fn is_jackpot(self) -> bool {
        self == PrizeTier::Group1
    }

    pub fn is_winning(self) -> bool {
        self != PrizeTier::NoPrize
    }

    /// Stable name used for the per-score counter key.
    pub fn key(self) -> &'static str {
        match self {
            PrizeTier::Group1 => "group1",
            PrizeTier::Group2 => "group2",
            PrizeTier::Group3 => "group3",
            PrizeTier::Group4 => "group4",
            PrizeTier::Group5 => "group5",
            PrizeTier::Group6 => "group6",
            PrizeTier::Group7 => "group7",
            PrizeTier::NoPrize => "none",
        }
    }
}

impl From<PrizeTier> for f64 {
    fn from(tier: PrizeTier) -> Self {
        tier.value()
    }
}

impl TryFrom<f64> for PrizeTier {
    type Error = DrawtickError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        std::iter::once(PrizeTier::NoPrize)
            .chain(PrizeTier::WINNING)
            .find(|tier| (tier.value() - value).abs() < 1e-9)
            .ok_or_else(|| DrawtickError::validation(format!("Unknown score: {}", value)))
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A draw ready to be committed; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDraw {
    pub lottery_type: String,
    pub draw: serde_json::Value,
    pub guesses: Vec<serde_json::Value>,
    pub score: PrizeTier,
}

/// A committed draw as it sits in the store. `draw` and `guesses` are
/// opaque here; the owning lottery validates their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDraw {
    pub id: i64,
    pub lottery_type: String,
    pub draw: serde_json::Value,
    pub guesses: Vec<serde_json::Value>,
    pub score: PrizeTier,
    pub timestamp: DateTime<Utc>,
}
