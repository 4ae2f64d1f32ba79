//! Shared types for FORESEE.
//!
//! Value objects passed between the calculator, the tier classifier and
//! their callers. Everything here is computed fresh per call and never
//! persisted by the core.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Forecast input
// ---------------------------------------------------------------------------

/// Everything the reward calculator needs to know about a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastContext {
    /// User's stated probability of YES (expected 1–99).
    pub user_probability: f64,
    /// Current crowd consensus probability (expected 0–100).
    pub crowd_probability: f64,
    /// Consecutive qualifying participation days.
    pub streak: i64,
    /// Submitted inside the early window after event creation.
    #[serde(default)]
    pub is_early: bool,
}

impl ForecastContext {
    pub fn new(user_probability: f64, crowd_probability: f64, streak: i64) -> Self {
        Self {
            user_probability,
            crowd_probability,
            streak,
            is_early: false,
        }
    }

    /// Same context, with the early-window flag set.
    pub fn early(mut self, is_early: bool) -> Self {
        self.is_early = is_early;
        self
    }

    /// Absolute distance between the user and the crowd, in points.
    pub fn crowd_distance(&self) -> f64 {
        (self.user_probability - self.crowd_probability).abs()
    }
}

impl fmt::Display for ForecastContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user={}% crowd={}% streak={}{}",
            self.user_probability,
            self.crowd_probability,
            self.streak,
            if self.is_early { " (early)" } else { "" },
        )
    }
}

// ---------------------------------------------------------------------------
// Reward output
// ---------------------------------------------------------------------------

/// Per-factor multipliers, each rounded to two decimal places.
///
/// Only the factors used by the chosen formula are present. Realized
/// results also carry the base reward the multipliers apply to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrarian: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<Decimal>,
}

impl Breakdown {
    /// Present factors as `(name, multiplier)` pairs, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, Decimal)> {
        [
            ("accuracy", self.accuracy),
            ("confidence", self.confidence),
            ("contrarian", self.contrarian),
            ("early", self.early),
            ("streak", self.streak),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// Look up a factor by name.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .base
            .map(|base| format!("base={base}"))
            .into_iter()
            .chain(
                self.entries()
                    .into_iter()
                    .map(|(name, value)| format!("{name}×{value}")),
            )
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// Score delta produced by the reward calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardResult {
    /// Projected or realized score gain.
    pub total: i64,
    /// Projected loss if the forecast turns out wrong.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss: Option<i64>,
    pub breakdown: Breakdown,
}

impl fmt::Display for RewardResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.total)?;
        if let Some(loss) = self.loss {
            write!(f, " / -{loss}")?;
        }
        write!(f, " [{}]", self.breakdown)
    }
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// A named reputation bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    /// Inclusive lower bound on the score.
    pub min: i64,
    /// Display colour token.
    pub color: String,
    pub badge: String,
}

impl Tier {
    pub fn new(name: &str, min: i64, color: &str, badge: &str) -> Self {
        Self {
            name: name.to_string(),
            min,
            color: color.to_string(),
            badge: badge.to_string(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}+)", self.badge, self.name, self.min)
    }
}

/// Where a score sits in the tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStanding {
    pub tier: Tier,
    /// The tier above, or `None` at the top of the table.
    pub next: Option<Tier>,
}

impl TierStanding {
    pub fn is_top(&self) -> bool {
        self.next.is_none()
    }
}

impl fmt::Display for TierStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.next {
            Some(next) => write!(f, "{} → next: {}", self.tier, next),
            None => write!(f, "{} (top tier)", self.tier),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for FORESEE.
///
/// The scoring core itself is total; these come from the validation
/// wrapper and from configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ForeseeError {
    #[error("Invalid {field}: {value} is outside {min}–{max}")]
    InvalidProbability {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Non-finite {field}")]
    NonFinite { field: &'static str },

    #[error("Negative streak: {0}")]
    NegativeStreak(i64),

    #[error("Invalid tier table: {0}")]
    InvalidTierTable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
