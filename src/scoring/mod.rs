//! Reward calculation.
//!
//! Turns a forecast's stated confidence, the crowd's consensus and the
//! user's participation history into a score delta. Each dimension is a
//! multiplicative factor on the base reward, reported in the breakdown.
//!
//! Two formulas coexist and are selected explicitly with [`RewardVariant`]:
//! realized scoring once an event resolves, and projected scoring before.

pub mod projected;
pub mod realized;
pub mod timing;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::{ForecastContext, RewardResult};

// ---------------------------------------------------------------------------
// Configuration (defaults, overridden by foresee.toml at runtime)
// ---------------------------------------------------------------------------

/// Constants shared by both reward formulas.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Reward before any multiplier is applied.
    pub base_rep: f64,
    /// Streak days per bonus step.
    pub streak_block: i64,
    /// Bonus per streak step in realized scoring.
    pub realized_streak_step: f64,
    /// Bonus per streak step in projected scoring.
    pub projected_streak_step: f64,
    /// Multiplier for forecasts inside the early window.
    pub early_multiplier: f64,
    /// Share of the base reward at stake on a wrong projected forecast.
    pub loss_ratio: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_rep: 100.0,
            streak_block: 5,
            realized_streak_step: 0.1,
            projected_streak_step: 0.05,
            early_multiplier: 1.2,
            loss_ratio: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// Which reward formula to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RewardVariant {
    /// Scored against the resolved outcome.
    Realized { outcome: bool },
    /// Pre-resolution stakes: potential gain and potential loss.
    Projected,
    /// Pre-resolution gain including the early-window bonus. No loss figure.
    ProjectedEarlyBird,
}

impl RewardVariant {
    pub fn is_projected(&self) -> bool {
        !matches!(self, RewardVariant::Realized { .. })
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Pure reward calculator. Holds configuration only, so it can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct RewardCalculator {
    config: ScoringConfig,
}

impl RewardCalculator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Access the scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute the reward for a forecast under the given formula.
    ///
    /// Total over all inputs: out-of-range probabilities or streaks give
    /// out-of-range multipliers, never a panic.
    pub fn compute(&self, variant: RewardVariant, ctx: &ForecastContext) -> RewardResult {
        match variant {
            RewardVariant::Realized { outcome } => realized::reward(&self.config, ctx, outcome),
            RewardVariant::Projected => projected::reward(&self.config, ctx, false),
            RewardVariant::ProjectedEarlyBird => projected::reward(&self.config, ctx, true),
        }
    }
}

/// Compute a reward with the default constants.
pub fn compute_reward(variant: RewardVariant, ctx: &ForecastContext) -> RewardResult {
    RewardCalculator::default().compute(variant, ctx)
}

// ---------------------------------------------------------------------------
// Shared factors
// ---------------------------------------------------------------------------

/// `1 + |user - crowd| / 100`. Identical in both formulas.
pub(crate) fn contrarian_multiplier(ctx: &ForecastContext) -> f64 {
    1.0 + ctx.crowd_distance() / 100.0
}

/// `1 + floor(streak / block) * step`.
pub(crate) fn streak_multiplier(streak: i64, block: i64, step: f64) -> f64 {
    let steps = if block > 0 { streak.div_euclid(block) } else { 0 };
    1.0 + steps as f64 * step
}

/// Floor to an integer score. Saturates on overflow; NaN becomes 0.
pub(crate) fn floor_score(value: f64) -> i64 {
    value.floor() as i64
}

/// Render a multiplier with exactly two decimal places.
///
/// Rounds the exact binary value of the double, half away from zero, so
/// 1.005 (stored as 1.00499…) becomes 1.00.
pub(crate) fn two_dp(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded
        })
        .unwrap_or_else(|| Decimal::new(0, 2))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
