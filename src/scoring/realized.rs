//! Realized-outcome scoring.
//!
//! Used once an event has resolved. Accuracy is the probability the user
//! assigned to what actually happened; contrarian distance and streak
//! then scale the base reward.

use rust_decimal::Decimal;
use tracing::debug;

use super::{contrarian_multiplier, floor_score, streak_multiplier, two_dp, ScoringConfig};
use crate::types::{Breakdown, ForecastContext, RewardResult};

/// Probability (0–1) the user gave to the realized outcome.
pub fn accuracy(user_probability: f64, outcome: bool) -> f64 {
    if outcome {
        user_probability / 100.0
    } else {
        (100.0 - user_probability) / 100.0
    }
}

/// `floor(base * accuracy * contrarian * streak)`.
pub fn reward(config: &ScoringConfig, ctx: &ForecastContext, outcome: bool) -> RewardResult {
    let accuracy = accuracy(ctx.user_probability, outcome);
    let contrarian = contrarian_multiplier(ctx);
    let streak = streak_multiplier(ctx.streak, config.streak_block, config.realized_streak_step);

    let total = floor_score(config.base_rep * accuracy * contrarian * streak);

    debug!(
        user = ctx.user_probability,
        crowd = ctx.crowd_probability,
        outcome,
        accuracy,
        contrarian,
        streak,
        total,
        "Realized reward"
    );

    RewardResult {
        total,
        loss: None,
        breakdown: Breakdown {
            base: Decimal::from_f64_retain(config.base_rep).map(|d| d.normalize()),
            accuracy: Some(two_dp(accuracy)),
            contrarian: Some(two_dp(contrarian)),
            streak: Some(two_dp(streak)),
            ..Default::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
