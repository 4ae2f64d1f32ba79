//! Projected (pre-resolution) scoring.
//!
//! Shows what a forecast stands to gain before the event resolves. Stakes
//! grow with how far the stated probability sits from 50%, in both
//! directions: a more extreme forecast can win more and lose more.

use tracing::debug;

use super::{contrarian_multiplier, floor_score, streak_multiplier, two_dp, ScoringConfig};
use crate::types::{Breakdown, ForecastContext, RewardResult};

/// `1 + |user - 50| / 50`, in [1, 2] for in-range probabilities.
pub fn confidence_multiplier(user_probability: f64) -> f64 {
    1.0 + (user_probability - 50.0).abs() / 50.0
}

/// Projected gain, plus the projected loss when `early_bird` is off.
///
/// With `early_bird` the early-window multiplier joins the product and no
/// loss figure is reported.
pub fn reward(config: &ScoringConfig, ctx: &ForecastContext, early_bird: bool) -> RewardResult {
    let confidence = confidence_multiplier(ctx.user_probability);
    let contrarian = contrarian_multiplier(ctx);
    let streak = streak_multiplier(ctx.streak, config.streak_block, config.projected_streak_step);

    let (total, loss, early) = if early_bird {
        let early = if ctx.is_early { config.early_multiplier } else { 1.0 };
        let total = floor_score(config.base_rep * confidence * contrarian * early * streak);
        (total, None, Some(early))
    } else {
        let total = floor_score(config.base_rep * confidence * contrarian * streak);
        (total, Some(potential_loss(config, confidence)), None)
    };

    debug!(
        user = ctx.user_probability,
        crowd = ctx.crowd_probability,
        is_early = ctx.is_early,
        early_bird,
        confidence,
        contrarian,
        streak,
        total,
        loss = ?loss,
        "Projected reward"
    );

    RewardResult {
        total,
        loss,
        breakdown: Breakdown {
            confidence: Some(two_dp(confidence)),
            contrarian: Some(two_dp(contrarian)),
            early: early.map(two_dp),
            streak: Some(two_dp(streak)),
            ..Default::default()
        },
    }
}

/// `floor(base * loss_ratio * confidence)`.
fn potential_loss(config: &ScoringConfig, confidence: f64) -> i64 {
    floor_score(config.base_rep * config.loss_ratio * confidence)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
