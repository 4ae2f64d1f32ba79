//! Input hardening around the scoring core.
//!
//! The calculator accepts anything and never fails. Callers that want
//! range checks route forecasts through [`validate`] first.

use serde::Deserialize;
use tracing::warn;

use crate::scoring::{RewardCalculator, RewardVariant};
use crate::types::{ForeseeError, ForecastContext, RewardResult};

pub const USER_PROBABILITY_RANGE: (f64, f64) = (1.0, 99.0);
pub const CROWD_PROBABILITY_RANGE: (f64, f64) = (0.0, 100.0);

/// How out-of-range input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject anything outside the allowed ranges.
    #[default]
    Strict,
    /// Pull finite values into range; reject non-finite ones.
    Clamp,
    /// Pass input through untouched.
    Off,
}

impl std::str::FromStr for ValidationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "reject" => Ok(ValidationPolicy::Strict),
            "clamp" => Ok(ValidationPolicy::Clamp),
            "off" | "none" => Ok(ValidationPolicy::Off),
            _ => Err(anyhow::anyhow!("Unknown validation policy: {s}")),
        }
    }
}

/// Apply `policy` to a forecast context.
pub fn validate(ctx: ForecastContext, policy: ValidationPolicy) -> Result<ForecastContext, ForeseeError> {
    if policy == ValidationPolicy::Off {
        return Ok(ctx);
    }

    let user_probability = check_probability(
        "user_probability",
        ctx.user_probability,
        USER_PROBABILITY_RANGE,
        policy,
    )?;
    let crowd_probability = check_probability(
        "crowd_probability",
        ctx.crowd_probability,
        CROWD_PROBABILITY_RANGE,
        policy,
    )?;

    let streak = match (ctx.streak < 0, policy) {
        (true, ValidationPolicy::Strict) => return Err(ForeseeError::NegativeStreak(ctx.streak)),
        (true, _) => {
            warn!(streak = ctx.streak, "Negative streak clamped to 0");
            0
        }
        (false, _) => ctx.streak,
    };

    Ok(ForecastContext {
        user_probability,
        crowd_probability,
        streak,
        is_early: ctx.is_early,
    })
}

/// Validate, then compute.
pub fn compute_validated(
    calculator: &RewardCalculator,
    variant: RewardVariant,
    ctx: ForecastContext,
    policy: ValidationPolicy,
) -> Result<RewardResult, ForeseeError> {
    let ctx = validate(ctx, policy)?;
    Ok(calculator.compute(variant, &ctx))
}

fn check_probability(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
    policy: ValidationPolicy,
) -> Result<f64, ForeseeError> {
    if !value.is_finite() {
        return Err(ForeseeError::NonFinite { field });
    }
    if (min..=max).contains(&value) {
        return Ok(value);
    }
    match policy {
        ValidationPolicy::Strict => Err(ForeseeError::InvalidProbability { field, value, min, max }),
        _ => {
            let clamped = value.clamp(min, max);
            warn!(field, value, clamped, "Probability clamped into range");
            Ok(clamped)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
