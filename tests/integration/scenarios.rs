//! Worked scenarios for both reward formulas and the tier ladder.

use foresee::scoring::{compute_reward, RewardCalculator, RewardVariant, ScoringConfig};
use foresee::tiers::{classify_tier, TierTable};
use foresee::types::{ForecastContext, Tier};
use foresee::validation::{compute_validated, ValidationPolicy};
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Realized scoring
// ---------------------------------------------------------------------------

#[test]
fn test_realized_contrarian_streak_scenario() {
    let ctx = ForecastContext::new(80.0, 50.0, 12);
    let r = compute_reward(RewardVariant::Realized { outcome: true }, &ctx);

    assert_eq!(r.total, 124);
    assert_eq!(r.loss, None);
    assert_eq!(r.breakdown.get("accuracy"), Some(dec!(0.80)));
    assert_eq!(r.breakdown.get("contrarian"), Some(dec!(1.30)));
    assert_eq!(r.breakdown.get("streak"), Some(dec!(1.20)));
}

#[test]
fn test_realized_full_accuracy_both_sides() {
    let yes = compute_reward(
        RewardVariant::Realized { outcome: true },
        &ForecastContext::new(100.0, 100.0, 0),
    );
    let no = compute_reward(
        RewardVariant::Realized { outcome: false },
        &ForecastContext::new(0.0, 0.0, 0),
    );
    assert_eq!(yes.breakdown.accuracy, Some(dec!(1.00)));
    assert_eq!(no.breakdown.accuracy, Some(dec!(1.00)));
    assert_eq!(yes.total, 100);
    assert_eq!(no.total, 100);
}

#[test]
fn test_realized_ignores_early_flag() {
    let ctx = ForecastContext::new(80.0, 50.0, 12);
    let variant = RewardVariant::Realized { outcome: true };
    assert_eq!(
        compute_reward(variant, &ctx),
        compute_reward(variant, &ctx.early(true))
    );
}

// ---------------------------------------------------------------------------
// Projected scoring
// ---------------------------------------------------------------------------

#[test]
fn test_projected_early_bird_scenario() {
    let ctx = ForecastContext::new(90.0, 40.0, 7).early(true);
    let r = compute_reward(RewardVariant::ProjectedEarlyBird, &ctx);

    assert_eq!(r.total, 340);
    assert_eq!(r.loss, None);
    let names: Vec<&str> = r.breakdown.entries().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["confidence", "contrarian", "early", "streak"]);
}

#[test]
fn test_projected_minimum_is_base_rep() {
    let ctx = ForecastContext::new(50.0, 50.0, 0);
    let r = compute_reward(RewardVariant::Projected, &ctx);
    assert_eq!(r.total, 100);
    assert_eq!(r.loss, Some(50));

    // Any move away from the coin flip costs more than nothing
    for user in [49.0, 51.0, 10.0, 90.0] {
        let moved = compute_reward(RewardVariant::Projected, &ForecastContext::new(user, 50.0, 0));
        assert!(moved.total > 100, "user {user}");
    }
}

#[test]
fn test_projected_doubling_distance_raises_total() {
    for (near, far) in [(60.0, 70.0), (40.0, 30.0), (55.0, 60.0), (70.0, 90.0)] {
        let a = compute_reward(RewardVariant::Projected, &ForecastContext::new(near, 50.0, 3));
        let b = compute_reward(RewardVariant::Projected, &ForecastContext::new(far, 50.0, 3));
        assert!(b.total > a.total, "{near} -> {far}: {} vs {}", a.total, b.total);
    }
}

#[test]
fn test_projected_stakes_serialize_for_ui() {
    let r = compute_reward(RewardVariant::Projected, &ForecastContext::new(90.0, 40.0, 7));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["total"], 283);
    assert_eq!(json["loss"], 90);
    assert!(json["breakdown"].get("early").is_none());
}

#[test]
fn test_configured_calculator_overrides_constants() {
    let calc = RewardCalculator::new(ScoringConfig {
        early_multiplier: 1.5,
        ..Default::default()
    });
    let ctx = ForecastContext::new(50.0, 50.0, 0).early(true);
    assert_eq!(calc.compute(RewardVariant::ProjectedEarlyBird, &ctx).total, 150);
}

#[test]
fn test_validated_wrapper_keeps_core_total() {
    let calc = RewardCalculator::default();
    let wild = ForecastContext::new(250.0, -40.0, -8);

    // Core: no validation, still a number
    let raw = calc.compute(RewardVariant::Projected, &wild);
    assert!(raw.total > 0);

    // Wrapper: strict rejects, clamp repairs
    assert!(compute_validated(&calc, RewardVariant::Projected, wild, ValidationPolicy::Strict).is_err());
    let clamped = compute_validated(&calc, RewardVariant::Projected, wild, ValidationPolicy::Clamp).unwrap();
    // user 99, crowd 0, streak 0: 100 * 1.98 * 1.99
    assert_eq!(clamped.total, 394);
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[test]
fn test_tier_ladder_scenario() {
    let at_1499 = classify_tier(1499.0);
    assert_eq!(at_1499.tier.min, 500);
    assert_eq!(at_1499.next.as_ref().map(|t| t.min), Some(1500));

    let at_1500 = classify_tier(1500.0);
    assert_eq!(at_1500.tier.min, 1500);

    let top = classify_tier(999_999.0);
    assert_eq!(top.tier.min, 6000);
    assert!(top.next.is_none());
}

#[test]
fn test_tier_lowest_standing() {
    let s = classify_tier(0.0);
    assert_eq!(s.tier.name, "Emerging Forecaster");
    assert_eq!(s.tier.badge, "🌱");
    assert_eq!(s.next.unwrap().name, "Active Forecaster");
}

#[test]
fn test_every_threshold_is_inclusive() {
    let table = TierTable::default();
    for (i, tier) in table.tiers().iter().enumerate() {
        let s = table.classify(tier.min as f64);
        assert_eq!(&s.tier, tier);
        assert_eq!(s.next.as_ref(), table.tiers().get(i + 1));
    }
}

#[test]
fn test_reward_then_tier_flow() {
    // A user just below Active earns a realized reward and crosses the line
    let before = 450.0;
    let r = compute_reward(
        RewardVariant::Realized { outcome: true },
        &ForecastContext::new(80.0, 50.0, 12),
    );
    assert_eq!(classify_tier(before).tier.name, "Emerging Forecaster");
    assert_eq!(classify_tier(before + r.total as f64).tier.name, "Active Forecaster");
}

#[test]
fn test_custom_table_rejects_gap_at_zero() {
    let result = TierTable::new(vec![
        Tier::new("Novice", 1, "text-slate-400", "🌱"),
        Tier::new("Expert", 100, "text-amber-500", "💎"),
    ]);
    assert!(result.is_err());
}
