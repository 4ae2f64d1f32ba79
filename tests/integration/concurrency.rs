//! Shared use from many threads: no locking, same answers.

use std::sync::Arc;
use std::thread;

use foresee::scoring::{RewardCalculator, RewardVariant};
use foresee::tiers::{classify_tier, TierTable};
use foresee::types::ForecastContext;

#[test]
fn test_calculator_shared_across_threads() {
    let calc = Arc::new(RewardCalculator::default());
    let ctx = ForecastContext::new(90.0, 40.0, 7).early(true);
    let expected = calc.compute(RewardVariant::ProjectedEarlyBird, &ctx);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let calc = Arc::clone(&calc);
            thread::spawn(move || {
                (0..1000)
                    .map(|_| calc.compute(RewardVariant::ProjectedEarlyBird, &ctx))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn test_tier_table_shared_across_threads() {
    let table = Arc::new(TierTable::default());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let score = (i * 1000) as f64;
                (table.classify(score), classify_tier(score))
            })
        })
        .collect();

    for handle in handles {
        let (own, global) = handle.join().unwrap();
        assert_eq!(own, global);
    }
}
