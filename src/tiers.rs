//! Reputation tiers.
//!
//! Maps an accumulated score onto an ordered table of named brackets and
//! reports the bracket above it for progress display. The table is
//! validated once at construction and read-only afterwards.

use std::sync::OnceLock;

use crate::types::{ForeseeError, Tier, TierStanding};

/// An ordered, validated tier table.
///
/// Invariants: non-empty, first minimum is 0, minimums strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Result<Self, ForeseeError> {
        let first = tiers
            .first()
            .ok_or_else(|| ForeseeError::InvalidTierTable("no tiers defined".into()))?;

        if first.min != 0 {
            return Err(ForeseeError::InvalidTierTable(format!(
                "first tier '{}' starts at {}, expected 0",
                first.name, first.min
            )));
        }

        if let Some(pair) = tiers.windows(2).find(|w| w[1].min <= w[0].min) {
            return Err(ForeseeError::InvalidTierTable(format!(
                "tier '{}' ({}) does not start above '{}' ({})",
                pair[1].name, pair[1].min, pair[0].name, pair[0].min
            )));
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Highest tier whose minimum is at or below `score`.
    ///
    /// Negative and NaN scores fall back to the lowest tier.
    pub fn classify(&self, score: f64) -> TierStanding {
        let index = self
            .tiers
            .iter()
            .rposition(|tier| score >= tier.min as f64)
            .unwrap_or(0);

        TierStanding {
            tier: self.tiers[index].clone(),
            next: self.tiers.get(index + 1).cloned(),
        }
    }
}

impl Default for TierTable {
    /// The Foresee ladder, from Emerging to Elite.
    fn default() -> Self {
        Self {
            tiers: vec![
                Tier::new("Emerging Forecaster", 0, "text-slate-400", "🌱"),
                Tier::new("Active Forecaster", 500, "text-blue-500", "📈"),
                Tier::new("Established Forecaster", 1500, "text-indigo-500", "🛡️"),
                Tier::new("Senior Forecaster", 3000, "text-violet-600", "🏛️"),
                Tier::new("Elite Forecaster", 6000, "text-amber-500", "💎"),
            ],
        }
    }
}

/// Classify against the built-in table.
pub fn classify_tier(score: f64) -> TierStanding {
    static DEFAULT_TABLE: OnceLock<TierTable> = OnceLock::new();
    DEFAULT_TABLE.get_or_init(TierTable::default).classify(score)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
