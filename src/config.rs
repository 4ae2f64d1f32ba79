//! Configuration loading from TOML.
//!
//! Reads `foresee.toml` and deserializes into strongly-typed structs.
//! Every section has defaults, so a partial file (or none at all) yields
//! the platform's standard constants and tier ladder.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::scoring::timing::EarlyWindow;
use crate::scoring::ScoringConfig;
use crate::tiers::TierTable;
use crate::types::{ForeseeError, Tier};
use crate::validation::ValidationPolicy;

/// Default config file path.
pub const DEFAULT_CONFIG_FILE: &str = "foresee.toml";

/// Longest early window accepted from config (one year).
const MAX_EARLY_WINDOW_HOURS: i64 = 24 * 365;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub scoring: ScoringSection,
    pub early_window: EarlyWindowSection,
    /// Tier ladder, lowest first. Empty means the built-in ladder.
    pub tiers: Vec<Tier>,
    pub validation: ValidationSection,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "Foresee".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ScoringSection {
    pub base_rep: f64,
    pub streak_block: i64,
    pub realized_streak_step: f64,
    pub projected_streak_step: f64,
    pub early_multiplier: f64,
    pub loss_ratio: f64,
}

impl Default for ScoringSection {
    fn default() -> Self {
        let d = ScoringConfig::default();
        Self {
            base_rep: d.base_rep,
            streak_block: d.streak_block,
            realized_streak_step: d.realized_streak_step,
            projected_streak_step: d.projected_streak_step,
            early_multiplier: d.early_multiplier,
            loss_ratio: d.loss_ratio,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EarlyWindowSection {
    pub hours: i64,
}

impl Default for EarlyWindowSection {
    fn default() -> Self {
        Self { hours: 48 }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ValidationSection {
    pub policy: ValidationPolicy,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        config
            .check()
            .with_context(|| format!("Invalid config file: {path}"))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        info!(path, tiers = config.tiers.len(), "Config loaded");
        Ok(config)
    }

    /// Resolve the `--config` flag. An explicit path must exist; only the
    /// implicit default may fall back to built-in values.
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                info!(path, tiers = config.tiers.len(), "Config loaded");
                Ok(config)
            }
            None => Self::load_or_default(DEFAULT_CONFIG_FILE),
        }
    }

    /// Reject values the scoring and tier layers cannot work with.
    pub fn check(&self) -> Result<(), ForeseeError> {
        let s = &self.scoring;
        let factors = [
            ("base_rep", s.base_rep),
            ("realized_streak_step", s.realized_streak_step),
            ("projected_streak_step", s.projected_streak_step),
            ("early_multiplier", s.early_multiplier),
            ("loss_ratio", s.loss_ratio),
        ];
        if let Some((name, value)) = factors.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(ForeseeError::Config(format!(
                "scoring.{name} must be a non-negative number, got {value}"
            )));
        }
        if s.streak_block <= 0 {
            return Err(ForeseeError::Config(format!(
                "scoring.streak_block must be positive, got {}",
                s.streak_block
            )));
        }
        let hours = self.early_window.hours;
        if !(0..=MAX_EARLY_WINDOW_HOURS).contains(&hours) {
            return Err(ForeseeError::Config(format!(
                "early_window.hours must be within 0–{MAX_EARLY_WINDOW_HOURS}, got {hours}"
            )));
        }
        self.tier_table()?;
        Ok(())
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            base_rep: self.scoring.base_rep,
            streak_block: self.scoring.streak_block,
            realized_streak_step: self.scoring.realized_streak_step,
            projected_streak_step: self.scoring.projected_streak_step,
            early_multiplier: self.scoring.early_multiplier,
            loss_ratio: self.scoring.loss_ratio,
        }
    }

    pub fn early_window(&self) -> EarlyWindow {
        EarlyWindow::hours(self.early_window.hours.clamp(0, MAX_EARLY_WINDOW_HOURS))
    }

    /// The configured ladder, or the built-in one when none is given.
    pub fn tier_table(&self) -> Result<TierTable, ForeseeError> {
        if self.tiers.is_empty() {
            Ok(TierTable::default())
        } else {
            TierTable::new(self.tiers.clone())
        }
    }
}
