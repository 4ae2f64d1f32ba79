//! FORESEE: credibility scoring for a forecasting platform
//!
//! Library crate exposing the reward calculator, the tier classifier,
//! and the configuration/CLI layers that call them.

pub mod config;
pub mod types;
pub mod scoring;
pub mod tiers;
pub mod validation;
pub mod cli;
