//! Command-line front end.
//!
//! A thin caller over the scoring core: parses arguments, applies the
//! configured validation policy, and renders results as JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;
use crate::scoring::timing::Clock;
use crate::scoring::{RewardCalculator, RewardVariant};
use crate::types::{ForecastContext, RewardResult, TierStanding};
use crate::validation::{self, ValidationPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "foresee",
    about = "Project and settle forecast rewards, and look up reputation tiers",
    version
)]
pub struct Cli {
    /// Path to the TOML config file. Defaults to `foresee.toml`, which may be
    /// absent; an explicit path must exist.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Override the configured validation policy (strict, clamp, off)
    #[arg(long, global = true)]
    pub policy: Option<ValidationPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a forecast against the resolved outcome
    Score(ScoreArgs),
    /// Project potential gain (and loss) before resolution
    Project(ProjectArgs),
    /// Show the tier standing for a reputation score
    Tier(TierArgs),
    /// List the configured tier ladder
    Tiers,
}

#[derive(Args, Debug, Clone)]
pub struct ForecastArgs {
    /// User's probability of YES, in percent
    #[arg(long = "user", allow_negative_numbers = true)]
    pub user_probability: f64,
    /// Crowd consensus probability, in percent
    #[arg(long = "crowd", allow_negative_numbers = true)]
    pub crowd_probability: f64,
    /// Consecutive participation days
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub streak: i64,
}

impl ForecastArgs {
    fn context(&self) -> ForecastContext {
        ForecastContext::new(self.user_probability, self.crowd_probability, self.streak)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Resolution {
    Yes,
    No,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub forecast: ForecastArgs,
    /// How the event resolved
    #[arg(long, value_enum)]
    pub outcome: Resolution,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub forecast: ForecastArgs,
    /// Treat the forecast as inside the early window
    #[arg(long, conflicts_with = "created_at")]
    pub early: bool,
    /// Event creation time (RFC 3339); the early flag is derived from it
    #[arg(long)]
    pub created_at: Option<DateTime<Utc>>,
    /// Report gain and loss without the early-window bonus
    #[arg(long)]
    pub no_early_bird: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TierArgs {
    /// Reputation score
    #[arg(long, allow_negative_numbers = true)]
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RewardOutput {
    pub variant: RewardVariant,
    pub context: ForecastContext,
    pub reward: RewardResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierOutput {
    pub score: f64,
    #[serde(flatten)]
    pub standing: TierStanding,
    /// Percent of the way from the current tier to the next (100 at the top).
    pub progress_pct: u8,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a parsed command against `config`, returning the JSON to print.
pub fn execute(
    command: &Command,
    config: &AppConfig,
    policy: ValidationPolicy,
    clock: &dyn Clock,
) -> Result<serde_json::Value> {
    let calculator = RewardCalculator::new(config.scoring_config());

    let value = match command {
        Command::Score(args) => {
            let variant = RewardVariant::Realized {
                outcome: args.outcome == Resolution::Yes,
            };
            let out = reward(&calculator, variant, args.forecast.context(), policy)?;
            serde_json::to_value(out)?
        }
        Command::Project(args) => {
            let is_early = match args.created_at {
                Some(created_at) => config.early_window().is_early_with(created_at, clock),
                None => args.early,
            };
            let variant = if args.no_early_bird {
                RewardVariant::Projected
            } else {
                RewardVariant::ProjectedEarlyBird
            };
            let ctx = args.forecast.context().early(is_early);
            let out = reward(&calculator, variant, ctx, policy)?;
            serde_json::to_value(out)?
        }
        Command::Tier(args) => {
            let table = config.tier_table()?;
            let standing = table.classify(args.score);
            let progress_pct = progress_pct(args.score, &standing);
            serde_json::to_value(TierOutput {
                score: args.score,
                standing,
                progress_pct,
            })?
        }
        Command::Tiers => {
            let table = config.tier_table()?;
            serde_json::to_value(table.tiers())?
        }
    };

    Ok(value)
}

fn reward(
    calculator: &RewardCalculator,
    variant: RewardVariant,
    ctx: ForecastContext,
    policy: ValidationPolicy,
) -> Result<RewardOutput> {
    let context = validation::validate(ctx, policy)
        .with_context(|| format!("Rejected forecast ({ctx})"))?;
    let reward = calculator.compute(variant, &context);
    info!(variant = ?variant, %context, %reward, "Reward computed");
    Ok(RewardOutput {
        variant,
        context,
        reward,
    })
}

/// Progress from the current tier's floor toward the next tier, 0–100.
pub fn progress_pct(score: f64, standing: &TierStanding) -> u8 {
    let Some(next) = &standing.next else {
        return 100;
    };
    let span = (next.min - standing.tier.min) as f64;
    let pct = (score - standing.tier.min as f64) / span * 100.0;
    pct.clamp(0.0, 100.0).floor() as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
