//! FORESEE: credibility scoring CLI
//!
//! Entry point. Loads `.env` and configuration, initialises structured
//! logging on stderr, runs one command and prints its JSON on stdout.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use foresee::cli::{self, Cli};
use foresee::config::AppConfig;
use foresee::scoring::timing::SystemClock;

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let args = Cli::parse();
    let cfg = AppConfig::load_from(args.config.as_deref())?;
    let policy = args.policy.unwrap_or(cfg.validation.policy);

    info!(
        app = %cfg.app.name,
        policy = ?policy,
        early_window_hours = cfg.early_window.hours,
        "FORESEE starting"
    );

    let output = cli::execute(&args.command, &cfg, policy, &SystemClock)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("foresee=info"));

    let json_logging = std::env::var("FORESEE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
