//! Rewards CLI Entry Point
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.
//!
//! Usage:
//!   rewards review         - Review hand-off, then claim a reward
//!   rewards show           - Display an issued reward (QR + code)
//!   rewards login          - Staff login
//!   rewards logout         - Staff logout
//!   rewards redeem         - Redeem a typed or pasted reward code
//!   rewards scan           - Scan loop against a captured still image
//!   rewards stats          - Staff reward statistics

use clap::Parser;
use rewards_cli::{handler, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    if let Err(e) = handler::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rewards_cli=debug,rewards_client=debug,rewards_scan=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
