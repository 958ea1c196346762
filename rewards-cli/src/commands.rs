//! CLI Commands
//!
//! Command and flag definitions for the rewards CLI.

use clap::{Parser, Subcommand};
use rewards_core::constants::DEFAULT_REVIEW_DELAY_MS;
use std::path::PathBuf;

/// Cafe Rewards CLI
#[derive(Parser, Debug)]
#[command(name = "rewards")]
#[command(version)]
#[command(about = "Cafe rewards protocol command line interface")]
#[command(long_about = "A command-line tool for the cafe rewards protocol.\n\n\
    Customers use it to claim and display review rewards; staff use it \
    to redeem reward codes and inspect reward statistics.")]
pub struct Cli {
    /// API endpoint URL
    #[arg(
        short,
        long,
        env = "REWARDS_API_URL",
        default_value = "http://localhost:5000"
    )]
    pub api_url: String,

    /// External review destination shown by the `review` command
    #[arg(
        long,
        env = "REWARDS_REVIEW_URL",
        default_value = "https://maps.example.com/cafe/review"
    )]
    pub review_url: String,

    /// Session token file (env: REWARDS_SESSION_FILE)
    #[arg(long, env = "REWARDS_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Output format (json, table, plain)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table format (human-readable)
    Table,
    /// Plain text
    Plain,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the review hand-off, then claim a reward for this device
    Review {
        /// Wait after the hand-off before claiming, in milliseconds
        #[arg(
            long,
            env = "REWARDS_REVIEW_DELAY_MS",
            default_value_t = DEFAULT_REVIEW_DELAY_MS
        )]
        review_delay_ms: u64,

        /// Extra issuance attempts after a failure
        #[arg(long, default_value_t = 0)]
        retries: u32,
    },

    /// Display an issued reward: QR code, reward code, expiry
    Show {
        /// Reward identifier returned at claim time
        reward_id: String,

        /// Also write the QR code as a PNG to this path
        #[arg(long)]
        save_qr: Option<PathBuf>,
    },

    /// Staff login (stores the session token)
    Login {
        /// Staff email
        #[arg(long, env = "REWARDS_STAFF_EMAIL")]
        email: String,

        /// Staff password
        #[arg(long, env = "REWARDS_STAFF_PASSWORD")]
        password: String,
    },

    /// Staff logout (clears the session token)
    Logout,

    /// Redeem a typed or pasted reward code (or raw QR payload)
    Redeem {
        /// Reward code or scanned payload
        code: String,
    },

    /// Interactive scan loop: capture a still image per attempt
    Scan {
        /// Still image the capture device writes each frame to
        image: PathBuf,
    },

    /// Show reward statistics
    Stats,
}
