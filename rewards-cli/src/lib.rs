//! Rewards CLI
//!
//! Command-line interface for the cafe rewards protocol: the customer
//! flow (review hand-off, claim, display) and the staff flow (login,
//! scan/redeem, stats).
//!
//! # Usage
//!
//! ```text
//! rewards [OPTIONS] <COMMAND>
//!
//! Commands:
//!   review   Open the review hand-off and claim a reward
//!   show     Display an issued reward (QR code + reward code)
//!   login    Staff login (stores the session token)
//!   logout   Staff logout (clears the session token)
//!   redeem   Redeem a typed or pasted reward code
//!   scan     Interactive scan loop against a captured still image
//!   stats    Staff reward statistics
//!
//! Options:
//!   -a, --api-url <URL>    API endpoint URL [env: REWARDS_API_URL]
//!   -f, --format <FORMAT>  Output format (json, table, plain)
//!   -v, --verbose          Enable verbose output
//! ```

pub mod commands;
pub mod error;
pub mod handler;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};

/// Rewards CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
