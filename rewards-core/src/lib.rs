//! Rewards Core
//!
//! Domain types and protocol logic shared by the cafe rewards client:
//!
//! - Reward identifiers and client-side reward views
//! - The two-stage scan payload decoder (JSON object or bare code)
//! - The issuance state machine (`checking -> success | error`)
//! - Canonical JSON serialization and SHA-256 digest helpers
//!
//! The server is the sole authority on reward state. Nothing in this crate
//! decides whether a reward is valid, redeemed, or expired - it only models
//! the client's view of the protocol.

pub mod canon;
pub mod constants;
pub mod error;
pub mod payload;
pub mod state;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use payload::ScanPayload;
pub use state::IssuanceState;
pub use types::{QrPayload, Reward, RewardId, RewardStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
