//! Rewards Client
//!
//! Client side of the cafe rewards protocol: the `reqwest`-based
//! [`RewardsClient`] talking to the REST API, the explicit
//! [`AuthContext`] credential holder, and the three protocol flows:
//!
//! - [`issuance::IssuanceFlow`] - review hand-off to minted reward
//! - [`display::load_reward`] - fetch a reward view for display
//! - [`redemption::redeem_input`] - staff-side scan/type to redeem
//!
//! All reward-state authority is server-side; the flows report the
//! server's decisions, they never make their own.

pub mod api;
pub mod auth;
pub mod display;
pub mod error;
pub mod issuance;
pub mod redemption;

pub use api::RewardsClient;
pub use auth::AuthContext;
pub use display::{load_reward, RewardView};
pub use error::{ClientError, ClientResult};
pub use issuance::IssuanceFlow;
pub use redemption::{redeem_input, RedemptionOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
