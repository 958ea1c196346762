//! Reward Domain Types
//!
//! Client-side views of server-owned entities. Reward status (pending,
//! redeemed, expired) is never materialized here - it is inferred from
//! which endpoint call succeeds or fails.

use crate::constants::SECONDS_PER_DAY;
use crate::error::CoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque reward identifier, minted by the server
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub String);

impl RewardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client view of a reward, as returned by `GET /rewards/{rewardId}`.
///
/// Unknown response fields are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Reward identifier (some server responses omit it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<RewardId>,
    /// Discount percentage
    pub discount: f64,
    /// Expiry timestamp, enforced server-side
    pub expires_at: DateTime<Utc>,
    /// Fingerprint of the issuing device, set at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_fingerprint: Option<String>,
}

impl Reward {
    /// Days remaining until expiry, as `ceil((expires_at - now) / 1 day)`.
    ///
    /// Zero or negative means the reward has already expired. The client
    /// still shows it; the redemption endpoint is the enforcement point.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let secs = (self.expires_at - now).num_seconds();
        let mut days = secs.div_euclid(SECONDS_PER_DAY);
        if secs.rem_euclid(SECONDS_PER_DAY) > 0 {
            days += 1;
        }
        days
    }
}

/// Staff view of `GET /rewards/stats/summary`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardStats {
    pub total: u64,
    pub redeemed: u64,
    pub pending: u64,
    pub expired: u64,
    /// Server-formatted rate string, displayed verbatim
    pub redemption_rate: String,
}

/// QR wire payload: `{"rewardId":"...","discount":...}`.
///
/// The embedded discount is display-only; redemption never trusts it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub reward_id: RewardId,
    pub discount: f64,
}

impl QrPayload {
    pub fn new(reward_id: RewardId, discount: f64) -> Self {
        Self {
            reward_id,
            discount,
        }
    }

    /// Encode as the JSON string embedded in the QR code.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
