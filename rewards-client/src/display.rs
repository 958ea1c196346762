//! Reward Display
//!
//! Read-only fetch of an issued reward plus the derived values the
//! display needs: days remaining and the QR payload string. Fetching
//! never mutates reward state and is safe to repeat.

use crate::api::RewardsClient;
use crate::error::ClientResult;
use chrono::{DateTime, Utc};
use rewards_core::{QrPayload, RewardId};
use serde::Serialize;

/// Everything the reward display renders.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardView {
    pub reward_id: RewardId,
    pub discount: f64,
    pub expires_at: DateTime<Utc>,
    /// `ceil((expires_at - now) / 1 day)`; zero or negative means
    /// already expired, which the redemption endpoint enforces
    pub days_remaining: i64,
    /// JSON string embedded in the rendered QR code
    pub qr_payload: String,
}

/// Fetch a reward and derive its display view.
pub async fn load_reward(client: &RewardsClient, reward_id: &RewardId) -> ClientResult<RewardView> {
    let reward = client.fetch_reward(reward_id.as_str()).await?;
    let now = Utc::now();

    let qr_payload = QrPayload::new(reward_id.clone(), reward.discount).to_json()?;

    Ok(RewardView {
        reward_id: reward_id.clone(),
        discount: reward.discount,
        expires_at: reward.expires_at,
        days_remaining: reward.days_remaining(now),
        qr_payload,
    })
}
