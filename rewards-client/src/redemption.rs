//! Redemption Flow (Staff)
//!
//! Takes whatever the till produced - a decoded QR payload or a typed
//! code - resolves it to a reward identifier with the two-stage
//! decoder, binds the request to the staff device's fingerprint, and
//! reports the server's authoritative decision.
//!
//! Server rejections (already redeemed, expired, not found) come back
//! as a failed [`RedemptionOutcome`] carrying the server's message. A
//! 401 and transport failures are errors instead: they mean the till
//! cannot redeem at all, not that this reward was refused.

use crate::api::{RedeemRequest, RewardsClient};
use crate::error::{ClientError, ClientResult};
use rewards_core::ScanPayload;
use serde::Serialize;
use tracing::{info, warn};

/// Result of one redemption attempt.
#[derive(Clone, Debug, Serialize)]
pub struct RedemptionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub message: String,
}

/// Redeem a scanned or typed value.
pub async fn redeem_input(client: &RewardsClient, raw_input: &str) -> ClientResult<RedemptionOutcome> {
    let payload = ScanPayload::parse(raw_input);
    let reward_id = payload.reward_id().to_string();
    if reward_id.is_empty() {
        return Ok(RedemptionOutcome {
            success: false,
            discount: None,
            message: "No reward code provided".to_string(),
        });
    }

    // The staff device's fingerprint, not the customer's: it binds the
    // redemption to a specific till for the audit trail.
    let device_fingerprint = rewards_fingerprint::generate();

    let request = RedeemRequest {
        reward_id,
        device_fingerprint,
    };

    match client.redeem_reward(request).await {
        Ok(response) => {
            info!(discount = response.discount, "reward redeemed");
            Ok(RedemptionOutcome {
                success: true,
                discount: Some(response.discount),
                message: response.message,
            })
        }
        Err(ClientError::Api { status, message }) if status != 401 => {
            warn!(status, message = %message, "redemption rejected");
            Ok(RedemptionOutcome {
                success: false,
                discount: None,
                message,
            })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_omits_absent_discount() {
        let outcome = RedemptionOutcome {
            success: false,
            discount: None,
            message: "Reward already redeemed".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("discount"));
        assert!(json.contains("already redeemed"));
    }
}
