//! Scan Payload Decoder
//!
//! A scanned or typed value arrives in one of two shapes: the JSON
//! payload embedded in the reward QR code, or a bare reward code typed
//! at the till. The decoder is two-stage: attempt the structured parse,
//! fall back to raw-string mode on any failure. It never errors.

use crate::types::RewardId;
use serde::Deserialize;

/// Decoded scan input
#[derive(Clone, Debug, PartialEq)]
pub enum ScanPayload {
    /// JSON object carrying a `rewardId` field
    Structured {
        reward_id: RewardId,
        /// Display-only; never part of the redemption decision
        discount: Option<f64>,
    },
    /// Anything else: the trimmed input is the identifier itself
    Raw(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredPayload {
    reward_id: String,
    #[serde(default)]
    discount: Option<f64>,
}

impl ScanPayload {
    /// Decode a scanned or typed value.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match serde_json::from_str::<StructuredPayload>(trimmed) {
            Ok(parsed) => ScanPayload::Structured {
                reward_id: RewardId::new(parsed.reward_id),
                discount: parsed.discount,
            },
            Err(_) => ScanPayload::Raw(trimmed.to_string()),
        }
    }

    /// The reward identifier this payload resolves to.
    pub fn reward_id(&self) -> &str {
        match self {
            ScanPayload::Structured { reward_id, .. } => reward_id.as_str(),
            ScanPayload::Raw(raw) => raw,
        }
    }

    /// Display-only discount hint, if the payload carried one.
    pub fn discount_hint(&self) -> Option<f64> {
        match self {
            ScanPayload::Structured { discount, .. } => *discount,
            ScanPayload::Raw(_) => None,
        }
    }
}
