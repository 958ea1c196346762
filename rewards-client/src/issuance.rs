//! Reward Issuance Flow
//!
//! Runs after the review hand-off: compute a fresh device fingerprint,
//! submit it with the user-agent string, and record the server's
//! decision in the tagged issuance state. Fingerprints are never cached
//! - a retry recomputes everything from scratch.
//!
//! The flow is trust-based by design: nothing verifies that a review
//! was actually posted before issuance is requested.

use crate::api::{GenerateRewardRequest, RewardsClient};
use crate::error::ClientResult;
use rewards_core::{IssuanceState, RewardId};
use rewards_fingerprint::signals::default_user_agent;
use tracing::{info, warn};

/// Driver for the `checking -> success | error` issuance state machine.
pub struct IssuanceFlow<'a> {
    client: &'a RewardsClient,
    state: IssuanceState,
}

impl<'a> IssuanceFlow<'a> {
    /// Open the flow in `Checking`.
    pub fn new(client: &'a RewardsClient) -> Self {
        Self {
            client,
            state: IssuanceState::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &IssuanceState {
        &self.state
    }

    /// Run one issuance attempt.
    ///
    /// Returns the minted reward id on success. On failure the flow
    /// lands in `Error` with a displayable message and the error is
    /// also returned for callers that propagate.
    pub async fn run(&mut self) -> ClientResult<RewardId> {
        let fingerprint = rewards_fingerprint::generate();
        let request = GenerateRewardRequest {
            device_fingerprint: fingerprint,
            user_agent: default_user_agent(),
        };

        match self.client.generate_reward(request).await {
            Ok(response) => {
                let reward_id = RewardId::new(response.reward_id);
                info!(reward_id = %reward_id, "reward issued");
                self.state.succeed(reward_id.clone())?;
                Ok(reward_id)
            }
            Err(e) => {
                warn!(error = %e, "issuance failed");
                self.state.fail(display_message(&e))?;
                Err(e)
            }
        }
    }

    /// Retry from `Error`: back to `Checking`, then a fresh attempt
    /// with a recomputed fingerprint.
    pub async fn retry(&mut self) -> ClientResult<RewardId> {
        self.state.retry()?;
        self.run().await
    }
}

/// Human-readable failure message: the server's own words when it sent
/// any, else a generic retry prompt.
fn display_message(error: &crate::ClientError) -> String {
    match error {
        crate::ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
        _ => "Could not generate reward. Please try again.".to_string(),
    }
}
