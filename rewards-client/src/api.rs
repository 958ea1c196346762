//! API Client
//!
//! HTTP client for the rewards REST API. Every request carries the
//! bearer credential when the [`AuthContext`] holds one; a 401 is
//! surfaced to the caller as `ClientError::Api { status: 401, .. }`
//! rather than auto-handled.

use crate::auth::AuthContext;
use crate::error::{ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, Response};
use rewards_core::{Reward, RewardStats};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Fallback when an error body carries no usable message.
const GENERIC_FAILURE: &str = "Request failed";

/// Rewards API client
pub struct RewardsClient {
    /// HTTP client
    client: Client,
    /// Base URL
    base_url: String,
    /// Credential holder, shared with the owning application
    auth: Arc<AuthContext>,
}

impl RewardsClient {
    /// Create a new client with the default 30 s transport timeout.
    pub fn new(base_url: impl Into<String>, auth: Arc<AuthContext>) -> ClientResult<Self> {
        Self::with_timeout(base_url, auth, 30)
    }

    /// Create with custom timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        auth: Arc<AuthContext>,
        timeout_secs: u64,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            auth,
        })
    }

    /// Shared credential holder
    pub fn auth(&self) -> &Arc<AuthContext> {
        &self.auth
    }

    /// Staff login; stores the returned token in the auth context.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let url = format!("{}/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.authorized(self.client.post(&url)).json(&request).send().await?;
        let body: LoginResponse = Self::decode(response).await?;
        self.auth.set_token(&body.token);
        Ok(body.token)
    }

    /// Issue a reward bound to the submitted device fingerprint.
    pub async fn generate_reward(
        &self,
        request: GenerateRewardRequest,
    ) -> ClientResult<GenerateRewardResponse> {
        let url = format!("{}/rewards/generate", self.base_url);
        debug!(fingerprint = %request.device_fingerprint, "requesting reward issuance");
        let response = self.authorized(self.client.post(&url)).json(&request).send().await?;
        Self::decode(response).await
    }

    /// Fetch a reward view by id. Read-only and safe to repeat.
    pub async fn fetch_reward(&self, reward_id: &str) -> ClientResult<Reward> {
        let url = format!("{}/rewards/{}", self.base_url, reward_id);
        let response = self.authorized(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    /// Redeem a reward, bound to the staff device's fingerprint.
    pub async fn redeem_reward(&self, request: RedeemRequest) -> ClientResult<RedeemResponse> {
        let url = format!("{}/rewards/redeem", self.base_url);
        debug!(reward_id = %request.reward_id, "submitting redemption");
        let response = self.authorized(self.client.post(&url)).json(&request).send().await?;
        Self::decode(response).await
    }

    /// Staff stats summary
    pub async fn stats(&self) -> ClientResult<RewardStats> {
        let url = format!("{}/rewards/stats/summary", self.base_url);
        let response = self.authorized(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.bearer() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::api(status.as_u16(), extract_message(&body)))
        }
    }
}

/// Pull the server's `message` field out of an error body, falling back
/// to the raw body, then to a generic string.
fn extract_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// ============================================
// Request/Response Types
// ============================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Issuance request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRewardRequest {
    pub device_fingerprint: String,
    pub user_agent: String,
}

/// Issuance response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRewardResponse {
    pub reward_id: String,
}

/// Redemption request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    pub reward_id: String,
    pub device_fingerprint: String,
}

/// Redemption response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemResponse {
    pub discount: f64,
    pub message: String,
}
