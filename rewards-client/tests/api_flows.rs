//! Integration tests for the rewards client flows
//!
//! These run the real `reqwest` client against an in-process axum stub
//! implementing the reward endpoints, including one-time redemption.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use rewards_client::{load_reward, redeem_input, AuthContext, ClientError, IssuanceFlow, RewardsClient};
use rewards_core::{IssuanceState, RewardId};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

const STAFF_TOKEN: &str = "staff-token";

#[derive(Default)]
struct Stub {
    rewards: HashMap<String, f64>,
    redeemed: HashSet<String>,
    issued: u32,
    /// Fingerprints received by the issuance endpoint
    generate_fingerprints: Vec<String>,
    /// (reward_id, device_fingerprint) pairs received by redemption
    redeem_requests: Vec<(String, String)>,
    /// When set, issuance is rejected with this message and status 429
    reject_generate: Option<String>,
}

type SharedStub = Arc<Mutex<Stub>>;

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", STAFF_TOKEN))
        .unwrap_or(false)
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "espresso" {
        (StatusCode::OK, Json(json!({ "token": STAFF_TOKEN })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    }
}

async fn generate(
    State(stub): State<SharedStub>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut stub = stub.lock().unwrap();
    if let Some(message) = &stub.reject_generate {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "message": message })),
        );
    }
    stub.generate_fingerprints
        .push(body["deviceFingerprint"].as_str().unwrap_or_default().to_string());
    stub.issued += 1;
    let reward_id = format!("CAFE-{:03}", stub.issued);
    stub.rewards.insert(reward_id.clone(), 20.0);
    (StatusCode::OK, Json(json!({ "rewardId": reward_id })))
}

async fn fetch(
    State(stub): State<SharedStub>,
    Path(reward_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let stub = stub.lock().unwrap();
    match stub.rewards.get(&reward_id) {
        Some(discount) => (
            StatusCode::OK,
            Json(json!({
                "rewardId": reward_id,
                "discount": discount,
                "expiresAt": (Utc::now() + Duration::days(7)).to_rfc3339(),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Reward not found" })),
        ),
    }
}

async fn redeem(
    State(stub): State<SharedStub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !bearer_ok(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        );
    }

    let reward_id = body["rewardId"].as_str().unwrap_or_default().to_string();
    let fingerprint = body["deviceFingerprint"].as_str().unwrap_or_default().to_string();

    let mut stub = stub.lock().unwrap();
    stub.redeem_requests.push((reward_id.clone(), fingerprint));

    let Some(&discount) = stub.rewards.get(&reward_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Reward not found" })),
        );
    };
    if !stub.redeemed.insert(reward_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Reward already redeemed" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "discount": discount, "message": "Redeemed" })),
    )
}

async fn stats(State(stub): State<SharedStub>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !bearer_ok(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthorized" })),
        );
    }
    let stub = stub.lock().unwrap();
    let total = stub.rewards.len() as u64;
    let redeemed = stub.redeemed.len() as u64;
    (
        StatusCode::OK,
        Json(json!({
            "total": total,
            "redeemed": redeemed,
            "pending": total - redeemed,
            "expired": 0,
            "redemptionRate": format!("{}%", if total == 0 { 0 } else { redeemed * 100 / total }),
        })),
    )
}

/// Spawn the stub server on an ephemeral port.
async fn start_stub() -> (String, SharedStub) {
    let stub: SharedStub = Arc::new(Mutex::new(Stub::default()));

    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/rewards/generate", post(generate))
        .route("/rewards/:reward_id", get(fetch))
        .route("/rewards/redeem", post(redeem))
        .route("/rewards/stats/summary", get(stats))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

fn anonymous_client(base_url: &str) -> RewardsClient {
    RewardsClient::new(base_url, Arc::new(AuthContext::anonymous())).unwrap()
}

// ============ Issuance ============

#[tokio::test]
async fn test_issuance_submits_24_hex_fingerprint() {
    let (base_url, stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    let mut flow = IssuanceFlow::new(&client);
    let reward_id = flow.run().await.unwrap();
    assert_eq!(reward_id.as_str(), "CAFE-001");
    assert_eq!(flow.state().reward_id().unwrap().as_str(), "CAFE-001");

    let stub = stub.lock().unwrap();
    let fingerprint = &stub.generate_fingerprints[0];
    assert_eq!(fingerprint.len(), 24);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_issuance_rejection_lands_in_error_and_retry_recovers() {
    let (base_url, stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    stub.lock().unwrap().reject_generate = Some("Too many rewards from this device".to_string());

    let mut flow = IssuanceFlow::new(&client);
    let err = flow.run().await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    // The server's message is passed through verbatim.
    assert_eq!(
        flow.state(),
        &IssuanceState::Error {
            message: "Too many rewards from this device".to_string()
        }
    );

    stub.lock().unwrap().reject_generate = None;
    let reward_id = flow.retry().await.unwrap();
    assert_eq!(reward_id.as_str(), "CAFE-001");
}

// ============ Display ============

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let (base_url, _stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    let mut flow = IssuanceFlow::new(&client);
    let reward_id = flow.run().await.unwrap();

    let first = load_reward(&client, &reward_id).await.unwrap();
    let second = load_reward(&client, &reward_id).await.unwrap();

    assert_eq!(first.discount, second.discount);
    assert_eq!(first.days_remaining, second.days_remaining);
    assert_eq!(first.days_remaining, 7);
    assert_eq!(
        first.qr_payload,
        r#"{"rewardId":"CAFE-001","discount":20.0}"#
    );
}

#[tokio::test]
async fn test_fetch_unknown_reward_surfaces_server_message() {
    let (base_url, _stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    let err = load_reward(&client, &RewardId::new("CAFE-999")).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Reward not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============ Redemption ============

#[tokio::test]
async fn test_end_to_end_issue_display_redeem_once() {
    let (base_url, stub) = start_stub().await;
    let client = anonymous_client(&base_url);
    client.login("staff@cafe.test", "espresso").await.unwrap();

    let mut flow = IssuanceFlow::new(&client);
    let reward_id = flow.run().await.unwrap();
    let view = load_reward(&client, &reward_id).await.unwrap();
    assert_eq!(view.discount, 20.0);

    // Staff scans the QR payload.
    let first = redeem_input(&client, &view.qr_payload).await.unwrap();
    assert!(first.success);
    assert_eq!(first.discount, Some(20.0));
    assert_eq!(first.message, "Redeemed");

    {
        let stub = stub.lock().unwrap();
        let (sent_id, staff_fp) = &stub.redeem_requests[0];
        assert_eq!(sent_id, "CAFE-001");
        assert_eq!(staff_fp.len(), 24);
    }

    // Second attempt with the same reward must fail with the server's
    // message, leaving the earlier success untouched.
    let second = redeem_input(&client, &view.qr_payload).await.unwrap();
    assert!(!second.success);
    assert_eq!(second.discount, None);
    assert_eq!(second.message, "Reward already redeemed");
    assert!(first.success);
    assert_eq!(first.discount, Some(20.0));
}

#[tokio::test]
async fn test_raw_input_is_sent_verbatim_as_identifier() {
    let (base_url, stub) = start_stub().await;
    let client = anonymous_client(&base_url);
    client.login("staff@cafe.test", "espresso").await.unwrap();

    let outcome = redeem_input(&client, "not-json").await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.message, "Reward not found");

    let stub = stub.lock().unwrap();
    assert_eq!(stub.redeem_requests[0].0, "not-json");
}

#[tokio::test]
async fn test_json_payload_identifier_extracted_discount_ignored() {
    let (base_url, stub) = start_stub().await;
    let client = anonymous_client(&base_url);
    client.login("staff@cafe.test", "espresso").await.unwrap();

    // The embedded discount is display-only; only the id reaches the wire.
    let _ = redeem_input(&client, r#"{"rewardId":"R123","discount":15}"#)
        .await
        .unwrap();

    let stub = stub.lock().unwrap();
    assert_eq!(stub.redeem_requests[0].0, "R123");
}

// ============ Auth ============

#[tokio::test]
async fn test_redeem_without_login_surfaces_401() {
    let (base_url, _stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    let err = redeem_input(&client, "CAFE-001").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_bearer_present_after_login_absent_after_logout() {
    let (base_url, _stub) = start_stub().await;
    let auth = Arc::new(AuthContext::anonymous());
    let client = RewardsClient::new(&base_url, auth.clone()).unwrap();

    client.login("staff@cafe.test", "espresso").await.unwrap();
    assert!(auth.is_authenticated());
    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 0);

    auth.clear();
    let err = client.stats().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_bad_credentials_rejected() {
    let (base_url, _stub) = start_stub().await;
    let client = anonymous_client(&base_url);

    let err = client.login("staff@cafe.test", "wrong").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============ Stats ============

#[tokio::test]
async fn test_stats_reflect_redemptions() {
    let (base_url, _stub) = start_stub().await;
    let client = anonymous_client(&base_url);
    client.login("staff@cafe.test", "espresso").await.unwrap();

    let mut flow = IssuanceFlow::new(&client);
    let reward_id = flow.run().await.unwrap();
    redeem_input(&client, reward_id.as_str()).await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.redeemed, 1);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.redemption_rate, "100%");
}
