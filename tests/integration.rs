//! Integration tests for the salary engine HTTP API.
//!
//! This test suite drives the router the way a form would:
//! - Mode table listing
//! - Derivation with and without tax included
//! - Session transitions across modes, toggles and keystrokes
//! - Rejected input and unknown modes
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{create_router, AppState};
use salary_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn request(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_session(session: Value, action: Value) -> (StatusCode, Value) {
    request(
        create_router_for_test(),
        "POST",
        "/session",
        Some(json!({ "session": session, "action": action })),
    )
    .await
}

fn assert_figure(figures: &Value, field: &str, expected: &str) {
    let actual = decimal(figures[field].as_str().unwrap());
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn initial_session() -> Value {
    json!({ "mode_id": 1, "tax_included": false, "amount": 0 })
}

// =============================================================================
// Mode table
// =============================================================================

#[tokio::test]
async fn test_modes_lists_four_modes_in_order() {
    let (status, body) = request(create_router_for_test(), "GET", "/modes", None).await;

    assert_eq!(status, StatusCode::OK);
    let units: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["rate_unit"].as_str().unwrap())
        .collect();
    assert_eq!(units, vec!["monthly", "statutory_minimum", "daily", "hourly"]);
    assert_eq!(body[2]["unit_suffix"], "в день");
    assert!(body[1]["hint"].as_str().unwrap().starts_with("МРОТ"));
}

// =============================================================================
// Derivation
// =============================================================================

#[tokio::test]
async fn test_derive_tax_included_100000() {
    let (status, body) = request(
        create_router_for_test(),
        "POST",
        "/derive",
        Some(json!({ "mode_id": 1, "amount": 100000, "tax_included": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_figure(&body["figures"], "take_home", "87000");
    assert_figure(&body["figures"], "tax_amount", "13000");
    assert_figure(&body["figures"], "employer_cost", "100000");
}

#[tokio::test]
async fn test_derive_tax_excluded_100000() {
    let (status, body) = request(
        create_router_for_test(),
        "POST",
        "/derive",
        Some(json!({ "mode_id": 1, "amount": 100000, "tax_included": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_figure(&body["figures"], "take_home", "100000");
    assert_figure(&body["figures"], "tax_amount", "13000");
    assert_figure(&body["figures"], "employer_cost", "113000");
}

#[tokio::test]
async fn test_derive_zero_amount_for_every_mode() {
    for mode_id in 1..=4 {
        for tax_included in [true, false] {
            let (status, body) = request(
                create_router_for_test(),
                "POST",
                "/derive",
                Some(json!({ "mode_id": mode_id, "amount": 0, "tax_included": tax_included })),
            )
            .await;

            assert_eq!(status, StatusCode::OK);
            assert_figure(&body["figures"], "take_home", "0");
            assert_figure(&body["figures"], "tax_amount", "0");
            assert_figure(&body["figures"], "employer_cost", "0");
        }
    }
}

#[tokio::test]
async fn test_derive_tax_is_mode_independent() {
    let mut taxes = Vec::new();
    for mode_id in 1..=4 {
        let (_, body) = request(
            create_router_for_test(),
            "POST",
            "/derive",
            Some(json!({ "mode_id": mode_id, "amount": 4321 })),
        )
        .await;
        taxes.push(decimal(body["figures"]["tax_amount"].as_str().unwrap()));
    }
    assert!(taxes.iter().all(|t| *t == decimal("561.73")));
}

#[tokio::test]
async fn test_derive_unknown_mode() {
    let (status, body) = request(
        create_router_for_test(),
        "POST",
        "/derive",
        Some(json!({ "mode_id": 5, "amount": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MODE_NOT_FOUND");
}

#[tokio::test]
async fn test_derive_wrong_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/derive")
                .body(Body::from(json!({ "mode_id": 1, "amount": 1 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

// =============================================================================
// Session transitions
// =============================================================================

#[tokio::test]
async fn test_session_typing_grouped_amount() {
    let (status, body) = post_session(
        initial_session(),
        json!({ "type": "input_changed", "text": "1\u{a0}234\u{a0}567" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);
    assert_eq!(body["session"]["amount"], 1234567);
    assert_eq!(body["view"]["input_text"], "1\u{a0}234\u{a0}567");
}

#[tokio::test]
async fn test_session_malformed_input_retains_amount() {
    for text in ["12a", "-5", "3.5"] {
        let session = json!({ "mode_id": 1, "tax_included": false, "amount": 777 });
        let (status, body) =
            post_session(session.clone(), json!({ "type": "input_changed", "text": text })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accepted"], false);
        assert_eq!(body["rejection"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["session"], session);
        assert_eq!(body["view"]["input_text"], "777");
    }
}

#[tokio::test]
async fn test_session_over_long_input_is_rejected() {
    let (_, body) = post_session(
        initial_session(),
        json!({ "type": "input_changed", "text": "123456789012345" }),
    )
    .await;

    assert_eq!(body["accepted"], false);
    assert_eq!(body["session"]["amount"], 0);
}

#[tokio::test]
async fn test_session_clearing_input() {
    let (_, body) = post_session(
        json!({ "mode_id": 1, "tax_included": false, "amount": 50000 }),
        json!({ "type": "input_changed", "text": "" }),
    )
    .await;

    assert_eq!(body["accepted"], true);
    assert_eq!(body["session"]["amount"], 0);
    assert_eq!(body["view"]["input_text"], "");
    assert!(body["view"].get("breakdown").is_none());
}

#[tokio::test]
async fn test_session_toggle_tax_updates_breakdown() {
    let (_, body) = post_session(
        json!({ "mode_id": 1, "tax_included": false, "amount": 100000 }),
        json!({ "type": "set_tax_included", "included": true }),
    )
    .await;

    assert_eq!(body["session"]["tax_included"], true);
    let breakdown = &body["view"]["breakdown"];
    assert_figure(breakdown, "take_home", "87000");
    assert_figure(breakdown, "tax_amount", "13000");
    assert_figure(breakdown, "employer_cost", "100000");
}

#[tokio::test]
async fn test_session_breakdown_only_for_monthly() {
    for mode_id in [2, 3, 4] {
        let (_, body) = post_session(
            json!({ "mode_id": 1, "tax_included": false, "amount": 100000 }),
            json!({ "type": "select_mode", "mode_id": mode_id }),
        )
        .await;

        assert_eq!(body["session"]["mode_id"], mode_id);
        assert_eq!(body["session"]["amount"], 100000);
        assert!(body["view"].get("breakdown").is_none());
    }
}

#[tokio::test]
async fn test_session_statutory_minimum_hides_amount_field() {
    let (_, body) = post_session(
        initial_session(),
        json!({ "type": "select_mode", "mode_id": 2 }),
    )
    .await;

    assert_eq!(body["view"]["amount_input_visible"], false);
}

#[tokio::test]
async fn test_session_hourly_unit_suffix() {
    let (_, body) = post_session(
        initial_session(),
        json!({ "type": "select_mode", "mode_id": 4 }),
    )
    .await;

    assert_eq!(body["view"]["unit_suffix"], "в час");
    assert_eq!(body["view"]["amount_input_visible"], true);
}

#[tokio::test]
async fn test_session_unknown_mode_in_body_is_malformed() {
    let (status, body) = post_session(
        json!({ "mode_id": 9, "tax_included": false, "amount": 0 }),
        json!({ "type": "set_tax_included", "included": true }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_session_missing_action() {
    let (status, body) = request(
        create_router_for_test(),
        "POST",
        "/session",
        Some(json!({ "session": initial_session() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
