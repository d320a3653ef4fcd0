//! Integration tests for path token resolution.
//!
//! Only malformed-token behaviour is exercised here; a well-formed token
//! requires database rows to resolve against.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: a short token is rejected with 400, not a panic
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_token_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/charts/path/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid path");
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: a bare UUID with no name separator is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bare_uuid_token_returns_400() {
    let app = common::build_test_app();
    let response = get(
        app,
        "/api/v1/charts/path/1534edf4-c844-80e2-8104-c3a8017b216c",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: a token with a non-UUID prefix is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_uuid_prefix_returns_400() {
    let app = common::build_test_app();
    // Exactly UUID-width of non-hex characters, then a plausible name.
    let token = format!("{}-revenue", "z".repeat(36));
    let response = get(app, &format!("/api/v1/charts/path/{token}")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
