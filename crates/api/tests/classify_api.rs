//! Integration tests for the schema classification endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: classification preserves schema order within categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn classify_preserves_schema_order() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/sources/classify",
        json!([
            {"name": "Priority", "type": "select"},
            {"name": "Stage", "type": "status"},
            {"name": "Tags", "type": "multi_select"},
            {"name": "Estimate", "type": "number"},
            {"name": "Team", "type": "select"},
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["select"], json!(["Priority", "Team"]));
    assert_eq!(json["data"]["status"], json!(["Stage"]));
    assert_eq!(json["data"]["multi_select"], json!(["Tags"]));
}

// ---------------------------------------------------------------------------
// Test: unrecognized type tags are dropped, not errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn classify_drops_unrecognized_tags() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/sources/classify",
        json!([
            {"name": "Name", "type": "title"},
            {"name": "Due", "type": "date"},
            {"name": "Done", "type": "checkbox"},
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["select"], json!([]));
    assert_eq!(json["data"]["status"], json!([]));
    assert_eq!(json["data"]["multi_select"], json!([]));
}

// ---------------------------------------------------------------------------
// Test: empty schema yields all-empty categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn classify_empty_schema() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/sources/classify", json!([])).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!({"status": [], "select": [], "multi_select": []})
    );
}

// ---------------------------------------------------------------------------
// Test: malformed entries are rejected with 400-class errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn classify_rejects_malformed_payload() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/sources/classify",
        json!([{"name": "Stage"}]),
    )
    .await;

    // Missing "type" fails deserialization at the extractor.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
