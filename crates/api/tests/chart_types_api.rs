//! Integration tests for the chart type catalog endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /api/v1/chart-types lists all six chart types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chart_types_lists_all_six_types() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/chart-types").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().expect("data must be an array");
    assert_eq!(entries.len(), 6);

    let types: Vec<&str> = entries
        .iter()
        .map(|entry| entry["chart_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec!["area", "bar", "donut", "radar", "heatmap", "radial"]
    );
}

// ---------------------------------------------------------------------------
// Test: default configurations are fully populated
// ---------------------------------------------------------------------------

#[tokio::test]
async fn default_configs_are_fully_populated() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/chart-types").await;
    let json = body_json(response).await;

    for entry in json["data"].as_array().unwrap() {
        let defaults = &entry["defaults"];
        let chart_type = entry["chart_type"].as_str().unwrap();

        // The tagged union carries its chart type.
        assert_eq!(defaults["type"], chart_type);

        // Shared style fields are present and populated on every type.
        assert!(defaults["background_color"]["r"].is_u64(), "{chart_type}");
        assert!(defaults["text_color"]["a"].is_number(), "{chart_type}");
        assert!(defaults["grid_kind"].is_string(), "{chart_type}");
        assert!(defaults["tooltip_enabled"].is_boolean(), "{chart_type}");
        assert!(defaults["legend_enabled"].is_boolean(), "{chart_type}");
        assert!(
            !defaults["color_palette"].as_array().unwrap().is_empty(),
            "{chart_type}"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: type-specific fields appear only on their variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn type_specific_fields_match_variants() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/chart-types").await;
    let json = body_json(response).await;

    for entry in json["data"].as_array().unwrap() {
        let defaults = &entry["defaults"];
        match entry["chart_type"].as_str().unwrap() {
            "area" | "radar" => {
                assert!(defaults["y_axis"].is_string());
                assert!(defaults["cumulative"].is_boolean());
                assert!(defaults["bar_gap"].is_null());
            }
            "bar" => {
                assert!(defaults["y_axis"].is_string());
                assert!(defaults["bar_gap"].is_u64());
                assert!(defaults["bar_size"].is_u64());
                assert!(defaults["group_by"].is_string());
            }
            "donut" | "radial" => {
                assert!(defaults["x_axis"].is_string());
                assert!(defaults["sort_by"].is_string());
                assert!(defaults["y_axis"].is_null());
            }
            "heatmap" => {
                assert!(defaults["x_axis"].is_null());
                assert!(defaults["y_axis"].is_null());
            }
            other => panic!("unexpected chart type {other}"),
        }
    }
}
