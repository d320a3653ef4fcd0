//! Handlers for the chart type catalog.

use axum::response::IntoResponse;
use axum::Json;
use graphlot_core::chart_type::ChartType;
use graphlot_core::config::ChartConfig;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Catalog entry pairing a chart type with its default configuration.
#[derive(Debug, Serialize)]
pub struct ChartTypeEntry {
    pub chart_type: ChartType,
    pub defaults: &'static ChartConfig,
}

/// GET /api/v1/chart-types
///
/// List every chart type with its fully-populated default configuration.
/// Clients use this to render the chart editor before any override
/// exists.
pub async fn list_chart_types() -> AppResult<impl IntoResponse> {
    let entries: Vec<ChartTypeEntry> = ChartType::ALL
        .iter()
        .map(|&chart_type| ChartTypeEntry {
            chart_type,
            defaults: ChartConfig::defaults(chart_type),
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}
