//! Handlers for charts and their configurations.
//!
//! The stored override is the persisted unit: `GET .../config` merges it
//! onto the chart type's defaults on every read, and `PUT .../config`
//! validates and stores the override verbatim, never the merged result.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use graphlot_core::chart_type::ChartType;
use graphlot_core::config::ChartConfig;
use graphlot_core::error::CoreError;
use graphlot_core::overrides;
use graphlot_core::slug;
use graphlot_core::types::DbId;
use graphlot_core::validate;
use graphlot_db::models::chart::{Chart, CreateChart, UpdateChart};
use graphlot_db::repositories::{ChartRepo, CollectionRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Chart payload enriched with its encoded URL path token.
#[derive(Debug, Serialize)]
pub struct ChartWithPath {
    #[serde(flatten)]
    pub chart: Chart,
    /// Token for `GET /charts/path/{token}`, encoding the collection id
    /// and the slugified chart name.
    pub path: String,
}

fn with_path(chart: Chart) -> ChartWithPath {
    let path = slug::encode_path(chart.collection_id, &chart.name);
    ChartWithPath { chart, path }
}

/// Parse a chart row's stored type tag.
///
/// The value was validated on write, so a parse failure here means the
/// row is corrupt and surfaces as an internal error rather than a 400.
fn stored_chart_type(chart: &Chart) -> Result<ChartType, AppError> {
    ChartType::parse(&chart.chart_type).map_err(|_| {
        CoreError::Internal(format!(
            "Chart {} has invalid stored chart_type '{}'",
            chart.id, chart.chart_type
        ))
        .into()
    })
}

/// POST /api/v1/charts
///
/// Create a chart in a collection with an empty configuration override.
pub async fn create_chart(
    State(state): State<AppState>,
    Json(input): Json<CreateChart>,
) -> AppResult<impl IntoResponse> {
    validate::validate_chart_name(&input.name)?;
    ChartType::parse(&input.chart_type)?;

    CollectionRepo::get(&state.pool, input.collection_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "collection",
            id: input.collection_id,
        })?;

    let chart = ChartRepo::create(&state.pool, &input).await?;

    tracing::info!(
        chart_id = %chart.id,
        collection_id = %chart.collection_id,
        chart_type = %chart.chart_type,
        "Chart created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: with_path(chart),
        }),
    ))
}

/// GET /api/v1/charts/{id}
pub async fn get_chart(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = ChartRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "chart", id })?;
    Ok(Json(DataResponse {
        data: with_path(chart),
    }))
}

/// PUT /api/v1/charts/{id}
///
/// Update a chart's metadata. Missing fields keep their current values.
pub async fn update_chart(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChart>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate::validate_chart_name(name)?;
    }

    let chart = ChartRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "chart", id })?;

    tracing::info!(chart_id = %id, "Chart updated");

    Ok(Json(DataResponse {
        data: with_path(chart),
    }))
}

/// DELETE /api/v1/charts/{id}
pub async fn delete_chart(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ChartRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "chart", id }.into());
    }

    tracing::info!(chart_id = %id, "Chart deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/charts/{id}/config
///
/// Recompute the effective configuration: the chart type's defaults with
/// the stored override merged on top. Every field is populated.
pub async fn get_chart_config(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = ChartRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "chart", id })?;

    let chart_type = stored_chart_type(&chart)?;

    // The override was validated on write; failure here means the stored
    // payload no longer matches the config shape.
    let config = ChartConfig::effective(chart_type, &chart.config_override).map_err(|e| {
        CoreError::Internal(format!("Chart {id} has an unreadable stored override: {e}"))
    })?;

    Ok(Json(DataResponse { data: config }))
}

/// PUT /api/v1/charts/{id}/config
///
/// Replace the stored configuration override. The payload must
/// deserialize as an override for the chart's type; it is stored
/// verbatim.
pub async fn update_chart_config(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let chart = ChartRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "chart", id })?;

    let chart_type = stored_chart_type(&chart)?;
    overrides::validate_override(chart_type, &input)?;

    let updated = ChartRepo::update_config_override(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "chart", id })?;

    tracing::info!(chart_id = %id, chart_type = %chart_type, "Chart configuration override updated");

    Ok(Json(DataResponse {
        data: with_path(updated),
    }))
}

/// GET /api/v1/charts/path/{token}
///
/// Resolve an encoded collection+chart path token to the chart it names.
/// A malformed token is a 400 (`"Invalid path"`); a well-formed token
/// naming no chart is a 404.
pub async fn resolve_chart_path(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let parts =
        slug::decode_path(&token).ok_or_else(|| AppError::BadRequest("Invalid path".to_string()))?;

    let charts = ChartRepo::list_by_collection(&state.pool, parts.id).await?;
    let chart = charts
        .into_iter()
        .find(|chart| slug::slugify(&chart.name) == parts.name)
        .ok_or(CoreError::NotFoundByName {
            entity: "chart",
            name: parts.name,
        })?;

    Ok(Json(DataResponse {
        data: with_path(chart),
    }))
}
