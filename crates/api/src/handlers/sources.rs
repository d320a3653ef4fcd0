//! Handlers for data sources and column classification.
//!
//! Classification is recomputed on every request: Notion sources fetch
//! the live property schema, file sources classify the schema captured
//! at upload time. Results are never cached.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use graphlot_core::columns::{self, AxisCandidates};
use graphlot_core::error::CoreError;
use graphlot_core::types::DbId;
use graphlot_core::validate;
use graphlot_db::models::data_source::{CreateDataSource, DataSource};
use graphlot_db::repositories::DataSourceRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Ordered schema entry accepted by the classify endpoints.
///
/// JSON objects do not reliably preserve key order, so classification
/// payloads are arrays of entries rather than a name-keyed map.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// GET /api/v1/sources
///
/// List all data sources, newest first.
pub async fn list_sources(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sources = DataSourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sources }))
}

/// POST /api/v1/sources
///
/// Create a data source. Notion sources must carry a database id, file
/// sources the schema captured at upload time.
pub async fn create_source(
    State(state): State<AppState>,
    Json(input): Json<CreateDataSource>,
) -> AppResult<impl IntoResponse> {
    validate::validate_source_name(&input.name)?;
    validate::validate_source_kind(&input.kind)?;
    validate::validate_source_consistency(
        &input.kind,
        input.notion_database_id.is_some(),
        input.schema_json.is_some(),
    )?;

    if let Some(schema) = &input.schema_json {
        // Reject a malformed schema at creation time instead of on every
        // later classification request.
        parse_schema_entries(schema)?;
    }

    let source = DataSourceRepo::create(&state.pool, &input).await?;

    tracing::info!(source_id = %source.id, kind = %source.kind, "Data source created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: source })))
}

/// GET /api/v1/sources/{id}
pub async fn get_source(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let source = DataSourceRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "data source",
            id,
        })?;
    Ok(Json(DataResponse { data: source }))
}

/// DELETE /api/v1/sources/{id}
pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DataSourceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "data source",
            id,
        }
        .into());
    }

    tracing::info!(source_id = %id, "Data source deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sources/{id}/columns
///
/// Fetch the source's schema and bucket its fields into axis-eligible
/// categories.
pub async fn list_source_columns(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let source = DataSourceRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "data source",
            id,
        })?;

    let candidates = classify_source(&state, &source).await?;
    Ok(Json(DataResponse { data: candidates }))
}

/// POST /api/v1/sources/classify
///
/// Classify a raw schema payload without persisting anything. Used by
/// clients to preview axis candidates before a source is saved.
pub async fn classify_schema(
    Json(entries): Json<Vec<SchemaEntry>>,
) -> AppResult<impl IntoResponse> {
    let candidates = columns::classify(
        entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.kind.as_str())),
    );
    Ok(Json(DataResponse { data: candidates }))
}

/// Classify a persisted source's schema by kind.
async fn classify_source(
    state: &AppState,
    source: &DataSource,
) -> AppResult<AxisCandidates> {
    match source.kind.as_str() {
        validate::KIND_NOTION => {
            let database_id = source.notion_database_id.as_deref().ok_or_else(|| {
                CoreError::Internal(format!(
                    "Notion data source {} has no stored database id",
                    source.id
                ))
            })?;
            let database = state.notion.get_database(database_id).await?;
            Ok(columns::classify(database.column_pairs()))
        }
        validate::KIND_FILE => {
            let schema = source.schema_json.as_ref().ok_or_else(|| {
                CoreError::Internal(format!(
                    "File data source {} has no stored schema",
                    source.id
                ))
            })?;
            let entries = parse_schema_entries(schema)?;
            Ok(columns::classify(
                entries
                    .iter()
                    .map(|entry| (entry.name.as_str(), entry.kind.as_str())),
            ))
        }
        other => Err(CoreError::Internal(format!(
            "Data source {} has invalid stored kind '{other}'",
            source.id
        ))
        .into()),
    }
}

/// Deserialize a stored or submitted schema into ordered entries.
fn parse_schema_entries(schema: &serde_json::Value) -> Result<Vec<SchemaEntry>, CoreError> {
    serde_json::from_value(schema.clone())
        .map_err(|e| CoreError::Validation(format!("Invalid schema: {e}")))
}
