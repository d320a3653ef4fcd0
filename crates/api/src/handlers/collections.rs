//! Handlers for chart collections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use graphlot_core::error::CoreError;
use graphlot_core::types::DbId;
use graphlot_core::validate;
use graphlot_db::models::collection::{CreateCollection, UpdateCollection};
use graphlot_db::repositories::{ChartRepo, CollectionRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/collections
///
/// List all collections, newest first.
pub async fn list_collections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let collections = CollectionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: collections }))
}

/// POST /api/v1/collections
///
/// Create a new collection.
pub async fn create_collection(
    State(state): State<AppState>,
    Json(input): Json<CreateCollection>,
) -> AppResult<impl IntoResponse> {
    validate::validate_collection_name(&input.name)?;

    let collection = CollectionRepo::create(&state.pool, &input).await?;

    tracing::info!(collection_id = %collection.id, name = %collection.name, "Collection created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: collection })))
}

/// GET /api/v1/collections/{id}
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let collection = CollectionRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "collection",
            id,
        })?;
    Ok(Json(DataResponse { data: collection }))
}

/// PUT /api/v1/collections/{id}
///
/// Update a collection's metadata. Missing fields keep their current values.
pub async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollection>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate::validate_collection_name(name)?;
    }

    let collection = CollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "collection",
            id,
        })?;

    tracing::info!(collection_id = %id, "Collection updated");

    Ok(Json(DataResponse { data: collection }))
}

/// DELETE /api/v1/collections/{id}
///
/// Delete a collection and (via cascade) its charts.
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CollectionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "collection",
            id,
        }
        .into());
    }

    tracing::info!(collection_id = %id, "Collection deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/collections/{id}/charts
///
/// List the charts in a collection, oldest first.
pub async fn list_collection_charts(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CollectionRepo::get(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "collection",
            id,
        })?;

    let charts = ChartRepo::list_by_collection(&state.pool, id).await?;
    Ok(Json(DataResponse { data: charts }))
}
