//! Route definitions for chart collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::collections;
use crate::state::AppState;

/// Collection routes mounted at `/collections`.
///
/// ```text
/// GET    /             -> list_collections
/// POST   /             -> create_collection
/// GET    /{id}         -> get_collection
/// PUT    /{id}         -> update_collection
/// DELETE /{id}         -> delete_collection
/// GET    /{id}/charts  -> list_collection_charts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(collections::list_collections).post(collections::create_collection),
        )
        .route(
            "/{id}",
            get(collections::get_collection)
                .put(collections::update_collection)
                .delete(collections::delete_collection),
        )
        .route("/{id}/charts", get(collections::list_collection_charts))
}
