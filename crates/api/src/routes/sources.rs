//! Route definitions for data sources and column classification.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sources;
use crate::state::AppState;

/// Data source routes mounted at `/sources`.
///
/// ```text
/// GET    /               -> list_sources
/// POST   /               -> create_source
/// GET    /{id}           -> get_source
/// DELETE /{id}           -> delete_source
/// GET    /{id}/columns   -> list_source_columns
/// POST   /classify       -> classify_schema
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sources::list_sources).post(sources::create_source))
        .route(
            "/{id}",
            get(sources::get_source).delete(sources::delete_source),
        )
        .route("/{id}/columns", get(sources::list_source_columns))
        .route("/classify", post(sources::classify_schema))
}
