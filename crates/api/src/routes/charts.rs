//! Route definitions for charts and their configurations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::charts;
use crate::state::AppState;

/// Chart routes mounted at `/charts`.
///
/// ```text
/// POST   /              -> create_chart
/// GET    /{id}          -> get_chart
/// PUT    /{id}          -> update_chart
/// DELETE /{id}          -> delete_chart
/// GET    /{id}/config   -> get_chart_config (effective, merged)
/// PUT    /{id}/config   -> update_chart_config (stored override)
/// GET    /path/{token}  -> resolve_chart_path
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(charts::create_chart))
        .route(
            "/{id}",
            get(charts::get_chart)
                .put(charts::update_chart)
                .delete(charts::delete_chart),
        )
        .route(
            "/{id}/config",
            get(charts::get_chart_config).put(charts::update_chart_config),
        )
        .route("/path/{token}", get(charts::resolve_chart_path))
}
