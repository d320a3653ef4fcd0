pub mod chart_types;
pub mod charts;
pub mod collections;
pub mod health;
pub mod sources;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /collections                      list, create
/// /collections/{id}                 get, update, delete
/// /collections/{id}/charts          charts in a collection
///
/// /charts                           create
/// /charts/{id}                      get, update, delete
/// /charts/{id}/config               effective config (GET), stored override (PUT)
/// /charts/path/{token}              resolve an encoded path token
///
/// /chart-types                      chart types with default configurations
///
/// /sources                          list, create
/// /sources/{id}                     get, delete
/// /sources/{id}/columns             classified axis candidates
/// /sources/classify                 classify a raw schema payload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/collections", collections::router())
        .nest("/charts", charts::router())
        .nest("/chart-types", chart_types::router())
        .nest("/sources", sources::router())
}
