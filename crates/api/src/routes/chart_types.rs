//! Route definitions for the chart type catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::chart_types;
use crate::state::AppState;

/// Chart type catalog routes mounted at `/chart-types`.
///
/// ```text
/// GET / -> list_chart_types
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(chart_types::list_chart_types))
}
