use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: graphlot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Notion API client, used to fetch database schemas.
    pub notion: Arc<graphlot_notion::NotionApi>,
}
