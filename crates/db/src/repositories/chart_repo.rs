//! Repository for the `charts` table.
//!
//! The `config_override` column holds the user's partial configuration
//! as stored; merging onto chart-type defaults happens in the core crate
//! at read time.

use graphlot_core::types::DbId;
use sqlx::PgPool;

use crate::models::chart::{Chart, CreateChart, UpdateChart};

/// Column list for `charts` queries.
const COLUMNS: &str = "\
    id, collection_id, name, chart_type, data_source_id, config_override, \
    created_at, updated_at";

/// Provides data access for charts.
pub struct ChartRepo;

impl ChartRepo {
    /// Get a chart by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Chart>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM charts WHERE id = $1");
        sqlx::query_as::<_, Chart>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the charts in a collection, oldest first.
    ///
    /// Creation order doubles as the tie-break for path-token resolution
    /// when two charts slugify to the same name.
    pub async fn list_by_collection(
        pool: &PgPool,
        collection_id: DbId,
    ) -> Result<Vec<Chart>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM charts WHERE collection_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Chart>(&query)
            .bind(collection_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new chart with an empty configuration override.
    pub async fn create(pool: &PgPool, dto: &CreateChart) -> Result<Chart, sqlx::Error> {
        let query = format!(
            "INSERT INTO charts (collection_id, name, chart_type, data_source_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chart>(&query)
            .bind(dto.collection_id)
            .bind(&dto.name)
            .bind(&dto.chart_type)
            .bind(dto.data_source_id)
            .fetch_one(pool)
            .await
    }

    /// Update a chart's metadata. Missing fields keep their current values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateChart,
    ) -> Result<Option<Chart>, sqlx::Error> {
        let query = format!(
            "UPDATE charts SET \
                 name = COALESCE($2, name), \
                 data_source_id = COALESCE($3, data_source_id), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chart>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.data_source_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a chart's stored configuration override.
    pub async fn update_config_override(
        pool: &PgPool,
        id: DbId,
        config_override: &serde_json::Value,
    ) -> Result<Option<Chart>, sqlx::Error> {
        let query = format!(
            "UPDATE charts SET \
                 config_override = $2, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chart>(&query)
            .bind(id)
            .bind(config_override)
            .fetch_optional(pool)
            .await
    }

    /// Delete a chart. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM charts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
