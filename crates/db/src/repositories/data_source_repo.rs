//! Repository for the `data_sources` table.

use graphlot_core::types::DbId;
use sqlx::PgPool;

use crate::models::data_source::{CreateDataSource, DataSource};

/// Column list for `data_sources` queries.
const COLUMNS: &str = "\
    id, name, kind, notion_database_id, schema_json, created_at, updated_at";

/// Provides data access for data sources.
pub struct DataSourceRepo;

impl DataSourceRepo {
    /// List all data sources, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DataSource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_sources ORDER BY created_at DESC");
        sqlx::query_as::<_, DataSource>(&query).fetch_all(pool).await
    }

    /// Get a data source by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<DataSource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM data_sources WHERE id = $1");
        sqlx::query_as::<_, DataSource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new data source.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateDataSource,
    ) -> Result<DataSource, sqlx::Error> {
        let query = format!(
            "INSERT INTO data_sources (name, kind, notion_database_id, schema_json) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DataSource>(&query)
            .bind(&dto.name)
            .bind(&dto.kind)
            .bind(&dto.notion_database_id)
            .bind(&dto.schema_json)
            .fetch_one(pool)
            .await
    }

    /// Delete a data source. Charts referencing it fall back to having
    /// no source (`ON DELETE SET NULL`). Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM data_sources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
