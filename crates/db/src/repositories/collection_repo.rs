//! Repository for the `collections` table.

use graphlot_core::types::DbId;
use sqlx::PgPool;

use crate::models::collection::{Collection, CreateCollection, UpdateCollection};

/// Column list for `collections` queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides data access for chart collections.
pub struct CollectionRepo;

impl CollectionRepo {
    /// List all collections, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collections ORDER BY created_at DESC");
        sqlx::query_as::<_, Collection>(&query).fetch_all(pool).await
    }

    /// Get a collection by id.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collections WHERE id = $1");
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new collection.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let query = format!(
            "INSERT INTO collections (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_one(pool)
            .await
    }

    /// Update a collection. Missing fields keep their current values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateCollection,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!(
            "UPDATE collections SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a collection and (via cascade) its charts.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
