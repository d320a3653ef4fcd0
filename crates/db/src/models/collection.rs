//! Chart collection models and DTOs.

use graphlot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `collections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collection {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollection {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a collection. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCollection {
    pub name: Option<String>,
    pub description: Option<String>,
}
