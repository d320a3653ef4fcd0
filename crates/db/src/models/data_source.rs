//! Data source models and DTOs.
//!
//! A data source is either a connected Notion database (`kind = "notion"`,
//! schema fetched live) or an uploaded file (`kind = "file"`, schema
//! captured at upload time into `schema_json`).

use graphlot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `data_sources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DataSource {
    pub id: DbId,
    pub name: String,
    /// `"notion"` or `"file"`.
    pub kind: String,
    pub notion_database_id: Option<String>,
    /// Ordered `[{name, type}, ...]` schema entries for file sources.
    pub schema_json: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a data source.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDataSource {
    pub name: String,
    pub kind: String,
    pub notion_database_id: Option<String>,
    pub schema_json: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_deserializes_notion_source() {
        let dto: CreateDataSource = serde_json::from_str(
            r#"{
                "name": "CRM Deals",
                "kind": "notion",
                "notion_database_id": "1534edf4c84480e28104c3a8017b216c"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.kind, "notion");
        assert!(dto.schema_json.is_none());
    }

    #[test]
    fn create_dto_deserializes_file_source_with_schema() {
        let dto: CreateDataSource = serde_json::from_str(
            r#"{
                "name": "Pipeline export",
                "kind": "file",
                "schema_json": [{"name": "Stage", "type": "status"}]
            }"#,
        )
        .unwrap();
        assert_eq!(dto.kind, "file");
        assert!(dto.schema_json.is_some());
    }
}
