//! Chart models and DTOs.
//!
//! The `config_override` column stores the user's partial configuration
//! verbatim. The effective configuration is recomputed from the chart
//! type's defaults on every read and never persisted.

use graphlot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `charts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chart {
    pub id: DbId,
    pub collection_id: DbId,
    pub name: String,
    /// String form of the chart type (`"area"`, `"bar"`, ...).
    pub chart_type: String,
    pub data_source_id: Option<DbId>,
    /// The stored partial override, merged onto defaults at read time.
    pub config_override: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a chart.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChart {
    pub collection_id: DbId,
    pub name: String,
    pub chart_type: String,
    pub data_source_id: Option<DbId>,
}

/// DTO for updating a chart. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChart {
    pub name: Option<String>,
    pub data_source_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_deserializes() {
        let dto: CreateChart = serde_json::from_str(
            r#"{
                "collection_id": "1534edf4-c844-80e2-8104-c3a8017b216c",
                "name": "Deals by stage",
                "chart_type": "donut"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.chart_type, "donut");
        assert!(dto.data_source_id.is_none());
    }

    #[test]
    fn update_dto_accepts_empty_payload() {
        let dto: UpdateChart = serde_json::from_str("{}").unwrap();
        assert!(dto.name.is_none());
        assert!(dto.data_source_id.is_none());
    }
}
