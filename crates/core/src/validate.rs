//! Manual validation helpers for user-supplied input.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Name limits
   -------------------------------------------------------------------------- */

/// Maximum length for a collection name.
pub const MAX_COLLECTION_NAME_LEN: usize = 200;

/// Maximum length for a chart name.
pub const MAX_CHART_NAME_LEN: usize = 200;

/// Maximum length for a data source name.
pub const MAX_SOURCE_NAME_LEN: usize = 200;

/* --------------------------------------------------------------------------
   Data source kinds
   -------------------------------------------------------------------------- */

/// Notion-backed data source; the schema is fetched live from the API.
pub const KIND_NOTION: &str = "notion";

/// File-backed data source; the schema was captured at upload time.
pub const KIND_FILE: &str = "file";

/// All valid data source kinds.
pub const VALID_SOURCE_KINDS: &[&str] = &[KIND_NOTION, KIND_FILE];

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a collection name: non-empty and within length limit.
pub fn validate_collection_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Collection name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_COLLECTION_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Collection name too long: {} chars (max {MAX_COLLECTION_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a chart name: non-empty and within length limit.
pub fn validate_chart_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Chart name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_CHART_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Chart name too long: {} chars (max {MAX_CHART_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a data source name: non-empty and within length limit.
pub fn validate_source_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Data source name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_SOURCE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Data source name too long: {} chars (max {MAX_SOURCE_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate that `kind` is one of the allowed data source kinds.
pub fn validate_source_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_SOURCE_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid data source kind '{kind}'. Must be one of: {}",
            VALID_SOURCE_KINDS.join(", ")
        )))
    }
}

/// Validate kind-field consistency for a data source.
///
/// - `"notion"` sources **require** a database id.
/// - `"file"` sources **require** a captured schema.
pub fn validate_source_consistency(
    kind: &str,
    has_database_id: bool,
    has_schema: bool,
) -> Result<(), CoreError> {
    match kind {
        KIND_NOTION => {
            if !has_database_id {
                return Err(CoreError::Validation(
                    "Notion data sources require a notion_database_id".to_string(),
                ));
            }
        }
        KIND_FILE => {
            if !has_schema {
                return Err(CoreError::Validation(
                    "File data sources require a schema_json".to_string(),
                ));
            }
        }
        _ => {
            // Caller should have validated kind first, but be defensive.
            return Err(CoreError::Validation(format!(
                "Invalid data source kind '{kind}'"
            )));
        }
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    // --- Name validation ---

    #[test]
    fn collection_name_accepts_valid() {
        assert!(validate_collection_name("Sales Dashboards").is_ok());
    }

    #[test]
    fn collection_name_rejects_empty_and_whitespace() {
        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("   ").is_err());
    }

    #[test]
    fn chart_name_rejects_too_long() {
        let long = "x".repeat(MAX_CHART_NAME_LEN + 1);
        let err = validate_chart_name(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn source_name_accepts_valid() {
        assert!(validate_source_name("CRM Deals").is_ok());
    }

    // --- Kind validation ---

    #[test]
    fn source_kind_accepts_known_kinds() {
        assert!(validate_source_kind("notion").is_ok());
        assert!(validate_source_kind("file").is_ok());
    }

    #[test]
    fn source_kind_rejects_unknown() {
        let err = validate_source_kind("airtable").unwrap_err();
        assert!(err.to_string().contains("Invalid data source kind"));
    }

    // --- Kind-field consistency ---

    #[test]
    fn notion_kind_requires_database_id() {
        assert!(validate_source_consistency("notion", true, false).is_ok());
        let err = validate_source_consistency("notion", false, false).unwrap_err();
        assert!(err.to_string().contains("notion_database_id"));
    }

    #[test]
    fn file_kind_requires_schema() {
        assert!(validate_source_consistency("file", false, true).is_ok());
        let err = validate_source_consistency("file", false, false).unwrap_err();
        assert!(err.to_string().contains("schema_json"));
    }
}
