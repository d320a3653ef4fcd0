//! Opaque chart filter predicates.

use serde::{Deserialize, Serialize};

/// A filter predicate applied to a data series before rendering.
///
/// Treated as an opaque value by this crate: the operator vocabulary and
/// evaluation semantics belong to the rendering layer, which applies the
/// predicate against the data source's rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFilter {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}
