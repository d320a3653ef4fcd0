//! Column classification for external data-source schemas.
//!
//! Buckets a data source's fields into axis-eligible categories by their
//! declared type tag. The tag vocabulary is open (it belongs to the
//! upstream provider), so unrecognized tags are dropped silently rather
//! than treated as errors.

use serde::Serialize;

/// Type tags recognized as axis-eligible categories.
pub const TAG_STATUS: &str = "status";
pub const TAG_SELECT: &str = "select";
pub const TAG_MULTI_SELECT: &str = "multi_select";

/// Field names bucketed by axis category, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxisCandidates {
    pub status: Vec<String>,
    pub select: Vec<String>,
    pub multi_select: Vec<String>,
}

/// Bucket schema fields into axis-eligible categories.
///
/// Entries are visited in the given order and appended to the category
/// matching their type tag, preserving order and duplicates. Each entry
/// lands in at most one category (first match on its tag). An empty
/// schema yields all-empty sequences.
pub fn classify<'a, I>(schema: I) -> AxisCandidates
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut candidates = AxisCandidates::default();
    for (name, tag) in schema {
        match tag {
            TAG_STATUS => candidates.status.push(name.to_string()),
            TAG_SELECT => candidates.select.push(name.to_string()),
            TAG_MULTI_SELECT => candidates.multi_select.push(name.to_string()),
            _ => {}
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_yields_empty_categories() {
        let candidates = classify([]);
        assert_eq!(candidates, AxisCandidates::default());
    }

    #[test]
    fn preserves_schema_order_within_categories() {
        let candidates = classify([("a", "select"), ("b", "status"), ("c", "select")]);
        assert_eq!(candidates.select, vec!["a", "c"]);
        assert_eq!(candidates.status, vec!["b"]);
        assert!(candidates.multi_select.is_empty());
    }

    #[test]
    fn unrecognized_tags_are_dropped() {
        let candidates = classify([
            ("Name", "title"),
            ("Stage", "status"),
            ("Estimate", "number"),
            ("Due", "date"),
            ("Tags", "multi_select"),
            ("Notes", "rich_text"),
        ]);
        assert_eq!(candidates.status, vec!["Stage"]);
        assert_eq!(candidates.multi_select, vec!["Tags"]);
        assert!(candidates.select.is_empty());
    }

    #[test]
    fn recognized_entry_count_matches_category_union() {
        let schema = [
            ("a", "select"),
            ("b", "status"),
            ("c", "formula"),
            ("d", "multi_select"),
            ("e", "select"),
            ("f", "people"),
        ];
        let recognized = schema
            .iter()
            .filter(|(_, tag)| matches!(*tag, TAG_STATUS | TAG_SELECT | TAG_MULTI_SELECT))
            .count();
        let candidates = classify(schema);
        let union =
            candidates.status.len() + candidates.select.len() + candidates.multi_select.len();
        assert_eq!(union, recognized);
    }

    #[test]
    fn duplicate_field_names_are_kept() {
        let candidates = classify([("Stage", "select"), ("Stage", "select")]);
        assert_eq!(candidates.select, vec!["Stage", "Stage"]);
    }
}
