//! Partial configuration overrides and the merge onto defaults.
//!
//! A stored override mirrors its chart type's configuration shape with
//! every field optional. Merging is a field-by-field shallow override: a
//! field present in the override wins, an absent field falls back to the
//! default. Sequence fields (`color_palette`, `filters`) are replaced
//! wholesale when present, never merged element-wise. Unknown keys in an
//! override payload are ignored.

use serde::Deserialize;

use crate::chart_type::{ChartType, GridKind, SortOrder};
use crate::color::RgbaColor;
use crate::config::{
    BarChartConfig, ChartConfig, ChartStyle, HeatmapChartConfig, SingleAxisChartConfig,
    XyChartConfig,
};
use crate::error::CoreError;
use crate::filter::ChartFilter;

/// Partial override of [`ChartStyle`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartStyleOverride {
    pub background_color: Option<RgbaColor>,
    pub text_color: Option<RgbaColor>,
    pub grid_color: Option<RgbaColor>,
    pub grid_kind: Option<GridKind>,
    pub color_palette: Option<Vec<RgbaColor>>,
    pub tooltip_enabled: Option<bool>,
    pub label_enabled: Option<bool>,
    pub legend_enabled: Option<bool>,
    pub has_border: Option<bool>,
}

/// Partial override of [`XyChartConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XyChartOverride {
    #[serde(flatten)]
    pub style: ChartStyleOverride,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub sort_x: Option<SortOrder>,
    pub sort_y: Option<SortOrder>,
    pub omit_zero_values: Option<bool>,
    pub cumulative: Option<bool>,
    pub filters: Option<Vec<ChartFilter>>,
}

/// Partial override of [`BarChartConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarChartOverride {
    #[serde(flatten)]
    pub xy: XyChartOverride,
    pub group_by: Option<String>,
    pub bar_gap: Option<i32>,
    pub bar_size: Option<i32>,
}

/// Partial override of [`SingleAxisChartConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingleAxisChartOverride {
    #[serde(flatten)]
    pub style: ChartStyleOverride,
    pub x_axis: Option<String>,
    pub sort_by: Option<SortOrder>,
}

/// Partial override of [`HeatmapChartConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeatmapChartOverride {
    #[serde(flatten)]
    pub style: ChartStyleOverride,
}

impl ChartStyle {
    /// Apply an override, field by field.
    pub fn merged(&self, ovr: &ChartStyleOverride) -> ChartStyle {
        ChartStyle {
            background_color: ovr.background_color.unwrap_or(self.background_color),
            text_color: ovr.text_color.unwrap_or(self.text_color),
            grid_color: ovr.grid_color.unwrap_or(self.grid_color),
            grid_kind: ovr.grid_kind.unwrap_or(self.grid_kind),
            color_palette: ovr
                .color_palette
                .clone()
                .unwrap_or_else(|| self.color_palette.clone()),
            tooltip_enabled: ovr.tooltip_enabled.unwrap_or(self.tooltip_enabled),
            label_enabled: ovr.label_enabled.unwrap_or(self.label_enabled),
            legend_enabled: ovr.legend_enabled.unwrap_or(self.legend_enabled),
            has_border: ovr.has_border.unwrap_or(self.has_border),
        }
    }
}

impl XyChartConfig {
    /// Apply an override, field by field.
    pub fn merged(&self, ovr: &XyChartOverride) -> XyChartConfig {
        XyChartConfig {
            style: self.style.merged(&ovr.style),
            x_axis: ovr.x_axis.clone().unwrap_or_else(|| self.x_axis.clone()),
            y_axis: ovr.y_axis.clone().unwrap_or_else(|| self.y_axis.clone()),
            sort_x: ovr.sort_x.unwrap_or(self.sort_x),
            sort_y: ovr.sort_y.unwrap_or(self.sort_y),
            omit_zero_values: ovr.omit_zero_values.unwrap_or(self.omit_zero_values),
            cumulative: ovr.cumulative.unwrap_or(self.cumulative),
            filters: ovr.filters.clone().unwrap_or_else(|| self.filters.clone()),
        }
    }
}

impl BarChartConfig {
    /// Apply an override, field by field.
    pub fn merged(&self, ovr: &BarChartOverride) -> BarChartConfig {
        BarChartConfig {
            xy: self.xy.merged(&ovr.xy),
            group_by: ovr.group_by.clone().unwrap_or_else(|| self.group_by.clone()),
            bar_gap: ovr.bar_gap.unwrap_or(self.bar_gap),
            bar_size: ovr.bar_size.unwrap_or(self.bar_size),
        }
    }
}

impl SingleAxisChartConfig {
    /// Apply an override, field by field.
    pub fn merged(&self, ovr: &SingleAxisChartOverride) -> SingleAxisChartConfig {
        SingleAxisChartConfig {
            style: self.style.merged(&ovr.style),
            x_axis: ovr.x_axis.clone().unwrap_or_else(|| self.x_axis.clone()),
            sort_by: ovr.sort_by.unwrap_or(self.sort_by),
        }
    }
}

impl HeatmapChartConfig {
    /// Apply an override, field by field.
    pub fn merged(&self, ovr: &HeatmapChartOverride) -> HeatmapChartConfig {
        HeatmapChartConfig {
            style: self.style.merged(&ovr.style),
        }
    }
}

impl ChartConfig {
    /// Recompute the effective configuration for a chart.
    ///
    /// Deserializes `override_json` against the chart type's override
    /// shape and merges it over the type's defaults. The result always
    /// has every field populated. The only error condition is a payload
    /// whose present fields do not deserialize to the expected types;
    /// the merge itself is total.
    pub fn effective(
        chart_type: ChartType,
        override_json: &serde_json::Value,
    ) -> Result<ChartConfig, CoreError> {
        match ChartConfig::defaults(chart_type) {
            ChartConfig::Area(d) => Ok(ChartConfig::Area(d.merged(&parse_override(override_json)?))),
            ChartConfig::Bar(d) => Ok(ChartConfig::Bar(d.merged(&parse_override(override_json)?))),
            ChartConfig::Donut(d) => {
                Ok(ChartConfig::Donut(d.merged(&parse_override(override_json)?)))
            }
            ChartConfig::Radar(d) => {
                Ok(ChartConfig::Radar(d.merged(&parse_override(override_json)?)))
            }
            ChartConfig::Heatmap(d) => {
                Ok(ChartConfig::Heatmap(d.merged(&parse_override(override_json)?)))
            }
            ChartConfig::Radial(d) => {
                Ok(ChartConfig::Radial(d.merged(&parse_override(override_json)?)))
            }
        }
    }
}

/// Validate that a payload deserializes as an override for `chart_type`.
///
/// Used by the write path before persisting. The payload itself is what
/// gets stored, never the merged result.
pub fn validate_override(
    chart_type: ChartType,
    value: &serde_json::Value,
) -> Result<(), CoreError> {
    ChartConfig::effective(chart_type, value).map(|_| ())
}

/// Deserialize an override payload, rejecting type mismatches with a
/// validation error. Unknown keys are ignored.
fn parse_override<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(value.clone())
        .map_err(|e| CoreError::Validation(format!("Invalid configuration override: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    // --- Identity ---

    #[test]
    fn empty_override_is_identity_for_every_type() {
        for &chart_type in ChartType::ALL {
            let effective = ChartConfig::effective(chart_type, &json!({})).unwrap();
            assert_eq!(&effective, ChartConfig::defaults(chart_type));
        }
    }

    // --- Supplied fields win, omitted fields fall back ---

    #[test]
    fn supplied_field_wins_omitted_falls_back() {
        let effective = ChartConfig::effective(ChartType::Area, &json!({"x_axis": "Status"})).unwrap();
        let ChartConfig::Area(config) = effective else {
            panic!("expected area config");
        };
        assert_eq!(config.x_axis, "Status");
        // Everything else keeps the default.
        let ChartConfig::Area(defaults) = ChartConfig::defaults(ChartType::Area) else {
            panic!("expected area defaults");
        };
        assert_eq!(config.y_axis, defaults.y_axis);
        assert_eq!(config.style, defaults.style);
    }

    #[test]
    fn style_field_override_applies() {
        let effective =
            ChartConfig::effective(ChartType::Radial, &json!({"tooltip_enabled": false})).unwrap();
        let ChartConfig::Radial(config) = effective else {
            panic!("expected radial config");
        };
        assert!(!config.style.tooltip_enabled);
        assert!(config.style.legend_enabled);
    }

    #[test]
    fn color_override_applies() {
        let effective = ChartConfig::effective(
            ChartType::Heatmap,
            &json!({"background_color": {"r": 0, "g": 0, "b": 0, "a": 0.5}}),
        )
        .unwrap();
        let ChartConfig::Heatmap(config) = effective else {
            panic!("expected heatmap config");
        };
        assert_eq!(
            config.style.background_color,
            RgbaColor::new(0, 0, 0, 0.5).unwrap()
        );
    }

    #[test]
    fn bar_layout_fields_merge_independently() {
        let effective = ChartConfig::effective(ChartType::Bar, &json!({"bar_gap": 10})).unwrap();
        let ChartConfig::Bar(config) = effective else {
            panic!("expected bar config");
        };
        assert_eq!(config.bar_gap, 10);
        assert_eq!(config.bar_size, 32);
    }

    #[test]
    fn fully_populated_override_replaces_everything() {
        let effective = ChartConfig::effective(
            ChartType::Donut,
            &json!({
                "background_color": {"r": 1, "g": 2, "b": 3, "a": 1.0},
                "text_color": {"r": 4, "g": 5, "b": 6, "a": 1.0},
                "grid_color": {"r": 7, "g": 8, "b": 9, "a": 1.0},
                "grid_kind": "dotted",
                "color_palette": [{"r": 10, "g": 11, "b": 12, "a": 1.0}],
                "tooltip_enabled": false,
                "label_enabled": false,
                "legend_enabled": false,
                "has_border": true,
                "x_axis": "Stage",
                "sort_by": "descending",
            }),
        )
        .unwrap();
        let ChartConfig::Donut(config) = effective else {
            panic!("expected donut config");
        };
        assert_eq!(config.x_axis, "Stage");
        assert_eq!(config.sort_by, SortOrder::Descending);
        assert_eq!(config.style.grid_kind, GridKind::Dotted);
        assert!(config.style.has_border);
        assert_eq!(config.style.color_palette.len(), 1);
    }

    // --- Wholesale replacement of sequence fields ---

    #[test]
    fn palette_is_replaced_wholesale() {
        let effective = ChartConfig::effective(
            ChartType::Area,
            &json!({"color_palette": [{"r": 1, "g": 2, "b": 3, "a": 1.0}]}),
        )
        .unwrap();
        let ChartConfig::Area(config) = effective else {
            panic!("expected area config");
        };
        // One entry, not one entry appended to the default palette.
        assert_eq!(config.style.color_palette.len(), 1);
    }

    #[test]
    fn filters_are_replaced_wholesale() {
        let effective = ChartConfig::effective(
            ChartType::Area,
            &json!({"filters": [
                {"field": "Stage", "operator": "equals", "value": "Done"},
                {"field": "Team", "operator": "equals", "value": "Core"},
            ]}),
        )
        .unwrap();
        let ChartConfig::Area(config) = effective else {
            panic!("expected area config");
        };
        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[0].field, "Stage");
    }

    // --- Tolerance and rejection ---

    #[test]
    fn unknown_keys_are_ignored() {
        let effective = ChartConfig::effective(
            ChartType::Radar,
            &json!({"x_axis": "Team", "not_a_config_field": 42}),
        )
        .unwrap();
        let ChartConfig::Radar(config) = effective else {
            panic!("expected radar config");
        };
        assert_eq!(config.x_axis, "Team");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let err = ChartConfig::effective(ChartType::Area, &json!({"tooltip_enabled": "yes"}))
            .unwrap_err();
        assert_matches!(&err, CoreError::Validation(_));
        assert!(err.to_string().contains("Invalid configuration override"));
    }

    #[test]
    fn out_of_range_color_in_override_is_rejected() {
        let result = ChartConfig::effective(
            ChartType::Area,
            &json!({"text_color": {"r": 0, "g": 0, "b": 0, "a": 7.5}}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn validate_override_accepts_and_rejects() {
        assert!(validate_override(ChartType::Bar, &json!({"bar_size": 12})).is_ok());
        assert!(validate_override(ChartType::Bar, &json!({"bar_size": "wide"})).is_err());
    }

    // --- Typed merge helpers stay pure ---

    #[test]
    fn typed_merge_does_not_mutate_defaults() {
        let ChartConfig::Area(defaults) = ChartConfig::defaults(ChartType::Area) else {
            panic!("expected area defaults");
        };
        let ovr = XyChartOverride {
            x_axis: Some("Priority".to_string()),
            ..Default::default()
        };
        let merged = defaults.merged(&ovr);
        assert_eq!(merged.x_axis, "Priority");
        assert_eq!(defaults.x_axis, "");
    }
}
