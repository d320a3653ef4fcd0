//! Per-chart-type configuration records and their process-wide defaults.
//!
//! One fully-populated default exists per chart type, constructed once as
//! an immutable process constant. Effective per-chart configurations are
//! produced by merging a stored override onto these defaults (see
//! [`crate::overrides`]); the merged result is recomputed on every read
//! and never persisted.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::chart_type::{ChartType, GridKind, SortOrder};
use crate::color::RgbaColor;
use crate::filter::ChartFilter;

/// Shared visual settings present on every chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: RgbaColor,
    pub text_color: RgbaColor,
    pub grid_color: RgbaColor,
    pub grid_kind: GridKind,
    pub color_palette: Vec<RgbaColor>,
    pub tooltip_enabled: bool,
    pub label_enabled: bool,
    pub legend_enabled: bool,
    pub has_border: bool,
}

/// Configuration for two-axis charts (area, radar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyChartConfig {
    #[serde(flatten)]
    pub style: ChartStyle,
    pub x_axis: String,
    pub y_axis: String,
    pub sort_x: SortOrder,
    pub sort_y: SortOrder,
    pub omit_zero_values: bool,
    pub cumulative: bool,
    pub filters: Vec<ChartFilter>,
}

/// Configuration for bar charts: the two-axis shape plus bar layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(flatten)]
    pub xy: XyChartConfig,
    pub group_by: String,
    pub bar_gap: i32,
    pub bar_size: i32,
}

/// Configuration for single-axis charts (donut, radial).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleAxisChartConfig {
    #[serde(flatten)]
    pub style: ChartStyle,
    pub x_axis: String,
    pub sort_by: SortOrder,
}

/// Configuration for heatmap charts. Only the shared style is
/// configurable; the date dimension comes from the data source at render
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChartConfig {
    #[serde(flatten)]
    pub style: ChartStyle,
}

/// Effective chart configuration, tagged by chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartConfig {
    Area(XyChartConfig),
    Bar(BarChartConfig),
    Donut(SingleAxisChartConfig),
    Radar(XyChartConfig),
    Heatmap(HeatmapChartConfig),
    Radial(SingleAxisChartConfig),
}

impl ChartConfig {
    /// The process-wide immutable default configuration for a chart type.
    pub fn defaults(chart_type: ChartType) -> &'static ChartConfig {
        match chart_type {
            ChartType::Area => &AREA_DEFAULTS,
            ChartType::Bar => &BAR_DEFAULTS,
            ChartType::Donut => &DONUT_DEFAULTS,
            ChartType::Radar => &RADAR_DEFAULTS,
            ChartType::Heatmap => &HEATMAP_DEFAULTS,
            ChartType::Radial => &RADIAL_DEFAULTS,
        }
    }

    /// The chart type this configuration belongs to.
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Area(_) => ChartType::Area,
            Self::Bar(_) => ChartType::Bar,
            Self::Donut(_) => ChartType::Donut,
            Self::Radar(_) => ChartType::Radar,
            Self::Heatmap(_) => ChartType::Heatmap,
            Self::Radial(_) => ChartType::Radial,
        }
    }
}

/// Default series palette shared by every chart type.
fn default_palette() -> Vec<RgbaColor> {
    vec![
        RgbaColor::opaque(59, 130, 246),
        RgbaColor::opaque(16, 185, 129),
        RgbaColor::opaque(245, 158, 11),
        RgbaColor::opaque(239, 68, 68),
        RgbaColor::opaque(139, 92, 246),
        RgbaColor::opaque(236, 72, 153),
    ]
}

fn default_style() -> ChartStyle {
    ChartStyle {
        background_color: RgbaColor::opaque(255, 255, 255),
        text_color: RgbaColor::opaque(31, 41, 55),
        grid_color: RgbaColor::opaque(229, 231, 235),
        grid_kind: GridKind::Solid,
        color_palette: default_palette(),
        tooltip_enabled: true,
        label_enabled: true,
        legend_enabled: true,
        has_border: false,
    }
}

fn default_xy() -> XyChartConfig {
    XyChartConfig {
        style: default_style(),
        x_axis: String::new(),
        y_axis: String::new(),
        sort_x: SortOrder::None,
        sort_y: SortOrder::None,
        omit_zero_values: false,
        cumulative: false,
        filters: Vec::new(),
    }
}

fn default_single_axis() -> SingleAxisChartConfig {
    SingleAxisChartConfig {
        style: default_style(),
        x_axis: String::new(),
        sort_by: SortOrder::None,
    }
}

static AREA_DEFAULTS: LazyLock<ChartConfig> = LazyLock::new(|| ChartConfig::Area(default_xy()));

static BAR_DEFAULTS: LazyLock<ChartConfig> = LazyLock::new(|| {
    ChartConfig::Bar(BarChartConfig {
        xy: default_xy(),
        group_by: String::new(),
        bar_gap: 4,
        bar_size: 32,
    })
});

static DONUT_DEFAULTS: LazyLock<ChartConfig> =
    LazyLock::new(|| ChartConfig::Donut(default_single_axis()));

static RADAR_DEFAULTS: LazyLock<ChartConfig> = LazyLock::new(|| ChartConfig::Radar(default_xy()));

static HEATMAP_DEFAULTS: LazyLock<ChartConfig> = LazyLock::new(|| {
    ChartConfig::Heatmap(HeatmapChartConfig {
        style: default_style(),
    })
});

static RADIAL_DEFAULTS: LazyLock<ChartConfig> =
    LazyLock::new(|| ChartConfig::Radial(default_single_axis()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_type_has_defaults() {
        for &chart_type in ChartType::ALL {
            let defaults = ChartConfig::defaults(chart_type);
            assert_eq!(defaults.chart_type(), chart_type);
        }
    }

    #[test]
    fn default_palette_is_non_empty() {
        for &chart_type in ChartType::ALL {
            let style = match ChartConfig::defaults(chart_type) {
                ChartConfig::Area(c) | ChartConfig::Radar(c) => &c.style,
                ChartConfig::Bar(c) => &c.xy.style,
                ChartConfig::Donut(c) | ChartConfig::Radial(c) => &c.style,
                ChartConfig::Heatmap(c) => &c.style,
            };
            assert!(!style.color_palette.is_empty());
        }
    }

    #[test]
    fn serialized_config_carries_type_tag() {
        let value = serde_json::to_value(ChartConfig::defaults(ChartType::Bar)).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["bar_gap"], 4);
        // Flattened style fields sit at the top level.
        assert_eq!(value["tooltip_enabled"], true);
    }

    #[test]
    fn config_deserializes_from_its_own_serialization() {
        let defaults = ChartConfig::defaults(ChartType::Donut);
        let value = serde_json::to_value(defaults).unwrap();
        let back: ChartConfig = serde_json::from_value(value).unwrap();
        assert_eq!(&back, defaults);
    }
}
