//! Chart vocabulary: chart types, sort orders, grid styles.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const CHART_AREA: &str = "area";
pub const CHART_BAR: &str = "bar";
pub const CHART_DONUT: &str = "donut";
pub const CHART_RADAR: &str = "radar";
pub const CHART_HEATMAP: &str = "heatmap";
pub const CHART_RADIAL: &str = "radial";

/// All valid chart type string forms.
pub const VALID_CHART_TYPES: &[&str] = &[
    CHART_AREA,
    CHART_BAR,
    CHART_DONUT,
    CHART_RADAR,
    CHART_HEATMAP,
    CHART_RADIAL,
];

/// A chart's type determines the shape of its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Area,
    Bar,
    Donut,
    Radar,
    Heatmap,
    Radial,
}

impl ChartType {
    /// Every chart type, in catalog order.
    pub const ALL: &'static [ChartType] = &[
        ChartType::Area,
        ChartType::Bar,
        ChartType::Donut,
        ChartType::Radar,
        ChartType::Heatmap,
        ChartType::Radial,
    ];

    /// Parse the string form used in the database and on the wire.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            CHART_AREA => Ok(Self::Area),
            CHART_BAR => Ok(Self::Bar),
            CHART_DONUT => Ok(Self::Donut),
            CHART_RADAR => Ok(Self::Radar),
            CHART_HEATMAP => Ok(Self::Heatmap),
            CHART_RADIAL => Ok(Self::Radial),
            _ => Err(CoreError::Validation(format!(
                "Invalid chart type '{s}'. Must be one of: {}",
                VALID_CHART_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => CHART_AREA,
            Self::Bar => CHART_BAR,
            Self::Donut => CHART_DONUT,
            Self::Radar => CHART_RADAR,
            Self::Heatmap => CHART_HEATMAP,
            Self::Radial => CHART_RADIAL,
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order applied to an axis before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

/// Grid line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Solid,
    Dashed,
    Dotted,
    Hidden,
}
