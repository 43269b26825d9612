use crate::catalog::{Clusters2D, ElbowCurve, ExampleData, ExplainedVariance, SamplePoints};
use crate::metric::ConfusionGrid;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Colors shared by every figure layout.
///
/// # Fields
///
/// - `background` - Plot and paper background
/// - `font_color` - Text color
/// - `grid_color` - Axis grid color (used by the static sigmoid chart)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotTheme {
    pub background: String,
    pub font_color: String,
    pub grid_color: String,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            background: "#1F2937".to_string(),
            font_color: "#F3F4F6".to_string(),
            grid_color: "#374151".to_string(),
        }
    }
}

/// Plotly trace type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Heatmap,
    Bar,
}

/// Values of a trace axis: numbers or category labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

/// Marker color: one color for every point, or one numeric value per point mapped through a colorscale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Marker {
    pub fn colored(color: &str) -> Self {
        Self {
            color: Some(MarkerColor::Single(color.to_string())),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// One Plotly trace. Unset fields are left out of the JSON so Plotly applies its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Trace {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TraceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automargin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

impl Margin {
    /// Margin used by the detail charts
    pub const COMPACT: Margin = Margin {
        t: 20,
        r: 10,
        b: 40,
        l: 40,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub margin: Margin,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
}

impl Layout {
    /// Dark layout with the given margin and no axes
    pub fn themed(theme: &PlotTheme, margin: Margin) -> Self {
        Self {
            title: None,
            xaxis: None,
            yaxis: None,
            margin,
            plot_bgcolor: theme.background.clone(),
            paper_bgcolor: theme.background.clone(),
            font: Font {
                color: theme.font_color.clone(),
            },
        }
    }

    /// Dark layout with compact margins and titled axes
    pub fn with_axis_titles(theme: &PlotTheme, x_title: &str, y_title: &str) -> Self {
        Self {
            xaxis: Some(Axis::titled(x_title)),
            yaxis: Some(Axis::titled(y_title)),
            ..Self::themed(theme, Margin::COMPACT)
        }
    }
}

/// Plotly configuration object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar", skip_serializing_if = "Option::is_none")]
    pub display_mode_bar: Option<bool>,
    pub responsive: bool,
}

impl Default for PlotConfig {
    /// Mode bar hidden, resizes with its container
    fn default() -> Self {
        Self {
            display_mode_bar: Some(false),
            responsive: true,
        }
    }
}

/// A complete chart: traces, layout and configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

/// The charting collaborator that turns a figure into a drawn chart.
pub trait ChartingBackend {
    /// Draws `figure` into the surface identified by `target`, replacing any previous chart.
    fn new_plot(&self, target: &str, figure: &Figure);
}

/// Figure builders and the adapters that hand them to a backend
pub mod adapters;
/// Backends shipped with the crate
pub mod backend;
/// Deferred plot requests for the details placeholders
pub mod request;

pub use adapters::*;
pub use backend::*;
pub use request::*;
