//! Plot Assembler
//!
//! Turns the four quartile ECDFs into a chart description. The description
//! serializes to a Plotly figure (`data` + `layout`), but nothing here
//! renders: drawing is left to whichever front end consumes the JSON.

use serde::{Deserialize, Serialize};

use crate::binning::QuantileLabel;
use crate::config::PlotConfig;
use crate::error::WellCdfResult;
use crate::palette::{Rgb, QUARTILE_COLORS};
use crate::quantile_ecdf::QuantileEcdfs;

/// Legend labels, lowest quartile first
pub const QUARTILE_LABELS: [&str; 4] = ["0 to 25", "25 to 50", "50 to 75", "75 to 100 (best wells)"];

/// Height of the quantile-basis annotation in probability units
const ANNOTATION_Y: f64 = 0.3;

/// Format a raw field name as a chart title
///
/// Underscores become spaces, the first letter is upper-cased and the rest
/// lower-cased: `"lateral_LENGTH"` becomes `"Lateral length"`.
pub fn format_field_title(raw: &str) -> String {
    let spaced = raw.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Chart description for one parameter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    /// One series per quartile, lowest first
    #[serde(rename = "data")]
    pub series: Vec<Series>,
    pub layout: Layout,
}

impl PlotSpec {
    /// Series for a quartile
    pub fn series_for(&self, label: QuantileLabel) -> Option<&Series> {
        self.series.get(label.index())
    }

    /// Serialize as pretty-printed figure JSON
    pub fn to_json(&self) -> WellCdfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Line-and-marker trace of one ECDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub size: u32,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
}

impl Title {
    fn new(text: impl Into<String>, size: u32) -> Self {
        Self {
            text: text.into(),
            font: Font { size },
        }
    }
}

/// Axis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    pub zeroline: bool,
    pub showgrid: bool,
    pub showline: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub autorange: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    /// Gridded axis without zero line or spine
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title, 16),
            zeroline: false,
            showgrid: true,
            showline: false,
            autorange: None,
            tickvals: None,
            range: None,
        }
    }

    /// Let the renderer fit the range to the data
    pub fn with_autorange(mut self) -> Self {
        self.autorange = Some(true);
        self
    }

    /// Set explicit tick positions
    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.tickvals = Some(ticks);
        self
    }

    /// Set a fixed range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

/// Free-floating text label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
    pub bgcolor: Rgb,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub margin: Margin,
    pub annotations: Vec<Annotation>,
}

/// Assemble the chart with the default layout
pub fn assemble(ecdfs: &QuantileEcdfs, performance_measure: &str, parameter: &str) -> PlotSpec {
    assemble_with(ecdfs, performance_measure, parameter, &PlotConfig::default())
}

/// Assemble the chart with configured sizes
pub fn assemble_with(
    ecdfs: &QuantileEcdfs,
    performance_measure: &str,
    parameter: &str,
    style: &PlotConfig,
) -> PlotSpec {
    let measure_title = format_field_title(performance_measure);
    let parameter_title = format_field_title(parameter);

    let series = ecdfs
        .iter()
        .map(|(label, ecdf)| Series {
            kind: "scatter".to_string(),
            name: QUARTILE_LABELS[label.index()].to_string(),
            x: ecdf.x().to_vec(),
            y: ecdf.y().to_vec(),
            mode: "lines+markers".to_string(),
            marker: Marker {
                size: style.marker_size,
                color: QUARTILE_COLORS[label.index()],
            },
        })
        .collect();

    let tick_values = (0..=10).map(|i| i as f64 / 10.0).collect();

    let layout = Layout {
        width: style.width,
        height: style.height,
        title: Title::new(format!("ECDF {}", parameter_title), 18),
        xaxis: Axis::new(parameter_title).with_autorange(),
        yaxis: Axis::new("Cumulative Probability")
            .with_ticks(tick_values)
            .with_range(-0.03, 1.03),
        legend: Legend {
            x: 0.65,
            y: 0.1,
            font: Font { size: 14 },
        },
        margin: Margin {
            l: 50,
            r: 10,
            b: 50,
            t: 85,
        },
        annotations: vec![Annotation {
            text: format!("Quantiles: {}", measure_title),
            x: annotation_anchor(ecdfs),
            y: ANNOTATION_Y,
            showarrow: false,
            bgcolor: Rgb::WHITE,
            font: Font { size: 16 },
        }],
    };

    PlotSpec { series, layout }
}

// Right end of the best-wells curve; falls back to the widest curve, then 0
fn annotation_anchor(ecdfs: &QuantileEcdfs) -> f64 {
    ecdfs
        .q4
        .max()
        .or_else(|| {
            ecdfs
                .iter()
                .filter_map(|(_, ecdf)| ecdf.max())
                .max_by(f64::total_cmp)
        })
        .unwrap_or(0.0)
}
