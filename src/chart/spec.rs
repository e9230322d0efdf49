//! Chart specification types.
//!
//! A [`ChartSpec`] is the derived, transient description of one rendered
//! session: a flat trace list plus a layout binding each display group to a
//! vertical subplot row. It is recomputed on every load and never persisted;
//! the serde derives exist for diagnostics and tests.
//!
//! Axis naming follows subplot convention: the first group uses the bare
//! `x`/`y` pair, group `i` (zero-based) uses `y{i+1}`. Legend entries are
//! clustered per group with a `group{suffix}` key matching the axis suffix.

use serde::{Deserialize, Serialize};

/// Layout height units allocated to each group panel.
pub const PANEL_HEIGHT: u32 = 500;

/// Vertical gap between subplot rows, as a fraction of the plot height.
pub const ROW_GAP: f64 = 0.05;

/// Axis suffix for a zero-based group index: `""`, `"2"`, `"3"`, ...
pub fn axis_suffix(index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        (index + 1).to_string()
    }
}

/// One renderable line-plus-markers series bound to an axis pair and a
/// legend cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Draw mode; always `lines+markers`
    pub mode: String,
    /// Series name shown in the legend
    pub name: String,
    /// Raw sample positions
    pub x: Vec<f64>,
    /// Raw sample values
    pub y: Vec<f64>,
    /// Horizontal axis; all traces share `x`
    pub xaxis: String,
    /// Vertical axis: `y` for the first group, `y2`, `y3`, ... after
    pub yaxis: String,
    /// Legend cluster key, correlated with the axis suffix
    pub legend_group: String,
    /// Legend section title (the group's name)
    pub legend_group_title: Option<String>,
}

/// Subplot grid: one row per group, a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    /// Axis pair per row: `xy`, `xy2`, ...
    pub subplots: Vec<String>,
    pub ygap: f64,
}

/// Single horizontal legend centered above the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub orientation: String,
    pub yanchor: String,
    pub xanchor: String,
    pub x: f64,
    pub y: f64,
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            orientation: "h".to_string(),
            yanchor: "top".to_string(),
            xanchor: "center".to_string(),
            x: 0.5,
            y: 1.2,
        }
    }
}

/// Overall chart layout derived from the group count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Total height in layout units; scales linearly with the group count
    pub height: u32,
    pub autosize: bool,
    pub grid: GridSpec,
    pub legend: LegendSpec,
}

/// A complete renderable chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Traces bound to the panel at the given zero-based row index.
    pub fn panel_traces(&self, index: usize) -> Vec<&Trace> {
        let yaxis = format!("y{}", axis_suffix(index));
        self.traces.iter().filter(|t| t.yaxis == yaxis).collect()
    }

    /// Panel title for the given row, taken from its legend group title.
    pub fn panel_title(&self, index: usize) -> Option<&str> {
        self.panel_traces(index)
            .first()
            .and_then(|t| t.legend_group_title.as_deref())
    }
}

/// Fixed options handed to the plot backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Stretch panels to the available area instead of keeping fixed
    /// per-panel heights
    pub responsive: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { responsive: true }
    }
}
