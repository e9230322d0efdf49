//! Chart rendering: maps a [`ChartSpec`] onto stacked chart panels.
//!
//! This is the single delegation point to the charting backend. Each grid
//! row of the spec becomes one panel bound to its axis pair; datasets are
//! named so the per-panel legend lists the traces of that legend group.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::chart::{ChartSpec, PlotOptions, Trace};
use crate::ui::theme::{series_color, COLOR_AXIS, COLOR_BORDER};

/// Panel height in terminal rows when the layout is not responsive.
const PANEL_ROWS: u16 = 15;

/// Render all panels of a chart spec into the given area.
pub fn render(frame: &mut Frame, area: Rect, spec: &ChartSpec, options: &PlotOptions) {
    let rows = spec.layout.grid.rows;
    if rows == 0 || area.height == 0 {
        return;
    }

    let constraints: Vec<Constraint> = if options.responsive {
        (0..rows).map(|_| Constraint::Ratio(1, rows as u32)).collect()
    } else {
        (0..rows).map(|_| Constraint::Length(PANEL_ROWS)).collect()
    };
    let panels = Layout::vertical(constraints).split(area);

    for (index, panel) in panels.iter().enumerate() {
        render_panel(frame, *panel, spec, index);
    }
}

fn render_panel(frame: &mut Frame, area: Rect, spec: &ChartSpec, index: usize) {
    let traces = spec.panel_traces(index);
    let title = spec.panel_title(index).unwrap_or_default().to_string();

    let points: Vec<Vec<(f64, f64)>> = traces.iter().map(|t| trace_points(t)).collect();
    let (x_bounds, y_bounds) = data_bounds(&traces);

    let datasets: Vec<Dataset> = traces
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (trace, data))| {
            Dataset::default()
                .name(trace.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(i)))
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(title),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_AXIS))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_AXIS))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

/// Paired (x, y) samples of a trace; unpaired tail samples are dropped.
fn trace_points(trace: &Trace) -> Vec<(f64, f64)> {
    trace
        .x
        .iter()
        .zip(trace.y.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (*x, *y))
        .collect()
}

/// X and Y bounds covering every finite sample of the panel's traces.
///
/// Degenerate ranges are widened so the axis never collapses to a point.
fn data_bounds(traces: &[&Trace]) -> ([f64; 2], [f64; 2]) {
    let mut x = RangeAcc::new();
    let mut y = RangeAcc::new();
    for trace in traces {
        for (px, py) in trace.x.iter().zip(trace.y.iter()) {
            if px.is_finite() && py.is_finite() {
                x.push(*px);
                y.push(*py);
            }
        }
    }
    (x.bounds(), y.bounds())
}

struct RangeAcc {
    min: f64,
    max: f64,
    seen: bool,
}

impl RangeAcc {
    fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            seen: false,
        }
    }

    fn push(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.seen = true;
    }

    fn bounds(&self) -> [f64; 2] {
        if !self.seen {
            return [0.0, 1.0];
        }
        if self.min == self.max {
            return [self.min - 0.5, self.max + 0.5];
        }
        [self.min, self.max]
    }
}

/// Min/mid/max tick labels for an axis.
fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        format!("{:.1}", bounds[0]),
        format!("{:.1}", mid),
        format!("{:.1}", bounds[1]),
    ]
}
