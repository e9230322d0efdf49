//! Chart specification and the session-to-chart transform.

pub mod spec;
pub mod transform;

pub use spec::{axis_suffix, ChartSpec, GridSpec, Layout, LegendSpec, PlotOptions, Trace};
pub use transform::{build_chart_spec, build_layout, build_traces, ChartError};
