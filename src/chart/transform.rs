//! Session-to-chart transformation.
//!
//! A pure structural remap: one trace per (group, value) pair in group order
//! and within-group order, plus a layout sized to the group count. No
//! aggregation, resampling or statistics.

use thiserror::Error;

use crate::chart::spec::{
    axis_suffix, ChartSpec, GridSpec, Layout, LegendSpec, Trace, PANEL_HEIGHT, ROW_GAP,
};
use crate::models::SessionData;

/// Errors from the transform stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A group references a value id that is not in the payload
    #[error("Group '{group}' references unknown value '{value_id}'")]
    UnknownValue { group: String, value_id: String },
}

/// Build one trace per (group, value-in-group) pair.
///
/// Group order and within-group order are preserved. Fails if a group
/// references a value id absent from the payload.
pub fn build_traces(data: &SessionData) -> Result<Vec<Trace>, ChartError> {
    let mut traces = Vec::new();
    for (index, group) in data.groups.iter().enumerate() {
        let suffix = axis_suffix(index);
        for value_id in &group.values {
            let series = data
                .values
                .get(value_id)
                .ok_or_else(|| ChartError::UnknownValue {
                    group: group.name.clone(),
                    value_id: value_id.clone(),
                })?;
            traces.push(Trace {
                mode: "lines+markers".to_string(),
                name: series.name.clone(),
                x: series.x.clone(),
                y: series.y.clone(),
                xaxis: "x".to_string(),
                yaxis: format!("y{suffix}"),
                legend_group: format!("group{suffix}"),
                legend_group_title: Some(group.name.clone()),
            });
        }
    }
    Ok(traces)
}

/// Build the layout for the payload's group count: a one-column grid with a
/// row per group and a total height of [`PANEL_HEIGHT`] units per group.
pub fn build_layout(data: &SessionData) -> Layout {
    let rows = data.groups.len();
    Layout {
        height: PANEL_HEIGHT * rows as u32,
        autosize: true,
        grid: GridSpec {
            rows,
            columns: 1,
            subplots: (0..rows).map(|i| format!("xy{}", axis_suffix(i))).collect(),
            ygap: ROW_GAP,
        },
        legend: LegendSpec::default(),
    }
}

/// Transform a resolved session into a complete chart specification.
pub fn build_chart_spec(data: &SessionData) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec {
        traces: build_traces(data)?,
        layout: build_layout(data),
    })
}
