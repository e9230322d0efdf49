//! Fallback grouping of session values into display panels.
//!
//! When the server supplies groups they are used verbatim. When it does not,
//! one of two synthesized groupings fills the gap. The fixed two-panel table
//! is server-inherited placeholder configuration, not derived logic; it is
//! kept as data so deployments can swap it out.

use serde::{Deserialize, Serialize};

use crate::models::{Group, SessionData};

/// How to synthesize groups for a payload that arrived without any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupingStrategy {
    /// A fixed panel table applied as-is
    FixedPanels(Vec<Group>),
    /// One panel per value, named after the value's display name
    PerValue,
}

impl Default for GroupingStrategy {
    fn default() -> Self {
        GroupingStrategy::FixedPanels(default_panels())
    }
}

/// The stock panel table used when the server sends no groups.
pub fn default_panels() -> Vec<Group> {
    vec![
        Group {
            name: "KOK".to_string(),
            values: vec![
                "state.pole_angle".to_string(),
                "state.pole_angular_velocity".to_string(),
            ],
        },
        Group {
            name: "KEK".to_string(),
            values: vec!["state.position".to_string(), "state.velocity".to_string()],
        },
    ]
}

/// One group per value, in value-id order.
pub fn per_value_groups(data: &SessionData) -> Vec<Group> {
    data.values
        .iter()
        .map(|(id, series)| Group {
            name: series.name.clone(),
            values: vec![id.clone()],
        })
        .collect()
}

/// Fill in the payload's groups in place when the server sent none.
///
/// Server-supplied groups always win; the strategy only applies to an empty
/// `groups` list.
pub fn resolve_groups(data: &mut SessionData, strategy: &GroupingStrategy) {
    if data.has_groups() {
        return;
    }
    data.groups = match strategy {
        GroupingStrategy::FixedPanels(panels) => panels.clone(),
        GroupingStrategy::PerValue => per_value_groups(data),
    };
}
