//! Session payload types.
//!
//! A session is a named dataset of recorded time-series values. The server
//! sends exactly one JSON object per load: a `values` map (value id to named
//! x/y series) and a `groups` list describing how values are partitioned into
//! display panels. The payload lives in memory only and is replaced wholesale
//! on every load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single named time series with parallel x/y sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSeries {
    /// Display name used for the trace and legend entry
    pub name: String,
    /// Sample positions (shared x axis)
    #[serde(default)]
    pub x: Vec<f64>,
    /// Sample values
    #[serde(default)]
    pub y: Vec<f64>,
}

/// A named ordered collection of value ids rendered together on one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Panel/legend section title
    pub name: String,
    /// Value ids in display order; each should reference an entry in
    /// [`SessionData::values`]
    pub values: Vec<String>,
}

/// The complete session payload as received from the server.
///
/// `values` uses a `BTreeMap` so iteration order is deterministic; the
/// synthesized per-value grouping and diagnostics depend on it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// Value id -> series
    #[serde(default)]
    pub values: BTreeMap<String, ValueSeries>,
    /// Display groups; may be empty, in which case a fallback grouping is
    /// synthesized before rendering
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl SessionData {
    /// Whether the server supplied any display groups.
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// All (group name, value id) pairs whose value id has no entry in
    /// `values`. An empty result means the grouping invariant holds.
    pub fn missing_references(&self) -> Vec<(String, String)> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .values
                    .iter()
                    .filter(|id| !self.values.contains_key(*id))
                    .map(|id| (group.name.clone(), id.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "values": {
                "state.position": {"name": "Position", "x": [0.0, 0.5], "y": [1.0, 1.5]},
                "state.velocity": {"name": "Velocity", "x": [0.0, 0.5], "y": [0.1, 0.2]}
            },
            "groups": [
                {"name": "Cart", "values": ["state.position", "state.velocity"]}
            ]
        }"#;

        let session: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(session.values.len(), 2);
        assert_eq!(session.values["state.position"].name, "Position");
        assert_eq!(session.values["state.position"].x, vec![0.0, 0.5]);
        assert_eq!(session.values["state.velocity"].y, vec![0.1, 0.2]);
        assert_eq!(session.groups.len(), 1);
        assert_eq!(session.groups[0].name, "Cart");
        assert_eq!(
            session.groups[0].values,
            vec!["state.position", "state.velocity"]
        );
    }

    #[test]
    fn test_parse_payload_without_groups() {
        let json = r#"{
            "values": {
                "a": {"name": "A", "x": [1.0], "y": [2.0]}
            },
            "groups": []
        }"#;

        let session: SessionData = serde_json::from_str(json).unwrap();
        assert!(!session.has_groups());
    }

    #[test]
    fn test_parse_payload_missing_fields_default() {
        let session: SessionData = serde_json::from_str("{}").unwrap();
        assert!(session.values.is_empty());
        assert!(session.groups.is_empty());
    }

    #[test]
    fn test_parse_series_without_samples() {
        let json = r#"{"name": "Empty"}"#;
        let series: ValueSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.name, "Empty");
        assert!(series.x.is_empty());
        assert!(series.y.is_empty());
    }

    #[test]
    fn test_missing_references_empty_when_valid() {
        let json = r#"{
            "values": {"a": {"name": "A", "x": [], "y": []}},
            "groups": [{"name": "G", "values": ["a"]}]
        }"#;

        let session: SessionData = serde_json::from_str(json).unwrap();
        assert!(session.missing_references().is_empty());
    }

    #[test]
    fn test_missing_references_reports_unknown_ids() {
        let json = r#"{
            "values": {"a": {"name": "A", "x": [], "y": []}},
            "groups": [{"name": "G", "values": ["a", "b"]}]
        }"#;

        let session: SessionData = serde_json::from_str(json).unwrap();
        let missing = session.missing_references();
        assert_eq!(missing, vec![("G".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_values_iterate_in_id_order() {
        let json = r#"{
            "values": {
                "z": {"name": "Z", "x": [], "y": []},
                "a": {"name": "A", "x": [], "y": []}
            }
        }"#;

        let session: SessionData = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = session.values.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["a", "z"]);
    }

    #[test]
    fn test_payload_round_trip() {
        let mut values = BTreeMap::new();
        values.insert(
            "a".to_string(),
            ValueSeries {
                name: "A".to_string(),
                x: vec![0.0, 1.0],
                y: vec![2.0, 3.0],
            },
        );
        let session = SessionData {
            values,
            groups: vec![Group {
                name: "G".to_string(),
                values: vec!["a".to_string()],
            }],
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
