use serde::{Deserialize, Serialize};

use crate::core::axis::AxisMeasure;
use crate::core::direction::Direction;
use crate::core::geometry::SeriesGeometry;
use crate::error::{ChartError, ChartResult};

/// Full result of one layout pass.
///
/// Hosts store the latest snapshot wholesale; a new pass supersedes the
/// previous one, hit-test data included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub direction: Direction,
    pub axis: AxisMeasure,
    pub series: Vec<SeriesGeometry>,
    /// One label per tick boundary, `line_count + 1` entries.
    pub axis_tick_labels: Vec<String>,
}

impl LayoutSnapshot {
    /// Serializes the snapshot for host persistence or inspection tooling.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }
}

/// Tick labels from the resolved axis, with index-wise custom overrides.
///
/// A custom label list longer than the tick count is clamped, never an
/// error; missing entries fall back to the numeric rendering.
#[must_use]
pub fn axis_tick_labels(axis: &AxisMeasure, custom: &[String]) -> Vec<String> {
    axis.tick_values()
        .iter()
        .enumerate()
        .map(|(i, value)| match custom.get(i) {
            Some(label) => label.clone(),
            None => format!("{value}"),
        })
        .collect()
}
