use serde::{Deserialize, Serialize};

use crate::core::style::ChartStyle;

/// Screen quadrant(s) occupied by the plotted data.
///
/// Drives axis origin placement: all-positive data grows north-east from the
/// baseline, all-negative columns grow south, all-negative bars grow west,
/// and mixed-sign data needs a two-sided layout with the zero line inside
/// the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthEast,
    NorthEastNorthWest,
    NorthEastSouthEast,
    SouthEast,
    NorthWest,
}

impl Direction {
    #[must_use]
    pub fn is_mixed(self) -> bool {
        matches!(
            self,
            Direction::NorthEastNorthWest | Direction::NorthEastSouthEast
        )
    }
}

/// Classifies which quadrant(s) the chart grows in.
///
/// Must be called once per layout pass with the union of all series values
/// (the single series for waterfall), never per series.
#[must_use]
pub fn classify_direction(values: &[f64], style: ChartStyle) -> Direction {
    match style {
        ChartStyle::Waterfall => classify_running_totals(values),
        ChartStyle::Funnel => Direction::NorthEast,
        _ => classify_generic(values, style.is_bar_family()),
    }
}

fn classify_generic(values: &[f64], bar_family: bool) -> Direction {
    let mut any_negative = false;
    let mut all_negative = !values.is_empty();
    for value in values {
        if *value < 0.0 {
            any_negative = true;
        } else {
            all_negative = false;
        }
    }

    if !any_negative {
        Direction::NorthEast
    } else if all_negative {
        if bar_family {
            Direction::NorthWest
        } else {
            Direction::SouthEast
        }
    } else if bar_family {
        Direction::NorthEastNorthWest
    } else {
        Direction::NorthEastSouthEast
    }
}

fn classify_running_totals(values: &[f64]) -> Direction {
    let mut running = 0.0;
    let mut any_positive = false;
    let mut any_negative = false;
    for value in values {
        running += value;
        if running > 0.0 {
            any_positive = true;
        }
        if running < 0.0 {
            any_negative = true;
        }
    }

    if any_positive && any_negative {
        Direction::NorthEastSouthEast
    } else if any_negative {
        Direction::SouthEast
    } else {
        Direction::NorthEast
    }
}
