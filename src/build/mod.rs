//! Per-family geometry builders.
//!
//! Builders are pure: they consume the resolved axis measure plus aggregated
//! values and return fresh [`SeriesGeometry`] snapshots, hit-test data
//! included. Nothing here mutates shared state, which keeps optional
//! parallel per-series builds safe.

mod area;
mod bubble;
mod column;
mod line;
mod pie;
mod radar;
mod waterfall;

#[cfg(feature = "parallel-layout")]
use rayon::prelude::*;

use crate::core::aggregate::{
    full_stacked_percents, pad_to_equal_length, signed_stack_bases, stacked_prefix_sums,
};
use crate::core::axis::{AxisMeasure, AxisOrientation};
use crate::core::direction::Direction;
use crate::core::frame::{BoundaryMode, FlowDirection, PlotFrame};
use crate::core::geometry::SeriesGeometry;
use crate::core::series::SeriesSet;
use crate::core::style::{ChartStyle, GeometryFamily, Stacking};
use crate::core::types::PlotPoint;
use crate::core::value::SeriesValue;

/// Fraction of a category band occupied by the column/bar group.
pub const COLUMN_ZONE_RATIO: f64 = 0.6;

/// Marker square edge length in pixels.
pub const MARKER_SIZE_PX: f64 = 8.0;

/// Bubble radius as a fraction of the category band; never value-driven.
pub const BUBBLE_RADIUS_RATIO: f64 = 0.25;

/// Outer radius of radial layouts as a fraction of the half-extent.
pub const RADIAL_RADIUS_RATIO: f64 = 0.9;

/// Doughnut hole radius as a fraction of the outer radius.
pub const DOUGHNUT_HOLE_RATIO: f64 = 0.5;

/// Widest funnel bar as a fraction of the plot width.
pub const FUNNEL_WIDTH_RATIO: f64 = 0.9;

/// Shared, read-only inputs for every builder on one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub axis: &'a AxisMeasure,
    pub direction: Direction,
    pub frame: &'a PlotFrame,
    pub style: ChartStyle,
    pub boundary: BoundaryMode,
    pub flow: FlowDirection,
    pub orientation: AxisOrientation,
    /// Pixel position of the value-axis minimum end.
    pub axis_origin: PlotPoint,
    pub show_value_labels: bool,
}

impl BuildContext<'_> {
    /// Value-axis pixel coordinate of a data value (y for vertical layouts,
    /// x for horizontal ones).
    #[must_use]
    pub fn map_value(&self, value: f64) -> f64 {
        let offset = self.axis.value_to_axis_offset(value);
        match self.orientation {
            AxisOrientation::Vertical => self.axis_origin.y - offset,
            AxisOrientation::Horizontal => self.axis_origin.x + offset,
            AxisOrientation::HorizontalReversed => self.axis_origin.x - offset,
        }
    }

    /// Pixel coordinate of data value zero on the value axis.
    #[must_use]
    pub fn zero_coordinate(&self) -> f64 {
        self.map_value(0.0)
    }
}

/// Display values per series after style-driven aggregation, alongside the
/// stack bases column/bar builders anchor to.
struct AggregatedGroup {
    padded: Vec<Vec<SeriesValue>>,
    display: Vec<Vec<f64>>,
    bases: Option<Vec<Vec<f64>>>,
}

fn aggregate_for_style(set: &SeriesSet, style: ChartStyle) -> AggregatedGroup {
    let padded = pad_to_equal_length(set.all());
    let raw: Vec<Vec<f64>> = padded
        .iter()
        .map(|row| row.iter().map(SeriesValue::plain).collect())
        .collect();

    match (style.geometry_family(), style.stacking()) {
        (GeometryFamily::Line | GeometryFamily::Area, Stacking::Stacked) => AggregatedGroup {
            padded,
            display: stacked_prefix_sums(&raw),
            bases: None,
        },
        (GeometryFamily::Line | GeometryFamily::Area, Stacking::FullStacked) => {
            let percents = full_stacked_percents(&raw);
            AggregatedGroup {
                padded,
                display: stacked_prefix_sums(&percents),
                bases: None,
            }
        }
        (GeometryFamily::Column | GeometryFamily::Bar, Stacking::Stacked) => AggregatedGroup {
            padded,
            bases: Some(signed_stack_bases(&raw)),
            display: raw,
        },
        (GeometryFamily::Column | GeometryFamily::Bar, Stacking::FullStacked) => {
            let percents = full_stacked_percents(&raw);
            AggregatedGroup {
                padded,
                bases: Some(signed_stack_bases(&percents)),
                display: percents,
            }
        }
        _ => AggregatedGroup {
            padded,
            display: raw,
            bases: None,
        },
    }
}

/// Builds the full geometry set for one layout pass, one entry per series in
/// series order.
#[must_use]
pub fn build_chart_geometry(set: &SeriesSet, ctx: &BuildContext) -> Vec<SeriesGeometry> {
    if set.is_empty() {
        return Vec::new();
    }

    let group = aggregate_for_style(set, ctx.style);
    let indices: Vec<usize> = (0..set.len()).collect();

    let build_one = |k: &usize| -> SeriesGeometry {
        let k = *k;
        let display = &group.display[k];
        let values = &group.padded[k];
        match ctx.style.geometry_family() {
            GeometryFamily::Line => line::build_line_series(k, display, values, ctx),
            GeometryFamily::Area => {
                let below = if k > 0 { Some(&group.display[k - 1]) } else { None };
                area::build_area_series(k, display, below.map(Vec::as_slice), values, ctx)
            }
            GeometryFamily::Column => {
                let bases = group.bases.as_ref().map(|b| b[k].as_slice());
                column::build_column_series(k, set.len(), display, bases, values, ctx)
            }
            GeometryFamily::Bar => {
                let bases = group.bases.as_ref().map(|b| b[k].as_slice());
                column::build_bar_series(k, set.len(), display, bases, values, ctx)
            }
            GeometryFamily::Waterfall => {
                if k == 0 {
                    waterfall::build_waterfall_series(k, display, values, ctx)
                } else {
                    SeriesGeometry::empty(k)
                }
            }
            GeometryFamily::Radar => {
                let natural_len = set.get(k).map(|s| s.len()).unwrap_or(0);
                radar::build_radar_series(k, display, natural_len, values, ctx)
            }
            GeometryFamily::Pie => {
                if k == 0 {
                    pie::build_pie_series(k, display, values, ctx)
                } else {
                    SeriesGeometry::empty(k)
                }
            }
            GeometryFamily::Bubble => bubble::build_bubble_series(k, display, values, ctx),
            GeometryFamily::Funnel => {
                if k == 0 {
                    bubble::build_funnel_series(k, display, values, ctx)
                } else {
                    SeriesGeometry::empty(k)
                }
            }
        }
    };

    #[cfg(feature = "parallel-layout")]
    {
        indices.par_iter().map(build_one).collect()
    }

    #[cfg(not(feature = "parallel-layout"))]
    {
        indices.iter().map(build_one).collect()
    }
}

/// Label text for one value: the host-supplied override wins, otherwise the
/// shortest decimal rendering of the display value.
pub(crate) fn label_text(value: &SeriesValue, display: f64) -> String {
    match value.custom_label() {
        Some(label) => label.to_owned(),
        None => format_value(display),
    }
}

pub(crate) fn format_value(value: f64) -> String {
    format!("{value}")
}
