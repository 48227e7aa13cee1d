use crate::core::geometry::{
    GeometryPrimitive, Polyline, SeriesGeometry, SmoothPath, ValueLabel,
};
use crate::core::smooth::smooth_polyline;
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BuildContext, MARKER_SIZE_PX, label_text};

/// Builds line-family geometry: one point per value, straight or smoothed,
/// with optional marker squares recorded as hit rects.
pub(crate) fn build_line_series(
    k: usize,
    display: &[f64],
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let points = map_category_points(display, ctx);
    let mut geometry = SeriesGeometry::empty(k);

    if ctx.style.is_smooth() && count >= 3 {
        geometry
            .primitives
            .push(GeometryPrimitive::SmoothPath(SmoothPath {
                segments: smooth_polyline(&points, false),
                closure: Vec::new(),
            }));
    } else {
        geometry.primitives.push(GeometryPrimitive::Polyline(Polyline {
            points: points.clone(),
        }));
    }

    if ctx.style.has_markers() {
        geometry.hit_rects = points
            .iter()
            .map(|point| PlotRect::centered_square(*point, MARKER_SIZE_PX))
            .collect();
    }
    geometry.hit_points = points.clone();

    if ctx.show_value_labels {
        geometry.labels = points
            .iter()
            .zip(values.iter().zip(display))
            .map(|(point, (value, shown))| ValueLabel {
                text: label_text(value, *shown),
                anchor: PlotPoint::new(point.x, point.y - MARKER_SIZE_PX),
            })
            .collect();
    }

    geometry
}

/// Maps per-index display values onto category anchors for vertical layouts.
pub(crate) fn map_category_points(display: &[f64], ctx: &BuildContext) -> Vec<PlotPoint> {
    let count = display.len();
    display
        .iter()
        .enumerate()
        .map(|(i, value)| {
            PlotPoint::new(
                ctx.frame
                    .category_anchor_x(i, count, ctx.boundary, ctx.flow),
                ctx.map_value(*value),
            )
        })
        .collect()
}
