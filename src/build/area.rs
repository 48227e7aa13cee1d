use crate::core::geometry::{
    GeometryPrimitive, PolygonShape, Polyline, SeriesGeometry, SmoothPath, ValueLabel,
};
use crate::core::smooth::smooth_polyline;
use crate::core::types::PlotPoint;
use crate::core::value::SeriesValue;

use super::{BuildContext, MARKER_SIZE_PX, label_text, line::map_category_points};

/// Builds area-family geometry: the line boundary plus an explicitly closed
/// fill polygon back to the baseline, or back to the previous stack boundary
/// for stacked variants.
pub(crate) fn build_area_series(
    k: usize,
    display: &[f64],
    below: Option<&[f64]>,
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let top_points = map_category_points(display, ctx);
    let lower_boundary = lower_boundary_points(&top_points, below, ctx);

    let mut geometry = SeriesGeometry::empty(k);

    if ctx.style.is_smooth() && count >= 3 {
        geometry
            .primitives
            .push(GeometryPrimitive::SmoothPath(SmoothPath {
                segments: smooth_polyline(&top_points, false),
                closure: lower_boundary.clone(),
            }));
    } else {
        // Fill polygon walks the top boundary forward and the lower boundary
        // back, repeating nothing implicitly.
        let mut polygon = Vec::with_capacity(top_points.len() + lower_boundary.len());
        polygon.extend(top_points.iter().copied());
        polygon.extend(lower_boundary.iter().copied());
        geometry
            .primitives
            .push(GeometryPrimitive::Polygon(PolygonShape { points: polygon }));
        geometry.primitives.push(GeometryPrimitive::Polyline(Polyline {
            points: top_points.clone(),
        }));
    }

    geometry.hit_points = top_points.clone();

    if ctx.show_value_labels {
        geometry.labels = top_points
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

/// Lower closure boundary in reverse walking order.
fn lower_boundary_points(
    top_points: &[PlotPoint],
    below: Option<&[f64]>,
    ctx: &BuildContext,
) -> Vec<PlotPoint> {
    match below {
        Some(previous) => {
            let mut lower = map_category_points(previous, ctx);
            lower.reverse();
            lower
        }
        None => {
            let baseline = ctx.zero_coordinate();
            let first_x = top_points[0].x;
            let last_x = top_points[top_points.len() - 1].x;
            vec![
                PlotPoint::new(last_x, baseline),
                PlotPoint::new(first_x, baseline),
            ]
        }
    }
}
