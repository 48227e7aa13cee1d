use std::f64::consts::TAU;

use crate::core::geometry::{
    GeometryPrimitive, PolygonShape, Polyline, SeriesGeometry, ValueLabel,
};
use crate::core::style::ChartStyle;
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BuildContext, MARKER_SIZE_PX, label_text};

/// Builds radar geometry: point `i` sits at angle `90° + i·(360°/n)` from
/// the plot center, at a radial distance scaled by the resolved axis.
///
/// The outline closes into a polygon only when the series genuinely carries
/// the full point count; padded placeholders keep the outline open so the
/// shape never collapses through synthetic zeros.
pub(crate) fn build_radar_series(
    k: usize,
    display: &[f64],
    natural_len: usize,
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let center = ctx.frame.center();
    let vertices: Vec<PlotPoint> = display
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let angle = i as f64 * TAU / count as f64;
            let distance = ctx.axis.value_to_axis_offset(*value);
            // Screen coordinates: index 0 points straight up, later indices
            // sweep clockwise.
            PlotPoint::new(
                center.x + distance * angle.sin(),
                center.y - distance * angle.cos(),
            )
        })
        .collect();

    let closed = natural_len == count && count >= 3;
    let mut geometry = SeriesGeometry::empty(k);

    if ctx.style == ChartStyle::RadarArea && closed {
        geometry.primitives.push(GeometryPrimitive::Polygon(PolygonShape {
            points: vertices.clone(),
        }));
    } else {
        let mut outline = vertices.clone();
        if closed {
            outline.push(vertices[0]);
        }
        geometry
            .primitives
            .push(GeometryPrimitive::Polyline(Polyline { points: outline }));
    }

    if ctx.style.has_markers() {
        geometry.hit_rects = vertices
            .iter()
            .map(|vertex| PlotRect::centered_square(*vertex, MARKER_SIZE_PX))
            .collect();
    }
    geometry.hit_points = vertices.clone();

    if ctx.show_value_labels {
        geometry.labels = vertices
            .iter()
            .zip(values.iter().zip(display))
            .map(|(vertex, (value, shown))| ValueLabel {
                text: label_text(value, *shown),
                anchor: PlotPoint::new(vertex.x, vertex.y - MARKER_SIZE_PX),
            })
            .collect();
    }

    geometry
}
