use crate::core::geometry::{
    GeometryPrimitive, Polyline, SectorShape, SeriesGeometry, ValueLabel,
};
use crate::core::style::ChartStyle;
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BuildContext, DOUGHNUT_HOLE_RATIO, MARKER_SIZE_PX, RADIAL_RADIUS_RATIO, label_text};

/// Builds pie-family geometry from the first series: one sector per value
/// with sweep `|v| / Σ|v| × 360°`, swept clockwise from 12 o'clock.
///
/// Doughnut styles carry an inner hole radius on every sector; sliced pie
/// additionally emits one separator line per sector boundary.
pub(crate) fn build_pie_series(
    k: usize,
    display: &[f64],
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let total: f64 = display.iter().map(|value| value.abs()).sum();
    if display.is_empty() || total == 0.0 {
        return SeriesGeometry::empty(k);
    }

    let center = ctx.frame.center();
    let radius = ctx.frame.width.min(ctx.frame.height) * 0.5 * RADIAL_RADIUS_RATIO;
    let inner_radius = if ctx.style == ChartStyle::Doughnut {
        radius * DOUGHNUT_HOLE_RATIO
    } else {
        0.0
    };

    let mut geometry = SeriesGeometry::empty(k);
    let mut start_angle = 0.0;

    for (i, value) in display.iter().enumerate() {
        let sweep = value.abs() / total * 360.0;
        let sector = SectorShape {
            center,
            radius,
            inner_radius,
            start_angle_deg: start_angle,
            sweep_angle_deg: sweep,
        };

        if ctx.style == ChartStyle::SlicedPie {
            geometry.primitives.push(GeometryPrimitive::Polyline(Polyline {
                points: vec![center, sector.arc_point(0.0)],
            }));
        }

        let arc_middle = sector.arc_point(0.5);
        geometry.hit_points.push(arc_middle);
        geometry
            .hit_rects
            .push(PlotRect::centered_square(arc_middle, MARKER_SIZE_PX));

        if ctx.show_value_labels {
            let label_anchor = PlotPoint::new(
                center.x + (arc_middle.x - center.x) * 0.75,
                center.y + (arc_middle.y - center.y) * 0.75,
            );
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: label_anchor,
            });
        }

        geometry.primitives.push(GeometryPrimitive::Sector(sector));
        start_angle += sweep;
    }

    geometry
}
