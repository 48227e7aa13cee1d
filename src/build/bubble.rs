use crate::core::axis::dominant_abs;
use crate::core::geometry::{EllipseShape, GeometryPrimitive, RectShape, SeriesGeometry, ValueLabel};
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BUBBLE_RADIUS_RATIO, BuildContext, FUNNEL_WIDTH_RATIO, label_text};

/// Builds bubble geometry: one ellipse per value at the category anchor.
///
/// The radius is a fixed fraction of the category band, never value-driven.
pub(crate) fn build_bubble_series(
    k: usize,
    display: &[f64],
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let radius = ctx.frame.category_band(count) * BUBBLE_RADIUS_RATIO;
    let mut geometry = SeriesGeometry::empty(k);

    for (i, value) in display.iter().enumerate() {
        let center = PlotPoint::new(
            ctx.frame
                .category_anchor_x(i, count, ctx.boundary, ctx.flow),
            ctx.map_value(*value),
        );
        let ellipse = EllipseShape {
            center,
            radius_x: radius,
            radius_y: radius,
        };

        geometry.hit_rects.push(ellipse.bounds());
        geometry.hit_points.push(center);
        geometry
            .primitives
            .push(GeometryPrimitive::Ellipse(ellipse));

        if ctx.show_value_labels {
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: PlotPoint::new(center.x, center.y - radius - 4.0),
            });
        }
    }

    geometry
}

/// Builds funnel geometry from the first series: horizontally centered bars
/// stacked top to bottom, each bar's width proportional to the value against
/// the series' own maximum.
pub(crate) fn build_funnel_series(
    k: usize,
    display: &[f64],
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let peak = dominant_abs(display);
    if peak == 0.0 {
        return SeriesGeometry::empty(k);
    }

    let slot_height = ctx.frame.height / count as f64;
    let center_x = ctx.frame.left + ctx.frame.width * 0.5;
    let mut geometry = SeriesGeometry::empty(k);

    for (i, value) in display.iter().enumerate() {
        let width = value.abs() / peak * ctx.frame.width * FUNNEL_WIDTH_RATIO;
        let rect = PlotRect::new(
            center_x - width * 0.5,
            ctx.frame.top + i as f64 * slot_height,
            width,
            slot_height,
        );

        geometry.primitives.push(GeometryPrimitive::Rect(RectShape {
            rect,
            negative: *value < 0.0,
        }));
        geometry.hit_rects.push(rect);
        geometry.hit_points.push(rect.center());

        if ctx.show_value_labels {
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: rect.center(),
            });
        }
    }

    geometry
}
