use crate::core::frame::BoundaryMode;
use crate::core::geometry::{GeometryPrimitive, RectShape, SeriesGeometry, ValueLabel};
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BuildContext, COLUMN_ZONE_RATIO, label_text};

/// Builds column geometry: one vertical rectangle per value, grouped side by
/// side within the category band, or anchored on the signed stack base for
/// stacked and full-stacked variants.
pub(crate) fn build_column_series(
    k: usize,
    series_count: usize,
    display: &[f64],
    bases: Option<&[f64]>,
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 || series_count == 0 {
        return SeriesGeometry::empty(k);
    }

    let band = ctx.frame.category_band(count);
    let zone = band * COLUMN_ZONE_RATIO;
    let stacked = bases.is_some();
    let column_width = if stacked {
        zone
    } else {
        zone / series_count as f64
    };

    let mut geometry = SeriesGeometry::empty(k);

    for (i, value) in display.iter().enumerate() {
        // Columns always sit on band centers; boundary insets only apply to
        // point-anchored styles.
        let anchor = ctx
            .frame
            .category_anchor_x(i, count, BoundaryMode::WithOffset, ctx.flow);
        let x_left = if stacked {
            anchor - zone * 0.5
        } else {
            anchor - zone * 0.5 + k as f64 * column_width
        };

        let base = bases.map_or(0.0, |b| b[i]);
        let from = ctx.map_value(base);
        let to = ctx.map_value(base + value);
        let rect = PlotRect::from_corners(
            PlotPoint::new(x_left, from),
            PlotPoint::new(x_left + column_width, to),
        );

        geometry.primitives.push(GeometryPrimitive::Rect(RectShape {
            rect,
            negative: *value < 0.0,
        }));
        geometry.hit_rects.push(rect);
        geometry
            .hit_points
            .push(PlotPoint::new(x_left + column_width * 0.5, to));

        if ctx.show_value_labels {
            let offset = if *value < 0.0 { 12.0 } else { -4.0 };
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: PlotPoint::new(x_left + column_width * 0.5, to + offset),
            });
        }
    }

    geometry
}

/// Builds bar geometry: the horizontal mirror of columns. Categories run top
/// to bottom; values grow along the x axis, leftward when the flow or an
/// all-negative data set reverses the axis.
pub(crate) fn build_bar_series(
    k: usize,
    series_count: usize,
    display: &[f64],
    bases: Option<&[f64]>,
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 || series_count == 0 {
        return SeriesGeometry::empty(k);
    }

    let band = ctx.frame.height / count as f64;
    let zone = band * COLUMN_ZONE_RATIO;
    let stacked = bases.is_some();
    let bar_height = if stacked {
        zone
    } else {
        zone / series_count as f64
    };

    let mut geometry = SeriesGeometry::empty(k);

    for (i, value) in display.iter().enumerate() {
        let anchor = ctx
            .frame
            .category_anchor_y(i, count, BoundaryMode::WithOffset);
        let y_top = if stacked {
            anchor - zone * 0.5
        } else {
            anchor - zone * 0.5 + k as f64 * bar_height
        };

        let base = bases.map_or(0.0, |b| b[i]);
        let from = ctx.map_value(base);
        let to = ctx.map_value(base + value);
        let rect = PlotRect::from_corners(
            PlotPoint::new(from, y_top),
            PlotPoint::new(to, y_top + bar_height),
        );

        geometry.primitives.push(GeometryPrimitive::Rect(RectShape {
            rect,
            negative: *value < 0.0,
        }));
        geometry.hit_rects.push(rect);
        geometry
            .hit_points
            .push(PlotPoint::new(to, y_top + bar_height * 0.5));

        if ctx.show_value_labels {
            let offset = if *value < 0.0 { -4.0 } else { 4.0 };
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: PlotPoint::new(to + offset, y_top + bar_height * 0.5),
            });
        }
    }

    geometry
}
