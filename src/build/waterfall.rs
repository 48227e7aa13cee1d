use crate::core::aggregate::waterfall_prefix_sums;
use crate::core::frame::BoundaryMode;
use crate::core::geometry::{GeometryPrimitive, RectShape, SeriesGeometry, ValueLabel};
use crate::core::types::{PlotPoint, PlotRect};
use crate::core::value::SeriesValue;

use super::{BuildContext, COLUMN_ZONE_RATIO, label_text};

/// Builds waterfall geometry: cascading bars where each bar starts at the
/// previous running total and extends by the current signed value.
///
/// Rising and falling bars carry the `negative` tag so hosts can brush the
/// two groups independently.
pub(crate) fn build_waterfall_series(
    k: usize,
    display: &[f64],
    values: &[SeriesValue],
    ctx: &BuildContext,
) -> SeriesGeometry {
    let count = display.len();
    if count == 0 {
        return SeriesGeometry::empty(k);
    }

    let totals = waterfall_prefix_sums(display);
    let band = ctx.frame.category_band(count);
    let zone = band * COLUMN_ZONE_RATIO;

    let mut geometry = SeriesGeometry::empty(k);
    let mut previous_total = 0.0;

    for (i, (value, total)) in display.iter().zip(&totals).enumerate() {
        let anchor = ctx
            .frame
            .category_anchor_x(i, count, BoundaryMode::WithOffset, ctx.flow);
        let from = ctx.map_value(previous_total);
        let to = ctx.map_value(*total);
        let rect = PlotRect::from_corners(
            PlotPoint::new(anchor - zone * 0.5, from),
            PlotPoint::new(anchor + zone * 0.5, to),
        );

        geometry.primitives.push(GeometryPrimitive::Rect(RectShape {
            rect,
            negative: *value < 0.0,
        }));
        geometry.hit_rects.push(rect);
        geometry.hit_points.push(PlotPoint::new(anchor, to));

        if ctx.show_value_labels {
            geometry.labels.push(ValueLabel {
                text: label_text(&values[i], *value),
                anchor: PlotPoint::new(anchor, to - 4.0),
            });
        }

        previous_total = *total;
    }

    geometry
}
