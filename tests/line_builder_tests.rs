use plotgrid::api::{ChartLayoutEngine, LayoutConfig};
use plotgrid::core::geometry::GeometryPrimitive;
use plotgrid::core::style::ChartStyle;
use plotgrid::core::types::{PlotPoint, Viewport};
use plotgrid::core::value::SeriesValue;

fn plain_values(values: &[f64]) -> Vec<SeriesValue> {
    values
        .iter()
        .map(|v| SeriesValue::new(*v).expect("finite value"))
        .collect()
}

fn engine_with(style: ChartStyle, groups: &[&[f64]], viewport: Viewport) -> ChartLayoutEngine {
    let mut engine =
        ChartLayoutEngine::new(LayoutConfig::new(viewport, style)).expect("engine init");
    for (k, values) in groups.iter().enumerate() {
        engine
            .add_series(format!("series-{k}"), plain_values(values))
            .expect("add series");
    }
    engine
}

#[test]
fn line_points_sit_on_category_anchors() {
    let mut engine = engine_with(
        ChartStyle::Lines,
        &[&[1.0, 2.0, 3.0, 4.0, 5.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    // Axis resolves 0..5 over 300px, so one value unit is 60px.
    let geometry = &snapshot.series[0];
    assert_eq!(geometry.hit_points.len(), 5);
    assert_eq!(geometry.hit_points[0], PlotPoint::new(0.0, 240.0));
    assert_eq!(geometry.hit_points[4], PlotPoint::new(400.0, 0.0));

    match &geometry.primitives[0] {
        GeometryPrimitive::Polyline(polyline) => {
            assert_eq!(polyline.points.len(), 5);
            assert_eq!(polyline.points, geometry.hit_points);
        }
        other => panic!("expected polyline, got {other:?}"),
    }
}

#[test]
fn marker_styles_record_hit_rects_per_point() {
    let mut engine = engine_with(
        ChartStyle::LinesWithMarkers,
        &[&[1.0, 2.0, 3.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    let geometry = &snapshot.series[0];
    assert_eq!(geometry.hit_rects.len(), 3);
    for (rect, point) in geometry.hit_rects.iter().zip(&geometry.hit_points) {
        assert_eq!(rect.center(), *point);
        assert!(rect.contains(*point));
        assert_eq!(rect.width, 8.0);
        assert_eq!(rect.height, 8.0);
    }
}

#[test]
fn plain_lines_have_no_hit_rects() {
    let mut engine = engine_with(ChartStyle::Lines, &[&[1.0, 2.0, 3.0]], Viewport::new(400, 300));
    let snapshot = engine.compute_layout().expect("layout");

    assert!(snapshot.series[0].hit_rects.is_empty());
    assert_eq!(snapshot.series[0].hit_points.len(), 3);
}

#[test]
fn smooth_lines_emit_cubic_segments_preserving_endpoints() {
    let mut engine = engine_with(
        ChartStyle::SmoothLines,
        &[&[1.0, 3.0, 2.0, 4.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    let geometry = &snapshot.series[0];
    match &geometry.primitives[0] {
        GeometryPrimitive::SmoothPath(path) => {
            assert_eq!(path.segments.len(), 3);
            assert_eq!(path.segments[0].ctrl1, path.segments[0].from);
            assert_eq!(path.segments[0].from, geometry.hit_points[0]);
            assert_eq!(path.segments[2].to, geometry.hit_points[3]);
            assert!(path.closure.is_empty());
        }
        other => panic!("expected smooth path, got {other:?}"),
    }
}

#[test]
fn two_point_smooth_series_falls_back_to_a_polyline() {
    let mut engine = engine_with(
        ChartStyle::SmoothLines,
        &[&[1.0, 2.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    assert!(matches!(
        snapshot.series[0].primitives[0],
        GeometryPrimitive::Polyline(_)
    ));
}

#[test]
fn stacked_lines_offset_later_series_by_prior_sums() {
    let mut engine = engine_with(
        ChartStyle::StackedLines,
        &[&[1.0, 2.0], &[3.0, 4.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    // Cumulative tops are [1, 2] and [4, 6]; the axis resolves 0..6 with
    // 50px per unit.
    assert_eq!(snapshot.axis.max, 6.0);
    let first = &snapshot.series[0];
    let second = &snapshot.series[1];
    assert_eq!(first.hit_points[0].y, 250.0);
    assert_eq!(second.hit_points[0].y, 100.0);
    assert_eq!(second.hit_points[1].y, 0.0);
}

#[test]
fn single_series_stacked_layout_matches_plain_lines() {
    let values: &[f64] = &[2.0, 5.0, 3.0];
    let mut plain = engine_with(ChartStyle::Lines, &[values], Viewport::new(400, 300));
    let mut stacked = engine_with(ChartStyle::StackedLines, &[values], Viewport::new(400, 300));

    let plain_points = plain.compute_layout().expect("layout").series[0]
        .hit_points
        .clone();
    let stacked_points = stacked.compute_layout().expect("layout").series[0]
        .hit_points
        .clone();
    assert_eq!(plain_points, stacked_points);
}

#[test]
fn full_stacked_lines_resolve_to_the_percent_scale() {
    let mut engine = engine_with(
        ChartStyle::FullStackedLines,
        &[&[1.0, 3.0], &[3.0, 1.0]],
        Viewport::new(400, 300),
    );
    let snapshot = engine.compute_layout().expect("layout");

    assert_eq!(snapshot.axis.max, 100.0);
    // The top boundary of the last series is pinned at 100%.
    let top = &snapshot.series[1];
    assert_eq!(top.hit_points[0].y, 0.0);
    assert_eq!(top.hit_points[1].y, 0.0);
    // The first series sits at 25% and 75%.
    let first = &snapshot.series[0];
    assert_eq!(first.hit_points[0].y, 225.0);
    assert_eq!(first.hit_points[1].y, 75.0);
}
