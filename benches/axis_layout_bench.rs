use criterion::{Criterion, criterion_group, criterion_main};
use plotgrid::api::{ChartLayoutEngine, LayoutConfig};
use plotgrid::core::axis::{AxisContext, AxisOrientation, resolve_axis};
use plotgrid::core::style::ChartStyle;
use plotgrid::core::types::{PlotPoint, Viewport};
use plotgrid::core::value::SeriesValue;
use std::hint::black_box;

fn bench_axis_resolution_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| ((i as f64) * 0.37).sin() * 500.0 + 250.0)
        .collect();
    let ctx = AxisContext {
        radius: 1_000.0,
        font_height: 12.0,
        origin: PlotPoint::new(0.0, 1_000.0),
        orientation: AxisOrientation::Vertical,
        split_sides: false,
        zero_on_tick: false,
        explicit_max: None,
    };

    c.bench_function("axis_resolution_10k", |b| {
        b.iter(|| {
            let _ = resolve_axis(black_box(&values), black_box(&ctx));
        })
    });
}

fn bench_stacked_column_layout_5x1k(c: &mut Criterion) {
    let config = LayoutConfig::new(Viewport::new(1920, 1080), ChartStyle::StackedColumns);
    let mut engine = ChartLayoutEngine::new(config).expect("engine init");
    for k in 0..5 {
        let values: Vec<SeriesValue> = (0..1_000)
            .map(|i| {
                let raw = ((i + k * 37) as f64 * 0.11).cos() * 40.0 + 50.0;
                SeriesValue::new(raw).expect("valid generated value")
            })
            .collect();
        engine
            .add_series(format!("series-{k}"), values)
            .expect("add series");
    }

    c.bench_function("stacked_column_layout_5x1k", |b| {
        b.iter(|| {
            engine.invalidate();
            let _ = engine.compute_layout().expect("layout should succeed");
        })
    });
}

fn bench_snapshot_json_1k(c: &mut Criterion) {
    let config = LayoutConfig::new(Viewport::new(1600, 900), ChartStyle::SmoothLines);
    let mut engine = ChartLayoutEngine::new(config).expect("engine init");
    let values: Vec<SeriesValue> = (0..1_000)
        .map(|i| SeriesValue::new((i as f64 * 0.05).sin() * 100.0).expect("valid generated value"))
        .collect();
    engine.set_series_metadata("series-id", "smooth-main");
    engine.add_series("main", values).expect("add series");

    c.bench_function("snapshot_json_1k", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_resolution_10k,
    bench_stacked_column_layout_5x1k,
    bench_snapshot_json_1k
);
criterion_main!(benches);
