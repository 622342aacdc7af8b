use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trading_charts::api::{CandleChart, CandleChartConfig};
use trading_charts::core::{
    Bar, CandleLayout, DEFAULT_SMOOTHING, LineLayout, Point, Viewport, build_line_series_paths,
    project_candles,
};
use trading_charts::interaction::{NearestPointResolver, PointerEvent, PointerTracker};
use trading_charts::render::NullRenderer;

fn generated_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let base = 100.0 + t * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            Bar::new(i as i64 * 60, open, high, low, close).with_volume(1_000.0 + t)
        })
        .collect()
}

fn generated_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Point::new(i as i64 * 60, 100.0 + (t * 0.1).sin() * 5.0)
        })
        .collect()
}

fn bench_candle_layout_10k(c: &mut Criterion) {
    let bars = generated_bars(10_000);
    let viewport = Viewport::new(1920.0, 1080.0);

    c.bench_function("candle_layout_10k", |b| {
        b.iter(|| CandleLayout::new(black_box(viewport), 14.0, 56.0, black_box(&bars)))
    });
}

fn bench_candle_projection_10k(c: &mut Criterion) {
    let bars = generated_bars(10_000);
    let layout = CandleLayout::new(Viewport::new(1920.0, 1080.0), 14.0, 56.0, &bars);

    c.bench_function("candle_projection_10k", |b| {
        b.iter(|| project_candles(black_box(&bars), black_box(&layout)))
    });
}

fn bench_smooth_line_paths_5k(c: &mut Criterion) {
    let points = generated_points(5_000);
    let layout = LineLayout::new(Viewport::new(1920.0, 220.0), 16.0, &points);
    let projected = layout.project_all(&points);

    c.bench_function("smooth_line_paths_5k", |b| {
        b.iter(|| {
            build_line_series_paths(
                black_box(&projected),
                DEFAULT_SMOOTHING,
                layout.plot_bottom(),
            )
        })
    });
}

fn bench_nearest_point_scan_5k(c: &mut Criterion) {
    let points = generated_points(5_000);
    let layout = LineLayout::new(Viewport::new(1920.0, 220.0), 16.0, &points);
    let projected = layout.project_all(&points);
    let resolver = NearestPointResolver::new(&projected);

    c.bench_function("nearest_point_scan_5k", |b| {
        b.iter(|| {
            PointerTracker::transition(
                black_box(PointerEvent::TouchMove { x: 1_234.5 }),
                &resolver,
            )
        })
    });
}

fn bench_candle_snapshot_json_2k(c: &mut Criterion) {
    let mut chart = CandleChart::new(NullRenderer::default(), CandleChartConfig::default())
        .expect("chart init");
    chart.set_width(1600.0);
    chart.set_data(generated_bars(2_000));

    c.bench_function("candle_snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_candle_layout_10k,
    bench_candle_projection_10k,
    bench_smooth_line_paths_5k,
    bench_nearest_point_scan_5k,
    bench_candle_snapshot_json_2k
);
criterion_main!(benches);
