use criterion::{Criterion, criterion_group, criterion_main};
use statchart::charts::{BarChart, LineChart};
use statchart::core::{BandScale, LinearScale, MercatorProjection, SeriesPoint};
use statchart::datasets;
use std::hint::black_box;

fn bench_linear_scale_map(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 0.0, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_map", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(black_box(px));
        })
    });
}

fn bench_band_lookup_48_categories(c: &mut Criterion) {
    let keys: Vec<String> = (0..48).map(|i| format!("cat-{i}")).collect();
    let scale = BandScale::new(keys, 0.0, 1_080.0, 0.1).expect("valid scale");

    c.bench_function("band_lookup_48_categories", |b| {
        b.iter(|| scale.band(black_box("cat-31")).expect("band"))
    });
}

fn bench_mercator_ring_10k(c: &mut Criterion) {
    let projection = MercatorProjection::new(100.0, 360.0, 266.0).expect("valid projection");
    let ring: Vec<(f64, f64)> = (0..10_000)
        .map(|i| {
            let t = (i as f64) / 10_000.0;
            (-180.0 + 360.0 * t, -80.0 + 160.0 * t)
        })
        .collect();

    c.bench_function("mercator_ring_10k", |b| {
        b.iter(|| projection.project_ring(black_box(&ring)))
    });
}

fn bench_line_chart_frame_10k(c: &mut Criterion) {
    let points: Vec<SeriesPoint> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            SeriesPoint::new(t, 100.0 + (t * 0.01).sin() * 50.0 + t * 0.05)
        })
        .collect();
    let chart = LineChart::default();

    c.bench_function("line_chart_frame_10k", |b| {
        b.iter(|| chart.render(black_box(&points)).expect("frame"))
    });
}

fn bench_bar_chart_frame(c: &mut Criterion) {
    let records = datasets::language_usage();
    let chart = BarChart::default();

    c.bench_function("bar_chart_frame", |b| {
        b.iter(|| chart.render(black_box(&records)).expect("frame"))
    });
}

criterion_group!(
    benches,
    bench_linear_scale_map,
    bench_band_lookup_48_categories,
    bench_mercator_ring_10k,
    bench_line_chart_frame_10k,
    bench_bar_chart_frame
);
criterion_main!(benches);
