use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Point2;
use std::f64::consts::TAU;
use unistroke::{Recognizer, RecognizerParams};

fn circle_stroke(n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / (n - 1) as f64;
            Point2::new(320.0 + 90.0 * t.sin(), 240.0 - 90.0 * t.cos())
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let rec = Recognizer::with_builtins(RecognizerParams::default()).expect("builtins");
    let mut group = c.benchmark_group("classify_builtins");
    for raw_points in [32usize, 128, 1024] {
        let stroke = circle_stroke(raw_points);
        group.bench_with_input(
            BenchmarkId::from_parameter(raw_points),
            &stroke,
            |b, stroke| b.iter(|| rec.classify_stroke(black_box(stroke)).expect("classify")),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
