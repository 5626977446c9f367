use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;
use zirkel_editor::{resolve_snap, Sketch, SNAP_DISTANCE};

/// Baut einen synthetischen Sketch: gekreuzte Diagonalen plus Kreisreihe,
/// damit reichlich Schnittpunkte entstehen.
fn build_synthetic_sketch(primitive_count: usize) -> Sketch {
    let mut sketch = Sketch::new();
    let per_kind = primitive_count / 2;

    for index in 0..per_kind {
        let offset = index as f64 * 3.0;
        sketch.add_segment(
            DVec2::new(offset, 0.0),
            DVec2::new(offset + 100.0, 100.0),
        );
        sketch
            .add_circle(DVec2::new(offset * 0.5 + 20.0, 40.0), 30.0)
            .expect("Radius ist nicht negativ");
    }

    sketch.recompute_intersections();
    sketch
}

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 100) as f64 + 0.37;
            let y = ((i * 7) % 100) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for &primitive_count in &[16usize, 64usize, 128usize] {
        let sketch = build_synthetic_sketch(primitive_count);

        group.bench_with_input(
            BenchmarkId::new("full_rebuild", primitive_count),
            &sketch,
            |b, s| {
                b.iter(|| {
                    let mut sketch = s.clone();
                    sketch.recompute_intersections();
                    black_box(sketch.intersection_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_snap_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_resolution");

    for &primitive_count in &[16usize, 128usize] {
        let sketch = build_synthetic_sketch(primitive_count);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("resolve_batch", primitive_count),
            &sketch,
            |b, s| {
                b.iter(|| {
                    let mut snapped = 0usize;
                    for point in &query_points {
                        if resolve_snap(black_box(*point), s, SNAP_DISTANCE).is_snap() {
                            snapped += 1;
                        }
                    }
                    black_box(snapped)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_recompute, bench_snap_resolution);
criterion_main!(benches);
