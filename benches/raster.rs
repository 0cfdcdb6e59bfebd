//! Benchmarks for the CPU rasterizers and the physics step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use voronoi::physics::{step, ForceParams};
use voronoi::raster::Canvas;
use voronoi::seeds::SeedField;
use voronoi::Vec2;

fn bench_voronoi(c: &mut Criterion) {
    let mut group = c.benchmark_group("voronoi_200x150");

    for count in [5, 20, 80] {
        let mut rng = StdRng::seed_from_u64(count as u64);
        let field = SeedField::random_grid(count, 200, 150, &mut rng);

        group.bench_with_input(BenchmarkId::new("naive", count), &field, |b, field| {
            let mut canvas = Canvas::new(200, 150);
            b.iter(|| canvas.render_voronoi_naive(black_box(&field.seeds)))
        });

        group.bench_with_input(BenchmarkId::new("depth", count), &field, |b, field| {
            let mut canvas = Canvas::new(200, 150);
            b.iter(|| canvas.render_voronoi_depth(black_box(&field.seeds)))
        });
    }

    group.finish();
}

fn bench_physics(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics_step");
    let params = ForceParams::default();

    for count in [10, 100, 500] {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = SeedField::random(count, Vec2::new(1600.0, 900.0), &mut rng);

        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| step(black_box(&mut field), &params, 1.0 / 60.0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_voronoi, bench_physics);
criterion_main!(benches);
