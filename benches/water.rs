//! Benchmarks for waterline simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use waterline::*;

fn bench_surface_update(c: &mut Criterion) {
    c.bench_function("surface_100_joints_1000_steps", |b| {
        b.iter(|| {
            let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
            sim.splash_with_width(400.0, 50.0, 100.0);
            for _ in 0..1000 {
                sim.update(1.0 / 500.0);
            }
            sim.joints()[50].displacement()
        });
    });
}

fn bench_splash_droplets(c: &mut Criterion) {
    c.bench_function("splash_20x_force_100_500_steps", |b| {
        b.iter(|| {
            let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
            for i in 0..20 {
                sim.splash_with_width(40.0 * i as f32, 100.0, 20.0);
            }
            for _ in 0..500 {
                sim.update(1.0 / 500.0);
            }
            sim.droplet_pool().active_count()
        });
    });
}

fn bench_contour(c: &mut Criterion) {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 400, 235.0);
    sim.splash_with_width(400.0, 50.0, 100.0);
    for _ in 0..100 {
        sim.update(1.0 / 500.0);
    }
    c.bench_function("contour_400_joints", |b| {
        b.iter(|| sim.render().len());
    });
}

criterion_group!(benches, bench_surface_update, bench_splash_droplets, bench_contour);
criterion_main!(benches);
