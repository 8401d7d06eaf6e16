//! Pointer resolution cost as the placed-block count grows.
#![allow(missing_docs)]

use std::hint::black_box;

use block_builder::camera::CameraController;
use block_builder::options::CameraOptions;
use block_builder::picking::{resolve_pointer, Viewport};
use block_builder::scene::{GroundPlane, Material, PlacementGrid};
use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn filled_grid(count: i32) -> PlacementGrid {
    let mut grid = PlacementGrid::default();
    let side = 32;
    for i in 0..count {
        let point = Vec3::new((i % side - 16) as f32, 0.0, (i / side - 16) as f32);
        let _ = grid.place(point, Material::ALL[(i % 4) as usize]);
    }
    grid
}

fn resolve_benchmark(c: &mut Criterion) {
    let controller = CameraController::new(&CameraOptions::default(), 4.0 / 3.0);
    let viewport = Viewport::new(800.0, 600.0);
    let ground = GroundPlane::default();

    let mut group = c.benchmark_group("resolve_pointer");
    for count in [0, 64, 256, 1024] {
        let grid = filled_grid(count);
        let _ = group.bench_function(format!("{count}_blocks"), |b| {
            b.iter(|| {
                black_box(resolve_pointer(
                    black_box(400.0),
                    black_box(300.0),
                    &viewport,
                    &controller.camera,
                    &ground,
                    &grid,
                ))
            });
        });
    }
    group.finish();
}

fn orbit_benchmark(c: &mut Criterion) {
    let mut controller = CameraController::new(&CameraOptions::default(), 4.0 / 3.0);
    let _ = controller.begin_drag(0, 0.0, 0.0);
    let mut x = 0.0_f32;
    let _ = c.bench_function("continue_drag", |b| {
        b.iter(|| {
            x += 1.0;
            black_box(controller.continue_drag(0, black_box(x), 0.0))
        });
    });
}

criterion_group!(benches, resolve_benchmark, orbit_benchmark);
criterion_main!(benches);
