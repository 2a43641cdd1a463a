use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cubecast_math::Vec3f;
use cubecast_raycast::{GridWalk, Ray, raycast};
use cubecast_voxel::{WorldPreset, build_world};

fn bench_raycast_hit_floor(c: &mut Criterion) {
    let world = build_world(&WorldPreset::Reference, None).expect("reference world");
    let ray = Ray::new(
        Vec3f::new(4.5, 7.5, 4.5),
        Vec3f::new(0.3, -1.0, 0.2).normalize(),
        8.0,
    );
    c.bench_function("raycast_hit_floor", |bencher| {
        bencher.iter(|| black_box(raycast(&world, black_box(&ray))))
    });
}

fn bench_raycast_miss_long(c: &mut Criterion) {
    let world = build_world(&WorldPreset::Flat { radius: 4, layers: 1 }, None).expect("flat world");
    let ray = Ray::new(
        Vec3f::new(-60.5, 10.5, -60.5),
        Vec3f::new(1.0, 0.05, 1.0).normalize(),
        150.0,
    );
    c.bench_function("raycast_miss_long", |bencher| {
        bencher.iter(|| black_box(raycast(&world, black_box(&ray))))
    });
}

fn bench_grid_walk_only(c: &mut Criterion) {
    let start = Vec3f::new(0.1, 0.2, 0.3);
    let end = Vec3f::new(40.7, -25.9, 17.4);
    c.bench_function("grid_walk_100_cells", |bencher| {
        bencher.iter(|| black_box(GridWalk::new(black_box(start), black_box(end)).count()))
    });
}

criterion_group!(
    benches,
    bench_raycast_hit_floor,
    bench_raycast_miss_long,
    bench_grid_walk_only
);
criterion_main!(benches);
