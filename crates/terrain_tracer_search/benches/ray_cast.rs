use terrain_tracer_search::{cast_ray_at_leaves, cast_ray_at_octree};
use terrain_tracer_storage::prelude::*;
use utilities::data_sets::{random_height_map, random_rays_into_cube};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn height_field_octree(edge_len: i32) -> Octree {
    let config = HeightFieldConfig {
        max_height: edge_len as u32 - 1,
        ..Default::default()
    };
    let points = height_field_points(&random_height_map(edge_len, 0), &config).unwrap();

    Octree::from_points(edge_len as u32, points).unwrap()
}

fn ray_cast_octree(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_cast_octree");
    for power in [4, 5, 6].iter() {
        let edge_len = 1 << *power;
        let octree = height_field_octree(edge_len);
        let rays = random_rays_into_cube(edge_len as f32, 100, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(edge_len),
            &edge_len,
            |b, _| {
                b.iter(|| {
                    for ray in rays.iter() {
                        black_box(cast_ray_at_octree(&octree, ray, f32::INFINITY));
                    }
                });
            },
        );
    }
    group.finish();
}

fn ray_cast_leaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_cast_leaves");
    for power in [4, 5, 6].iter() {
        let edge_len = 1 << *power;
        let octree = height_field_octree(edge_len);
        let leaves = octree.collect_leaves_with_points();
        let rays = random_rays_into_cube(edge_len as f32, 100, 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(edge_len),
            &edge_len,
            |b, _| {
                b.iter(|| {
                    for ray in rays.iter() {
                        black_box(cast_ray_at_leaves(
                            leaves.iter().copied(),
                            ray,
                            f32::INFINITY,
                        ));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, ray_cast_octree, ray_cast_leaves);
criterion_main!(benches);
