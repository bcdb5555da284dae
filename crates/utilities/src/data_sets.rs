use rand::{rngs::StdRng, Rng, SeedableRng};
use terrain_tracer_core::prelude::*;
use terrain_tracer_storage::Array2;

/// A square height map of uniformly random samples in `[-1, 1)`, reproducible from `seed`.
pub fn random_height_map(edge_length: i32, seed: u64) -> Array2<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let extent = Extent2i::from_min_and_shape(Point2i::ZERO, Point2i::fill(edge_length));

    Array2::fill_with(extent, |_| rng.gen_range(-1.0..1.0))
}

/// A square height map that rises linearly along X from -1 to 1.
pub fn ramp_height_map(edge_length: i32) -> Array2<f32> {
    let extent = Extent2i::from_min_and_shape(Point2i::ZERO, Point2i::fill(edge_length));
    let denom = (edge_length - 1).max(1) as f32;

    Array2::fill_with(extent, |p| 2.0 * p.x() as f32 / denom - 1.0)
}

/// Uniformly random points in the root cube `(0, size]^3` of an octree.
pub fn random_points(size: f32, n: usize, seed: u64) -> Vec<Point3f> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            PointN([
                size - rng.gen_range(0.0..size),
                size - rng.gen_range(0.0..size),
                size - rng.gen_range(0.0..size),
            ])
        })
        .collect()
}

/// Random rays starting outside of the root cube `(0, size]^3` and aimed at a random point inside of it.
pub fn random_rays_into_cube(size: f32, n: usize, seed: u64) -> Vec<Ray> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let target = PointN([
                rng.gen_range(0.0..size),
                rng.gen_range(0.0..size),
                rng.gen_range(0.0..size),
            ]);
            let origin = PointN([
                rng.gen_range(-size..2.0 * size),
                rng.gen_range(size..3.0 * size),
                rng.gen_range(-size..2.0 * size),
            ]);

            Ray::through(origin, target)
        })
        .collect()
}

/// Rays moving along each of the six axis directions into the root cube `(0, size]^3`. The two coordinates of the origin
/// that stay fixed along the ray step over every integer and half-integer in `[0, size]`, so many rays lie exactly in the
/// face planes and along the edges shared by neighboring cells.
pub fn axis_aligned_rays(size: f32) -> Vec<Ray> {
    let steps = 2 * size as i32;
    let coords: Vec<f32> = (0..=steps).map(|i| i as f32 * 0.5).collect();

    let mut rays = Vec::new();
    for &a in coords.iter() {
        for &b in coords.iter() {
            rays.push(Ray::new(PointN([a, 3.0 * size, b]), PointN([0.0, -1.0, 0.0])));
            rays.push(Ray::new(PointN([a, -size, b]), PointN([0.0, 1.0, 0.0])));
            rays.push(Ray::new(PointN([-size, a, b]), PointN([1.0, 0.0, 0.0])));
            rays.push(Ray::new(PointN([2.0 * size, a, b]), PointN([-1.0, 0.0, 0.0])));
            rays.push(Ray::new(PointN([a, b, -size]), PointN([0.0, 0.0, 1.0])));
            rays.push(Ray::new(PointN([a, b, 2.0 * size]), PointN([0.0, 0.0, -1.0])));
        }
    }

    rays
}
