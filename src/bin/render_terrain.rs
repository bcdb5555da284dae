use terrain_tracer::{prelude::*, storage::noise_height_map};

use std::time::Instant;

const GRID_EDGE: i32 = 128;
const IMAGE_WIDTH: u32 = 640;
const IMAGE_HEIGHT: u32 = 360;

fn main() {
    let args: Vec<_> = std::env::args().collect();
    let output_path = args.get(1).map(String::as_str).unwrap_or("terrain.png");
    let seed: i32 = args
        .get(2)
        .map(|s| s.parse().expect("seed must be an integer"))
        .unwrap_or(0);

    let extent = Extent2i::from_min_and_shape(Point2i::ZERO, Point2i::fill(GRID_EDGE));
    let samples = noise_height_map(extent, 0.02, seed, 5).unwrap();

    let start = Instant::now();
    let terrain = Terrain::new(samples, HeightFieldConfig::default()).unwrap();
    let octree = terrain.octree();
    println!(
        "Built octree of size {} in {:?}: {} nodes, {} points, {} leaves, depth {}",
        octree.size(),
        start.elapsed(),
        octree.oct_count(),
        octree.point_count(),
        octree.leaf_count(),
        octree.depth()
    );

    let scene = Scene {
        terrain: Some(terrain),
        ..Default::default()
    };
    let edge = GRID_EDGE as f32;
    let camera = PinholeCamera::look_at(
        PointN([-0.25 * edge, 0.75 * edge, -0.25 * edge]),
        PointN([0.5 * edge, 0.0, 0.5 * edge]),
        PinholeCamera::DEFAULT_VERTICAL_FOV_DEGREES,
    );

    let mut renderer = Renderer::new(RenderSettings::default());
    renderer.on_resize(IMAGE_WIDTH, IMAGE_HEIGHT);

    let start = Instant::now();
    renderer.render(&scene, &camera).unwrap();
    println!(
        "Rendered {}x{} in {:?}",
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        start.elapsed()
    );

    renderer.to_rgba_image().save(output_path).unwrap();
    println!("Saved {}", output_path);
}
