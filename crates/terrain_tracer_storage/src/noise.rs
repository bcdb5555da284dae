use crate::{Array2, HeightFieldError};

use simdnoise::NoiseBuilder;
use terrain_tracer_core::prelude::*;

/// Fractal Brownian motion noise over `extent`, scaled into `[-1, 1]` to match the default `HeightFieldConfig`.
pub fn noise_height_map(
    extent: Extent2i,
    freq: f32,
    seed: i32,
    octaves: u8,
) -> Result<Array2<f32>, HeightFieldError> {
    let min = Point2f::from(extent.minimum);
    let noise = NoiseBuilder::fbm_2d_offset(
        min.x(),
        extent.shape.x() as usize,
        min.y(),
        extent.shape.y() as usize,
    )
    .with_freq(freq)
    .with_seed(seed)
    .with_octaves(octaves)
    .generate_scaled(-1.0, 1.0);

    Array2::from_vec(extent, noise)
}
