//! Shading height-field terrain and simple primitives, one ray per pixel.
//!
//! A `Renderer` owns a `0xAABBGGRR` color buffer. Each call to `Renderer::render` casts a ray through every pixel of a
//! `Camera` into a `Scene` and colors the nearest hit. Terrain rays go through the `Octree` of the scene's `Terrain`, either
//! with the pruned traversal or by brute force over its leaves, depending on `RenderSettings`.

pub mod camera;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use camera::{Camera, PinholeCamera};
pub use error::RenderError;
pub use renderer::{HitData, HitObject, Renderer};
pub use scene::{Material, Scene, SceneBox, SceneSphere, Terrain};
pub use settings::{BiomeThresholds, Color, RenderSettings};

#[cfg(feature = "image")]
mod image_conversions;
#[cfg(feature = "image")]
pub use image_conversions::*;

pub mod prelude {
    pub use super::{
        BiomeThresholds, Camera, Color, Material, PinholeCamera, RenderSettings, Renderer, Scene,
        SceneBox, SceneSphere, Terrain,
    };
}
