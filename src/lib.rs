//! Ray tracing procedurally generated height-field terrain through a sparse octree.
//!
//! This library is organized into several crates. The most fundamental are:
//! - **core**: points, extents, octants, rays and the primitive intersection routines
//! - **storage**: height-field sample grids and the `Octree` built from them
//!
//! Then you get extra bits of functionality from the others:
//! - **search**: casting rays at an `Octree`, with a pruned traversal and a brute-force fallback
//! - **render**: per-pixel shading of terrain, spheres and boxes into an RGBA color buffer
//!
//! The usual pipeline is noise samples → `height_field_points` → `Octree::generate` → `cast_ray_at_octree` for every pixel,
//! which `render::Terrain` and `render::Renderer` put together.

pub use terrain_tracer_core as core;
pub use terrain_tracer_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "search")]
    pub use super::search::{cast_ray_at_leaves, cast_ray_at_octree, PointRayImpact};

    #[cfg(feature = "render")]
    pub use super::render::prelude::*;
}

#[cfg(feature = "search")]
pub use terrain_tracer_search as search;

#[cfg(feature = "render")]
pub use terrain_tracer_render as render;
