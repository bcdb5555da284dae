//! Ray queries against height-field octrees.

pub mod ray_cast;

pub use ray_cast::{cast_ray_at_leaves, cast_ray_at_octree, nearer_impact, PointRayImpact};
