//! Storage and indexing for height-field terrain.
//!
//! The core storage types are:
//!   - `Array2`: a dense, row-major grid of samples, usually noise
//!   - `Octree`: a sparse octree of the 3D points made from those samples by `height_field_points`
//!
//! With the `simdnoise` feature, `noise_height_map` generates fractal noise samples to build terrain from.

pub mod array2;
pub mod error;
pub mod height_field;
pub mod octree;

#[cfg(feature = "simdnoise")]
pub mod noise;

pub use array2::Array2;
pub use error::{HeightFieldError, OctreeError};
pub use height_field::{height_field_points, octree_size_for, HeightFieldConfig};
pub use octree::{
    GenerateStats, Insertion, Octree, OctreeNode, OctreeVisitor, VisitStatus, MAX_OCTREE_SIZE,
};

#[cfg(feature = "simdnoise")]
pub use noise::noise_height_map;

pub mod prelude {
    pub use super::{
        height_field_points, octree_size_for, Array2, HeightFieldConfig, Octree, OctreeNode,
        OctreeVisitor, VisitStatus,
    };
}
