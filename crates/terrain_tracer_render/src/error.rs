use terrain_tracer_storage::{HeightFieldError, OctreeError};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("{object} refers to material {index}, but the scene only has {count} materials")]
    MissingMaterial {
        object: String,
        index: usize,
        count: usize,
    },
    #[error("failed to build terrain points: {0}")]
    HeightField(#[from] HeightFieldError),
    #[error("failed to build terrain octree: {0}")]
    Octree(#[from] OctreeError),
}
