use crate::MAX_OCTREE_SIZE;

use thiserror::Error;

/// Failures when building an `Octree`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum OctreeError {
    /// The root edge length must be a power of 2 in `1..=MAX_OCTREE_SIZE`.
    #[error("octree size {0} is not a power of two in 1..={}", MAX_OCTREE_SIZE)]
    InvalidSize(u32),
}

/// Failures when converting samples into height-field points.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HeightFieldError {
    #[error("sample range ({min}, {max}) is empty")]
    EmptySampleRange { min: f32, max: f32 },
    #[error("expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("sample at column {col}, row {row} is not finite")]
    NonFiniteSample { col: i32, row: i32 },
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
