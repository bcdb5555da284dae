//! Converting a 2D grid of noise samples into the set of 3D points indexed by the `Octree`.
//!
//! Each sample at `(col, row)` becomes exactly one point `(col + 0.5, y + 0.5, row + 0.5)` where `y` is the sample normalized
//! into `[0, 1]` and scaled to an integer height. The `+ 0.5` puts every point at the center of its unit cell, so it is never on
//! a cell boundary.

use crate::{Array2, HeightFieldError, MAX_OCTREE_SIZE};

use terrain_tracer_core::{num, prelude::*};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How raw samples are mapped to heights.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct HeightFieldConfig {
    /// The largest integer height a sample can map to.
    pub max_height: u32,
    /// The `(min, max)` range of raw sample values. Samples outside of it are clamped.
    pub sample_range: (f32, f32),
}

impl Default for HeightFieldConfig {
    fn default() -> Self {
        Self {
            max_height: 32,
            sample_range: (-1.0, 1.0),
        }
    }
}

impl HeightFieldConfig {
    pub fn validate(&self) -> Result<(), HeightFieldError> {
        let (min, max) = self.sample_range;
        // Also catches NaN bounds.
        if !(min < max) {
            tracing::warn!("Rejecting empty sample range ({}, {})", min, max);
            return Err(HeightFieldError::EmptySampleRange { min, max });
        }

        Ok(())
    }

    /// Maps a raw sample into `[0, 1]`.
    #[inline]
    pub fn normalize(&self, sample: f32) -> f32 {
        let (min, max) = self.sample_range;

        num::clamp((sample - min) / (max - min), 0.0, 1.0)
    }

    /// The integer height (as a float) of a raw sample, in `0..=max_height`.
    #[inline]
    pub fn height_of(&self, sample: f32) -> f32 {
        (self.normalize(sample) * self.max_height as f32).round()
    }
}

/// Returns one point per sample of `samples`, in row-major order. Columns and rows are counted from the minimum of the array's
/// extent, so the points always start at `(0.5, _, 0.5)`.
pub fn height_field_points(
    samples: &Array2<f32>,
    config: &HeightFieldConfig,
) -> Result<Vec<Point3f>, HeightFieldError> {
    config.validate()?;

    let minimum = samples.extent().minimum;
    let mut points = Vec::with_capacity(samples.values().len());
    for (p, &sample) in samples.extent().iter_points().zip(samples.values().iter()) {
        let PointN([col, row]) = p - minimum;
        if !sample.is_finite() {
            return Err(HeightFieldError::NonFiniteSample { col, row });
        }

        points.push(PointN([
            col as f32 + 0.5,
            config.height_of(sample) + 0.5,
            row as f32 + 0.5,
        ]));
    }

    Ok(points)
}

/// The smallest power of 2 edge length for an octree that covers every point of a `shape` height field with heights in
/// `0..=max_height`.
///
/// A height field too large for any octree gets `2 * MAX_OCTREE_SIZE`, which `Octree` rejects with
/// `OctreeError::InvalidSize`.
pub fn octree_size_for(shape: Point2i, max_height: u32) -> u32 {
    let width = shape.x().max(0) as u32;
    let depth = shape.y().max(0) as u32;

    width
        .max(depth)
        .max(max_height.saturating_add(1))
        .min(MAX_OCTREE_SIZE + 1)
        .next_power_of_two()
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Octree, OctreeError};

    use pretty_assertions::assert_eq;

    #[test]
    fn samples_map_to_centered_points() {
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([2, 2]));
        let samples = Array2::from_vec(extent, vec![-1.0, 0.0, 1.0, 0.5]).unwrap();
        let config = HeightFieldConfig {
            max_height: 4,
            ..Default::default()
        };

        let points = height_field_points(&samples, &config).unwrap();

        assert_eq!(
            points,
            vec![
                PointN([0.5, 0.5, 0.5]),
                PointN([1.5, 2.5, 0.5]),
                PointN([0.5, 4.5, 1.5]),
                PointN([1.5, 3.5, 1.5]),
            ]
        );
    }

    #[test]
    fn columns_are_relative_to_extent_minimum() {
        let extent = Extent2i::from_min_and_shape(PointN([-3, 7]), PointN([1, 1]));
        let samples = Array2::fill(extent, 5.0);

        let points = height_field_points(&samples, &HeightFieldConfig::default()).unwrap();

        // Clamped to the top of the range.
        assert_eq!(points, vec![PointN([0.5, 32.5, 0.5])]);
    }

    #[test]
    fn empty_range_is_rejected() {
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([1, 1]));
        let samples = Array2::fill(extent, 0.0);
        let config = HeightFieldConfig {
            max_height: 8,
            sample_range: (1.0, 1.0),
        };

        assert_eq!(
            height_field_points(&samples, &config),
            Err(HeightFieldError::EmptySampleRange { min: 1.0, max: 1.0 })
        );
    }

    #[test]
    fn non_finite_sample_is_rejected() {
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([2, 2]));
        let samples = Array2::from_vec(extent, vec![0.0, 0.0, f32::NAN, 0.0]).unwrap();

        assert_eq!(
            height_field_points(&samples, &HeightFieldConfig::default()),
            Err(HeightFieldError::NonFiniteSample { col: 0, row: 1 })
        );
    }

    #[test]
    fn octree_size_covers_tallest_point() {
        assert_eq!(octree_size_for(PointN([4, 4]), 3), 4);
        assert_eq!(octree_size_for(PointN([4, 4]), 4), 8);
        assert_eq!(octree_size_for(PointN([100, 20]), 32), 128);
        assert_eq!(octree_size_for(PointN([0, 0]), 0), 1);
    }

    #[test]
    fn oversized_height_field_gets_rejected_size() {
        let too_big = MAX_OCTREE_SIZE * 2;

        assert_eq!(octree_size_for(PointN([4, 4]), u32::MAX), too_big);
        assert_eq!(octree_size_for(PointN([i32::MAX, 1]), 0), too_big);
        assert_eq!(octree_size_for(PointN([4, 4]), MAX_OCTREE_SIZE - 1), MAX_OCTREE_SIZE);
        assert_eq!(Octree::new(too_big).unwrap_err(), OctreeError::InvalidSize(too_big));
    }
}
