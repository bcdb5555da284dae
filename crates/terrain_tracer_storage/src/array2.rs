use crate::HeightFieldError;

use terrain_tracer_core::prelude::*;

/// A dense, row-major 2D grid of values over some `Extent2i`. X is the grid column and Y is the grid row.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    extent: Extent2i,
    values: Vec<T>,
}

impl<T> Array2<T> {
    /// Wraps `values`, which must be laid out in row-major order and have exactly one value per point of `extent`.
    pub fn from_vec(extent: Extent2i, values: Vec<T>) -> Result<Self, HeightFieldError> {
        let expected = extent.num_points();
        if values.len() != expected {
            return Err(HeightFieldError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { extent, values })
    }

    /// Creates an array by calling `filler` on every point of `extent`.
    pub fn fill_with(extent: Extent2i, filler: impl FnMut(Point2i) -> T) -> Self {
        let values = extent.iter_points().map(filler).collect();

        Self { extent, values }
    }

    #[inline]
    pub fn extent(&self) -> &Extent2i {
        &self.extent
    }

    /// The values in row-major order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    #[inline]
    fn stride(&self, p: Point2i) -> usize {
        let local = p - self.extent.minimum;

        (local.y() * self.extent.shape.x() + local.x()) as usize
    }

    pub fn get(&self, p: Point2i) -> Option<&T> {
        if !self.extent.contains(p) {
            return None;
        }

        self.values.get(self.stride(p))
    }

    pub fn get_mut(&mut self, p: Point2i) -> Option<&mut T> {
        if !self.extent.contains(p) {
            return None;
        }
        let stride = self.stride(p);

        self.values.get_mut(stride)
    }

    /// Visits every point and its value in row-major order.
    pub fn for_each(&self, mut f: impl FnMut(Point2i, &T)) {
        for (p, value) in self.extent.iter_points().zip(self.values.iter()) {
            f(p, value);
        }
    }
}

impl<T: Clone> Array2<T> {
    pub fn fill(extent: Extent2i, value: T) -> Self {
        Self {
            extent,
            values: vec![value; extent.num_points()],
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
