use crate::{Point2, Point2i, PointN};

use core::ops::{Add, Range};
use itertools::{iproduct, Product};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-dimensional extent with scalar type `T`.
pub type Extent2<T> = ExtentN<[T; 2]>;
/// A 2-dimensional extent with scalar type `i32`.
pub type Extent2i = ExtentN<[i32; 2]>;

/// An N-dimensional extent. This is mathematically the Cartesian product of a half-closed interval `[a, b)` in each dimension.
/// You can also just think of it as an axis-aligned box with some shape and a minimum point. Height maps are indexed over an
/// `Extent2i` where X is the grid column and Y is the grid row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ExtentN<N> {
    /// The least point contained in the extent.
    pub minimum: PointN<N>,
    /// The length of each dimension.
    pub shape: PointN<N>,
}

impl<N> ExtentN<N> {
    /// The default representation of an extent as the minimum point and shape.
    #[inline]
    pub fn from_min_and_shape(minimum: PointN<N>, shape: PointN<N>) -> Self {
        Self { minimum, shape }
    }
}

impl<N> ExtentN<N>
where
    N: Copy,
    PointN<N>: Add<Output = PointN<N>>,
{
    /// The least point `p` for which all points `q` in the extent satisfy `q < p`.
    #[inline]
    pub fn least_upper_bound(&self) -> PointN<N> {
        self.minimum + self.shape
    }
}

impl Extent2i {
    /// The number of points contained in the extent.
    #[inline]
    pub fn num_points(&self) -> usize {
        (self.shape.x().max(0) as usize) * (self.shape.y().max(0) as usize)
    }

    /// Returns `true` iff the point `p` is contained in this extent.
    #[inline]
    pub fn contains(&self, p: Point2i) -> bool {
        let lub = self.least_upper_bound();

        self.minimum.x() <= p.x() && p.x() < lub.x() && self.minimum.y() <= p.y() && p.y() < lub.y()
    }

    /// Iterate over all points in row-major order, i.e. X varies fastest.
    pub fn iter_points(&self) -> Extent2PointIter<i32> {
        let lub = self.least_upper_bound();

        Extent2PointIter {
            // iproduct is opposite of row-major order.
            product_iter: iproduct!(self.minimum.y()..lub.y(), self.minimum.x()..lub.x()),
        }
    }
}

/// An iterator over all points in an `Extent2<T>`.
pub struct Extent2PointIter<T>
where
    Range<T>: Iterator<Item = T>,
{
    product_iter: Product<Range<T>, Range<T>>,
}

impl<T> Iterator for Extent2PointIter<T>
where
    T: Clone,
    Range<T>: Iterator<Item = T>,
{
    type Item = Point2<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.product_iter.next().map(|(y, x)| PointN([x, y]))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_extent_iter() {
        let extent = Extent2i::from_min_and_shape(PointN([0, 0]), PointN([2, 2]));

        let points: Vec<_> = extent.iter_points().collect();

        assert_eq!(
            points,
            vec![
                PointN([0, 0]),
                PointN([1, 0]),
                PointN([0, 1]),
                PointN([1, 1]),
            ]
        );
        assert_eq!(extent.num_points(), 4);
    }

    #[test]
    fn contains_is_half_open() {
        let extent = Extent2i::from_min_and_shape(PointN([1, 1]), PointN([2, 3]));

        assert!(extent.contains(PointN([1, 1])));
        assert!(extent.contains(PointN([2, 3])));
        assert!(!extent.contains(PointN([3, 1])));
        assert!(!extent.contains(PointN([1, 4])));
        assert!(!extent.contains(PointN([0, 1])));
    }
}
