use crate::{Aabb, Point, Point3f, Point3i, PointN};

/// A cube-shaped region of an octree: an integer minimum and a power-of-2 edge length.
///
/// The root octant of an octree of edge length `S` has minimum `(0, 0, 0)`, so every octant has integer corners and a
/// continuous `Aabb` centered at `minimum + edge_length / 2`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Octant {
    minimum: Point3i,
    edge_length: i32,
}

impl Octant {
    /// Construct an `Octant`. This ensures that the octant is valid by constraining the input parameters to be:
    /// - an `exponent` for the power of 2 edge length
    /// - a `min_multiple` to multiply by the `edge_length` to get the minimum
    #[inline]
    pub fn new(exponent: u8, min_multiple: Point3i) -> Self {
        let edge_length = 1 << exponent as i32;
        let minimum = min_multiple * edge_length;

        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn new_unchecked(minimum: Point3i, edge_length: i32) -> Self {
        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn minimum(&self) -> Point3i {
        self.minimum
    }

    #[inline]
    pub fn edge_length(&self) -> i32 {
        self.edge_length
    }

    #[inline]
    pub fn is_single_voxel(&self) -> bool {
        self.edge_length == 1
    }

    #[inline]
    pub fn exponent(&self) -> u8 {
        self.edge_length.trailing_zeros() as u8
    }

    /// The continuous box covering this octant.
    pub fn aabb(&self) -> Aabb {
        let half = self.edge_length as f32 / 2.0;

        Aabb::new(Point3f::from(self.minimum) + Point3f::fill(half), Point3f::fill(half))
    }

    /// The child octant with index `octant` in `0..8`. Bit 0 selects +X, bit 1 selects +Z and bit 2 selects +Y, which gives the
    /// order `(-,-,-) (+,-,-) (-,-,+) (+,-,+) (-,+,-) (+,+,-) (-,+,+) (+,+,+)`.
    ///
    /// Must not be called on a single voxel.
    #[inline]
    pub fn child(&self, octant: usize) -> Self {
        debug_assert!(!self.is_single_voxel());
        debug_assert!(octant < 8);

        let half = self.edge_length >> 1;
        let octant = octant as i32;
        let offset = PointN([octant & 1, (octant >> 2) & 1, (octant >> 1) & 1]);

        Self {
            minimum: self.minimum + offset * half,
            edge_length: half,
        }
    }
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

    use pretty_assertions::assert_eq;

    #[test]
    fn aabb_is_centered_in_octant() {
        let octant = Octant::new(2, PointN([1, 0, 2]));
        let aabb = octant.aabb();

        assert_eq!(octant.minimum(), PointN([4, 0, 8]));
        assert_eq!(aabb.origin(), PointN([6.0, 2.0, 10.0]));
        assert_eq!(aabb.dims(), PointN([2.0, 2.0, 2.0]));
        assert_eq!(aabb.min(), PointN([4.0, 0.0, 8.0]));
        assert_eq!(aabb.max(), PointN([8.0, 4.0, 12.0]));
    }

    #[test]
    fn children_follow_subdivision_order() {
        let root = Octant::new_unchecked(PointN([0, 0, 0]), 4);

        let minimums: Vec<_> = (0..8).map(|i| root.child(i).minimum()).collect();
        assert_eq!(
            minimums,
            vec![
                PointN([0, 0, 0]),
                PointN([2, 0, 0]),
                PointN([0, 0, 2]),
                PointN([2, 0, 2]),
                PointN([0, 2, 0]),
                PointN([2, 2, 0]),
                PointN([0, 2, 2]),
                PointN([2, 2, 2]),
            ]
        );
        assert!((0..8).all(|i| root.child(i).edge_length() == 2));
        assert_eq!(root.child(7).child(0).exponent(), 0);
    }
}
