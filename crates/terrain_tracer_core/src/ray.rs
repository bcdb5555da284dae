use crate::Point3f;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-line starting at `origin` and moving along `direction`.
///
/// `direction` does not need to be normalized. Every time of impact (TOI) reported by the intersection routines is in units of
/// `direction`, so `ray.point_at(toi)` is always the impact point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Point3f,
}

impl Ray {
    #[inline]
    pub fn new(origin: Point3f, direction: Point3f) -> Self {
        Self { origin, direction }
    }

    /// A ray starting at `origin` and passing through `target` at `t = 1`.
    #[inline]
    pub fn through(origin: Point3f, target: Point3f) -> Self {
        Self::new(origin, target - origin)
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Point3f {
        self.origin + self.direction * t
    }

    /// Component-wise `1 / direction`.
    #[inline]
    pub fn inverse_direction(&self) -> Point3f {
        self.direction.recip()
    }
}
