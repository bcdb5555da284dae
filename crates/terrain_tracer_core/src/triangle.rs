use crate::{DotProduct, Point3f, Ray};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Determinants and times of impact smaller than this are treated as zero.
pub const EPSILON: f32 = 1e-7;

/// Three vertices. The front face is the one from which the vertices appear counter-clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Triangle {
    pub v0: Point3f,
    pub v1: Point3f,
    pub v2: Point3f,
}

impl Triangle {
    #[inline]
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f) -> Self {
        Self { v0, v1, v2 }
    }

    /// The unit normal of the front face.
    pub fn normal(&self) -> Point3f {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0)).normalized()
    }

    pub fn translated(&self, delta: Point3f) -> Self {
        Self::new(self.v0 + delta, self.v1 + delta, self.v2 + delta)
    }
}

/// The Möller–Trumbore ray/triangle intersection algorithm.
///
/// Returns the time of impact of `ray` with `triangle`, from either side. Returns `None` when the ray is parallel to the plane of
/// the triangle, when it passes outside of the triangle, or when the impact is behind (or within `EPSILON` of) the ray origin.
pub fn ray_triangle_intersect(ray: &Ray, triangle: &Triangle) -> Option<f32> {
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;
    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);
    if a > -EPSILON && a < EPSILON {
        // Parallel to the triangle.
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - triangle.v0;
    let u = f * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);

    // Otherwise the line intersects, but not the ray.
    (t > EPSILON).then(|| t)
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
    use crate::PointN;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            PointN([0.0, 0.0, 0.0]),
            PointN([1.0, 0.0, 0.0]),
            PointN([0.0, 1.0, 0.0]),
        )
    }

    #[test]
    fn hits_triangle_from_both_sides() {
        let tri = unit_triangle();

        let front = Ray::new(PointN([0.25, 0.25, 2.0]), PointN([0.0, 0.0, -1.0]));
        assert_eq!(ray_triangle_intersect(&front, &tri), Some(2.0));

        let back = Ray::new(PointN([0.25, 0.25, -3.0]), PointN([0.0, 0.0, 1.0]));
        assert_eq!(ray_triangle_intersect(&back, &tri), Some(3.0));
    }

    #[test]
    fn misses_outside_barycentric_range() {
        let tri = unit_triangle();

        let ray = Ray::new(PointN([0.75, 0.75, 2.0]), PointN([0.0, 0.0, -1.0]));
        assert_eq!(ray_triangle_intersect(&ray, &tri), None);

        let ray = Ray::new(PointN([-0.1, 0.5, 2.0]), PointN([0.0, 0.0, -1.0]));
        assert_eq!(ray_triangle_intersect(&ray, &tri), None);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(PointN([-1.0, 0.25, 0.0]), PointN([1.0, 0.0, 0.0]));

        assert_eq!(ray_triangle_intersect(&ray, &unit_triangle()), None);
    }

    #[test]
    fn triangle_behind_origin_misses() {
        let ray = Ray::new(PointN([0.25, 0.25, 2.0]), PointN([0.0, 0.0, 1.0]));

        assert_eq!(ray_triangle_intersect(&ray, &unit_triangle()), None);
    }

    #[test]
    fn normal_follows_winding() {
        assert_eq!(unit_triangle().normal(), PointN([0.0, 0.0, 1.0]));
    }
}
