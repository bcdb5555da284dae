use crate::{DotProduct, Point3f, Ray};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Sphere3 {
    pub center: Point3f,
    pub radius: f32,
}

impl Sphere3 {
    #[inline]
    pub fn new(center: Point3f, radius: f32) -> Self {
        Self { center, radius }
    }

    /// The outward unit normal at a point on the surface.
    pub fn normal_at(&self, surface_point: Point3f) -> Point3f {
        (surface_point - self.center).normalized()
    }
}

/// Returns the earliest non-negative time of impact of `ray` with the surface of `sphere`. When the ray starts inside of the
/// sphere, this is the exit point.
pub fn ray_sphere_intersect(ray: &Ray, sphere: &Sphere3) -> Option<f32> {
    let origin = ray.origin - sphere.center;

    let a = ray.direction.dot(&ray.direction);
    let b = origin.dot(&ray.direction);
    let c = origin.dot(&origin) - sphere.radius * sphere.radius;

    let discriminant = b * b - a * c;
    if discriminant < 0.0 || a == 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t0 = (-b - sqrt_discriminant) / a;
    let t1 = (-b + sqrt_discriminant) / a;

    if t0 >= 0.0 {
        Some(t0)
    } else if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
