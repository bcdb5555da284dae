//! The core data types and geometry for ray tracing height fields:
//! - `PointN`: an N-dimensional point, most importantly `Point2i`, `Point3i` and `Point3f`
//! - `ExtentN`: an N-dimensional extent, used for indexing 2D height maps
//! - `Octant`: a power-of-2 cube of the integer lattice
//! - `Ray`, `Triangle`, `Aabb` and `Sphere3` along with their ray intersection routines

pub mod aabb;
pub mod extent;
pub mod octant;
pub mod point;
pub mod point2;
pub mod point3;
pub mod ray;
pub mod sphere;
pub mod triangle;

pub use aabb::{ray_box_intersect, Aabb, Face};
pub use extent::{Extent2, Extent2i, ExtentN};
pub use octant::Octant;
pub use point::{DotProduct, Norm, NormSquared, Point, PointN, SmallZero};
pub use point2::{Point2, Point2f, Point2i};
pub use point3::{Point3, Point3f, Point3i};
pub use ray::Ray;
pub use sphere::{ray_sphere_intersect, Sphere3};
pub use triangle::{ray_triangle_intersect, Triangle, EPSILON};

pub use num;

pub mod prelude {
    pub use super::{
        Aabb, DotProduct, Extent2, Extent2i, ExtentN, Face, Norm, NormSquared, Octant, Point, Point2,
        Point2f, Point2i, Point3, Point3f, Point3i, PointN, Ray, SmallZero, Sphere3, Triangle,
    };
}
