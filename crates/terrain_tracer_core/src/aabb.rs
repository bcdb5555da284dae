//! Axis-aligned boxes described by a center `origin` and half-extents `dims`.
//!
//! The corner vertices, face triangles and face normals of an `Aabb` are all derived from `origin` and `dims` in a fixed order,
//! so translating a box moves all of its derived geometry with it.

use crate::{ray_triangle_intersect, Point, Point3f, PointN, Ray, Triangle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Corner signs relative to the origin, in vertex order.
const CORNER_SIGNS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Vertex indices of the two triangles of each face, in `Face` order. Every triangle is counter-clockwise when viewed from
/// outside of the box.
const FACE_TRIANGLES: [[usize; 3]; 12] = [
    // Front
    [0, 2, 1],
    [1, 2, 3],
    // Right
    [1, 3, 4],
    [4, 3, 5],
    // Back
    [4, 5, 6],
    [6, 5, 7],
    // Left
    [6, 7, 0],
    [0, 7, 2],
    // Top
    [2, 7, 3],
    [3, 7, 5],
    // Bottom
    [0, 1, 6],
    [6, 1, 4],
];

/// One of the six faces of an `Aabb`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Face {
    /// Faces -Z.
    Front = 0,
    /// Faces +X.
    Right = 1,
    /// Faces +Z.
    Back = 2,
    /// Faces -X.
    Left = 3,
    /// Faces +Y.
    Top = 4,
    /// Faces -Y.
    Bottom = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The face that owns the triangle at `triangle_index` of `Aabb::triangles`.
    #[inline]
    pub fn of_triangle(triangle_index: usize) -> Self {
        Self::ALL[triangle_index / 2]
    }

    /// The outward unit normal.
    pub fn normal(&self) -> Point3f {
        match self {
            Face::Front => PointN([0.0, 0.0, -1.0]),
            Face::Right => PointN([1.0, 0.0, 0.0]),
            Face::Back => PointN([0.0, 0.0, 1.0]),
            Face::Left => PointN([-1.0, 0.0, 0.0]),
            Face::Top => PointN([0.0, 1.0, 0.0]),
            Face::Bottom => PointN([0.0, -1.0, 0.0]),
        }
    }
}

/// An axis-aligned box. Nothing stops the half-extents from differing per axis, but octree nodes are always cubes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Aabb {
    origin: Point3f,
    dims: Point3f,
    min: Point3f,
    max: Point3f,
}

impl Aabb {
    /// A box centered at `origin` with half-extents `dims`.
    pub fn new(origin: Point3f, dims: Point3f) -> Self {
        Self {
            origin,
            dims,
            min: origin - dims,
            max: origin + dims,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point3f {
        self.origin
    }

    #[inline]
    pub fn dims(&self) -> Point3f {
        self.dims
    }

    /// The most negative corner.
    #[inline]
    pub fn min(&self) -> Point3f {
        self.min
    }

    /// The most positive corner.
    #[inline]
    pub fn max(&self) -> Point3f {
        self.max
    }

    /// The 8 corners in the order `(-,-,-) (+,-,-) (-,+,-) (+,+,-) (+,-,+) (+,+,+) (-,-,+) (-,+,+)` relative to the origin.
    pub fn vertices(&self) -> [Point3f; 8] {
        let mut vertices = [self.origin; 8];
        for (v, signs) in vertices.iter_mut().zip(CORNER_SIGNS.iter()) {
            *v = self.origin + self.dims * PointN(*signs);
        }

        vertices
    }

    /// Two triangles per face, in `Face` order, wound counter-clockwise when viewed from outside.
    pub fn triangles(&self) -> [Triangle; 12] {
        let v = self.vertices();
        let mut triangles = [Triangle::default(); 12];
        for (tri, [i0, i1, i2]) in triangles.iter_mut().zip(FACE_TRIANGLES.iter()) {
            *tri = Triangle::new(v[*i0], v[*i1], v[*i2]);
        }

        triangles
    }

    /// The outward unit normal of each face, in `Face` order.
    pub fn normals(&self) -> [Point3f; 6] {
        let mut normals = [Point3f::default(); 6];
        for (n, face) in normals.iter_mut().zip(Face::ALL.iter()) {
            *n = face.normal();
        }

        normals
    }

    /// Returns `true` iff `origin - dims < p <= origin + dims` on every axis.
    ///
    /// The lower bound is exclusive and the upper bound inclusive, so a point on a face shared by two adjacent boxes belongs
    /// to exactly one of them.
    #[inline]
    pub fn contains_point(&self, p: Point3f) -> bool {
        self.min.x() < p.x()
            && p.x() <= self.max.x()
            && self.min.y() < p.y()
            && p.y() <= self.max.y()
            && self.min.z() < p.z()
            && p.z() <= self.max.z()
    }

    /// Rigidly moves the box (and therefore all of its derived geometry) by `delta`.
    pub fn translate(&mut self, delta: Point3f) {
        self.origin += delta;
        self.min += delta;
        self.max += delta;
    }

    /// Slab test against this box. See `ray_box_intersect`.
    #[inline]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        ray_box_intersect(ray, self.min, self.max)
    }

    /// Tests `ray` against all 12 face triangles and returns the earliest time of impact along with the face that was hit.
    pub fn intersect_ray_triangles(&self, ray: &Ray) -> Option<(f32, Face)> {
        let mut nearest: Option<(f32, Face)> = None;
        for (i, tri) in self.triangles().iter().enumerate() {
            if let Some(t) = ray_triangle_intersect(ray, tri) {
                if nearest.map_or(true, |(best_t, _)| t < best_t) {
                    nearest = Some((t, Face::of_triangle(i)));
                }
            }
        }

        nearest
    }
}

/// The slab method for intersecting a ray with the box spanning `box_min` to `box_max`.
///
/// Returns `None` when the per-axis intervals don't overlap, when they only touch (a grazing ray with a zero-width interval),
/// or when the whole box is behind the ray. When the ray starts inside of the box, the entry time is negative and is clamped
/// to `0.0`, so the result is always a comparable, non-negative time of impact.
///
/// On an axis where the ray has no motion, the slab is either never left or never entered. That is decided by the same
/// half-open rule as `Aabb::contains_point`, so a ray running inside a face plane shared by two neighboring boxes belongs to
/// exactly one of them: the box whose maximum lies on the plane.
pub fn ray_box_intersect(ray: &Ray, box_min: Point3f, box_max: Point3f) -> Option<f32> {
    let inv_dir = ray.inverse_direction();

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let origin = ray.origin.at(axis);
        let (lo, hi) = (box_min.at(axis), box_max.at(axis));

        if ray.direction.at(axis) == 0.0 {
            if lo < origin && origin <= hi {
                continue;
            }
            return None;
        }

        let t1 = (lo - origin) * inv_dir.at(axis);
        let t2 = (hi - origin) * inv_dir.at(axis);
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }

    if t_near >= t_far || t_far < 0.0 {
        return None;
    }

    Some(t_near.max(0.0))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
