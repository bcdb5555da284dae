//! Finding the nearest point-bearing unit cell of an `Octree` along a ray.
//!
//! `cast_ray_at_octree` walks the tree depth-first and skips any subtree that holds no points or whose box the ray misses.
//! `cast_ray_at_leaves` tests every point-bearing leaf instead; it is much slower, but it gives the same answer for every ray.
//!
//! Impacts are ordered by time of impact, and ties go to the leaf with the lexicographically smallest minimum, so both
//! functions are deterministic.

use float_ord::FloatOrd;
use terrain_tracer_core::prelude::*;
use terrain_tracer_storage::prelude::*;

/// The impact of a ray with a unit cell of an `Octree`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRayImpact {
    /// Time of impact with the cell's box, in units of the ray direction. Zero if the ray starts inside of the cell.
    pub toi: f32,
    /// The height-field point stored in the cell.
    pub point: Point3f,
    /// The cell.
    pub octant: Octant,
}

impl PointRayImpact {
    fn sort_key(&self) -> (FloatOrd<f32>, [i32; 3]) {
        (FloatOrd(self.toi), self.octant.minimum().0)
    }

    fn with_leaf(leaf: &OctreeNode, toi: f32) -> Option<Self> {
        let point = *leaf.points().first()?;

        Some(Self {
            toi,
            point,
            octant: *leaf.octant(),
        })
    }
}

/// The closer of two optional impacts.
pub fn nearer_impact(
    a: Option<PointRayImpact>,
    b: Option<PointRayImpact>,
) -> Option<PointRayImpact> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if b.sort_key() < a.sort_key() {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}

/// Casts `ray` at the leaves of `octree` and returns the earliest impact with a cell that holds a point. Impacts later than
/// `max_toi` are not considered.
pub fn cast_ray_at_octree(octree: &Octree, ray: &Ray, max_toi: f32) -> Option<PointRayImpact> {
    cast_ray_at_node(octree.root(), ray, max_toi)
}

fn cast_ray_at_node(node: &OctreeNode, ray: &Ray, max_toi: f32) -> Option<PointRayImpact> {
    // Cheaper than the slab test, so do it first.
    if node.population() == 0 {
        return None;
    }

    let toi = node.aabb().intersect_ray(ray)?;
    if toi > max_toi {
        return None;
    }

    if node.is_leaf() {
        return PointRayImpact::with_leaf(node, toi);
    }

    let mut nearest = None;
    for child in node.children()?.iter() {
        // A cell inside of a child can't be hit before the child itself. Equal times still need to be checked for tie breaking.
        let bound = nearest.map_or(max_toi, |i: PointRayImpact| i.toi);
        nearest = nearer_impact(nearest, cast_ray_at_node(child, ray, bound));
    }

    nearest
}

/// Casts `ray` at every one of `leaves`, usually from `Octree::collect_leaves_with_points`, and returns the earliest impact.
/// Impacts later than `max_toi` are not considered.
pub fn cast_ray_at_leaves<'a>(
    leaves: impl IntoIterator<Item = &'a OctreeNode>,
    ray: &Ray,
    max_toi: f32,
) -> Option<PointRayImpact> {
    leaves
        .into_iter()
        .filter_map(|leaf| {
            let toi = leaf.aabb().intersect_ray(ray)?;
            if toi > max_toi {
                return None;
            }

            PointRayImpact::with_leaf(leaf, toi)
        })
        .fold(None, |nearest, impact| nearer_impact(nearest, Some(impact)))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
