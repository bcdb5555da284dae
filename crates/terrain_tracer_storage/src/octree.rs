//! The `Octree` is a sparse index of the points of a height field, built for finding the nearest point-bearing unit cell along
//! a ray.
//!
//! The root covers the cube `(0, size]^3` and every node covers the `Aabb` of its `Octant`. Nodes are created lazily: a node of
//! edge length greater than 1 has a capacity of 0, so the first point it receives makes it subdivide into 8 children, and every
//! later point is routed down to the one child that contains it. Unit cells (leaves) have a capacity of 1 and never subdivide;
//! they keep every point that lands in them.
//!
//! Containment uses the half-open rule of `Aabb::contains_point`, which partitions space between siblings without gaps or
//! overlaps. So every point inside the root ends up in exactly one leaf.
//!
//! # Traversal
//!
//! Nodes can be visited in preorder with any `OctreeVisitor`, including closures:
//!
//! ```
//! use terrain_tracer_core::prelude::*;
//! use terrain_tracer_storage::octree::*;
//!
//! let octree = Octree::from_points(4, vec![PointN([0.5, 1.5, 0.5])]).unwrap();
//!
//! let mut leaves = 0;
//! octree.visit_preorder(&mut |node: &OctreeNode| {
//!     if node.population() == 0 {
//!         return VisitStatus::Stop;
//!     }
//!     if node.is_leaf() {
//!         leaves += 1;
//!     }
//!
//!     VisitStatus::Continue
//! });
//! assert_eq!(leaves, 1);
//! ```

use crate::OctreeError;

use terrain_tracer_core::prelude::*;

/// Largest supported root edge length. Keeps every octant coordinate exactly representable as both `i32` and `f32`.
pub const MAX_OCTREE_SIZE: u32 = 1 << 24;

/// A sparse octree of height-field points. See the module docs.
#[derive(Clone, Debug)]
pub struct Octree {
    root: OctreeNode,
}

impl Octree {
    /// An empty octree whose root has edge length `size`.
    pub fn new(size: u32) -> Result<Self, OctreeError> {
        let exponent = Self::check_size(size)?;

        Ok(Self {
            root: OctreeNode::new(Octant::new(exponent, Point3i::ZERO)),
        })
    }

    /// Builds a new octree of edge length `size` containing `points`.
    pub fn from_points(
        size: u32,
        points: impl IntoIterator<Item = Point3f>,
    ) -> Result<Self, OctreeError> {
        let mut octree = Self::new(size)?;
        octree.generate(size, points)?;

        Ok(octree)
    }

    fn check_size(size: u32) -> Result<u8, OctreeError> {
        if !size.is_power_of_two() || size > MAX_OCTREE_SIZE {
            tracing::warn!("Rejecting octree size {}", size);
            return Err(OctreeError::InvalidSize(size));
        }

        Ok(size.trailing_zeros() as u8)
    }

    /// Throws away the whole tree and rebuilds it from scratch with a root of edge length `size`, inserting every point of
    /// `points` in order. Points outside of the root are dropped.
    ///
    /// On error, the existing tree is left untouched.
    pub fn generate(
        &mut self,
        size: u32,
        points: impl IntoIterator<Item = Point3f>,
    ) -> Result<GenerateStats, OctreeError> {
        let exponent = Self::check_size(size)?;

        // Dropping the old root frees the previous tree.
        self.root = OctreeNode::new(Octant::new(exponent, Point3i::ZERO));

        let mut stats = GenerateStats::default();
        for p in points.into_iter() {
            match self.root.add_point(p) {
                Insertion::Inserted => stats.inserted += 1,
                Insertion::Duplicate => {
                    stats.inserted += 1;
                    stats.duplicates += 1;
                }
                Insertion::Outside => stats.dropped += 1,
            }
        }

        tracing::debug!(
            "Generated octree of size {}: {} points inserted ({} duplicates), {} dropped, {} nodes",
            size,
            stats.inserted,
            stats.duplicates,
            stats.dropped,
            self.root.oct_count()
        );

        Ok(stats)
    }

    #[inline]
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// Edge length of the root.
    #[inline]
    pub fn size(&self) -> i32 {
        self.root.octant.edge_length()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.population == 0
    }

    pub fn oct_count(&self) -> usize {
        self.root.oct_count()
    }

    pub fn point_count(&self) -> usize {
        self.root.point_count()
    }

    /// The number of unit cells that hold at least one point.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// The number of levels below the root. An unsubdivided root has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn collect_leaves_with_points(&self) -> Vec<&OctreeNode> {
        let mut leaves = Vec::new();
        self.root.collect_leaves_with_points(&mut leaves);

        leaves
    }

    pub fn visit_preorder(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        self.root.visit_preorder(visitor)
    }
}

/// Counts of what happened to the input points of `Octree::generate`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GenerateStats {
    /// Points that reached a leaf, including duplicates.
    pub inserted: usize,
    /// Points that landed in a leaf which already held a point.
    pub duplicates: usize,
    /// Points outside of the root.
    pub dropped: usize,
}

/// The result of adding a point to a subtree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Insertion {
    /// The point is outside of the node, so nothing changed.
    Outside,
    /// The point is now stored in a leaf.
    Inserted,
    /// The point is now stored in a leaf that already had a point.
    Duplicate,
}

/// One cubical region of an `Octree`.
#[derive(Clone, Debug)]
pub struct OctreeNode {
    octant: Octant,
    aabb: Aabb,
    capacity: usize,
    // For a branch, this only holds the point that triggered subdivision.
    points: Vec<Point3f>,
    children: Option<Box<[OctreeNode; 8]>>,
    // Number of points stored in leaves of this subtree.
    population: usize,
}

impl OctreeNode {
    pub fn new(octant: Octant) -> Self {
        Self {
            octant,
            aabb: octant.aabb(),
            capacity: if octant.is_single_voxel() { 1 } else { 0 },
            points: Vec::new(),
            children: None,
            population: 0,
        }
    }

    #[inline]
    pub fn octant(&self) -> &Octant {
        &self.octant
    }

    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// For a leaf, all of the points in its unit cell. For a branch, only the point that made it subdivide.
    #[inline]
    pub fn points(&self) -> &[Point3f] {
        &self.points
    }

    #[inline]
    pub fn children(&self) -> Option<&[OctreeNode; 8]> {
        self.children.as_deref()
    }

    #[inline]
    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    /// True for unit cells.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.octant.is_single_voxel()
    }

    /// The number of points stored in leaves of this subtree.
    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Adds `p` to the leaf of this subtree that contains it, subdividing along the way as needed.
    pub fn add_point(&mut self, p: Point3f) -> Insertion {
        if !self.aabb.contains_point(p) {
            return Insertion::Outside;
        }

        if self.is_leaf() {
            let result = if self.points.len() < self.capacity {
                Insertion::Inserted
            } else {
                Insertion::Duplicate
            };
            self.points.push(p);
            self.population += 1;

            return result;
        }

        if self.children.is_none() {
            self.points.push(p);
            self.subdivide();
        }

        let mut result = Insertion::Outside;
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                let child_result = child.add_point(p);
                if child_result != Insertion::Outside {
                    result = child_result;
                }
            }
        }
        if result != Insertion::Outside {
            self.population += 1;
        }

        result
    }

    /// Creates the 8 children, in `Octant::child` order.
    fn subdivide(&mut self) {
        debug_assert!(!self.is_leaf());
        debug_assert!(self.children.is_none());

        let octant = self.octant;
        self.children = Some(Box::new(std::array::from_fn(|i| {
            OctreeNode::new(octant.child(i))
        })));
    }

    /// The number of nodes in this subtree, including `self`.
    pub fn oct_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.iter())
            .map(|c| c.oct_count())
            .sum::<usize>()
    }

    /// The number of points stored in the leaves of this subtree.
    pub fn point_count(&self) -> usize {
        match &self.children {
            Some(children) => children.iter().map(|c| c.point_count()).sum(),
            None if self.capacity == 0 => 0,
            None => self.points.len(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit_preorder(&mut |node: &OctreeNode| {
            if node.population == 0 {
                return VisitStatus::Stop;
            }
            if node.is_leaf() {
                count += 1;
            }

            VisitStatus::Continue
        });

        count
    }

    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .flat_map(|c| c.iter())
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Pushes every leaf of this subtree that holds at least one point onto `leaves`, in preorder.
    pub fn collect_leaves_with_points<'a>(&'a self, leaves: &mut Vec<&'a OctreeNode>) {
        if self.population == 0 {
            return;
        }
        if self.is_leaf() {
            leaves.push(self);
            return;
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_leaves_with_points(leaves);
            }
        }
    }

    /// Visit `self` and all of its descendants in preorder. Returning `VisitStatus::Stop` skips the children of a node.
    pub fn visit_preorder(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        let status = visitor.visit_node(self);
        if status != VisitStatus::Continue {
            return status;
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.visit_preorder(visitor) == VisitStatus::ExitEarly {
                    return VisitStatus::ExitEarly;
                }
            }
        }

        VisitStatus::Continue
    }
}

pub trait OctreeVisitor {
    fn visit_node(&mut self, node: &OctreeNode) -> VisitStatus;
}

impl<F> OctreeVisitor for F
where
    F: FnMut(&OctreeNode) -> VisitStatus,
{
    #[inline]
    fn visit_node(&mut self, node: &OctreeNode) -> VisitStatus {
        (self)(node)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
