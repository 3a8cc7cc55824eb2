//! Region quadtree over payload-carrying points.
//!
//! A [`QuadTree`] node holds up to `capacity` points directly; the first
//! insert past that subdivides the node into four child quadrants and every
//! later insert descends into a child. Nodes never merge back. Points
//! cannot be removed or moved; relocation means building a fresh tree.

use smallvec::SmallVec;

use crate::bounds::{BoundingRectangle, BoundingShape};
use crate::error::{QuadGridError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A data point with an associated value.
///
/// Coordinates are fixed at construction; the payload stays mutable through
/// [`Point::data`]. After a successful [`QuadTree::insert`] the point is
/// owned by exactly one tree node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    x: f64,
    y: f64,
    /// The payload carried by this point.
    pub data: T,
}

impl<T> Point<T> {
    /// Create a point at `(x, y)` carrying `data`.
    pub fn new(x: f64, y: f64, data: T) -> Self {
        Self { x, y, data }
    }

    /// X coordinate of the point.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate of the point.
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// The four child quadrants of a divided node.
///
/// Kept as named slots rather than a map: insertion tries them in a fixed,
/// documented order, and that order decides which child receives a point
/// lying exactly on an internal seam.
#[derive(Debug, Clone)]
struct Children<T> {
    top_right: QuadTree<T>,
    top_left: QuadTree<T>,
    bottom_right: QuadTree<T>,
    bottom_left: QuadTree<T>,
}

/// A region quadtree containing points and sub-quadtrees.
///
/// Each node covers an axis-aligned [`BoundingRectangle`] (half-extent
/// form, y-up: "top" children cover the higher-y half). Inserting into a
/// full node subdivides it once, permanently; the points the node held at
/// that moment stay in its direct list and all later inserts descend into
/// the children.
///
/// # Examples
///
/// ```rust
/// use quadgrid::{BoundingCircle, BoundingRectangle, Point, QuadTree};
///
/// let boundary = BoundingRectangle::new(0.0, 0.0, 100.0, 100.0);
/// let mut tree = QuadTree::new(boundary, 4)?;
///
/// assert!(tree.insert(Point::new(50.0, 50.0, "center")));
/// assert!(!tree.insert(Point::new(500.0, 0.0, "outside")));
///
/// let near = tree.query(&BoundingCircle::new(50.0, 50.0, 10.0));
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].data, "center");
/// # Ok::<(), quadgrid::QuadGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    boundary: BoundingRectangle,
    capacity: usize,
    points: SmallVec<[Point<T>; 4]>,
    children: Option<Box<Children<T>>>,
}

impl<T> QuadTree<T> {
    /// Create a quadtree root covering `boundary`.
    ///
    /// `capacity` is the number of points a node holds directly before it
    /// subdivides. Every child node created by subdivision shares the same
    /// capacity.
    ///
    /// # Errors
    ///
    /// [`QuadGridError::InvalidCapacity`] if `capacity` is zero. The
    /// capacity is never silently clamped.
    pub fn new(boundary: BoundingRectangle, capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(QuadGridError::InvalidCapacity(capacity));
        }
        Ok(Self::with_boundary(boundary, capacity))
    }

    /// Internal constructor for child nodes; capacity already validated.
    fn with_boundary(boundary: BoundingRectangle, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            points: SmallVec::new(),
            children: None,
        }
    }

    /// The boundary this node covers.
    pub fn boundary(&self) -> BoundingRectangle {
        self.boundary
    }

    /// The per-node point capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this node has subdivided. Once true, never unset.
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// The points held directly by this node, in insertion order.
    ///
    /// Excludes points that descended into children. Once the node divides,
    /// this list is frozen.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Total number of points in this node and all descendants.
    pub fn len(&self) -> usize {
        let mut count = self.points.len();
        if let Some(children) = &self.children {
            count += children.top_right.len()
                + children.top_left.len()
                + children.bottom_right.len()
                + children.bottom_left.len();
        }
        count
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a point into the quadtree.
    ///
    /// Returns `false` without side effects when the point lies outside this
    /// node's boundary; the root boundary is how out-of-range points are
    /// rejected. A rejected point is dropped; keep a copy if you need it
    /// back.
    ///
    /// On overflow the node subdivides (once) and the point descends into
    /// the first child whose boundary contains it, tried in the fixed order
    /// top-right, top-left, bottom-right, bottom-left. Boundary edges are
    /// inclusive, so a point exactly on an internal seam is geometrically
    /// acceptable to more than one child; the try order decides.
    ///
    /// Recursion depth is unbounded: pathological clustering of inserts at
    /// or near one coordinate keeps forcing subdivision, and there is no
    /// depth cap. Callers with adversarial input must bound it themselves.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        self.insert_point(point).is_ok()
    }

    /// Insertion that hands the point back on rejection, so the overflow
    /// path can try the next sibling.
    fn insert_point(&mut self, point: Point<T>) -> std::result::Result<(), Point<T>> {
        if !self.boundary.contains(point.x, point.y) {
            return Err(point);
        }

        if self.children.is_none() && self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        let children = self.subdivide();

        // Fixed seam precedence: TR, TL, BR, BL.
        let point = match children.top_right.insert_point(point) {
            Ok(()) => return Ok(()),
            Err(point) => point,
        };
        let point = match children.top_left.insert_point(point) {
            Ok(()) => return Ok(()),
            Err(point) => point,
        };
        let point = match children.bottom_right.insert_point(point) {
            Ok(()) => return Ok(()),
            Err(point) => point,
        };
        children.bottom_left.insert_point(point)
    }

    /// Create the four child quadrants if they do not exist yet.
    ///
    /// Each child covers one quarter of this node's boundary: half-extents
    /// are halved and centers are offset by the new half-extent in each
    /// direction.
    fn subdivide(&mut self) -> &mut Children<T> {
        let boundary = self.boundary;
        let capacity = self.capacity;
        self.children.get_or_insert_with(|| {
            let x = boundary.x;
            let y = boundary.y;
            let hw = boundary.half_width / 2.0;
            let hh = boundary.half_height / 2.0;

            Box::new(Children {
                top_right: Self::with_boundary(
                    BoundingRectangle::new(x + hw, y + hh, hw, hh),
                    capacity,
                ),
                top_left: Self::with_boundary(
                    BoundingRectangle::new(x - hw, y + hh, hw, hh),
                    capacity,
                ),
                bottom_right: Self::with_boundary(
                    BoundingRectangle::new(x + hw, y - hh, hw, hh),
                    capacity,
                ),
                bottom_left: Self::with_boundary(
                    BoundingRectangle::new(x - hw, y - hh, hw, hh),
                    capacity,
                ),
            })
        })
    }

    /// Query the quadtree for points within the given shape.
    ///
    /// # Arguments
    ///
    /// * `shape` - Any [`BoundingShape`] ([`BoundingRectangle`] or
    ///   [`crate::BoundingCircle`])
    ///
    /// # Returns
    ///
    /// References to every point the shape contains. The order is
    /// deterministic for a given tree and shape: each node contributes its
    /// direct points in insertion order, then its children recursively in
    /// top-left, top-right, bottom-left, bottom-right order. There is no
    /// global spatial or insertion ordering across levels.
    pub fn query<S: BoundingShape>(&self, shape: &S) -> Vec<&Point<T>> {
        let mut found = Vec::new();
        self.query_into(shape, &mut found);
        found
    }

    /// Query into a caller-supplied accumulator, appending to any existing
    /// contents. Same traversal and ordering as [`QuadTree::query`].
    ///
    /// Subtrees whose boundary does not intersect `shape` are pruned
    /// wholesale, which is what keeps queries sub-linear.
    pub fn query_into<'a, S: BoundingShape>(&'a self, shape: &S, found: &mut Vec<&'a Point<T>>) {
        if !shape.intersects(&self.boundary) {
            return;
        }

        for point in &self.points {
            if shape.contains(point.x, point.y) {
                found.push(point);
            }
        }

        if let Some(children) = &self.children {
            children.top_left.query_into(shape, found);
            children.top_right.query_into(shape, found);
            children.bottom_left.query_into(shape, found);
            children.bottom_right.query_into(shape, found);
        }
    }
}
