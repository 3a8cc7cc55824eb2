//! Bounding shapes used by quadtree queries.
//!
//! Both shapes are plain value types with no mutable state. A shape answers
//! two questions: does it contain a point, and does it overlap an
//! axis-aligned [`BoundingRectangle`]. The quadtree's query path is the only
//! consumer inside this crate, but the shapes are freely usable on their own.
//!
//! # Half-extent convention
//!
//! [`BoundingRectangle`] is centered: `half_width` and `half_height` are
//! *half* the side lengths, so the rectangle spans `x ± half_width` by
//! `y ± half_height`. A rectangle built with `half_width = 100.0` is 200
//! units wide. Keep this in mind when porting code that uses min-corner
//! rectangles; the [`crate::collision`] helpers use the min-corner
//! convention instead.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A queryable bounding shape.
///
/// Implemented by [`BoundingRectangle`] and [`BoundingCircle`]; quadtree
/// queries accept any implementor. `intersects` is only required to be
/// correct with the query shape as `self` and a node boundary as the
/// argument, which is the direction the quadtree actually uses.
pub trait BoundingShape {
    /// Whether the shape contains the point `(x, y)`. Boundary points count
    /// as contained.
    fn contains(&self, x: f64, y: f64) -> bool;

    /// Whether the shape overlaps the given rectangle. Touching edges count
    /// as overlapping.
    fn intersects(&self, rect: &BoundingRectangle) -> bool;
}

/// An axis-aligned rectangle in half-extent form.
///
/// Spans `[x - half_width, x + half_width]` × `[y - half_height, y + half_height]`,
/// inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingRectangle {
    /// X coordinate of the center.
    pub x: f64,
    /// Y coordinate of the center.
    pub y: f64,
    /// Half the rectangle's width; the rectangle spans `x ± half_width`.
    pub half_width: f64,
    /// Half the rectangle's height; the rectangle spans `y ± half_height`.
    pub half_height: f64,
}

impl BoundingRectangle {
    /// Create a rectangle from its center and half-extents.
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Self {
        Self {
            x,
            y,
            half_width,
            half_height,
        }
    }
}

impl BoundingShape for BoundingRectangle {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x - self.half_width
            && x <= self.x + self.half_width
            && y >= self.y - self.half_height
            && y <= self.y + self.half_height
    }

    fn intersects(&self, rect: &BoundingRectangle) -> bool {
        // Non-strict separating-axis test: touching edges intersect.
        !(rect.x - rect.half_width > self.x + self.half_width
            || rect.x + rect.half_width < self.x - self.half_width
            || rect.y - rect.half_height > self.y + self.half_height
            || rect.y + rect.half_height < self.y - self.half_height)
    }
}

/// A circle described by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingCircle {
    /// X coordinate of the center.
    pub x: f64,
    /// Y coordinate of the center.
    pub y: f64,
    /// Radius of the circle.
    pub radius: f64,
}

impl BoundingCircle {
    /// Create a circle from its center and radius.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// The squared radius, as used by the containment test.
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }
}

impl BoundingShape for BoundingCircle {
    fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius_squared()
    }

    /// Conservative circle/rectangle overlap test.
    ///
    /// Three branches: reject when either axis distance exceeds
    /// `radius + half_extent`; accept when the circle center lies within the
    /// rectangle's span on either axis; otherwise compare the squared
    /// distance to the nearest corner against the squared radius. The middle
    /// branch deliberately over-approximates near corners; queries stay
    /// correct because every candidate point is still checked with
    /// [`BoundingShape::contains`].
    fn intersects(&self, rect: &BoundingRectangle) -> bool {
        let x_dist = (rect.x - self.x).abs();
        let y_dist = (rect.y - self.y).abs();

        if x_dist > self.radius + rect.half_width || y_dist > self.radius + rect.half_height {
            return false;
        }
        if x_dist <= rect.half_width || y_dist <= rect.half_height {
            return true;
        }

        let edge_x = x_dist - rect.half_width;
        let edge_y = y_dist - rect.half_height;
        edge_x * edge_x + edge_y * edge_y <= self.radius_squared()
    }
}
