//! Standalone rectangle collision helpers.
//!
//! Unlike [`crate::bounds`], the rectangles here use the min-corner
//! convention: `(x, y)` is the corner with the smallest coordinates and
//! `width`/`height` are the *full* side lengths, so the rectangle spans
//! `[x, x + width]` × `[y, y + height]`. These helpers are independent of
//! the spatial containers and use no axis direction convention; edges are
//! named by coordinate extreme, not by "top"/"bottom".

/// The rectangle edge nearest to a point, named by coordinate extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The `y` edge.
    MinY,
    /// The `y + height` edge.
    MaxY,
    /// The `x` edge.
    MinX,
    /// The `x + width` edge.
    MaxX,
}

/// Whether `(px, py)` lies inside the rectangle, edges inclusive.
pub fn point_in_rectangle(x: f64, y: f64, width: f64, height: f64, px: f64, py: f64) -> bool {
    x <= px && px <= x + width && y <= py && py <= y + height
}

/// The point on the rectangle's perimeter nearest to `(px, py)`, and the
/// edge it lies on.
///
/// The input point is clamped into the rectangle, then snapped to the
/// nearest of the four edges. A point already inside therefore still maps
/// onto the perimeter. Ties between equally-near edges resolve in the order
/// `MinY`, `MaxY`, `MinX`, `MaxX`.
pub fn nearest_point_on_rectangle(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    px: f64,
    py: f64,
) -> (f64, f64, Side) {
    let min_x = x;
    let min_y = y;
    let max_x = x + width;
    let max_y = y + height;

    let cx = px.clamp(min_x, max_x);
    let cy = py.clamp(min_y, max_y);

    let d_min_x = (cx - min_x).abs();
    let d_max_x = (cx - max_x).abs();
    let d_min_y = (cy - min_y).abs();
    let d_max_y = (cy - max_y).abs();
    let nearest = d_min_x.min(d_max_x).min(d_min_y).min(d_max_y);

    if nearest == d_min_y {
        (cx, min_y, Side::MinY)
    } else if nearest == d_max_y {
        (cx, max_y, Side::MaxY)
    } else if nearest == d_min_x {
        (min_x, cy, Side::MinX)
    } else {
        (max_x, cy, Side::MaxX)
    }
}

/// Whether a circle overlaps the rectangle.
///
/// True when the circle's center lies inside the rectangle, or when the
/// nearest perimeter point is strictly closer to the center than `radius`.
/// A circle exactly tangent to an edge from outside does not collide.
pub fn circle_intersects_rectangle(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    cx: f64,
    cy: f64,
    radius: f64,
) -> bool {
    if point_in_rectangle(x, y, width, height, cx, cy) {
        return true;
    }

    let (nx, ny, _) = nearest_point_on_rectangle(x, y, width, height, cx, cy);
    let dx = nx - cx;
    let dy = ny - cy;
    (dx * dx + dy * dy).sqrt() < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_in_rectangle_inclusive_edges() {
        assert!(point_in_rectangle(0.0, 0.0, 10.0, 5.0, 5.0, 2.5));
        assert!(point_in_rectangle(0.0, 0.0, 10.0, 5.0, 0.0, 0.0));
        assert!(point_in_rectangle(0.0, 0.0, 10.0, 5.0, 10.0, 5.0));
        assert!(!point_in_rectangle(0.0, 0.0, 10.0, 5.0, 10.1, 2.0));
        assert!(!point_in_rectangle(0.0, 0.0, 10.0, 5.0, 5.0, -0.1));
    }

    #[test]
    fn nearest_point_outside_snaps_to_edge() {
        // Directly below the rectangle.
        let (nx, ny, side) = nearest_point_on_rectangle(0.0, 0.0, 10.0, 10.0, 4.0, -3.0);
        assert_eq!((nx, ny), (4.0, 0.0));
        assert_eq!(side, Side::MinY);

        // Off to the right.
        let (nx, ny, side) = nearest_point_on_rectangle(0.0, 0.0, 10.0, 10.0, 15.0, 5.0);
        assert_eq!((nx, ny), (10.0, 5.0));
        assert_eq!(side, Side::MaxX);
    }

    #[test]
    fn nearest_point_inside_projects_to_perimeter() {
        let (nx, ny, side) = nearest_point_on_rectangle(0.0, 0.0, 10.0, 10.0, 5.0, 1.0);
        assert_eq!((nx, ny), (5.0, 0.0));
        assert_eq!(side, Side::MinY);
    }

    #[test]
    fn nearest_point_tie_prefers_min_y() {
        // Center of a square is equidistant from all four edges.
        let (_, _, side) = nearest_point_on_rectangle(0.0, 0.0, 10.0, 10.0, 5.0, 5.0);
        assert_eq!(side, Side::MinY);
    }

    #[test]
    fn circle_overlap_cases() {
        // Center inside.
        assert!(circle_intersects_rectangle(0.0, 0.0, 10.0, 10.0, 5.0, 5.0, 1.0));
        // Overlapping an edge from outside.
        assert!(circle_intersects_rectangle(0.0, 0.0, 10.0, 10.0, 12.0, 5.0, 3.0));
        // Exactly tangent: strict comparison, no collision.
        assert!(!circle_intersects_rectangle(0.0, 0.0, 10.0, 10.0, 13.0, 5.0, 3.0));
        // Clearly apart.
        assert!(!circle_intersects_rectangle(0.0, 0.0, 10.0, 10.0, 20.0, 20.0, 2.0));
    }
}
