//! Sparse infinite-plane point grid and region quadtree for embedding in
//! simulations, games, and visualization tools.
//!
//! Two independent in-memory spatial containers, sharing only the primitive
//! bounding-shape geometry:
//!
//! - [`Grid`]: maps real-valued coordinates, floored to integer cells, to a
//!   payload value; memory stays proportional to occupied cells.
//! - [`QuadTree`]: a hierarchical partition over explicit [`Point`] values
//!   with fixed per-node capacity and eager subdivision on overflow, queried
//!   with a [`BoundingRectangle`] or [`BoundingCircle`].
//!
//! Everything is single-threaded and synchronous: no I/O, no persistence,
//! no internal locking. One logical owner mutates a container at a time.
//!
//! ```rust
//! use quadgrid::{BoundingRectangle, Grid, Point, QuadTree};
//!
//! let mut grid = Grid::new();
//! grid.set(-0.7, 1.2, "cell payload");
//! assert_eq!(grid.get(-1.0, 1.0), Some(&"cell payload"));
//!
//! let boundary = BoundingRectangle::new(0.0, 0.0, 100.0, 100.0);
//! let mut tree = QuadTree::new(boundary, 4)?;
//! tree.insert(Point::new(25.0, 25.0, "bottom-left"));
//! tree.insert(Point::new(75.0, 75.0, "top-right"));
//!
//! let window = BoundingRectangle::new(25.0, 25.0, 25.0, 25.0);
//! let found = tree.query(&window);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].data, "bottom-left");
//! # Ok::<(), quadgrid::QuadGridError>(())
//! ```

pub mod bounds;
pub mod collision;
pub mod error;
pub mod grid;
pub mod quadtree;

pub use bounds::{BoundingCircle, BoundingRectangle, BoundingShape};
pub use error::{QuadGridError, Result};
pub use grid::Grid;
pub use quadtree::{Point, QuadTree};

pub use collision::{
    Side, circle_intersects_rectangle, nearest_point_on_rectangle, point_in_rectangle,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{BoundingCircle, BoundingRectangle, BoundingShape};
    pub use crate::{Grid, Point, QuadTree};
    pub use crate::{QuadGridError, Result};
}
