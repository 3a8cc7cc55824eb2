//! Error types for quadgrid operations.

use thiserror::Error;

/// Errors returned by quadgrid constructors and operations.
///
/// Expected negative results (a grid lookup miss, a point rejected because
/// it falls outside a quadtree boundary) are not errors; they come back as
/// `Option::None` or `false`. This enum covers genuine usage errors only.
#[derive(Debug, Error)]
pub enum QuadGridError {
    /// A quadtree was constructed with a capacity of zero.
    #[error("quadtree capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Convenience result type for quadgrid operations.
pub type Result<T> = std::result::Result<T, QuadGridError>;
