//! Sparse infinite-plane point grid.
//!
//! [`Grid`] maps real-valued coordinates, floored to integer cells, to a
//! payload value. The plane is unbounded in every direction and memory is
//! proportional to the number of occupied cells, not to the span of
//! coordinates ever touched.

use rustc_hash::FxHashMap;

/// An infinite 2D space expanding in all directions with values snapped to
/// integer cell coordinates.
///
/// Coordinates are floored toward negative infinity, so `(-0.7, 1.2)` and
/// `(-1.0, 1.0)` address the same cell. Two `set` calls that floor to the
/// same cell overwrite each other. Lookups for unoccupied cells return
/// `None`; no operation here can fail.
///
/// Backed by a single hash map keyed on the floored coordinate pair, so
/// deleting the last value in a "row" cannot leak bookkeeping for that row.
///
/// Cell coordinates are `i64`. Finite inputs beyond that range saturate to
/// `i64::MIN`/`i64::MAX` when floored, so e.g. `1e300` and `2e300` address
/// the same extreme cell. Non-finite inputs address no cell at all: `set`
/// warns and ignores them, lookups treat them as misses.
///
/// # Examples
///
/// ```rust
/// use quadgrid::Grid;
///
/// let mut grid = Grid::new();
/// grid.set(-0.7, 1.2, "tile");
/// assert_eq!(grid.get(-1.0, 1.0), Some(&"tile"));
/// assert!(grid.has(-0.3, 1.9));
///
/// grid.delete(-1.0, 1.0);
/// assert!(grid.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: FxHashMap<(i64, i64), T>,
}

/// Floor both coordinates to a cell key.
///
/// Returns `None` for non-finite coordinates, which no cell can represent.
#[inline]
fn cell_key(x: f64, y: f64) -> Option<(i64, i64)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((x.floor() as i64, y.floor() as i64))
}

impl<T> Grid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Set the value at the cell containing `(x, y)`, overwriting any
    /// previous value there. Returns the previous value if the cell was
    /// occupied.
    ///
    /// Non-finite coordinates are rejected with a warning; the grid is left
    /// unchanged.
    pub fn set(&mut self, x: f64, y: f64, value: T) -> Option<T> {
        let Some(key) = cell_key(x, y) else {
            log::warn!("ignoring grid set with non-finite coordinates ({x}, {y})");
            return None;
        };
        self.cells.insert(key, value)
    }

    /// Get the value at the cell containing `(x, y)`.
    pub fn get(&self, x: f64, y: f64) -> Option<&T> {
        self.cells.get(&cell_key(x, y)?)
    }

    /// Get a mutable reference to the value at the cell containing `(x, y)`.
    pub fn get_mut(&mut self, x: f64, y: f64) -> Option<&mut T> {
        self.cells.get_mut(&cell_key(x, y)?)
    }

    /// Whether the cell containing `(x, y)` holds a value.
    pub fn has(&self, x: f64, y: f64) -> bool {
        cell_key(x, y).is_some_and(|key| self.cells.contains_key(&key))
    }

    /// Remove and return the value at the cell containing `(x, y)`.
    ///
    /// Deleting an unoccupied cell is a no-op returning `None`.
    pub fn delete(&mut self, x: f64, y: f64) -> Option<T> {
        self.cells.remove(&cell_key(x, y)?)
    }

    /// Remove every value, restoring the freshly-created state.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the occupied cell coordinates.
    ///
    /// The order is unspecified: neither numeric nor insertion order, and
    /// it may change between runs. Callers needing a stable order must
    /// collect and sort.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.keys().copied()
    }

    /// Iterate over the stored values, in the same unspecified order as
    /// [`Grid::cells`].
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    /// Iterate over `(cell, value)` pairs, in the same unspecified order as
    /// [`Grid::cells`].
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), &T)> {
        self.cells.iter().map(|(&key, value)| (key, value))
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_sample_points() {
        let mut grid = Grid::new();

        grid.set(0.0, 0.0, 1);
        grid.set(-1.0, 1.0, 2);
        grid.set(1.0, 0.0, 3);
        grid.set(0.0, 1.0, 4);

        // Floors to (-1, 1) and overwrites the earlier value there.
        grid.set(-0.7, 1.2, 5);

        assert_eq!(grid.get(0.0, 0.0), Some(&1));
        assert_eq!(grid.get(-1.0, 1.0), Some(&5));
        assert_eq!(grid.get(1.0, 0.0), Some(&3));
        assert_eq!(grid.get(0.0, 1.0), Some(&4));
        assert_eq!(grid.get(1.0, 1.0), None);

        assert!(grid.has(0.0, 0.0));
        assert!(grid.has(-1.0, 1.0));
        assert!(!grid.has(1.0, 1.0));
    }

    #[test]
    fn floors_toward_negative_infinity() {
        let mut grid = Grid::new();
        grid.set(-0.7, -0.1, "neg");

        // Truncation toward zero would give (0, 0); flooring gives (-1, -1).
        assert_eq!(grid.get(-1.0, -1.0), Some(&"neg"));
        assert_eq!(grid.get(0.0, 0.0), None);
        assert_eq!(grid.get(-0.001, -0.999), Some(&"neg"));
    }

    #[test]
    fn fractional_aliases_hit_the_same_cell() {
        let mut grid = Grid::new();
        grid.set(3.0, 7.0, 42);

        assert_eq!(grid.get(3.999, 7.999), Some(&42));
        assert_eq!(grid.get(3.5, 7.0), Some(&42));
        assert_eq!(grid.get(4.0, 7.0), None);
    }

    #[test]
    fn delete_prunes_and_reports() {
        let mut grid = Grid::new();
        assert_eq!(grid.len(), 0);

        grid.set(5.0, 5.0, "v");
        assert_eq!(grid.len(), 1);

        assert_eq!(grid.delete(5.2, 5.9), Some("v"));
        assert!(!grid.has(5.0, 5.0));
        assert_eq!(grid.len(), 0);

        // Deleting again is a no-op.
        assert_eq!(grid.delete(5.0, 5.0), None);
    }

    #[test]
    fn repeated_set_delete_does_not_grow() {
        let mut grid = Grid::new();
        grid.set(1.0, 1.0, 0u32);
        let baseline = grid.len();

        for i in 0..1_000 {
            grid.set(-3.5, 9.25, i);
            grid.delete(-4.0, 9.0);
        }

        assert_eq!(grid.len(), baseline);
    }

    #[test]
    fn clear_restores_empty_state() {
        let mut grid = Grid::new();
        for x in -10..10 {
            grid.set(f64::from(x), 0.0, x);
        }
        assert_eq!(grid.len(), 20);

        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
        assert_eq!(grid.get(0.0, 0.0), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut grid = Grid::new();
        grid.set(2.0, 2.0, vec![1]);

        grid.get_mut(2.5, 2.5).unwrap().push(2);
        assert_eq!(grid.get(2.0, 2.0), Some(&vec![1, 2]));
    }

    #[test]
    fn iteration_views_agree() {
        let mut grid = Grid::new();
        grid.set(0.0, 0.0, "a");
        grid.set(-2.0, 3.0, "b");
        grid.set(7.0, -1.0, "c");

        let mut cells: Vec<_> = grid.cells().collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![(-2, 3), (0, 0), (7, -1)]);

        let mut values: Vec<_> = grid.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec!["a", "b", "c"]);

        let mut entries: Vec<_> = grid.iter().collect();
        entries.sort_unstable_by_key(|(cell, _)| *cell);
        assert_eq!(
            entries,
            vec![((-2, 3), &"b"), ((0, 0), &"a"), ((7, -1), &"c")]
        );
    }

    #[test]
    fn out_of_range_coordinates_saturate_to_extreme_cells() {
        let mut grid = Grid::new();

        // Beyond i64 range the floored cast saturates, so these alias.
        grid.set(1e300, 0.0, "first");
        grid.set(2e300, 0.0, "second");
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(1e300, 0.0), Some(&"second"));
        assert_eq!(grid.get(f64::MAX, 0.0), Some(&"second"));

        // The opposite extreme is a distinct cell.
        grid.set(-1e300, 0.0, "negative");
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.get(-2e300, 0.0), Some(&"negative"));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(f64::NAN, 0.0, 1), None);
        assert_eq!(grid.set(0.0, f64::INFINITY, 2), None);
        assert!(grid.is_empty());

        assert_eq!(grid.get(f64::NAN, f64::NAN), None);
        assert!(!grid.has(f64::NEG_INFINITY, 0.0));
        assert_eq!(grid.delete(f64::NAN, 0.0), None);
    }
}
