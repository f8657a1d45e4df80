//! Grid module - the bounded cell buffer shared by both engines
//!
//! The grid is a 10x20 field where each cell holds a small integer: 0 is empty,
//! any positive value identifies the occupant (figure color id, snake part, apple).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Every cell mutation goes through [`Grid::set`] / [`Grid::try_set`], so "is this
//! cell occupied" means the same thing for both engines. Out-of-range access is a
//! logic defect: the infallible accessors panic, the `try_*` variants return
//! [`GridError::OutOfBounds`].

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::types::{Cell, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// The playing field - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if !Self::contains(x, y) {
            return None;
        }
        Some((y as usize) * FIELD_WIDTH + (x as usize))
    }

    #[inline(always)]
    fn contains(x: i32, y: i32) -> bool {
        x >= 0 && x < FIELD_WIDTH as i32 && y >= 0 && y < FIELD_HEIGHT as i32
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Check if (x, y) lies within the grid
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        Self::contains(x, y)
    }

    /// Get cell at position (x, y)
    pub fn try_get(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        Self::index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// Set cell at position (x, y)
    pub fn try_set(&mut self, x: i32, y: i32, value: Cell) -> Result<(), GridError> {
        let idx = Self::index(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Get cell at position (x, y)
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is outside the grid.
    #[track_caller]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.try_get(x, y) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Set cell at position (x, y)
    ///
    /// # Panics
    ///
    /// Panics when (x, y) is outside the grid.
    #[track_caller]
    pub fn set(&mut self, x: i32, y: i32, value: Cell) {
        if let Err(err) = self.try_set(x, y, value) {
            panic!("{err}");
        }
    }

    /// True when (x, y) is inside the grid and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.try_get(x, y), Ok(EMPTY_CELL))
    }

    /// Zero every cell
    pub fn reset_all(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT {
            return false;
        }
        let start = y * FIELD_WIDTH;
        self.cells[start..start + FIELD_WIDTH]
            .iter()
            .all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove row `y`, shifting every row above it down by one and zeroing the top row
    pub fn remove_row(&mut self, y: usize) {
        if y >= FIELD_HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * FIELD_WIDTH;
            self.cells
                .copy_within(src_start..src_start + FIELD_WIDTH, row * FIELD_WIDTH);
        }

        self.cells[..FIELD_WIDTH].fill(EMPTY_CELL);
    }

    /// Clear all full rows, scanning bottom to top
    ///
    /// A row that becomes full again after the rows above shift into it is
    /// re-checked before moving up, so contiguous full rows are all removed.
    /// Returns the indices at which rows were removed, in removal order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, FIELD_HEIGHT> {
        let mut cleared = ArrayVec::new();
        for y in (0..FIELD_HEIGHT).rev() {
            while self.is_row_full(y) {
                self.remove_row(y);
                cleared.push(y);
            }
        }
        cleared
    }

    /// Indices (x, y) of every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == EMPTY_CELL)
            .map(|(idx, _)| ((idx % FIELD_WIDTH) as i32, (idx / FIELD_WIDTH) as i32))
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major matrix
    pub fn write_rows(&self, out: &mut [[Cell; FIELD_WIDTH]; FIELD_HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * FIELD_WIDTH;
            row.copy_from_slice(&self.cells[start..start + FIELD_WIDTH]);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(0, 0, 1);
        grid.set(5, 10, 6);

        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(5, 10), 6);

        assert_eq!(grid.cells[0], 1);
        assert_eq!(grid.cells[10 * 10 + 5], 6);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new();
        grid.get(FIELD_WIDTH as i32, 0);
    }

    #[test]
    #[should_panic(expected = "outside the grid")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new();
        grid.set(0, -1, 1);
    }

    #[test]
    fn test_clear_full_rows_handles_contiguous_block() {
        let mut grid = Grid::new();
        for y in 17..20 {
            for x in 0..FIELD_WIDTH as i32 {
                grid.set(x, y, 1);
            }
        }
        // Marker above the full block drops by three rows.
        grid.set(4, 16, 5);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), 3);
        assert_eq!(grid.get(4, 19), 5);
        assert_eq!(grid.get(4, 16), 0);
    }

    #[test]
    fn test_clear_full_rows_skips_partial_rows() {
        let mut grid = Grid::new();
        for x in 0..FIELD_WIDTH as i32 {
            grid.set(x, 19, 2);
            grid.set(x, 17, 2);
        }
        grid.set(3, 18, 4);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        // The partial row ends up at the bottom.
        assert_eq!(grid.get(3, 19), 4);
        assert!(!grid.is_row_full(19));
    }

    #[test]
    fn test_empty_cells_skips_occupied() {
        let mut grid = Grid::new();
        grid.set(0, 0, 1);
        grid.set(9, 19, 3);

        let empty = grid.empty_cells();
        assert_eq!(empty.len(), FIELD_WIDTH * FIELD_HEIGHT - 2);
        assert!(!empty.contains(&(0, 0)));
        assert!(!empty.contains(&(9, 19)));
        assert_eq!(empty[0], (1, 0));
    }

    proptest! {
        #[test]
        fn prop_out_of_bounds_access_fails(x in -50i32..60, y in -50i32..70) {
            prop_assume!(!(0..FIELD_WIDTH as i32).contains(&x) || !(0..FIELD_HEIGHT as i32).contains(&y));
            let mut grid = Grid::new();
            prop_assert!(!grid.is_inside(x, y));
            prop_assert_eq!(grid.try_get(x, y), Err(GridError::OutOfBounds { x, y }));
            prop_assert_eq!(grid.try_set(x, y, 1), Err(GridError::OutOfBounds { x, y }));
        }

        #[test]
        fn prop_set_then_get_round_trips(
            x in 0i32..FIELD_WIDTH as i32,
            y in 0i32..FIELD_HEIGHT as i32,
            value in any::<u8>(),
        ) {
            let mut grid = Grid::new();
            grid.set(x, y, value);
            prop_assert_eq!(grid.get(x, y), value);
        }

        #[test]
        fn prop_reset_all_zeroes_every_cell(
            writes in proptest::collection::vec((0i32..10, 0i32..20, 1u8..8), 0..64),
        ) {
            let mut grid = Grid::new();
            for (x, y, v) in writes {
                grid.set(x, y, v);
            }
            grid.reset_all();
            prop_assert!(grid.cells().iter().all(|&c| c == EMPTY_CELL));
        }
    }
}
