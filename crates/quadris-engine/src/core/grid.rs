use super::cell::Cell;

/// The settled playfield: a fixed 20×10 matrix of [`Cell`]s.
///
/// Row 0 is the top of the field, row 19 the bottom. The grid has no public
/// mutation API; all writes go through [`Board`](crate::engine::Board), which
/// owns the grid exclusively and reaches into its storage directly.
///
/// Every cell is always in a defined state, and the dimensions never change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [[Cell; Self::COLS]; Self::ROWS],
}

impl Grid {
    /// Number of rows (field height).
    pub const ROWS: usize = 20;
    /// Number of columns (field width).
    pub const COLS: usize = 10;

    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::EMPTY; Self::COLS]; Self::ROWS],
        }
    }

    /// Returns a copy of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 20` or `col >= 10`. Out-of-range access is a caller
    /// bug, not a gameplay condition; legitimate callers iterate the fixed
    /// field dimensions.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True if every cell in `row` is filled.
    pub(crate) fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.filled)
    }

    /// True if any cell in the top row is filled.
    pub(crate) fn is_top_row_occupied(&self) -> bool {
        self.cells[0].iter().any(|cell| cell.filled)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
