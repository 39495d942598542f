//! Grid module - the occupancy matrix
//!
//! The grid is `rows x columns` cells stored row-major in a flat vector.
//! A cell holds `EMPTY_CELL` or the id of the shape that settled there.
//! Coordinates: (row, column), row 0 at the top.
//!
//! Collision checks run on block tile positions, which may sit above the
//! grid right after a spawn. [`GameGrid::is_empty`] therefore treats rows
//! above the grid as free, and everything else outside the grid (side
//! walls, floor) as blocked.

use std::ops::{Index, IndexMut};

use crate::types::{Cell, BUFFER_ROWS, EMPTY_CELL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameGrid {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
}

impl GameGrid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "grid must be at least 1x1");
        Self {
            rows,
            columns,
            cells: vec![EMPTY_CELL; rows * columns],
        }
    }

    /// Calculate flat index from (row, column) coordinates
    #[inline(always)]
    fn index_of(&self, row: i32, column: i32) -> Option<usize> {
        if !self.is_inside(row, column) {
            return None;
        }
        Some(row as usize * self.columns + column as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_inside(&self, row: i32, column: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && column >= 0 && (column as usize) < self.columns
    }

    /// Whether a block tile may occupy (row, column)
    ///
    /// Rows above the grid count as empty so blocks can spawn partly
    /// outside it; walls and floor count as occupied.
    pub fn is_empty(&self, row: i32, column: i32) -> bool {
        if column < 0 || column as usize >= self.columns || row >= self.rows as i32 {
            return false;
        }
        if row < 0 {
            return true;
        }
        self[(row as usize, column as usize)] == EMPTY_CELL
    }

    /// Get cell at (row, column), `None` if out of bounds
    pub fn get(&self, row: i32, column: i32) -> Option<Cell> {
        self.index_of(row, column).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, column); returns false if out of bounds
    pub fn set(&mut self, row: i32, column: i32, cell: Cell) -> bool {
        match self.index_of(row, column) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Rows out of range are neither full nor empty
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row_slice(row).iter().all(|&cell| cell != EMPTY_CELL)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row < self.rows && self.row_slice(row).iter().all(|&cell| cell == EMPTY_CELL)
    }

    /// Whether the buffer rows at the top are still clear
    pub fn buffer_rows_empty(&self) -> bool {
        (0..BUFFER_ROWS.min(self.rows)).all(|row| self.is_row_empty(row))
    }

    /// Remove every full row and return how many were removed
    ///
    /// Rows above a removed row drop by the number of removed rows beneath
    /// them; the freed rows at the top come back empty.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.columns;
        let mut cleared = 0;
        let mut write_row = self.rows;

        // Scan from bottom to top
        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * width].fill(EMPTY_CELL);

        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY_CELL).count()
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }
}

impl Index<(usize, usize)> for GameGrid {
    type Output = Cell;

    fn index(&self, (row, column): (usize, usize)) -> &Cell {
        assert!(column < self.columns, "column {} out of range", column);
        &self.cells[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for GameGrid {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Cell {
        assert!(column < self.columns, "column {} out of range", column);
        &mut self.cells[row * self.columns + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "grid must be at least 1x1")]
    fn test_grid_rejects_zero_columns() {
        GameGrid::new(5, 0);
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = GameGrid::new(22, 10);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(0, 9), Some(9));
        assert_eq!(grid.index_of(1, 0), Some(10));
        assert_eq!(grid.index_of(21, 9), Some(219));
        assert_eq!(grid.index_of(-1, 0), None);
        assert_eq!(grid.index_of(0, 10), None);
        assert_eq!(grid.index_of(22, 0), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = GameGrid::new(22, 10);
        grid[(0, 0)] = 1;
        grid.set(10, 5, 6);

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid[(10, 5)], 6);
        assert_eq!(grid.cells[10 * 10 + 5], 6);
    }

    #[test]
    fn test_is_empty_out_of_bounds() {
        let grid = GameGrid::new(22, 10);
        assert!(grid.is_empty(-1, 0));
        assert!(grid.is_empty(-2, 9));
        assert!(!grid.is_empty(-1, -1));
        assert!(!grid.is_empty(-1, 10));
        assert!(!grid.is_empty(0, -1));
        assert!(!grid.is_empty(0, 10));
        assert!(!grid.is_empty(22, 4));
    }

    #[test]
    fn test_clear_shifts_non_contiguous_rows() {
        let mut grid = GameGrid::new(8, 7);
        for column in 0..7 {
            grid[(3, column)] = 1;
            grid[(6, column)] = 2;
        }
        grid[(2, 0)] = 3;
        grid[(5, 1)] = 4;
        grid[(7, 2)] = 5;

        assert_eq!(grid.clear_full_rows(), 2);
        assert_eq!(grid[(4, 0)], 3);
        assert_eq!(grid[(6, 1)], 4);
        assert_eq!(grid[(7, 2)], 5);
        assert!(grid.is_row_empty(0));
        assert!(grid.is_row_empty(1));
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn test_buffer_rows() {
        let mut grid = GameGrid::new(22, 10);
        assert!(grid.buffer_rows_empty());
        grid.set(2, 0, 1);
        assert!(grid.buffer_rows_empty());
        grid.set(1, 9, 1);
        assert!(!grid.buffer_rows_empty());
    }
}
