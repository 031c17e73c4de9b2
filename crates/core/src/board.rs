//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or tagged with
//! the piece kind that locked into it. Uses a flat array for cache locality
//! and zero-allocation line clears.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::shape_of;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices, at most one entry per board row
pub type RowList = ArrayVec<usize, HEIGHT>;

/// Row-major copy of every cell, `[y][x]`
pub type CellGrid = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Occupied(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(Cell::is_occupied))
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Cell::is_empty))
    }

    /// Cells of one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Indices of all full rows, top to bottom
    pub fn find_full_rows(&self) -> RowList {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and pull everything above them down.
    ///
    /// Rows may be non-contiguous and in any order; duplicates and out of
    /// range indices are ignored. An empty row is inserted at the top for
    /// each removed row, so the board dimensions never change.
    /// Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let mut marked = [false; HEIGHT];
        for &y in rows {
            if y < HEIGHT {
                marked[y] = true;
            }
        }

        // Single bottom-up pass: copy surviving rows to the write cursor.
        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if marked[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(Cell::Empty);
        write_y
    }

    /// Find and clear every full row, returning the cleared indices (top to bottom)
    pub fn clear_full_rows(&mut self) -> RowList {
        let rows = self.find_full_rows();
        if !rows.is_empty() {
            self.clear_rows(&rows);
        }
        rows
    }

    /// Write a piece's occupied cells into the board.
    ///
    /// Cells above the top edge (y < 0) are dropped silently, as are cells
    /// outside the side or bottom walls. Callers are expected to have
    /// validated the placement first. Returns the number of cells written.
    pub fn lock_piece(&mut self, kind: PieceKind, rotation: u8, x: i8, y: i8) -> usize {
        let mut written = 0;
        for (dx, dy) in shape_of(kind, rotation).offsets() {
            let (bx, by) = (x + dx, y + dy);
            if by < 0 {
                continue;
            }
            if self.set(bx, by, Cell::Occupied(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a 2D grid, `[y][x]`
    pub fn to_grid(&self) -> CellGrid {
        let mut grid = [[Cell::Empty; WIDTH]; HEIGHT];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }

    /// Fill a row completely with the given kind, except the listed columns
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !holes.contains(&x) {
                self.set(x, y, Cell::Occupied(kind));
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_rows_non_contiguous() {
        let mut board = Board::new();
        // Tag each row's first column so we can follow it.
        for y in 0..HEIGHT as i8 {
            board.set(0, y, Cell::Occupied(PieceKind::ALL[y as usize % 7]));
        }
        board.fill_row_except(2, PieceKind::I, &[]);
        board.fill_row_except(5, PieceKind::I, &[]);
        let before = board.to_grid();

        assert_eq!(board.find_full_rows().as_slice(), &[2, 5]);
        assert_eq!(board.clear_rows(&[5, 2]), 2);

        let after = board.to_grid();
        assert!(board.is_row_empty(0));
        assert!(board.is_row_empty(1));
        // Rows 0,1 moved down by two, rows 3,4 by one, rows below 5 untouched.
        assert_eq!(after[2], before[0]);
        assert_eq!(after[3], before[1]);
        assert_eq!(after[4], before[3]);
        assert_eq!(after[5], before[4]);
        for y in 6..HEIGHT {
            assert_eq!(after[y], before[y]);
        }
    }

    #[test]
    fn test_clear_rows_ignores_duplicates_and_out_of_range() {
        let mut board = Board::new();
        board.fill_row_except(19, PieceKind::O, &[]);
        assert_eq!(board.clear_rows(&[19, 19, 42]), 1);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_lock_piece_drops_cells_above_top() {
        let mut board = Board::new();
        // I vertical spans grid rows 1..=4; at y = -3 only its bottom two minos reach the board.
        let written = board.lock_piece(PieceKind::I, 0, 0, -3);
        assert_eq!(written, 2);
        assert_eq!(board.get(2, 0), Some(Cell::Occupied(PieceKind::I)));
        assert_eq!(board.get(2, 1), Some(Cell::Occupied(PieceKind::I)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_to_grid_matches_get() {
        let mut board = Board::new();
        board.set(3, 7, Cell::Occupied(PieceKind::T));
        let grid = board.to_grid();
        assert_eq!(grid[7][3], Cell::Occupied(PieceKind::T));
        assert_eq!(grid[7][4], Cell::Empty);
    }
}
