//! Placement validation
//!
//! A placement is valid when every occupied cell of the shape lies inside
//! the side and bottom walls and over an empty board cell. Cells above the
//! top edge are allowed so pieces can spawn partially hidden.
//!
//! Everything here is a pure function of the board and the candidate
//! position; it is used for moves, rotations, ghost projection and hard drops.

use crate::board::Board;
use crate::pieces::shape_of;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `kind` at `rotation` fits with its anchor at `(x, y)`
pub fn is_valid(board: &Board, kind: PieceKind, rotation: u8, x: i8, y: i8) -> bool {
    shape_of(kind, rotation).offsets().all(|(dx, dy)| {
        let bx = x + dx;
        let by = y + dy;
        if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
            return false;
        }
        by < 0 || !board.is_occupied(bx, by)
    })
}

/// Lowest anchor row reachable by moving straight down from `y`.
///
/// Returns `y` itself when the piece cannot move down at all. The caller is
/// expected to pass a valid starting placement.
pub fn landing_y(board: &Board, kind: PieceKind, rotation: u8, x: i8, y: i8) -> i8 {
    let mut landing = y;
    while is_valid(board, kind, rotation, x, landing + 1) {
        landing += 1;
    }
    landing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_spawn_position_valid_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(is_valid(&board, kind, 0, 3, 0), "{kind} should fit at spawn");
        }
    }

    #[test]
    fn test_side_walls_are_hard_bounds() {
        let board = Board::new();
        // I vertical sits in grid column 2.
        assert!(is_valid(&board, PieceKind::I, 0, -2, 0));
        assert!(!is_valid(&board, PieceKind::I, 0, -3, 0));
        assert!(is_valid(&board, PieceKind::I, 0, 7, 0));
        assert!(!is_valid(&board, PieceKind::I, 0, 8, 0));
    }

    #[test]
    fn test_bottom_wall_is_hard_bound() {
        let board = Board::new();
        // O occupies grid rows 2 and 3.
        assert!(is_valid(&board, PieceKind::O, 0, 3, 16));
        assert!(!is_valid(&board, PieceKind::O, 0, 3, 17));
    }

    #[test]
    fn test_cells_above_top_are_allowed() {
        let board = Board::new();
        assert!(is_valid(&board, PieceKind::O, 0, 3, -3));
        assert!(is_valid(&board, PieceKind::O, 0, 3, -10));
    }

    #[test]
    fn test_occupied_cell_rejects() {
        let mut board = Board::new();
        board.set(4, 2, Cell::Occupied(PieceKind::Z));
        assert!(!is_valid(&board, PieceKind::O, 0, 3, 0));
        assert!(is_valid(&board, PieceKind::O, 0, 5, 0));
    }

    #[test]
    fn test_landing_y_on_empty_and_stacked_board() {
        let mut board = Board::new();
        assert_eq!(landing_y(&board, PieceKind::O, 0, 3, 0), 16);

        board.fill_row_except(19, PieceKind::I, &[]);
        assert_eq!(landing_y(&board, PieceKind::O, 0, 3, 0), 15);
    }

    #[test]
    fn test_is_valid_is_repeatable() {
        let mut board = Board::new();
        board.fill_row_except(18, PieceKind::T, &[4]);
        let first = is_valid(&board, PieceKind::T, 2, 3, 14);
        let second = is_valid(&board, PieceKind::T, 2, 3, 14);
        assert_eq!(first, second);
        assert_eq!(board.filled_count(), 9);
    }
}
