//! Piece catalog tests

use blockfall::core::{is_valid, piece_cells, shape_of, Board};
use blockfall::types::{PieceKind, SPAWN_X, SPAWN_Y};

fn sorted(mut cells: [(i8, i8); 4]) -> [(i8, i8); 4] {
    cells.sort();
    cells
}

#[test]
fn test_all_pieces_have_four_cells_in_every_state() {
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            assert_eq!(shape_of(kind, rotation).filled_count(), 4, "{kind} r{rotation}");
        }
    }
}

#[test]
fn test_cells_stay_inside_the_grid() {
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            for (dx, dy) in piece_cells(kind, rotation) {
                assert!((0..5).contains(&dx) && (0..5).contains(&dy), "{kind} r{rotation}");
            }
        }
    }
}

#[test]
fn test_i_piece_states() {
    assert_eq!(
        sorted(piece_cells(PieceKind::I, 0)),
        [(2, 1), (2, 2), (2, 3), (2, 4)]
    );
    assert_eq!(
        sorted(piece_cells(PieceKind::I, 1)),
        [(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    // Two states only: rotation 2 wraps back to the vertical bar.
    assert_eq!(piece_cells(PieceKind::I, 2), piece_cells(PieceKind::I, 0));
}

#[test]
fn test_t_piece_points_up_at_spawn() {
    assert_eq!(
        sorted(piece_cells(PieceKind::T, 0)),
        [(0, 3), (1, 2), (1, 3), (2, 3)]
    );
}

#[test]
fn test_o_piece_has_single_state() {
    for rotation in 1..4 {
        assert_eq!(shape_of(PieceKind::O, rotation), shape_of(PieceKind::O, 0));
    }
}

#[test]
fn test_rotation_states_are_distinct() {
    for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
        let states: Vec<_> = (0..4).map(|r| sorted(piece_cells(kind, r))).collect();
        for a in 0..4 {
            for b in (a + 1)..4 {
                assert_ne!(states[a], states[b], "{kind} states {a} and {b} coincide");
            }
        }
    }
}

#[test]
fn test_every_piece_fits_at_spawn() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        assert!(is_valid(&board, kind, 0, SPAWN_X, SPAWN_Y), "{kind}");
    }
}
