//! Pieces module - the static piece catalog
//!
//! Every piece kind owns an ordered list of rotation states. Each state is a
//! 5x5 grid stored as five row bitmasks; bit 4 is column 0 so the literals
//! below read left to right the way the piece looks on screen.
//!
//! Rotation uses a simplified scheme with no wall kicks: O has one state,
//! I/S/Z have two and T/J/L have four. Rotating advances the index modulo the
//! state count and is rejected outright when the new state does not fit.

use blockfall_types::{PieceKind, SHAPE_GRID};

/// Offset of a single mino from the piece anchor, as `(dx, dy)`
pub type MinoOffset = (i8, i8);

/// The four occupied cells of one rotation state
pub type PieceCells = [MinoOffset; 4];

/// One rotation state on the 5x5 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    rows: [u8; SHAPE_GRID],
}

impl ShapeGrid {
    const fn new(rows: [u8; SHAPE_GRID]) -> Self {
        Self { rows }
    }

    /// Whether the grid cell at `(row, col)` is part of the piece
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        if row >= SHAPE_GRID || col >= SHAPE_GRID {
            return false;
        }
        self.rows[row] & (1 << (SHAPE_GRID - 1 - col)) != 0
    }

    /// Occupied cells as `(dx, dy)` offsets, top-to-bottom then left-to-right
    pub fn offsets(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..SHAPE_GRID).flat_map(move |row| {
            (0..SHAPE_GRID)
                .filter(move |&col| self.is_filled(row, col))
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Grid as booleans, `[row][col]`
    pub fn to_bools(&self) -> [[bool; SHAPE_GRID]; SHAPE_GRID] {
        let mut out = [[false; SHAPE_GRID]; SHAPE_GRID];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.is_filled(row, col);
            }
        }
        out
    }
}

const I_STATES: [ShapeGrid; 2] = [
    ShapeGrid::new([0b00000, 0b00100, 0b00100, 0b00100, 0b00100]),
    ShapeGrid::new([0b00000, 0b00000, 0b11110, 0b00000, 0b00000]),
];

const O_STATES: [ShapeGrid; 1] = [ShapeGrid::new([
    0b00000, 0b00000, 0b01100, 0b01100, 0b00000,
])];

const T_STATES: [ShapeGrid; 4] = [
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b11100, 0b00000]),
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b01100, 0b01000]),
    ShapeGrid::new([0b00000, 0b00000, 0b00000, 0b11100, 0b01000]),
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b11000, 0b01000]),
];

const S_STATES: [ShapeGrid; 2] = [
    ShapeGrid::new([0b00000, 0b00000, 0b01100, 0b11000, 0b00000]),
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b01100, 0b00100]),
];

const Z_STATES: [ShapeGrid; 2] = [
    ShapeGrid::new([0b00000, 0b00000, 0b11000, 0b01100, 0b00000]),
    ShapeGrid::new([0b00000, 0b00000, 0b00100, 0b01100, 0b01000]),
];

const J_STATES: [ShapeGrid; 4] = [
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b01000, 0b11000]),
    ShapeGrid::new([0b00000, 0b00000, 0b00000, 0b10000, 0b11100]),
    ShapeGrid::new([0b00000, 0b00000, 0b01100, 0b01000, 0b01000]),
    ShapeGrid::new([0b00000, 0b00000, 0b00000, 0b11100, 0b00100]),
];

const L_STATES: [ShapeGrid; 4] = [
    ShapeGrid::new([0b00000, 0b00000, 0b01000, 0b01000, 0b01100]),
    ShapeGrid::new([0b00000, 0b00000, 0b00000, 0b11100, 0b10000]),
    ShapeGrid::new([0b00000, 0b00000, 0b11000, 0b01000, 0b01000]),
    ShapeGrid::new([0b00000, 0b00000, 0b00000, 0b00100, 0b11100]),
];

/// All rotation states of a piece kind, index 0 being the spawn orientation
pub fn rotation_states(kind: PieceKind) -> &'static [ShapeGrid] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states for a piece kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotation_states(kind).len() as u8
}

/// Shape grid for a kind and rotation index (taken modulo the state count)
pub fn shape_of(kind: PieceKind, rotation: u8) -> &'static ShapeGrid {
    let states = rotation_states(kind);
    &states[rotation as usize % states.len()]
}

/// Occupied cell offsets for a kind and rotation index
pub fn piece_cells(kind: PieceKind, rotation: u8) -> PieceCells {
    let mut cells = [(0, 0); 4];
    for (slot, offset) in cells.iter_mut().zip(shape_of(kind, rotation).offsets()) {
        *slot = offset;
    }
    cells
}

/// Rotation index one step clockwise
pub fn next_rotation(kind: PieceKind, rotation: u8) -> u8 {
    (rotation % rotation_count(kind) + 1) % rotation_count(kind)
}

/// Rotation index one step counter-clockwise
pub fn prev_rotation(kind: PieceKind, rotation: u8) -> u8 {
    let count = rotation_count(kind);
    (rotation % count + count - 1) % count
}
