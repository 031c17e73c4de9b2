//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, so they can be used from the engine,
//! the terminal front-end and the tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0), the top-left corner of the piece's 5x5 grid
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed logic tick (~60 Hz) |
//! | `BASE_FALL_MS` | 500 | Fall interval at level 1 |
//! | `FALL_STEP_MS` | 30 | Fall interval reduction per level |
//! | `MIN_FALL_MS` | 50 | Fall interval floor |
//! | `MOVE_REPEAT_MS` | 50 | Repeat interval while left/right is held |
//! | `SOFT_DROP_REPEAT_MS` | 80 | Repeat interval while down is held |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let cell = Cell::Occupied(piece);
//! assert_eq!(cell.kind(), Some(PieceKind::T));
//!
//! let action: GameAction = "hardDrop".parse().unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square grid every rotation state is drawn on
pub const SHAPE_GRID: usize = 5;

/// Anchor column for freshly spawned pieces
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Anchor row for freshly spawned pieces
pub const SPAWN_Y: i8 = 0;

/// Fixed logic tick in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Fall interval at level 1
pub const BASE_FALL_MS: u32 = 500;

/// Fall interval reduction for each level above 1
pub const FALL_STEP_MS: u32 = 30;

/// Fall interval floor
pub const MIN_FALL_MS: u32 = 50;

/// Repeat interval for a held left/right key
pub const MOVE_REPEAT_MS: u32 = 50;

/// Repeat interval for a held soft-drop key
pub const SOFT_DROP_REPEAT_MS: u32 = 80;

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by rows cleared in a single lock.
///
/// The value is multiplied by the level that was active when the rows were
/// cleared.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row moved by a manual soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_is_centered_for_five_wide_grid() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn line_scores_match_classic_table() {
        assert_eq!(LINE_SCORES[1..], [100, 300, 500, 800]);
    }

    #[test]
    fn piece_kind_parses_case_insensitively() {
        assert_eq!("i".parse::<PieceKind>(), Ok(PieceKind::I));
        assert_eq!("L".parse::<PieceKind>(), Ok(PieceKind::L));
        assert!("x".parse::<PieceKind>().is_err());
        assert_eq!(PieceKind::S.to_string(), "S");
    }

    #[test]
    fn game_action_round_trips_through_names() {
        for action in GameAction::ALL {
            assert_eq!(action.as_str().parse::<GameAction>(), Ok(action));
        }
        assert!("hold".parse::<GameAction>().is_err());
    }

    #[test]
    fn cell_variants() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::Occupied(PieceKind::Z).is_occupied());
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::from(Some(PieceKind::O)), Cell::Occupied(PieceKind::O));
    }
}

/// The seven tetromino piece kinds
///
/// Each kind maps to a fixed set of rotation states in the piece catalog.
/// The tag is also stored in locked board cells, where it is used purely
/// for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Number of piece kinds
    pub const LEN: usize = 7;

    /// All kinds in catalog order
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a piece kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece kind: {0:?}")]
pub struct ParsePieceKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "o" => Ok(PieceKind::O),
            "t" => Ok(PieceKind::T),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            _ => Err(ParsePieceKindError(s.to_owned())),
        }
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Piece kind that locked into this cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(*kind),
        }
    }
}

impl From<Option<PieceKind>> for Cell {
    fn from(value: Option<PieceKind>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Discrete input events the engine understands
///
/// These are produced by the input layer (keyboard mapping) and consumed by
/// the game session, one entry point per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (awards the soft drop bonus)
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Advance to the next rotation state
    RotateCw,
    /// Go back to the previous rotation state
    RotateCcw,
    /// Pause or resume
    TogglePause,
    /// Start a fresh game
    Restart,
    /// Ask the runner to leave the game loop
    Quit,
}

impl GameAction {
    pub const ALL: [GameAction; 9] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::TogglePause,
        GameAction::Restart,
        GameAction::Quit,
    ];

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }

    /// Whether holding the key keeps re-applying the action
    pub fn repeats(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
        )
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a game action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game action: {0:?}")]
pub struct ParseActionError(pub String);

impl FromStr for GameAction {
    type Err = ParseActionError;

    /// Accepts the camelCase names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        GameAction::ALL
            .into_iter()
            .find(|action| action.as_str().to_ascii_lowercase() == lower)
            .ok_or_else(|| ParseActionError(s.to_owned()))
    }
}

/// Event recorded by the session each time a piece locks.
///
/// Observers (the runner, logging) take it with `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Rows removed by this lock
    pub lines_cleared: u32,
    /// Points awarded for those rows
    pub line_clear_score: u32,
    /// The follow-up spawn failed
    pub game_over: bool,
    /// Set when the game ended above the previous high score
    pub new_high_score: Option<u32>,
}
