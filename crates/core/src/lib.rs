//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules, state management and timing.
//! It has **no dependencies** on the terminal, files or the clock, making it:
//!
//! - **Deterministic**: a seeded generator replays the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the terminal front-end is just one consumer of [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes as 5x5 rotation-state grids
//! - [`board`]: 10x20 grid with locking and line clearing
//! - [`placement`]: the placement validator and landing projection
//! - [`generator`]: uniform, 7-bag and fixed-sequence piece generators
//! - [`scoring`]: line clear table, drop bonuses and the level curve
//! - [`repeat`]: held-key repeat timers
//! - [`session`]: the game session state machine
//! - [`snapshot`]: plain copyable view for renderers
//!
//! # Game Rules
//!
//! - **Rotation**: index advances modulo the state count; no wall kicks, a
//!   rotation that does not fit in place is rejected
//! - **Gravity**: one row per fall interval, `max(50, 500 - (level - 1) * 30)` ms
//! - **Locking**: a piece locks as soon as a downward step fails
//! - **Scoring**: 100/300/500/800 times level per clear, +1 per soft-dropped
//!   row, +2 per hard-dropped row
//! - **Game over**: the next piece does not fit at the spawn anchor
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SequenceGenerator, SessionConfig};
//! use blockfall_types::{GameAction, PieceKind};
//!
//! let mut game = GameSession::with_generator(
//!     SessionConfig::default(),
//!     SequenceGenerator::new([PieceKind::T, PieceKind::O]),
//! );
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! assert_eq!(game.active().map(|p| p.kind), Some(PieceKind::O));
//! ```
//!
//! Call [`GameSession::tick`] every frame with the elapsed milliseconds.

pub mod board;
pub mod config;
pub mod generator;
pub mod pieces;
pub mod placement;
pub mod repeat;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{FallCurve, RepeatIntervals, SessionConfig};
pub use generator::{
    BagGenerator, PieceGenerator, RandomizerKind, SequenceGenerator, UniformGenerator,
};
pub use pieces::{piece_cells, shape_of, ShapeGrid};
pub use placement::{is_valid, landing_y};
pub use repeat::RepeatTimers;
pub use scoring::{drop_points, fall_interval_ms, level_for_lines, line_clear_points};
pub use session::{ActivePiece, GameSession};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
