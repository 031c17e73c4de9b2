//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and renders into a plain framebuffer that is flushed to
//! the terminal with run-length diffs.
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`game_view`]: pure snapshot-to-framebuffer mapping, 2 columns per board cell
//! - [`renderer`]: alternate screen handling and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport, WellLayout};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
