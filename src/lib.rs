//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under one roof and adds
//! the pieces only the binary needs: settings, high score persistence,
//! logging setup and the game loop.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod app;
pub mod config;
pub mod highscore;
pub mod logging;

pub use app::App;
pub use config::{ConfigError, Settings};
pub use highscore::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, StoreError};
