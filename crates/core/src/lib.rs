//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and rendering of
//! the engine behind the browser exports. It has **no dependencies** on the
//! DOM, the terminal, or any I/O, making it:
//!
//! - **Deterministic**: Same seed and same operations produce identical games
//! - **Testable**: Every rule is reachable from plain unit tests
//! - **Portable**: Runs natively and as WebAssembly
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`pieces`]: Tetromino shape tables and SRS clockwise rotation with wall kicks
//! - [`rng`]: 7-bag and uniform piece randomizers
//! - [`scoring`]: Line clear points table
//! - [`engine`]: The spawn -> fall -> lock -> clear state machine
//! - [`render`]: Text grid, next-piece preview, and score text
//! - [`config`]: Per-session settings
//!
//! # Example
//!
//! ```
//! use web_tetris_core::{Engine, EngineConfig, Glyphs};
//!
//! let mut game = Engine::new(EngineConfig::default().with_seed(12345));
//!
//! game.move_right();
//! game.rotate();
//! game.tick();
//!
//! assert!(!game.game_over());
//! assert_eq!(game.render(&Glyphs::ASCII).lines().count(), 20);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod scoring;

pub use web_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, LockError};
pub use config::EngineConfig;
pub use engine::Engine;
pub use pieces::{get_shape, try_rotate, Piece};
pub use render::{render_board, render_next, score_text, Glyphs};
pub use rng::{BagRandomizer, Randomizer, RandomizerPolicy, ShapeSource, UniformRandomizer};
pub use scoring::{calculate_line_score, ScoringTable};
