//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The layout
//! follows the browser page: arrows move, space rotates.

pub mod map;

pub use web_tetris_types as types;

pub use map::{handle_key_event, should_quit};
