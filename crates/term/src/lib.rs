//! Terminal rendering for the native host.
//!
//! `GameView` turns an engine into text lines (pure, testable) and
//! `TerminalRenderer` flushes those lines to a real terminal through crossterm,
//! rewriting only the lines that changed.

pub mod game_view;
pub mod renderer;

pub use web_tetris_core as core;
pub use web_tetris_types as types;

pub use game_view::{Frame, GameView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
