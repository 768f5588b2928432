//! Browser Tetris (workspace facade crate).
//!
//! This package is the WebAssembly module the page loads. The engine lives in
//! dedicated crates under `crates/`; this crate re-exports them and adds the
//! `wasm-bindgen` surface the page script calls (`gameTick`, `moveLeft`,
//! `moveRight`, `moveDown`, `rotate`, `gamePrint`, `gameScore`, `gameOver`).

pub use web_tetris_core as core;
pub use web_tetris_types as types;

mod bindings;

pub use bindings::*;
