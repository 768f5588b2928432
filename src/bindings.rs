//! `wasm-bindgen` exports.
//!
//! The page calls bare functions with no session handle, so one engine per
//! thread lives in a `thread_local!`. `TetrisSession` exposes the same
//! operations on an engine the caller owns, for pages that run several boards.

use std::cell::RefCell;

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::core::{Engine, EngineConfig, Glyphs};

thread_local! {
    static GAME: RefCell<Engine> = RefCell::new(Engine::new(fresh_config()));
}

/// Seed from the platform entropy source, or the default seed if none exists.
fn fresh_config() -> EngineConfig {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => EngineConfig::default().with_seed(u64::from_le_bytes(buf)),
        Err(err) => {
            warn!(%err, "no entropy source, using the default seed");
            EngineConfig::default()
        }
    }
}

fn with_game<T>(f: impl FnOnce(&mut Engine) -> T) -> T {
    GAME.with(|game| f(&mut game.borrow_mut()))
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start a fresh session, discarding the current one.
///
/// Exported as `gameInit`: the generated module already uses the default
/// `init` export to instantiate the wasm binary.
#[wasm_bindgen(js_name = gameInit)]
pub fn game_init() {
    let config = fresh_config();
    with_game(|game| game.reset_with(config));
}

/// Start a fresh session with a fixed seed (replays the same piece sequence).
#[wasm_bindgen(js_name = gameInitWithSeed)]
pub fn game_init_with_seed(seed: u32) {
    with_game(|game| game.reset_with(EngineConfig::default().with_seed(seed as u64)));
}

#[wasm_bindgen(js_name = gameTick)]
pub fn game_tick() {
    with_game(|game| game.tick());
}

#[wasm_bindgen(js_name = moveLeft)]
pub fn move_left() {
    with_game(|game| game.move_left());
}

#[wasm_bindgen(js_name = moveRight)]
pub fn move_right() {
    with_game(|game| game.move_right());
}

#[wasm_bindgen(js_name = moveDown)]
pub fn move_down() {
    with_game(|game| game.move_down());
}

#[wasm_bindgen(js_name = rotate)]
pub fn rotate() {
    with_game(|game| game.rotate());
}

#[wasm_bindgen(js_name = gamePrint)]
pub fn game_print() -> String {
    with_game(|game| game.render(&Glyphs::EMOJI))
}

#[wasm_bindgen(js_name = gamePrintNextfield)]
pub fn game_print_nextfield() -> String {
    with_game(|game| game.render_next(&Glyphs::EMOJI))
}

#[wasm_bindgen(js_name = gameScore)]
pub fn game_score() -> String {
    with_game(|game| game.score_text())
}

#[wasm_bindgen(js_name = gameLines)]
pub fn game_lines() -> u32 {
    with_game(|game| game.lines())
}

#[wasm_bindgen(js_name = gameOver)]
pub fn game_over() -> bool {
    with_game(|game| game.game_over())
}

/// An independent game owned by the caller
#[wasm_bindgen]
pub struct TetrisSession {
    engine: Engine,
}

#[wasm_bindgen]
impl TetrisSession {
    /// New session; without a seed one is drawn from the entropy source.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> TetrisSession {
        let config = match seed {
            Some(seed) => EngineConfig::default().with_seed(seed as u64),
            None => fresh_config(),
        };
        TetrisSession {
            engine: Engine::new(config),
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn tick(&mut self) {
        self.engine.tick();
    }

    #[wasm_bindgen(js_name = moveLeft)]
    pub fn move_left(&mut self) -> bool {
        self.engine.move_left()
    }

    #[wasm_bindgen(js_name = moveRight)]
    pub fn move_right(&mut self) -> bool {
        self.engine.move_right()
    }

    #[wasm_bindgen(js_name = moveDown)]
    pub fn move_down(&mut self) -> bool {
        self.engine.move_down()
    }

    pub fn rotate(&mut self) -> bool {
        self.engine.rotate()
    }

    pub fn print(&self) -> String {
        self.engine.render(&Glyphs::EMOJI)
    }

    #[wasm_bindgen(js_name = printNextfield)]
    pub fn print_nextfield(&self) -> String {
        self.engine.render_next(&Glyphs::EMOJI)
    }

    pub fn score(&self) -> String {
        self.engine.score_text()
    }

    pub fn lines(&self) -> u32 {
        self.engine.lines()
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.engine.game_over()
    }
}

impl TetrisSession {
    /// Borrow the underlying engine (native callers and tests)
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
