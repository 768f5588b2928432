//! Terminal Tetris runner.
//!
//! Plays the same engine the browser build exports: a fixed gravity timer
//! calls `tick`, key presses call the move/rotate operations, and the screen
//! is redrawn after every change.

mod config;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::prelude::*;

use web_tetris_core::Engine;
use web_tetris_input::{handle_key_event, should_quit};
use web_tetris_term::{GameView, TerminalRenderer};
use web_tetris_types::GameAction;

use crate::config::RunnerConfig;

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    init_logging(config.log_level);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to stderr; nothing is installed when logging is off so the
/// alternate screen stays clean.
fn init_logging(level: LevelFilter) {
    if level == LevelFilter::OFF {
        return;
    }
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(level)
        .init();
    info!(%level, "logging initialized");
}

fn run(term: &mut TerminalRenderer, config: &RunnerConfig) -> Result<()> {
    let engine_config = config.engine_config();
    info!(seed = engine_config.seed, tick_ms = config.tick_ms, "starting session");

    let mut engine = Engine::new(engine_config);
    let view = GameView::default();
    let mut frame = view.render(&engine);

    let tick_duration = Duration::from_millis(config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        view.render_into(&engine, &mut frame);
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Restart) => {
                            engine.reset_with(config.engine_config());
                            last_tick = Instant::now();
                        }
                        Some(action) => {
                            engine.apply_action(action);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity stops with the game; the board stays on screen until quit or restart.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick();
        }
    }
}
