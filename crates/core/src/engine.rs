//! Engine module - the game-state machine
//!
//! This module ties together all core components: board, pieces, randomizer,
//! and scoring. It runs the spawn -> fall -> lock -> clear cycle and exposes
//! the operations a host calls (tick, moves, rotate) plus read-only views.
//!
//! Every operation runs to completion and either applies exactly one legal
//! change or leaves the state untouched. Once the engine reaches
//! [`Phase::GameOver`] all mutating operations are no-ops until [`Engine::reset`].

use tracing::{debug, error, info, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::pieces::Piece;
use crate::render::{render_board, render_next, score_text, Glyphs};
use crate::rng::{Randomizer, ShapeSource};
use crate::scoring::ScoringTable;
use crate::types::{GameAction, LockEvent, PieceKind, Phase};

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    active: Option<Piece>,
    randomizer: Randomizer,
    scoring: ScoringTable,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Number of pieces locked this session
    pieces: u32,
    /// Last lock/line-clear event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a new session and spawn its first piece
    pub fn new(config: EngineConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Create a session on a prepared board
    ///
    /// The first spawn is tested against `board` like any other, so a board
    /// stacked into the spawn area starts in [`Phase::GameOver`].
    pub fn with_board(config: EngineConfig, board: Board) -> Self {
        let mut engine = Self {
            config,
            board,
            active: None,
            randomizer: Randomizer::new(config.randomizer, config.seed),
            scoring: config.scoring,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            pieces: 0,
            last_event: None,
        };
        engine.spawn_piece();
        engine
    }

    /// Discard all session state and start over with the same config
    pub fn reset(&mut self) {
        self.reset_with(self.config);
    }

    /// Discard all session state and start over with `config`
    pub fn reset_with(&mut self, config: EngineConfig) {
        info!(seed = config.seed, "session reset");
        *self = Self::new(config);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Shape that will spawn after the current piece locks
    pub fn next_piece(&self) -> PieceKind {
        self.randomizer.peek()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance gravity by one row, locking and spawning when blocked
    ///
    /// Returns false only when the game is already over.
    pub fn tick(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Soft drop one row; a blocked drop locks the piece like a gravity tick
    pub fn move_down(&mut self) -> bool {
        self.tick()
    }

    /// Rotate clockwise, trying wall kicks in order
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match active.rotated(&self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::Tick => self.tick(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Render board and falling piece
    pub fn render(&self, glyphs: &Glyphs) -> String {
        render_board(&self.board, self.active.as_ref(), glyphs)
    }

    /// Render the next-piece preview
    pub fn render_next(&self, glyphs: &Glyphs) -> String {
        render_next(self.next_piece(), glyphs)
    }

    pub fn score_text(&self) -> String {
        score_text(self.score)
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if moved.is_valid(&self.board) {
            self.active = Some(moved);
            return true;
        }

        false
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.phase = Phase::Locking;

        // Moves and rotations only ever commit valid positions.
        debug_assert!(active.is_valid(&self.board), "locking invalid piece {active:?}");
        if let Err(err) = self
            .board
            .lock_piece(&active.shape(), active.x, active.y, active.kind)
        {
            error!(%err, kind = active.kind.as_str(), "active piece could not be locked");
        }
        self.pieces = self.pieces.wrapping_add(1);

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let points = self.scoring.points(lines_cleared);
        self.lines += lines_cleared;
        self.score = self.score.saturating_add(points);

        debug!(
            kind = active.kind.as_str(),
            lines_cleared,
            points,
            score = self.score,
            "piece locked"
        );
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            points,
        });

        self.spawn_piece();
    }

    /// Spawn a new piece from the randomizer
    fn spawn_piece(&mut self) -> bool {
        self.phase = Phase::Spawning;

        let piece = Piece::new(self.randomizer.draw());
        if !piece.is_valid(&self.board) {
            info!(
                kind = piece.kind.as_str(),
                score = self.score,
                lines = self.lines,
                "spawn blocked, game over"
            );
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        trace!(kind = piece.kind.as_str(), "spawned");
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
