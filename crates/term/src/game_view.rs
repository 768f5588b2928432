//! GameView: lays out an `Engine` as terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Engine, Glyphs};
use crate::types::BOARD_WIDTH;

/// One rendered screen, top to bottom
pub type Frame = Vec<String>;

/// A lightweight text view of the game.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: usize,
    glyphs: Glyphs,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            glyphs: Glyphs {
                empty: " .",
                filled: ["[]"; 7],
            },
        }
    }
}

impl GameView {
    pub fn new(glyphs: Glyphs, cell_w: usize) -> Self {
        Self { cell_w, glyphs }
    }

    /// Render the board inside a border with a side panel.
    pub fn render(&self, engine: &Engine) -> Frame {
        let mut frame = Frame::new();
        self.render_into(engine, &mut frame);
        frame
    }

    /// Render into an existing frame, reusing its line buffers.
    pub fn render_into(&self, engine: &Engine, frame: &mut Frame) {
        let board = engine.render(&self.glyphs);
        let next = engine.render_next(&self.glyphs);

        let panel: [String; 8] = [
            format!("Score: {}", engine.score_text()),
            format!("Lines: {}", engine.lines()),
            String::new(),
            "Next:".to_string(),
            next.lines().next().unwrap_or_default().to_string(),
            next.lines().nth(1).unwrap_or_default().to_string(),
            String::new(),
            if engine.game_over() {
                "GAME OVER  r: restart  q: quit".to_string()
            } else {
                "arrows: move  space: rotate".to_string()
            },
        ];

        let inner_w = BOARD_WIDTH as usize * self.cell_w;
        let lines = std::iter::once(format!("+{}+", "-".repeat(inner_w)))
            .chain(board.lines().map(|row| format!("|{row}|")))
            .chain(std::iter::once(format!("+{}+", "-".repeat(inner_w))));

        frame.clear();
        for (i, line) in lines.enumerate() {
            let side = i.checked_sub(1).and_then(|p| panel.get(p));
            match side {
                Some(text) if !text.is_empty() => frame.push(format!("{line}  {text}")),
                _ => frame.push(line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, EngineConfig};
    use crate::types::{PieceKind, BOARD_HEIGHT};

    #[test]
    fn frame_has_border_and_panel() {
        let engine = Engine::new(EngineConfig::default().with_seed(3));
        let frame = GameView::default().render(&engine);

        assert_eq!(frame.len(), BOARD_HEIGHT as usize + 2);
        assert_eq!(frame[0], format!("+{}+", "-".repeat(20)));
        assert!(frame[1].ends_with("Score: 0"));
        assert!(frame[2].ends_with("Lines: 0"));
        assert!(frame[4].ends_with("Next:"));
        assert!(frame.last().unwrap().starts_with('+'));
    }

    #[test]
    fn game_over_banner_shown() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 1, Some(PieceKind::S));
        }
        let engine = Engine::with_board(EngineConfig::default(), board);
        let frame = GameView::default().render(&engine);
        assert!(frame.iter().any(|line| line.contains("GAME OVER")));
    }

    #[test]
    fn render_into_reuses_frame() {
        let engine = Engine::default();
        let view = GameView::default();
        let mut frame = view.render(&engine);
        let first = frame.clone();
        view.render_into(&engine, &mut frame);
        assert_eq!(frame, first);
    }
}
