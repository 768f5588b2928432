//! Text rendering of engine state
//!
//! Every row is `BOARD_WIDTH` glyphs followed by `'\n'`. Locked cells and
//! cells of the falling piece both render as the filled glyph of their shape;
//! everything else renders as the empty glyph. Rendering never mutates state.

use crate::board::Board;
use crate::pieces::{get_spawn_shape, Piece};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Cell-to-glyph mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: &'static str,
    /// Filled glyph per shape, indexed by [`PieceKind::index`]
    pub filled: [&'static str; 7],
}

impl Glyphs {
    /// Browser glyphs: one colored square per shape
    pub const EMOJI: Glyphs = Glyphs {
        empty: "⬛",
        // I, O, T, S, Z, J, L
        filled: ["🟦", "🟨", "🟪", "🟩", "🟥", "🟫", "🟧"],
    };

    /// Plain glyphs for terminals and tests
    pub const ASCII: Glyphs = Glyphs {
        empty: ".",
        filled: ["#"; 7],
    };

    pub fn cell(&self, cell: Cell) -> &'static str {
        match cell {
            Some(kind) => self.filled[kind.index()],
            None => self.empty,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::EMOJI
    }
}

/// Render the board with the falling piece overlaid
pub fn render_board(board: &Board, active: Option<&Piece>, glyphs: &Glyphs) -> String {
    let mut out = String::with_capacity(
        (BOARD_WIDTH as usize * glyphs.empty.len() + 1) * BOARD_HEIGHT as usize,
    );
    render_board_into(&mut out, board, active, glyphs);
    out
}

/// Same as [`render_board`], appending into a reused buffer
pub fn render_board_into(out: &mut String, board: &Board, active: Option<&Piece>, glyphs: &Glyphs) {
    let active_cells = active.map(|piece| (piece.kind, piece.cells()));

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = match active_cells {
                Some((kind, cells)) if cells.contains(&(x, y)) => Some(kind),
                _ => board.get(x, y).flatten(),
            };
            out.push_str(glyphs.cell(cell));
        }
        out.push('\n');
    }
}

/// Render a 4x2 preview of `kind` in its spawn orientation
pub fn render_next(kind: PieceKind, glyphs: &Glyphs) -> String {
    let shape = get_spawn_shape(kind);
    // I sits on row 1 of its box, everything else spans rows 0-1.
    let top = shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0);

    let mut out = String::new();
    for y in top..top + 2 {
        for x in 0..4 {
            let cell = shape.contains(&(x, y)).then_some(kind);
            out.push_str(glyphs.cell(cell));
        }
        out.push('\n');
    }
    out
}

/// Decimal score text
pub fn score_text(score: u32) -> String {
    score.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    #[test]
    fn empty_board_is_grid_of_empty_glyphs() {
        let text = render_board(&Board::new(), None, &Glyphs::ASCII);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_HEIGHT as usize);
        assert!(lines.iter().all(|line| *line == ".........."));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn active_piece_and_stack_both_render_filled() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::L));
        let piece = Piece {
            kind: PieceKind::O,
            rotation: Rotation::North,
            x: 3,
            y: 0,
        };

        let text = render_board(&board, Some(&piece), &Glyphs::ASCII);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "....##....");
        assert_eq!(lines[1], "....##....");
        assert_eq!(lines[19], "#.........");
    }

    #[test]
    fn emoji_glyphs_follow_shape() {
        let mut board = Board::new();
        board.set(9, 19, Some(PieceKind::Z));
        let text = render_board(&board, None, &Glyphs::EMOJI);
        let last = text.lines().last().unwrap_or_default();
        assert!(last.ends_with("🟥"));
        assert_eq!(last.chars().count(), BOARD_WIDTH as usize);
    }

    #[test]
    fn next_preview_shapes() {
        assert_eq!(render_next(PieceKind::I, &Glyphs::ASCII), "####\n....\n");
        assert_eq!(render_next(PieceKind::T, &Glyphs::ASCII), ".#..\n###.\n");
        assert_eq!(render_next(PieceKind::O, &Glyphs::ASCII), ".##.\n.##.\n");
    }

    #[test]
    fn score_is_decimal() {
        assert_eq!(score_text(0), "0");
        assert_eq!(score_text(1240), "1240");
    }
}
