//! Scoring module - line clear points
//!
//! Points depend only on the number of lines removed by one lock; there is no
//! level, combo or back-to-back state.

use crate::types::LINE_SCORES;

/// Points table applied to each line clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringTable {
    /// Classic Nintendo values at level 0: 40 / 100 / 300 / 1200
    #[default]
    Classic,
    /// `lines² × base`
    Squared { base: u32 },
}

impl ScoringTable {
    /// Points for clearing `lines` rows in one pass
    pub fn points(&self, lines: u32) -> u32 {
        match *self {
            Self::Classic => calculate_line_score(lines),
            Self::Squared { base } => lines.saturating_mul(lines).saturating_mul(base),
        }
    }
}

/// Calculate line clear score (Classic rules)
/// Counts above four score as four.
pub fn calculate_line_score(lines: u32) -> u32 {
    LINE_SCORES[(lines as usize).min(LINE_SCORES.len() - 1)]
}
