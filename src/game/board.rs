//! Render-ready game board

use crate::core::{Feedback, Verdict, Word};

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Filled { letter: char, verdict: Verdict },
    Blank,
}

impl Cell {
    /// Class name for renderers: the verdict's, or "blank"
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Filled { verdict, .. } => verdict.as_str(),
            Self::Blank => "blank",
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Filled { letter, .. } => Some(letter),
            Self::Blank => None,
        }
    }

    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Filled { verdict, .. } => Some(verdict),
            Self::Blank => None,
        }
    }
}

/// One attempt: either a scored guess or blanks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn scored(guess: &Word, feedback: &Feedback) -> Self {
        let cells = guess
            .letters()
            .iter()
            .zip(feedback.verdicts())
            .map(|(&letter, &verdict)| Cell::Filled {
                letter: char::from(letter),
                verdict,
            })
            .collect();
        Self { cells }
    }

    pub(crate) fn blank(width: usize) -> Self {
        Self {
            cells: vec![Cell::Blank; width],
        }
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Blank)
    }
}

/// Full grid of rows, one per allowed attempt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    pub(crate) const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Stable identifier for the cell at `row`, `col`, e.g. `cell_2_4`
    #[must_use]
    pub fn cell_id(row: usize, col: usize) -> String {
        format!("cell_{row}_{col}")
    }

    /// Number of rows holding a scored guess
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_blank()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_row_carries_letters_and_verdicts() {
        let guess = Word::new("llama", 5).unwrap();
        let target = Word::new("allow", 5).unwrap();
        let feedback = Feedback::calculate(&guess, &target).unwrap();
        let row = Row::scored(&guess, &feedback);

        assert_eq!(row.cells().len(), 5);
        assert_eq!(
            row.cells()[1],
            Cell::Filled {
                letter: 'L',
                verdict: Verdict::Correct
            }
        );
        assert_eq!(row.cells()[3].class(), "wrong");
        assert!(!row.is_blank());
    }

    #[test]
    fn blank_row() {
        let row = Row::blank(4);
        assert_eq!(row.cells().len(), 4);
        assert!(row.is_blank());
        assert_eq!(row.cells()[0].class(), "blank");
        assert_eq!(row.cells()[0].letter(), None);
        assert_eq!(row.cells()[0].verdict(), None);
    }

    #[test]
    fn cell_ids() {
        assert_eq!(Board::cell_id(0, 0), "cell_0_0");
        assert_eq!(Board::cell_id(5, 4), "cell_5_4");
    }
}
