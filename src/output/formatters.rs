//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{Board, Cell};
use colored::{ColoredString, Colorize};

/// Format a board as an emoji grid, one line per played row
///
/// Blank rows are left out so the grid can be shared without spoiling letters.
#[must_use]
pub fn board_to_emoji(board: &Board) -> String {
    board
        .rows()
        .iter()
        .filter(|row| !row.is_blank())
        .map(|row| {
            row.cells()
                .iter()
                .filter_map(|cell| cell.verdict().map(Verdict::emoji))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single cell as a colored tile
#[must_use]
pub fn colored_cell(cell: Cell) -> ColoredString {
    match cell {
        Cell::Filled { letter, verdict } => {
            let tile = format!(" {letter} ");
            match verdict {
                Verdict::Correct => tile.black().on_green().bold(),
                Verdict::Misplaced => tile.black().on_yellow().bold(),
                Verdict::Wrong => tile.white().on_bright_black().bold(),
            }
        }
        Cell::Blank => " · ".bright_black(),
    }
}
