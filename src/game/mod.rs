//! Game evaluation
//!
//! Builds the board and status for a target and the guesses made so far.

mod board;
mod evaluator;

pub use board::{Board, Cell, Row};
pub use evaluator::{Evaluation, Evaluator, GameStatus};
