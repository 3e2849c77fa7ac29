//! Board and status derivation
//!
//! Everything is recomputed from the target and the full history on every call, so
//! evaluating the same inputs twice gives the same result.

use super::{Board, Row};
use crate::core::{Feedback, GameError, Rules, Word, encode_history, normalize, parse_history};

/// Coarse state of a game, derived from the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Derive the status for `history` against `target`
    ///
    /// Precedence: empty history, then a last guess equal to the target, then an exhausted
    /// attempt count. A win on the final attempt is a win.
    #[must_use]
    pub fn derive(target: &Word, history: &[Word], rules: Rules) -> Self {
        match history.last() {
            None => Self::NotStarted,
            Some(last) if last == target => Self::Won,
            Some(_) if history.len() >= rules.max_attempts() => Self::Lost,
            Some(_) => Self::InProgress,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Message shown to the player for this status
    #[must_use]
    pub fn message(self, target: &Word) -> String {
        match self {
            Self::NotStarted => "Input a guess to start the game!".to_string(),
            Self::InProgress => "Keep guessing!".to_string(),
            Self::Won => "Congratulations! You win!".to_string(),
            Self::Lost => format!("Game Over! You lose! The target word was {target}."),
        }
    }
}

/// Result of evaluating a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub board: Board,
    pub status: GameStatus,
    pub target: Word,
    pub history: Vec<Word>,
}

impl Evaluation {
    #[must_use]
    pub fn message(&self) -> String {
        self.status.message(&self.target)
    }

    /// Serialized history for the caller to hand back next turn
    #[must_use]
    pub fn old_guesses(&self) -> String {
        encode_history(&self.history)
    }
}

/// Stateless game engine for one set of rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    rules: Rules,
}

impl Evaluator {
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Normalize raw input for `field` into a word of the configured length
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the input is the wrong length or has a character
    /// outside A-Z.
    pub fn normalize(&self, raw: &str, field: &str) -> Result<Word, GameError> {
        normalize(raw, field, self.rules)
    }

    /// Decode and validate a caller-held history
    ///
    /// # Errors
    /// Returns `GameError::TamperedHistory` if any entry is malformed.
    pub fn parse_history(&self, raw: &str) -> Result<Vec<Word>, GameError> {
        parse_history(raw, self.rules)
    }

    /// Build the board and status for `target` and `history`
    ///
    /// Rows past the end of the history are blank. Guesses beyond the attempt limit are
    /// not drawn but still count towards the status.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the target or any guess does not have the
    /// configured length. Words from [`Evaluator::normalize`] never trigger this.
    ///
    /// # Examples
    /// ```
    /// use wordish::core::Rules;
    /// use wordish::game::{Evaluator, GameStatus};
    ///
    /// let evaluator = Evaluator::new(Rules::STANDARD);
    /// let target = evaluator.normalize("speed", "target").unwrap();
    /// let guess = evaluator.normalize("erase", "new-guess").unwrap();
    ///
    /// let evaluation = evaluator.evaluate(&target, &[guess]).unwrap();
    /// assert_eq!(evaluation.status, GameStatus::InProgress);
    /// assert_eq!(evaluation.board.rows().len(), 6);
    /// ```
    pub fn evaluate(&self, target: &Word, history: &[Word]) -> Result<Evaluation, GameError> {
        let width = self.rules.word_length();
        if target.len() != width {
            return Err(GameError::LengthMismatch {
                expected: width,
                actual: target.len(),
            });
        }
        if let Some(guess) = history.iter().find(|g| g.len() != width) {
            return Err(GameError::LengthMismatch {
                expected: width,
                actual: guess.len(),
            });
        }

        let rows = (0..self.rules.max_attempts())
            .map(|attempt| match history.get(attempt) {
                Some(guess) => {
                    Feedback::calculate(guess, target).map(|fb| Row::scored(guess, &fb))
                }
                None => Ok(Row::blank(width)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Evaluation {
            board: Board::new(rows),
            status: GameStatus::derive(target, history, self.rules),
            target: target.clone(),
            history: history.to_vec(),
        })
    }
}
