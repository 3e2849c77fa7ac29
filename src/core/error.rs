//! Error taxonomy for the game engine
//!
//! Every failure here is an input-validation failure. The engine raises these and
//! leaves recovery to whoever drives it.

use thiserror::Error;

/// Why a piece of text is not a valid word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Invalid character '{character}'. Only A-Z allowed")]
    IllegalCharacter { character: char },
}

/// Errors raised by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A live field (target or new guess) failed normalization
    #[error("Invalid {field}: {reason}")]
    InvalidWord { field: String, reason: WordError },

    /// An entry of the caller-held history failed normalization
    #[error("Invalid game state: history entry {index} ({token:?}) is corrupted: {reason}")]
    TamperedHistory {
        index: usize,
        token: String,
        reason: WordError,
    },

    /// Guess and target reached the scorer with different lengths
    #[error("word length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid rules: {0}")]
    InvalidRules(&'static str),
}

impl GameError {
    /// True for errors caused by caller-held state rather than fresh user input
    #[must_use]
    pub const fn is_tampered(&self) -> bool {
        matches!(self, Self::TamperedHistory { .. })
    }
}
