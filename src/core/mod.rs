//! Core domain types for the game
//!
//! Pure values and functions: words, scoring, history encoding and errors. Nothing here
//! performs I/O or keeps state between calls.

mod error;
mod feedback;
mod history;
mod rules;
mod word;

pub use error::{GameError, WordError};
pub use feedback::{Feedback, Verdict};
pub use history::{SEPARATOR, decode_history, encode_history, parse_history};
pub use rules::{MAX_ATTEMPTS, Rules, WORD_LENGTH};
pub use word::{Word, normalize};
