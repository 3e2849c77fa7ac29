//! Caller-held guess history
//!
//! The engine keeps no state between turns. Prior guesses travel with the caller as a
//! comma-separated list and are decoded and re-validated on every turn.

use super::{GameError, Rules, Word};

/// Separator between guesses in the serialized history
pub const SEPARATOR: char = ',';

/// Split a serialized history into raw tokens, dropping empty ones
///
/// An empty string means no guesses yet. Tokens are not validated here.
///
/// # Examples
/// ```
/// use wordish::core::decode_history;
///
/// assert_eq!(decode_history("CRANE,,SLATE,"), vec!["CRANE", "SLATE"]);
/// assert!(decode_history("").is_empty());
/// ```
#[must_use]
pub fn decode_history(raw: &str) -> Vec<&str> {
    raw.split(SEPARATOR).filter(|token| !token.is_empty()).collect()
}

/// Decode and validate a serialized history
///
/// # Errors
/// Returns `GameError::TamperedHistory` for the first token that is not a valid word.
pub fn parse_history(raw: &str, rules: Rules) -> Result<Vec<Word>, GameError> {
    decode_history(raw)
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            Word::new(token.trim(), rules.word_length()).map_err(|reason| {
                GameError::TamperedHistory {
                    index,
                    token: token.to_string(),
                    reason,
                }
            })
        })
        .collect()
}

/// Serialize guesses for the caller to hand back next turn
#[must_use]
pub fn encode_history(history: &[Word]) -> String {
    let separator = SEPARATOR.to_string();
    history
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
