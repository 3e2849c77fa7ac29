//! Word representation and the normalization gate
//!
//! A `Word` is always upper-case A-Z of a fixed length; construction is the only way to
//! get one, so holding a `Word` means holding a valid one.

use super::{GameError, Rules, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// An upper-case word of a known length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word of `length` letters
    ///
    /// Input is upper-cased first. Length is checked before the alphabet, and length counts
    /// characters rather than bytes.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains anything other than A-Z once upper-cased
    ///
    /// # Examples
    /// ```
    /// use wordish::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.to_uppercase();

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::WrongLength {
                expected: length,
                actual,
            });
        }

        if let Some(character) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::IllegalCharacter { character });
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.letters()[position])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Multiset of letters, used by the scorer to track unclaimed occurrences
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Trim, upper-case and validate raw input for `field`
///
/// This is the single gate every target and guess passes through.
///
/// # Errors
/// Returns `GameError::InvalidWord` carrying the field name and the reason.
///
/// # Examples
/// ```
/// use wordish::core::{normalize, Rules};
///
/// let word = normalize("  slate \n", "target", Rules::STANDARD).unwrap();
/// assert_eq!(word.text(), "SLATE");
/// assert!(normalize("slat", "target", Rules::STANDARD).is_err());
/// ```
pub fn normalize(raw: &str, field: &str, rules: Rules) -> Result<Word, GameError> {
    Word::new(raw.trim(), rules.word_length()).map_err(|reason| GameError::InvalidWord {
        field: field.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, 5).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = word("CRANE");
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(word("crane").text(), "CRANE");
        assert_eq!(word("CrAnE").text(), "CRANE");
    }

    #[test]
    fn word_creation_wrong_length() {
        assert_eq!(
            Word::new("", 5),
            Err(WordError::WrongLength {
                expected: 5,
                actual: 0
            })
        );
        assert_eq!(
            Word::new("abcd", 5),
            Err(WordError::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            Word::new("abcdef", 5),
            Err(WordError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn word_creation_illegal_characters() {
        assert_eq!(
            Word::new("cran3", 5),
            Err(WordError::IllegalCharacter { character: '3' })
        );
        assert_eq!(
            Word::new("cr ne", 5),
            Err(WordError::IllegalCharacter { character: ' ' })
        );
        assert_eq!(
            Word::new("cran!", 5),
            Err(WordError::IllegalCharacter { character: '!' })
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, more than five bytes
        assert_eq!(
            Word::new("crèpe", 5),
            Err(WordError::IllegalCharacter { character: 'È' })
        );
    }

    #[test]
    fn length_checked_before_alphabet() {
        assert!(matches!(
            Word::new("12", 5),
            Err(WordError::WrongLength { actual: 2, .. })
        ));
    }

    #[test]
    fn custom_length() {
        assert_eq!(Word::new("abc", 3).unwrap().text(), "ABC");
        assert!(Word::new("abcde", 3).is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = word("crane");
        assert_eq!(word.letter_at(0), 'C');
        assert_eq!(word.letter_at(4), 'E');
    }

    #[test]
    fn word_letter_counts() {
        let counts = word("speed").letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'Z'), None);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", word("crane")), "CRANE");
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        let word = normalize("  slate\t", "target", Rules::STANDARD).unwrap();
        assert_eq!(word.text(), "SLATE");
    }

    #[test]
    fn normalize_reports_field() {
        let err = normalize("sl4te", "new-guess", Rules::STANDARD).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidWord {
                field: "new-guess".to_string(),
                reason: WordError::IllegalCharacter { character: '4' },
            }
        );
    }

    #[test]
    fn normalize_rejects_empty_and_whitespace() {
        assert!(normalize("", "target", Rules::STANDARD).is_err());
        assert!(normalize("     ", "target", Rules::STANDARD).is_err());
    }
}
