//! Board dimensions
//!
//! Word length and attempt count are carried as a value so that every bound in the
//! engine comes from one place and tests can play on smaller boards.

use super::GameError;

/// Letters per word in a standard game
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed in a standard game
pub const MAX_ATTEMPTS: usize = 6;

/// Dimensions of a game: letters per word and number of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    word_length: usize,
    max_attempts: usize,
}

impl Rules {
    /// Five letters, six attempts
    pub const STANDARD: Self = Self {
        word_length: WORD_LENGTH,
        max_attempts: MAX_ATTEMPTS,
    };

    /// Create custom rules
    ///
    /// # Errors
    /// Returns `GameError::InvalidRules` if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use wordish::core::Rules;
    ///
    /// let rules = Rules::new(3, 2).unwrap();
    /// assert_eq!(rules.word_length(), 3);
    /// assert!(Rules::new(0, 6).is_err());
    /// ```
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, GameError> {
        if word_length == 0 {
            return Err(GameError::InvalidRules("word length must be at least 1"));
        }
        if max_attempts == 0 {
            return Err(GameError::InvalidRules("attempt count must be at least 1"));
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard() {
        let rules = Rules::default();
        assert_eq!(rules.word_length(), 5);
        assert_eq!(rules.max_attempts(), 6);
        assert_eq!(rules, Rules::STANDARD);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(Rules::new(0, 6), Err(GameError::InvalidRules(_))));
        assert!(matches!(Rules::new(5, 0), Err(GameError::InvalidRules(_))));
    }

    #[test]
    fn accepts_small_board() {
        let rules = Rules::new(2, 1).unwrap();
        assert_eq!(rules.word_length(), 2);
        assert_eq!(rules.max_attempts(), 1);
    }
}
