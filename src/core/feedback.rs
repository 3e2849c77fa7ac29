//! Per-letter scoring of a guess against a target
//!
//! Each position of a guess gets one of three verdicts:
//! - Correct: same letter at the same position
//! - Misplaced: letter occurs elsewhere in the target and that occurrence is unclaimed
//! - Wrong: letter absent, or every occurrence already claimed

use super::{GameError, Word};

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Misplaced,
    Wrong,
}

impl Verdict {
    /// Class name used by renderers
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Wrong => "wrong",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// Verdicts for every position of a scored guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Implements the two-pass rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count the target's letters
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass, left to right: a remaining letter still in the pool is misplaced and
    ///    claims one occurrence; anything else is wrong
    ///
    /// Earlier positions claim misplaced credit before later ones.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` when the words differ in length. This means a
    /// caller skipped validation; nothing is truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use wordish::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("llama", 5).unwrap();
    /// let target = Word::new("allow", 5).unwrap();
    /// let feedback = Feedback::calculate(&guess, &target).unwrap();
    ///
    /// use Verdict::{Correct, Misplaced, Wrong};
    /// assert_eq!(feedback.verdicts(), &[Misplaced, Correct, Misplaced, Wrong, Wrong]);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, GameError> {
        if guess.len() != target.len() {
            return Err(GameError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![Verdict::Wrong; guess.len()];
        let mut available = target.letter_counts();

        // First pass: exact positions
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: leftmost unmatched letters claim what is left
        for (verdict, &letter) in result.iter_mut().zip(guess.letters()) {
            if *verdict == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                *verdict = Verdict::Misplaced;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Misplaced).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Verdict::{Correct, Misplaced, Wrong};
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &str, target: &str) -> Vec<Verdict> {
        let guess = Word::new(guess, guess.len()).unwrap();
        let target = Word::new(target, target.len()).unwrap();
        Feedback::calculate(&guess, &target).unwrap().0
    }

    /// Position-claiming scorer written independently of the letter-count version
    fn reference_score(guess: &[u8], target: &[u8]) -> Vec<Verdict> {
        let mut claimed: Vec<bool> = guess.iter().zip(target).map(|(g, t)| g == t).collect();
        guess
            .iter()
            .enumerate()
            .map(|(i, &g)| {
                if g == target[i] {
                    return Correct;
                }
                let slot = (0..target.len()).find(|&j| !claimed[j] && target[j] == g);
                match slot {
                    Some(j) => {
                        claimed[j] = true;
                        Misplaced
                    }
                    None => Wrong,
                }
            })
            .collect()
    }

    #[test]
    fn all_wrong() {
        assert_eq!(score("abcde", "fghij"), vec![Wrong; 5]);
    }

    #[test]
    fn exact_match_is_perfect() {
        let word = Word::new("crane", 5).unwrap();
        let feedback = Feedback::calculate(&word, &word).unwrap();
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn real_example() {
        // R is wrong because SLATE has no R
        assert_eq!(
            score("crane", "slate"),
            vec![Wrong, Wrong, Correct, Wrong, Correct]
        );
    }

    #[test]
    fn duplicate_guess_letters_llama_allow() {
        assert_eq!(
            score("llama", "allow"),
            vec![Misplaced, Correct, Misplaced, Wrong, Wrong]
        );
    }

    #[test]
    fn duplicate_letters_erase_speed() {
        // Both E's of SPEED are claimed by the first and last E of ERASE
        assert_eq!(
            score("erase", "speed"),
            vec![Misplaced, Wrong, Wrong, Misplaced, Misplaced]
        );
        assert_eq!(
            score("erase", "speed"),
            reference_score(b"ERASE", b"SPEED")
        );
    }

    #[test]
    fn duplicate_letters_speed_erase() {
        assert_eq!(
            score("speed", "erase"),
            vec![Misplaced, Wrong, Misplaced, Misplaced, Wrong]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // Second O is correct, so the first O only gets the remaining one
        assert_eq!(
            score("robot", "floor"),
            vec![Misplaced, Misplaced, Wrong, Correct, Wrong]
        );
        // B at index 2 is exact; only one B is left for index 0 and 3
        assert_eq!(
            score("bobby", "abbey"),
            vec![Misplaced, Wrong, Correct, Wrong, Correct]
        );
    }

    #[test]
    fn leftmost_surplus_letter_claims_credit() {
        assert_eq!(
            score("eexxx", "abcde"),
            vec![Misplaced, Wrong, Wrong, Wrong, Wrong]
        );
    }

    #[test]
    fn counts() {
        let guess = Word::new("llama", 5).unwrap();
        let target = Word::new("allow", 5).unwrap();
        let feedback = Feedback::calculate(&guess, &target).unwrap();
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(feedback.count_misplaced(), 2);
        assert_eq!(feedback.to_emoji(), "🟨🟩🟨⬜⬜");
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let guess = Word::new("abc", 3).unwrap();
        let target = Word::new("abcde", 5).unwrap();
        assert_eq!(
            Feedback::calculate(&guess, &target),
            Err(GameError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn verdict_classes() {
        assert_eq!(Correct.as_str(), "correct");
        assert_eq!(Misplaced.as_str(), "misplaced");
        assert_eq!(Wrong.as_str(), "wrong");
    }

    proptest! {
        #[test]
        fn matches_reference(guess in "[A-E]{5}", target in "[A-E]{5}") {
            prop_assert_eq!(
                score(&guess, &target),
                reference_score(guess.as_bytes(), target.as_bytes())
            );
        }

        #[test]
        fn length_equals_word_length(guess in "[A-Z]{1,8}") {
            let target: String = guess.chars().rev().collect();
            prop_assert_eq!(score(&guess, &target).len(), guess.len());
        }

        #[test]
        fn word_against_itself_is_all_correct(word in "[A-Z]{5}") {
            prop_assert!(score(&word, &word).iter().all(|&v| v == Correct));
        }
    }
}
