//! Turn adapter between a transport and the game engine
//!
//! Models the two form handlers a front end needs: starting a game from a target and
//! submitting a guess together with the hidden state from the previous turn. It knows
//! nothing about HTTP; a `Form` is just named string fields.

mod form;

pub use form::{Form, Method};

use crate::core::{GameError, Rules, Word};
use crate::game::{Evaluation, Evaluator};
use tracing::{debug, warn};

/// Form field carrying the target word
pub const TARGET_FIELD: &str = "target";
/// Form field carrying the serialized history
pub const OLD_GUESSES_FIELD: &str = "old-guesses";
/// Form field carrying the guess being submitted
pub const NEW_GUESS_FIELD: &str = "new-guess";
/// Hidden message field, must come back blank
pub const MESSAGE_FIELD: &str = "message";

const WELCOME: &str = "Welcome to Wordish!";
const HACKING: &str = "Error invalid: You're hacking. Try again!";
const MALFORMED: &str = "Error invalid: Malformed hidden field detected.";
const MISSING_TARGET: &str = "Error invalid: Target word is missing.";
const MISSING_GUESS: &str = "Error invalid: No guess submitted.";
const TAMPERED: &str = "Error invalid: Invalid game state due to tampered hidden fields.";

/// Which screen the front end should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Target entry
    Start,
    /// Board for a game in any status
    Game(Evaluation),
}

/// Screen plus the message to display on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub screen: Screen,
    pub message: String,
}

impl Page {
    fn start(message: impl Into<String>) -> Self {
        Self {
            screen: Screen::Start,
            message: message.into(),
        }
    }

    fn game(evaluation: Evaluation) -> Self {
        Self {
            message: evaluation.message(),
            screen: Screen::Game(evaluation),
        }
    }

    #[must_use]
    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.screen {
            Screen::Game(evaluation) => Some(evaluation),
            Screen::Start => None,
        }
    }
}

/// Stateless request handlers over an [`Evaluator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self {
            evaluator: Evaluator::new(rules),
        }
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Handle the start screen
    ///
    /// `Get` shows the welcome message. `Post` validates the target and opens an empty
    /// board, or returns to the start screen with the reason.
    #[must_use]
    pub fn start(&self, method: Method, form: &Form) -> Page {
        if method == Method::Get {
            return Page::start(WELCOME);
        }

        let raw = form.get(TARGET_FIELD).unwrap_or_default();
        match self
            .evaluator
            .normalize(raw, TARGET_FIELD)
            .and_then(|target| self.evaluator.evaluate(&target, &[]))
        {
            Ok(evaluation) => {
                debug!(word_length = evaluation.target.len(), "game started");
                Page::game(evaluation)
            }
            Err(e) => {
                debug!(error = %e, "rejected target");
                Page::start(format!("Error invalid: {}", reason(&e)))
            }
        }
    }

    /// Handle a guess submission
    ///
    /// Hidden state (target, history, message) is checked before the new guess. Problems
    /// with hidden state send the player back to the start screen; a bad new guess keeps
    /// the current board and explains what was wrong.
    #[must_use]
    pub fn submit(&self, method: Method, form: &Form) -> Page {
        if method == Method::Get {
            return Page::start(HACKING);
        }

        let (Some(raw_target), Some(raw_history), Some(raw_guess)) = (
            form.get(TARGET_FIELD),
            form.get(OLD_GUESSES_FIELD),
            form.get(NEW_GUESS_FIELD),
        ) else {
            warn!("submission is missing hidden fields");
            return Page::start(MALFORMED);
        };

        if raw_target.trim().is_empty() {
            return Page::start(MISSING_TARGET);
        }
        if raw_guess.trim().is_empty() {
            return Page::start(MISSING_GUESS);
        }

        let (target, history) = match self.restore(raw_target, raw_history) {
            Ok(state) => state,
            Err(e) if e.is_tampered() => {
                warn!(error = %e, "tampered game state");
                return Page::start(TAMPERED);
            }
            Err(e) => return invalid_input(&e),
        };

        if !form.get(MESSAGE_FIELD).unwrap_or_default().trim().is_empty() {
            warn!("hidden message field was modified");
            return Page::start(MALFORMED);
        }

        self.play(&target, history, raw_guess)
            .unwrap_or_else(|e| invalid_input(&e))
    }

    fn restore(
        &self,
        raw_target: &str,
        raw_history: &str,
    ) -> Result<(Word, Vec<Word>), GameError> {
        let target = self.evaluator.normalize(raw_target, TARGET_FIELD)?;
        let history = self.evaluator.parse_history(raw_history)?;
        Ok((target, history))
    }

    fn play(
        &self,
        target: &Word,
        mut history: Vec<Word>,
        raw_guess: &str,
    ) -> Result<Page, GameError> {
        match self.evaluator.normalize(raw_guess, NEW_GUESS_FIELD) {
            Ok(guess) => {
                history.push(guess);
                let evaluation = self.evaluator.evaluate(target, &history)?;
                debug!(
                    attempt = history.len(),
                    status = ?evaluation.status,
                    "guess evaluated"
                );
                Ok(Page::game(evaluation))
            }
            Err(e) => {
                debug!(error = %e, "rejected guess");
                let evaluation = self.evaluator.evaluate(target, &history)?;
                Ok(Page {
                    screen: Screen::Game(evaluation),
                    message: invalid_input_message(&e),
                })
            }
        }
    }
}

fn invalid_input_message(error: &GameError) -> String {
    format!("Error invalid: Invalid input: {}", reason(error))
}

fn invalid_input(error: &GameError) -> Page {
    Page::start(invalid_input_message(error))
}

/// User-facing part of an error, without the field prefix
fn reason(error: &GameError) -> String {
    match error {
        GameError::InvalidWord { field, reason } => format!("{reason} (in {field})"),
        other => other.to_string(),
    }
}
