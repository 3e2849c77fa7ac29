//! One stateless turn per invocation
//!
//! The caller keeps the game state: each run prints the target and old guesses that must
//! be passed back with the next guess.

use crate::session::{
    Form, MESSAGE_FIELD, Method, NEW_GUESS_FIELD, OLD_GUESSES_FIELD, Page, Session, TARGET_FIELD,
};

/// Open a game for `target`
#[must_use]
pub fn run_start(session: &Session, target: &str) -> Page {
    let form = Form::from_pairs([(TARGET_FIELD, target)]);
    session.start(Method::Post, &form)
}

/// Submit `new_guess` on top of the serialized `old_guesses`
#[must_use]
pub fn run_guess(session: &Session, target: &str, old_guesses: &str, new_guess: &str) -> Page {
    let form = Form::from_pairs([
        (TARGET_FIELD, target),
        (OLD_GUESSES_FIELD, old_guesses),
        (NEW_GUESS_FIELD, new_guess),
        (MESSAGE_FIELD, ""),
    ]);
    session.submit(Method::Post, &form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::game::GameStatus;
    use crate::session::Screen;

    #[test]
    fn start_then_guess() {
        let session = Session::default();
        let page = run_start(&session, "slate");
        let evaluation = page.evaluation().unwrap();
        assert_eq!(evaluation.status, GameStatus::NotStarted);

        let page = run_guess(
            &session,
            evaluation.target.text(),
            &evaluation.old_guesses(),
            "crane",
        );
        assert_eq!(page.evaluation().unwrap().old_guesses(), "CRANE");
    }

    #[test]
    fn start_with_bad_target_stays_on_start() {
        let page = run_start(&Session::default(), "abc");
        assert_eq!(page.screen, Screen::Start);
    }

    #[test]
    fn short_board() {
        let session = Session::new(Rules::new(3, 2).unwrap());
        let page = run_guess(&session, "cat", "ACT", "tac");
        assert_eq!(page.evaluation().unwrap().status, GameStatus::Lost);
    }
}
