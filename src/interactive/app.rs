//! TUI application state and logic

use crate::core::Word;
use crate::game::{Evaluation, Evaluator, GameStatus};
use crate::session::{NEW_GUESS_FIELD, TARGET_FIELD};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub evaluator: Evaluator,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub target: Option<Word>,
    pub history: Vec<Word>,
    pub evaluation: Option<Evaluation>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Entering the hidden target
    Target,
    /// Entering guesses
    Guess,
    /// Game won or lost, waiting for a new game
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 0 is a first-guess win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn new(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            input_mode: InputMode::Target,
            input_buffer: String::new(),
            target: None,
            history: Vec::new(),
            evaluation: None,
            messages: vec![Message {
                text: "Welcome to Wordish! Enter a target word to hide.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(evaluator.rules().max_attempts()),
            should_quit: false,
        }
    }

    /// Validate the buffered target and open an empty board
    pub fn submit_target(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        let opened = self
            .evaluator
            .normalize(&raw, TARGET_FIELD)
            .and_then(|target| {
                let evaluation = self.evaluator.evaluate(&target, &[])?;
                Ok((target, evaluation))
            });

        match opened {
            Ok((target, evaluation)) => {
                self.add_message(&evaluation.message(), MessageStyle::Info);
                self.target = Some(target);
                self.history.clear();
                self.evaluation = Some(evaluation);
                self.input_mode = InputMode::Guess;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Validate the buffered guess and re-evaluate the game
    pub fn submit_guess(&mut self) {
        let Some(target) = self.target.clone() else {
            self.input_mode = InputMode::Target;
            return;
        };

        let raw = std::mem::take(&mut self.input_buffer);
        let guess = match self.evaluator.normalize(&raw, NEW_GUESS_FIELD) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.history.push(guess);
        match self.evaluator.evaluate(&target, &self.history) {
            Ok(evaluation) => {
                debug!(
                    attempt = self.history.len(),
                    status = ?evaluation.status,
                    "guess evaluated"
                );
                let style = match evaluation.status {
                    GameStatus::Won => MessageStyle::Success,
                    GameStatus::Lost => MessageStyle::Error,
                    GameStatus::NotStarted | GameStatus::InProgress => MessageStyle::Info,
                };
                self.add_message(&evaluation.message(), style);
                if evaluation.status.is_over() {
                    self.record_result(evaluation.status);
                    self.input_mode = InputMode::GameOver;
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                self.evaluation = Some(evaluation);
            }
            Err(e) => {
                self.history.pop();
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn record_result(&mut self, status: GameStatus) {
        self.stats.total_games += 1;
        if status == GameStatus::Won {
            self.stats.games_won += 1;
            if let Some(slot) = self
                .stats
                .guess_distribution
                .get_mut(self.history.len().saturating_sub(1))
            {
                *slot += 1;
            }
        }
    }

    pub fn new_game(&mut self) {
        self.target = None;
        self.history.clear();
        self.evaluation = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Target;
        self.add_message("New game! Enter a target word.", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        let Some(target) = self.target.clone() else {
            return;
        };
        if self.history.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }
        match self.evaluator.evaluate(&target, &self.history) {
            Ok(evaluation) => {
                self.evaluation = Some(evaluation);
                self.add_message("Undone!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let word_length = self.evaluator.rules().word_length();
        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Target | InputMode::Guess => match key.code {
                KeyCode::Esc => self.new_game(),
                KeyCode::Char(c) if c.is_alphabetic() => {
                    if self.input_buffer.chars().count() < word_length {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    if self.input_buffer.pop().is_none() && self.input_mode == InputMode::Guess {
                        self.undo_last();
                    }
                }
                KeyCode::Enter if self.input_mode == InputMode::Target => self.submit_target(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn target_then_win() {
        let mut app = App::new(Evaluator::default());
        type_word(&mut app, "slate");
        assert_eq!(app.input_mode, InputMode::Guess);

        type_word(&mut app, "crane");
        assert_eq!(app.history.len(), 1);
        type_word(&mut app, "slate");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(
            app.evaluation.as_ref().map(|e| e.status),
            Some(GameStatus::Won)
        );
    }

    #[test]
    fn short_target_is_rejected() {
        let mut app = App::new(Evaluator::default());
        type_word(&mut app, "abc");
        assert_eq!(app.input_mode, InputMode::Target);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn input_is_capped_at_word_length() {
        let mut app = App::new(Evaluator::default());
        for c in "abcdefgh".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "ABCDE");
    }

    #[test]
    fn losing_records_game() {
        let mut app = App::new(Evaluator::new(Rules::new(3, 2).unwrap()));
        type_word(&mut app, "cat");
        type_word(&mut app, "act");
        type_word(&mut app, "tac");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn backspace_on_empty_input_undoes() {
        let mut app = App::new(Evaluator::default());
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Backspace);

        assert!(app.history.is_empty());
        assert_eq!(
            app.evaluation.as_ref().map(|e| e.status),
            Some(GameStatus::NotStarted)
        );
    }

    #[test]
    fn new_game_from_game_over() {
        let mut app = App::new(Evaluator::default());
        type_word(&mut app, "slate");
        type_word(&mut app, "slate");
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Target);
        assert!(app.target.is_none());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = App::new(Evaluator::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
