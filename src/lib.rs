//! Wordish
//!
//! A stateless Wordle-style game engine. The caller owns the target and the list of
//! guesses; every turn they are validated, scored and turned into a board again.
//!
//! # Quick Start
//!
//! ```rust
//! use wordish::core::Rules;
//! use wordish::game::{Evaluator, GameStatus};
//!
//! let evaluator = Evaluator::new(Rules::STANDARD);
//! let target = evaluator.normalize("allow", "target").unwrap();
//! let history = evaluator.parse_history("LLAMA,ALLOW").unwrap();
//!
//! let evaluation = evaluator.evaluate(&target, &history).unwrap();
//! assert_eq!(evaluation.status, GameStatus::Won);
//! assert_eq!(evaluation.old_guesses(), "LLAMA,ALLOW");
//! ```

// Core domain types
pub mod core;

// Board and status evaluation
pub mod game;

// Transport-neutral turn handling
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
