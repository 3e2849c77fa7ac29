//! Interactive terminal UI
//!
//! One player hides a target, another guesses it on a colored board.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
