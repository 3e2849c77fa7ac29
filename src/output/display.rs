//! Display functions for game pages

use super::formatters::{board_to_emoji, colored_cell};
use crate::game::{Board, Evaluation, GameStatus};
use crate::session::{OLD_GUESSES_FIELD, Page, Screen, TARGET_FIELD};
use colored::Colorize;

/// Print a board, one line per row
pub fn print_board(board: &Board) {
    for row in board.rows() {
        let tiles: Vec<String> = row
            .cells()
            .iter()
            .map(|&cell| colored_cell(cell).to_string())
            .collect();
        println!("  {}", tiles.join(" "));
    }
}

/// Print the status message with a color matching the outcome
pub fn print_status(evaluation: &Evaluation) {
    let message = evaluation.message();
    let styled = match evaluation.status {
        GameStatus::Won => format!("🎉 {message}").green().bold(),
        GameStatus::Lost => message.red().bold(),
        GameStatus::NotStarted | GameStatus::InProgress => message.bright_white(),
    };
    println!("\n{styled}");
}

/// Print a page returned by the session adapter
///
/// Game pages end with the hidden state the caller has to send back next turn.
pub fn print_page(page: &Page) {
    println!("\n{}", "─".repeat(40).cyan());
    match &page.screen {
        Screen::Start => {
            println!("{}", "WORDISH".bright_cyan().bold());
            println!("{}", "─".repeat(40).cyan());
            print_message(&page.message);
        }
        Screen::Game(evaluation) => {
            println!(
                "{}  attempt {}/{}",
                "WORDISH".bright_cyan().bold(),
                evaluation.history.len(),
                evaluation.board.rows().len()
            );
            println!("{}", "─".repeat(40).cyan());
            print_board(&evaluation.board);
            if page.message == evaluation.message() {
                print_status(evaluation);
            } else {
                print_message(&page.message);
            }
            if evaluation.status.is_over() {
                println!("\n{}", board_to_emoji(&evaluation.board));
            }
            println!();
            println!("{}: {}", TARGET_FIELD.bright_black(), evaluation.target);
            println!(
                "{}: {}",
                OLD_GUESSES_FIELD.bright_black(),
                evaluation.old_guesses()
            );
        }
    }
}

fn print_message(message: &str) {
    if message.starts_with("Error") {
        println!("{}", message.red());
    } else {
        println!("{}", message.bright_white());
    }
}
