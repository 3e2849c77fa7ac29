//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI. State is round-tripped through the session
//! adapter every turn, exactly as a stateless front end would.

use super::turn::{run_guess, run_start};
use crate::output::print_page;
use crate::session::{Page, Session};
use std::io::{self, Write};
use tracing::debug;

/// Run the simple interactive CLI mode for `target`
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the target is not
/// a valid word.
pub fn run_simple(session: &Session, target: &str) -> Result<(), String> {
    let opening = run_start(session, target);
    print_page(&opening);
    let Some(start) = opening.evaluation() else {
        return Err(opening.message.clone());
    };

    println!("\nType a guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let target = start.target.text().to_string();
    let mut old_guesses = String::new();

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                old_guesses.clear();
                print_page(&run_start(session, &target));
                println!("\n🔄 New game started!\n");
            }
            "undo" | "u" => {
                if old_guesses.is_empty() {
                    println!("Nothing to undo!\n");
                    continue;
                }
                old_guesses = match old_guesses.rsplit_once(',') {
                    Some((rest, _)) => rest.to_string(),
                    None => String::new(),
                };
                print_page(&replay(session, &target, &old_guesses));
                println!("✓ Undone!\n");
            }
            _ => {
                let page = run_guess(session, &target, &old_guesses, &input);
                if let Some(evaluation) = page.evaluation() {
                    old_guesses = evaluation.old_guesses();
                    debug!(status = ?evaluation.status, "turn played");
                }
                print_page(&page);
                println!();
            }
        }
    }
}

/// Redraw the board for `old_guesses` without adding a guess
fn replay(session: &Session, target: &str, old_guesses: &str) -> Page {
    let mut guesses: Vec<&str> = old_guesses.split(',').filter(|g| !g.is_empty()).collect();
    match guesses.pop() {
        Some(last) => run_guess(session, target, &guesses.join(","), last),
        None => run_start(session, target),
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
