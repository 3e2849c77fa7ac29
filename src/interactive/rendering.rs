//! TUI rendering with ratatui
//!
//! Board, messages and statistics for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Verdict;
use crate::game::{Cell, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDISH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile style for a cell
fn cell_style(cell: Cell) -> Style {
    let bg = match cell.verdict() {
        Some(Verdict::Correct) => Color::Green,
        Some(Verdict::Misplaced) => Color::Yellow,
        Some(Verdict::Wrong) => Color::DarkGray,
        None => return Style::default().fg(Color::DarkGray),
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.evaluator.rules();
    let lines: Vec<Line> = if let Some(evaluation) = &app.evaluation {
        evaluation
            .board
            .rows()
            .iter()
            .flat_map(|row| {
                let tiles: Vec<Span> = row
                    .cells()
                    .iter()
                    .flat_map(|&cell| {
                        let letter = cell.letter().unwrap_or('·');
                        [
                            Span::styled(format!(" {letter} "), cell_style(cell)),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                [Line::from(tiles), Line::from("")]
            })
            .collect()
    } else {
        let blank = " · ".repeat(rules.word_length());
        (0..rules.max_attempts())
            .flat_map(|_| [Line::from(blank.clone()), Line::from("")])
            .collect()
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut lines = vec![Line::from(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = if most == 0 { 0 } else { count * 16 / most };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let masked;
    let (title, content, color) = match app.input_mode {
        InputMode::Target => {
            masked = "*".repeat(app.input_buffer.chars().count());
            (" Enter Target (hidden) ", masked.as_str(), Color::Cyan)
        }
        InputMode::Guess => (" Enter Guess ", app.input_buffer.as_str(), Color::Yellow),
        InputMode::GameOver => {
            let won = app
                .evaluation
                .as_ref()
                .is_some_and(|e| e.status == GameStatus::Won);
            if won {
                (" 🎉 SOLVED! 🎉 ", "", Color::Green)
            } else {
                (" Game Over ", "", Color::Red)
            }
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.evaluator.rules();
    let help_text = match app.input_mode {
        InputMode::GameOver => "n: New Game | q/Esc: Quit".to_string(),
        InputMode::Target | InputMode::Guess => format!(
            "{} letters, {} attempts | Enter: Submit | Backspace: Undo | Esc: New Game | Ctrl-C: Quit",
            rules.word_length(),
            rules.max_attempts()
        ),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
