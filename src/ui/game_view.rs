use crate::game::{Color as DiscColor, ColorCounts, GameOutcome, GamePhase, GameSnapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(
    frame: &mut Frame,
    snapshot: &GameSnapshot,
    message: &Option<String>,
    game_mode: &str,
    show_legal_moves: bool,
) {
    let board_height = u16::try_from(snapshot.board.height() + 3).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, game_mode, chunks[0]);
    render_board(frame, snapshot, show_legal_moves, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, snapshot: &GameSnapshot, game_mode: &str, area: Rect) {
    let player = snapshot.active_player;
    let color = match player.color {
        DiscColor::Black => Color::Red,
        DiscColor::White => Color::White,
    };
    let score = format!(
        "Black: {}  White: {}",
        snapshot.counts.black, snapshot.counts.white
    );

    let status = match snapshot.phase {
        GamePhase::Finished(_) => format!("Game Over  |  {}  |  {}", score, game_mode),
        _ => format!(
            "Turn: {} ({})  |  {}  |  {}",
            player.color.name(),
            if player.is_human { "human" } else { "CPU" },
            score,
            game_mode
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Reversi"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, snapshot: &GameSnapshot, show_legal_moves: bool, area: Rect) {
    let lines = board_widget::board_lines(snapshot, show_legal_moves);
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Choose move  |  Enter: Place  |  Esc/Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Final score line printed after the match.
pub fn result_line(counts: &ColorCounts) -> String {
    format!("Black: {}, White: {}", counts.black, counts.white)
}

pub fn outcome_line(outcome: Option<GameOutcome>) -> String {
    match outcome {
        Some(GameOutcome::Winner(color)) => format!("{} wins!", color.name()),
        Some(GameOutcome::Draw) => "It's a draw!".to_string(),
        None => "Game abandoned.".to_string(),
    }
}
