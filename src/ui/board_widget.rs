use crate::game::{GameSnapshot, Occupant};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Style for a disc or empty square.
fn occupant_style(occupant: Occupant) -> Style {
    match occupant {
        Occupant::Empty => Style::default().fg(Color::DarkGray),
        Occupant::Black => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Occupant::White => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

/// Bordered board with column letters and row numbers. The highlighted
/// candidate shows in the mover's symbol; other legal moves get a marker
/// when `show_legal_moves` is set.
pub fn board_lines(snapshot: &GameSnapshot, show_legal_moves: bool) -> Vec<Line<'static>> {
    let board = &snapshot.board;
    let width = board.width();
    let highlight = snapshot.highlight.as_ref();
    let mut lines = Vec::with_capacity(board.height() + 3);

    let mut header = vec![Span::raw("    ")];
    for x in 0..width {
        let letter = u8::try_from(x)
            .ok()
            .filter(|&x| x < 26)
            .map_or(' ', |x| char::from(b'a' + x));
        header.push(Span::raw(format!(" {letter} ")));
    }
    header.push(Span::raw(" "));
    lines.push(Line::from(header));

    let rule = "═".repeat(3 * width + 1);
    lines.push(Line::from(format!("   ╔{rule}╗")));

    for y in 0..board.height() {
        let mut spans = vec![Span::raw(format!("{:>2} ║", y + 1))];
        for x in 0..width {
            let shown = board.display_occupant(x, y, highlight);
            let span = if highlight.is_some_and(|cell| cell.is_at(x, y)) {
                Span::styled(
                    format!("[{}]", shown.symbol()),
                    occupant_style(shown)
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                )
            } else if show_legal_moves && snapshot.legal_moves.iter().any(|c| c.is_at(x, y)) {
                Span::styled(" + ", Style::default().fg(Color::Green))
            } else {
                Span::styled(format!(" {} ", shown.symbol()), occupant_style(shown))
            };
            spans.push(span);
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("   ╚{rule}╝")));
    lines
}
