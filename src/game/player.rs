use super::cell::Occupant;

/// A side's disc color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get the other color
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Convert color to the occupant it places on the board
    pub fn to_occupant(self) -> Occupant {
        match self {
            Color::Black => Occupant::Black,
            Color::White => Occupant::White,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// One participant in a match. Fixed for the match lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub is_human: bool,
    pub color: Color,
}

impl Player {
    pub fn new(is_human: bool, color: Color) -> Self {
        Player { is_human, color }
    }

    pub fn human(color: Color) -> Self {
        Player::new(true, color)
    }

    pub fn cpu(color: Color) -> Self {
        Player::new(false, color)
    }
}
