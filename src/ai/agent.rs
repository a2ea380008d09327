use crate::game::{Board, Cell};

/// Universal interface for computer-controlled players.
pub trait Agent {
    /// Pick one of `legal_moves` for the side to move. `None` only when
    /// `legal_moves` is empty.
    fn select_move(&mut self, board: &Board, legal_moves: &[Cell]) -> Option<Cell>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
