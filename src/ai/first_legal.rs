use crate::game::{Board, Cell};

use super::agent::Agent;

/// Stand-in CPU: always plays the first legal move in board scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegalAgent;

impl FirstLegalAgent {
    pub fn new() -> Self {
        FirstLegalAgent
    }
}

impl Agent for FirstLegalAgent {
    fn select_move(&mut self, _board: &Board, legal_moves: &[Cell]) -> Option<Cell> {
        legal_moves.first().copied()
    }

    fn name(&self) -> &str {
        "First Legal"
    }
}
