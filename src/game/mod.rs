//! Core Reversi logic: cells, direction vectors, the board rules engine,
//! players, and the turn state machine.

mod board;
mod cell;
mod player;
mod state;
mod vector;

pub use board::{Board, ColorCounts, DEFAULT_SIZE};
pub use cell::{Cell, Occupant};
pub use player::{Color, Player};
pub use state::{FinishReason, Game, GameOutcome, GamePhase, GameSnapshot};
pub use vector::{Vector, DIRECTIONS};
