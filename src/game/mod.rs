//! Core Othello game logic: board representation, disk signs, and the game
//! state machine with immutable transitions.

mod board;
mod sign;
mod state;

pub use board::{Board, Cell, DEFAULT_SIZE, DIRECTIONS};
pub use sign::{Sign, PLAYER_COUNT};
pub use state::{Action, GameOutcome, GameState, LegalActions, Position};
