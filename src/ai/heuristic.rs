use std::fmt;
use std::str::FromStr;

use crate::game::{Board, Cell, GameState, Sign};

/// The color every evaluation scores for. Minimax maximizes when this sign
/// is to move and minimizes otherwise.
pub const PRIMARY: Sign = Sign::Black;

/// Board evaluation functions used at the minimax frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Primary disk count.
    H1,
    /// Corner control plus an opening-phase "flip as few as possible" term.
    H2,
}

impl Heuristic {
    /// Score `state` for the primary color.
    ///
    /// `previous` is the state recorded one ply earlier, if any. Only H2
    /// reads it.
    pub fn evaluate(self, state: &GameState, previous: Option<&GameState>) -> i64 {
        match self {
            Heuristic::H1 => disk_count(state.board()),
            Heuristic::H2 => corners_and_tempo(state, previous),
        }
    }
}

fn disk_count(board: &Board) -> i64 {
    board.disks(PRIMARY) as i64
}

/// Each corner is worth `size` to whoever holds it. While the ply counter is
/// below half the cell count and a previous state is known, the score rewards
/// gaining few disks this ply; otherwise it falls back to the disk count.
fn corners_and_tempo(state: &GameState, previous: Option<&GameState>) -> i64 {
    let board = state.board();
    let size = board.size() as i64;
    let cells = size * size;
    let opening_plies = board.size() * board.size() / 2;

    let primary = PRIMARY.to_cell();
    let mut score: i64 = board
        .corners()
        .iter()
        .map(|&corner| match corner {
            Cell::Empty => 0,
            c if c == primary => size,
            _ => -size,
        })
        .sum();

    match previous {
        Some(prev) if state.ply() < opening_plies => {
            let gained = disk_count(board) - disk_count(prev.board());
            score += cells - gained;
        }
        _ => score += disk_count(board),
    }

    score
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H1" | "h1" => Ok(Heuristic::H1),
            "H2" | "h2" => Ok(Heuristic::H2),
            other => Err(format!("unknown heuristic '{other}' (expected H1 or H2)")),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::H1 => f.write_str("H1"),
            Heuristic::H2 => f.write_str("H2"),
        }
    }
}
