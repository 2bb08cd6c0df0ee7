use log::trace;

use super::board::{Board, Cell, DEFAULT_SIZE};
use super::sign::{Sign, PLAYER_COUNT};
use crate::error::GameError;

/// A board cell as (row, col), 0-indexed from the top-left corner.
pub type Position = (usize, usize);

/// Legal placements in row-major order.
pub type LegalActions = Vec<Position>;

/// A placement of `sign` at (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub row: usize,
    pub col: usize,
    pub sign: Sign,
}

impl Action {
    pub fn new(row: usize, col: usize, sign: Sign) -> Self {
        Action { row, col, sign }
    }

    pub fn at(position: Position, sign: Sign) -> Self {
        Action::new(position.0, position.1, sign)
    }

    pub fn position(&self) -> Position {
        (self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Sign),
    Draw,
}

/// One ply of a game: the board plus whose turn it is.
///
/// States are never mutated after construction; every move produces a fresh
/// successor holding its own copy of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    signs: [Sign; PLAYER_COUNT],
    ply: usize,
    player_turn: usize,
}

impl GameState {
    /// Create the opening state: black is player 1 and moves first.
    pub fn initial(size: usize) -> Self {
        GameState::new(Board::new(size), [Sign::Black, Sign::White], 0, 1)
    }

    /// Assemble a state from its parts. `player_turn` is 1 or 2.
    pub fn new(board: Board, signs: [Sign; PLAYER_COUNT], ply: usize, player_turn: usize) -> Self {
        assert!(
            (1..=PLAYER_COUNT).contains(&player_turn),
            "player_turn must be 1 or 2, got {player_turn}"
        );
        GameState {
            board,
            signs,
            ply,
            player_turn,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ply counter, starting at 0 for the opening position
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// 1 or 2
    pub fn player_turn(&self) -> usize {
        self.player_turn
    }

    /// Sign registered for player `number` (1 or 2)
    pub fn player_sign(&self, number: usize) -> Sign {
        self.signs[number - 1]
    }

    /// Sign of the side to move
    pub fn turn_sign(&self) -> Sign {
        self.player_sign(self.player_turn)
    }

    /// Every empty, connected cell where the side to move would flip at least
    /// one disk, scanned in row-major order.
    pub fn legal_actions(&self) -> LegalActions {
        if self.board.empty_slots() == 0 {
            return LegalActions::new();
        }

        let size = self.board.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                self.board.get(row, col) == Cell::Empty
                    && self.board.connected(row, col)
                    && self.is_flip(row, col)
            })
            .collect()
    }

    /// Whether placing the active sign at (row, col) flips at least one disk.
    ///
    /// Plays the move on a copy and checks that the mover gained more than the
    /// one disk placed.
    pub fn is_flip(&self, row: usize, col: usize) -> bool {
        let sign = self.turn_sign();
        match self.generate_successor(Action::new(row, col, sign)) {
            Ok(next) => self.board.disks(sign) + 1 < next.board.disks(sign),
            Err(_) => false,
        }
    }

    /// Apply `action` to a copy of the board and hand the turn to the other player.
    ///
    /// The receiver is left untouched. Actions outside the board are rejected.
    pub fn generate_successor(&self, action: Action) -> Result<GameState, GameError> {
        let size = self.board.size();
        if action.row >= size || action.col >= size {
            return Err(GameError::InvalidArgument(format!(
                "action ({}, {}) is outside a {size}x{size} board",
                action.row, action.col
            )));
        }

        let mut board = self.board.copy_grid();
        board.set_disk_board(action.row, action.col, action.sign);
        let next_turn = (self.player_turn % PLAYER_COUNT) + 1;

        trace!(
            "ply {} -> {}: {} at ({}, {})",
            self.ply,
            self.ply + 1,
            action.sign,
            action.row,
            action.col
        );

        Ok(GameState {
            board,
            signs: self.signs,
            ply: self.ply + 1,
            player_turn: next_turn,
        })
    }

    /// True iff the side to move has no legal action. There is no passing:
    /// the game ends even if the other side could still move.
    pub fn game_over(&self) -> bool {
        self.legal_actions().is_empty()
    }

    /// Winner by final disk count, or `None` while the game is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over() {
            return None;
        }

        let (black, white) = (self.board.black_disks(), self.board.white_disks());
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Sign::Black),
            std::cmp::Ordering::Less => GameOutcome::Winner(Sign::White),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(DEFAULT_SIZE)
    }
}
