use log::debug;

use super::agent::{require_legal_actions, Agent};
use super::heuristic::{Heuristic, PRIMARY};
use crate::error::GameError;
use crate::game::{Action, GameState, Position, PLAYER_COUNT};

/// Full-width depth-limited minimax over the legal actions, scored for the
/// primary color.
///
/// A configured depth of `d` searches `d * PLAYER_COUNT` plies, so every
/// level looks one move ahead for each player. There is no pruning.
pub struct MinimaxAgent {
    heuristic: Heuristic,
    depth: usize,
    name: String,
}

impl MinimaxAgent {
    /// `depth` below 1 is raised to 1.
    pub fn new(heuristic: Heuristic, depth: usize) -> Self {
        MinimaxAgent {
            heuristic,
            depth: depth.max(1),
            name: format!("Minimax({heuristic})"),
        }
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of plies searched per decision
    pub fn search_depth(&self) -> usize {
        self.depth * PLAYER_COUNT
    }

    /// Returns the minimax value of `state` and the move that reaches it.
    ///
    /// Ties keep the earliest move in legal-action order.
    pub fn minimax(&self, state: &GameState, depth: usize) -> (i64, Option<Position>) {
        if depth == 0 || state.game_over() {
            // Search nodes carry no recorded predecessor.
            return (self.heuristic.evaluate(state, None), None);
        }

        let sign = state.turn_sign();
        let maximizing = sign == PRIMARY;
        let mut best_value = if maximizing { i64::MIN } else { i64::MAX };
        let mut best_move = None;

        for position in state.legal_actions() {
            let child = match state.generate_successor(Action::at(position, sign)) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let (value, _) = self.minimax(&child, depth - 1);
            let better = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if better {
                best_value = value;
                best_move = Some(position);
            }
        }

        (best_value, best_move)
    }
}

impl Agent for MinimaxAgent {
    fn get_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        let candidates = require_legal_actions(state)?;
        let sign = state.turn_sign();

        let (value, best) = self.minimax(state, self.search_depth());
        let position = best.unwrap_or(candidates[0]);
        debug!(
            "{}: {:?} valued {} over {} candidates at {} plies",
            self.name,
            position,
            value,
            candidates.len(),
            self.search_depth()
        );

        Ok(Action::at(position, sign))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_depth(&mut self, depth: usize) {
        self.depth = depth.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MethodicalAgent, RandomAgent};
    use crate::game::{Board, Sign};

    #[test]
    fn search_depth_counts_both_players() {
        let agent = MinimaxAgent::new(Heuristic::H1, 3);
        assert_eq!(agent.search_depth(), 6);
    }

    #[test]
    fn depth_is_at_least_one() {
        let mut agent = MinimaxAgent::new(Heuristic::H2, 0);
        assert_eq!(agent.depth(), 1);
        agent.set_depth(4);
        assert_eq!(agent.depth(), 4);
        agent.set_depth(0);
        assert_eq!(agent.depth(), 1);
    }

    #[test]
    fn zero_depth_returns_heuristic_value() {
        let agent = MinimaxAgent::new(Heuristic::H1, 1);
        let state = GameState::initial(8);
        assert_eq!(agent.minimax(&state, 0), (2, None));
    }

    #[test]
    fn symmetric_opening_keeps_first_move() {
        // All four openings are equivalent, so the strict comparison keeps (2,4)
        let mut agent = MinimaxAgent::new(Heuristic::H1, 1);
        let state = GameState::initial(8);
        let (value, best) = agent.minimax(&state, agent.search_depth());
        assert_eq!(value, 3);
        assert_eq!(best, Some((2, 4)));
        assert_eq!(
            agent.get_action(&state).unwrap(),
            Action::new(2, 4, Sign::Black)
        );
    }

    #[test]
    fn takes_unique_greediest_move() {
        // -0-X
        // X0X0
        // X0XX
        // X0-X
        // (0,0) and (0,2) leave black 10 disks, (3,2) leaves 11; white has
        // no reply after any of them.
        let mut board = Board::new(4);
        for (row, col, sign) in [
            (0, 1, Sign::White),
            (0, 3, Sign::Black),
            (1, 0, Sign::Black),
            (1, 1, Sign::White),
            (1, 2, Sign::Black),
            (1, 3, Sign::White),
            (2, 0, Sign::Black),
            (2, 3, Sign::Black),
            (3, 0, Sign::Black),
            (3, 1, Sign::White),
            (3, 3, Sign::Black),
        ] {
            board.set_disk(row, col, sign);
        }
        let state = GameState::new(board, [Sign::Black, Sign::White], 0, 1);
        assert_eq!(state.legal_actions(), vec![(0, 0), (0, 2), (3, 2)]);

        let mut agent = MinimaxAgent::new(Heuristic::H1, 1);
        assert_eq!(agent.minimax(&state, agent.search_depth()), (11, Some((3, 2))));
        let action = agent.get_action(&state).unwrap();
        assert_eq!(action, Action::new(3, 2, Sign::Black));
    }

    #[test]
    fn white_minimizes_primary_count() {
        let state = GameState::initial(8)
            .generate_successor(Action::new(2, 4, Sign::Black))
            .unwrap();
        let mut agent = MinimaxAgent::new(Heuristic::H1, 1);
        let action = agent.get_action(&state).unwrap();
        assert_eq!(action.sign, Sign::White);

        let (value, best) = agent.minimax(&state, agent.search_depth());
        assert_eq!(value, 5);
        assert_eq!(best, Some((2, 5)));
        assert_eq!(Some(action.position()), best);

        // No white reply does better for white than the chosen one
        for position in state.legal_actions() {
            let child = state
                .generate_successor(Action::at(position, Sign::White))
                .unwrap();
            let (child_value, _) = agent.minimax(&child, agent.search_depth() - 1);
            assert!(child_value >= value);
        }
    }

    #[test]
    fn terminal_state_is_evaluated_directly() {
        let mut board = Board::new(4);
        board.set_disk(1, 1, Sign::White);
        board.set_disk(2, 2, Sign::White);
        let state = GameState::new(board, [Sign::Black, Sign::White], 0, 1);
        let agent = MinimaxAgent::new(Heuristic::H2, 2);
        assert_eq!(agent.minimax(&state, agent.search_depth()), (0, None));
    }

    #[test]
    fn minimax_beats_methodical_on_small_board() {
        let mut minimax = MinimaxAgent::new(Heuristic::H1, 1);
        let mut methodical = MethodicalAgent;
        let mut state = GameState::initial(6);

        while !state.game_over() {
            let action = if state.turn_sign() == Sign::Black {
                minimax.get_action(&state).unwrap()
            } else {
                methodical.get_action(&state).unwrap()
            };
            state = state.generate_successor(action).unwrap();
        }

        assert!(state.board().black_disks() > state.board().white_disks());
    }

    #[test]
    fn full_game_against_random_completes() {
        let mut black = MinimaxAgent::new(Heuristic::H2, 1);
        let mut white = RandomAgent::with_seed(9);
        let mut state = GameState::initial(8);
        let mut plies = 0;

        while !state.game_over() {
            let action = if state.player_turn() == 1 {
                black.get_action(&state).unwrap()
            } else {
                white.get_action(&state).unwrap()
            };
            state = state.generate_successor(action).unwrap();
            plies += 1;
        }

        assert!(plies <= 60);
        assert!(state.outcome().is_some());
    }

    #[test]
    fn name_includes_heuristic() {
        assert_eq!(MinimaxAgent::new(Heuristic::H1, 1).name(), "Minimax(H1)");
        assert_eq!(MinimaxAgent::new(Heuristic::H2, 1).heuristic(), Heuristic::H2);
    }
}
