use log::debug;

use super::agent::{require_legal_actions, Agent};
use crate::error::GameError;
use crate::game::{Action, GameState};

/// An agent that always plays the first legal action in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodicalAgent;

impl Agent for MethodicalAgent {
    fn get_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        let actions = require_legal_actions(state)?;
        let action = Action::at(actions[0], state.turn_sign());
        debug!("methodical: {:?} of {} candidates", action.position(), actions.len());
        Ok(action)
    }

    fn name(&self) -> &str {
        "Methodical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Sign;

    #[test]
    fn test_methodical_picks_first_action() {
        let mut agent = MethodicalAgent;
        let state = GameState::initial(8);
        let action = agent.get_action(&state).unwrap();
        assert_eq!(action, Action::new(2, 4, Sign::Black));
    }

    #[test]
    fn test_methodical_is_deterministic() {
        let mut agent = MethodicalAgent;
        let state = GameState::initial(8)
            .generate_successor(Action::new(5, 3, Sign::Black))
            .unwrap();
        let first = agent.get_action(&state).unwrap();
        let second = agent.get_action(&state).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.sign, Sign::White);
    }

    #[test]
    fn test_methodical_self_play_ends_within_board_cells() {
        let mut black = MethodicalAgent;
        let mut white = MethodicalAgent;
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
            assert!(plies <= 64, "self-play exceeded 64 plies");
        }

        assert!(state.game_over());
    }

    #[test]
    fn test_methodical_name() {
        assert_eq!(MethodicalAgent.name(), "Methodical");
    }
}
