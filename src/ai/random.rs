use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{require_legal_actions, Agent};
use crate::error::GameError;
use crate::game::{Action, GameState};

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        let actions = require_legal_actions(state)?;
        let idx = self.rng.random_range(0..actions.len());
        debug!("random: {:?} of {} candidates", actions[idx], actions.len());
        Ok(Action::at(actions[idx], state.turn_sign()))
    }

    fn name(&self) -> &str {
        "Random"
    }
}
