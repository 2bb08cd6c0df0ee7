use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::heuristic::Heuristic;
use super::methodical::MethodicalAgent;
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;
use crate::error::GameError;
use crate::game::{Action, GameState, LegalActions};

/// Universal interface for all decision-making agents.
pub trait Agent {
    /// Choose an action for the side to move. The returned sign is always
    /// `state.turn_sign()`.
    ///
    /// Fails with [`GameError::PreconditionFailed`] when the state has no
    /// legal action; callers check `game_over()` first.
    fn get_action(&mut self, state: &GameState) -> Result<Action, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Rescale the search depth. Agents that do not search ignore it.
    fn set_depth(&mut self, _depth: usize) {}
}

/// The closed set of agents a player can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    #[default]
    Methodical,
    Random,
    H1,
    H2,
}

impl AgentKind {
    /// Build the agent. `depth` only applies to minimax kinds; `seed` only to
    /// the random agent.
    pub fn build(self, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Methodical => Box::new(MethodicalAgent),
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentKind::H1 => Box::new(MinimaxAgent::new(Heuristic::H1, depth)),
            AgentKind::H2 => Box::new(MinimaxAgent::new(Heuristic::H2, depth)),
        }
    }
}

impl From<Heuristic> for AgentKind {
    fn from(heuristic: Heuristic) -> Self {
        match heuristic {
            Heuristic::H1 => AgentKind::H1,
            Heuristic::H2 => AgentKind::H2,
        }
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "methodical" => Ok(AgentKind::Methodical),
            "r" | "random" => Ok(AgentKind::Random),
            "h1" => Ok(AgentKind::H1),
            "h2" => Ok(AgentKind::H2),
            other => Err(format!(
                "unknown agent '{other}' (expected methodical, random, H1 or H2)"
            )),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Methodical => "methodical",
            AgentKind::Random => "random",
            AgentKind::H1 => "H1",
            AgentKind::H2 => "H2",
        };
        f.write_str(name)
    }
}

/// Legal actions of `state`, or a precondition failure if there are none.
pub(crate) fn require_legal_actions(state: &GameState) -> Result<LegalActions, GameError> {
    let actions = state.legal_actions();
    if actions.is_empty() {
        return Err(GameError::PreconditionFailed(format!(
            "no legal actions for {} at ply {}",
            state.turn_sign().name(),
            state.ply()
        )));
    }
    Ok(actions)
}
