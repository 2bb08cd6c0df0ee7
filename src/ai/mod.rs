mod agent;
mod heuristic;
mod methodical;
mod minimax;
mod random;

pub use agent::{Agent, AgentKind};
pub use heuristic::{Heuristic, PRIMARY};
pub use methodical::MethodicalAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
