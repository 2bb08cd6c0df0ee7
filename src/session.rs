//! Driver-facing game session: two players bound to agents, the current
//! state, and the state one ply earlier.

use std::fmt::Write as _;

use log::{debug, info};

use crate::ai::{Agent, AgentKind, Heuristic};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Action, Board, GameOutcome, GameState, Sign, PLAYER_COUNT};

/// A sign bound to the agent that plays it.
pub struct Player {
    sign: Sign,
    kind: AgentKind,
    agent: Box<dyn Agent>,
}

impl Player {
    pub fn new(sign: Sign, kind: AgentKind, depth: usize, seed: Option<u64>) -> Self {
        Player {
            sign,
            kind,
            agent: kind.build(depth, seed),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    pub fn get_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        self.agent.get_action(state)
    }
}

/// A two-player game in progress.
pub struct Game {
    players: [Player; PLAYER_COUNT],
    state: GameState,
    previous: Option<GameState>,
}

impl Game {
    /// Player 1 plays black and moves first, player 2 plays white.
    ///
    /// With a seed, the white player's random source is offset by one so the
    /// two sides do not mirror each other.
    pub fn new(
        size: usize,
        black: AgentKind,
        white: AgentKind,
        depth: usize,
        seed: Option<u64>,
    ) -> Self {
        let players = [
            Player::new(Sign::Black, black, depth, seed),
            Player::new(Sign::White, white, depth, seed.map(|s| s.wrapping_add(1))),
        ];
        let signs = [players[0].sign(), players[1].sign()];
        let state = GameState::new(Board::new(size), signs, 0, 1);
        info!(
            "new {size}x{size} game: {} vs {}",
            players[0].agent_name(),
            players[1].agent_name()
        );

        Game {
            players,
            state,
            previous: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Game::new(
            config.board_size,
            config.black,
            config.white,
            config.depth,
            config.seed,
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// State one ply before the current one, once a move has been played
    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_ref()
    }

    /// Player 1 or 2
    pub fn player(&self, number: usize) -> &Player {
        &self.players[number - 1]
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Ask the side to move for its action.
    pub fn next_action(&mut self) -> Result<Action, GameError> {
        let turn = self.state.player_turn();
        self.players[turn - 1].get_action(&self.state)
    }

    /// Apply `action` and keep the replaced state as `previous()`.
    pub fn next_turn(&mut self, action: Action) -> Result<(), GameError> {
        let next = self.state.generate_successor(action)?;
        debug!(
            "ply {}: {} to ({}, {})",
            next.ply(),
            action.sign.name(),
            action.row,
            action.col
        );
        self.previous = Some(std::mem::replace(&mut self.state, next));
        Ok(())
    }

    /// Rescale every minimax player's search depth. Other agents ignore it.
    pub fn set_players_depth(&mut self, depth: usize) {
        for player in &mut self.players {
            player.agent.set_depth(depth);
        }
    }

    /// Score the current state with the previous one wired in.
    pub fn evaluate(&self, heuristic: Heuristic) -> i64 {
        heuristic.evaluate(&self.state, self.previous.as_ref())
    }

    /// Play until the side to move has no action.
    pub fn play_to_end(&mut self) -> Result<GameOutcome, GameError> {
        while !self.game_over() {
            let action = self.next_action()?;
            self.next_turn(action)?;
        }
        self.outcome().ok_or_else(|| {
            GameError::PreconditionFailed("finished game has no outcome".to_string())
        })
    }

    /// Winner by disk count once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Before/after summary of playing `action` from the current state.
    pub fn describe_transition(&self, action: Action) -> Result<String, GameError> {
        let next = self.state.generate_successor(action)?;
        let board = next.board();
        let (black, white) = (board.black_disks(), board.white_disks());
        let player_num = if action.sign == self.players[0].sign() { 1 } else { 2 };

        let mut out = String::new();
        let _ = writeln!(out, "State {}", self.state.ply());
        let _ = writeln!(out, "{}", self.state.board());
        let _ = writeln!(
            out,
            "State {}, Player {player_num} moved, Action: put {} on position ({}, {})",
            next.ply(),
            action.sign,
            action.row,
            action.col
        );
        let _ = writeln!(out, "{board}");
        let _ = write!(
            out,
            "Result - Player 1: {black} disks, Player 2: {white} disks, Total: {} disks",
            black + white
        );
        Ok(out)
    }

    /// Transition summaries for every legal action of the side to move.
    pub fn describe_all_actions(&self) -> Result<String, GameError> {
        let sign = self.state.turn_sign();
        let summaries = self
            .state
            .legal_actions()
            .into_iter()
            .map(|position| self.describe_transition(Action::at(position, sign)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(summaries.join("\n"))
    }
}
