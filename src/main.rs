use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use reversi_minimax::ai::{AgentKind, Heuristic};
use reversi_minimax::config::GameConfig;
use reversi_minimax::game::{GameOutcome, Sign};
use reversi_minimax::session::Game;

/// Play a game of Reversi between two agents.
#[derive(Parser)]
#[command(name = "reversi", about = "Reversi game options")]
struct Cli {
    /// Print the board after each of the first N turns
    #[arg(short = 'p', default_value_t = 0)]
    play_turn: usize,

    /// Seconds to pause between turns
    #[arg(short = 't')]
    pause_time: Option<u64>,

    /// When the board holds N disks, print every legal transition and stop
    #[arg(long)]
    display_all_actions: Option<usize>,

    /// Both players play methodically; summarise the first N moves
    #[arg(long, value_name = "N")]
    methodical: Option<usize>,

    /// Both players play randomly; summarise the first N moves
    #[arg(long, value_name = "N", conflicts_with = "methodical")]
    random: Option<usize>,

    /// Evaluation function for player 1 (and player 2 if no second is given)
    first_function: Option<Heuristic>,

    /// Evaluation function for player 2
    second_function: Option<Heuristic>,

    /// Minimax depth per player (values below 1 become 1)
    #[arg(long)]
    ahead: Option<usize>,

    /// Board edge length
    #[arg(long)]
    size: Option<usize>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(pause) = cli.pause_time {
        config.pause_secs = pause;
    }
    if let Some(ahead) = cli.ahead {
        config.depth = ahead.max(1);
    }

    let mut showcase = 0;
    if let Some(n) = cli.methodical {
        config.black = AgentKind::Methodical;
        config.white = AgentKind::Methodical;
        showcase = n;
    } else if let Some(n) = cli.random {
        config.black = AgentKind::Random;
        config.white = AgentKind::Random;
        showcase = n;
    } else if let Some(first) = cli.first_function {
        config.black = first.into();
        config.white = cli.second_function.unwrap_or(first).into();
    }
    config.validate().context("invalid game configuration")?;

    run_game(&config, cli.play_turn, cli.display_all_actions, showcase)
}

fn run_game(
    config: &GameConfig,
    mut play_turn: usize,
    display_all_actions: Option<usize>,
    mut showcase: usize,
) -> Result<()> {
    let mut game = Game::from_config(config);

    while !game.game_over() {
        let action = game.next_action()?;

        if display_all_actions == Some(game.state().board().total_disks()) {
            println!("{}", game.describe_all_actions()?);
            return Ok(());
        }

        if showcase > 0 {
            println!("{}", game.describe_transition(action)?);
            showcase -= 1;
        }

        if config.pause_secs > 0 {
            thread::sleep(Duration::from_secs(config.pause_secs));
        }

        if play_turn > 0 {
            println!("{}", game.state().board());
            println!();
            play_turn -= 1;
        }

        game.next_turn(action)?;
    }

    let board = game.state().board();
    let (black, white) = (board.black_disks(), board.white_disks());
    println!("Game ended");
    println!("{board}");
    match game.outcome() {
        Some(GameOutcome::Winner(Sign::Black)) => {
            println!("Black player won with {black} black disks to {white} white disks")
        }
        Some(GameOutcome::Winner(Sign::White)) => {
            println!("White player won with {white} white disks to {black} black disks")
        }
        Some(GameOutcome::Draw) | None => println!("Draw with {black} disks each"),
    }

    Ok(())
}
