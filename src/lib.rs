//! # Reversi Minimax
//!
//! An Othello/Reversi engine with pluggable agents: a methodical first-move
//! player, a uniform random player, and a depth-limited minimax player with
//! two board heuristics.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, signs, immutable state transitions
//! - [`ai`] — Agent trait, agent factory, minimax search and heuristics
//! - [`session`] — Two-player game driver surface: turns, history, summaries
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
