//! Move generation and automated players.

pub mod enumerate;
pub mod policy;

pub use enumerate::{enumerate_board_moves, enumerate_game_moves};
pub use policy::{DiscardPlayer, GreedyPlayer, Player, RandomPlayer};
