//! # tableturf
//!
//! A deterministic rules engine for a two-player, simultaneous-turn,
//! territory-painting card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every state transition is a function of
//!    `(GameState, movements)`. Nothing is mutated in place and the engine
//!    never draws random numbers on its own; shuffles are injected.
//!
//! 2. **Shared Catalogs**: Cards and stages are built once, validated, and
//!    shared read-only (`Arc`) by every engine and game.
//!
//! 3. **Legality as Predicates**: Caller input is checked with boolean
//!    predicates. Broken invariants panic; bad data is a typed error.
//!
//! ## Architecture
//!
//! - **Grid**: Cards, stages and boards are all dense `i8` grids. The sign of
//!   a cell is its owner.
//!
//! - **Persistent Data Structures**: Decks use `im-rs` vectors so state
//!   copies for lookahead and replay stay cheap.
//!
//! ## Modules
//!
//! - `core`: Grid, cell values, players, RNG, configuration, errors
//! - `cards`: Card definitions, rotation, catalog
//! - `stages`: Stage layouts, catalog, grid-text codec
//! - `rules`: Board rules, round engine, deck rules
//! - `players`: Move enumeration and automated players
//! - `arena`: Match runner, records and replay

pub mod core;
pub mod cards;
pub mod stages;
pub mod rules;
pub mod players;
pub mod arena;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, Coord, EngineError, GameRng, Grid, GridTextError, MatchError,
    PlayerId, PlayerPair, RulesConfig, Shuffle, Space,
};

pub use crate::cards::{rotate, Card, CardCatalog, CardId, CardInfo, Rarity, Rotation};

pub use crate::stages::{parse_grid, print_grid, Stage, StageCatalog, StageId, StageInfo};

pub use crate::rules::{
    calibrate_deck, deck_total_area, get_board_state, is_board_move_valid, is_board_pos_charged,
    is_deck_valid, move_board, Action, BoardCount, BoardState, CardPlacement, Engine, GameResult,
    GameState, PlacementParams, PlayerMovement, PlayerState,
};

pub use crate::players::{
    enumerate_board_moves, enumerate_game_moves, DiscardPlayer, GreedyPlayer, Player,
    RandomPlayer,
};

pub use crate::arena::{replay, FinishReason, MatchOutcome, MatchRecord, MatchRunner, Redraw};
