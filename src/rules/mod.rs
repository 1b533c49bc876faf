//! Game rules: board resolution, rounds, decks.
//!
//! ## Key Types
//!
//! - `Engine`: Bootstrap, legality gate and round transition
//! - `GameState`: Immutable snapshot of a match
//! - `BoardState`: Board grid plus derived counts
//! - `PlayerMovement`: A player's submission for one round
//! - `CardPlacement`: A card painted onto the board

pub mod board;
pub mod deck;
pub mod engine;
pub mod movement;
pub mod state;

pub use board::{
    get_board_state, is_board_move_valid, is_board_pos_charged, move_board, BoardCount,
    BoardState,
};
pub use deck::{calibrate_deck, deck_total_area, is_deck_valid};
pub use engine::Engine;
pub use movement::{Action, CardPlacement, PlacementParams, PlayerMovement};
pub use state::{Batch, GameResult, GameState, PlayerState};
