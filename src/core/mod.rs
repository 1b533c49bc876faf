//! Core types: grid, cell values, players, RNG, configuration, errors.
//!
//! Everything here is game-data agnostic. Cards, stages and rules build on
//! these types.

pub mod config;
pub mod error;
pub mod grid;
pub mod player;
pub mod rng;
pub mod space;

pub use config::{RulesConfig, CARD_SIZE, HAND_SIZE};
pub use error::{CatalogError, EngineError, GridTextError, MatchError};
pub use grid::{Coord, Grid};
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::{GameRng, Shuffle};
pub use space::Space;
