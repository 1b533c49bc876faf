//! Full matches between automated players, with records and replay.
//!
//! ## Key Types
//!
//! - `MatchRunner`: Plays a match from shuffle to result
//! - `MatchRecord`: Everything needed to reproduce a match
//! - `replay`: Rebuilds a match's final state from its record

pub mod record;
pub mod runner;

pub use record::{FinishReason, MatchRecord, Redraw};
pub use runner::{replay, MatchOutcome, MatchRunner};
