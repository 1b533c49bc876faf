//! Error types for data loading, engine bootstrap and match running.
//!
//! Only recoverable conditions are errors. Illegal moves are reported as
//! `false` by the legality predicates, and broken invariants (out-of-range
//! grid access, applying an illegal movement) panic.

use thiserror::Error;

use crate::cards::CardId;
use crate::stages::StageId;

/// Malformed grid text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridTextError {
    #[error("grid text contains no rows")]
    Empty,
    #[error("unknown grid character {ch:?} at line {line}")]
    UnknownChar { ch: char, line: usize },
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Catalog construction failure. No partial catalog is ever returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate card id {0}")]
    DuplicateCard(CardId),
    #[error("duplicate stage id {0}")]
    DuplicateStage(StageId),
    #[error("card id 0 is reserved")]
    ReservedCardId,
    #[error("card {id}: unknown rarity {rarity:?}")]
    UnknownRarity { id: CardId, rarity: String },
    #[error("card {id}: category must not be empty")]
    EmptyCategory { id: CardId },
    #[error("card {id}: expected 64 squares, found {found}")]
    SquareCount { id: CardId, found: usize },
    #[error("stage {id}: each player needs exactly one uncharged special square and no other ink")]
    StageStart { id: StageId },
    #[error("stage {id}: {source}")]
    StageLayout {
        id: StageId,
        #[source]
        source: GridTextError,
    },
}

/// Failure to bootstrap a game from caller-supplied ids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown stage {0}")]
    UnknownStage(StageId),
    #[error("unknown card {0}")]
    UnknownCard(CardId),
    #[error("deck for {player} has {found} cards, need at least {needed}")]
    DeckTooSmall {
        player: crate::core::PlayerId,
        found: usize,
        needed: usize,
    },
}

/// Failure while running or replaying a match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("illegal movement in round {round}: {movement}")]
    IllegalMove {
        round: u32,
        movement: crate::rules::PlayerMovement,
    },
    #[error("redraw for {player} does not reuse the player's cards")]
    BadRedraw { player: crate::core::PlayerId },
    #[error("{player} redrew {found} times, quota is {quota}")]
    RedrawQuota {
        player: crate::core::PlayerId,
        found: usize,
        quota: u32,
    },
    #[error("record continues after the match ended")]
    MatchOver,
}
