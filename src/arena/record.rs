//! Match records.
//!
//! A record holds everything needed to reproduce a match without the
//! players or the RNG: the decks after the opening shuffle, every redraw
//! result, and every round's movement pair.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::player::{PlayerId, PlayerPair};
use crate::rules::PlayerMovement;
use crate::stages::StageId;

/// One opening-hand redraw: the player's cards in their new draw order
/// (hand first, then deck).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redraw {
    pub deck: Vec<CardId>,
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishReason {
    /// All rounds were played.
    Normal,
    /// A player conceded.
    GiveUp,
}

/// Complete history of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub stage: StageId,

    /// Player names, for display only.
    pub names: PlayerPair<String>,

    /// Decks as dealt, after the opening shuffle.
    pub decks: PlayerPair<Vec<CardId>>,

    /// Redraws taken by each player, in order.
    pub redraws: PlayerPair<Vec<Redraw>>,

    /// Movement pairs, one per round played.
    pub moves: Vec<[PlayerMovement; 2]>,

    /// `None` for a draw.
    pub winner: Option<PlayerId>,

    pub finish_reason: FinishReason,
}

impl MatchRecord {
    /// Number of rounds actually played.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.moves.len()
    }

    /// Movements made by one player, in round order.
    pub fn player_moves(&self, player: PlayerId) -> impl Iterator<Item = &PlayerMovement> {
        self.moves.iter().map(move |pair| &pair[player.index()])
    }
}
