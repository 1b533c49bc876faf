//! Moves: what a player submits each round and what lands on the board.
//!
//! A [`PlayerMovement`] names a hand slot and an action. Once validated it
//! resolves to at most one [`CardPlacement`], the board-level record of a
//! card being painted at a position.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Rotation};
use crate::core::grid::Coord;
use crate::core::player::PlayerId;

/// What a player does with the chosen hand card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Place the card normally.
    Trivial,
    /// Place the card as a special attack, spending its cost.
    Special,
    /// Give up the round and gain one special point.
    Discard,
}

/// Where and how a card is laid down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementParams {
    pub rotation: Rotation,
    /// Top-left corner of the card's 8×8 footprint. May be negative.
    pub position: Coord,
}

/// One player's submission for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMovement {
    pub player: PlayerId,
    pub action: Action,
    /// Hand slot in `0..HAND_SIZE`.
    pub hand: usize,
    /// Required unless discarding.
    pub params: Option<PlacementParams>,
}

impl PlayerMovement {
    /// Place the card in `hand` normally.
    #[must_use]
    pub fn trivial(player: PlayerId, hand: usize, rotation: Rotation, position: Coord) -> Self {
        Self {
            player,
            action: Action::Trivial,
            hand,
            params: Some(PlacementParams { rotation, position }),
        }
    }

    /// Place the card in `hand` as a special attack.
    #[must_use]
    pub fn special(player: PlayerId, hand: usize, rotation: Rotation, position: Coord) -> Self {
        Self {
            player,
            action: Action::Special,
            hand,
            params: Some(PlacementParams { rotation, position }),
        }
    }

    /// Discard the card in `hand`.
    #[must_use]
    pub fn discard(player: PlayerId, hand: usize) -> Self {
        Self {
            player,
            action: Action::Discard,
            hand,
            params: None,
        }
    }

    #[must_use]
    pub fn is_discard(&self) -> bool {
        self.action == Action::Discard
    }
}

impl std::fmt::Display for PlayerMovement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.action, self.params) {
            (Action::Discard, _) | (_, None) => {
                write!(f, "{} discards slot {}", self.player, self.hand)
            }
            (action, Some(p)) => write!(
                f,
                "{} plays slot {} {:?} at {} r{}",
                self.player,
                self.hand,
                action,
                p.position,
                p.rotation.steps()
            ),
        }
    }
}

/// A card painted onto the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardPlacement {
    pub player: PlayerId,
    pub card: CardId,
    pub rotation: Rotation,
    pub position: Coord,
}

impl CardPlacement {
    #[must_use]
    pub fn new(player: PlayerId, card: CardId, rotation: Rotation, position: Coord) -> Self {
        Self {
            player,
            card,
            rotation,
            position,
        }
    }
}
