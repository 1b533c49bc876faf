//! Match state.
//!
//! `GameState` is an immutable value: every transition in
//! [`Engine`](super::engine::Engine) returns a new state and leaves the
//! input untouched. The deck uses `im::Vector` so those copies share
//! structure.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::BoardState;
use super::movement::CardPlacement;
use crate::cards::CardId;
use crate::core::config::HAND_SIZE;
use crate::core::player::{PlayerId, PlayerPair};
use crate::stages::StageId;

/// One resolution batch: the placements painted by a single board update.
pub type Batch = SmallVec<[CardPlacement; 2]>;

/// Per-player match state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining draw pile, head first.
    pub deck: Vector<CardId>,

    /// Hand slots. A slot is `None` once the deck ran out before refilling it.
    pub hand: [Option<CardId>; HAND_SIZE],

    /// Cells the player owns on the board.
    pub area: u32,

    /// Special meter.
    pub special: u32,
}

impl PlayerState {
    /// Deal the first `HAND_SIZE` cards into the hand; the rest form the deck.
    #[must_use]
    pub fn deal(cards: impl IntoIterator<Item = CardId>) -> Self {
        let mut deck: Vector<CardId> = cards.into_iter().collect();
        let mut hand = [None; HAND_SIZE];
        for slot in &mut hand {
            *slot = deck.pop_front();
        }
        Self {
            deck,
            hand,
            area: 0,
            special: 0,
        }
    }

    /// Card in a hand slot, `None` for an empty or out-of-range slot.
    #[must_use]
    pub fn card_in_hand(&self, slot: usize) -> Option<CardId> {
        self.hand.get(slot).copied().flatten()
    }

    /// Cards held in hand, in slot order, skipping empty slots.
    pub fn hand_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.hand.iter().flatten().copied()
    }

    /// Whether `cards` is a reordering of exactly the cards in hand and deck.
    #[must_use]
    pub fn holds_exactly(&self, cards: &[CardId]) -> bool {
        let mut held = self.card_order();
        let mut other = cards.to_vec();
        held.sort_unstable();
        other.sort_unstable();
        held == other
    }

    /// Hand cards followed by the deck, in draw order.
    #[must_use]
    pub fn card_order(&self) -> Vec<CardId> {
        self.hand_cards().chain(self.deck.iter().copied()).collect()
    }

    /// Number of cards left across hand and deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.hand_cards().count() + self.deck.len()
    }
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub stage: StageId,

    /// Rounds remaining. Counts down to 0; the match is over at 0.
    pub round: u32,

    pub board: BoardState,

    pub players: PlayerPair<PlayerState>,

    /// Batches applied by the last round, in application order.
    pub prev_moves: Vec<Batch>,
}

impl GameState {
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.round == 0
    }
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal board area.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}
