//! Deck construction rules.

use rustc_hash::FxHashSet;

use crate::cards::{CardCatalog, CardId};

/// Whether `deck` is legal for a match: exactly `deck_size` distinct cards,
/// all known to the catalog.
#[must_use]
pub fn is_deck_valid(cards: &CardCatalog, deck: &[CardId], deck_size: usize) -> bool {
    if deck.len() != deck_size {
        return false;
    }
    let mut seen = FxHashSet::default();
    deck.iter().all(|&id| seen.insert(id) && cards.contains(id))
}

/// Coerce an arbitrary card list toward a legal deck.
///
/// Truncates to `deck_size`, then drops repeated ids (keeping the first
/// occurrence) and ids missing from the catalog. The result may be shorter
/// than `deck_size`.
#[must_use]
pub fn calibrate_deck(cards: &CardCatalog, deck: &[CardId], deck_size: usize) -> Vec<CardId> {
    let mut seen = FxHashSet::default();
    deck.iter()
        .take(deck_size)
        .copied()
        .filter(|&id| seen.insert(id) && cards.contains(id))
        .collect()
}

/// Total inked cells across every card of the deck. Unknown ids count zero.
#[must_use]
pub fn deck_total_area(cards: &CardCatalog, deck: &[CardId]) -> u32 {
    deck.iter()
        .filter_map(|&id| cards.get(id))
        .map(|card| card.area)
        .sum()
}
