//! Card catalog for definition lookup.
//!
//! The `CardCatalog` is built once from the card data source and is
//! read-only afterwards. Share it between games with an `Arc`.

use log::debug;
use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardInfo};
use crate::core::error::CatalogError;

const BUILTIN_CARDS: &str = include_str!("../../data/cards.json");

/// Immutable registry of card definitions.
///
/// ## Example
///
/// ```
/// use tableturf::cards::{CardCatalog, CardId};
///
/// let catalog = CardCatalog::builtin().unwrap();
/// let card = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(card.area, 1);
/// assert!(catalog.get(CardId::new(0)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Build a catalog from already-constructed cards.
    ///
    /// Fails on a duplicate id or the reserved id 0.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for card in cards {
            if card.id.raw() == 0 {
                return Err(CatalogError::ReservedCardId);
            }
            if catalog.cards.contains_key(&card.id) {
                return Err(CatalogError::DuplicateCard(card.id));
            }
            catalog.by_name.insert(card.name.clone(), card.id);
            catalog.cards.insert(card.id, card);
        }
        debug!("card catalog built with {} cards", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from data records.
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a CardInfo>,
    ) -> Result<Self, CatalogError> {
        let cards = records
            .into_iter()
            .map(Card::from_info)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// Build a catalog from a JSON array of [`CardInfo`] records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CardInfo> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    /// The card set bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CARDS)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card definition by exact name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All cards sorted by id.
    #[must_use]
    pub fn cards(&self) -> Vec<&Card> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by_key(|c| c.id);
        cards
    }
}
