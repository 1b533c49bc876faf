//! Card definitions - static card data.
//!
//! A `Card` is an 8×8 ink pattern plus its metadata. Cards are built once
//! from `CardInfo` records (the external data format) and never change
//! afterwards; rotated views are produced on demand by
//! [`rotate`](super::rotation::rotate).

use serde::{Deserialize, Serialize};

use crate::core::config::CARD_SIZE;
use crate::core::error::CatalogError;
use crate::core::grid::{Coord, Grid};
use crate::core::space::{EMPTY, SPECIAL, TRIVIAL};

/// Unique identifier for a card definition.
///
/// Id 0 is reserved and never names a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Fresh,
}

impl std::str::FromStr for Rarity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Common" => Ok(Rarity::Common),
            "Rare" => Ok(Rarity::Rare),
            "Fresh" => Ok(Rarity::Fresh),
            _ => Err(()),
        }
    }
}

/// One record of the card data source.
///
/// Field names follow the upstream data dump. `square` holds 64 entries
/// read bottom row first: cell `(x, y)` is `square[x + (7 - y) * 8]`.
/// `"Fill"` is trivial ink, `"Special"` is special ink, anything else is
/// empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    #[serde(rename = "Number")]
    pub number: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Square")]
    pub square: Vec<String>,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Season")]
    pub season: u32,
    #[serde(rename = "SpecialCost")]
    pub special_cost: u32,
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub rarity: Rarity,

    pub category: String,

    pub season: u32,

    /// 8×8 pattern of `EMPTY`, `TRIVIAL` and `SPECIAL` cells.
    pub grid: Grid,

    /// Number of inked cells in the pattern.
    pub area: u32,

    /// Special meter points spent to play this card as a special attack.
    pub special_cost: u32,
}

impl Card {
    /// Build a card from an 8×8 pattern. `area` is derived from the grid.
    ///
    /// Panics if the grid is not 8×8 or holds anything but `EMPTY`,
    /// `TRIVIAL` and `SPECIAL` cells.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        rarity: Rarity,
        grid: Grid,
        special_cost: u32,
    ) -> Self {
        assert_eq!(grid.size(), (CARD_SIZE, CARD_SIZE), "card grid must be 8x8");
        assert!(
            grid.values()
                .iter()
                .all(|&v| matches!(v, EMPTY | TRIVIAL | SPECIAL)),
            "card cells must be empty, trivial or special"
        );
        let area = grid.iter_non_empty().count() as u32;
        Self {
            id,
            name: name.into(),
            rarity,
            category: String::from("Misc"),
            season: 1,
            grid,
            area,
            special_cost,
        }
    }

    /// Set category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set season (builder pattern).
    #[must_use]
    pub fn with_season(mut self, season: u32) -> Self {
        self.season = season;
        self
    }

    /// Convert a data record, validating it.
    pub fn from_info(info: &CardInfo) -> Result<Self, CatalogError> {
        let id = CardId::new(info.number);
        if id.raw() == 0 {
            return Err(CatalogError::ReservedCardId);
        }
        let n = (CARD_SIZE * CARD_SIZE) as usize;
        if info.square.len() != n {
            return Err(CatalogError::SquareCount {
                id,
                found: info.square.len(),
            });
        }
        let rarity = info
            .rarity
            .parse::<Rarity>()
            .map_err(|()| CatalogError::UnknownRarity {
                id,
                rarity: info.rarity.clone(),
            })?;
        if info.category.trim().is_empty() {
            return Err(CatalogError::EmptyCategory { id });
        }

        let size = CARD_SIZE as i32;
        let mut grid = Grid::empty(CARD_SIZE, CARD_SIZE);
        for y in 0..size {
            for x in 0..size {
                let value = match info.square[(x + (size - 1 - y) * size) as usize].as_str() {
                    "Fill" => TRIVIAL,
                    "Special" => SPECIAL,
                    _ => EMPTY,
                };
                grid.set(Coord::new(x, y), value);
            }
        }

        Ok(Self::new(id, info.name.clone(), rarity, grid, info.special_cost)
            .with_category(info.category.clone())
            .with_season(info.season))
    }
}
