//! Stage definitions - board layouts.

use serde::{Deserialize, Serialize};

use super::text::parse_grid;
use crate::core::error::CatalogError;
use crate::core::grid::Grid;
use crate::core::space::INVALID;

/// Unique identifier for a stage layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StageId(pub u32);

impl StageId {
    /// Create a new stage ID.
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

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage({})", self.0)
    }
}

/// One record of the stage data source. `spaces` is grid text
/// (see [`parse_grid`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    pub id: u32,
    pub name: String,
    pub spaces: String,
}

/// Static stage definition.
///
/// The layout already carries both players' starting special squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,

    pub name: String,

    /// Initial board. Cells outside the playable shape are `INVALID`.
    pub board: Grid,

    /// Number of playable (non-`INVALID`) cells.
    pub area: u32,
}

impl Stage {
    /// Build a stage from a layout grid. `area` is derived.
    #[must_use]
    pub fn new(id: StageId, name: impl Into<String>, board: Grid) -> Self {
        let area = board.values().iter().filter(|&&v| v != INVALID).count() as u32;
        Self {
            id,
            name: name.into(),
            board,
            area,
        }
    }

    /// Convert a data record, parsing its layout text.
    pub fn from_info(info: &StageInfo) -> Result<Self, CatalogError> {
        let id = StageId::new(info.id);
        let board =
            parse_grid(&info.spaces).map_err(|source| CatalogError::StageLayout { id, source })?;
        Ok(Self::new(id, info.name.clone(), board))
    }
}
