//! Rotated views of a card's 8×8 pattern.
//!
//! Each rotation is a fixed integer affine map. The rotated view at `(x, y)`
//! reads the original at `(a·x + b·y + c, d·x + e·y + f)`.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::config::CARD_SIZE;
use crate::core::grid::{Coord, Grid};

/// `[a, b, c, d, e, f]` per rotation step.
const ROTATION_MATRICES: [[i32; 6]; 4] = [
    [1, 0, 0, 0, 1, 0],
    [0, 1, 0, -1, 0, 7],
    [-1, 0, 7, 0, -1, 7],
    [0, -1, 7, 1, 0, 0],
];

/// Quarter-turn count, `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    /// Every rotation in order.
    pub const ALL: [Rotation; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];

    /// Create a rotation. Panics if `steps >= 4`.
    #[must_use]
    pub const fn new(steps: u8) -> Self {
        assert!(steps < 4, "rotation must be in 0..4");
        Self(steps)
    }

    #[must_use]
    pub const fn steps(self) -> u8 {
        self.0
    }

    /// This rotation followed by one more quarter turn.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 4)
    }
}

impl TryFrom<u8> for Rotation {
    type Error = String;

    fn try_from(steps: u8) -> Result<Self, Self::Error> {
        if steps < 4 {
            Ok(Self(steps))
        } else {
            Err(format!("invalid rotation {steps}"))
        }
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> u8 {
        rotation.0
    }
}

/// Apply `rotation` to an 8×8 grid, returning a new grid.
#[must_use]
pub fn rotate_grid(grid: &Grid, rotation: Rotation) -> Grid {
    let [a, b, c, d, e, f] = ROTATION_MATRICES[rotation.0 as usize];
    let size = CARD_SIZE as i32;
    let mut values = Vec::with_capacity((CARD_SIZE * CARD_SIZE) as usize);
    for y in 0..size {
        for x in 0..size {
            values.push(grid.get(Coord::new(a * x + b * y + c, d * x + e * y + f)));
        }
    }
    Grid::from_values(CARD_SIZE, CARD_SIZE, values)
}

/// Rotated view of a card's pattern. The card itself is untouched.
#[must_use]
pub fn rotate(card: &Card, rotation: Rotation) -> Grid {
    rotate_grid(&card.grid, rotation)
}
