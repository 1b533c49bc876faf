//! Dense row-major 2D grid of cell values.
//!
//! Cards, stage layouts and boards are all `Grid`s. Cell `(x, y)` lives at
//! index `x + y * width`. Access outside the grid is a programming error and
//! panics; use [`Grid::contains`] or [`Grid::try_get`] to probe first.

use serde::{Deserialize, Serialize};

use super::space::{Space, EMPTY, INVALID};

/// Integer grid coordinate. May be negative (card positions overhang the
/// board edges).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`. Panics on overflow in debug builds; use
    /// [`Coord::checked_add`] for caller-supplied positions.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Component-wise sum, `None` if either axis overflows. An overflowing
    /// coordinate lies outside every grid.
    #[must_use]
    pub const fn checked_add(self, rhs: Coord) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl std::ops::Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        self.offset(rhs.x, rhs.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dense 2D grid of [`Space`] values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    values: Vec<Space>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    #[must_use]
    pub fn filled(width: u32, height: u32, fill: Space) -> Self {
        Self {
            width,
            height,
            values: vec![fill; (width * height) as usize],
        }
    }

    /// Create an all-empty grid.
    #[must_use]
    pub fn empty(width: u32, height: u32) -> Self {
        Self::filled(width, height, EMPTY)
    }

    /// Create a grid from row-major values.
    ///
    /// Panics if `values.len() != width * height`.
    #[must_use]
    pub fn from_values(width: u32, height: u32, values: Vec<Space>) -> Self {
        assert_eq!(
            values.len(),
            (width * height) as usize,
            "grid of {}x{} needs {} values",
            width,
            height,
            width * height
        );
        Self {
            width,
            height,
            values,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw row-major values.
    #[must_use]
    pub fn values(&self) -> &[Space] {
        &self.values
    }

    /// Whether `pos` lies inside the grid bounds.
    #[must_use]
    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Whether `pos` is inside the bounds and not `INVALID`.
    #[must_use]
    pub fn is_in_board(&self, pos: Coord) -> bool {
        self.try_get(pos).is_some_and(|v| v != INVALID)
    }

    #[inline]
    fn index(&self, pos: Coord) -> usize {
        assert!(
            self.contains(pos),
            "position {} out of range for {}x{} grid",
            pos,
            self.width,
            self.height
        );
        pos.x as usize + pos.y as usize * self.width as usize
    }

    /// Read a cell. Panics when `pos` is out of range.
    #[must_use]
    pub fn get(&self, pos: Coord) -> Space {
        self.values[self.index(pos)]
    }

    /// Read a cell, or `None` when `pos` is out of range.
    #[must_use]
    pub fn try_get(&self, pos: Coord) -> Option<Space> {
        if self.contains(pos) {
            Some(self.values[pos.x as usize + pos.y as usize * self.width as usize])
        } else {
            None
        }
    }

    /// Write a cell. Panics when `pos` is out of range.
    pub fn set(&mut self, pos: Coord, value: Space) {
        let i = self.index(pos);
        self.values[i] = value;
    }

    /// Iterate `(pos, value)` over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Space)> + '_ {
        let w = self.width as usize;
        self.values.iter().enumerate().map(move |(i, &v)| {
            let pos = Coord::new((i % w) as i32, (i / w) as i32);
            (pos, v)
        })
    }

    /// Iterate cells that are neither `EMPTY` nor `INVALID`.
    pub fn iter_non_empty(&self) -> impl Iterator<Item = (Coord, Space)> + '_ {
        self.iter().filter(|&(_, v)| v != EMPTY && v != INVALID)
    }

    /// Call `f` for every cell in row-major order.
    pub fn for_each(&self, mut f: impl FnMut(Coord, Space)) {
        for (pos, v) in self.iter() {
            f(pos, v);
        }
    }

    /// Call `f` for every cell that is neither `EMPTY` nor `INVALID`.
    pub fn for_each_non_empty(&self, mut f: impl FnMut(Coord, Space)) {
        for (pos, v) in self.iter_non_empty() {
            f(pos, v);
        }
    }

    /// Number of cells holding `value`.
    #[must_use]
    pub fn count(&self, value: Space) -> usize {
        self.values.iter().filter(|&&v| v == value).count()
    }
}
