//! Cell values shared by cards, stages and boards.
//!
//! A cell is a single signed byte. The magnitude is the ink tier and the
//! sign is the owner: positive for player 0, negative for player 1.
//! `NEUTRAL` and `INVALID` are never signed.

use super::player::PlayerId;

/// Signed cell value.
pub type Space = i8;

/// Unpainted, playable cell.
pub const EMPTY: Space = 0;

/// Base ink tier.
pub const TRIVIAL: Space = 1;

/// Special ink tier.
pub const SPECIAL: Space = 2;

/// Contested ink owned by neither player.
pub const NEUTRAL: Space = 3;

/// Not part of the playable area.
pub const INVALID: Space = 99;

/// The eight neighbour offsets, clockwise from the top-left.
pub const EIGHT_NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Ink tier of a cell, ignoring ownership.
#[inline]
#[must_use]
pub fn tier(value: Space) -> Space {
    value.abs()
}

/// Whether the cell holds player ink (trivial or special, either owner).
#[inline]
#[must_use]
pub fn is_ink(value: Space) -> bool {
    matches!(tier(value), TRIVIAL | SPECIAL)
}

/// Owner of an inked cell.
///
/// Returns `None` for empty, neutral and invalid cells.
#[must_use]
pub fn owner(value: Space) -> Option<PlayerId> {
    if !is_ink(value) {
        return None;
    }
    Some(if value > 0 { PlayerId::new(0) } else { PlayerId::new(1) })
}

/// Paint `tier` for `player`, applying the player's turn sign.
#[inline]
#[must_use]
pub fn signed(tier: Space, player: PlayerId) -> Space {
    tier * player.turn_sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner() {
        assert_eq!(owner(TRIVIAL), Some(PlayerId::new(0)));
        assert_eq!(owner(-SPECIAL), Some(PlayerId::new(1)));
        assert_eq!(owner(EMPTY), None);
        assert_eq!(owner(NEUTRAL), None);
        assert_eq!(owner(INVALID), None);
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(SPECIAL, PlayerId::new(0)), 2);
        assert_eq!(signed(SPECIAL, PlayerId::new(1)), -2);
        assert_eq!(signed(TRIVIAL, PlayerId::new(1)), -1);
    }

    #[test]
    fn test_is_ink() {
        assert!(is_ink(-TRIVIAL));
        assert!(is_ink(SPECIAL));
        assert!(!is_ink(NEUTRAL));
        assert!(!is_ink(INVALID));
        assert!(!is_ink(EMPTY));
    }
}
