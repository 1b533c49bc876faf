//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats. Player 0 paints with
//! positive cell values, player 1 with negative ones (the turn sign).
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// `+1` for player 0, `-1` for player 1.
    #[must_use]
    pub const fn turn_sign(self) -> i8 {
        if self.0 == 0 {
            1
        } else {
            -1
        }
    }

    /// Both player IDs in seat order.
    ///
    /// ```
    /// use tableturf::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(format!("invalid player id {id}"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data for the two seats.
///
/// ## Example
///
/// ```
/// use tableturf::core::{PlayerId, PlayerPair};
///
/// let mut area: PlayerPair<u32> = PlayerPair::new(|_| 1);
/// area[PlayerId::new(1)] += 4;
///
/// assert_eq!(area[PlayerId::new(0)], 1);
/// assert_eq!(area[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a pair from explicit values in seat order.
    pub const fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Map both entries.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerPair<U> {
        PlayerPair::new(|p| f(p, &self.data[p.index()]))
    }

    /// Borrow as a plain array in seat order.
    #[must_use]
    pub fn as_array(&self) -> &[T; PLAYER_COUNT] {
        &self.data
    }

    /// Consume into a plain array in seat order.
    pub fn into_array(self) -> [T; PLAYER_COUNT] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

impl<T> From<[T; PLAYER_COUNT]> for PlayerPair<T> {
    fn from(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(p0.opponent(), p1);
        assert_eq!(p1.opponent(), p0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_turn_sign() {
        assert_eq!(PlayerId::new(0).turn_sign(), 1);
        assert_eq!(PlayerId::new(1).turn_sign(), -1);
    }

    #[test]
    #[should_panic(expected = "player id must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_pair_new() {
        let pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32 * 10);

        assert_eq!(pair[PlayerId::new(0)], 0);
        assert_eq!(pair[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair: PlayerPair<i32> = PlayerPair::with_value(0);

        pair[PlayerId::new(0)] = 10;
        pair[PlayerId::new(1)] = 20;

        assert_eq!(pair.into_array(), [10, 20]);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::from_array([3, 4]);

        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &3), (PlayerId::new(1), &4)]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::from_array([1u32, 2]);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
