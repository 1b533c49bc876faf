//! Shuffle sources.
//!
//! The rules engine itself never draws random numbers. Deck bootstrap and
//! redraws go through the [`Shuffle`] trait so callers inject whatever
//! source both sides of a match agree on. [`GameRng`] is the stock
//! implementation used by the match runner and the automated players.
//!
//! ```
//! use tableturf::core::{GameRng, Shuffle};
//!
//! let mut match_rng = GameRng::new(42);
//! let mut bot_rng = match_rng.fork();
//!
//! let mut deck: Vec<u32> = (1..=15).collect();
//! match_rng.shuffle(&mut deck);
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().gen_range_usize(0..100), bot_rng.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of permutations for deck shuffles.
pub trait Shuffle {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// Seeded ChaCha8 stream.
///
/// Forks are independent streams derived from the parent seed, so a match
/// seed determines every deck shuffle and every bot decision.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next independent stream. The parent's own sequence is
    /// not advanced.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(
            self.seed
                .wrapping_add(self.forks.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// Uniform index in `range`. Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// `true` with the given probability, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

impl Shuffle for GameRng {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut a: Vec<u32> = (1..=15).collect();
        let mut b = a.clone();
        GameRng::new(42).shuffle(&mut a);
        GameRng::new(42).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_forks_are_distinct_and_reproducible() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let first = rng1.fork();
        let second = rng1.fork();
        assert_ne!(first.seed(), second.seed());
        assert_ne!(first.seed(), rng1.seed());
        assert_eq!(rng2.fork().seed(), first.seed());
    }

    #[test]
    fn test_fork_leaves_parent_stream() {
        let mut forked = GameRng::new(9);
        let _ = forked.fork();
        let mut plain = GameRng::new(9);
        assert_eq!(forked.gen_range_usize(0..1000), plain.gen_range_usize(0..1000));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut deck: Vec<u32> = (1..=15).collect();
        let original = deck.clone();

        rng.shuffle(&mut deck);

        assert_ne!(deck, original);
        deck.sort_unstable();
        assert_eq!(deck, original);
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(1);
        assert!((0..20).all(|_| !rng.gen_bool(0.0)));
        assert!((0..20).all(|_| rng.gen_bool(1.5)));
    }
}
