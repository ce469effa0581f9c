//! Seeded randomness for deck shuffles and computer choices.
//!
//! One `GameRng` lives for a whole program run. Each Twenty-One round
//! shuffles from a `fork()`, so every deck comes from its own stream while
//! a fixed `--seed` still replays the same session.
//!
//! ```
//! use parlor::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut deck_a: Vec<u8> = (0..52).collect();
//! let mut deck_b = deck_a.clone();
//! a.fork().shuffle(&mut deck_a);
//! b.fork().shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seeded from the operating system; used when no `--seed` is given.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off a child stream seeded from this one.
    ///
    /// Successive forks differ from each other and from the parent, and
    /// the whole tree is fixed by the root seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform in-place permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform pick; `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut deck: Vec<u8> = (0..52).collect();
        rng.shuffle(&mut deck);
        deck
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        assert_eq!(shuffled(&mut GameRng::new(9)), shuffled(&mut GameRng::new(9)));
        assert_ne!(shuffled(&mut GameRng::new(9)), shuffled(&mut GameRng::new(10)));
    }

    #[test]
    fn test_shuffle_keeps_every_item() {
        let mut deck = shuffled(&mut GameRng::new(3));
        assert_ne!(deck, (0..52).collect::<Vec<u8>>());

        deck.sort_unstable();
        assert_eq!(deck, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_forks_are_independent_but_replayable() {
        let mut parent = GameRng::new(42);
        let first = shuffled(&mut parent.fork());
        let second = shuffled(&mut parent.fork());
        assert_ne!(first, second);

        let mut replay = GameRng::new(42);
        assert_eq!(shuffled(&mut replay.fork()), first);
        assert_eq!(shuffled(&mut replay.fork()), second);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(1);
        let squares = [2, 4, 6, 8];

        for _ in 0..20 {
            assert!(squares.contains(rng.choose(&squares).unwrap()));
        }
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
