//! Injectable randomness for grid seeding and operator draws.
//!
//! The engine never touches a global RNG. Everything random goes through
//! [`RandomSource`], so tests can script exact grids and operator queues:
//!
//! ```
//! use more_or_less::core::{GameRng, RandomSource, ScriptedRandom};
//!
//! let mut rng = GameRng::new(42);
//! assert!(rng.next_index(9) < 9);
//!
//! // Scripted values are reduced modulo the bound and cycle forever.
//! let mut scripted = ScriptedRandom::new([3, 1]);
//! assert_eq!(scripted.next_index(9), 3);
//! assert_eq!(scripted.next_index(4), 1);
//! assert_eq!(scripted.next_index(9), 3);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is always non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Seedable RNG backed by ChaCha8.
///
/// Each draw is independent; seeding is only needed for reproducible tests.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }
}

/// Deterministic source replaying a fixed script.
///
/// Each value is reduced modulo the requested bound. The script cycles when
/// exhausted; an empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Create a source from a sequence of raw values.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// Append more values to the end of the script.
    pub fn push(&mut self, values: impl IntoIterator<Item = usize>) {
        self.script.extend(values);
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        match self.script.pop_front() {
            Some(value) => {
                self.script.push_back(value);
                value % bound
            }
            None => 0,
        }
    }
}
