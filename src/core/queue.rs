//! Upcoming operator queue.
//!
//! A deque of operators consumed one per resolved move. Only the window the
//! side panel shows, `min(moves_remaining, capacity)`, has to be present;
//! entries past it are drawn lazily as the queue advances.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::operator::Operator;
use super::rng::RandomSource;

/// Ordered upcoming operators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorQueue {
    operators: VecDeque<Operator>,
    capacity: usize,
}

impl OperatorQueue {
    /// Draw a fresh visible window for a new game.
    pub fn new(capacity: usize, moves_remaining: u32, rng: &mut impl RandomSource) -> Self {
        let mut queue = Self {
            operators: VecDeque::with_capacity(capacity),
            capacity,
        };
        queue.backfill(moves_remaining, rng);
        queue
    }

    /// Queue holding exactly the given operators, front first.
    pub fn from_operators(capacity: usize, operators: impl IntoIterator<Item = Operator>) -> Self {
        Self {
            operators: operators.into_iter().collect(),
            capacity,
        }
    }

    /// Uniform choice among the four operators; each draw is independent.
    pub fn draw_random(rng: &mut impl RandomSource) -> Operator {
        Operator::random(rng)
    }

    /// Operator used by the next resolved move.
    #[must_use]
    pub fn peek_front(&self) -> Option<Operator> {
        self.operators.front().copied()
    }

    /// Drop the front operator and backfill the window for `moves_remaining`.
    ///
    /// `moves_remaining` is the count after the move that consumed the front.
    pub fn advance(&mut self, moves_remaining: u32, rng: &mut impl RandomSource) -> Option<Operator> {
        let consumed = self.operators.pop_front();
        self.backfill(moves_remaining, rng);
        consumed
    }

    /// Draw ahead until at least `len` operators are queued.
    pub fn extend_to(&mut self, len: usize, rng: &mut impl RandomSource) {
        while self.operators.len() < len {
            self.operators.push_back(Self::draw_random(rng));
        }
    }

    /// Number of operators the panel shows for `moves_remaining`.
    #[must_use]
    pub fn window_len(&self, moves_remaining: u32) -> usize {
        (moves_remaining as usize).min(self.capacity)
    }

    /// The displayed prefix.
    #[must_use]
    pub fn visible(&self, moves_remaining: u32) -> Vec<Operator> {
        self.operators
            .iter()
            .take(self.window_len(moves_remaining))
            .copied()
            .collect()
    }

    /// All queued operators, front first.
    pub fn iter(&self) -> impl Iterator<Item = Operator> + '_ {
        self.operators.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Display capacity (the grid's row count).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn backfill(&mut self, moves_remaining: u32, rng: &mut impl RandomSource) {
        let window = self.window_len(moves_remaining);
        self.extend_to(window, rng);
    }
}
