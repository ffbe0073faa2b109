//! Availability cross: which cells may be picked as the second click.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Grid, Operator, Position};

/// Inline room for the largest menu grid's cross (10 + 10 - 2).
const INLINE_CROSS: usize = 18;

/// Set of enabled positions, in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    positions: SmallVec<[Position; INLINE_CROSS]>,
}

impl Availability {
    /// No cell enabled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every cell of the grid enabled (no anchor yet).
    #[must_use]
    pub fn all(grid: &Grid) -> Self {
        Self {
            positions: grid.positions().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}

impl FromIterator<Position> for Availability {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Cells sharing the anchor's row or column, minus the anchor itself.
///
/// While the front operator is division, zero-valued cells are excluded so a
/// zero divisor can never be selected.
#[must_use]
pub fn compute_cross(grid: &Grid, anchor: Position, front: Option<Operator>) -> Availability {
    let dividing = front == Some(Operator::Divide);
    grid.cells()
        .filter(|cell| {
            let pos = cell.position();
            pos != anchor && pos.in_cross_of(anchor) && !(dividing && cell.value() == 0)
        })
        .map(|cell| cell.position())
        .collect()
}
