//! Grid positions and cells.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Row/column coordinate within the grid (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` shares this position's row or column.
    #[must_use]
    pub fn in_cross_of(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A single grid slot.
///
/// The position is fixed for the cell's lifetime; only the value changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    value: u8,
}

impl Cell {
    /// Largest value a cell can hold after reduction.
    pub const MAX_VALUE: u8 = 9;

    /// Create a cell, rejecting values that are not a single digit.
    pub fn new(position: Position, value: u8) -> Result<Self> {
        if value > Self::MAX_VALUE {
            return Err(GameError::InvalidCellValue(value));
        }
        Ok(Self { position, value })
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: u8) {
        debug_assert!(value <= Self::MAX_VALUE);
        self.value = value;
    }
}
