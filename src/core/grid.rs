//! Dense row-major cell matrix.
//!
//! Backed by `im::Vector` so the snapshot handed to the presentation layer
//! after each move is an O(1) clone rather than a copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Position};
use super::config::Settings;
use super::rng::RandomSource;
use crate::error::{GameError, Result};

/// Exclusive upper bound for freshly drawn cell values.
pub const SEED_VALUE_BOUND: usize = 9;

/// `rows x cols` matrix of cells. Every slot is populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Fill a grid with uniform values in `[0, 9)`.
    pub fn random(rows: usize, cols: usize, rng: &mut impl RandomSource) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let mut cells = Vector::new();
        for row in 0..rows {
            for col in 0..cols {
                let value = rng.next_index(SEED_VALUE_BOUND) as u8;
                cells.push_back(Cell::new(Position::new(row, col), value)?);
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from row-major values.
    pub fn from_values(rows: usize, cols: usize, values: &[u8]) -> Result<Self> {
        let expected = check_dimensions(rows, cols)?;
        if values.len() != expected {
            return Err(GameError::SeedLengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        let cells = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Cell::new(Position::new(i / cols, i % cols), value))
            .collect::<Result<Vector<_>>>()?;
        Ok(Self { rows, cols, cells })
    }

    /// Random grid sized by `settings`.
    pub fn for_settings(settings: &Settings, rng: &mut impl RandomSource) -> Result<Self> {
        Self::random(settings.rows, settings.cols, rng)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(self.index(pos))
    }

    /// Value at `pos`, or `OutOfBounds`.
    pub fn value(&self, pos: Position) -> Result<u8> {
        self.get(pos)
            .map(Cell::value)
            .ok_or(GameError::OutOfBounds(pos))
    }

    pub(crate) fn set_value(&mut self, pos: Position, value: u8) -> Result<()> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        let index = self.index(pos);
        if let Some(cell) = self.cells.get_mut(index) {
            cell.set_value(value);
        }
        Ok(())
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().map(Cell::value)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(Cell::position)
    }

    /// Sum of all cell values, always recomputed.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.values().map(i64::from).sum()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

/// Cell count for valid dimensions.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize> {
    if rows < Settings::MIN_EDGE || cols < Settings::MIN_EDGE {
        return Err(GameError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GameError::InvalidDimensions { rows, cols })
}
