//! Per-game settings and difficulty presets.
//!
//! `Settings` is fixed once a game starts. The menu edits a copy and the
//! controller validates it on `start_new_game`.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Grid size, move budget and target sum for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    /// Number of grid rows (also the operator display capacity).
    pub rows: usize,
    pub cols: usize,
    /// Move budget at game start.
    pub moves_total: u32,
    /// Sum the grid must reach.
    pub target: i64,
}

impl Settings {
    /// Smallest grid edge the engine accepts.
    pub const MIN_EDGE: usize = 2;

    /// Row/column range offered by the menu.
    pub const EDGE_RANGE: RangeInclusive<usize> = 2..=10;

    /// Target range offered by the menu.
    pub const TARGET_RANGE: RangeInclusive<i64> = 1..=420;

    /// Move budget range offered by the menu.
    pub const MOVES_RANGE: RangeInclusive<u32> = 1..=99;

    /// Create settings without validating them.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, moves_total: u32, target: i64) -> Self {
        Self {
            rows,
            cols,
            moves_total,
            target,
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_moves(mut self, moves_total: u32) -> Self {
        self.moves_total = moves_total;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Number of cells in the grid. Saturates for dimensions `validate` rejects.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// How many upcoming operators the side panel shows.
    #[must_use]
    pub fn operator_capacity(&self) -> usize {
        self.rows
    }

    /// Check the engine minimums.
    ///
    /// Menu ranges are advisory; only the 2x2 grid, an addressable cell
    /// count and the one-move floor are enforced here.
    pub fn validate(&self) -> Result<()> {
        if self.rows < Self::MIN_EDGE
            || self.cols < Self::MIN_EDGE
            || self.rows.checked_mul(self.cols).is_none()
        {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.moves_total == 0 {
            return Err(GameError::InvalidMoveBudget(self.moves_total));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(7, 5, 20, 150)
    }
}

/// Menu difficulty presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Settings for this preset.
    #[must_use]
    pub fn settings(self) -> Settings {
        match self {
            Difficulty::Easy => Settings::new(5, 5, 60, 111),
            Difficulty::Medium => Settings::new(6, 6, 50, 150),
            Difficulty::Hard => Settings::new(7, 7, 30, 222),
        }
    }
}

impl From<Difficulty> for Settings {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.settings()
    }
}
