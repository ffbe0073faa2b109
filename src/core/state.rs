//! Aggregate game state: settings, grid, operator queue, move counter, selection.
//!
//! `GameState` is plain data. All mutation during play goes through
//! [`GridEngine`](crate::engine::GridEngine); the codec builds and reads it
//! for save files.

use super::cell::Position;
use super::config::Settings;
use super::grid::Grid;
use super::operator::Operator;
use super::queue::OperatorQueue;
use super::rng::RandomSource;
use crate::error::{GameError, Result};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    settings: Settings,
    pub(crate) grid: Grid,
    pub(crate) operators: OperatorQueue,
    pub(crate) moves_remaining: u32,
    pub(crate) selection: Option<Position>,
}

impl GameState {
    /// Fresh game: random grid and a full operator window.
    pub fn new(settings: Settings, rng: &mut impl RandomSource) -> Result<Self> {
        settings.validate()?;
        let grid = Grid::for_settings(&settings, rng)?;
        let operators =
            OperatorQueue::new(settings.operator_capacity(), settings.moves_total, rng);
        Ok(Self {
            settings,
            grid,
            operators,
            moves_remaining: settings.moves_total,
            selection: None,
        })
    }

    /// Assemble a state from existing parts (restored saves, scripted setups).
    ///
    /// The grid must match the settings' dimensions and `moves_remaining` may
    /// not exceed the budget. The queue must cover the visible window.
    pub fn from_parts(
        settings: Settings,
        grid: Grid,
        operators: OperatorQueue,
        moves_remaining: u32,
    ) -> Result<Self> {
        settings.validate()?;
        if grid.rows() != settings.rows || grid.cols() != settings.cols {
            return Err(GameError::InvalidDimensions {
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if moves_remaining > settings.moves_total {
            return Err(GameError::InvalidMoveBudget(moves_remaining));
        }
        let operators = OperatorQueue::from_operators(settings.operator_capacity(), operators.iter());
        if operators.len() < operators.window_len(moves_remaining) {
            return Err(GameError::InvalidMoveBudget(moves_remaining));
        }
        Ok(Self {
            settings,
            grid,
            operators,
            moves_remaining,
            selection: None,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn operators(&self) -> &OperatorQueue {
        &self.operators
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// The anchored cell of an in-progress move, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.settings.target
    }

    /// Sum of all cell values, recomputed on every call.
    #[must_use]
    pub fn current_sum(&self) -> i64 {
        self.grid.sum()
    }

    /// Operators shown in the side panel.
    #[must_use]
    pub fn visible_operators(&self) -> Vec<Operator> {
        self.operators.visible(self.moves_remaining)
    }

    /// Draw ahead so the queue holds one operator per remaining move.
    pub fn materialize_operators(&mut self, rng: &mut impl RandomSource) {
        self.operators.extend_to(self.moves_remaining as usize, rng);
    }
}
