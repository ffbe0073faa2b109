//! Move resolution.
//!
//! A move is two clicks. The first anchors a cell; the second picks a cell in
//! the anchor's cross, combines the two values with the front operator and
//! writes the digit into the anchor. The clicked cell then becomes the new
//! anchor, so moves chain.

use log::{debug, info, warn};

use super::availability::{compute_cross, Availability};
use crate::core::{GameState, Grid, Operator, Position, RandomSource, Settings};
use crate::error::{GameError, Result};
use crate::rules::{evaluate, Outcome};

/// Details of a resolved second click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedMove {
    /// Cell that received the result.
    pub anchor: Position,
    /// Cell combined with the anchor; it keeps its value.
    pub target: Position,
    pub operator: Operator,
    /// Digit written into the anchor.
    pub result: u8,
}

/// View-state handed back after every selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Snapshot of the grid after the selection.
    pub grid: Grid,
    /// Cells enabled for the next click.
    pub available: Availability,
    pub moves_remaining: u32,
    pub current_sum: i64,
    /// Present when the selection completed a move.
    pub resolved: Option<ResolvedMove>,
    /// Present when the game ended.
    pub outcome: Option<Outcome>,
}

/// Owns the game state and applies selections to it.
#[derive(Clone, Debug)]
pub struct GridEngine {
    state: GameState,
    available: Availability,
    outcome: Option<Outcome>,
}

impl GridEngine {
    /// Wrap a state. Any stale selection is dropped.
    #[must_use]
    pub fn new(mut state: GameState) -> Self {
        state.selection = None;
        let available = Availability::all(&state.grid);
        Self {
            state,
            available,
            outcome: None,
        }
    }

    /// Start a fresh random game.
    pub fn start(settings: Settings, rng: &mut impl RandomSource) -> Result<Self> {
        Ok(Self::new(GameState::new(settings, rng)?))
    }

    /// Build a grid from supplied row-major values, or randomly when `seed` is `None`.
    pub fn new_grid(
        rows: usize,
        cols: usize,
        seed: Option<&[u8]>,
        rng: &mut impl RandomSource,
    ) -> Result<Grid> {
        match seed {
            Some(values) => Grid::from_values(rows, cols, values),
            None => Grid::random(rows, cols, rng),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Terminal outcome, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Cells that may be clicked next. Every cell before the first anchor.
    #[must_use]
    pub fn available(&self) -> &Availability {
        &self.available
    }

    #[must_use]
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.available.contains(pos)
    }

    /// Cross for `anchor` under the current front operator.
    #[must_use]
    pub fn compute_cross(&self, anchor: Position) -> Availability {
        compute_cross(&self.state.grid, anchor, self.state.operators.peek_front())
    }

    /// Apply one click.
    ///
    /// The first click of a move only anchors. The second click resolves the
    /// move, advances the operator queue and consumes one move. An empty
    /// cross ends the game at once: moves are forced to zero and the terminal
    /// check runs.
    pub fn select_cell(&mut self, pos: Position, rng: &mut impl RandomSource) -> Result<MoveReport> {
        if self.is_finished() {
            return Err(GameError::NoActiveGame);
        }
        if !self.state.grid.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }

        let resolved = match self.state.selection {
            None => {
                debug!("anchored {pos}");
                None
            }
            Some(anchor) => {
                if !self.available.contains(pos) {
                    return Err(GameError::CellUnavailable(pos));
                }
                Some(self.resolve(anchor, pos, rng)?)
            }
        };

        self.state.selection = Some(pos);
        self.available = self.compute_cross(pos);

        let outcome = if self.available.is_empty() {
            warn!("no cell available from {pos}: forcing game over");
            self.state.moves_remaining = 0;
            self.check_terminal()
        } else if resolved.is_some() {
            self.state.moves_remaining = self.state.moves_remaining.saturating_sub(1);
            self.check_terminal()
        } else {
            None
        };

        Ok(self.report(resolved, outcome))
    }

    fn resolve(
        &mut self,
        anchor: Position,
        target: Position,
        rng: &mut impl RandomSource,
    ) -> Result<ResolvedMove> {
        let operator = self
            .state
            .operators
            .peek_front()
            .ok_or(GameError::NoActiveGame)?;
        let a = self.state.grid.value(anchor)?;
        let b = self.state.grid.value(target)?;
        // Zero divisors are never in the cross, so this only fails on a bug.
        let result = operator
            .resolve(a, b)
            .ok_or(GameError::CellUnavailable(target))?;

        self.state.grid.set_value(anchor, result)?;
        let after = self.state.moves_remaining.saturating_sub(1);
        self.state.operators.advance(after, rng);

        debug!("{anchor} {a} {operator} {target} {b} -> {result}");
        Ok(ResolvedMove {
            anchor,
            target,
            operator,
            result,
        })
    }

    fn check_terminal(&mut self) -> Option<Outcome> {
        let outcome = evaluate(
            self.state.moves_remaining,
            self.state.current_sum(),
            self.state.target(),
        )?;
        info!("game over: {outcome}");
        self.state.selection = None;
        self.available = Availability::empty();
        self.outcome = Some(outcome);
        Some(outcome)
    }

    fn report(&self, resolved: Option<ResolvedMove>, outcome: Option<Outcome>) -> MoveReport {
        MoveReport {
            grid: self.state.grid.clone(),
            available: self.available.clone(),
            moves_remaining: self.state.moves_remaining,
            current_sum: self.state.current_sum(),
            resolved,
            outcome,
        }
    }
}
