//! Error types for the engine, codec and controller.
//!
//! Every failure is recoverable at the controller boundary: a rejected
//! selection or load leaves the live game untouched.

use thiserror::Error;

use crate::core::Position;

/// Errors produced by the puzzle engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// Grid smaller than 2x2.
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 2")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Move budget of zero.
    #[error("invalid move budget {0}: at least one move is required")]
    InvalidMoveBudget(u32),

    /// Seed values did not cover the grid exactly.
    #[error("expected {expected} seed values, got {actual}")]
    SeedLengthMismatch { expected: usize, actual: usize },

    /// Cell value outside 0..=9.
    #[error("cell value {0} is not a single digit")]
    InvalidCellValue(u8),

    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    /// Cell is disabled for the current anchor (or is the anchor itself).
    #[error("cell {0} is not available for selection")]
    CellUnavailable(Position),

    #[error("no game in progress")]
    NoActiveGame,

    /// Save text failed structural validation.
    #[error("corrupt save file at line {line}: {reason}")]
    CorruptSaveFile { line: usize, reason: String },

    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    pub(crate) fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        GameError::CorruptSaveFile {
            line,
            reason: reason.into(),
        }
    }

    /// True for load failures caused by the save text itself.
    #[must_use]
    pub fn is_corrupt_save(&self) -> bool {
        matches!(self, GameError::CorruptSaveFile { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;
