//! # more-or-less
//!
//! Engine for a single-player grid arithmetic puzzle. The grid holds digits,
//! a queue supplies operators, and the player combines cells sharing a row
//! or column until the grid sum hits the target or the moves run out.
//!
//! ## Design Principles
//!
//! 1. **Pure data**: the grid is a matrix of values owned by the engine. A
//!    presentation layer renders from `MoveReport`s and never holds game state.
//!
//! 2. **Injectable randomness**: grid seeding and operator draws go through
//!    `RandomSource`, so tests script exact games.
//!
//! 3. **All-or-nothing transitions**: a rejected click, save or load leaves
//!    the live game untouched.
//!
//! ## Modules
//!
//! - `core`: settings, cells, grid, operators, operator queue, RNG, state
//! - `engine`: availability cross and move resolution
//! - `rules`: win/loss evaluation
//! - `persistence`: pipe-delimited save format
//! - `game`: lifecycle controller consumed by the UI

pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod persistence;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Cell, Difficulty, GameRng, GameState, Grid, Operator, OperatorQueue, Position,
    RandomSource, ScriptedRandom, Settings,
};

pub use crate::engine::{Availability, GridEngine, MoveReport, ResolvedMove};

pub use crate::error::{GameError, Result};

pub use crate::game::{GameController, Phase};

pub use crate::persistence::PersistenceCodec;

pub use crate::rules::Outcome;
