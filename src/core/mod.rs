//! Core value types: settings, cells, grid, operators, queue, RNG and state.
//!
//! Everything here is plain data. Game rules live in `engine` and `rules`.

pub mod cell;
pub mod config;
pub mod grid;
pub mod operator;
pub mod queue;
pub mod rng;
pub mod state;

pub use cell::{Cell, Position};
pub use config::{Difficulty, Settings};
pub use grid::Grid;
pub use operator::{Operator, ParseOperatorError};
pub use queue::OperatorQueue;
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use state::GameState;
