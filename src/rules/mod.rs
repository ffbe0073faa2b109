//! Win/loss rules.

pub mod outcome;

pub use outcome::{evaluate, Outcome};
