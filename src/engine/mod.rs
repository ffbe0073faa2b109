//! Grid engine: selection, availability cross and move resolution.

pub mod availability;
pub mod grid_engine;

pub use availability::{compute_cross, Availability};
pub use grid_engine::{GridEngine, MoveReport, ResolvedMove};
