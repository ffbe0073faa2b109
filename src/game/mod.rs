//! Game lifecycle and UI-facing API.

pub mod controller;

pub use controller::{GameController, Phase};
