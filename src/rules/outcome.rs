//! Terminal outcome evaluation.
//!
//! Checked after every resolved move, in this order:
//! 1. moves exhausted and sum off target: loss
//! 2. sum on target: win, even with moves left
//! 3. otherwise the game continues

use serde::{Deserialize, Serialize};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Grid sum hit the target.
    Win,
    /// Moves ran out; `deficit` is the distance from the target.
    Loss { deficit: u64 },
}

impl Outcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// Player-facing summary line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Outcome::Win => "YOU WIN!".to_string(),
            Outcome::Loss { deficit } => format!(
                "YOU LOST! YOU WERE {deficit} POINT/S AWAY FROM TARGET NUMBER!"
            ),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss { deficit } => write!(f, "loss by {deficit}"),
        }
    }
}

/// Decide whether the game is over.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn evaluate(moves_remaining: u32, current_sum: i64, target: i64) -> Option<Outcome> {
    if moves_remaining == 0 && current_sum != target {
        Some(Outcome::Loss {
            deficit: target.abs_diff(current_sum),
        })
    } else if current_sum == target {
        Some(Outcome::Win)
    } else {
        None
    }
}
