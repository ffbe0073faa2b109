//! Arithmetic operators consumed one per move.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::RandomSource;

/// One of the four queue operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Uniform draw among the four operators.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// Symbol used in save files.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Raw integer result. Division truncates toward zero; `None` on a zero divisor.
    #[must_use]
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
            Operator::Multiply => a.checked_mul(b),
            Operator::Divide => a.checked_div(b),
        }
    }

    /// Apply and reduce to a single digit: `|raw mod 10|`.
    #[must_use]
    pub fn resolve(self, a: u8, b: u8) -> Option<u8> {
        self.apply(i64::from(a), i64::from(b)).map(reduce)
    }
}

/// Sign-normalized last digit of any integer.
#[must_use]
pub fn reduce(raw: i64) -> u8 {
    // |raw % 10| is at most 9, so the narrowing is lossless.
    (raw % 10).unsigned_abs() as u8
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unrecognized operator symbol.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown operator {0:?}")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}
