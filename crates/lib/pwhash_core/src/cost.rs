//! bcrypt cost factor.

use std::fmt;
use std::str::FromStr;

use crate::hasher::HashError;

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Cost used when the caller does not pick one.
///
/// Kept at the bottom of the range so the CLI stays instant. Real
/// deployments should configure [`RECOMMENDED_COST`] or higher.
pub const DEFAULT_COST: u32 = 4;

/// Cost the `bcrypt` crate itself defaults to.
pub const RECOMMENDED_COST: u32 = bcrypt::DEFAULT_COST;

/// Work factor of a bcrypt hash: the key schedule runs `2^cost` rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u32);

impl Cost {
    /// Validate `cost` against [`MIN_COST`]..=[`MAX_COST`].
    pub fn new(cost: u32) -> Result<Self, HashError> {
        if (MIN_COST..=MAX_COST).contains(&cost) {
            Ok(Self(cost))
        } else {
            Err(HashError::UnsupportedCost(cost))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this cost is below [`RECOMMENDED_COST`].
    pub fn is_weak(self) -> bool {
        self.0 < RECOMMENDED_COST
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self(DEFAULT_COST)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Cost {
    type Error = HashError;

    fn try_from(cost: u32) -> Result<Self, Self::Error> {
        Self::new(cost)
    }
}

impl From<Cost> for u32 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl FromStr for Cost {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cost = s
            .trim()
            .parse::<u32>()
            .map_err(|e| HashError::InvalidInput(format!("cost '{s}' is not a number: {e}")))?;
        Self::new(cost)
    }
}
