use std::fmt;
use std::str::FromStr;

use super::error::{RankError, Result};

/// Which sign-consistent eigenvector becomes the ranking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionStrategy {
    /// The first sign-consistent vector in solver order.
    #[default]
    FirstConsistent,
    /// The sign-consistent vector with the largest eigenvalue magnitude.
    /// For a connected tournament that's the Perron vector.
    DominantEigenvalue,
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionStrategy::FirstConsistent => write!(f, "first"),
            SelectionStrategy::DominantEigenvalue => write!(f, "dominant"),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "first" | "first-consistent" => Ok(SelectionStrategy::FirstConsistent),
            "dominant" | "dominant-eigenvalue" => Ok(SelectionStrategy::DominantEigenvalue),
            other => Err(RankError::InvalidConfig(format!(
                "unknown selection strategy: {other}. Use 'first' or 'dominant'."
            ))),
        }
    }
}

/// What to do with a player that is registered but has no games.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZeroGamePolicy {
    /// Fail the ranking with [`RankError::ZeroGamePlayer`].
    #[default]
    Reject,
    /// Give that player a NaN rank and leave them out of min/max.
    Undefined,
}

/// Configuration for rank selection
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Numerical tolerance handed to the eigen solver
    pub tolerance: f64,
    /// How to choose between several sign-consistent eigenvectors
    pub strategy: SelectionStrategy,
    /// Handling of players without games
    pub zero_game_policy: ZeroGamePolicy,
    /// Map ranks onto `[0, 1]` with the lowest at 0 and highest at 1
    pub rescale: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            strategy: SelectionStrategy::FirstConsistent,
            zero_game_policy: ZeroGamePolicy::Reject,
            rescale: false,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RankError::InvalidConfig(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
