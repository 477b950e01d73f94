use tracing::{debug, trace, warn};

use crate::eigen::{Decomposition, EigenPair, EigenSolver};
use crate::matrix::MatchMatrix;

use super::config::{RankConfig, SelectionStrategy, ZeroGamePolicy};
use super::error::{RankError, Result};
use super::vector::RankVector;

/// Orientation of an eigenvector: the sign of its first non zero component.
///
/// Returns `None` for a vector with no non zero components.
pub fn sense(vector: &[f64]) -> Option<f64> {
    vector
        .iter()
        .find(|&&c| c != 0.0)
        .map(|&c| if c.is_sign_negative() { -1.0 } else { 1.0 })
}

/// True when every component times `sense` is non negative. Exact zeros are
/// fine, anything non finite is not.
pub fn is_sign_consistent(vector: &[f64], sense: f64) -> bool {
    vector.iter().all(|&c| c.is_finite() && c * sense >= 0.0)
}

/// Picks the ranking eigenvector and normalizes it into per player rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSelector {
    config: RankConfig,
}

impl RankSelector {
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Decompose the matrix with `solver` and select a ranking.
    ///
    /// An empty matrix is reported as [`RankError::EmptyTournament`] without
    /// calling the solver.
    pub fn rank<S: EigenSolver>(&self, matrix: &MatchMatrix, solver: &S) -> Result<RankVector> {
        if matrix.is_empty() {
            return Err(RankError::EmptyTournament);
        }
        let decomposition = solver.decompose(matrix.as_dmatrix(), self.config.tolerance)?;
        self.select(&decomposition, matrix)
    }

    /// Select and normalize the ranking from an existing decomposition of
    /// `matrix`.
    pub fn select(&self, decomposition: &Decomposition, matrix: &MatchMatrix) -> Result<RankVector> {
        let n = matrix.size();
        if n == 0 {
            return Err(RankError::EmptyTournament);
        }

        let mut chosen: Option<(usize, &EigenPair, f64)> = None;
        for (idx, pair) in decomposition.pairs().iter().enumerate() {
            if pair.vector.len() != n {
                return Err(RankError::LengthMismatch {
                    expected: n,
                    found: pair.vector.len(),
                });
            }

            let Some(s) = sense(&pair.vector) else {
                trace!(idx, "Rejecting zero eigenvector");
                continue;
            };
            if !is_sign_consistent(&pair.vector, s) {
                trace!(idx, value = pair.value, "Rejecting mixed sign eigenvector");
                continue;
            }
            trace!(idx, value = pair.value, sense = s, "Eigenvector is sign consistent");

            match self.config.strategy {
                SelectionStrategy::FirstConsistent => {
                    chosen = Some((idx, pair, s));
                    break;
                }
                SelectionStrategy::DominantEigenvalue => {
                    let better = chosen
                        .map_or(true, |(_, best, _)| pair.value.abs() > best.value.abs());
                    if better {
                        chosen = Some((idx, pair, s));
                    }
                }
            }
        }

        let (idx, pair, s) = chosen.ok_or(RankError::NoValidRanking)?;
        debug!(
            idx,
            eigenvalue = pair.value,
            sense = s,
            strategy = %self.config.strategy,
            "Accepted ranking eigenvector"
        );

        let mut ranks = self.normalize(&pair.vector, s, matrix)?;
        if self.config.rescale {
            rescale(&mut ranks);
        }
        Ok(RankVector::new(ranks, pair.value, idx, s))
    }

    /// `rank[i] = accepted[i] * sense / total_games(i)`
    fn normalize(&self, accepted: &[f64], sense: f64, matrix: &MatchMatrix) -> Result<Vec<f64>> {
        accepted
            .iter()
            .zip(matrix.game_totals())
            .enumerate()
            .map(|(player, (&component, games))| {
                if games <= 0.0 {
                    return match self.config.zero_game_policy {
                        ZeroGamePolicy::Reject => {
                            Err(RankError::ZeroGamePlayer { player, name: None })
                        }
                        ZeroGamePolicy::Undefined => {
                            warn!(player, "Player has no games, rank is undefined");
                            Ok(f64::NAN)
                        }
                    };
                }
                if component == 0.0 {
                    // no -0.0 in the output
                    return Ok(0.0);
                }
                Ok(component * sense / games)
            })
            .collect()
    }
}

/// Map finite ranks onto `[0, 1]`. With no spread every finite rank is 1.0.
fn rescale(ranks: &mut [f64]) {
    let finite = ranks.iter().copied().filter(|r| r.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r), hi.max(r))
    });
    for r in ranks.iter_mut().filter(|r| r.is_finite()) {
        *r = if max > min { (*r - min) / (max - min) } else { 1.0 };
    }
}
