//! Win tally matrices built from a tournament.
//!
//! [`MatchMatrix`] holds raw win counts and is what the ranking consumes.
//! [`WinRateMatrix`] is a descriptive view derived from it where each played
//! pair splits 1.0 between the two players by their share of the wins.
//! Keeping them as separate types means the rate view can't be fed into the
//! eigenvector ranking by accident.

use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::core::{Match, PlayerRegistry};

/// Square matrix where cell `(i, j)` is the number of times player `i`
/// beat player `j`. The diagonal is always zero.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchMatrix {
    counts: DMatrix<f64>,
}

impl MatchMatrix {
    /// A matrix with no recorded wins for `n` players.
    pub fn zeros(n: usize) -> Self {
        Self {
            counts: DMatrix::zeros(n, n),
        }
    }

    /// Tally every match into an n x n matrix, n being the registry size.
    ///
    /// A match where someone is listed as beating themselves is skipped so
    /// that the diagonal stays zero.
    pub fn from_matches(matches: &[Match], registry: &PlayerRegistry) -> Self {
        let mut matrix = Self::zeros(registry.len());
        for m in matches {
            match (registry.id(&m.winner), registry.id(&m.loser)) {
                (Some(w), Some(l)) if w != l => matrix.counts[(w, l)] += 1.0,
                (Some(_), Some(_)) => {
                    warn!(player = %m.winner, "Skipping self match");
                }
                _ => {
                    warn!(%m, "Skipping match with unregistered player");
                }
            }
        }
        debug!(players = registry.len(), matches = matches.len(), "Built match matrix");
        matrix
    }

    /// Build from explicit win counts. Any diagonal entries are cleared.
    ///
    /// # Panics
    ///
    /// Panics if the rows are not all `rows.len()` long.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let mut counts = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        counts.fill_diagonal(0.0);
        Self { counts }
    }

    /// Number of players, the matrix is `size() x size()`.
    pub fn size(&self) -> usize {
        self.counts.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// How many times `winner` beat `loser`.
    pub fn get(&self, winner: usize, loser: usize) -> f64 {
        self.counts[(winner, loser)]
    }

    /// Total number of wins recorded, one per counted match.
    pub fn total(&self) -> f64 {
        self.counts.sum()
    }

    /// Total games played by `player`, both won and lost.
    pub fn total_games(&self, player: usize) -> f64 {
        self.counts.row(player).sum() + self.counts.column(player).sum()
    }

    /// [`Self::total_games`] for every player, indexed by id.
    pub fn game_totals(&self) -> Vec<f64> {
        (0..self.size()).map(|i| self.total_games(i)).collect()
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.counts
    }

    /// Rows as plain vectors, handy for serialization and printing.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        dmatrix_rows(&self.counts)
    }

    /// Derive the pairwise win rate view of this matrix.
    pub fn win_rates(&self) -> WinRateMatrix {
        let n = self.size();
        let mut rates = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let played = self.counts[(i, j)] + self.counts[(j, i)];
                if played > 0.0 {
                    let rate = self.counts[(i, j)] / played;
                    rates[(i, j)] = rate;
                    rates[(j, i)] = 1.0 - rate;
                }
            }
        }
        WinRateMatrix { rates }
    }
}

/// Square matrix where cell `(i, j)` is the fraction of games between `i`
/// and `j` that `i` won. Pairs that never met are zero in both cells.
#[derive(Debug, Clone, PartialEq)]
pub struct WinRateMatrix {
    rates: DMatrix<f64>,
}

impl WinRateMatrix {
    pub fn size(&self) -> usize {
        self.rates.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rates[(i, j)]
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.rates
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        dmatrix_rows(&self.rates)
    }
}

fn dmatrix_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}
