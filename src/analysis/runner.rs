use tracing::{debug, info, instrument};

use crate::core::Tournament;
use crate::eigen::{Decomposition, EigenSolver, SchurEigenSolver};
use crate::export::EdgeDirection;
use crate::rank::{RankConfig, RankError, RankSelector};

use super::error::Result;
use super::result::AnalysisResult;

/// A tournament together with the settings used to rank it.
///
/// Every stage works on the output of the one before and nothing is shared
/// or changed afterwards, so running twice gives the same result.
#[derive(Debug, Clone)]
pub struct TournamentAnalysis {
    tournament: Tournament,
    config: RankConfig,
    edge_direction: EdgeDirection,
}

impl TournamentAnalysis {
    /// Create a new analysis (use [`super::AnalysisBuilder`] instead)
    pub(crate) fn new(tournament: Tournament, config: RankConfig, edge_direction: EdgeDirection) -> Self {
        Self {
            tournament,
            config,
            edge_direction,
        }
    }

    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    pub fn edge_direction(&self) -> EdgeDirection {
        self.edge_direction
    }

    /// Run with the default nalgebra backed solver
    pub fn run(&self) -> Result<AnalysisResult> {
        self.run_with(&SchurEigenSolver::new())
    }

    /// Run with a caller supplied eigen solver
    ///
    /// Fails only if the decomposition itself fails. Not finding a ranking is
    /// kept in the result so the matrix and eigen dumps still work.
    #[instrument(level = "debug", skip(self, solver), fields(matches = self.tournament.len()))]
    pub fn run_with<S: EigenSolver>(&self, solver: &S) -> Result<AnalysisResult> {
        let registry = self.tournament.registry();
        let matrix = self.tournament.matrix();
        debug!(players = registry.len(), "Registered players");

        let selector = RankSelector::new(self.config)?;
        let (decomposition, ranks) = if matrix.is_empty() {
            (Decomposition::default(), Err(RankError::EmptyTournament))
        } else {
            let decomposition = solver
                .decompose(matrix.as_dmatrix(), self.config.tolerance)
                .map_err(RankError::from)?;
            // Every dump lays vectors out by player id, so a ragged
            // decomposition is unusable for anything.
            if let Some(pair) = decomposition
                .pairs()
                .iter()
                .find(|p| p.vector.len() != matrix.size())
            {
                return Err(RankError::LengthMismatch {
                    expected: matrix.size(),
                    found: pair.vector.len(),
                }
                .into());
            }
            let ranks = selector
                .select(&decomposition, &matrix)
                .map_err(|e| e.with_player_names(registry.names()));
            (decomposition, ranks)
        };

        match &ranks {
            Ok(r) => info!(
                players = r.len(),
                eigenvalue = r.eigenvalue(),
                "Found ranking"
            ),
            Err(e) => info!(error = %e, "No ranking"),
        }

        Ok(AnalysisResult::new(
            registry.into_names(),
            matrix,
            decomposition,
            ranks,
            self.edge_direction,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisBuilder, AnalysisError};
    use crate::eigen::{EigenError, EigenPair};

    struct FailingSolver;

    impl EigenSolver for FailingSolver {
        fn decompose(
            &self,
            _matrix: &nalgebra::DMatrix<f64>,
            _tolerance: f64,
        ) -> std::result::Result<Decomposition, EigenError> {
            Err(EigenError::DidNotConverge)
        }
    }

    struct MixedSignSolver;

    impl EigenSolver for MixedSignSolver {
        fn decompose(
            &self,
            matrix: &nalgebra::DMatrix<f64>,
            _tolerance: f64,
        ) -> std::result::Result<Decomposition, EigenError> {
            let n = matrix.nrows();
            let vector = (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
            Ok(Decomposition::new(vec![EigenPair::new(1.0, vector)]))
        }
    }

    struct RaggedSolver;

    impl EigenSolver for RaggedSolver {
        fn decompose(
            &self,
            _matrix: &nalgebra::DMatrix<f64>,
            _tolerance: f64,
        ) -> std::result::Result<Decomposition, EigenError> {
            Ok(Decomposition::new(vec![
                EigenPair::new(1.0, vec![1.0, 0.0]),
                EigenPair::new(0.5, vec![1.0]),
            ]))
        }
    }

    #[test_log::test]
    fn test_run_demo() {
        let result = AnalysisBuilder::new().demo().build().unwrap().run().unwrap();
        assert_eq!(6, result.players().len());
        assert_eq!(14.0, result.matrix().total());
        assert!(result.ranks().is_ok());
    }

    #[test]
    fn test_run_empty() {
        let result = AnalysisBuilder::new().build().unwrap().run().unwrap();
        assert!(result.players().is_empty());
        assert!(result.decomposition().is_empty());
        assert_eq!(RankError::EmptyTournament, *result.ranks().unwrap_err());
    }

    #[test]
    fn test_run_solver_failure() {
        let analysis = AnalysisBuilder::new().add_match("a", "b").build().unwrap();
        let err = analysis.run_with(&FailingSolver).unwrap_err();
        assert_eq!(
            "Eigen decomposition failed: Eigen decomposition failed to converge",
            err.to_string()
        );
    }

    #[test]
    fn test_run_no_valid_ranking_kept_in_result() {
        let analysis = AnalysisBuilder::new()
            .add_match("a", "b")
            .add_match("b", "a")
            .build()
            .unwrap();
        let result = analysis.run_with(&MixedSignSolver).unwrap();
        assert_eq!(1, result.decomposition().len());
        assert_eq!(RankError::NoValidRanking, *result.ranks().unwrap_err());
    }

    #[test]
    fn test_run_is_deterministic() {
        let analysis = AnalysisBuilder::new().demo().build().unwrap();
        let first = analysis.run().unwrap();
        let second = analysis.run().unwrap();
        assert_eq!(first.ranks().unwrap(), second.ranks().unwrap());
        assert_eq!(first.decomposition(), second.decomposition());
    }

    #[test]
    fn test_run_ragged_decomposition_fails() {
        let analysis = AnalysisBuilder::new().add_match("a", "b").build().unwrap();
        let err = analysis.run_with(&RaggedSolver).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Rank(RankError::LengthMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_run_zero_game_error_names_player() {
        let result = AnalysisBuilder::new()
            .add_match("a", "b")
            .add_match("loner", "loner")
            .build()
            .unwrap()
            .run()
            .unwrap();
        let err = result.ranks().unwrap_err();
        assert_eq!(
            RankError::ZeroGamePlayer {
                player: 2,
                name: Some("loner".to_string())
            },
            *err
        );
        assert!(err.to_string().starts_with("Player loner (id 2)"));
    }
}
