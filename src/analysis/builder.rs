use crate::core::{Match, Tournament, demo_tournament};
use crate::export::EdgeDirection;
use crate::rank::{RankConfig, SelectionStrategy, ZeroGamePolicy};

use super::error::{AnalysisError, Result};
use super::runner::TournamentAnalysis;

/// Builder for constructing a [`TournamentAnalysis`]
///
/// # Example
///
/// ```
/// use eigenrank::analysis::AnalysisBuilder;
/// use eigenrank::rank::SelectionStrategy;
///
/// let analysis = AnalysisBuilder::new()
///     .demo()
///     .strategy(SelectionStrategy::DominantEigenvalue)
///     .rescale(true)
///     .build()
///     .unwrap();
/// assert_eq!(14, analysis.tournament().len());
/// ```
#[derive(Debug, Default)]
pub struct AnalysisBuilder {
    matches: Vec<Match>,
    tolerance: Option<f64>,
    strategy: Option<SelectionStrategy>,
    zero_game_policy: Option<ZeroGamePolicy>,
    rescale: Option<bool>,
    edge_direction: Option<EdgeDirection>,
}

impl AnalysisBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every match from a tournament
    pub fn tournament(mut self, tournament: Tournament) -> Self {
        self.matches.extend(tournament.matches().iter().cloned());
        self
    }

    /// Append matches
    pub fn matches<I: IntoIterator<Item = Match>>(mut self, matches: I) -> Self {
        self.matches.extend(matches);
        self
    }

    /// Append a single match
    pub fn add_match<W: Into<String>, L: Into<String>>(mut self, winner: W, loser: L) -> Self {
        self.matches.push(Match::new(winner, loser));
        self
    }

    /// Use the built in demo tournament in place of anything added so far
    pub fn demo(mut self) -> Self {
        self.matches = demo_tournament().matches().to_vec();
        self
    }

    /// Set the numerical tolerance used by the eigen solver
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set how the ranking eigenvector is chosen
    pub fn strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the handling of players with no games
    pub fn zero_game_policy(mut self, policy: ZeroGamePolicy) -> Self {
        self.zero_game_policy = Some(policy);
        self
    }

    /// Rescale ranks onto `[0, 1]`
    pub fn rescale(mut self, rescale: bool) -> Self {
        self.rescale = Some(rescale);
        self
    }

    /// Set which way graph edges point
    pub fn edge_direction(mut self, direction: EdgeDirection) -> Self {
        self.edge_direction = Some(direction);
        self
    }

    /// Build the analysis
    ///
    /// Returns an error if the rank configuration is invalid. An empty
    /// tournament is allowed here and reported when a ranking is asked for.
    pub fn build(self) -> Result<TournamentAnalysis> {
        let defaults = RankConfig::default();
        let config = RankConfig {
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
            strategy: self.strategy.unwrap_or(defaults.strategy),
            zero_game_policy: self.zero_game_policy.unwrap_or(defaults.zero_game_policy),
            rescale: self.rescale.unwrap_or(defaults.rescale),
        };
        config
            .validate()
            .map_err(|e| AnalysisError::ValidationError(e.to_string()))?;

        Ok(TournamentAnalysis::new(
            Tournament::new(self.matches),
            config,
            self.edge_direction.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let analysis = AnalysisBuilder::new().add_match("a", "b").build().unwrap();
        assert_eq!(&RankConfig::default(), analysis.config());
        assert_eq!(EdgeDirection::LoserToWinner, analysis.edge_direction());
        assert_eq!(1, analysis.tournament().len());
    }

    #[test]
    fn test_builder_custom_config() {
        let analysis = AnalysisBuilder::new()
            .add_match("a", "b")
            .tolerance(1e-8)
            .strategy(SelectionStrategy::DominantEigenvalue)
            .zero_game_policy(ZeroGamePolicy::Undefined)
            .rescale(true)
            .edge_direction(EdgeDirection::WinnerToLoser)
            .build()
            .unwrap();

        let config = analysis.config();
        assert_eq!(1e-8, config.tolerance);
        assert_eq!(SelectionStrategy::DominantEigenvalue, config.strategy);
        assert_eq!(ZeroGamePolicy::Undefined, config.zero_game_policy);
        assert!(config.rescale);
        assert_eq!(EdgeDirection::WinnerToLoser, analysis.edge_direction());
    }

    #[test]
    fn test_builder_validation_error() {
        let result = AnalysisBuilder::new().add_match("a", "b").tolerance(-1.0).build();
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::ValidationError(_)
        ));
    }

    #[test]
    fn test_demo_replaces_matches() {
        let analysis = AnalysisBuilder::new()
            .add_match("x", "y")
            .demo()
            .build()
            .unwrap();
        assert_eq!(demo_tournament(), *analysis.tournament());
    }

    #[test]
    fn test_matches_keep_order() {
        let tourn: Tournament = vec![Match::new("a", "b"), Match::new("c", "d")].into();
        let analysis = AnalysisBuilder::new()
            .tournament(tourn)
            .matches(vec![Match::new("e", "f")])
            .add_match("g", "h")
            .build()
            .unwrap();
        assert_eq!(
            vec!["a", "b", "c", "d", "e", "f", "g", "h"],
            analysis.tournament().players()
        );
    }
}
