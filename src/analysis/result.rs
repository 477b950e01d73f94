use std::io::Write;

use crate::eigen::Decomposition;
use crate::export::{
    EdgeDirection, OutputMode, TournamentGraph, write_eigenvalues, write_eigenvectors,
    write_matrix, write_ranks, write_win_rates,
};
use crate::matrix::MatchMatrix;
use crate::rank::{RankError, RankVector};

use super::error::Result;

/// Everything one analysis run produced
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Player names indexed by id
    players: Vec<String>,
    matrix: MatchMatrix,
    decomposition: Decomposition,
    /// The ranking, or why there isn't one
    ranks: std::result::Result<RankVector, RankError>,
    edge_direction: EdgeDirection,
}

impl AnalysisResult {
    pub fn new(
        players: Vec<String>,
        matrix: MatchMatrix,
        decomposition: Decomposition,
        ranks: std::result::Result<RankVector, RankError>,
        edge_direction: EdgeDirection,
    ) -> Self {
        Self {
            players,
            matrix,
            decomposition,
            ranks,
            edge_direction,
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn matrix(&self) -> &MatchMatrix {
        &self.matrix
    }

    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    pub fn ranks(&self) -> std::result::Result<&RankVector, &RankError> {
        self.ranks.as_ref()
    }

    /// Player names paired with their ranks, highest first
    pub fn standings(&self) -> Result<Vec<(&str, f64)>> {
        let ranks = self.ranks.as_ref().map_err(Clone::clone)?;
        Ok(ranks
            .order()
            .into_iter()
            .map(|id| (self.players[id].as_str(), ranks.get(id)))
            .collect())
    }

    /// The DOT graph view. Needs a ranking.
    pub fn graph(&self) -> Result<TournamentGraph<'_>> {
        let ranks = self.ranks.as_ref().map_err(Clone::clone)?;
        Ok(TournamentGraph::new(&self.players, &self.matrix, ranks).direction(self.edge_direction))
    }

    /// JSON summary of the ranking.
    #[cfg(feature = "serde")]
    pub fn report(&self) -> Result<crate::export::RankReport> {
        let ranks = self.ranks.as_ref().map_err(Clone::clone)?;
        Ok(crate::export::RankReport::new(&self.players, &self.matrix, ranks))
    }

    /// Write the requested view. Modes that need a ranking fail with the
    /// stored [`RankError`] when there is none, before anything is written.
    pub fn render<W: Write>(&self, mode: OutputMode, w: &mut W) -> Result<()> {
        match mode {
            OutputMode::Ranks => {
                let ranks = self.ranks.as_ref().map_err(Clone::clone)?;
                write_ranks(w, &self.players, ranks)?;
            }
            OutputMode::Matrix => write_matrix(w, &self.matrix)?,
            OutputMode::WinRates => write_win_rates(w, &self.matrix.win_rates())?,
            OutputMode::Eigenvectors => write_eigenvectors(w, &self.decomposition)?,
            OutputMode::Eigenvalues => write_eigenvalues(w, &self.decomposition)?,
            OutputMode::Graph => self.graph()?.write_dot(w)?,
            #[cfg(feature = "serde")]
            OutputMode::Json => self.report()?.write_json(w)?,
            #[cfg(not(feature = "serde"))]
            OutputMode::Json => {
                return Err(crate::export::ExportError::InvalidExportFormat(
                    "json output needs the serde feature".to_string(),
                )
                .into());
            }
        }
        Ok(())
    }
}
