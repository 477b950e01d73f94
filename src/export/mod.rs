//! Rendering a tournament and its ranking for people and tools.
//!
//! - [`write_ranks`] prints `name<TAB>rank` lines
//! - [`write_matrix`] and [`write_win_rates`] dump the tally matrices
//! - [`write_eigenvectors`] and [`write_eigenvalues`] dump the decomposition
//! - [`TournamentGraph`] writes a Graphviz DOT script and can render it
//! - `RankReport` (with the `serde` feature) is a JSON summary

use std::fmt;
use std::str::FromStr;

mod dot;
mod error;
mod format;
#[cfg(feature = "serde")]
mod json;
mod table;

pub use dot::{EdgeDirection, ImageFormat, TournamentGraph};
pub use error::ExportError;
pub use format::{format_matrix, format_significant};
#[cfg(feature = "serde")]
pub use json::{PlayerRank, RankReport};
pub use table::{
    EIGEN_DIGITS, RANK_DIGITS, write_eigenvalues, write_eigenvectors, write_matrix, write_ranks,
    write_win_rates,
};

/// The mutually exclusive things a run can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Ranked table, one player per line
    #[default]
    Ranks,
    /// Win count matrix
    Matrix,
    /// Pairwise win rate matrix
    WinRates,
    /// Eigenvectors as columns
    Eigenvectors,
    /// Eigenvalues on a diagonal
    Eigenvalues,
    /// Graphviz DOT script
    Graph,
    /// JSON report
    Json,
}

impl OutputMode {
    /// Whether this mode needs a ranking to be selected.
    pub fn needs_ranking(self) -> bool {
        matches!(self, OutputMode::Ranks | OutputMode::Graph | OutputMode::Json)
    }

    /// Whether this mode needs the eigen decomposition.
    pub fn needs_decomposition(self) -> bool {
        self.needs_ranking() || matches!(self, OutputMode::Eigenvectors | OutputMode::Eigenvalues)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Ranks => "ranks",
            OutputMode::Matrix => "matrix",
            OutputMode::WinRates => "winrates",
            OutputMode::Eigenvectors => "eigvect",
            OutputMode::Eigenvalues => "eigval",
            OutputMode::Graph => "graph",
            OutputMode::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "ranks" => Ok(OutputMode::Ranks),
            "matrix" => Ok(OutputMode::Matrix),
            "winrates" => Ok(OutputMode::WinRates),
            "eigvect" => Ok(OutputMode::Eigenvectors),
            "eigval" => Ok(OutputMode::Eigenvalues),
            "graph" => Ok(OutputMode::Graph),
            "json" => Ok(OutputMode::Json),
            other => Err(ExportError::InvalidExportFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [
            OutputMode::Ranks,
            OutputMode::Matrix,
            OutputMode::WinRates,
            OutputMode::Eigenvectors,
            OutputMode::Eigenvalues,
            OutputMode::Graph,
            OutputMode::Json,
        ] {
            assert_eq!(mode, mode.to_string().parse().unwrap());
        }
        assert!("pie".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_mode_requirements() {
        assert!(OutputMode::Ranks.needs_ranking());
        assert!(OutputMode::Graph.needs_ranking());
        assert!(!OutputMode::Eigenvalues.needs_ranking());
        assert!(OutputMode::Eigenvalues.needs_decomposition());
        assert!(!OutputMode::Matrix.needs_decomposition());
        assert!(!OutputMode::WinRates.needs_decomposition());
    }
}
