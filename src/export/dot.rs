//! Graphviz view of a ranked tournament.
//!
//! Every player is a node and every recorded match is an edge. Nodes grow
//! and shade from white to red as their rank moves from the lowest to the
//! highest in the tournament:
//!
//! - width is `0.5 + 2.0 * p`
//! - height is `0.5 + 1.3 * p`
//! - fill is `#FFggbb` where `gg = bb = 255 - floor(255 * p)`
//!
//! with `p = (rank - min) / (max - min)`. When all ranks are equal `p` is 0.
//!
//! By default an edge runs from the loser to the winner, so arrows point at
//! stronger players. [`EdgeDirection::WinnerToLoser`] flips that.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::Command;
use std::str::FromStr;

use tracing::debug;

use crate::matrix::MatchMatrix;
use crate::rank::RankVector;

use super::error::ExportError;
use super::format::format_significant;
use super::table::RANK_DIGITS;

/// Which way match edges point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeDirection {
    #[default]
    LoserToWinner,
    WinnerToLoser,
}

impl FromStr for EdgeDirection {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "loser-to-winner" | "to-winner" => Ok(EdgeDirection::LoserToWinner),
            "winner-to-loser" | "to-loser" => Ok(EdgeDirection::WinnerToLoser),
            other => Err(ExportError::InvalidExportFormat(format!(
                "Unsupported edge direction: {other}. Use 'loser-to-winner' or 'winner-to-loser'."
            ))),
        }
    }
}

/// Image formats Graphviz can render the graph into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    fn dot_flag(self) -> &'static str {
        match self {
            ImageFormat::Png => "-Tpng",
            ImageFormat::Svg => "-Tsvg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(ExportError::InvalidExportFormat(other.to_string())),
        }
    }
}

/// Everything needed to draw the tournament graph.
#[derive(Debug, Clone, Copy)]
pub struct TournamentGraph<'a> {
    players: &'a [String],
    matrix: &'a MatchMatrix,
    ranks: &'a RankVector,
    direction: EdgeDirection,
}

impl<'a> TournamentGraph<'a> {
    pub fn new(players: &'a [String], matrix: &'a MatchMatrix, ranks: &'a RankVector) -> Self {
        Self {
            players,
            matrix,
            ranks,
            direction: EdgeDirection::default(),
        }
    }

    pub fn direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Number of edges [`Self::write_dot`] emits, one per counted match.
    pub fn edge_count(&self) -> usize {
        self.matrix.total() as usize
    }

    /// Write the DOT script.
    pub fn write_dot<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "digraph matches {{")?;

        for (i, player) in self.players.iter().enumerate() {
            let p = self.ranks.position(i);
            let width = 0.5 + 2.0 * p;
            let height = 0.5 + 1.3 * p;
            let red = (p * 255.0) as u8;
            let green = 255 - red;
            let blue = green;
            let name = escape(player);
            writeln!(
                w,
                "\"{}\" [width={:.2}, height={:.2}, label=\"{}\\n({})\", style=filled, fillcolor=\"#FF{:02x}{:02x}\"];",
                name,
                width,
                height,
                name,
                format_significant(self.ranks.get(i), RANK_DIGITS),
                green,
                blue
            )?;
        }

        let n = self.matrix.size();
        for winner in 0..n {
            for loser in 0..n {
                let wins = self.matrix.get(winner, loser) as usize;
                if wins == 0 {
                    continue;
                }
                let (from, to) = match self.direction {
                    EdgeDirection::LoserToWinner => (loser, winner),
                    EdgeDirection::WinnerToLoser => (winner, loser),
                };
                let from = escape(&self.players[from]);
                let to = escape(&self.players[to]);
                for _ in 0..wins {
                    writeln!(w, "\"{}\" -> \"{}\";", from, to)?;
                }
            }
        }

        writeln!(w, "}}")
    }

    /// The DOT script as a string.
    pub fn to_dot_string(&self) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write_dot(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Write the DOT script to a file.
    pub fn export_to_dot(&self, output_path: &Path) -> Result<(), ExportError> {
        let mut file = BufWriter::new(File::create(output_path)?);
        self.write_dot(&mut file)?;
        file.flush()?;
        debug!(path = %output_path.display(), "Wrote DOT graph");
        Ok(())
    }

    /// Render an image with the Graphviz `dot` tool, which must be on the
    /// path. The intermediate DOT file sits next to the output and is
    /// removed afterwards when `cleanup_dot` is set.
    pub fn export_to_image(
        &self,
        output_path: &Path,
        format: ImageFormat,
        cleanup_dot: bool,
    ) -> Result<(), ExportError> {
        let dot_path = output_path.with_extension("dot");
        self.export_to_dot(&dot_path)?;

        let status = Command::new("dot")
            .arg(format.dot_flag())
            .arg(&dot_path)
            .arg("-o")
            .arg(output_path)
            .status()?;
        if !status.success() {
            return Err(ExportError::FailedToRunDot(status));
        }

        if cleanup_dot {
            std::fs::remove_file(dot_path)?;
        }
        debug!(path = %output_path.display(), %format, "Rendered graph");
        Ok(())
    }

    /// Export to `"dot"`, `"png"`, `"svg"`, or `"all"` three of them.
    pub fn export(&self, output_path: &Path, format: &str) -> Result<(), ExportError> {
        match format.to_lowercase().as_str() {
            "dot" => self.export_to_dot(output_path),
            "all" => {
                self.export_to_dot(&output_path.with_extension("dot"))?;
                self.export_to_image(&output_path.with_extension("png"), ImageFormat::Png, false)?;
                self.export_to_image(&output_path.with_extension("svg"), ImageFormat::Svg, false)
            }
            other => {
                let image: ImageFormat = other.parse()?;
                self.export_to_image(output_path, image, true)
            }
        }
    }
}

/// Escape a name for use inside a double quoted DOT id.
fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::{Match, Tournament, demo_tournament};
    use crate::eigen::SchurEigenSolver;
    use crate::rank::{RankConfig, RankSelector};

    fn edges(dot: &str) -> Vec<&str> {
        dot.lines().filter(|l| l.contains("->")).collect()
    }

    fn two_player() -> (Vec<String>, MatchMatrix, RankVector) {
        let tourn: Tournament = vec![
            Match::new("alice", "bob"),
            Match::new("alice", "bob"),
            Match::new("bob", "alice"),
        ]
        .into();
        let ranks = RankVector::new(vec![0.75, 0.25], 1.0, 0, 1.0);
        (tourn.players(), tourn.matrix(), ranks)
    }

    #[test]
    fn test_node_styling() {
        let (players, matrix, ranks) = two_player();
        let dot = TournamentGraph::new(&players, &matrix, &ranks).to_dot_string().unwrap();
        assert!(dot.starts_with("digraph matches {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains(
            "\"alice\" [width=2.50, height=1.80, label=\"alice\\n(0.75)\", style=filled, fillcolor=\"#FF0000\"];"
        ));
        assert!(dot.contains(
            "\"bob\" [width=0.50, height=0.50, label=\"bob\\n(0.25)\", style=filled, fillcolor=\"#FFffff\"];"
        ));
    }

    #[test]
    fn test_edges_loser_to_winner() {
        let (players, matrix, ranks) = two_player();
        let graph = TournamentGraph::new(&players, &matrix, &ranks);
        let dot = graph.to_dot_string().unwrap();
        let lines = edges(&dot);
        assert_eq!(3, lines.len());
        assert_eq!(graph.edge_count(), lines.len());
        assert_eq!(2, lines.iter().filter(|l| **l == "\"bob\" -> \"alice\";").count());
        assert_eq!(1, lines.iter().filter(|l| **l == "\"alice\" -> \"bob\";").count());
    }

    #[test]
    fn test_edges_winner_to_loser() {
        let (players, matrix, ranks) = two_player();
        let dot = TournamentGraph::new(&players, &matrix, &ranks)
            .direction(EdgeDirection::WinnerToLoser)
            .to_dot_string().unwrap();
        let lines = edges(&dot);
        assert_eq!(2, lines.iter().filter(|l| **l == "\"alice\" -> \"bob\";").count());
    }

    #[test]
    fn test_equal_ranks_do_not_divide_by_zero() {
        let (players, matrix, _) = two_player();
        let ranks = RankVector::new(vec![0.5, 0.5], 1.0, 0, 1.0);
        let dot = TournamentGraph::new(&players, &matrix, &ranks).to_dot_string().unwrap();
        assert!(!dot.contains("NaN"));
        assert_eq!(2, dot.matches("width=0.50, height=0.50").count());
    }

    #[test]
    fn test_quotes_escaped() {
        let players = vec!["say \"hi\"".to_string(), "b".to_string()];
        let matrix = MatchMatrix::from_rows(&[vec![0.0, 1.0], vec![0.0, 0.0]]);
        let ranks = RankVector::new(vec![1.0, 0.0], 0.0, 0, 1.0);
        let dot = TournamentGraph::new(&players, &matrix, &ranks).to_dot_string().unwrap();
        assert!(dot.contains("\"b\" -> \"say \\\"hi\\\"\";"));
    }

    #[test]
    fn test_demo_graph() {
        let tourn = demo_tournament();
        let players = tourn.players();
        let matrix = tourn.matrix();
        let ranks = RankSelector::new(RankConfig::default())
            .unwrap()
            .rank(&matrix, &SchurEigenSolver::new())
            .unwrap();
        let dot = TournamentGraph::new(&players, &matrix, &ranks).to_dot_string().unwrap();

        assert_eq!(14, edges(&dot).len());
        // the extremes come from the true min and max of the rank vector
        assert_eq!(1, dot.matches("width=2.50, height=1.80").count());
        assert_eq!(1, dot.matches("fillcolor=\"#FFffff\"").count());
        assert_eq!(6, dot.matches("style=filled").count());
    }

    #[test]
    fn test_dot_string_matches_written_script() {
        let (players, matrix, ranks) = two_player();
        let graph = TournamentGraph::new(&players, &matrix, &ranks);
        let mut written = Vec::new();
        graph.write_dot(&mut written).unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), graph.to_dot_string().unwrap());
    }

    #[test]
    fn test_export_to_dot_creates_file() {
        let (players, matrix, ranks) = two_player();
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("graph.dot");

        let result = TournamentGraph::new(&players, &matrix, &ranks).export(&output_path, "dot");
        assert!(result.is_ok(), "Failed to export to DOT: {:?}", result.err());

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("digraph matches"));
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_export_images() {
        if Command::new("dot").arg("-V").status().is_err() {
            println!("Skipping test_export_images - Graphviz not installed");
            return;
        }
        let (players, matrix, ranks) = two_player();
        let graph = TournamentGraph::new(&players, &matrix, &ranks);
        let temp_dir = tempfile::tempdir().unwrap();

        let base = temp_dir.path().join("all");
        graph.export(&base, "all").unwrap();
        assert!(base.with_extension("dot").exists());
        assert!(base.with_extension("png").exists());
        assert!(base.with_extension("svg").exists());

        let svg = temp_dir.path().join("only.svg");
        graph.export(&svg, "svg").unwrap();
        assert!(svg.exists());
        assert!(!svg.with_extension("dot").exists());
    }

    #[test]
    fn test_invalid_format_returns_error() {
        let (players, matrix, ranks) = two_player();
        let temp_dir = tempfile::tempdir().unwrap();
        let result =
            TournamentGraph::new(&players, &matrix, &ranks).export(&temp_dir.path().join("x"), "gif");
        assert!(matches!(result, Err(ExportError::InvalidExportFormat(_))));
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(
            EdgeDirection::WinnerToLoser,
            "winner-to-loser".parse::<EdgeDirection>().unwrap()
        );
        assert!("sideways".parse::<EdgeDirection>().is_err());
    }
}
