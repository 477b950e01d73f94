use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::matrix::MatchMatrix;
use crate::rank::RankVector;

use super::error::ExportError;

/// One player's line in a [`RankReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRank {
    pub id: usize,
    pub name: String,
    /// `None` when the player had no games and the rank is undefined
    pub rank: Option<f64>,
    pub games: f64,
}

/// Machine readable summary of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankReport {
    pub players: Vec<PlayerRank>,
    pub eigenvalue: f64,
    pub eigenvector_index: usize,
    pub matrix: Vec<Vec<f64>>,
}

impl RankReport {
    pub fn new(players: &[String], matrix: &MatchMatrix, ranks: &RankVector) -> Self {
        let players = players
            .iter()
            .zip(ranks.iter())
            .zip(matrix.game_totals())
            .enumerate()
            .map(|(id, ((name, rank), games))| PlayerRank {
                id,
                name: name.clone(),
                rank: rank.is_finite().then_some(rank),
                games,
            })
            .collect();
        Self {
            players,
            eigenvalue: ranks.eigenvalue(),
            eigenvector_index: ranks.eigenvector_index(),
            matrix: matrix.rows(),
        }
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
        Ok(())
    }
}
