use thiserror::Error;

use crate::eigen::EigenError;

/// Errors that stop a ranking from being produced
#[derive(Error, Debug, PartialEq, Clone)]
pub enum RankError {
    #[error("Tournament has no players to rank")]
    EmptyTournament,

    #[error("no valid eigenvector ranking found")]
    NoValidRanking,

    #[error("{} has no recorded games so their rank is undefined", player_label(.player, .name))]
    ZeroGamePlayer { player: usize, name: Option<String> },

    #[error("Eigenvector has {found} components but the matrix has {expected} players")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Eigen decomposition failed: {0}")]
    Decomposition(#[from] EigenError),

    #[error("Invalid rank configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for ranking operations
pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    /// Fill in player names for errors that only carry an id.
    pub fn with_player_names(self, names: &[String]) -> Self {
        match self {
            RankError::ZeroGamePlayer { player, name: None } => RankError::ZeroGamePlayer {
                player,
                name: names.get(player).cloned(),
            },
            other => other,
        }
    }
}

fn player_label(player: &usize, name: &Option<String>) -> String {
    match name {
        Some(name) => format!("Player {name} (id {player})"),
        None => format!("Player {player}"),
    }
}
