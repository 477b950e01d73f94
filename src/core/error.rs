use thiserror::Error;

/// Errors produced while reading a match log.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("odd number of players causes opponentless match (winner {winner:?} has no loser)")]
    OpponentlessMatch { winner: String },

    #[error("Error reading match log caused by IO error")]
    Io(#[from] std::io::Error),
}
