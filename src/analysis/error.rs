use thiserror::Error;

use crate::core::ParseError;
use crate::export::ExportError;
use crate::rank::RankError;

/// Errors that can occur while running a tournament analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
