use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Error exporting caused by IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid export format: {0}")]
    InvalidExportFormat(String),

    #[error("Failed to run dot")]
    FailedToRunDot(std::process::ExitStatus),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
