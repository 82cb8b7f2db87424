use thiserror::Error;

/// Result type for report loading
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading an analysis report
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was not a valid analysis report
    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),
}
