//! Error types for CSV operations

use thiserror::Error;

/// Errors that can occur during CSV reading or writing
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Core error: {0}")]
    Core(#[from] cellscope_core::Error),
}

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;
