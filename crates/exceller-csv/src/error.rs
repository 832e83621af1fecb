//! CSV error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while reading a CSV source
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Source path does not exist
    #[error("The source for the .csv file(s) cannot be found: {}", .0.display())]
    NotFound(PathBuf),

    /// Source path is a directory
    #[error("The source path is a directory: {}", .0.display())]
    IsDirectory(PathBuf),
}
