//! Error types for a conversion run

use thiserror::Error;

/// Result type for conversion runs
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid conversion options
    #[error(transparent)]
    Core(#[from] exceller_core::Error),

    /// Reading a CSV source failed
    #[error(transparent)]
    Csv(#[from] exceller_csv::CsvError),

    /// Writing the workbook failed
    #[error(transparent)]
    Xlsx(#[from] exceller_xlsx::XlsxError),

    /// IO error while preparing or saving the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to convert
    #[error("You haven't provided the CSV source")]
    NoSources,
}
