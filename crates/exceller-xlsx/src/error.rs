//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Sheet has more rows than a worksheet can hold (1-based row number)
    #[error("Row {0} exceeds the worksheet limit of {} rows", exceller_core::MAX_ROWS)]
    RowLimit(u32),

    /// Table has more columns than a worksheet can hold
    #[error("{0} columns exceed the worksheet limit of {} columns", exceller_core::MAX_COLS)]
    ColumnLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_messages() {
        assert_eq!(
            XlsxError::RowLimit(1_048_577).to_string(),
            "Row 1048577 exceeds the worksheet limit of 1048576 rows"
        );
        assert_eq!(
            XlsxError::ColumnLimit(16_385).to_string(),
            "16385 columns exceed the worksheet limit of 16384 columns"
        );
    }

    #[test]
    fn test_io_is_wrapped() {
        let err: XlsxError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, XlsxError::Io(_)));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
