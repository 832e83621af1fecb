//! Error types for exceller-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in exceller-core
///
/// Only setup-time problems surface here. Field coercion never fails: a
/// value that does not parse under its column format is kept as text.
#[derive(Debug, Error)]
pub enum Error {
    /// A token of the column format option does not match the format grammar
    #[error("The column format string is malformed")]
    MalformedFormatSpecifier,
}
