//! # exceller-csv
//!
//! CSV record source for exceller.
//!
//! Every physical line of the input is one record; header handling is left
//! to the conversion engine.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvRecordSource;
