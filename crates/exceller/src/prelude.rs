//! Prelude module - common imports for exceller users
//!
//! ```rust
//! use exceller::prelude::*;
//! ```

pub use crate::{
    AutofitPolicy, ColumnFormat, ColumnType, ConversionOptions, ConversionReport, Converter,
    CsvReadOptions, Error, Result, TableReport, XlsxWriteOptions,
};
