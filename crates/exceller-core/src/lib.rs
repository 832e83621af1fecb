//! # exceller-core
//!
//! Core conversion engine for exceller.
//!
//! This crate turns raw text records into typed, styled spreadsheet cells:
//! - [`ColumnFormat`] and [`FormatTable`] - the per-column format language (`D;NW4000;T`)
//! - [`ColumnPlan`] - column count and header labels for one table
//! - [`RowConverter`] - coercion of raw fields into [`CellValue`]s
//! - [`SheetLayout`] - column widths and the auto filter range
//! - [`TableConverter`] - drives one table from a record source into a [`SheetSink`]
//!
//! ## Example
//!
//! ```rust
//! use exceller_core::{CellValue, FormatTable, RowConverter};
//!
//! let formats = FormatTable::parse(Some("N;B"), false).unwrap();
//! let converter = RowConverter::new(&formats, 2);
//!
//! let row = converter.convert_record(&[Some("12.5".to_string()), Some("TRUE".to_string())]);
//! assert_eq!(row[0].value, CellValue::Number(12.5));
//! assert_eq!(row[1].value, CellValue::Boolean(true));
//! ```

pub mod cell;
pub mod convert;
pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod options;
pub mod style;
pub mod table;

// Re-exports for convenience
pub use cell::{excel_serial, CellAddress, CellRange, CellValue};
pub use convert::{coerce, column_style, ColumnStyles, ConvertedCell, ConvertedRow, RowConverter};
pub use error::{Error, Result};
pub use format::{ColumnFormat, ColumnType, FormatTable, MAX_COLUMN_WIDTH};
pub use header::{default_header, ColumnPlan, HeaderSource};
pub use layout::{finalize_layout, ColumnWidth, SheetLayout};
pub use options::{split_list, ConversionOptions};
pub use table::{Record, SheetSink, TableConverter, TableSummary};

pub use style::{Color, FontStyle, NumberFormat, Style, StylePool};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
