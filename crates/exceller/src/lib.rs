//! # exceller
//!
//! Convert CSV files into formatted XLSX workbooks.
//!
//! Each CSV source becomes one worksheet with a bold header row, typed
//! cells, per-column number formats and widths, and an auto filter over the
//! table. Column behavior is driven by a compact format language:
//!
//! | Token       | Meaning                                         |
//! |-------------|-------------------------------------------------|
//! | `T`         | text                                            |
//! | `N0.00`     | number, shown with the mask `0.00`              |
//! | `D`         | date (`yyyy-mm-dd hh:mm:ss`)                    |
//! | `B`         | boolean                                         |
//! | `H`         | hyperlink                                       |
//! | `TW5120`    | text, column width 5120/256 characters          |
//!
//! Tokens are separated by `;` and apply to columns in order.
//!
//! ## Example
//!
//! ```rust
//! use exceller::prelude::*;
//! use std::io::Cursor;
//!
//! let options = ConversionOptions::new()
//!     .with_column_formats("T;N0.00;B")
//!     .with_read_header(true);
//! let converter = Converter::new(options).unwrap();
//!
//! let csv = "item,price,paid\nbook,12.5,true\n";
//! let (_, tables) = converter
//!     .convert_readers(vec![("orders", csv.as_bytes())], Cursor::new(Vec::new()))
//!     .unwrap();
//!
//! assert_eq!(tables[0].sheet_name, "orders");
//! assert_eq!(tables[0].data_rows, 1);
//! ```

pub mod converter;
pub mod error;
pub mod prelude;

pub use converter::{default_destination, ConversionReport, Converter, TableReport};
pub use error::{Error, Result};

// Re-export core types
pub use exceller_core::{
    split_list, CellValue, ColumnFormat, ColumnType, ConversionOptions, FormatTable,
    HeaderSource, MAX_COLS, MAX_COLUMN_WIDTH, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export I/O types
pub use exceller_csv::{CsvError, CsvReadOptions};
pub use exceller_xlsx::{sanitize_sheet_name, AutofitPolicy, XlsxError, XlsxWriteOptions};
