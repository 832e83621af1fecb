//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The typed value produced for a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:C10")
//! - [`excel_serial`] - Date/time to Excel serial number conversion

mod address;
mod date;
mod value;

pub use address::{CellAddress, CellRange};
pub use date::excel_serial;
pub use value::CellValue;
