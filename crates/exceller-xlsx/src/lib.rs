//! # exceller-xlsx
//!
//! XLSX (Office Open XML) workbook writer for exceller.
//!
//! [`XlsxWorkbookWriter`] hands out one [`SheetWriter`] per table. Each sheet
//! writer is an [`exceller_core::SheetSink`], so a table converter can stream
//! rows straight into it.

pub mod error;
pub mod options;
pub mod writer;

mod sheet_name;
mod styles;

pub use error::{XlsxError, XlsxResult};
pub use options::{AutofitPolicy, XlsxWriteOptions};
pub use sheet_name::sanitize_sheet_name;
pub use writer::{SheetWriter, XlsxWorkbookWriter};
