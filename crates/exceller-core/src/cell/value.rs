//! Cell value types

use std::fmt;

use chrono::NaiveDateTime;

/// Display pattern used when a date value is rendered as text
const DATE_DISPLAY_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Represents the typed value produced for a cell
///
/// One variant per column type. A field that fails to coerce under its
/// column type is carried as [`CellValue::String`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Boolean value (TRUE/FALSE)
    Boolean(bool),

    /// Date and time, written as an Excel serial number
    Date(NaiveDateTime),

    /// Hyperlink with its display text and (unvalidated) target
    Hyperlink {
        /// Visible cell text
        text: String,
        /// Link address
        target: String,
    },

    /// Numeric value
    Number(f64),

    /// String value
    String(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a hyperlink whose text and target are the same string
    pub fn hyperlink<S: Into<String>>(s: S) -> Self {
        let text = s.into();
        CellValue::Hyperlink {
            target: text.clone(),
            text,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::String(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(dt) => write!(f, "{}", dt.format(DATE_DISPLAY_PATTERN)),
            CellValue::Hyperlink { text, .. } => write!(f, "{}", text),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
        }
    }
}
