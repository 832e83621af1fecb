//! Column format language
//!
//! A column format is written as one letter for the column type, an optional
//! display mask and an optional width suffix:
//!
//! ```text
//! D            date column, default display
//! Dyyyy-mm-dd  date column with a mask
//! NW4000       number column, explicit width
//! T0.00W3000   text column with mask and width
//! ```
//!
//! Several formats are joined with `;` and collected into a [`FormatTable`].

mod table;

pub use table::FormatTable;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Format of a column without an explicit format
pub(crate) static DEFAULT_FORMAT: ColumnFormat = ColumnFormat::text();

/// Widest explicit column width, 255 characters in 1/256 units
pub const MAX_COLUMN_WIDTH: u32 = 255 * 256;

static FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([BDHNT])([^W]*)(W([0-9]+))?$").expect("valid format grammar"));

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnType {
    /// `B`
    Boolean,
    /// `D`
    Date,
    /// `H`
    Hyperlink,
    /// `N`
    Number,
    /// `T`
    Text,
}

impl ColumnType {
    /// Map a type letter to its column type
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'B' => Some(ColumnType::Boolean),
            'D' => Some(ColumnType::Date),
            'H' => Some(ColumnType::Hyperlink),
            'N' => Some(ColumnType::Number),
            'T' => Some(ColumnType::Text),
            _ => None,
        }
    }

    /// The letter used for this type in a format token
    pub fn letter(self) -> char {
        match self {
            ColumnType::Boolean => 'B',
            ColumnType::Date => 'D',
            ColumnType::Hyperlink => 'H',
            ColumnType::Number => 'N',
            ColumnType::Text => 'T',
        }
    }
}

/// Format of one column: type, optional mask and optional width
///
/// `width` is `None` when the column is sized automatically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnFormat {
    /// Column type
    pub column_type: ColumnType,
    /// Display mask, never an empty string
    pub mask: Option<String>,
    /// Explicit width in 1/256 of a character
    pub width: Option<u32>,
}

impl ColumnFormat {
    /// Plain text column with automatic width
    pub const fn text() -> Self {
        Self {
            column_type: ColumnType::Text,
            mask: None,
            width: None,
        }
    }

    /// Create a format with no mask and automatic width
    pub const fn of(column_type: ColumnType) -> Self {
        Self {
            column_type,
            mask: None,
            width: None,
        }
    }

    /// Parse a single format token
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFormatSpecifier`] when the token does not
    /// match the grammar, or when the width is above [`MAX_COLUMN_WIDTH`].
    pub fn parse(token: &str) -> Result<Self> {
        let caps = FORMAT_RE
            .captures(token)
            .ok_or(Error::MalformedFormatSpecifier)?;

        let column_type = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(ColumnType::from_letter)
            .ok_or(Error::MalformedFormatSpecifier)?;

        let mask = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        let width = match caps.get(4) {
            Some(digits) => Some(
                digits
                    .as_str()
                    .parse::<u32>()
                    .ok()
                    .filter(|width| *width <= MAX_COLUMN_WIDTH)
                    .ok_or(Error::MalformedFormatSpecifier)?,
            ),
            None => None,
        };

        Ok(Self {
            column_type,
            mask,
            width,
        })
    }

    /// Whether the column is sized automatically
    pub fn is_auto_width(&self) -> bool {
        self.width.is_none()
    }
}

impl Default for ColumnFormat {
    fn default() -> Self {
        Self::text()
    }
}

impl FromStr for ColumnFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ColumnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_type.letter())?;
        if let Some(mask) = &self.mask {
            write!(f, "{}", mask)?;
        }
        if let Some(width) = self.width {
            write!(f, "W{}", width)?;
        }
        Ok(())
    }
}
