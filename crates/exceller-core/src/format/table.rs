//! Ordered column formats with repeat-last resolution

use super::{ColumnFormat, DEFAULT_FORMAT};
use crate::error::{Error, Result};
use crate::options::split_list;

/// Formats for the columns of a table, in column order
///
/// Shared read-only by every row of every table in a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatTable {
    formats: Vec<ColumnFormat>,
    repeat_last: bool,
}

impl FormatTable {
    /// Create a table from already parsed formats
    pub fn new(formats: Vec<ColumnFormat>, repeat_last: bool) -> Self {
        Self {
            formats,
            repeat_last,
        }
    }

    /// Parse the column format option
    ///
    /// `None` yields an empty table where every column is plain text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFormatSpecifier`] if any token is malformed
    /// or the option holds no tokens at all.
    pub fn parse(pattern: Option<&str>, repeat_last: bool) -> Result<Self> {
        let Some(pattern) = pattern else {
            return Ok(Self::new(Vec::new(), repeat_last));
        };

        let tokens = split_list(pattern);
        if tokens.is_empty() {
            return Err(Error::MalformedFormatSpecifier);
        }

        let formats = tokens
            .into_iter()
            .map(ColumnFormat::parse)
            .collect::<Result<Vec<_>>>()?;

        log::debug!("parsed {} column formats from {:?}", formats.len(), pattern);
        Ok(Self::new(formats, repeat_last))
    }

    /// Format that applies to the column at `index`
    pub fn resolve(&self, index: usize) -> &ColumnFormat {
        match self.formats.get(index) {
            Some(format) => format,
            None if self.repeat_last => self.formats.last().unwrap_or(&DEFAULT_FORMAT),
            None => &DEFAULT_FORMAT,
        }
    }

    /// Whether columns past the explicit list reuse the last format
    pub fn repeat_last(&self) -> bool {
        self.repeat_last
    }

    /// Number of explicit formats
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Check if no format was supplied
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Iterate over the explicit formats
    pub fn iter(&self) -> impl Iterator<Item = &ColumnFormat> {
        self.formats.iter()
    }
}
