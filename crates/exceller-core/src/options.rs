//! Resolved conversion options

use crate::error::Result;
use crate::format::FormatTable;
use crate::header::HeaderSource;

/// Split a `;`-separated option value
///
/// Interior empty items are kept, trailing empty items are dropped, so
/// `"a;;b;"` yields `["a", "", "b"]` and `";;"` yields nothing.
pub fn split_list(value: &str) -> Vec<&str> {
    let mut items: Vec<&str> = value.split(';').collect();
    while items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}

/// Options that shape how every table of a run is converted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Column format option, e.g. `D;NW4000;T`
    pub column_formats: Option<String>,
    /// Reuse the last format for columns past the explicit list
    pub repeat_last_format: bool,
    /// Explicit header labels
    pub header_names: Option<Vec<String>>,
    /// Take the header labels from the first record
    pub read_header: bool,
    /// Upper bound on the number of columns per table
    pub column_count: Option<usize>,
}

impl ConversionOptions {
    /// Create options with everything off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column format option
    pub fn with_column_formats<S: Into<String>>(mut self, formats: S) -> Self {
        self.column_formats = Some(formats.into());
        self
    }

    /// Enable or disable repeat-last
    pub fn with_repeat_last_format(mut self, repeat: bool) -> Self {
        self.repeat_last_format = repeat;
        self
    }

    /// Set explicit header labels
    pub fn with_header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Read header labels from the first record
    pub fn with_read_header(mut self, read: bool) -> Self {
        self.read_header = read;
        self
    }

    /// Cap the number of columns
    pub fn with_column_count(mut self, count: usize) -> Self {
        self.column_count = Some(count);
        self
    }

    /// Parse the column format option into a [`FormatTable`]
    pub fn format_table(&self) -> Result<FormatTable> {
        FormatTable::parse(self.column_formats.as_deref(), self.repeat_last_format)
    }

    /// Where header labels come from
    ///
    /// Explicit names win over reading them from the data.
    pub fn header_source(&self) -> HeaderSource {
        match (&self.header_names, self.read_header) {
            (Some(names), _) => HeaderSource::Explicit(names.clone()),
            (None, true) => HeaderSource::FirstRecord,
            (None, false) => HeaderSource::Synthesized,
        }
    }
}
