//! Header resolution
//!
//! Header labels come from one of three places: an explicit list, the first
//! record of the table, or synthesized `Column<i>` names. Only reading from
//! the first record consumes that record.

/// Label given to a column without a header of its own
pub fn default_header(index: usize) -> String {
    format!("Column{}", index)
}

/// Source of the header labels of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSource {
    /// User-supplied labels
    Explicit(Vec<String>),
    /// Labels taken from the first record, which is not emitted as data
    FirstRecord,
    /// `Column0`, `Column1`, ...
    Synthesized,
}

/// Column count and header labels of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Number of columns written for every row
    pub column_count: usize,
    /// Header labels, exactly `column_count` of them
    pub headers: Vec<String>,
    /// Whether the first record was consumed as the header row
    pub skip_first_record: bool,
}

impl ColumnPlan {
    /// Resolve the plan for a table
    ///
    /// `first_record` is the first record of the table, if any. The column
    /// count is its field count, lowered to `column_cap` when given.
    pub fn resolve(
        first_record: Option<&[Option<String>]>,
        column_cap: Option<usize>,
        source: &HeaderSource,
    ) -> Self {
        let natural = first_record.map_or(0, <[_]>::len);
        let column_count = column_cap.map_or(natural, |cap| natural.min(cap));

        let (headers, skip_first_record) = match source {
            HeaderSource::Explicit(names) => (fill(column_count, |i| names.get(i).cloned()), false),
            HeaderSource::FirstRecord => match first_record {
                Some(record) => (
                    fill(column_count, |i| {
                        record
                            .get(i)
                            .map(|field| field.clone().unwrap_or_default())
                    }),
                    true,
                ),
                None => (Vec::new(), false),
            },
            HeaderSource::Synthesized => (fill(column_count, |_| None), false),
        };

        Self {
            column_count,
            headers,
            skip_first_record,
        }
    }
}

fn fill(count: usize, mut label: impl FnMut(usize) -> Option<String>) -> Vec<String> {
    (0..count)
        .map(|i| label(i).unwrap_or_else(|| default_header(i)))
        .collect()
}
