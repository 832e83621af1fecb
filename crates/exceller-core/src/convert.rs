//! Row conversion
//!
//! Turns raw text fields into typed [`CellValue`]s under their column format.
//! Coercion never fails: a date or number that does not parse is kept as the
//! original text.

use chrono::NaiveDateTime;

use crate::cell::{excel_serial, CellValue};
use crate::format::{ColumnFormat, ColumnType, FormatTable, DEFAULT_FORMAT};
use crate::style::{Color, NumberFormat, Style, StylePool};

/// Accepted date patterns, tried in order
const DATE_PATTERNS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Coerce one raw field under a column format
pub fn coerce(raw: &str, format: &ColumnFormat) -> CellValue {
    match format.column_type {
        ColumnType::Boolean => CellValue::Boolean(raw.eq_ignore_ascii_case("true")),
        ColumnType::Date => parse_date(raw)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::string(raw)),
        ColumnType::Hyperlink => CellValue::hyperlink(raw),
        ColumnType::Number => parse_number(raw)
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::string(raw)),
        ColumnType::Text => CellValue::string(raw),
    }
}

/// Dates Excel cannot represent are treated as unparseable
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(raw, pattern).ok())
        .filter(|dt| excel_serial(*dt).is_some())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Style applied to every data cell of a column
pub fn column_style(format: &ColumnFormat) -> Style {
    let mut style = Style::new().wrap_text(true);

    style = match (&format.mask, format.column_type) {
        (Some(mask), _) => style.number_format(mask.clone()),
        (None, ColumnType::Date) => style.builtin_number_format(NumberFormat::ID_DATETIME),
        (None, _) => style,
    };

    if format.column_type == ColumnType::Hyperlink {
        style = style.underline(true).font_color(Color::BLUE);
    }
    style
}

/// Styles used by one table, deduplicated
///
/// Cells refer to styles by their index in [`ColumnStyles::pool`].
#[derive(Debug)]
pub struct ColumnStyles {
    pool: StylePool,
    header: u32,
    columns: Vec<u32>,
}

impl ColumnStyles {
    /// Build the styles of `column_count` columns
    pub fn new(formats: &FormatTable, column_count: usize) -> Self {
        let mut pool = StylePool::new();
        let header = pool.get_or_insert(Style::header());
        let columns = (0..column_count)
            .map(|i| pool.get_or_insert(column_style(formats.resolve(i))))
            .collect();
        Self {
            pool,
            header,
            columns,
        }
    }

    /// All styles referenced by the table's cells
    pub fn pool(&self) -> &StylePool {
        &self.pool
    }

    /// Style index of header cells
    pub fn header(&self) -> u32 {
        self.header
    }

    /// Style index of the data cells in column `index`
    pub fn column(&self, index: usize) -> u32 {
        self.columns.get(index).copied().unwrap_or(0)
    }
}

/// A typed cell and the index of its style in the table's [`ColumnStyles`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedCell {
    /// Typed value
    pub value: CellValue,
    /// Style index
    pub style: u32,
}

/// One converted row, exactly one cell per column
pub type ConvertedRow = Vec<ConvertedCell>;

/// Converts records of one table
#[derive(Debug)]
pub struct RowConverter<'a> {
    formats: Vec<&'a ColumnFormat>,
    styles: ColumnStyles,
}

impl<'a> RowConverter<'a> {
    /// Create a converter for a table of `column_count` columns
    pub fn new(formats: &'a FormatTable, column_count: usize) -> Self {
        Self {
            formats: (0..column_count).map(|i| formats.resolve(i)).collect(),
            styles: ColumnStyles::new(formats, column_count),
        }
    }

    /// Number of columns in every converted row
    pub fn column_count(&self) -> usize {
        self.formats.len()
    }

    /// Styles referenced by converted cells
    pub fn styles(&self) -> &ColumnStyles {
        &self.styles
    }

    /// Convert one field; a missing field is treated as an empty string
    pub fn convert_field(&self, raw: Option<&str>, column: usize) -> ConvertedCell {
        let format = self
            .formats
            .get(column)
            .copied()
            .unwrap_or(&DEFAULT_FORMAT);
        ConvertedCell {
            value: coerce(raw.unwrap_or(""), format),
            style: self.styles.column(column),
        }
    }

    /// Convert a record, padding or truncating it to the column count
    pub fn convert_record(&self, record: &[Option<String>]) -> ConvertedRow {
        (0..self.column_count())
            .map(|i| {
                let raw = record.get(i).and_then(|field| field.as_deref());
                self.convert_field(raw, i)
            })
            .collect()
    }

    /// Header row cells, bold text
    pub fn header_row(&self, headers: &[String]) -> ConvertedRow {
        headers
            .iter()
            .map(|label| ConvertedCell {
                value: CellValue::string(label.as_str()),
                style: self.styles.header(),
            })
            .collect()
    }
}
