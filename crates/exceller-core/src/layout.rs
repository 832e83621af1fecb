//! Sheet layout computed after the last row of a table

use crate::cell::CellRange;
use crate::format::FormatTable;

/// Width of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Explicit width in 1/256 of a character
    Fixed(u32),
    /// Sized to fit the column's content
    Auto,
}

/// Column widths and filter range of a finished table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// One entry per column
    pub column_widths: Vec<ColumnWidth>,
    /// Auto filter range, `None` for a table without columns
    pub filter_range: Option<CellRange>,
}

/// Compute the layout of a table
///
/// `last_row` is the index of the last written row, the header row being 0.
pub fn finalize_layout(formats: &FormatTable, column_count: usize, last_row: u32) -> SheetLayout {
    let column_widths = (0..column_count)
        .map(|i| match formats.resolve(i).width {
            Some(width) => ColumnWidth::Fixed(width),
            None => ColumnWidth::Auto,
        })
        .collect();

    let filter_range = column_count
        .checked_sub(1)
        .map(|last_col| CellRange::from_indices(0, 0, last_row, last_col as u32));

    SheetLayout {
        column_widths,
        filter_range,
    }
}
