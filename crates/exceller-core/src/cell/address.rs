//! Cell references in A1 notation

use std::fmt;

/// Zero-based position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    pub row: u32,
    pub col: u32,
}

impl CellAddress {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Column letters of a zero-based column index: `0 -> A`, `26 -> AA`
    pub fn column_letters(col: u32) -> String {
        let mut letters = Vec::new();
        let mut n = col + 1;
        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        letters.iter().rev().map(|&b| b as char).collect()
    }

    /// Relative reference, e.g. `B3`
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_letters(self.col), self.row + 1)
    }

    /// Absolute reference, e.g. `$B$3`
    pub fn to_absolute_string(&self) -> String {
        format!("${}${}", Self::column_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

/// Inclusive rectangle of cells, top-left to bottom-right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub start: CellAddress,
    pub end: CellAddress,
}

impl CellRange {
    /// Range between two corners in any order
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// `A1:C10`
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }

    /// `$A$1:$C$10`, the form used in defined names
    pub fn to_absolute_string(&self) -> String {
        format!(
            "{}:{}",
            self.start.to_absolute_string(),
            self.end.to_absolute_string()
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}
