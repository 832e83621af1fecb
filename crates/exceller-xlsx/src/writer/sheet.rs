//! Worksheet part writer

use std::io::{Seek, Write};

use exceller_core::{
    excel_serial, CellAddress, CellValue, ColumnPlan, ColumnStyles, ColumnWidth, ConvertedCell,
    SheetLayout, SheetSink, MAX_COLS, MAX_COLUMN_WIDTH, MAX_ROWS,
};

use super::{escape_xml, XlsxWorkbookWriter};
use crate::error::{XlsxError, XlsxResult};

/// Writes one table into a worksheet of an [`XlsxWorkbookWriter`]
///
/// Rows are buffered as XML until [`SheetSink::finish_table`], when column
/// widths are known and the worksheet part is written to the archive.
pub struct SheetWriter<'a, W: Write + Seek> {
    workbook: &'a mut XlsxWorkbookWriter<W>,
    index: usize,
    /// Local style index -> workbook xf id
    xf_ids: Vec<u32>,
    sheet_data: String,
    hyperlinks: Vec<(String, String)>,
    /// Widest rendered line per column, in characters
    content_widths: Vec<usize>,
}

impl<'a, W: Write + Seek> SheetWriter<'a, W> {
    pub(super) fn new(workbook: &'a mut XlsxWorkbookWriter<W>, index: usize) -> Self {
        Self {
            workbook,
            index,
            xf_ids: Vec::new(),
            sheet_data: String::new(),
            hyperlinks: Vec::new(),
            content_widths: Vec::new(),
        }
    }

    /// Final name of the sheet
    pub fn name(&self) -> &str {
        &self.workbook.sheets[self.index].name
    }

    fn write_cell(&mut self, row: u32, col: u32, cell: &ConvertedCell) {
        let cell_ref = CellAddress::new(row, col).to_a1_string();

        let xf_id = self.xf_ids.get(cell.style as usize).copied().unwrap_or(0);
        let style_attr = if xf_id != 0 {
            format!(" s=\"{}\"", xf_id)
        } else {
            String::new()
        };

        match &cell.value {
            CellValue::Number(n) => {
                self.sheet_data.push_str(&format!(
                    "\n            <c r=\"{}\"{}><v>{}</v></c>",
                    cell_ref, style_attr, n
                ));
            }
            CellValue::Boolean(b) => {
                self.sheet_data.push_str(&format!(
                    "\n            <c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                    cell_ref,
                    style_attr,
                    if *b { 1 } else { 0 }
                ));
            }
            CellValue::Date(dt) => match excel_serial(*dt) {
                Some(serial) => {
                    self.sheet_data.push_str(&format!(
                        "\n            <c r=\"{}\"{}><v>{}</v></c>",
                        cell_ref, style_attr, serial
                    ));
                }
                None => self.push_inline_string(&cell_ref, &style_attr, &cell.value.to_string()),
            },
            CellValue::Hyperlink { text, target } => {
                self.push_inline_string(&cell_ref, &style_attr, text);
                if !target.is_empty() {
                    self.hyperlinks.push((cell_ref.clone(), target.clone()));
                }
            }
            CellValue::String(s) => self.push_inline_string(&cell_ref, &style_attr, s),
        }
    }

    fn push_inline_string(&mut self, cell_ref: &str, style_attr: &str, text: &str) {
        let space = if text.trim() != text {
            " xml:space=\"preserve\""
        } else {
            ""
        };
        self.sheet_data.push_str(&format!(
            "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t{}>{}</t></is></c>",
            cell_ref,
            style_attr,
            space,
            escape_xml(text)
        ));
    }

    fn track_width(&mut self, col: usize, value: &CellValue) {
        let rendered = value.to_string();
        let width = rendered.lines().map(display_width).max().unwrap_or(0);
        if let Some(current) = self.content_widths.get_mut(col) {
            *current = (*current).max(width);
        }
    }

    fn cols_xml(&self, layout: &SheetLayout) -> String {
        if layout.column_widths.is_empty() {
            return String::new();
        }

        let autofit = self.workbook.options.autofit;
        let mut xml = String::from("\n    <cols>");
        for (i, width) in layout.column_widths.iter().enumerate() {
            let chars = match width {
                ColumnWidth::Fixed(units) => f64::from((*units).min(MAX_COLUMN_WIDTH)) / 256.0,
                ColumnWidth::Auto => {
                    let content = self.content_widths.get(i).copied().unwrap_or(0);
                    autofit.fit(content) as f64
                }
            };
            xml.push_str(&format!(
                "\n        <col min=\"{}\" max=\"{}\" width=\"{}\" customWidth=\"1\"/>",
                i + 1,
                i + 1,
                chars
            ));
        }
        xml.push_str("\n    </cols>");
        xml
    }

    fn write_worksheet_rels(&mut self) -> XlsxResult<()> {
        self.workbook.start_part(format!(
            "xl/worksheets/_rels/sheet{}.xml.rels",
            self.index + 1
        ))?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (i, (_, target)) in self.hyperlinks.iter().enumerate() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="{}" TargetMode="External"/>"#,
                i + 1,
                escape_xml(target)
            ));
        }
        content.push_str("\n</Relationships>");

        self.workbook.zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Approximate display width: non-ASCII characters count as 1.6 columns
fn display_width(line: &str) -> usize {
    let total = line.chars().count();
    let ascii = line.chars().filter(char::is_ascii).count();
    ascii + ((total - ascii) as f64 * 1.6).round() as usize
}

impl<W: Write + Seek> SheetSink for SheetWriter<'_, W> {
    type Error = XlsxError;

    fn begin_table(&mut self, plan: &ColumnPlan, styles: &ColumnStyles) -> XlsxResult<()> {
        if plan.column_count > MAX_COLS as usize {
            return Err(XlsxError::ColumnLimit(plan.column_count));
        }
        self.xf_ids = self.workbook.styles.register(styles);
        self.content_widths = vec![0; plan.column_count];
        Ok(())
    }

    fn write_row(&mut self, row: u32, cells: &[ConvertedCell]) -> XlsxResult<()> {
        if row >= MAX_ROWS {
            return Err(XlsxError::RowLimit(row.saturating_add(1)));
        }
        if cells.is_empty() {
            return Ok(());
        }

        self.sheet_data
            .push_str(&format!("\n        <row r=\"{}\">", row + 1));
        for (col, cell) in cells.iter().enumerate() {
            self.write_cell(row, col as u32, cell);
            self.track_width(col, &cell.value);
        }
        self.sheet_data.push_str("\n        </row>");
        Ok(())
    }

    fn finish_table(&mut self, layout: &SheetLayout) -> XlsxResult<()> {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        content.push_str(&self.cols_xml(layout));

        if self.sheet_data.is_empty() {
            content.push_str("\n    <sheetData/>");
        } else {
            content.push_str("\n    <sheetData>");
            content.push_str(&self.sheet_data);
            content.push_str("\n    </sheetData>");
        }

        if let Some(range) = layout.filter_range {
            content.push_str(&format!("\n    <autoFilter ref=\"{}\"/>", range));
        }

        if !self.hyperlinks.is_empty() {
            content.push_str("\n    <hyperlinks>");
            for (i, (cell_ref, _)) in self.hyperlinks.iter().enumerate() {
                content.push_str(&format!(
                    "\n        <hyperlink ref=\"{}\" r:id=\"rId{}\"/>",
                    cell_ref,
                    i + 1
                ));
            }
            content.push_str("\n    </hyperlinks>");
        }

        content.push_str("\n</worksheet>");

        self.workbook
            .start_part(format!("xl/worksheets/sheet{}.xml", self.index + 1))?;
        self.workbook.zip.write_all(content.as_bytes())?;

        if !self.hyperlinks.is_empty() {
            self.write_worksheet_rels()?;
        }

        let entry = &mut self.workbook.sheets[self.index];
        entry.filter_range = layout.filter_range;
        entry.written = true;

        log::debug!(
            "wrote sheet {:?} with {} hyperlinks",
            entry.name,
            self.hyperlinks.len()
        );
        Ok(())
    }
}
