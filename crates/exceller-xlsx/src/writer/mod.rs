//! XLSX writer

mod sheet;

pub use sheet::SheetWriter;

use std::borrow::Cow;
use std::io::{Seek, Write};

use exceller_core::CellRange;

use crate::error::XlsxResult;
use crate::options::XlsxWriteOptions;
use crate::sheet_name::{sanitize_sheet_name, unique_sheet_name};
use crate::styles::XlsxStyleTable;

/// A worksheet registered in the workbook
#[derive(Debug)]
struct SheetEntry {
    name: String,
    filter_range: Option<CellRange>,
    written: bool,
}

/// Streaming XLSX workbook writer
///
/// Sheets are added one at a time with [`add_sheet`](Self::add_sheet); each
/// sheet part is written to the archive as soon as its table is finished.
/// The workbook, style and content-type parts are written by
/// [`finish`](Self::finish).
pub struct XlsxWorkbookWriter<W: Write + Seek> {
    zip: zip::ZipWriter<W>,
    options: XlsxWriteOptions,
    styles: XlsxStyleTable,
    sheets: Vec<SheetEntry>,
}

impl<W: Write + Seek> XlsxWorkbookWriter<W> {
    /// Start a workbook on `writer`
    pub fn new(writer: W, options: XlsxWriteOptions) -> Self {
        Self {
            zip: zip::ZipWriter::new(writer),
            options,
            styles: XlsxStyleTable::new(),
            sheets: Vec::new(),
        }
    }

    /// Add a worksheet; the name is sanitized and made unique
    pub fn add_sheet(&mut self, name: &str) -> SheetWriter<'_, W> {
        let sanitized = sanitize_sheet_name(name);
        let name = unique_sheet_name(&sanitized, self.sheets.iter().map(|s| s.name.as_str()));
        log::debug!("adding sheet {:?}", name);

        let index = self.sheets.len();
        self.sheets.push(SheetEntry {
            name,
            filter_range: None,
            written: false,
        });
        SheetWriter::new(self, index)
    }

    /// Names of the sheets added so far, in order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    /// Write the remaining workbook parts and return the underlying writer
    ///
    /// A workbook without sheets gets one empty `Sheet1`.
    pub fn finish(mut self) -> XlsxResult<W> {
        if self.sheets.is_empty() {
            self.sheets.push(SheetEntry {
                name: "Sheet1".to_string(),
                filter_range: None,
                written: false,
            });
        }

        for index in 0..self.sheets.len() {
            if !self.sheets[index].written {
                self.write_empty_worksheet(index)?;
            }
        }

        self.write_content_types()?;
        self.write_root_rels()?;
        self.write_workbook_xml()?;
        self.write_workbook_rels()?;
        self.write_styles_xml()?;

        Ok(self.zip.finish()?)
    }

    fn start_part(&mut self, name: String) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        self.zip.start_file(name, options)?;
        Ok(())
    }

    fn write_empty_worksheet(&mut self, index: usize) -> XlsxResult<()> {
        self.start_part(format!("xl/worksheets/sheet{}.xml", index + 1))?;
        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData/>
</worksheet>"#;
        self.zip.write_all(content.as_bytes())?;
        self.sheets[index].written = true;
        Ok(())
    }

    fn write_content_types(&mut self) -> XlsxResult<()> {
        self.start_part("[Content_Types].xml".to_string())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..self.sheets.len() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels(&mut self) -> XlsxResult<()> {
        self.start_part("_rels/.rels".to_string())?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml(&mut self) -> XlsxResult<()> {
        self.start_part("xl/workbook.xml".to_string())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in self.sheets.iter().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(&sheet.name),
                i + 1,
                i + 1
            ));
        }

        content.push_str("\n    </sheets>");

        // Auto filters need a hidden _FilterDatabase name per sheet
        let filters: Vec<(usize, &SheetEntry, CellRange)> = self
            .sheets
            .iter()
            .enumerate()
            .filter_map(|(i, sheet)| sheet.filter_range.map(|range| (i, sheet, range)))
            .collect();

        if !filters.is_empty() {
            content.push_str("\n    <definedNames>");
            for (i, sheet, range) in filters {
                let reference = format!(
                    "'{}'!{}",
                    sheet.name.replace('\'', "''"),
                    range.to_absolute_string()
                );
                content.push_str(&format!(
                    r#"
        <definedName name="_xlnm._FilterDatabase" localSheetId="{}" hidden="1">{}</definedName>"#,
                    i,
                    escape_xml(&reference)
                ));
            }
            content.push_str("\n    </definedNames>");
        }

        content.push_str("\n</workbook>");

        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels(&mut self) -> XlsxResult<()> {
        self.start_part("xl/_rels/workbook.xml.rels".to_string())?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..self.sheets.len() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        // Styles relationship
        let styles_rid = self.sheets.len() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        content.push_str("\n</Relationships>");

        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml(&mut self) -> XlsxResult<()> {
        self.start_part("xl/styles.xml".to_string())?;
        let xml = self.styles.to_styles_xml();
        self.zip.write_all(xml.as_bytes())?;
        Ok(())
    }
}

/// Whether `c` may appear in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape text for XML content or attributes, dropping characters XML 1.0
/// cannot carry
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        return quick_xml::escape::escape(s);
    }
    let cleaned: String = s.chars().filter(|&c| is_xml_char(c)).collect();
    Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
        assert_eq!(escape_xml("bell\u{7}\u{0}ok"), "bellok");
        assert_eq!(escape_xml("tab\there\nnewline"), "tab\there\nnewline");
    }
}
