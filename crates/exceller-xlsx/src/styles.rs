//! XLSX styles (styles.xml) writer

use std::collections::HashMap;

use exceller_core::style::{FontStyle, NumberFormat, Style, StylePool};
use exceller_core::ColumnStyles;

use crate::writer::escape_xml;

/// First id available for custom number formats
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

const DEFAULT_FONT_NAME: &str = "Calibri";
const DEFAULT_FONT_SIZE: u32 = 11;

/// Workbook-wide, deduplicated cell styles
///
/// Pool indices are the `cellXfs` ids written into cells.
#[derive(Debug, Default)]
pub(crate) struct XlsxStyleTable {
    pool: StylePool,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    num_fmt_id: u32,
}

impl XlsxStyleTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a table's styles, returning the xf id of each of its style indices
    pub(crate) fn register(&mut self, styles: &ColumnStyles) -> Vec<u32> {
        styles
            .pool()
            .iter()
            .map(|(_, style)| self.pool.get_or_insert(style.clone()))
            .collect()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut font_ids: HashMap<&FontStyle, u32> = HashMap::new();
        let mut fonts: Vec<&FontStyle> = Vec::new();

        let mut numfmt_ids: HashMap<&str, u32> = HashMap::new();
        let mut numfmts: Vec<(u32, &str)> = Vec::new();
        let mut next_numfmt_id = FIRST_CUSTOM_NUMFMT_ID;

        let mut resolved: Vec<(&Style, ResolvedXfIds)> = Vec::with_capacity(self.pool.len());

        for (_, style) in self.pool.iter() {
            let font_id = *font_ids.entry(&style.font).or_insert_with(|| {
                fonts.push(&style.font);
                fonts.len() as u32 - 1
            });

            let num_fmt_id = match &style.number_format {
                NumberFormat::General => 0,
                NumberFormat::BuiltIn(id) => *id,
                NumberFormat::Custom(code) => *numfmt_ids.entry(code.as_str()).or_insert_with(|| {
                    let id = next_numfmt_id;
                    next_numfmt_id += 1;
                    numfmts.push((id, code.as_str()));
                    id
                }),
            };

            resolved.push((
                style,
                ResolvedXfIds {
                    font_id,
                    num_fmt_id,
                },
            ));
        }

        let mut xml = String::new();
        xml.push_str(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !numfmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
            for (id, code) in &numfmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape_xml(code)
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        // Fonts
        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        // Excel requires the first two fills to be none and gray125
        xml.push_str(
            r#"
  <fills count="2">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
  </fills>
  <borders count="1">
    <border><left/><right/><top/><bottom/><diagonal/></border>
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        // cellXfs
        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", resolved.len()));
        for (style, ids) in &resolved {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.underline {
        s.push_str("<u/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", DEFAULT_FONT_SIZE));
    if let Some(argb) = font.color.to_argb_hex() {
        s.push_str(&format!("<color rgb=\"{}\"/>", argb));
    }
    s.push_str(&format!("<name val=\"{}\"/>", DEFAULT_FONT_NAME));
    s.push_str("</font>");
    s
}

fn write_xf(style: &Style, ids: ResolvedXfIds) -> String {
    let mut xf = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"0\" borderId=\"0\" xfId=\"0\"",
        ids.num_fmt_id, ids.font_id
    );
    if ids.num_fmt_id != 0 {
        xf.push_str(" applyNumberFormat=\"1\"");
    }
    if style.font != FontStyle::default() {
        xf.push_str(" applyFont=\"1\"");
    }
    if style.wrap_text {
        xf.push_str(" applyAlignment=\"1\"><alignment wrapText=\"1\"/></xf>");
    } else {
        xf.push_str("/>");
    }
    xf
}

#[cfg(test)]
mod tests {
    use super::*;
    use exceller_core::FormatTable;

    fn table_for(pattern: &str, columns: usize) -> (XlsxStyleTable, Vec<u32>, ColumnStyles) {
        let formats = FormatTable::parse(Some(pattern), false).unwrap();
        let styles = ColumnStyles::new(&formats, columns);
        let mut table = XlsxStyleTable::new();
        let map = table.register(&styles);
        (table, map, styles)
    }

    #[test]
    fn test_register_maps_local_indices() {
        let (mut table, map, styles) = table_for("N;H", 2);
        assert_eq!(map.len(), styles.pool().len());
        assert_eq!(map[0], 0);

        // Registering the same styles again reuses the xf ids
        let again = table.register(&styles);
        assert_eq!(map, again);
    }

    #[test]
    fn test_custom_number_formats_start_at_164() {
        let (table, _, _) = table_for("Dyyyy-mm-dd;N0.00;Tyyyy-mm-dd", 3);
        let xml = table.to_styles_xml();
        assert!(xml.contains(r#"<numFmts count="2">"#));
        assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="yyyy-mm-dd"/>"#));
        assert!(xml.contains(r#"<numFmt numFmtId="165" formatCode="0.00"/>"#));
    }

    #[test]
    fn test_date_without_mask_uses_builtin() {
        let (table, _, _) = table_for("D", 1);
        let xml = table.to_styles_xml();
        assert!(!xml.contains("<numFmts"));
        assert!(xml.contains(r#"numFmtId="22""#));
    }

    #[test]
    fn test_fonts() {
        let (table, _, _) = table_for("H;T", 2);
        let xml = table.to_styles_xml();
        // default, bold header, blue underlined hyperlink
        assert!(xml.contains(r#"<fonts count="3">"#));
        assert!(xml.contains("<font><b/><sz val=\"11\"/><name val=\"Calibri\"/></font>"));
        assert!(xml.contains(
            "<font><u/><sz val=\"11\"/><color rgb=\"FF0000FF\"/><name val=\"Calibri\"/></font>"
        ));
    }

    #[test]
    fn test_wrap_text_alignment() {
        let (table, _, _) = table_for("T", 1);
        let xml = table.to_styles_xml();
        assert!(xml.contains(r#"applyAlignment="1"><alignment wrapText="1"/></xf>"#));
    }

    #[test]
    fn test_default_xf_has_no_apply_flags() {
        let xf = write_xf(
            &Style::default(),
            ResolvedXfIds {
                font_id: 0,
                num_fmt_id: 0,
            },
        );
        assert_eq!(
            xf,
            r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#
        );
    }

    #[test]
    fn test_escapes_masks() {
        let (table, _, _) = table_for("N\"<\"0", 1);
        let xml = table.to_styles_xml();
        assert!(xml.contains(r#"formatCode="&quot;&lt;&quot;0""#));
    }
}
