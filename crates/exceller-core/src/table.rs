//! Conversion of one table from a record source into a sheet sink

use crate::convert::{ColumnStyles, ConvertedCell, RowConverter};
use crate::format::FormatTable;
use crate::header::{ColumnPlan, HeaderSource};
use crate::layout::{finalize_layout, SheetLayout};

/// A raw record; `None` marks a missing or empty field
pub type Record = Vec<Option<String>>;

/// Receiver of one converted table
///
/// Calls arrive in order: `begin_table`, `write_row` once per row with
/// increasing indices (the header row is row 0), then `finish_table`.
pub trait SheetSink {
    /// Error raised by the sink
    type Error;

    /// Start a table with its resolved columns and styles
    fn begin_table(&mut self, plan: &ColumnPlan, styles: &ColumnStyles) -> Result<(), Self::Error>;

    /// Write one row of cells
    fn write_row(&mut self, row: u32, cells: &[ConvertedCell]) -> Result<(), Self::Error>;

    /// Apply the final layout
    fn finish_table(&mut self, layout: &SheetLayout) -> Result<(), Self::Error>;
}

/// Outcome of converting one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of columns written
    pub column_count: usize,
    /// Number of data rows written, header excluded
    pub data_rows: u32,
    /// Index of the last written row
    pub last_row: u32,
}

/// Drives header resolution, row conversion and layout for one table
#[derive(Debug)]
pub struct TableConverter<'a> {
    formats: &'a FormatTable,
    header_source: &'a HeaderSource,
    column_cap: Option<usize>,
}

impl<'a> TableConverter<'a> {
    /// Create a converter sharing the run's formats and header source
    pub fn new(
        formats: &'a FormatTable,
        header_source: &'a HeaderSource,
        column_cap: Option<usize>,
    ) -> Self {
        Self {
            formats,
            header_source,
            column_cap,
        }
    }

    /// Convert every record into `sink`
    ///
    /// Errors from the record source or the sink abort the table.
    pub fn convert<I, E, S>(&self, records: I, sink: &mut S) -> Result<TableSummary, E>
    where
        I: IntoIterator<Item = Result<Record, E>>,
        S: SheetSink,
        E: From<S::Error>,
    {
        let mut records = records.into_iter();
        let first = records.next().transpose()?;

        let plan = ColumnPlan::resolve(first.as_deref(), self.column_cap, self.header_source);
        log::debug!(
            "table has {} columns, headers {:?}",
            plan.column_count,
            plan.headers
        );

        let converter = RowConverter::new(self.formats, plan.column_count);
        sink.begin_table(&plan, converter.styles())?;
        sink.write_row(0, &converter.header_row(&plan.headers))?;

        let mut last_row = 0u32;
        let pending = match first {
            Some(record) if !plan.skip_first_record => Some(record),
            _ => None,
        };

        for record in pending.into_iter().map(Ok).chain(records) {
            let record = record?;
            last_row += 1;
            sink.write_row(last_row, &converter.convert_record(&record))?;
        }

        let layout = finalize_layout(self.formats, plan.column_count, last_row);
        sink.finish_table(&layout)?;

        log::debug!("wrote {} data rows", last_row);
        Ok(TableSummary {
            column_count: plan.column_count,
            data_rows: last_row,
            last_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use crate::layout::ColumnWidth;
    use pretty_assertions::assert_eq;

    /// Sink that records everything it receives
    #[derive(Default)]
    struct MemorySink {
        plan: Option<ColumnPlan>,
        rows: Vec<(u32, Vec<CellValue>)>,
        layout: Option<SheetLayout>,
        fail_at_row: Option<u32>,
    }

    #[derive(Debug, PartialEq)]
    struct SinkFailed(u32);

    impl SheetSink for MemorySink {
        type Error = SinkFailed;

        fn begin_table(&mut self, plan: &ColumnPlan, _: &ColumnStyles) -> Result<(), SinkFailed> {
            self.plan = Some(plan.clone());
            Ok(())
        }

        fn write_row(&mut self, row: u32, cells: &[ConvertedCell]) -> Result<(), SinkFailed> {
            if self.fail_at_row == Some(row) {
                return Err(SinkFailed(row));
            }
            self.rows
                .push((row, cells.iter().map(|c| c.value.clone()).collect()));
            Ok(())
        }

        fn finish_table(&mut self, layout: &SheetLayout) -> Result<(), SinkFailed> {
            self.layout = Some(layout.clone());
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        Source(&'static str),
        Sink(SinkFailed),
    }

    impl From<SinkFailed> for TestError {
        fn from(err: SinkFailed) -> Self {
            TestError::Sink(err)
        }
    }

    fn records(rows: &[&[&str]]) -> Vec<Result<Record, TestError>> {
        rows.iter()
            .map(|row| Ok(row.iter().map(|f| Some(f.to_string())).collect()))
            .collect()
    }

    fn texts(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::string(*v)).collect()
    }

    #[test]
    fn test_read_header_from_data() {
        let formats = FormatTable::parse(Some("T;N"), false).unwrap();
        let source = HeaderSource::FirstRecord;
        let mut sink = MemorySink::default();

        let summary = TableConverter::new(&formats, &source, None)
            .convert(records(&[&["name", "age"], &["ann", "31"], &["bob", "x"]]), &mut sink)
            .unwrap();

        assert_eq!(
            summary,
            TableSummary {
                column_count: 2,
                data_rows: 2,
                last_row: 2
            }
        );
        assert_eq!(
            sink.rows,
            vec![
                (0, texts(&["name", "age"])),
                (1, vec![CellValue::string("ann"), CellValue::Number(31.0)]),
                (2, texts(&["bob", "x"])),
            ]
        );
        let layout = sink.layout.unwrap();
        assert_eq!(layout.filter_range.unwrap().to_a1_string(), "A1:B3");
        assert_eq!(layout.column_widths, vec![ColumnWidth::Auto; 2]);
    }

    #[test]
    fn test_synthesized_header_keeps_first_record() {
        let formats = FormatTable::default();
        let source = HeaderSource::Synthesized;
        let mut sink = MemorySink::default();

        TableConverter::new(&formats, &source, None)
            .convert(records(&[&["a", "b"], &["c", "d"]]), &mut sink)
            .unwrap();

        assert_eq!(sink.rows[0], (0, texts(&["Column0", "Column1"])));
        assert_eq!(sink.rows[1], (1, texts(&["a", "b"])));
        assert_eq!(sink.rows.len(), 3);
    }

    #[test]
    fn test_explicit_header_keeps_first_record() {
        let formats = FormatTable::default();
        let source = HeaderSource::Explicit(vec!["X".to_string()]);
        let mut sink = MemorySink::default();

        TableConverter::new(&formats, &source, None)
            .convert(records(&[&["a", "b"]]), &mut sink)
            .unwrap();

        assert_eq!(sink.rows[0], (0, texts(&["X", "Column1"])));
        assert_eq!(sink.rows[1], (1, texts(&["a", "b"])));
    }

    #[test]
    fn test_column_cap_and_short_records() {
        let formats = FormatTable::default();
        let source = HeaderSource::Synthesized;
        let mut sink = MemorySink::default();

        let summary = TableConverter::new(&formats, &source, Some(3))
            .convert(records(&[&["a", "b", "c", "d"], &["e"]]), &mut sink)
            .unwrap();

        assert_eq!(summary.column_count, 3);
        assert_eq!(sink.rows[1], (1, texts(&["a", "b", "c"])));
        assert_eq!(sink.rows[2], (2, texts(&["e", "", ""])));
    }

    #[test]
    fn test_empty_source() {
        let formats = FormatTable::default();
        let source = HeaderSource::FirstRecord;
        let mut sink = MemorySink::default();

        let summary = TableConverter::new(&formats, &source, None)
            .convert(Vec::<Result<Record, TestError>>::new(), &mut sink)
            .unwrap();

        assert_eq!(summary.column_count, 0);
        assert_eq!(summary.last_row, 0);
        assert_eq!(sink.rows, vec![(0, Vec::new())]);
        assert_eq!(sink.layout.unwrap().filter_range, None);
    }

    #[test]
    fn test_source_error_aborts() {
        let formats = FormatTable::default();
        let source = HeaderSource::Synthesized;
        let mut sink = MemorySink::default();

        let mut input = records(&[&["a"]]);
        input.push(Err(TestError::Source("broken line")));
        input.extend(records(&[&["b"]]));

        let err = TableConverter::new(&formats, &source, None)
            .convert(input, &mut sink)
            .unwrap_err();

        assert_eq!(err, TestError::Source("broken line"));
        assert!(sink.layout.is_none());
    }

    #[test]
    fn test_sink_error_aborts() {
        let formats = FormatTable::default();
        let source = HeaderSource::Synthesized;
        let mut sink = MemorySink {
            fail_at_row: Some(2),
            ..Default::default()
        };

        let err = TableConverter::new(&formats, &source, None)
            .convert(records(&[&["a"], &["b"], &["c"]]), &mut sink)
            .unwrap_err();

        assert_eq!(err, TestError::Sink(SinkFailed(2)));
        assert_eq!(sink.rows.len(), 2);
    }
}
