//! Conversion of CSV sources into one workbook

use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use exceller_core::{ConversionOptions, FormatTable, HeaderSource, TableConverter};
use exceller_csv::{CsvReadOptions, CsvRecordSource};
use exceller_xlsx::{XlsxWorkbookWriter, XlsxWriteOptions};

use crate::error::{Error, Result};

/// Extension given to generated workbooks
const EXCEL_EXTENSION: &str = "xlsx";

/// Summary of one converted source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// Path or name of the CSV source
    pub source: String,
    /// Final worksheet name
    pub sheet_name: String,
    /// Number of columns written
    pub column_count: usize,
    /// Number of data rows written, header excluded
    pub data_rows: u32,
}

/// Summary of a conversion run saved to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Path of the saved workbook
    pub destination: PathBuf,
    /// One entry per source, in order
    pub tables: Vec<TableReport>,
}

/// Converts CSV sources into a workbook, one sheet per source
///
/// Options are validated when the converter is built, so a malformed
/// column format is reported before any file is opened.
///
/// ```no_run
/// use exceller::{ConversionOptions, Converter};
///
/// let options = ConversionOptions::new()
///     .with_column_formats("D;NW4000;T")
///     .with_read_header(true);
/// let report = Converter::new(options)?.convert_files(&["sales.csv"], None)?;
/// println!("saved {}", report.destination.display());
/// # Ok::<(), exceller::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    formats: FormatTable,
    header_source: HeaderSource,
    column_count: Option<usize>,
    csv_options: CsvReadOptions,
    xlsx_options: XlsxWriteOptions,
}

impl Converter {
    /// Build a converter from run options
    ///
    /// # Errors
    ///
    /// Fails if the column format option is malformed.
    pub fn new(options: ConversionOptions) -> Result<Self> {
        let formats = options.format_table()?;
        Ok(Self {
            formats,
            header_source: options.header_source(),
            column_count: options.column_count,
            csv_options: CsvReadOptions::default(),
            xlsx_options: XlsxWriteOptions::default(),
        })
    }

    /// Set how CSV sources are parsed
    pub fn with_csv_options(mut self, options: CsvReadOptions) -> Self {
        self.csv_options = options;
        self
    }

    /// Set how the workbook is written
    pub fn with_xlsx_options(mut self, options: XlsxWriteOptions) -> Self {
        self.xlsx_options = options;
        self
    }

    /// The parsed column formats
    pub fn formats(&self) -> &FormatTable {
        &self.formats
    }

    /// Convert CSV files and save the workbook
    ///
    /// Without a `destination` the workbook is saved as `./<stem>.xlsx`,
    /// named after the first source. Missing parent directories are
    /// created. The workbook is written to a temporary file next to the
    /// destination and moved into place once complete, so a failed run
    /// leaves no partial output behind.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoSources`] if `sources` is empty, and with the
    /// first source, write or IO error otherwise.
    pub fn convert_files<P: AsRef<Path>>(
        &self,
        sources: &[P],
        destination: Option<&Path>,
    ) -> Result<ConversionReport> {
        let first = sources.first().ok_or(Error::NoSources)?;
        let destination = match destination {
            Some(path) => in_current_dir(path),
            None => default_destination(first.as_ref()),
        };

        let dir = destination
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let opened = self.open_sources(sources)?;

        std::fs::create_dir_all(dir)?;
        let temp = tempfile::NamedTempFile::new_in(dir)?;
        let (mut temp, tables) = self.write_workbook(temp, opened)?;

        log::info!("Saving Excel file...");
        temp.flush()?;
        temp.persist(&destination).map_err(|err| err.error)?;
        log::info!("Successfully saved {}", destination.display());

        Ok(ConversionReport {
            destination,
            tables,
        })
    }

    /// Convert CSV files into a workbook written to `writer`
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoSources`] if `sources` is empty. Every source
    /// is opened before the first sheet is written.
    pub fn convert_to_writer<P, W>(&self, sources: &[P], writer: W) -> Result<(W, Vec<TableReport>)>
    where
        P: AsRef<Path>,
        W: Write + Seek,
    {
        if sources.is_empty() {
            return Err(Error::NoSources);
        }
        let opened = self.open_sources(sources)?;
        self.write_workbook(writer, opened)
    }

    /// Convert in-memory CSV inputs, each given with its sheet name
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoSources`] if `sources` is empty.
    pub fn convert_readers<S, R, W>(
        &self,
        sources: Vec<(S, R)>,
        writer: W,
    ) -> Result<(W, Vec<TableReport>)>
    where
        S: Into<String>,
        R: Read,
        W: Write + Seek,
    {
        if sources.is_empty() {
            return Err(Error::NoSources);
        }
        let inputs = sources
            .into_iter()
            .map(|(name, reader)| {
                let name = name.into();
                let records = CsvRecordSource::from_reader(reader, &self.csv_options);
                (name.clone(), name, records)
            })
            .collect();
        self.write_workbook(writer, inputs)
    }

    fn open_sources<P: AsRef<Path>>(
        &self,
        sources: &[P],
    ) -> Result<Vec<(String, String, CsvRecordSource<std::fs::File>)>> {
        sources
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let records = CsvRecordSource::open(path, &self.csv_options)?;
                Ok((path.display().to_string(), sheet_name_for(path), records))
            })
            .collect()
    }

    /// Write one sheet per input, then the remaining workbook parts
    fn write_workbook<W, R>(
        &self,
        writer: W,
        inputs: Vec<(String, String, CsvRecordSource<R>)>,
    ) -> Result<(W, Vec<TableReport>)>
    where
        W: Write + Seek,
        R: Read,
    {
        log::info!("Starting conversion");
        let mut workbook = XlsxWorkbookWriter::new(writer, self.xlsx_options.clone());
        let mut tables = Vec::with_capacity(inputs.len());

        for (source, name, records) in inputs {
            log::info!("Converting {} to excel...", source);
            let mut sheet = workbook.add_sheet(&name);
            let summary = TableConverter::new(&self.formats, &self.header_source, self.column_count)
                .convert(records.map(|record| record.map_err(Error::from)), &mut sheet)?;

            let report = TableReport {
                source,
                sheet_name: sheet.name().to_string(),
                column_count: summary.column_count,
                data_rows: summary.data_rows,
            };
            log::debug!(
                "{} -> sheet {:?}: {} columns, {} rows",
                report.source,
                report.sheet_name,
                report.column_count,
                report.data_rows
            );
            tables.push(report);
        }

        log::info!("Conversion complete. Starting saving process");
        let writer = workbook.finish()?;
        Ok((writer, tables))
    }
}

/// Default output path for a source: `./<stem>.xlsx`
pub fn default_destination(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    Path::new(".").join(format!("{}.{}", stem, EXCEL_EXTENSION))
}

/// Place a bare file name in the current directory
fn in_current_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(".").join(path),
    }
}

fn sheet_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_destination() {
        assert_eq!(
            default_destination(Path::new("/data/in/sales.csv")),
            PathBuf::from("./sales.xlsx")
        );
        assert_eq!(
            default_destination(Path::new("report.2024.csv")),
            PathBuf::from("./report.2024.xlsx")
        );
        assert_eq!(
            default_destination(Path::new("plain")),
            PathBuf::from("./plain.xlsx")
        );
    }

    #[test]
    fn test_bare_destination_goes_to_current_dir() {
        assert_eq!(
            in_current_dir(Path::new("out.xlsx")),
            PathBuf::from("./out.xlsx")
        );
        assert_eq!(
            in_current_dir(Path::new("reports/out.xlsx")),
            PathBuf::from("reports/out.xlsx")
        );
    }

    #[test]
    fn test_sheet_name_from_stem() {
        assert_eq!(sheet_name_for(Path::new("dir/sales.csv")), "sales");
        assert_eq!(sheet_name_for(Path::new("dir/")), "dir");
    }

    #[test]
    fn test_malformed_formats_fail_early() {
        let options = ConversionOptions::new().with_column_formats("X;T");
        let err = Converter::new(options).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }

    #[test]
    fn test_no_sources() {
        let converter = Converter::new(ConversionOptions::default()).unwrap();
        let sources: [&str; 0] = [];
        assert!(matches!(
            converter.convert_files(&sources, None),
            Err(Error::NoSources)
        ));
        assert!(matches!(
            converter.convert_readers(Vec::<(String, &[u8])>::new(), std::io::Cursor::new(Vec::new())),
            Err(Error::NoSources)
        ));
    }
}
