//! CSV record source

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use exceller_core::Record;

/// Iterator over the records of a CSV input
///
/// Record lengths may vary from line to line. Empty fields are reported as
/// `None`.
pub struct CsvRecordSource<R> {
    records: csv::StringRecordsIntoIter<R>,
}

impl CsvRecordSource<File> {
    /// Open a CSV file
    ///
    /// # Errors
    ///
    /// Fails with [`CsvError::NotFound`] or [`CsvError::IsDirectory`] before
    /// attempting to read, and with [`CsvError::Io`] if the file cannot be
    /// opened.
    pub fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CsvError::NotFound(path.to_path_buf()));
        }
        if path.is_dir() {
            return Err(CsvError::IsDirectory(path.to_path_buf()));
        }

        log::debug!("opening CSV source {}", path.display());
        let file = File::open(path)?;
        Ok(Self::from_reader(file, options))
    }
}

impl<R: Read> CsvRecordSource<R> {
    /// Read records from any reader
    pub fn from_reader(reader: R, options: &CsvReadOptions) -> Self {
        let csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .from_reader(reader);

        Self {
            records: csv_reader.into_records(),
        }
    }
}

impl<R: Read> Iterator for CsvRecordSource<R> {
    type Item = CsvResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => return Some(Err(err.into())),
        };

        Some(Ok(record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect()))
    }
}
