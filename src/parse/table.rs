//! Rectangular table parsing.
//!
//! CSV decoding (quoting, embedded delimiters) is delegated to the `csv`
//! crate. The reader runs in flexible mode so that ragged rows reach
//! [`Table::from_rows`] and are reported with their row number instead of as
//! an opaque decoder error.

use crate::core::{Error, FormatError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decoder settings for tabular input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub delimiter: u8,
    /// Strip surrounding whitespace from every cell, headers included.
    /// Off by default: cells are compared exactly as written.
    pub trim: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

/// A header row plus data rows, all of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Validate raw rows. The first row is the header.
    ///
    /// Row numbers in errors are 1-based lines of the table, so the first
    /// data row is row 2.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(FormatError::Empty.into());
        }
        let headers = rows.remove(0);
        let expected = headers.len();

        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(FormatError::RaggedRow {
                row: idx + 2,
                expected,
                actual: row.len(),
            }
            .into());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        find_column_index(&self.headers, name)
    }

    /// Like [`Table::column_index`] but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| FormatError::MissingColumn(name.to_string()).into())
    }
}

/// Zero-based index of the first header equal to `name` (case-sensitive).
pub fn find_column_index<S: AsRef<str>>(headers: &[S], name: &str) -> Option<usize> {
    headers.iter().position(|header| header.as_ref() == name)
}

/// Decode every record from a reader into raw string rows.
pub fn read_rows_from<R: Read>(reader: R, options: &TableOptions) -> Result<Vec<Vec<String>>> {
    collect_rows(reader, options, |e| FormatError::Csv(e.to_string()).into())
}

/// Read raw rows from a file on disk.
pub fn read_rows(path: &Path, options: &TableOptions) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let rows = collect_rows(file, options, |e| map_csv_error(path, e))?;
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read and validate a table from a file on disk.
pub fn read_table(path: &Path, options: &TableOptions) -> Result<Table> {
    Table::from_rows(read_rows(path, options)?)
}

fn collect_rows<R, F>(reader: R, options: &TableOptions, map_err: F) -> Result<Vec<Vec<String>>>
where
    R: Read,
    F: Fn(csv::Error) -> Error,
{
    let mut csv_reader = csv_reader_builder(options).from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(&map_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn csv_reader_builder(options: &TableOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        });
    builder
}

fn map_csv_error(path: &Path, err: csv::Error) -> Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::io(path, source),
        _ => FormatError::Csv(message).into(),
    }
}
