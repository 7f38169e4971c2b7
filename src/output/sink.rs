use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::csv_escape::write_record;

use super::OutputError;

/// Write buffer per open table
const SINK_BUFFER_SIZE: usize = 32 * 1024;

/// One open CSV table
///
/// The header is written when the sink is created, so a table file never
/// exists without it.
pub struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
    header: Vec<String>,
    rows: usize,
}

impl Sink {
    /// Create (or truncate) the table file and write its header
    pub fn create(path: impl Into<PathBuf>, header: Vec<String>) -> Result<Self, OutputError> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| OutputError::IoError {
            path: path.clone(),
            source,
        })?;

        let mut sink = Self {
            writer: BufWriter::with_capacity(SINK_BUFFER_SIZE, file),
            path,
            header,
            rows: 0,
        };
        write_record(&mut sink.writer, &sink.header).map_err(|source| OutputError::IoError {
            path: sink.path.clone(),
            source,
        })?;
        Ok(sink)
    }

    /// Append one data row
    pub fn write_row(&mut self, row: &[String]) -> Result<(), OutputError> {
        write_record(&mut self.writer, row).map_err(|source| OutputError::IoError {
            path: self.path.clone(),
            source,
        })?;
        self.rows += 1;
        Ok(())
    }

    /// Header fields
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Flush and close the table
    pub fn finish(mut self, name: &str) -> Result<TableStats, OutputError> {
        self.writer.flush().map_err(|source| OutputError::IoError {
            path: self.path.clone(),
            source,
        })?;

        Ok(TableStats {
            name: name.to_string(),
            path: self.path,
            columns: self.header.len(),
            rows: self.rows,
        })
    }
}

/// Statistics of one finished table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    /// Table name (managed object type or `fileFooter`)
    pub name: String,
    /// Table file path
    pub path: PathBuf,
    /// Number of columns
    pub columns: usize,
    /// Number of data rows
    pub rows: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} rows x {} columns ({})",
            self.name,
            self.rows,
            self.columns,
            self.path.display()
        )
    }
}
