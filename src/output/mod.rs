//! Output multiplexer
//!
//! Rows for many managed object types arrive interleaved in document order.
//! The multiplexer keeps one open [`Sink`] per table, created on the first row
//! destined for it, and keeps all of them open until the run finishes.
//!
//! Sinks are buffered; [`OutputMultiplexer::finish`] flushes them and reports
//! errors. If a run ends early the multiplexer is dropped and every buffer is
//! flushed on a best-effort basis, so each table file still holds its header
//! and only complete rows.

mod error;
mod sink;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use error::OutputError;
pub use sink::{Sink, TableStats};

/// File extension of output tables
pub const TABLE_EXTENSION: &str = "csv";

/// One CSV table per name in an output directory
///
/// # Header once
/// The header closure passed to [`OutputMultiplexer::write_row`] runs only
/// when the table is first created; the header goes to the file together
/// with the sink, and every later row of that table must match its width or
/// is rejected with [`OutputError::InvalidRow`].
///
/// # Ordering
/// [`OutputMultiplexer::finish`] reports tables in creation order, so the
/// statistics of repeated runs over the same inputs line up.
pub struct OutputMultiplexer {
    directory: PathBuf,
    names: Vec<String>,
    sinks: HashMap<String, Sink>,
}

impl OutputMultiplexer {
    /// Multiplexer writing into `directory`; no file is created yet
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            names: Vec::new(),
            sinks: HashMap::new(),
        }
    }

    /// Header of an existing table
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.sinks.get(name).map(Sink::header)
    }

    /// Append a row to the table `name`
    ///
    /// `header` is only called when the table does not exist yet. A row whose
    /// length differs from the table header is rejected.
    pub fn write_row<F>(&mut self, name: &str, header: F, row: &[String]) -> Result<(), OutputError>
    where
        F: FnOnce() -> Vec<String>,
    {
        let sink = match self.sinks.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let sink = Sink::create(table_path(&self.directory, name), header())?;
                self.names.push(name.to_string());
                entry.insert(sink)
            }
        };
        if sink.header().len() != row.len() {
            return Err(OutputError::InvalidRow {
                table: name.to_string(),
                expected: sink.header().len(),
                found: row.len(),
            });
        }
        sink.write_row(row)
    }

    /// Number of open tables
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// True if no table has been created
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Flush and close every table, in creation order
    pub fn finish(mut self) -> Result<Vec<TableStats>, OutputError> {
        let mut stats = Vec::with_capacity(self.names.len());
        for name in std::mem::take(&mut self.names) {
            if let Some(sink) = self.sinks.remove(&name) {
                stats.push(sink.finish(&name)?);
            }
        }
        Ok(stats)
    }
}

fn table_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{}.{}", name, TABLE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn strings(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempdir().unwrap();
        let mut output = OutputMultiplexer::new(dir.path());

        let mut header_calls = 0;
        for value in ["1", "2", "3"] {
            output
                .write_row(
                    "CELL",
                    || {
                        header_calls += 1;
                        strings(&["A", "B"])
                    },
                    &strings(&[value, "x,y"]),
                )
                .unwrap();
        }
        assert_eq!(header_calls, 1);

        let stats = output.finish().unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].rows, 3);
        assert_eq!(stats[0].columns, 2);

        let content = fs::read_to_string(dir.path().join("CELL.csv")).unwrap();
        assert_eq!(content, "A,B\n1,\"x,y\"\n2,\"x,y\"\n3,\"x,y\"\n");
    }

    #[test]
    fn test_tables_are_independent() {
        let dir = tempdir().unwrap();
        let mut output = OutputMultiplexer::new(dir.path());

        output.write_row("CELL", || strings(&["A"]), &strings(&["1"])).unwrap();
        output.write_row("NODE", || strings(&["X", "Y"]), &strings(&["a", "b"])).unwrap();
        output.write_row("CELL", || strings(&["ignored"]), &strings(&["2"])).unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(output.header("CELL"), Some(&strings(&["A"])[..]));

        let stats = output.finish().unwrap();
        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["CELL", "NODE"]);

        let node = fs::read_to_string(dir.path().join("NODE.csv")).unwrap();
        assert_eq!(node, "X,Y\na,b\n");
    }

    #[test]
    fn test_row_length_is_checked() {
        let dir = tempdir().unwrap();
        let mut output = OutputMultiplexer::new(dir.path());
        output.write_row("CELL", || strings(&["A", "B"]), &strings(&["1", "2"])).unwrap();

        let err = output
            .write_row("CELL", || strings(&["A", "B"]), &strings(&["1"]))
            .unwrap_err();
        assert!(matches!(
            err,
            OutputError::InvalidRow { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_dropped_multiplexer_flushes() {
        let dir = tempdir().unwrap();
        {
            let mut output = OutputMultiplexer::new(dir.path());
            output.write_row("CELL", || strings(&["A"]), &strings(&["1"])).unwrap();
        }
        let content = fs::read_to_string(dir.path().join("CELL.csv")).unwrap();
        assert_eq!(content, "A\n1\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let mut output = OutputMultiplexer::new(dir.path().join("missing"));
        let err = output
            .write_row("CELL", || strings(&["A"]), &strings(&["1"]))
            .unwrap_err();
        assert!(matches!(err, OutputError::IoError { .. }));
    }
}
