use std::path::PathBuf;

/// Errors that can occur while writing output tables
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// I/O error on a table file
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        /// Table file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A row does not match the header of its table
    #[error("Row for table {table} has {found} fields, header has {expected}")]
    InvalidRow {
        /// Table name
        table: String,
        /// Header field count
        expected: usize,
        /// Row field count
        found: usize,
    },
}
