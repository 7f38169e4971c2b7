//! Parameter file support for predefined schemas.
//!
//! Operators who only need a subset of the export list the types and columns
//! to extract, one type per line:
//!
//! ```text
//! CELL:FILENAME,NODENAME,CELLID,CELLNAME
//! NODE:NODENAME,NEID,IP
//! fileFooter:
//! ```
//!
//! Column names may be reserved metadata tokens (see
//! [`MetadataField`](crate::metadata::MetadataField)). A `fileFooter` line
//! enables the footer summary table.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::warn;

use super::ColumnSet;

/// Parameter file entry that enables `fileFooter.csv`
pub const FOOTER_ENTRY: &str = "fileFooter";

/// Errors that can occur while loading a parameter file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the parameter file
    #[error("Failed to read parameter file: {0}")]
    IoError(#[from] std::io::Error),

    /// A line has no `:` between type and columns
    #[error("Line {line_number}: missing ':' separator in {line:?}")]
    MissingSeparator {
        /// 1-based line number
        line_number: usize,
        /// Offending line
        line: String,
    },

    /// A line has an empty type name
    #[error("Line {line_number}: empty managed object type name")]
    EmptyTypeName {
        /// 1-based line number
        line_number: usize,
    },
}

/// Type to column mapping loaded from a parameter file
#[derive(Debug, Clone, Default)]
pub struct ParameterConfig {
    types: Vec<String>,
    columns: HashMap<String, ColumnSet>,
}

impl ParameterConfig {
    /// Load a parameter file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a parameter file from a reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ConfigError> {
        let mut config = ParameterConfig::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (mo_type, columns) =
                line.split_once(':')
                    .ok_or_else(|| ConfigError::MissingSeparator {
                        line_number,
                        line: line.clone(),
                    })?;

            let mo_type = mo_type.trim();
            if mo_type.is_empty() {
                return Err(ConfigError::EmptyTypeName { line_number });
            }

            let columns: ColumnSet = columns
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect();

            config.insert(mo_type, columns, line_number);
        }

        Ok(config)
    }

    fn insert(&mut self, mo_type: &str, columns: ColumnSet, line_number: usize) {
        if self.columns.insert(mo_type.to_string(), columns).is_some() {
            warn!(
                "Parameter file line {}: {} is defined again, replacing the earlier definition",
                line_number, mo_type
            );
        } else {
            self.types.push(mo_type.to_string());
        }
    }

    /// Configured columns of a type
    pub fn columns(&self, mo_type: &str) -> Option<&ColumnSet> {
        self.columns.get(mo_type)
    }

    /// Whether the type is configured
    pub fn contains(&self, mo_type: &str) -> bool {
        self.columns.contains_key(mo_type)
    }

    /// Whether the footer summary table is requested
    pub fn includes_footer(&self) -> bool {
        self.contains(FOOTER_ENTRY)
    }

    /// Configured types in file order, including the footer entry
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Number of configured types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no type is configured
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, ColumnSet)> {
        let mut columns = self.columns;
        self.types.into_iter().filter_map(move |t| {
            let set = columns.remove(&t)?;
            Some((t, set))
        })
    }
}

impl FromStr for ParameterConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::from_reader(content.as_bytes())
    }
}
