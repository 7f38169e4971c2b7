//! Progress reporting

use std::path::Path;

use log::{debug, error, info};

use super::{ConversionError, FileStats, Pass};

/// Receives per-file progress of a run
///
/// Every method has an empty default so sinks implement only what they need.
pub trait ProgressSink {
    /// A file is about to be read
    fn file_started(&mut self, _path: &Path, _pass: Pass) {}

    /// A file was read to the end
    fn file_finished(&mut self, _path: &Path, _pass: Pass, _stats: &FileStats) {}

    /// A file failed to parse and is left out of the run
    fn file_skipped(&mut self, _path: &Path, _pass: Pass, _error: &ConversionError) {}
}

/// Reports progress through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn file_started(&mut self, path: &Path, pass: Pass) {
        debug!("{:?} pass: reading {}", pass, path.display());
    }

    fn file_finished(&mut self, path: &Path, pass: Pass, stats: &FileStats) {
        match pass {
            Pass::Discovery => info!(
                "Scanned {}: {} instance(s)",
                path.display(),
                stats.instances
            ),
            Pass::Extraction | Pass::Single => info!(
                "Converted {}: {} row(s)",
                path.display(),
                stats.rows
            ),
        }
    }

    fn file_skipped(&mut self, path: &Path, _pass: Pass, error: &ConversionError) {
        error!("Skipping {}: {}", path.display(), error);
    }
}

/// Discards progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {}
