//! Export to CSV converter
//!
//! This module drives a whole run: it resolves the input files, feeds every
//! file through the token source and nesting tracker, and routes completed
//! instances and footers to the output tables.
//!
//! Without a parameter file the run makes two passes. The first pass learns
//! the column set of every type (and writes the footer table); the registry is
//! then frozen and the second pass writes the rows. With a parameter file the
//! columns are known up front and a single pass suffices.

mod pass;
mod progress;


use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::input::{resolve_inputs, InputError, InputSet};
use crate::output::{OutputError, OutputMultiplexer, TableStats};
use crate::record::RecordAssembler;
use crate::schema::{ConfigError, ParameterConfig, SchemaError, SchemaMode, SchemaRegistry};
use crate::xml::ParseError;

pub use pass::{FileStats, Pass};
pub use progress::{LogProgress, ProgressSink, SilentProgress};

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The input path could not be resolved
    #[error("Input error: {0}")]
    InputError(#[from] InputError),

    /// The parameter file could not be loaded
    #[error("Parameter file error: {0}")]
    ConfigError(#[from] ConfigError),

    /// An export file is not well-formed
    #[error("Failed to parse {}: {source}", .path.display())]
    ParseError {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: ParseError,
    },

    /// The schemas do not fit the data
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),

    /// An output table could not be written
    #[error("Output error: {0}")]
    OutputError(#[from] OutputError),
}

impl ConversionError {
    /// Whether the error concerns a single input file only
    ///
    /// Such errors skip the file in a directory run. Every other error aborts
    /// the run.
    pub fn is_file_local(&self) -> bool {
        matches!(self, ConversionError::ParseError { .. })
    }
}

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory receiving the CSV tables
    pub output_directory: PathBuf,

    /// Predefined columns; `None` discovers them from the data
    pub parameters: Option<ParameterConfig>,
}

impl ConversionConfig {
    /// Discovery-mode configuration
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
            parameters: None,
        }
    }

    /// Use the columns of a parameter file
    pub fn with_parameters(mut self, parameters: ParameterConfig) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Load and use a parameter file
    pub fn with_parameter_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConversionError> {
        let parameters = ParameterConfig::from_file(path)?;
        Ok(self.with_parameters(parameters))
    }

    /// Schema mode of the run
    pub fn mode(&self) -> SchemaMode {
        if self.parameters.is_some() {
            SchemaMode::Predefined
        } else {
            SchemaMode::Discovery
        }
    }
}

/// Statistics from a conversion run
#[derive(Debug, Clone)]
pub struct ConversionStats {
    /// Schema mode of the run
    pub mode: SchemaMode,
    /// Files converted without error
    pub files_converted: usize,
    /// Files skipped because they failed to parse
    pub files_skipped: Vec<PathBuf>,
    /// Instances written as rows
    pub rows_written: usize,
    /// Instances of types absent from the parameter file
    pub instances_skipped: usize,
    /// Instances without a type
    pub instances_discarded: usize,
    /// Footer rows written
    pub footers_written: usize,
    /// Tables in creation order
    pub tables: Vec<TableStats>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl ConversionStats {
    fn new(mode: SchemaMode) -> Self {
        Self {
            mode,
            files_converted: 0,
            files_skipped: Vec::new(),
            rows_written: 0,
            instances_skipped: 0,
            instances_discarded: 0,
            footers_written: 0,
            tables: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Table statistics by name
    pub fn table(&self, name: &str) -> Option<&TableStats> {
        self.tables.iter().find(|table| table.name == name)
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mode: {:?}", self.mode)?;
        writeln!(f, "Files converted: {}", self.files_converted)?;
        if !self.files_skipped.is_empty() {
            writeln!(f, "Files skipped: {}", self.files_skipped.len())?;
        }
        writeln!(f, "Rows written: {}", self.rows_written)?;
        if self.instances_skipped > 0 {
            writeln!(f, "Instances of unconfigured types: {}", self.instances_skipped)?;
        }
        if self.instances_discarded > 0 {
            writeln!(f, "Instances without a type: {}", self.instances_discarded)?;
        }
        writeln!(f, "Footer rows: {}", self.footers_written)?;
        write!(f, "Tables: {}", self.tables.len())
    }
}

/// Mutable state shared by every file of a run
pub(crate) struct RunState {
    pub(crate) registry: SchemaRegistry,
    pub(crate) assembler: RecordAssembler,
    pub(crate) output: OutputMultiplexer,
    /// Export time of each file, learned in the discovery pass
    pub(crate) export_times: HashMap<PathBuf, String>,
    /// Files that failed in an earlier pass
    pub(crate) failed: HashSet<PathBuf>,
}

/// Converter from bulk configuration exports to CSV tables
pub struct Converter<P: ProgressSink = LogProgress> {
    config: ConversionConfig,
    progress: P,
}

impl Converter<LogProgress> {
    /// Converter reporting progress through the log
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            progress: LogProgress,
        }
    }
}

impl<P: ProgressSink> Converter<P> {
    /// Report progress to a different sink
    pub fn with_progress<Q: ProgressSink>(self, progress: Q) -> Converter<Q> {
        Converter {
            config: self.config,
            progress,
        }
    }

    /// Convert a file or every file of a directory
    pub fn convert<T: AsRef<Path>>(&mut self, input: T) -> Result<ConversionStats, ConversionError> {
        let inputs = resolve_inputs(input.as_ref())?;
        self.convert_inputs(&inputs)
    }

    /// Convert resolved inputs
    pub fn convert_inputs(&mut self, inputs: &InputSet) -> Result<ConversionStats, ConversionError> {
        let start = Instant::now();
        let mode = self.config.mode();
        let registry = match &self.config.parameters {
            Some(parameters) => SchemaRegistry::predefined(parameters.clone()),
            None => SchemaRegistry::discovery(),
        };

        info!(
            "Converting {} file(s) into {} ({:?} mode)",
            inputs.files().len(),
            self.config.output_directory.display(),
            mode
        );

        let mut state = RunState {
            registry,
            assembler: RecordAssembler::for_mode(mode),
            output: OutputMultiplexer::new(&self.config.output_directory),
            export_times: HashMap::new(),
            failed: HashSet::new(),
        };
        let mut stats = ConversionStats::new(mode);

        match mode {
            SchemaMode::Discovery => {
                self.run_pass(Pass::Discovery, inputs, &mut state, &mut stats)?;
                state.registry.freeze();
                debug!("Discovered {} managed object type(s)", state.registry.len());
                self.run_pass(Pass::Extraction, inputs, &mut state, &mut stats)?;
            }
            SchemaMode::Predefined => {
                self.run_pass(Pass::Single, inputs, &mut state, &mut stats)?;
            }
        }

        stats.files_converted = inputs.files().len() - state.failed.len();
        stats.tables = state.output.finish()?;
        stats.elapsed = start.elapsed();
        info!(
            "Wrote {} row(s) into {} table(s) in {:.2}s",
            stats.rows_written,
            stats.tables.len(),
            stats.elapsed.as_secs_f64()
        );
        Ok(stats)
    }

    fn run_pass(
        &mut self,
        pass: Pass,
        inputs: &InputSet,
        state: &mut RunState,
        stats: &mut ConversionStats,
    ) -> Result<(), ConversionError> {
        for path in inputs.files() {
            if state.failed.contains(path) {
                continue;
            }

            self.progress.file_started(path, pass);
            match pass::process_file(path, pass, state) {
                Ok(file_stats) => {
                    stats.rows_written += file_stats.rows;
                    stats.instances_skipped += file_stats.skipped;
                    stats.footers_written += file_stats.footers;
                    // instances without a type are seen in every pass
                    if pass.counts_discards() {
                        stats.instances_discarded += file_stats.discarded;
                    }
                    self.progress.file_finished(path, pass, &file_stats);
                }
                Err(err) if err.is_file_local() && inputs.skips_failed_files() => {
                    self.progress.file_skipped(path, pass, &err);
                    state.failed.insert(path.clone());
                    stats.files_skipped.push(path.clone());
                }
                Err(err) => {
                    warn!("Aborting conversion: {}", err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}
