//! TOML configuration file support.
//!
//! Instead of passing paths on the command line, a run can be described in a
//! settings file:
//!
//! ```toml
//! # cfgsyn.toml
//! [conversion]
//! input = "dumps/"
//! output_directory = "out/"
//! parameter_file = "params.cfg"
//! ```
//!
//! Relative paths are taken as given, relative to the working directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure for cfgsyn.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionSettings,
}

/// Settings for the convert command.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSettings {
    /// Export file or directory of export files.
    pub input: Option<PathBuf>,

    /// Directory receiving the CSV tables.
    pub output_directory: Option<PathBuf>,

    /// Parameter file; discovery mode when absent.
    pub parameter_file: Option<PathBuf>,
}

/// Fully resolved parameters of a convert run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParameters {
    pub input: PathBuf,
    pub output_directory: PathBuf,
    pub parameter_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Combine with command-line values; the command line wins.
    pub fn resolve(
        self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        parameters: Option<PathBuf>,
    ) -> Result<RunParameters> {
        let settings = self.conversion;
        let input = input
            .or(settings.input)
            .context("No input given (use -i or set conversion.input)")?;
        let output_directory = output
            .or(settings.output_directory)
            .context("No output directory given (use -o or set conversion.output_directory)")?;

        Ok(RunParameters {
            input,
            output_directory,
            parameter_file: parameters.or(settings.parameter_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            input = "dumps/"
            output_directory = "out/"
            parameter_file = "params.cfg"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.input, Some(PathBuf::from("dumps/")));
        assert_eq!(config.conversion.output_directory, Some(PathBuf::from("out/")));
        assert_eq!(
            config.conversion.parameter_file,
            Some(PathBuf::from("params.cfg"))
        );
    }

    #[test]
    fn test_command_line_overrides_file() {
        let toml = r#"
            [conversion]
            input = "dumps/"
            output_directory = "out/"
        "#;

        let params = Config::from_str(toml)
            .unwrap()
            .resolve(None, Some(PathBuf::from("elsewhere")), Some(PathBuf::from("p.cfg")))
            .unwrap();
        assert_eq!(params.input, PathBuf::from("dumps/"));
        assert_eq!(params.output_directory, PathBuf::from("elsewhere"));
        assert_eq!(params.parameter_file, Some(PathBuf::from("p.cfg")));
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let result = Config::default().resolve(Some(PathBuf::from("a.xml")), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_str("[conversion]\nbatch_size = 3\n").is_err());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.input, None);
    }
}
