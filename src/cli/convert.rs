use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use cfgsyn::converter::{ConversionConfig, Converter};

use super::config::Config;

/// Convert export files into CSV tables
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    parameters: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let settings = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let params = settings.resolve(input, output, parameters)?;

    if !params.input.exists() {
        anyhow::bail!("Input does not exist: {}", params.input.display());
    }
    validate_output_directory(&params.output_directory)?;

    info!("cfgsyn - Bulk Configuration Export to CSV");
    info!("=========================================");
    info!("Input:  {}", params.input.display());
    info!("Output: {}", params.output_directory.display());
    match &params.parameter_file {
        Some(path) => info!("Parameter file: {}", path.display()),
        None => info!("Parameter file: none (discovering columns)"),
    }

    let mut config = ConversionConfig::new(&params.output_directory);
    if let Some(path) = &params.parameter_file {
        config = config
            .with_parameter_file(path)
            .with_context(|| format!("Failed to load parameter file {}", path.display()))?;
    }

    info!("Starting conversion...");
    let stats = Converter::new(config)
        .convert(&params.input)
        .context("Conversion failed")?;

    info!("Conversion complete!");
    for line in stats.to_string().lines() {
        info!("  {}", line);
    }
    for table in &stats.tables {
        info!("  {}", table);
    }
    info!("  Elapsed: {:.2}s", stats.elapsed.as_secs_f64());

    Ok(())
}

/// The output directory must exist, be a directory and accept new files
fn validate_output_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Output directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Output path is not a directory: {}", path.display());
    }

    // permission bits say nothing about the current user, so try a write
    tempfile::tempfile_in(path)
        .with_context(|| format!("Output directory is not writable: {}", path.display()))?;
    Ok(())
}
