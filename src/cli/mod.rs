use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod convert;
mod info;

/// cfgsyn - Bulk configuration export to CSV converter
#[derive(Parser)]
#[command(name = "cfgsyn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert export files into per-type CSV tables
    Convert {
        /// Export file, or directory of export files
        #[arg(short = 'i', long, value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Existing directory receiving the CSV tables
        #[arg(short = 'o', long, value_name = "OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// Parameter file fixing the columns of each type
        #[arg(short = 'c', long = "parameters", value_name = "PARAMETER_FILE")]
        parameters: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List the CSV tables of an output directory
    Info {
        /// Output directory
        #[arg(value_name = "DIR")]
        directory: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            parameters,
            config,
        } => convert::run(input, output, parameters, config),
        Commands::Info { directory } => info::run(directory),
    }
}
