//! # cfgsyn Converter
//!
//! A command-line tool for converting bulk configuration exports into CSV
//! tables, one per managed object type.
//!
//! ## Usage
//!
//! ```bash
//! # Discover columns from the data
//! cfgsyn convert -i dumps/ -o out/
//!
//! # Use the columns of a parameter file
//! cfgsyn convert -i dumps/NE01.xml -o out/ -c params.cfg
//!
//! # Inspect the result
//! cfgsyn info out/
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
