use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "colorized_output")]
use console::style;

/// Column and row counts of one CSV table
struct TableSummary {
    name: String,
    columns: usize,
    rows: usize,
}

/// Display the CSV tables of an output directory
pub fn run(directory: PathBuf) -> Result<()> {
    if !directory.is_dir() {
        anyhow::bail!("Not a directory: {}", directory.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(&directory)
        .with_context(|| format!("Failed to list {}", directory.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    let tables = paths
        .iter()
        .map(|path| summarize(path))
        .collect::<Result<Vec<_>>>()?;

    println!("{}", format_report(&directory, &tables));
    Ok(())
}

fn summarize(path: &Path) -> Result<TableSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let columns = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .len();
    let mut rows = 0;
    for record in reader.records() {
        record.with_context(|| format!("Malformed row in {}", path.display()))?;
        rows += 1;
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(TableSummary {
        name,
        columns,
        rows,
    })
}

fn format_report(directory: &Path, tables: &[TableSummary]) -> String {
    let width = tables.iter().map(|t| t.name.len()).max().unwrap_or(0);
    let total_rows: usize = tables.iter().map(|t| t.rows).sum();
    let mut output = String::new();

    #[cfg(feature = "colorized_output")]
    {
        output.push_str(&format!("{}\n", style("cfgsyn Output Tables").bold().cyan()));
        output.push_str(&format!("{}\n", style("====================").cyan()));
        output.push_str(&format!("{}: {}\n\n", style("Directory").bold(), directory.display()));
        for table in tables {
            output.push_str(&format!(
                "  {:width$}  {} rows x {} columns\n",
                style(&table.name).green(),
                table.rows,
                table.columns,
                width = width
            ));
        }
        output.push_str(&format!(
            "\n{}: {} tables, {} rows",
            style("Summary").bold(),
            style(tables.len()).green(),
            style(total_rows).green()
        ));
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        output.push_str("cfgsyn Output Tables\n");
        output.push_str("====================\n");
        output.push_str(&format!("Directory: {}\n\n", directory.display()));
        for table in tables {
            output.push_str(&format!(
                "  {:width$}  {} rows x {} columns\n",
                table.name,
                table.rows,
                table.columns,
                width = width
            ));
        }
        output.push_str(&format!(
            "\nSummary: {} tables, {} rows",
            tables.len(),
            total_rows
        ));
    }

    output
}
