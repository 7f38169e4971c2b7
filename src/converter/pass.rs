//! Per-file processing

use std::path::Path;

use log::{debug, warn};

use crate::footer::{write_footer, FooterRecord};
use crate::input::file_base_name;
use crate::metadata::{ExportDocument, FOOTER_TAG, SYNDATA_TAG};
use crate::parser::{Moi, NestingTracker};
use crate::schema::SchemaError;
use crate::xml::{Token, TokenSource};

use super::{ConversionError, RunState};

/// Pass over the input files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Learn the columns of every type and write the footer table
    Discovery,
    /// Write rows against the frozen discovered columns
    Extraction,
    /// Write rows and footers against predefined columns
    Single,
}

impl Pass {
    fn writes_rows(self) -> bool {
        !matches!(self, Pass::Discovery)
    }

    fn writes_footers(self, state: &RunState) -> bool {
        match self {
            Pass::Discovery => true,
            Pass::Extraction => false,
            Pass::Single => state.registry.footer_enabled(),
        }
    }

    pub(super) fn counts_discards(self) -> bool {
        self.writes_rows()
    }
}

/// Counters for one file in one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Instances completed
    pub instances: usize,
    /// Rows written
    pub rows: usize,
    /// Instances of unconfigured types
    pub skipped: usize,
    /// Instances without a type
    pub discarded: usize,
    /// Footer rows written
    pub footers: usize,
}

/// Metadata and nesting state of the file being read
///
/// Footer rows wait in `footers` until the whole file has been read, so a
/// file that fails to parse leaves no footer row behind.
struct FileContext {
    document: ExportDocument,
    tracker: NestingTracker,
    footers: Vec<FooterRecord>,
}

impl FileContext {
    fn new(path: &Path) -> Self {
        Self {
            document: ExportDocument::new(file_base_name(path)),
            tracker: NestingTracker::new(),
            footers: Vec::new(),
        }
    }
}

pub(super) fn process_file(
    path: &Path,
    pass: Pass,
    state: &mut RunState,
) -> Result<FileStats, ConversionError> {
    let parse_error = |source| ConversionError::ParseError {
        path: path.to_path_buf(),
        source,
    };

    let mut source = TokenSource::open(path).map_err(parse_error)?;
    let mut context = FileContext::new(path);
    let mut stats = FileStats::default();

    // the footer comes last, so rows of the second pass take its time from the first
    if pass == Pass::Extraction {
        context.document.date_time = state.export_times.get(path).cloned();
    }

    while let Some(token) = source.next_token().map_err(parse_error)? {
        if let Token::Open { name, attributes } = &token {
            if name == SYNDATA_TAG {
                context.document.capture_syndata(attributes);
            } else if name == FOOTER_TAG {
                context.document.capture_footer(attributes);
                if pass.writes_footers(state) {
                    context
                        .footers
                        .push(FooterRecord::from_element(&context.document, attributes));
                }
            }
        }

        if let Some(moi) = context.tracker.feed(&token) {
            stats.instances += 1;
            complete_instance(moi, pass, &context.document, state, &mut stats)?;
        }
    }

    for record in &context.footers {
        write_footer(&mut state.output, record)?;
        stats.footers += 1;
    }

    if pass == Pass::Discovery {
        if let Some(date_time) = &context.document.date_time {
            state
                .export_times
                .insert(path.to_path_buf(), date_time.clone());
        }
    }

    Ok(stats)
}

fn complete_instance(
    moi: Moi,
    pass: Pass,
    document: &ExportDocument,
    state: &mut RunState,
    stats: &mut FileStats,
) -> Result<(), ConversionError> {
    let Some(mo_type) = moi.mo_type() else {
        if pass.counts_discards() {
            warn!(
                "Discarding instance without a type in {} ({} attribute(s))",
                document.file_name,
                moi.len()
            );
        }
        stats.discarded += 1;
        return Ok(());
    };

    if !pass.writes_rows() {
        state.registry.observe(&moi)?;
        return Ok(());
    }

    let columns = match state.registry.columns_for_instance(&moi) {
        Ok(columns) => columns,
        Err(SchemaError::UnknownType(mo_type)) => {
            debug!("Skipping {} instance: type is not configured", mo_type);
            stats.skipped += 1;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let assembler = state.assembler;
    let row = assembler.row(document, &moi, columns);
    state
        .output
        .write_row(mo_type, || assembler.header(columns), &row)?;
    stats.rows += 1;
    Ok(())
}
