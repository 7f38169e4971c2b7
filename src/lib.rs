//! # cfgsyn - Bulk Configuration Export to CSV
//!
//! `cfgsyn` converts network-element configuration exports ("sync data"
//! XML) into one CSV table per managed object type, plus a summary table of
//! file footers.
//!
//! ## Key Features
//!
//! - **Streaming**: Files are read token by token; memory is bounded by the
//!   largest single managed object instance, not by file size.
//!
//! - **Schema Discovery**: Without configuration, a first pass learns the
//!   union of attributes of every type across all input files, so every row
//!   of a table has the same columns.
//!
//! - **Predefined Schemas**: A parameter file fixes the columns of each type
//!   in a single pass and may interleave metadata columns such as
//!   `NODENAME` or `DATETIME`.
//!
//! - **Metadata Columns**: Every row carries the file name, export time and
//!   the identity of the network element it came from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfgsyn::converter::{ConversionConfig, Converter};
//!
//! let config = ConversionConfig::new("out/");
//! let stats = Converter::new(config).convert("dumps/")?;
//! println!("Wrote {} rows", stats.rows_written);
//! # Ok::<(), cfgsyn::converter::ConversionError>(())
//! ```
//!
//! With a parameter file:
//!
//! ```rust,no_run
//! use cfgsyn::converter::{ConversionConfig, Converter};
//!
//! let config = ConversionConfig::new("out/").with_parameter_file("params.cfg")?;
//! let stats = Converter::new(config).convert("dumps/NE01.xml")?;
//! # Ok::<(), cfgsyn::converter::ConversionError>(())
//! ```
//!
//! ## Input Format
//!
//! ```text
//! <syndata FunctionType="..." Id="NE=RNC01" productversion="..." ...>
//!   <class>
//!     <CELL>
//!       <attributes>
//!         <CELLID>1</CELLID>
//!         <CELLNAME>north</CELLNAME>
//!       </attributes>
//!     </CELL>
//!   </class>
//! </syndata>
//! <fileFooter label="..." ExportResult="..." dateTime="..."/>
//! ```
//!
//! ## Architecture
//!
//! - [`xml`]: Token source over `quick-xml`
//! - [`parser`]: Nesting tracker that assembles managed object instances
//! - [`schema`]: Column sets, parameter files and the schema registry
//! - [`metadata`]: Per-file metadata captured from `syndata` and `fileFooter`
//! - [`record`]: Row layout for each schema mode
//! - [`output`]: One buffered CSV sink per table
//! - [`footer`]: Footer summary table
//! - [`converter`]: Run orchestration
//! - [`input`]: Input path resolution

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod converter;
pub mod csv_escape;
pub mod footer;
pub mod input;
pub mod metadata;
pub mod output;
pub mod parser;
pub mod record;
pub mod schema;
pub mod xml;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::converter::{
        ConversionConfig, ConversionError, ConversionStats, Converter, LogProgress, ProgressSink,
    };
    pub use crate::input::{resolve_inputs, InputSet};
    pub use crate::metadata::{ExportDocument, MetadataField};
    pub use crate::output::{OutputMultiplexer, TableStats};
    pub use crate::parser::{Moi, NestingTracker};
    pub use crate::schema::{ColumnSet, ParameterConfig, SchemaMode, SchemaRegistry};
    pub use crate::xml::{Token, TokenSource};
}
