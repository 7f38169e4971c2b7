//! Per-type column schemas
//!
//! Every managed object type gets an ordered, deduplicated list of attribute
//! names that fixes the column layout of its CSV table. Schemas either come
//! from a discovery pass over all inputs or from an operator-supplied
//! parameter file. In both cases the registry is frozen before the first data
//! row is written, so a table's header never changes after it is emitted.

mod column_set;
mod config;
mod error;
mod registry;

pub use column_set::ColumnSet;
pub use config::{ConfigError, ParameterConfig, FOOTER_ENTRY};
pub use error::SchemaError;
pub use registry::{SchemaMode, SchemaRegistry};
