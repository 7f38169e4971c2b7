//! Streaming XML token source
//!
//! Sync-data exports can be several gigabytes, so the converter never builds a
//! document tree. Instead [`TokenSource`] pulls events from `quick-xml` one at
//! a time and reduces them to the handful of structural [`Token`]s the nesting
//! tracker cares about.
//!
//! ## Export Structure
//!
//! ```text
//! bulkCmConfigDataFile (root, any name)
//! ├── syndata            (FunctionType, Id, productversion, nermversion, objId)
//! │   └── class*
//! │       └── <MoType>   (names the managed object type)
//! │           └── attributes
//! │               └── <attribute>value</attribute>*
//! └── fileFooter         (dateTime, label, ExportResult)
//! ```

mod error;
mod source;
mod token;


pub use error::ParseError;
pub use source::{TokenIterator, TokenSource, DEFAULT_INPUT_BUFFER_SIZE};
pub use token::Token;
