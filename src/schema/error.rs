/// Errors raised by the schema registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The type has no schema (not configured or never discovered)
    #[error("Unknown managed object type: {0}")]
    UnknownType(String),

    /// A type appeared after discovery finished
    #[error("Managed object type {0} was not seen during schema discovery")]
    TypeDrift(String),

    /// An attribute appeared after discovery finished
    #[error("Attribute {attribute} of {mo_type} was not seen during schema discovery")]
    AttributeDrift {
        /// Managed object type
        mo_type: String,
        /// Attribute missing from the frozen schema
        attribute: String,
    },

    /// Columns were added after the registry was frozen
    #[error("Schema registry is frozen, cannot extend {0}")]
    Frozen(String),
}
