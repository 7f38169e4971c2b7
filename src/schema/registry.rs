use std::collections::HashMap;

use crate::parser::Moi;

use super::{ColumnSet, ParameterConfig, SchemaError, FOOTER_ENTRY};

/// How schemas are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    /// Two passes: discover columns from the data, then emit rows
    Discovery,
    /// One pass against columns from a parameter file
    Predefined,
}

/// Column schemas of every managed object type in a run
///
/// # Freeze point
/// A discovery registry starts open: [`SchemaRegistry::observe`] appends the
/// attributes of each instance to its type's column set in first-seen order.
/// [`SchemaRegistry::freeze`] ends discovery, after which `observe` fails and
/// only [`SchemaRegistry::columns_for`] and
/// [`SchemaRegistry::columns_for_instance`] answer. A predefined registry is
/// frozen from construction.
///
/// # Drift
/// Once frozen, an instance whose type or attributes the discovery pass never
/// saw yields [`SchemaError::TypeDrift`] or [`SchemaError::AttributeDrift`].
///
/// # Example
/// ```
/// use cfgsyn::parser::Moi;
/// use cfgsyn::schema::SchemaRegistry;
///
/// let mut moi = Moi::new();
/// moi.set_type("CELL");
/// moi.insert("CELLID", "1");
///
/// let mut registry = SchemaRegistry::discovery();
/// registry.observe(&moi)?;
/// registry.freeze();
/// assert!(registry.is_frozen());
/// assert_eq!(registry.columns_for("CELL")?.len(), 1);
/// # Ok::<(), cfgsyn::schema::SchemaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    mode: SchemaMode,
    types: Vec<String>,
    schemas: HashMap<String, ColumnSet>,
    frozen: bool,
    footer_enabled: bool,
}

impl SchemaRegistry {
    /// Empty registry that learns schemas from observed instances
    pub fn discovery() -> Self {
        Self {
            mode: SchemaMode::Discovery,
            types: Vec::new(),
            schemas: HashMap::new(),
            frozen: false,
            footer_enabled: true,
        }
    }

    /// Registry frozen on the columns of a parameter file
    pub fn predefined(config: ParameterConfig) -> Self {
        let footer_enabled = config.includes_footer();
        let mut types = Vec::new();
        let mut schemas = HashMap::new();
        for (mo_type, columns) in config.into_entries() {
            if mo_type == FOOTER_ENTRY {
                continue;
            }
            types.push(mo_type.clone());
            schemas.insert(mo_type, columns);
        }

        Self {
            mode: SchemaMode::Predefined,
            types,
            schemas,
            frozen: true,
            footer_enabled,
        }
    }

    /// Schema mode
    pub fn mode(&self) -> SchemaMode {
        self.mode
    }

    /// Whether the footer summary table should be written
    pub fn footer_enabled(&self) -> bool {
        self.footer_enabled
    }

    /// Add the attributes of an instance to its type's schema
    ///
    /// Returns the number of columns added.
    pub fn observe(&mut self, moi: &Moi) -> Result<usize, SchemaError> {
        let mo_type = moi
            .mo_type()
            .ok_or_else(|| SchemaError::UnknownType(String::new()))?;
        if self.frozen {
            return Err(SchemaError::Frozen(mo_type.to_string()));
        }

        if !self.schemas.contains_key(mo_type) {
            self.types.push(mo_type.to_string());
        }
        let columns = self.schemas.entry(mo_type.to_string()).or_default();

        Ok(moi.names().filter(|name| columns.push(name)).count())
    }

    /// Freeze every schema; no column can be added afterwards
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the registry is frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Frozen columns of a type
    pub fn columns_for(&self, mo_type: &str) -> Result<&ColumnSet, SchemaError> {
        self.schemas
            .get(mo_type)
            .ok_or_else(|| SchemaError::UnknownType(mo_type.to_string()))
    }

    /// Columns for an instance that is about to be written
    ///
    /// In discovery mode an instance that does not fit the frozen schema means
    /// the inputs changed between passes, which is reported as drift. In
    /// predefined mode unknown types are reported as [`SchemaError::UnknownType`]
    /// and extra attributes are ignored.
    pub fn columns_for_instance(&self, moi: &Moi) -> Result<&ColumnSet, SchemaError> {
        let mo_type = moi.mo_type().unwrap_or_default();
        match self.mode {
            SchemaMode::Predefined => self.columns_for(mo_type),
            SchemaMode::Discovery => {
                let columns = self
                    .schemas
                    .get(mo_type)
                    .ok_or_else(|| SchemaError::TypeDrift(mo_type.to_string()))?;
                if let Some(attribute) = moi.names().find(|name| !columns.contains(name)) {
                    return Err(SchemaError::AttributeDrift {
                        mo_type: mo_type.to_string(),
                        attribute: attribute.to_string(),
                    });
                }
                Ok(columns)
            }
        }
    }

    /// Known types in first-seen (or configured) order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Number of known types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no type is known
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
