use std::collections::HashMap;

/// A managed object instance collected from one `class` block
///
/// Attributes keep the order in which they were first seen. Recording an
/// attribute again replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Moi {
    mo_type: Option<String>,
    attributes: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl Moi {
    /// Create an empty instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance of the given type
    pub fn of_type(mo_type: impl Into<String>) -> Self {
        Self {
            mo_type: Some(mo_type.into()),
            ..Default::default()
        }
    }

    /// Builder-style attribute insertion
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Managed object type, if the type-naming element has been seen
    pub fn mo_type(&self) -> Option<&str> {
        self.mo_type.as_deref()
    }

    /// Set the managed object type
    pub fn set_type(&mut self, mo_type: impl Into<String>) {
        self.mo_type = Some(mo_type.into());
    }

    /// Record an attribute value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(&i) => self.attributes[i].1 = value,
            None => {
                self.positions.insert(name.clone(), self.attributes.len());
                self.attributes.push((name, value));
            }
        }
    }

    /// Value of an attribute
    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&i| self.attributes[i].1.as_str())
    }

    /// Whether the attribute was recorded
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Attribute names in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }

    /// Number of recorded attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if no attribute was recorded
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Forget all attributes, keeping the type
    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
        self.positions.clear();
    }

    /// Move the collected instance out, leaving this one with the same type
    /// and no attributes
    pub fn take(&mut self) -> Moi {
        Moi {
            mo_type: self.mo_type.clone(),
            attributes: std::mem::take(&mut self.attributes),
            positions: std::mem::take(&mut self.positions),
        }
    }
}
