use std::collections::HashSet;

/// Insertion-ordered, deduplicating list of column names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<String>,
    members: HashSet<String>,
}

impl ColumnSet {
    /// Create an empty column set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column unless it is already present; returns true if added
    pub fn push(&mut self, name: &str) -> bool {
        if self.members.contains(name) {
            return false;
        }
        self.members.insert(name.to_string());
        self.columns.push(name.to_string());
        true
    }

    /// Membership test
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if there are no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Columns as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.columns
    }
}

impl<S: AsRef<str>> FromIterator<S> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ColumnSet::new();
        for name in iter {
            set.push(name.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates() {
        let mut set = ColumnSet::new();
        assert!(set.push("A"));
        assert!(set.push("B"));
        assert!(!set.push("A"));
        assert_eq!(set.as_slice(), &["A".to_string(), "B".to_string()]);
        assert!(set.contains("B"));
        assert!(!set.contains("C"));
    }

    #[test]
    fn test_from_iter_keeps_first_order() {
        let set: ColumnSet = ["C", "A", "C", "B", "A"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["C", "A", "B"]);
        assert_eq!(set.len(), 3);
    }
}
