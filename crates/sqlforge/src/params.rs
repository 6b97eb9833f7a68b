//! Parameter storage for the statement under construction.

use serde_json::Value;

use crate::error::{BuilderError, BuilderResult};

/// An insertion-ordered mapping from formatted parameter name to bound value.
///
/// Keys carry the `@` marker (e.g. `@Name`). Insertion order is irrelevant to
/// the statement semantics but preserved for determinism. Names must be
/// unique within one builder: inserting a duplicate fails fast instead of
/// silently overwriting the bound value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, Value)>,
}

impl ParamMap {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter under its fully formatted name.
    ///
    /// Fails with [`BuilderError::DuplicateParameter`] if the name is taken.
    pub(crate) fn insert(&mut self, name: String, value: Value) -> BuilderResult<()> {
        if self.contains(&name) {
            return Err(BuilderError::DuplicateParameter(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    /// Look up a bound value by its formatted name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether a name is already bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no parameters are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Iterate over formatted parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut params = ParamMap::new();
        params.insert("@Name".to_string(), Value::from("bob")).unwrap();
        assert_eq!(params.get("@Name"), Some(&Value::from("bob")));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut params = ParamMap::new();
        params.insert("@Name".to_string(), Value::from(1)).unwrap();
        let err = params.insert("@Name".to_string(), Value::from(2)).unwrap_err();
        assert!(err.is_duplicate_parameter());
        // The original binding is untouched.
        assert_eq!(params.get("@Name"), Some(&Value::from(1)));
    }

    #[test]
    fn preserves_insertion_order() {
        let mut params = ParamMap::new();
        params.insert("@b".to_string(), Value::from(1)).unwrap();
        params.insert("@a".to_string(), Value::from(2)).unwrap();
        let names: Vec<&str> = params.names().collect();
        assert_eq!(names, vec!["@b", "@a"]);
    }
}
