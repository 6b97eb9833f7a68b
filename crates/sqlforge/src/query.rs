//! The immutable result of a finished build.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BuilderError, BuilderResult};
use crate::params::ParamMap;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Za-z_][A-Za-z0-9_]*").expect("placeholder regex")
});

/// Final statement text plus the parameter map, handed to an external
/// execution layer for real parameter binding.
///
/// Created once at the end of a builder's life and never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterizedQuery {
    /// The assembled statement text.
    pub text: String,
    /// Bound parameters, keyed by formatted name (`@`-prefixed).
    pub parameters: ParamMap,
}

impl ParameterizedQuery {
    /// Check the placeholder/parameter bijection: every `@name` token in the
    /// text must have a bound parameter, and every bound parameter must be
    /// referenced at least once.
    pub fn verify_parameters(&self) -> BuilderResult<()> {
        let referenced: BTreeSet<&str> = PLACEHOLDER_RE
            .find_iter(&self.text)
            .map(|m| m.as_str())
            .collect();

        for name in &referenced {
            if !self.parameters.contains(name) {
                return Err(BuilderError::UnboundPlaceholder(name.to_string()));
            }
        }
        for name in self.parameters.names() {
            if !referenced.contains(name) {
                return Err(BuilderError::UnusedParameter(name.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn query(text: &str, params: &[(&str, i64)]) -> ParameterizedQuery {
        let mut map = ParamMap::new();
        for (name, value) in params {
            map.insert(name.to_string(), Value::from(*value)).unwrap();
        }
        ParameterizedQuery {
            text: text.to_string(),
            parameters: map,
        }
    }

    #[test]
    fn verify_accepts_bijection() {
        let q = query("SELECT * FROM [T] WHERE [a] = @a AND [b] = @b", &[("@a", 1), ("@b", 2)]);
        assert!(q.verify_parameters().is_ok());
    }

    #[test]
    fn verify_rejects_unbound_placeholder() {
        let q = query("SELECT * FROM [T] WHERE [a] = @a", &[]);
        assert!(matches!(
            q.verify_parameters(),
            Err(BuilderError::UnboundPlaceholder(name)) if name == "@a"
        ));
    }

    #[test]
    fn verify_rejects_unused_parameter() {
        let q = query("SELECT * FROM [T]", &[("@ghost", 0)]);
        assert!(matches!(
            q.verify_parameters(),
            Err(BuilderError::UnusedParameter(name)) if name == "@ghost"
        ));
    }
}
