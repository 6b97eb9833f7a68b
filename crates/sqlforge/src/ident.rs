//! Selector and parameter-name formatting.
//!
//! Identifiers are quoted bracket-style: `Name` becomes `[Name]`. The
//! wildcard selector `*` and names that already carry brackets pass through
//! unchanged, which makes [`format_selector`] idempotent. Parameter names get
//! a single `@` marker prepended unless one is already present, so
//! [`format_parameter_name`] is idempotent too.
//!
//! No escaping beyond the bracket wrapping is performed; callers are expected
//! to supply well-formed identifiers.

/// The wildcard selector, passed through unquoted.
pub const WILDCARD: &str = "*";

/// The marker character prepended to bind parameter names.
pub const PARAMETER_MARKER: char = '@';

/// Quote a table or column name bracket-style.
///
/// `*` and already-bracketed selectors are returned unchanged.
pub fn format_selector(selector: &str) -> String {
    if selector.trim() == WILDCARD || selector.contains('[') || selector.contains(']') {
        selector.to_string()
    } else {
        format!("[{selector}]")
    }
}

/// Quote each selector in a list, preserving order.
pub fn format_selectors<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    selectors.into_iter().map(format_selector).collect()
}

/// Prefix a parameter name with the bind marker unless it already has one.
pub fn format_parameter_name(name: &str) -> String {
    if name.starts_with(PARAMETER_MARKER) {
        name.to_string()
    } else {
        format!("{PARAMETER_MARKER}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_plain() {
        assert_eq!(format_selector("Name"), "[Name]");
    }

    #[test]
    fn selector_wildcard_passthrough() {
        assert_eq!(format_selector("*"), "*");
        assert_eq!(format_selector(" * "), " * ");
    }

    #[test]
    fn selector_bracketed_passthrough() {
        assert_eq!(format_selector("[Name]"), "[Name]");
        assert_eq!(format_selector("[dbo].[Users]"), "[dbo].[Users]");
    }

    #[test]
    fn selector_idempotent() {
        for s in ["Name", "*", "[Name]", "Order Details"] {
            let once = format_selector(s);
            assert_eq!(format_selector(&once), once);
        }
    }

    #[test]
    fn parameter_name_plain() {
        assert_eq!(format_parameter_name("Name"), "@Name");
    }

    #[test]
    fn parameter_name_idempotent() {
        let once = format_parameter_name("Name");
        assert_eq!(format_parameter_name(&once), once);
        assert_eq!(format_parameter_name("@Name"), "@Name");
    }

    #[test]
    fn selectors_preserve_order() {
        let formatted = format_selectors(["a", "*", "[b]"]);
        assert_eq!(formatted, vec!["[a]", "*", "[b]"]);
    }
}
