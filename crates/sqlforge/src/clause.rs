//! Clause-level enums shared by the builder facets.

/// Boolean operator prefixed to a WHERE-family fragment once the WHERE
/// keyword is attached.
///
/// `Empty` emits no operator at all, which is what the first condition inside
/// a parenthesized group wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClauseOperator {
    #[default]
    And,
    Or,
    Empty,
}

impl ClauseOperator {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Empty => "",
        }
    }
}

/// Join flavor emitted before the `JOIN` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// Sort direction for [`order`](crate::QueryBuilder::order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction string; anything that is not `ASC`
    /// (case-insensitive) is descending.
    pub fn parse(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("ASC") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub(crate) fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// One-way attachment state for a clause keyword (WHERE, ORDER BY, VALUES,
/// SET).
///
/// Each clause category owns one of these instead of a raw boolean so the
/// transition is explicit: [`attach`](ClauseState::attach) returns `true`
/// exactly once, on the call that emits the keyword.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ClauseState {
    #[default]
    Detached,
    Attached,
}

impl ClauseState {
    /// Transition to `Attached`, reporting whether this call did the
    /// transition.
    pub(crate) fn attach(&mut self) -> bool {
        match self {
            Self::Detached => {
                *self = Self::Attached;
                true
            }
            Self::Attached => false,
        }
    }

    pub(crate) fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }

    /// Reset at a statement boundary so the next statement in the buffer
    /// re-emits the keyword.
    pub(crate) fn reset(&mut self) {
        *self = Self::Detached;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_state_attaches_once() {
        let mut state = ClauseState::default();
        assert!(!state.is_attached());
        assert!(state.attach());
        assert!(!state.attach());
        assert!(state.is_attached());
        state.reset();
        assert!(state.attach());
    }

    #[test]
    fn sort_direction_parse() {
        assert_eq!(SortDirection::parse("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Desc);
    }
}
