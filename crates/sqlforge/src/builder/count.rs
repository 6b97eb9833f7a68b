//! Count-query deriver.
//!
//! Post-processes the already-rendered buffer text instead of consulting
//! structural state: the projection of the first `SELECT ... FROM` is
//! replaced with `COUNT(*)` and any trailing ordering/pagination clauses are
//! cut off. The transformation is purely textual and only valid for
//! SELECT-shaped statements without an earlier nested SELECT; a structural
//! rework would re-render from retained clause segments instead (see
//! DESIGN.md).

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::QueryBuilder;

static SELECT_FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)SELECT.*? FROM").expect("select/from regex"));
static ORDER_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ORDER BY").expect("order by regex"));
static OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)OFFSET").expect("offset regex"));

impl QueryBuilder {
    /// Append a derived `SELECT COUNT(*)` variant of the current SELECT as a
    /// second statement.
    ///
    /// A no-op on an empty or non-SELECT-shaped buffer: the builder is
    /// returned unchanged. Otherwise the current statement is terminated
    /// with a separator if needed, and the derived statement — projection
    /// replaced, text truncated before `ORDER BY` (when ordering was
    /// attached) and before `OFFSET` — is appended.
    pub fn add_count_query(&mut self) -> &mut Self {
        let trimmed = self.text().trim();
        if trimmed.is_empty() || !SELECT_FROM_RE.is_match(trimmed) {
            return self;
        }

        // end_statement resets the ordering state, so capture both the state
        // and the source text (minus any separator) first.
        let ordered = self.order_state.is_attached();
        let source = trimmed
            .trim_end_matches(crate::builder::STATEMENT_SEPARATOR)
            .to_string();
        if !trimmed.ends_with(crate::builder::STATEMENT_SEPARATOR) {
            self.end_statement();
        }

        let count_statement = derive_count_statement(&source, ordered);
        tracing::trace!(statement = %count_statement, "derived count query");
        self.append_line(&count_statement);
        self
    }
}

fn derive_count_statement(text: &str, ordered: bool) -> String {
    let mut statement = SELECT_FROM_RE
        .replace(text.trim(), "SELECT COUNT(*) FROM")
        .into_owned();

    if ordered {
        if let Some(m) = ORDER_BY_RE.find(&statement) {
            statement.truncate(m.start());
        }
    }
    if let Some(m) = OFFSET_RE.find(&statement) {
        statement.truncate(m.start());
    }

    statement
}
