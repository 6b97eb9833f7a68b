//! The fluent statement builder.
//!
//! One mutable [`QueryBuilder`] per statement being constructed: facet
//! methods append fragments to the text buffer and/or register bind
//! parameters, returning the builder for chaining. Fallible methods return
//! `BuilderResult<&mut Self>` so `?` composes with the chain. A terminal
//! [`build`](QueryBuilder::build) snapshots the buffer and parameter map.
//!
//! ## Design
//!
//! - Every facet goes through the same three primitives (`append`,
//!   `append_line`, `add_parameter`) plus the identifier formatter; nothing
//!   writes to the buffer through another path.
//! - Keyword-once emission (one `WHERE`, one `ORDER BY`, one `VALUES`, one
//!   `SET` per statement) is tracked by an explicit [`ClauseState`] per
//!   clause category, reset at statement separators.
//! - Builders are single-threaded by contract: construct, mutate from one
//!   call stack, discard after `build`. Concurrent mutation of one builder
//!   is not supported; use one builder per statement.

mod count;
mod delete;
mod insert;
mod join;
mod order;
mod select;
mod update;
mod where_clause;


use serde_json::Value;

use crate::clause::ClauseState;
use crate::error::BuilderResult;
use crate::ident::format_parameter_name;
use crate::params::ParamMap;
use crate::query::ParameterizedQuery;

pub(crate) const STATEMENT_SEPARATOR: &str = ";";

/// Fluent builder assembling one parameterized SQL statement.
#[must_use]
#[derive(Debug, Default)]
pub struct QueryBuilder {
    text: String,
    params: ParamMap,
    pub(crate) where_state: ClauseState,
    pub(crate) order_state: ClauseState,
    pub(crate) values_state: ClauseState,
    pub(crate) set_state: ClauseState,
    /// Active column list for the current INSERT statement.
    pub(crate) insert_columns: Vec<String>,
    /// Monotonic row index; never reset, so parameter names stay distinct
    /// across every VALUES group this builder emits.
    pub(crate) insert_row_index: usize,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Text/parameter core ====================

    /// Append a fragment followed by a single trailing space.
    pub(crate) fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
        self.text.push(' ');
    }

    /// Append a fragment, a trailing space, and a line break. Used to
    /// separate major clauses.
    pub(crate) fn append_line(&mut self, fragment: &str) {
        self.append(fragment);
        self.text.push('\n');
    }

    /// Register a bind parameter under its formatted name.
    ///
    /// Fails fast on a duplicate name; overwriting would silently corrupt
    /// the bound value.
    pub(crate) fn add_parameter(&mut self, name: &str, value: Value) -> BuilderResult<()> {
        self.params.insert(format_parameter_name(name), value)
    }

    /// Emit a statement separator and reset the per-statement clause states
    /// so the next statement re-emits its keywords.
    pub(crate) fn end_statement(&mut self) {
        self.append_line(STATEMENT_SEPARATOR);
        self.where_state.reset();
        self.order_state.reset();
        self.values_state.reset();
        self.set_state.reset();
    }

    // ==================== Result snapshot ====================

    /// The statement text assembled so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Snapshot the buffer and parameter map into an immutable result.
    pub fn build(&self) -> ParameterizedQuery {
        tracing::debug!(
            text_len = self.text.len(),
            parameters = self.params.len(),
            "built parameterized query"
        );
        ParameterizedQuery {
            text: self.text.clone(),
            parameters: self.params.clone(),
        }
    }
}
