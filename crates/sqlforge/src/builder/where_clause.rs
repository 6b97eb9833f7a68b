//! WHERE facet and boolean grouping — the central clause state machine.
//!
//! The first WHERE-family call attaches the clause and emits the `WHERE`
//! keyword; every later call prefixes its fragment with the caller-supplied
//! [`ClauseOperator`] instead. The keyword therefore appears exactly once per
//! statement regardless of call count.

use serde_json::Value;

use crate::builder::QueryBuilder;
use crate::clause::ClauseOperator;
use crate::error::BuilderResult;
use crate::ident::{format_parameter_name, format_selector};

impl QueryBuilder {
    /// Append a WHERE-family fragment, emitting the `WHERE` keyword on the
    /// first call and the boolean operator on subsequent ones.
    pub(crate) fn push_where(&mut self, fragment: &str, op: ClauseOperator) {
        if self.where_state.attach() {
            self.append("WHERE");
            self.append_line(fragment);
        } else {
            match op.keyword() {
                "" => self.append_line(fragment),
                kw => self.append_line(&format!("{kw} {fragment}")),
            }
        }
    }

    fn where_comparison(
        &mut self,
        column: &str,
        operator: &str,
        value: Value,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        let name = parameter_name.unwrap_or(column);
        let fragment = format!(
            "{} {} {}",
            format_selector(column),
            operator,
            format_parameter_name(name)
        );
        self.add_parameter(name, value)?;
        self.push_where(&fragment, op);
        Ok(self)
    }

    /// Append a caller-supplied WHERE fragment verbatim (after the
    /// keyword/operator logic). No parameter is registered.
    pub fn custom_where(&mut self, clause: &str, op: ClauseOperator) -> &mut Self {
        self.push_where(clause, op);
        self
    }

    /// Append a caller-supplied WHERE fragment and bind one parameter.
    pub fn custom_where_bind(
        &mut self,
        clause: &str,
        parameter_name: &str,
        value: impl Into<Value>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.add_parameter(parameter_name, value.into())?;
        self.push_where(clause, op);
        Ok(self)
    }

    /// `<col> = @param`. The parameter name defaults to the column name.
    pub fn where_equals(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, "=", value.into(), parameter_name, op)
    }

    /// `<col> > @param`.
    pub fn where_greater_than(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, ">", value.into(), parameter_name, op)
    }

    /// `<col> < @param`.
    pub fn where_less_than(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, "<", value.into(), parameter_name, op)
    }

    /// `<col> >= @param`.
    pub fn where_greater_than_or_equals(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, ">=", value.into(), parameter_name, op)
    }

    /// `<col> <= @param`.
    pub fn where_less_than_or_equals(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, "<=", value.into(), parameter_name, op)
    }

    /// `<col> LIKE @param`. Combine with
    /// [`helper::like_pattern`](crate::helper::like_pattern) for contains
    /// matching.
    pub fn where_string_like(
        &mut self,
        column: &str,
        value: impl Into<Value>,
        parameter_name: Option<&str>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_comparison(column, "LIKE", value.into(), parameter_name, op)
    }

    /// `<col> IS NULL`. No parameter.
    pub fn where_is_null(&mut self, column: &str, op: ClauseOperator) -> &mut Self {
        let fragment = format!("{} IS NULL", format_selector(column));
        self.push_where(&fragment, op);
        self
    }

    /// `<col> IS NOT NULL`. No parameter.
    pub fn where_is_not_null(&mut self, column: &str, op: ClauseOperator) -> &mut Self {
        let fragment = format!("{} IS NOT NULL", format_selector(column));
        self.push_where(&fragment, op);
        self
    }

    /// `<col> IN (@wherein<col>0, ...)` — one parameter per value.
    ///
    /// An empty column name is a no-op. An empty value list produces a
    /// syntactically empty `IN()`; avoiding that is the caller's
    /// responsibility.
    pub fn where_in<T: Into<Value>>(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = T>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_list(column, values, false, op)
    }

    /// `<col> NOT IN (@wherenotin<col>0, ...)`.
    pub fn where_not_in<T: Into<Value>>(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = T>,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        self.where_list(column, values, true, op)
    }

    fn where_list<T: Into<Value>>(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = T>,
        negated: bool,
        op: ClauseOperator,
    ) -> BuilderResult<&mut Self> {
        if column.is_empty() {
            return Ok(self);
        }

        // Tag + column + ordinal keeps the names unique within this call.
        let tag = if negated { "wherenotin" } else { "wherein" };
        let mut placeholders = Vec::new();
        for (i, value) in values.into_iter().enumerate() {
            let name = format!("{tag}{column}{i}");
            self.add_parameter(&name, value.into())?;
            placeholders.push(format_parameter_name(&name));
        }

        let keyword = if negated { "NOT IN" } else { "IN" };
        let fragment = format!(
            "{} {}({})",
            format_selector(column),
            keyword,
            placeholders.join(",")
        );
        self.push_where(&fragment, op);
        Ok(self)
    }

    // ==================== Grouping ====================

    /// Open a parenthesized group: the boolean operator (or nothing for
    /// [`ClauseOperator::Empty`]) immediately followed by `(`.
    ///
    /// Attaches an empty `WHERE` first if none exists yet. Groups nest
    /// arbitrarily; the builder does not track nesting depth, so unbalanced
    /// start/end calls produce invalid SQL text rather than an error.
    pub fn group_start(&mut self, op: ClauseOperator) -> &mut Self {
        if self.where_state.attach() {
            self.append("WHERE");
        }
        self.append(&format!("{}(", op.keyword()));
        self
    }

    /// Close the innermost group.
    pub fn group_end(&mut self) -> &mut Self {
        self.append(")");
        self
    }
}
