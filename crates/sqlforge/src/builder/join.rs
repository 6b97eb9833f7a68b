//! JOIN facet.
//!
//! Each call appends one independent join fragment with a single-condition
//! ON clause. The builder does not check that the referenced tables exist in
//! the FROM clause.

use crate::builder::QueryBuilder;
use crate::clause::JoinKind;
use crate::ident::format_selector;

impl QueryBuilder {
    fn join(
        &mut self,
        kind: JoinKind,
        join_table: &str,
        join_column: &str,
        parent_table: &str,
        parent_column: &str,
    ) -> &mut Self {
        self.append_line(&format!(
            "{} JOIN {} ON {}.{} = {}.{}",
            kind.keyword(),
            format_selector(join_table),
            format_selector(join_table),
            format_selector(join_column),
            format_selector(parent_table),
            format_selector(parent_column),
        ));
        self
    }

    /// Append `INNER JOIN <table> ON <table>.<col> = <parent>.<col>`.
    pub fn inner_join(
        &mut self,
        join_table: &str,
        join_column: &str,
        parent_table: &str,
        parent_column: &str,
    ) -> &mut Self {
        self.join(JoinKind::Inner, join_table, join_column, parent_table, parent_column)
    }

    /// Append `LEFT JOIN <table> ON <table>.<col> = <parent>.<col>`.
    pub fn left_join(
        &mut self,
        join_table: &str,
        join_column: &str,
        parent_table: &str,
        parent_column: &str,
    ) -> &mut Self {
        self.join(JoinKind::Left, join_table, join_column, parent_table, parent_column)
    }

    /// Append `RIGHT JOIN <table> ON <table>.<col> = <parent>.<col>`.
    pub fn right_join(
        &mut self,
        join_table: &str,
        join_column: &str,
        parent_table: &str,
        parent_column: &str,
    ) -> &mut Self {
        self.join(JoinKind::Right, join_table, join_column, parent_table, parent_column)
    }
}
