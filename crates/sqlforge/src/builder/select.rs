//! SELECT / FROM / COUNT-expression facet.

use crate::builder::QueryBuilder;
use crate::ident::{WILDCARD, format_selector, format_selectors};

impl QueryBuilder {
    /// Append `SELECT <columns>` with each column formatted.
    pub fn select<'a>(&mut self, columns: impl IntoIterator<Item = &'a str>) -> &mut Self {
        let cols = format_selectors(columns).join(", ");
        self.append(&format!("SELECT {cols}"));
        self
    }

    /// `SELECT *`.
    pub fn select_all(&mut self) -> &mut Self {
        self.select([WILDCARD])
    }

    /// Append `SELECT TOP <n> <columns>`, a row-limited projection.
    pub fn select_top<'a>(
        &mut self,
        number_of_rows: u64,
        columns: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        let cols = format_selectors(columns).join(", ");
        self.append_line(&format!("SELECT TOP {number_of_rows} {cols}"));
        self
    }

    /// `SELECT TOP <n> *`.
    pub fn select_top_all(&mut self, number_of_rows: u64) -> &mut Self {
        self.select_top(number_of_rows, [WILDCARD])
    }

    /// Append `FROM <tables>` with each table formatted.
    pub fn from<'a>(&mut self, tables: impl IntoIterator<Item = &'a str>) -> &mut Self {
        let tables = format_selectors(tables).join(", ");
        self.append_line(&format!("FROM {tables}"));
        self
    }

    /// Append a `COUNT(<column>)` expression fragment.
    ///
    /// An expression builder, not a full statement; compose it inside a
    /// projection.
    pub fn count(&mut self, column: &str) -> &mut Self {
        self.append(&format!("COUNT({})", format_selector(column)));
        self
    }

    /// Append a `COUNT(*)` expression fragment.
    pub fn count_all(&mut self) -> &mut Self {
        self.append("COUNT(*)");
        self
    }
}
