//! DELETE facet.

use crate::builder::QueryBuilder;
use crate::entity::Entity;
use crate::ident::format_selector;

impl QueryBuilder {
    /// Append `DELETE FROM <table>`. Scope it with the WHERE facet; an
    /// unfiltered delete is the caller's decision.
    pub fn delete(&mut self, table: &str) -> &mut Self {
        self.append_line(&format!("DELETE FROM {}", format_selector(table)));
        self
    }

    /// `DELETE FROM` the table resolved from the entity type.
    pub fn delete_entity<E: Entity>(&mut self) -> &mut Self {
        self.delete(E::table_name())
    }
}
