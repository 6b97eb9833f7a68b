//! UPDATE / SET facet.

use serde_json::Value;

use crate::builder::QueryBuilder;
use crate::clause::ClauseOperator;
use crate::entity::Entity;
use crate::error::BuilderResult;
use crate::ident::{format_parameter_name, format_selector};

impl QueryBuilder {
    /// One `<col> = @param` assignment; emits `SET` on the first call of the
    /// statement and a comma separator afterwards.
    ///
    /// The parameter name is the column name plus an optional per-row index,
    /// so batched updates do not collide.
    fn set(&mut self, column: &str, value: Value, index: Option<usize>) -> BuilderResult<()> {
        if self.set_state.attach() {
            self.append("SET");
        } else {
            self.append(",");
        }

        let name = match index {
            Some(i) => format!("{column}{i}"),
            None => column.to_string(),
        };
        let formatted = format_parameter_name(&name);
        self.append(&format!("{} = {}", format_selector(column), formatted));
        self.add_parameter(&name, value)
    }

    fn update_row<E: Entity>(
        &mut self,
        entity: &E,
        table: &str,
        id_column: &str,
        index: Option<usize>,
        columns: &[&str],
    ) -> BuilderResult<()> {
        self.append("UPDATE");
        self.append(&format_selector(table));

        // The id column drives the WHERE predicate below; assigning it too
        // would register the same parameter name twice.
        for column in columns.iter().filter(|c| **c != id_column) {
            self.set(column, entity.read_value(column), index)?;
        }

        let id_param = match index {
            Some(i) => format!("{id_column}{i}"),
            None => id_column.to_string(),
        };
        self.where_equals(
            id_column,
            entity.read_value(id_column),
            Some(&id_param),
            ClauseOperator::And,
        )?;
        Ok(())
    }

    /// Update one entity: `UPDATE <table> SET ... WHERE <id> = @<id>`.
    ///
    /// Table and column list come from the [`Entity`] implementation; the id
    /// column is excluded from the assignments.
    pub fn update_entity<E: Entity>(
        &mut self,
        entity: &E,
        id_column: &str,
    ) -> BuilderResult<&mut Self> {
        self.update_row(entity, E::table_name(), id_column, None, E::columns())?;
        Ok(self)
    }

    /// Update one entity against an explicit table and column subset.
    pub fn update_entity_with<E: Entity>(
        &mut self,
        entity: &E,
        table: &str,
        id_column: &str,
        columns: &[&str],
    ) -> BuilderResult<&mut Self> {
        self.update_row(entity, table, id_column, None, columns)?;
        Ok(self)
    }

    /// Update a collection of entities as one batch: one UPDATE statement
    /// per entity, separated by statement terminators, with per-row
    /// parameter suffixes (`@Name0`, `@Name1`, ...).
    pub fn update_entities<'e, E: Entity + 'e>(
        &mut self,
        entities: impl IntoIterator<Item = &'e E>,
        id_column: &str,
    ) -> BuilderResult<&mut Self> {
        for (index, entity) in entities.into_iter().enumerate() {
            self.update_row(entity, E::table_name(), id_column, Some(index), E::columns())?;
            self.end_statement();
        }
        Ok(self)
    }
}
