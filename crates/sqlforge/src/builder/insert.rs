//! INSERT / VALUES facet.

use serde_json::Value;

use crate::builder::QueryBuilder;
use crate::entity::Entity;
use crate::error::{BuilderError, BuilderResult};
use crate::ident::{format_parameter_name, format_selector};

impl QueryBuilder {
    /// Append `INSERT INTO <table>(<columns>)` and set the active insert
    /// column list consumed by [`values`](QueryBuilder::values).
    pub fn insert_into<'a>(
        &mut self,
        table: &str,
        columns: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        let columns: Vec<String> = columns.into_iter().map(String::from).collect();
        let formatted: Vec<String> = columns.iter().map(|c| format_selector(c)).collect();
        self.append_line(&format!(
            "INSERT INTO {}({})",
            format_selector(table),
            formatted.join(", ")
        ));
        self.insert_columns = columns;
        self
    }

    /// Append `OUTPUT Inserted.<column>`, asking the execution layer to hand
    /// the generated column back.
    pub fn output_inserted(&mut self, column: &str) -> &mut Self {
        self.append_line(&format!("OUTPUT Inserted.{}", format_selector(column)));
        self
    }

    /// Append one parenthesized value group, emitting the `VALUES` keyword
    /// on the first call of the statement.
    ///
    /// Parameter names combine each column name with a monotonically
    /// increasing row index (`Name1`, `Name2`, ...), so repeated calls build
    /// a multi-row insert without name collisions. Fails with
    /// [`BuilderError::InsertArityMismatch`] when fewer values than active
    /// columns are supplied.
    pub fn values(&mut self, values: impl IntoIterator<Item = Value>) -> BuilderResult<&mut Self> {
        let values: Vec<Value> = values.into_iter().collect();
        if values.len() < self.insert_columns.len() {
            return Err(BuilderError::InsertArityMismatch {
                expected: self.insert_columns.len(),
                provided: values.len(),
            });
        }

        self.insert_row_index += 1;
        if self.values_state.attach() {
            self.append("VALUES");
        } else {
            self.append(",");
        }

        let columns = std::mem::take(&mut self.insert_columns);
        let mut group = String::from("(");
        for (i, (column, value)) in columns.iter().zip(values).enumerate() {
            let name = format!("{column}{}", self.insert_row_index);
            self.add_parameter(&name, value)?;
            if i > 0 {
                group.push_str(", ");
            }
            group.push_str(&format_parameter_name(&name));
        }
        group.push(')');
        self.insert_columns = columns;

        self.append(&group);
        Ok(self)
    }

    /// Insert one entity, requesting its id column back via
    /// `OUTPUT Inserted`.
    ///
    /// Table and column list come from the [`Entity`] implementation.
    pub fn insert_entity<E: Entity>(
        &mut self,
        entity: &E,
        id_column: &str,
    ) -> BuilderResult<&mut Self> {
        self.insert_into(E::table_name(), E::columns().iter().copied());
        self.output_inserted(id_column);
        let row: Vec<Value> = E::columns().iter().map(|c| entity.read_value(c)).collect();
        self.values(row)
    }

    /// Insert a collection of entities as one multi-row `VALUES` clause.
    pub fn insert_entities<'e, E: Entity + 'e>(
        &mut self,
        entities: impl IntoIterator<Item = &'e E>,
    ) -> BuilderResult<&mut Self> {
        self.insert_into(E::table_name(), E::columns().iter().copied());
        for entity in entities {
            let row: Vec<Value> = E::columns().iter().map(|c| entity.read_value(c)).collect();
            self.values(row)?;
        }
        Ok(self)
    }
}
