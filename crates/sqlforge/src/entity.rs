//! Entity introspection capability consumed by the insert/update/delete
//! facets.
//!
//! The builder never reflects over types itself; it depends on this trait
//! abstractly. Implement it by hand or use `#[derive(Entity)]` from
//! `sqlforge-derive` (re-exported when the `derive` feature is on).

use serde_json::Value;

/// Conventional id column used by entity-driven statements when the caller
/// does not name one.
pub const DEFAULT_ID_COLUMN: &str = "Id";

/// Column-level access to an entity type and its instances.
///
/// `columns()` returns projected column names in declaration order;
/// `read_value` returns the current value of one column for one instance, as
/// a [`Value`] the execution layer can bind.
pub trait Entity {
    /// The conventional table name for this entity type.
    fn table_name() -> &'static str;

    /// Projected column names, in declaration order.
    fn columns() -> &'static [&'static str];

    /// Read the value behind `column` on this instance.
    ///
    /// Unknown columns read as [`Value::Null`].
    fn read_value(&self, column: &str) -> Value;
}
