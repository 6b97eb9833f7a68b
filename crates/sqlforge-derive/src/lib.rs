//! Derive macros for sqlforge
//!
//! Provides the `#[derive(Entity)]` macro.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod entity;

/// Derive the `Entity` accessor trait for a struct.
///
/// Every non-skipped field must implement `serde::Serialize`; field values
/// are read through `serde_json::to_value`.
///
/// # Example
///
/// ```ignore
/// use sqlforge::Entity;
///
/// #[derive(Entity, serde::Serialize)]
/// #[entity(table = "Users")]
/// struct User {
///     id: i64,
///     name: String,
///     #[entity(column = "EmailAddress")]
///     email: Option<String>,
/// }
/// ```
///
/// # Generated
///
/// - `fn table_name() -> &'static str` - Table name
/// - `fn columns() -> &'static [&'static str]` - Column names in field order
/// - `fn read_value(&self, column: &str) -> Value` - Field value by column
///
/// # Attributes
///
/// - `#[entity(table = "name")]` - Table name (defaults to the struct name)
/// - `#[entity(rename_all = "style")]` - Column naming style for all fields:
///   `PascalCase` (default), `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`
/// - `#[entity(column = "name")]` - Map one field to an explicit column name
/// - `#[entity(skip)]` - Exclude a field from the column list
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
