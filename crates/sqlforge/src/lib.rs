//! # sqlforge
//!
//! A fluent, parameter-safe T-SQL statement builder.
//!
//! `sqlforge` assembles a statement as text plus a separate name→value
//! parameter map — it never touches a database connection and never parses
//! SQL back. Chain facet methods against one mutable [`QueryBuilder`]; each
//! call appends fragments and/or registers bind parameters, and a terminal
//! [`build`](QueryBuilder::build) snapshots the result into an immutable
//! [`ParameterizedQuery`] for whatever execution layer does the real
//! binding.
//!
//! ## Features
//!
//! - **Keyword-once clauses**: `WHERE`, `ORDER BY`, `VALUES` and `SET` are
//!   emitted exactly once per statement no matter how many calls compose
//!   the clause
//! - **Bracket-quoted identifiers**: `Name` → `[Name]`; `*` and
//!   pre-bracketed names pass through
//! - **Named bind parameters**: `@`-prefixed, unique per builder, handed
//!   off as data
//! - **Entity-driven writes**: INSERT/UPDATE/DELETE from any type
//!   implementing [`Entity`] (derive available via `#[derive(Entity)]`)
//! - **Derived count queries**: a `SELECT COUNT(*)` companion statement for
//!   paginated SELECTs
//!
//! ## Example
//!
//! ```
//! use sqlforge::{ClauseOperator, QueryBuilder};
//!
//! # fn main() -> Result<(), sqlforge::BuilderError> {
//! let mut qb = QueryBuilder::new();
//! qb.select(["Id", "Name"])
//!     .from(["Users"])
//!     .where_equals("Status", "active", None, ClauseOperator::And)?
//!     .order_by("Name", true)
//!     .paginate(2, 25)?;
//!
//! let query = qb.build();
//! assert!(query.text.contains("WHERE [Status] = @Status"));
//! assert_eq!(query.parameters.len(), 3); // @Status, @start, @pageSize
//! # Ok(())
//! # }
//! ```
//!
//! Builders are single-threaded and request-scoped: one instance per
//! statement, discarded after `build`.

pub mod builder;
pub mod clause;
pub mod entity;
pub mod error;
pub mod helper;
pub mod ident;
pub mod params;
pub mod query;

pub use builder::QueryBuilder;
pub use clause::{ClauseOperator, JoinKind, SortDirection};
pub use entity::{DEFAULT_ID_COLUMN, Entity};
pub use error::{BuilderError, BuilderResult};
pub use ident::{format_parameter_name, format_selector};
pub use params::ParamMap;
pub use query::ParameterizedQuery;

/// Bind parameter value type.
pub use serde_json::Value;

// Re-export serde_json for use by the derive macro.
#[doc(hidden)]
pub use serde_json;

#[cfg(feature = "derive")]
pub use sqlforge_derive::Entity;
