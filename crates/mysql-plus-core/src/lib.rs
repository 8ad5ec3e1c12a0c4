//! # mysql-plus-core
//!
//! Statement compilation for the three MySQL bulk-write forms a generic
//! query builder usually leaves out:
//!
//! - `REPLACE INTO ...`
//! - `INSERT IGNORE INTO ...`
//! - `INSERT INTO ... ON DUPLICATE KEY UPDATE ...`
//!
//! This crate is pure string assembly plus parameter bookkeeping: every
//! compile function returns SQL text with `?` placeholders and expects the
//! caller to pass the matching [`SqlValue`] bindings to its driver. Nothing
//! here touches a connection.
//!
//! # Example
//!
//! ```rust
//! use mysql_plus_core::{compile_replace, Row, RowBatch};
//!
//! let batch: RowBatch = Row::new().set("id", 1_i64).set("name", "x").into();
//! let sql = compile_replace("users", &batch);
//!
//! assert_eq!(sql, "replace into `users` (`id`, `name`) values (?, ?)");
//! ```
//!
//! # Raw SQL expressions
//!
//! A value may be a [`SqlValue::Expr`]: raw SQL text inlined verbatim into
//! the statement instead of bound as a parameter. The compiler renders an
//! `Expr` in place of its `?` token and [`clean_bindings`] strips it from
//! the binding list, so placeholders and bindings always stay in lockstep.
//!
//! ```rust
//! use mysql_plus_core::{compile_replace, clean_bindings, Row, RowBatch, SqlValue};
//!
//! let batch: RowBatch = Row::new()
//!     .set("id", 7_i64)
//!     .set("updated_at", SqlValue::expr("NOW()"))
//!     .into();
//! let sql = compile_replace("users", &batch);
//! let params = clean_bindings(batch.bindings());
//!
//! assert_eq!(sql, "replace into `users` (`id`, `updated_at`) values (?, NOW())");
//! assert_eq!(params.len(), 1);
//! ```
//!
//! # Column derivation
//!
//! Row keys are kept in ascending lexicographic order, so the column list
//! and the binding order agree regardless of insertion order. The column
//! list is derived from the *first* row of a batch only; rows with
//! differing key sets produce a syntactically valid but semantically wrong
//! statement. That mismatch is not validated here.

mod compile;
mod quote;
mod row;
mod value;

pub use compile::{
    compile_insert_ignore, compile_insert_on_duplicate, compile_replace, duplicatize, parameterize,
};
pub use quote::{columnize, quote};
pub use row::{clean_bindings, Row, RowBatch};
pub use value::{SqlValue, ToSqlValue};
