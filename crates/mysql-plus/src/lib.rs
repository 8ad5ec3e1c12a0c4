//! # mysql-plus
//!
//! Bulk-write extensions for MySQL models, covering the statement forms a
//! generic query builder leaves out:
//!
//! - `REPLACE INTO` — delete-and-insert on key collision
//! - `INSERT IGNORE INTO` — silently skip conflicting rows
//! - `INSERT ... ON DUPLICATE KEY UPDATE` — upsert every non-key column
//!
//! Statement text and bindings are compiled by `mysql-plus-core`;
//! execution goes through sqlx. An empty batch is a successful no-op and
//! never touches the database.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mysql_plus::{Model, Row};
//! use sqlx::MySqlPool;
//!
//! struct User;
//!
//! impl Model for User {
//!     fn table_name() -> &'static str {
//!         "users"
//!     }
//!
//!     fn pk_column() -> &'static str {
//!         "id"
//!     }
//! }
//!
//! async fn example(pool: &MySqlPool) -> mysql_plus::Result<()> {
//!     // Upsert a batch; `id` is excluded from the update clause
//!     User::bulk()
//!         .insert_on_duplicate(pool, vec![
//!             Row::new().set("id", 1_i64).set("name", "alice"),
//!             Row::new().set("id", 2_i64).set("name", "bob"),
//!         ])
//!         .await?;
//!
//!     // Write into another schema's table
//!     User::bulk()
//!         .set_table("archive.users")
//!         .replace(pool, Row::new().set("id", 1_i64).set("name", "alice"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Raw SQL expressions
//!
//! A [`SqlValue::Expr`] value is inlined verbatim into the statement text
//! instead of bound as a parameter:
//!
//! ```ignore
//! User::bulk()
//!     .replace(pool, Row::new()
//!         .set("id", 1_i64)
//!         .set("updated_at", SqlValue::expr("NOW()")))
//!     .await?;
//! ```

mod bulk;
mod error;
mod model;

pub use bulk::BulkWriter;
pub use error::{BulkError, Result};
pub use model::Model;

// Re-export commonly used types from mysql-plus-core
pub use mysql_plus_core::{Row, RowBatch, SqlValue, ToSqlValue};
