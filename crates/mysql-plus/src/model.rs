//! Model trait and related types.
//!
//! A `Model` names a database table and its primary-key column. That is
//! all the schema knowledge the bulk writer needs: the table resolves the
//! write target, and the primary key is excluded from the
//! `on duplicate key update` clause.

use crate::bulk::BulkWriter;

/// A database model that supports bulk writes.
///
/// # Example
///
/// ```ignore
/// use mysql_plus::{Model, Row};
///
/// struct User;
///
/// impl Model for User {
///     fn table_name() -> &'static str {
///         "users"
///     }
///
///     fn pk_column() -> &'static str {
///         "id"
///     }
/// }
///
/// // Upsert a batch of users
/// User::bulk()
///     .insert_on_duplicate(&pool, vec![
///         Row::new().set("id", 1_i64).set("name", "alice"),
///         Row::new().set("id", 2_i64).set("name", "bob"),
///     ])
///     .await?;
/// ```
pub trait Model: Send + Sync + 'static {
    /// Returns the table name.
    fn table_name() -> &'static str;

    /// Returns the primary key column name.
    fn pk_column() -> &'static str;

    /// Returns a new bulk writer for this model.
    fn bulk() -> BulkWriter<Self>
    where
        Self: Sized,
    {
        BulkWriter::new()
    }
}
