//! Bulk writer: compiles and executes the three MySQL bulk-write forms.
//!
//! The writer is stateless apart from its target table name, which is set
//! once at construction (or overridden with [`BulkWriter::set_table`]) and
//! read-only afterwards, so separate batches can be written concurrently.

use mysql_plus_core::{
    clean_bindings, compile_insert_ignore, compile_insert_on_duplicate, compile_replace, RowBatch,
    SqlValue,
};
use sqlx::MySqlPool;
use std::marker::PhantomData;

use crate::error::Result;
use crate::model::Model;

/// Compiles and executes bulk writes for a model.
///
/// An empty batch is a successful no-op: nothing is compiled and the
/// database is never touched.
///
/// # Example
///
/// ```ignore
/// use mysql_plus::{Model, Row};
///
/// // REPLACE INTO `users` (`id`, `name`) VALUES (?, ?)
/// User::bulk()
///     .replace(&pool, Row::new().set("id", 1_i64).set("name", "alice"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct BulkWriter<M: Model> {
    /// Write target, possibly dotted (`db.table`)
    table: String,
    /// Phantom data for the model type
    _marker: PhantomData<M>,
}

// Manual Clone implementation to avoid M: Clone bound
impl<M: Model> Clone for BulkWriter<M> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M: Model> Default for BulkWriter<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> BulkWriter<M> {
    /// Creates a new bulk writer targeting the model's table.
    pub fn new() -> Self {
        Self {
            table: String::from(M::table_name()),
            _marker: PhantomData,
        }
    }

    /// Returns the target table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Overrides the target table name.
    #[must_use]
    pub fn set_table(mut self, table: &str) -> Self {
        self.table = String::from(table);
        self
    }

    /// Builds the `replace into` statement and bindings.
    ///
    /// Returns `None` for an empty batch.
    pub fn build_replace(&self, rows: impl Into<RowBatch>) -> Option<(String, Vec<SqlValue>)> {
        let batch = rows.into();
        if batch.is_empty() {
            return None;
        }

        let sql = compile_replace(&self.table, &batch);
        Some((sql, clean_bindings(batch.bindings())))
    }

    /// Builds the `insert ignore into` statement and bindings.
    ///
    /// Returns `None` for an empty batch.
    pub fn build_insert_ignore(
        &self,
        rows: impl Into<RowBatch>,
    ) -> Option<(String, Vec<SqlValue>)> {
        let batch = rows.into();
        if batch.is_empty() {
            return None;
        }

        let sql = compile_insert_ignore(&self.table, &batch);
        Some((sql, clean_bindings(batch.bindings())))
    }

    /// Builds the `insert into ... on duplicate key update` statement and
    /// bindings, updating every column except the model's primary key.
    ///
    /// Returns `None` for an empty batch.
    pub fn build_insert_on_duplicate(
        &self,
        rows: impl Into<RowBatch>,
    ) -> Option<(String, Vec<SqlValue>)> {
        let batch = rows.into();
        if batch.is_empty() {
            return None;
        }

        let sql = compile_insert_on_duplicate(&self.table, &batch, M::pk_column());
        Some((sql, clean_bindings(batch.bindings())))
    }

    /// Writes a batch using `replace into`.
    ///
    /// Returns the number of affected rows; `Ok(0)` for an empty batch.
    pub async fn replace(&self, pool: &MySqlPool, rows: impl Into<RowBatch>) -> Result<u64> {
        match self.build_replace(rows) {
            Some((sql, bindings)) => execute(pool, &sql, bindings).await,
            None => Ok(0),
        }
    }

    /// Writes a batch using `insert ignore into`.
    ///
    /// Returns the number of affected rows; `Ok(0)` for an empty batch.
    pub async fn insert_ignore(&self, pool: &MySqlPool, rows: impl Into<RowBatch>) -> Result<u64> {
        match self.build_insert_ignore(rows) {
            Some((sql, bindings)) => execute(pool, &sql, bindings).await,
            None => Ok(0),
        }
    }

    /// Writes a batch using `insert into ... on duplicate key update`.
    ///
    /// Returns the number of affected rows; `Ok(0)` for an empty batch.
    pub async fn insert_on_duplicate(
        &self,
        pool: &MySqlPool,
        rows: impl Into<RowBatch>,
    ) -> Result<u64> {
        match self.build_insert_on_duplicate(rows) {
            Some((sql, bindings)) => execute(pool, &sql, bindings).await,
            None => Ok(0),
        }
    }
}

/// Executes a compiled statement, binding each value in order.
async fn execute(pool: &MySqlPool, sql: &str, bindings: Vec<SqlValue>) -> Result<u64> {
    tracing::debug!(sql, bindings = bindings.len(), "executing bulk write");

    let mut query = sqlx::query(sql);
    for binding in bindings {
        query = bind_value(query, binding);
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

/// Binds a SqlValue parameter to a query.
fn bind_value<'q>(
    query: sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments>,
    value: SqlValue,
) -> sqlx::query::Query<'q, sqlx::MySql, sqlx::mysql::MySqlArguments> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
        // Expressions are inlined into the statement text and stripped
        // from the binding list before execution
        SqlValue::Expr(_) => query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysql_plus_core::Row;

    struct TestModel;

    impl Model for TestModel {
        fn table_name() -> &'static str {
            "test_models"
        }

        fn pk_column() -> &'static str {
            "id"
        }
    }

    #[test]
    fn test_build_replace() {
        let (sql, bindings) = TestModel::bulk()
            .build_replace(Row::new().set("id", 1_i64).set("name", "x"))
            .unwrap();

        assert_eq!(
            sql,
            "replace into `test_models` (`id`, `name`) values (?, ?)"
        );
        assert_eq!(
            bindings,
            vec![SqlValue::Int(1), SqlValue::Text(String::from("x"))]
        );
    }

    #[test]
    fn test_build_insert_ignore_batch() {
        let (sql, bindings) = TestModel::bulk()
            .build_insert_ignore(vec![
                Row::new().set("id", 1_i64),
                Row::new().set("id", 2_i64),
            ])
            .unwrap();

        assert_eq!(sql, "insert ignore into `test_models` (`id`) values (?), (?)");
        assert_eq!(bindings, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_build_insert_on_duplicate_excludes_pk() {
        let (sql, _) = TestModel::bulk()
            .build_insert_on_duplicate(Row::new().set("id", 1_i64).set("name", "x"))
            .unwrap();

        assert!(sql.ends_with("on duplicate key update `name`=values(`name`)"));
        assert!(!sql.contains("`id`=values(`id`)"));
    }

    #[test]
    fn test_empty_batch_builds_nothing() {
        let writer = TestModel::bulk();
        let empty: Vec<Row> = vec![];

        assert!(writer.build_replace(empty.clone()).is_none());
        assert!(writer.build_insert_ignore(empty.clone()).is_none());
        assert!(writer.build_insert_on_duplicate(empty).is_none());
    }

    #[test]
    fn test_set_table_overrides_model_table() {
        let writer = TestModel::bulk().set_table("archive.test_models");
        assert_eq!(writer.table(), "archive.test_models");

        let (sql, _) = writer.build_replace(Row::new().set("id", 1_i64)).unwrap();
        assert!(sql.starts_with("replace into `archive`.`test_models`"));
    }

    #[test]
    fn test_expression_bindings_are_stripped() {
        let (sql, bindings) = TestModel::bulk()
            .build_replace(
                Row::new()
                    .set("id", 1_i64)
                    .set("updated_at", SqlValue::expr("NOW()")),
            )
            .unwrap();

        assert!(sql.contains("values (?, NOW())"));
        assert_eq!(bindings, vec![SqlValue::Int(1)]);
    }

    // Execution tests need a live MySQL server and live in integration tests
}
