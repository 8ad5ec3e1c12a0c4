//! Statement compilation for the three MySQL bulk-write forms.
//!
//! All three statements share the same body: a quoted table reference, a
//! quoted column list taken from the first row of the batch, and one
//! parenthesized placeholder group per row. They differ only in the
//! leading keyword and, for the duplicate-key form, a trailing conflict
//! clause.

use crate::quote::{columnize, quote};
use crate::row::{Row, RowBatch};
use crate::value::SqlValue;

/// Creates the parameter placeholders for one row.
///
/// One `?` per value, in the row's (sorted) column order. A raw SQL
/// expression is rendered as its literal text in place of the placeholder,
/// so the token count always matches the cleaned binding count.
#[must_use]
pub fn parameterize(row: &Row) -> String {
    row.values()
        .map(|value| match value {
            SqlValue::Expr(sql) => sql.as_str(),
            _ => SqlValue::placeholder(),
        })
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Builds the `on duplicate key update` clause for a column list.
///
/// The primary key column is skipped; comparison happens on the quoted
/// names. Returns an empty string when no columns remain.
#[must_use]
pub fn duplicatize<S: AsRef<str>>(columns: &[S], primary_key: &str) -> String {
    let key = quote(primary_key);

    let updates: Vec<String> = columns
        .iter()
        .map(|column| quote(column.as_ref()))
        .filter(|column| *column != key)
        .map(|column| format!("{column}=values({column})"))
        .collect();

    if updates.is_empty() {
        return String::new();
    }

    format!("on duplicate key update {}", updates.join(", "))
}

/// Compiles a `replace into` statement.
#[must_use]
pub fn compile_replace(table: &str, batch: &RowBatch) -> String {
    compile_body("replace into", table, batch)
}

/// Compiles an `insert ignore into` statement.
#[must_use]
pub fn compile_insert_ignore(table: &str, batch: &RowBatch) -> String {
    compile_body("insert ignore into", table, batch)
}

/// Compiles an `insert into ... on duplicate key update` statement.
///
/// The conflict clause updates every column except `primary_key`; it is
/// omitted entirely when the first row holds no other column.
#[must_use]
pub fn compile_insert_on_duplicate(table: &str, batch: &RowBatch, primary_key: &str) -> String {
    let mut sql = compile_body("insert into", table, batch);

    let columns = batch.rows().first().map(Row::columns).unwrap_or_default();
    let duplicates = duplicatize(&columns, primary_key);
    if !duplicates.is_empty() {
        sql.push(' ');
        sql.push_str(&duplicates);
    }

    sql
}

/// Compiles the shared `<keyword> <table> (<columns>) values <groups>` body.
///
/// The column list comes from the first row only; every row contributes
/// one placeholder group.
fn compile_body(keyword: &str, table: &str, batch: &RowBatch) -> String {
    let table = quote(table);
    let columns = batch
        .rows()
        .first()
        .map(|row| columnize(&row.columns()))
        .unwrap_or_default();

    let groups: Vec<String> = batch
        .rows()
        .iter()
        .map(|row| format!("({})", parameterize(row)))
        .collect();

    format!("{keyword} {table} ({columns}) values {}", groups.join(", "))
}
