//! Row and batch normalization.
//!
//! Every write is treated as a batch write: a single [`Row`] converts into
//! a one-element [`RowBatch`], so the compiler only ever handles one shape
//! of input. Row keys are held in ascending lexicographic order, which
//! keeps the derived column list and the flattened binding order in
//! agreement no matter how callers assembled their rows.

use std::collections::BTreeMap;

use crate::value::{SqlValue, ToSqlValue};

/// One row's worth of column-to-value data.
///
/// Keys are ordered lexicographically, not by insertion order.
///
/// # Example
///
/// ```rust
/// use mysql_plus_core::Row;
///
/// let row = Row::new().set("name", "alice").set("id", 1_i64);
/// assert_eq!(row.columns(), vec!["id", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: BTreeMap<String, SqlValue>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any previous value for that column.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl ToSqlValue) -> Self {
        self.values
            .insert(String::from(column), value.to_sql_value());
        self
    }

    /// Returns the column names in ascending lexicographic order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Returns the values in column order.
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.values()
    }

    /// Returns the number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<C: Into<String>, V: ToSqlValue> FromIterator<(C, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.to_sql_value()))
                .collect(),
        }
    }
}

/// An ordered sequence of rows submitted together for one statement.
///
/// The compiler derives the column list from the first row only. Rows with
/// differing key sets are not rejected; they produce a statement whose
/// column list does not match the later value groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBatch {
    rows: Vec<Row>,
}

impl RowBatch {
    /// Returns the rows in batch order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the batch has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattens all values into one binding list, row-major then
    /// column-minor, matching the placeholder order of the compiled
    /// statement.
    #[must_use]
    pub fn bindings(&self) -> Vec<SqlValue> {
        self.rows
            .iter()
            .flat_map(|row| row.values().cloned())
            .collect()
    }
}

impl From<Row> for RowBatch {
    fn from(row: Row) -> Self {
        Self { rows: vec![row] }
    }
}

impl From<Vec<Row>> for RowBatch {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Row> for RowBatch {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Removes raw SQL expressions from a binding list.
///
/// Expression values are inlined into the statement text by the compiler,
/// so they must never be bound positionally.
#[must_use]
pub fn clean_bindings(bindings: Vec<SqlValue>) -> Vec<SqlValue> {
    bindings.into_iter().filter(|b| !b.is_expr()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_are_sorted() {
        let row = Row::new().set("zeta", 1_i64).set("alpha", 2_i64).set("mid", 3_i64);
        assert_eq!(row.columns(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(
            row.values().cloned().collect::<Vec<_>>(),
            vec![SqlValue::Int(2), SqlValue::Int(3), SqlValue::Int(1)]
        );
    }

    #[test]
    fn test_row_set_replaces() {
        let row = Row::new().set("id", 1_i64).set("id", 2_i64);
        assert_eq!(row.len(), 1);
        assert_eq!(row.values().next(), Some(&SqlValue::Int(2)));
    }

    #[test]
    fn test_row_from_iterator() {
        let row: Row = vec![("b", 2_i64), ("a", 1_i64)].into_iter().collect();
        assert_eq!(row.columns(), vec!["a", "b"]);
    }

    #[test]
    fn test_single_row_becomes_one_element_batch() {
        let batch: RowBatch = Row::new().set("id", 1_i64).into();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_bindings_are_row_major() {
        let batch: RowBatch = vec![
            Row::new().set("id", 1_i64).set("name", "a"),
            Row::new().set("id", 2_i64).set("name", "b"),
        ]
        .into();

        assert_eq!(
            batch.bindings(),
            vec![
                SqlValue::Int(1),
                SqlValue::Text(String::from("a")),
                SqlValue::Int(2),
                SqlValue::Text(String::from("b")),
            ]
        );
    }

    #[test]
    fn test_clean_bindings_drops_expressions() {
        let bindings = vec![
            SqlValue::Int(1),
            SqlValue::expr("NOW()"),
            SqlValue::Text(String::from("x")),
        ];
        assert_eq!(
            clean_bindings(bindings),
            vec![SqlValue::Int(1), SqlValue::Text(String::from("x"))]
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = RowBatch::default();
        assert!(batch.is_empty());
        assert!(batch.bindings().is_empty());
    }
}
