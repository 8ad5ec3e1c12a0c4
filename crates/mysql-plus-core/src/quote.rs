//! Identifier quoting for the MySQL dialect.
//!
//! MySQL quotes identifiers with backticks; embedded backticks are escaped
//! by doubling. Dotted references (`db.table`) are quoted segment by
//! segment so the dot separator survives.

/// Wraps an identifier in backticks, handling dotted references.
///
/// The wildcard segment `*` passes through unquoted.
///
/// # Example
///
/// ```rust
/// use mysql_plus_core::quote;
///
/// assert_eq!(quote("users"), "`users`");
/// assert_eq!(quote("db.users"), "`db`.`users`");
/// assert_eq!(quote("t.*"), "`t`.*");
/// ```
#[must_use]
pub fn quote(identifier: &str) -> String {
    identifier
        .split('.')
        .map(quote_segment)
        .collect::<Vec<String>>()
        .join(".")
}

/// Wraps a single identifier segment in backticks.
fn quote_segment(segment: &str) -> String {
    if segment == "*" {
        return String::from(segment);
    }

    format!("`{}`", segment.replace('`', "``"))
}

/// Converts a list of column names into a quoted, comma-delimited string.
#[must_use]
pub fn columnize<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| quote(c.as_ref()))
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_simple() {
        assert_eq!(quote("users"), "`users`");
    }

    #[test]
    fn test_quote_dotted() {
        assert_eq!(quote("a.b"), "`a`.`b`");
        assert_eq!(quote("db.schema.table"), "`db`.`schema`.`table`");
    }

    #[test]
    fn test_quote_wildcard() {
        assert_eq!(quote("*"), "*");
        assert_eq!(quote("users.*"), "`users`.*");
    }

    #[test]
    fn test_quote_embedded_backtick() {
        // Backticks are escaped by doubling
        assert_eq!(quote("a`b"), "`a``b`");
    }

    #[test]
    fn test_quote_injection_attempt() {
        let malicious = "users`; drop table users; --";
        assert_eq!(quote(malicious), "`users``; drop table users; --`");
    }

    #[test]
    fn test_columnize() {
        assert_eq!(columnize(&["id", "name"]), "`id`, `name`");
    }

    #[test]
    fn test_columnize_empty() {
        assert_eq!(columnize::<&str>(&[]), "");
    }
}
