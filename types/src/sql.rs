//! Identifier and literal quoting helpers
//!
//! Identifiers are wrapped in double quotes verbatim; callers supply names that
//! are already valid PostgreSQL identifiers. Literals are wrapped in single
//! quotes with embedded quotes doubled, so text without quotes renders unchanged.

/// Quote a PostgreSQL identifier: `users` -> `"users"`
#[inline]
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident)
}

/// Quote a string literal: `it's` -> `'it''s'`
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Quote and comma-join identifiers: `["a", "b"]` -> `"a", "b"`
#[must_use]
pub fn join_idents<I, S>(idents: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    idents
        .into_iter()
        .map(|i| quote_ident(i.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("users"), "\"users\"");
    }

    #[test]
    fn test_quote_literal_escapes_quotes() {
        assert_eq!(quote_literal("unknown"), "'unknown'");
        assert_eq!(quote_literal("it's"), "'it''s'");
    }

    #[test]
    fn test_join_idents() {
        assert_eq!(join_idents(["col1", "col2"]), "\"col1\", \"col2\"");
        assert_eq!(join_idents(Vec::<String>::new()), "");
    }
}
