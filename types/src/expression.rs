//! Computed index members
//!
//! An [`Expression`] renders the SQL placed inside an index column list and a
//! name fragment used when the index name is derived automatically.

use std::borrow::Cow;

use crate::sql::{join_idents, quote_ident};

/// SQL expression usable inside `CREATE INDEX (...)`
///
/// ```
/// use ddlkit_types::Expression;
///
/// assert_eq!(Expression::lower("code").to_sql(), r#"LOWER("code")"#);
/// assert_eq!(Expression::concat(["a", "b"]).column_name(), "a_b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Expression {
    /// `LOWER("col")`
    Lower { column: Cow<'static, str> },
    /// `UPPER("col")`
    Upper { column: Cow<'static, str> },
    /// `CONCAT("a", "b", ...)`; arguments are column references, not literals
    Concat { columns: Vec<Cow<'static, str>> },
    /// `USING GIST ("col")`
    Gist { column: Cow<'static, str> },
    /// `USING GIN ("col")`
    Gin { column: Cow<'static, str> },
    /// `USING BTREE ("col")`
    Btree { column: Cow<'static, str> },
    /// `USING HASH ("col")`
    Hash { column: Cow<'static, str> },
    /// `to_tsvector("config", "col")`
    ToTsVector {
        config: Cow<'static, str>,
        column: Cow<'static, str>,
    },
}

impl Expression {
    #[must_use]
    pub fn lower(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Lower {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn upper(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Upper {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn concat<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self::Concat {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn gist(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Gist {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn gin(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Gin {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn btree(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Btree {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn hash(column: impl Into<Cow<'static, str>>) -> Self {
        Self::Hash {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn to_tsvector(
        config: impl Into<Cow<'static, str>>,
        column: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::ToTsVector {
            config: config.into(),
            column: column.into(),
        }
    }

    /// Generate the SQL fragment for this expression
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Lower { column } => format!("LOWER({})", quote_ident(column)),
            Self::Upper { column } => format!("UPPER({})", quote_ident(column)),
            Self::Concat { columns } => format!("CONCAT({})", join_idents(columns)),
            Self::Gist { column } => format!("USING GIST ({})", quote_ident(column)),
            Self::Gin { column } => format!("USING GIN ({})", quote_ident(column)),
            Self::Btree { column } => format!("USING BTREE ({})", quote_ident(column)),
            Self::Hash { column } => format!("USING HASH ({})", quote_ident(column)),
            Self::ToTsVector { config, column } => format!(
                "to_tsvector({}, {})",
                quote_ident(config),
                quote_ident(column)
            ),
        }
    }

    /// Name fragment used when deriving an index name
    ///
    /// Concatenations join their columns with `_`; every other expression
    /// uses its target column.
    #[must_use]
    pub fn column_name(&self) -> Cow<'_, str> {
        match self {
            Self::Concat { columns } => Cow::Owned(columns.join("_")),
            Self::Lower { column }
            | Self::Upper { column }
            | Self::Gist { column }
            | Self::Gin { column }
            | Self::Btree { column }
            | Self::Hash { column }
            | Self::ToTsVector { column, .. } => Cow::Borrowed(column),
        }
    }
}

impl core::fmt::Display for Expression {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_functions() {
        assert_eq!(Expression::lower("col1").to_sql(), r#"LOWER("col1")"#);
        assert_eq!(Expression::upper("col1").to_sql(), r#"UPPER("col1")"#);
        assert_eq!(Expression::lower("col1").column_name(), "col1");
        assert_eq!(Expression::upper("col1").column_name(), "col1");
    }

    #[test]
    fn test_concat() {
        let expr = Expression::concat(["col1", "col2"]);
        assert_eq!(expr.to_sql(), r#"CONCAT("col1", "col2")"#);
        assert_eq!(expr.column_name(), "col1_col2");
    }

    #[test]
    fn test_index_methods() {
        assert_eq!(Expression::gist("col1").to_sql(), r#"USING GIST ("col1")"#);
        assert_eq!(Expression::gin("col1").to_sql(), r#"USING GIN ("col1")"#);
        assert_eq!(Expression::btree("col1").to_sql(), r#"USING BTREE ("col1")"#);
        assert_eq!(Expression::hash("col1").to_sql(), r#"USING HASH ("col1")"#);
        assert_eq!(Expression::gin("tags").column_name(), "tags");
    }

    #[test]
    fn test_to_tsvector() {
        let expr = Expression::to_tsvector("english", "col1");
        assert_eq!(expr.to_sql(), r#"to_tsvector("english", "col1")"#);
        assert_eq!(expr.column_name(), "col1");
    }

    #[test]
    fn test_display_matches_sql() {
        let expr = Expression::concat(["first_name", "last_name"]);
        assert_eq!(expr.to_string(), expr.to_sql());
    }
}
