//! `CREATE INDEX` definitions
//!
//! An index covers plain columns and/or [`Expression`]s on one table. When no
//! name is given, one is derived as `<table>_<fragment>..._idx` from the
//! columns followed by each expression's [`Expression::column_name`].

use std::borrow::Cow;

use crate::error::SchemaError;
use crate::expression::Expression;
use crate::sql::quote_ident;

/// Index on a single table
///
/// Generation is pure: [`Index::sql`] computes the name on every call and never
/// writes it back, so one definition can be shared across threads.
///
/// ```
/// use ddlkit_types::Index;
///
/// let idx = Index::on_columns(["col1", "col2"]);
/// assert_eq!(
///     idx.sql("table").unwrap(),
///     r#"CREATE INDEX IF NOT EXISTS "table_col1_col2_idx" ON "table" ("col1", "col2");"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Index {
    /// Explicit index name
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<Cow<'static, str>>,
    /// Plain column names, rendered first
    pub columns: Vec<Cow<'static, str>>,
    /// Computed members, rendered after the columns
    pub expressions: Vec<Expression>,
    /// Is this a unique index?
    pub unique: bool,
}

impl Index {
    /// Create an empty index definition
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index over plain columns
    #[must_use]
    pub fn on_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set an explicit name
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a plain column
    #[must_use]
    pub fn column(mut self, column: impl Into<Cow<'static, str>>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Append an expression
    #[must_use]
    pub fn expression(mut self, expression: Expression) -> Self {
        self.expressions.push(expression);
        self
    }

    /// Make this a unique index
    #[must_use]
    pub fn unique(self) -> Self {
        self.with_unique(true)
    }

    #[must_use]
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Non-empty explicit name
    #[must_use]
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Check that the index covers at least one column or expression
    ///
    /// Unnamed indexes are reported as `<unnamed>`; assemblers that know the
    /// index position can relabel the error.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.columns.is_empty() && self.expressions.is_empty() {
            let index = match self.explicit_name() {
                Some(name) => quote_ident(name),
                None => "<unnamed>".to_string(),
            };
            let err = SchemaError::EmptyIndex { index };
            crate::ddl_trace_invalid!(self.explicit_name().unwrap_or("<unnamed>"), err);
            return Err(err);
        }
        Ok(())
    }

    /// The explicit name, or `<table>_<fragments>_idx`
    #[must_use]
    pub fn resolved_name(&self, table: &str) -> Cow<'_, str> {
        if let Some(name) = self.explicit_name() {
            return Cow::Borrowed(name);
        }

        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(
            1 + self.columns.len() + self.expressions.len(),
        );
        parts.push(Cow::Borrowed(table));
        parts.extend(self.columns.iter().map(|c| Cow::Borrowed(c.as_ref())));
        parts.extend(self.expressions.iter().map(Expression::column_name));

        Cow::Owned(format!("{}_idx", parts.join("_")))
    }

    /// Generate the `CREATE INDEX` statement for `table`
    ///
    /// Validates first; plain columns are quoted and expressions contribute
    /// their raw SQL, columns before expressions.
    pub fn sql(&self, table: &str) -> Result<String, SchemaError> {
        self.validate()?;

        let unique = if self.unique { "UNIQUE " } else { "" };

        let members = self
            .columns
            .iter()
            .map(|c| quote_ident(c))
            .chain(self.expressions.iter().map(Expression::to_sql))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "CREATE {}INDEX IF NOT EXISTS {} ON {} ({});",
            unique,
            quote_ident(&self.resolved_name(table)),
            quote_ident(table),
            members
        );

        crate::ddl_trace_sql!("index", table, sql);
        Ok(sql)
    }
}
