//! Column constraint vocabulary and ordered column definition assembly

use std::borrow::Cow;

use crate::field::ColumnOptions;
use crate::sql::quote_ident;

/// Column constraint keyword
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    NotNull,
    PrimaryKey,
    Unique,
    Default,
    Check,
}

impl Constraint {
    /// Get the SQL representation
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::NotNull => "NOT NULL",
            Self::PrimaryKey => "PRIMARY KEY",
            Self::Unique => "UNIQUE",
            Self::Default => "DEFAULT",
            Self::Check => "CHECK",
        }
    }
}

impl core::fmt::Display for Constraint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Builder for a single column definition
///
/// Keywords are always emitted in the order
/// `type NOT NULL PRIMARY KEY UNIQUE DEFAULT CHECK <extra constraints>`,
/// whatever order the setters are called in.
///
/// ```
/// use ddlkit_types::{ColumnOptions, ColumnSql};
///
/// let options = ColumnOptions::new("name").unique();
/// let sql = ColumnSql::new(&options, "VARCHAR(255)").to_sql();
/// assert_eq!(sql, r#""name" VARCHAR(255) NOT NULL UNIQUE"#);
/// ```
#[derive(Clone, Debug)]
pub struct ColumnSql<'a> {
    name: &'a str,
    sql_type: Cow<'a, str>,
    not_null: bool,
    primary_key: bool,
    unique: bool,
    default: Option<String>,
    check: Option<String>,
    extra: &'a [Cow<'static, str>],
}

impl<'a> ColumnSql<'a> {
    /// Start a definition from the shared column options
    ///
    /// `default_type` is used unless the options carry a custom type, which
    /// replaces it entirely. NOT NULL follows `options.nullable`.
    pub fn new(options: &'a ColumnOptions, default_type: impl Into<Cow<'a, str>>) -> Self {
        let sql_type = match options.custom_type.as_deref() {
            Some(custom) if !custom.is_empty() => Cow::Borrowed(custom),
            _ => default_type.into(),
        };
        Self {
            name: &options.name,
            sql_type,
            not_null: !options.nullable,
            primary_key: false,
            unique: options.unique,
            default: None,
            check: None,
            extra: &options.constraints,
        }
    }

    /// Override NOT NULL emission
    #[must_use]
    pub fn not_null(mut self, not_null: bool) -> Self {
        self.not_null = not_null;
        self
    }

    /// Emit PRIMARY KEY
    #[must_use]
    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Set the already-rendered DEFAULT value
    #[must_use]
    pub fn default(mut self, value: Option<String>) -> Self {
        self.default = value;
        self
    }

    /// Set a CHECK expression (rendered without the surrounding parentheses)
    #[must_use]
    pub fn check(mut self, expr: Option<String>) -> Self {
        self.check = expr;
        self
    }

    /// Generate the column definition SQL (without leading/trailing punctuation)
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", quote_ident(self.name), self.sql_type);

        if self.not_null {
            sql.push_str(&format!(" {}", Constraint::NotNull));
        }
        if self.primary_key {
            sql.push_str(&format!(" {}", Constraint::PrimaryKey));
        }
        if self.unique {
            sql.push_str(&format!(" {}", Constraint::Unique));
        }
        if let Some(default) = self.default.as_ref() {
            sql.push_str(&format!(" {} {}", Constraint::Default, default));
        }
        if let Some(check) = self.check.as_ref() {
            sql.push_str(&format!(" {} ({})", Constraint::Check, check));
        }
        if !self.extra.is_empty() {
            sql.push(' ');
            sql.push_str(&self.extra.join(" "));
        }

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_order_is_fixed() {
        let options = ColumnOptions::new("id")
            .unique()
            .constraint("CHECK (id <> '')");
        let sql = ColumnSql::new(&options, "uuid")
            .default(Some("uuid_generate_v4()".into()))
            .primary_key(true)
            .to_sql();

        assert_eq!(
            sql,
            r#""id" uuid NOT NULL PRIMARY KEY UNIQUE DEFAULT uuid_generate_v4() CHECK (id <> '')"#
        );
    }

    #[test]
    fn test_custom_type_replaces_default_type() {
        let options = ColumnOptions::new("value").custom_type("BIGINT").nullable();
        assert_eq!(
            ColumnSql::new(&options, "INTEGER").to_sql(),
            r#""value" BIGINT"#
        );
    }

    #[test]
    fn test_empty_custom_type_is_ignored() {
        let options = ColumnOptions::new("value").custom_type("");
        assert_eq!(
            ColumnSql::new(&options, "INTEGER").to_sql(),
            r#""value" INTEGER NOT NULL"#
        );
    }

    #[test]
    fn test_check_precedes_extra_constraints() {
        let options = ColumnOptions::new("qty").constraint("REFERENCES stock(qty)");
        let sql = ColumnSql::new(&options, "INTEGER")
            .check(Some("qty > 0".into()))
            .to_sql();
        assert_eq!(
            sql,
            r#""qty" INTEGER NOT NULL CHECK (qty > 0) REFERENCES stock(qty)"#
        );
    }
}
