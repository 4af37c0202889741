//! Character columns: `VARCHAR(n)` and `TEXT`
//!
//! Both kinds treat `blank` like `nullable` when deciding on NOT NULL, and
//! reject a nullable column that also carries a non-empty default.

use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, reject, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};
use crate::sql::quote_literal;

fn check_nullable_default(
    column: &ColumnOptions,
    default: Option<&str>,
) -> Result<(), SchemaError> {
    if column.nullable && default.is_some_and(|d| !d.is_empty()) {
        return reject(
            &column.name,
            SchemaError::NullableWithDefault {
                column: column.column(),
            },
        );
    }
    Ok(())
}

// =============================================================================
// CharField
// =============================================================================

/// `VARCHAR(max_length)` column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    pub max_length: u32,
    /// Empty values allowed; suppresses NOT NULL like `nullable`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "super::is_false"))]
    pub blank: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<Cow<'static, str>>,
}

impl CharField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, max_length: u32) -> Self {
        Self {
            column: ColumnOptions::new(name),
            max_length,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// String default, rendered as a quoted literal
    #[must_use]
    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(CharField => Char);

impl ColumnField for CharField {
    fn kind(&self) -> FieldKind {
        FieldKind::Char
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, format!("VARCHAR({})", self.max_length))
            .not_null(!self.column.nullable && !self.blank)
            .default(self.default.as_deref().map(quote_literal))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;
        check_nullable_default(&self.column, self.default.as_deref())?;
        if self.max_length == 0 {
            return reject(
                &self.column.name,
                SchemaError::InvalidMaxLength {
                    column: self.column.column(),
                },
            );
        }
        Ok(())
    }

    fn rust_type(&self) -> String {
        rust_type_of("String", self.column.nullable || self.blank)
    }
}

// =============================================================================
// TextField
// =============================================================================

/// Unbounded `TEXT` column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "super::is_false"))]
    pub blank: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<Cow<'static, str>>,
}

impl TextField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(TextField => Text);

impl ColumnField for TextField {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "TEXT")
            .not_null(!self.column.nullable && !self.blank)
            .default(self.default.as_deref().map(quote_literal))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;
        check_nullable_default(&self.column, self.default.as_deref())
    }

    fn rust_type(&self) -> String {
        rust_type_of("String", self.column.nullable || self.blank)
    }
}
