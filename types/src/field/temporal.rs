//! `DATE` and `TIME` columns
//!
//! Defaults are SQL function calls such as [`SqlFunction::CURRENT_TIMESTAMP`],
//! rendered unquoted.

use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};
use crate::function::SqlFunction;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<SqlFunction>,
}

impl DateField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<SqlFunction>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(DateField => Date);

impl ColumnField for DateField {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "DATE")
            .default(self.default.as_ref().map(ToString::to_string))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())
    }

    fn rust_type(&self) -> String {
        rust_type_of("chrono::NaiveDate", self.column.nullable)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimeField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<SqlFunction>,
}

impl TimeField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<SqlFunction>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(TimeField => Time);

impl ColumnField for TimeField {
    fn kind(&self) -> FieldKind {
        FieldKind::Time
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "TIME")
            .default(self.default.as_ref().map(ToString::to_string))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())
    }

    fn rust_type(&self) -> String {
        rust_type_of("chrono::NaiveTime", self.column.nullable)
    }
}
