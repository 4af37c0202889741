//! `INTEGER` columns, plain and constrained to positive values

use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, reject, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};

// =============================================================================
// IntegerField
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IntegerField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    /// `Some(0)` renders `DEFAULT 0`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<i32>,
}

impl IntegerField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: i32) -> Self {
        self.default = Some(default);
        self
    }
}

column_builders!(IntegerField => Integer);

impl ColumnField for IntegerField {
    fn kind(&self) -> FieldKind {
        FieldKind::Integer
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "INTEGER")
            .default(self.default.map(|d| d.to_string()))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())
    }

    fn rust_type(&self) -> String {
        rust_type_of("i32", self.column.nullable)
    }
}

// =============================================================================
// PositiveIntegerField
// =============================================================================

/// `INTEGER` column with a `CHECK (<column> > 0)` constraint
///
/// A default must satisfy the check, so `0` is rejected along with negatives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositiveIntegerField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<i32>,
}

impl PositiveIntegerField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: i32) -> Self {
        self.default = Some(default);
        self
    }
}

column_builders!(PositiveIntegerField => PositiveInteger);

impl ColumnField for PositiveIntegerField {
    fn kind(&self) -> FieldKind {
        FieldKind::PositiveInteger
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        // Column is referenced unquoted inside the check
        ColumnSql::new(&self.column, "INTEGER")
            .default(self.default.map(|d| d.to_string()))
            .check(Some(format!("{} > 0", self.column.name)))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;
        if let Some(default) = self.default
            && default <= 0
        {
            return reject(
                &self.column.name,
                SchemaError::NonPositiveDefault {
                    column: self.column.column(),
                    default,
                },
            );
        }
        Ok(())
    }

    fn rust_type(&self) -> String {
        rust_type_of("i32", self.column.nullable)
    }
}
