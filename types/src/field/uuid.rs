use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, reject, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};
use crate::function::SqlFunction;

/// `uuid` column, typically the primary key
///
/// ```
/// use ddlkit_types::prelude::*;
///
/// let id = UuidField::new("id")
///     .primary_key()
///     .with_default(SqlFunction::UUID_GENERATE_V4);
/// assert_eq!(
///     id.definition(),
///     r#""id" uuid NOT NULL PRIMARY KEY DEFAULT uuid_generate_v4()"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UuidField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "super::is_false"))]
    pub primary_key: bool,
    /// Only affects the Rust type; NOT NULL follows `nullable`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "super::is_false"))]
    pub blank: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<SqlFunction>,
}

impl UuidField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<SqlFunction>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(UuidField => Uuid);

impl ColumnField for UuidField {
    fn kind(&self) -> FieldKind {
        FieldKind::Uuid
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "uuid")
            .primary_key(self.primary_key)
            .default(self.default.as_ref().map(ToString::to_string))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;
        if self.primary_key && self.column.nullable {
            return reject(
                &self.column.name,
                SchemaError::NullablePrimaryKey {
                    column: self.column.column(),
                },
            );
        }
        Ok(())
    }

    fn rust_type(&self) -> String {
        rust_type_of("uuid::Uuid", self.column.nullable || self.blank)
    }
}
