use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};

/// `BOOLEAN` column
///
/// The default is always rendered, so every boolean column carries an explicit
/// `DEFAULT TRUE` or `DEFAULT FALSE`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BooleanField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    pub default: bool,
}

impl BooleanField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: false,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

column_builders!(BooleanField => Boolean);

impl ColumnField for BooleanField {
    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        let default = if self.default { "TRUE" } else { "FALSE" };
        ColumnSql::new(&self.column, "BOOLEAN")
            .default(Some(default.to_string()))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())
    }

    fn rust_type(&self) -> String {
        rust_type_of("bool", self.column.nullable)
    }
}
