use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};
use crate::sql::quote_literal;

/// `JSONB` column; the default is a JSON document rendered as a string literal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JsonField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<Cow<'static, str>>,
}

impl JsonField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: ColumnOptions::new(name),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }
}

column_builders!(JsonField => Json);

impl ColumnField for JsonField {
    fn kind(&self) -> FieldKind {
        FieldKind::Json
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "JSONB")
            .default(self.default.as_deref().map(quote_literal))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())
    }

    fn rust_type(&self) -> String {
        rust_type_of("serde_json::Value", self.column.nullable)
    }
}
