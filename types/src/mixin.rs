use std::borrow::Cow;

use crate::field::{DateField, Field};
use crate::function::SqlFunction;

/// Named, reusable group of columns included by several tables
///
/// ```
/// use ddlkit_types::prelude::*;
///
/// let audit = Mixin::new("audit").field(UuidField::new("created_by").nullable());
/// assert_eq!(audit.fields.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mixin {
    pub name: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<Field>,
}

impl Mixin {
    /// Name of the built-in [`Mixin::timestamped`] bundle
    pub const TIMESTAMPED: &'static str = "timestamped";

    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// `created_at` / `updated_at` columns defaulting to `CURRENT_TIMESTAMP`
    #[must_use]
    pub fn timestamped() -> Self {
        Self::new(Self::TIMESTAMPED)
            .field(
                DateField::new("created_at")
                    .with_default(SqlFunction::new("CURRENT_TIMESTAMP"))
                    .comment("Creation timestamp")
                    .struct_tag(r#"serde(rename = "created_at")"#),
            )
            .field(
                DateField::new("updated_at")
                    .with_default(SqlFunction::new("CURRENT_TIMESTAMP"))
                    .comment("Update timestamp")
                    .struct_tag(r#"serde(rename = "updated_at")"#),
            )
    }
}
