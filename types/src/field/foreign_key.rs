//! Foreign key columns
//!
//! The column itself renders like an `INTEGER` column; the reference is emitted
//! separately as a table-level `FOREIGN KEY` clause.

use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, reject, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};
use crate::sql::{quote_ident, quote_literal};

// =============================================================================
// Referential Actions
// =============================================================================

/// Foreign key referential action for `ON DELETE` / `ON UPDATE`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
}

impl ReferentialAction {
    /// Get the SQL representation
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
        }
    }
}

impl core::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

// =============================================================================
// ForeignKeyField
// =============================================================================

/// Column referencing `references_table(references_column)`
///
/// ```
/// use ddlkit_types::prelude::*;
///
/// let fk = ForeignKeyField::new("user_id", "users", "id")
///     .on_delete(ReferentialAction::Cascade);
/// assert_eq!(
///     fk.foreign_key_constraint("posts"),
///     r#"FOREIGN KEY ("user_id") REFERENCES "users"("id") ON DELETE CASCADE"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForeignKeyField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    pub references_table: Cow<'static, str>,
    pub references_column: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub on_delete: Option<ReferentialAction>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub on_update: Option<ReferentialAction>,
    /// Rendered as a quoted literal
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<Cow<'static, str>>,
    /// Rust type of the referenced column, `i32` when unset
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub referenced_type: Option<Cow<'static, str>>,
}

impl ForeignKeyField {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        references_table: impl Into<Cow<'static, str>>,
        references_column: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            column: ColumnOptions::new(name),
            references_table: references_table.into(),
            references_column: references_column.into(),
            ..Self::default()
        }
    }

    /// Point the reference at another table/column
    #[must_use]
    pub fn references(
        mut self,
        table: impl Into<Cow<'static, str>>,
        column: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.references_table = table.into();
        self.references_column = column.into();
        self
    }

    #[must_use]
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action);
        self
    }

    #[must_use]
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn referenced_type(mut self, rust_type: impl Into<Cow<'static, str>>) -> Self {
        self.referenced_type = Some(rust_type.into());
        self
    }

    /// Table-level `FOREIGN KEY` clause
    ///
    /// `ON DELETE` precedes `ON UPDATE`; each is present only when set. The
    /// owning table does not appear in the clause.
    #[must_use]
    pub fn foreign_key_constraint(&self, _table: &str) -> String {
        let mut sql = format!(
            "FOREIGN KEY ({}) REFERENCES {}({})",
            quote_ident(&self.column.name),
            quote_ident(&self.references_table),
            quote_ident(&self.references_column)
        );
        if let Some(action) = self.on_delete {
            sql.push_str(&format!(" ON DELETE {action}"));
        }
        if let Some(action) = self.on_update {
            sql.push_str(&format!(" ON UPDATE {action}"));
        }
        sql
    }
}

column_builders!(ForeignKeyField => ForeignKey);

impl ColumnField for ForeignKeyField {
    fn kind(&self) -> FieldKind {
        FieldKind::ForeignKey
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        ColumnSql::new(&self.column, "INTEGER")
            .default(self.default.as_deref().map(quote_literal))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;
        if self.references_table.is_empty() || self.references_column.is_empty() {
            return reject(
                &self.column.name,
                SchemaError::MissingReference {
                    column: self.column.column(),
                },
            );
        }
        Ok(())
    }

    fn rust_type(&self) -> String {
        let referenced = self
            .referenced_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("i32");
        rust_type_of(referenced, self.column.nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_fk() -> ForeignKeyField {
        ForeignKeyField::new("user_id", "users", "id")
            .unique()
            .with_default("1")
            .on_delete(ReferentialAction::Cascade)
            .on_update(ReferentialAction::Cascade)
    }

    #[test]
    fn test_definition() {
        assert_eq!(
            user_fk().definition(),
            r#""user_id" INTEGER NOT NULL UNIQUE DEFAULT '1'"#
        );
        assert_eq!(
            ForeignKeyField::new("owner_id", "users", "id")
                .nullable()
                .custom_type("uuid")
                .definition(),
            r#""owner_id" uuid"#
        );
    }

    #[test]
    fn test_foreign_key_constraint() {
        assert_eq!(
            user_fk().foreign_key_constraint("posts"),
            r#"FOREIGN KEY ("user_id") REFERENCES "users"("id") ON DELETE CASCADE ON UPDATE CASCADE"#
        );

        let fk = ForeignKeyField::new("org_id", "orgs", "id")
            .on_update(ReferentialAction::NoAction);
        assert_eq!(
            fk.foreign_key_constraint("users"),
            r#"FOREIGN KEY ("org_id") REFERENCES "orgs"("id") ON UPDATE NO ACTION"#
        );
    }

    #[test]
    fn test_validate() {
        assert!(user_fk().validate().is_ok());
        assert_eq!(
            ForeignKeyField::new("user_id", "", "id").validate(),
            Err(SchemaError::MissingReference {
                column: "user_id".into()
            })
        );
        assert!(
            ForeignKeyField::new("user_id", "users", "id")
                .references("users", "")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_rust_type() {
        assert_eq!(user_fk().rust_type(), "i32");
        assert_eq!(
            user_fk().referenced_type("uuid::Uuid").nullable().rust_type(),
            "Option<uuid::Uuid>"
        );
    }

    #[test]
    fn test_referential_action_sql() {
        assert_eq!(ReferentialAction::SetNull.as_sql(), "SET NULL");
        assert_eq!(ReferentialAction::NoAction.to_string(), "NO ACTION");
    }
}
