//! Column definitions
//!
//! Every column kind is its own struct sharing [`ColumnOptions`] and the
//! [`ColumnField`] contract. [`Field`] is the closed set of kinds a table can
//! hold; it delegates every operation to the wrapped variant.
//!
//! ```
//! use ddlkit_types::prelude::*;
//!
//! let field: Field = CharField::new("name", 255).unique().into();
//! assert_eq!(field.definition(), r#""name" VARCHAR(255) NOT NULL UNIQUE"#);
//! assert!(field.validate().is_ok());
//! ```

mod boolean;
mod foreign_key;
mod integer;
mod json;
mod numeric;
mod temporal;
mod text;
mod uuid;

pub use boolean::BooleanField;
pub use foreign_key::{ForeignKeyField, ReferentialAction};
pub use integer::{IntegerField, PositiveIntegerField};
pub use json::JsonField;
pub use numeric::NumericField;
pub use temporal::{DateField, TimeField};
pub use text::{CharField, TextField};
pub use uuid::UuidField;

use std::borrow::Cow;

use crate::error::{FieldKind, SchemaError};
use crate::index::Index;
use crate::sql::{quote_ident, quote_literal};

// =============================================================================
// Shared Options
// =============================================================================

/// Attributes common to every column kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnOptions {
    /// Column name, quoted verbatim
    pub name: Cow<'static, str>,
    /// Allow NULL (suppresses NOT NULL)
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub nullable: bool,
    /// Emit UNIQUE on the column
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub unique: bool,
    /// Create a single-column index for this column
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub index: bool,
    /// Text for `COMMENT ON COLUMN`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub comment: Option<Cow<'static, str>>,
    /// SQL type replacing the kind's canonical type
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub custom_type: Option<Cow<'static, str>>,
    /// Raw constraint clauses appended after every generated keyword
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub constraints: Vec<Cow<'static, str>>,
    /// Attribute body emitted above the field in generated Rust structs
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub struct_tag: Option<Cow<'static, str>>,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl ColumnOptions {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn indexed(mut self) -> Self {
        self.index = true;
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<Cow<'static, str>>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn custom_type(mut self, sql_type: impl Into<Cow<'static, str>>) -> Self {
        self.custom_type = Some(sql_type.into());
        self
    }

    #[must_use]
    pub fn constraint(mut self, clause: impl Into<Cow<'static, str>>) -> Self {
        self.constraints.push(clause.into());
        self
    }

    #[must_use]
    pub fn struct_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.struct_tag = Some(tag.into());
        self
    }

    /// Reject an empty column name
    pub fn validate_name(&self, kind: FieldKind) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return reject(&self.name, SchemaError::EmptyColumnName { kind });
        }
        Ok(())
    }

    pub(crate) fn column(&self) -> String {
        self.name.to_string()
    }
}

/// Trace a validation failure and return it
pub(crate) fn reject(column: &str, err: SchemaError) -> Result<(), SchemaError> {
    crate::ddl_trace_invalid!(column, err);
    Err(err)
}

/// `ty` or `Option<ty>`
pub(crate) fn rust_type_of(ty: &str, optional: bool) -> String {
    if optional {
        format!("Option<{ty}>")
    } else {
        ty.to_string()
    }
}

// =============================================================================
// ColumnField
// =============================================================================

/// Behaviour shared by every column kind
///
/// Rendering and validation are independent: [`definition`](Self::definition)
/// never re-runs [`validate`](Self::validate).
pub trait ColumnField {
    /// Kind of column, used in errors
    fn kind(&self) -> FieldKind;

    /// Shared column attributes
    fn options(&self) -> &ColumnOptions;

    /// Column definition as it appears inside `CREATE TABLE (...)`
    fn definition(&self) -> String;

    /// Check the column configuration
    fn validate(&self) -> Result<(), SchemaError>;

    /// Rust type name for generated structs
    fn rust_type(&self) -> String;

    /// Column name, verbatim
    fn name(&self) -> &str {
        &self.options().name
    }

    /// `COMMENT ON COLUMN` statement, or `None` without a comment
    fn comment_sql(&self, table: &str) -> Option<String> {
        let comment = self.options().comment.as_deref().filter(|c| !c.is_empty())?;
        Some(format!(
            "COMMENT ON COLUMN {}.{} IS {};",
            quote_ident(table),
            quote_ident(self.name()),
            quote_literal(comment)
        ))
    }

    /// Single-column index when the column is marked as indexed; `UNIQUE`
    /// when it is also unique. Its derived name is `<table>_<column>_idx`.
    fn index(&self) -> Option<Index> {
        let options = self.options();
        options.index.then(|| {
            Index::on_columns([options.column()]).with_unique(options.unique)
        })
    }

    /// `CREATE INDEX` statement for [`index`](Self::index)
    fn index_sql(&self, table: &str) -> Option<String> {
        self.index()?.sql(table).ok()
    }
}

// =============================================================================
// Field
// =============================================================================

/// One column of a table
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Field {
    Char(CharField),
    Text(TextField),
    Boolean(BooleanField),
    Integer(IntegerField),
    PositiveInteger(PositiveIntegerField),
    Numeric(NumericField),
    Date(DateField),
    Time(TimeField),
    Uuid(UuidField),
    Json(JsonField),
    ForeignKey(ForeignKeyField),
}

macro_rules! each_variant {
    ($value:expr, $f:ident => $body:expr) => {
        match $value {
            Field::Char($f) => $body,
            Field::Text($f) => $body,
            Field::Boolean($f) => $body,
            Field::Integer($f) => $body,
            Field::PositiveInteger($f) => $body,
            Field::Numeric($f) => $body,
            Field::Date($f) => $body,
            Field::Time($f) => $body,
            Field::Uuid($f) => $body,
            Field::Json($f) => $body,
            Field::ForeignKey($f) => $body,
        }
    };
}

impl Field {
    /// The foreign key variant, if this is one
    #[must_use]
    pub fn as_foreign_key(&self) -> Option<&ForeignKeyField> {
        match self {
            Self::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }

    /// `FOREIGN KEY (...) REFERENCES ...` clause for foreign key columns
    #[must_use]
    pub fn foreign_key_constraint(&self, table: &str) -> Option<String> {
        self.as_foreign_key()
            .map(|fk| fk.foreign_key_constraint(table))
    }
}

impl ColumnField for Field {
    fn kind(&self) -> FieldKind {
        each_variant!(self, f => f.kind())
    }

    fn options(&self) -> &ColumnOptions {
        each_variant!(self, f => f.options())
    }

    fn definition(&self) -> String {
        each_variant!(self, f => f.definition())
    }

    fn validate(&self) -> Result<(), SchemaError> {
        each_variant!(self, f => f.validate())
    }

    fn rust_type(&self) -> String {
        each_variant!(self, f => f.rust_type())
    }
}

/// Builders shared by every column kind, plus the `Field` conversion
macro_rules! column_builders {
    ($ty:ident => $variant:ident) => {
        impl $ty {
            /// Allow NULL
            #[must_use]
            pub fn nullable(mut self) -> Self {
                self.column.nullable = true;
                self
            }

            /// Emit UNIQUE
            #[must_use]
            pub fn unique(mut self) -> Self {
                self.column.unique = true;
                self
            }

            /// Create a single-column index
            #[must_use]
            pub fn indexed(mut self) -> Self {
                self.column.index = true;
                self
            }

            #[must_use]
            pub fn comment(mut self, comment: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.column.comment = Some(comment.into());
                self
            }

            /// Replace the canonical SQL type
            #[must_use]
            pub fn custom_type(
                mut self,
                sql_type: impl Into<std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.column.custom_type = Some(sql_type.into());
                self
            }

            /// Append a raw constraint clause
            #[must_use]
            pub fn constraint(mut self, clause: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.column.constraints.push(clause.into());
                self
            }

            #[must_use]
            pub fn struct_tag(mut self, tag: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.column.struct_tag = Some(tag.into());
                self
            }
        }

        impl From<$ty> for $crate::field::Field {
            fn from(field: $ty) -> Self {
                $crate::field::Field::$variant(field)
            }
        }
    };
}
pub(crate) use column_builders;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqlFunction;

    fn sample() -> Vec<Field> {
        vec![
            CharField::new("name", 255).into(),
            TextField::new("body").into(),
            BooleanField::new("active").into(),
            IntegerField::new("count").into(),
            PositiveIntegerField::new("qty").into(),
            NumericField::new("amount", 10, 2).into(),
            DateField::new("born_on").into(),
            TimeField::new("opens_at").into(),
            UuidField::new("id").into(),
            JsonField::new("meta").into(),
            ForeignKeyField::new("user_id", "users", "id").into(),
        ]
    }

    #[test]
    fn test_definition_starts_with_quoted_name_and_type() {
        for field in sample() {
            let prefix = format!("\"{}\" ", field.name());
            assert!(
                field.definition().starts_with(&prefix),
                "{}",
                field.definition()
            );
        }
    }

    #[test]
    fn test_empty_name_always_fails() {
        let fields: Vec<Field> = vec![
            CharField::new("", 255).into(),
            TextField::new("").into(),
            BooleanField::new("").into(),
            IntegerField::new("").into(),
            PositiveIntegerField::new("").into(),
            NumericField::new("", 10, 2).into(),
            DateField::new("").into(),
            TimeField::new("").into(),
            UuidField::new("").into(),
            JsonField::new("").into(),
            ForeignKeyField::new("", "users", "id").into(),
        ];

        for field in fields {
            let first = field.validate();
            assert_eq!(
                first,
                Err(SchemaError::EmptyColumnName { kind: field.kind() })
            );
            assert_eq!(field.validate(), first);
        }
    }

    #[test]
    fn test_custom_type_replaces_canonical_type() {
        let field: Field = NumericField::new("value", 10, 2)
            .custom_type("DECIMAL(10, 2)")
            .into();
        assert_eq!(field.definition(), r#""value" DECIMAL(10, 2) NOT NULL"#);

        let field: Field = UuidField::new("id").custom_type("CHAR(36)").primary_key().into();
        assert_eq!(field.definition(), r#""id" CHAR(36) NOT NULL PRIMARY KEY"#);
    }

    #[test]
    fn test_comment_sql() {
        let field: Field = NumericField::new("value", 10, 2)
            .comment("Numeric value")
            .into();
        assert_eq!(
            field.comment_sql("users").as_deref(),
            Some(r#"COMMENT ON COLUMN "users"."value" IS 'Numeric value';"#)
        );

        let field: Field = TextField::new("body").comment("").into();
        assert_eq!(field.comment_sql("posts"), None);
        let field: Field = TextField::new("body").into();
        assert_eq!(field.comment_sql("posts"), None);
    }

    #[test]
    fn test_comment_sql_escapes_quotes() {
        let field: Field = TextField::new("body").comment("author's notes").into();
        assert_eq!(
            field.comment_sql("posts").as_deref(),
            Some(r#"COMMENT ON COLUMN "posts"."body" IS 'author''s notes';"#)
        );
    }

    #[test]
    fn test_index_sql_naming_is_uniform() {
        for field in sample() {
            assert_eq!(field.index_sql("t"), None, "{}", field.name());
        }

        let field: Field = CharField::new("email", 255).indexed().into();
        assert_eq!(
            field.index_sql("users").as_deref(),
            Some(r#"CREATE INDEX IF NOT EXISTS "users_email_idx" ON "users" ("email");"#)
        );

        let field: Field = ForeignKeyField::new("user_id", "users", "id")
            .unique()
            .indexed()
            .into();
        assert_eq!(
            field.index_sql("profiles").as_deref(),
            Some(
                r#"CREATE UNIQUE INDEX IF NOT EXISTS "profiles_user_id_idx" ON "profiles" ("user_id");"#
            )
        );
    }

    #[test]
    fn test_index_matches_index_sql() {
        let field: Field = TextField::new("slug").unique().indexed().into();
        let index = field.index().unwrap();
        assert_eq!(index.resolved_name("pages"), "pages_slug_idx");
        assert!(index.unique);
        assert_eq!(index.sql("pages").ok(), field.index_sql("pages"));
    }

    #[test]
    fn test_unique_without_index_flag_has_no_index() {
        let field: Field = JsonField::new("meta").unique().into();
        assert_eq!(field.index_sql("t"), None);
    }

    #[test]
    fn test_foreign_key_constraint_only_for_foreign_keys() {
        let field: Field = DateField::new("created_at")
            .with_default(SqlFunction::CURRENT_TIMESTAMP)
            .into();
        assert!(field.as_foreign_key().is_none());
        assert_eq!(field.foreign_key_constraint("users"), None);

        let field: Field = ForeignKeyField::new("user_id", "users", "id").into();
        assert_eq!(
            field.foreign_key_constraint("posts").as_deref(),
            Some(r#"FOREIGN KEY ("user_id") REFERENCES "users"("id")"#)
        );
    }

    #[test]
    fn test_column_options_builders() {
        let options = ColumnOptions::new("tag")
            .nullable()
            .indexed()
            .comment("c")
            .struct_tag("serde(rename = \"tag\")");
        assert!(options.nullable);
        assert!(options.index);
        assert_eq!(options.comment.as_deref(), Some("c"));
        assert_eq!(options.struct_tag.as_deref(), Some("serde(rename = \"tag\")"));
        assert!(options.validate_name(FieldKind::Text).is_ok());
    }
}
