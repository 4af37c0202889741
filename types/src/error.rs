//! Validation errors for column, index and table definitions

use thiserror::Error;

/// Column kind, used to label definitions in errors and logs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    Char,
    Text,
    Boolean,
    Integer,
    PositiveInteger,
    Numeric,
    Date,
    Time,
    Uuid,
    Json,
    ForeignKey,
}

impl FieldKind {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::PositiveInteger => "positive_integer",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::Time => "time",
            Self::Uuid => "uuid",
            Self::Json => "json",
            Self::ForeignKey => "foreign_key",
        }
    }
}

impl core::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration errors reported by `validate()`
///
/// Every variant names the column (or index/table) and the violated rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{kind} field: column name cannot be empty")]
    EmptyColumnName { kind: FieldKind },

    #[error("column \"{column}\": max length must be positive")]
    InvalidMaxLength { column: String },

    #[error("column \"{column}\" is nullable and has a default value")]
    NullableWithDefault { column: String },

    #[error("column \"{column}\": invalid precision or scale (precision {precision}, scale {scale})")]
    InvalidPrecision {
        column: String,
        precision: u32,
        scale: u32,
    },

    #[error(
        "column \"{column}\": default value {default} exceeds precision {precision} and scale {scale}"
    )]
    DefaultExceedsPrecision {
        column: String,
        default: f64,
        precision: u32,
        scale: u32,
    },

    #[error("column \"{column}\": default value {default} is not a finite number")]
    NonFiniteDefault { column: String, default: f64 },

    #[error("column \"{column}\": primary key cannot be nullable")]
    NullablePrimaryKey { column: String },

    #[error("column \"{column}\": default value {default} must be positive")]
    NonPositiveDefault { column: String, default: i32 },

    #[error("column \"{column}\": foreign key must reference a table and a column")]
    MissingReference { column: String },

    /// `index` is the quoted explicit name, or the index position when unnamed
    #[error("index {index}: must specify at least one column or expression")]
    EmptyIndex { index: String },

    #[error("index \"{name}\" is defined more than once")]
    DuplicateIndex { name: String },

    #[error("column \"{column}\" is defined more than once")]
    DuplicateColumn { column: String },

    #[error("table \"{table}\": {source}")]
    Table {
        table: String,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Attach the owning table to this error
    #[must_use]
    pub fn in_table(self, table: impl Into<String>) -> Self {
        Self::Table {
            table: table.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_column() {
        let err = SchemaError::NullablePrimaryKey {
            column: "id".into(),
        };
        assert_eq!(err.to_string(), "column \"id\": primary key cannot be nullable");

        let err = SchemaError::EmptyColumnName {
            kind: FieldKind::PositiveInteger,
        };
        assert_eq!(
            err.to_string(),
            "positive_integer field: column name cannot be empty"
        );
    }

    #[test]
    fn test_in_table_wraps_source() {
        let err = SchemaError::EmptyIndex {
            index: "#2".into(),
        }
        .in_table("users");
        assert_eq!(
            err.to_string(),
            "table \"users\": index #2: must specify at least one column or expression"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
