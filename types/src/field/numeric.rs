use std::borrow::Cow;

use super::{ColumnField, ColumnOptions, column_builders, reject, rust_type_of};
use crate::constraint::ColumnSql;
use crate::error::{FieldKind, SchemaError};

/// Fixed-point `NUMERIC(precision, scale)` column
///
/// The default is rendered with exactly `scale` decimal places.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericField {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub column: ColumnOptions,
    pub precision: u32,
    pub scale: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub default: Option<f64>,
}

impl NumericField {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, precision: u32, scale: u32) -> Self {
        Self {
            column: ColumnOptions::new(name),
            precision,
            scale,
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    fn format_default(&self, default: f64) -> String {
        format!("{:.*}", self.scale as usize, default)
    }
}

column_builders!(NumericField => Numeric);

impl ColumnField for NumericField {
    fn kind(&self) -> FieldKind {
        FieldKind::Numeric
    }

    fn options(&self) -> &ColumnOptions {
        &self.column
    }

    fn definition(&self) -> String {
        let sql_type = format!("NUMERIC({}, {})", self.precision, self.scale);
        ColumnSql::new(&self.column, sql_type)
            .default(self.default.map(|d| self.format_default(d)))
            .to_sql()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        self.column.validate_name(self.kind())?;

        if self.precision == 0 || self.precision < self.scale {
            return reject(
                &self.column.name,
                SchemaError::InvalidPrecision {
                    column: self.column.column(),
                    precision: self.precision,
                    scale: self.scale,
                },
            );
        }

        if let Some(default) = self.default {
            if !default.is_finite() {
                return reject(
                    &self.column.name,
                    SchemaError::NonFiniteDefault {
                        column: self.column.column(),
                        default,
                    },
                );
            }

            let digits = self
                .format_default(default)
                .chars()
                .filter(char::is_ascii_digit)
                .count();
            if digits > self.precision as usize + 1 {
                return reject(
                    &self.column.name,
                    SchemaError::DefaultExceedsPrecision {
                        column: self.column.column(),
                        default,
                        precision: self.precision,
                        scale: self.scale,
                    },
                );
            }
        }

        Ok(())
    }

    fn rust_type(&self) -> String {
        rust_type_of("f64", self.column.nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition() {
        let field = NumericField::new("amount", 10, 2)
            .with_default(123.45)
            .unique();
        assert_eq!(
            field.definition(),
            r#""amount" NUMERIC(10, 2) NOT NULL UNIQUE DEFAULT 123.45"#
        );

        let field = NumericField::new("value", 10, 2).nullable();
        assert_eq!(field.definition(), r#""value" NUMERIC(10, 2)"#);
    }

    #[test]
    fn test_default_uses_scale_places() {
        let field = NumericField::new("rate", 6, 3).with_default(1.5);
        assert_eq!(
            field.definition(),
            r#""rate" NUMERIC(6, 3) NOT NULL DEFAULT 1.500"#
        );

        let field = NumericField::new("rate", 6, 2).with_default(0.0);
        assert_eq!(
            field.definition(),
            r#""rate" NUMERIC(6, 2) NOT NULL DEFAULT 0.00"#
        );
    }

    #[test]
    fn test_validate_precision() {
        assert!(NumericField::new("v", 10, 2).validate().is_ok());
        assert!(NumericField::new("v", 2, 2).validate().is_ok());
        assert_eq!(
            NumericField::new("v", 0, 0).validate(),
            Err(SchemaError::InvalidPrecision {
                column: "v".into(),
                precision: 0,
                scale: 0
            })
        );
        assert!(NumericField::new("v", 2, 3).validate().is_err());
    }

    #[test]
    fn test_validate_default_overflow() {
        assert!(
            NumericField::new("v", 10, 2)
                .with_default(123.45)
                .validate()
                .is_ok()
        );

        let err = NumericField::new("v", 5, 2)
            .with_default(123456.78)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DefaultExceedsPrecision { .. }));
    }

    #[test]
    fn test_validate_non_finite_default() {
        for default in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NumericField::new("amount", 10, 2)
                .with_default(default)
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, SchemaError::NonFiniteDefault { ref column, .. } if column == "amount"),
                "{err}"
            );
        }
    }

    #[test]
    fn test_rendering_skips_validation() {
        let field = NumericField::new("v", 5, 2).with_default(123456.78);
        assert_eq!(
            field.definition(),
            r#""v" NUMERIC(5, 2) NOT NULL DEFAULT 123456.78"#
        );
    }

    #[test]
    fn test_rust_type() {
        assert_eq!(NumericField::new("v", 10, 2).rust_type(), "f64");
        assert_eq!(
            NumericField::new("v", 10, 2).nullable().rust_type(),
            "Option<f64>"
        );
    }
}
