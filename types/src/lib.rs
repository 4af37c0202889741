//! Core definition types for ddlkit
//!
//! This crate turns declarative column, index and table descriptions into
//! PostgreSQL DDL fragments:
//!
//! - [`Field`] - one column; a closed set of column kinds sharing [`ColumnField`]
//! - [`Expression`] - computed index members (`LOWER(..)`, `CONCAT(..)`, ...)
//! - [`Index`] - `CREATE INDEX` statements with deterministic naming
//! - [`Mixin`] / [`Model`] / [`Table`] - reusable field bundles and whole tables
//!
//! Rendering never validates. Call `validate()` first when the input is not
//! trusted; a definition that skips validation may still render
//! syntactically plausible but inconsistent DDL.
//!
//! Identifiers are double-quoted verbatim and must be supplied already safe.
//! Comment text and string-literal defaults are single-quoted with embedded
//! quotes doubled.
//!
//! # Features
//!
//! - `serde` - Serialize/deserialize definitions (used to load models from files)
//! - `tracing` - Emit debug events for generated SQL and failed validation

mod constraint;
mod error;
pub mod expression;
pub mod field;
mod function;
mod index;
mod mixin;
mod model;
pub mod sql;
mod trace;

pub use constraint::{ColumnSql, Constraint};
pub use error::{FieldKind, SchemaError};
pub use expression::Expression;
pub use field::{
    BooleanField, CharField, ColumnField, ColumnOptions, DateField, Field, ForeignKeyField,
    IntegerField, JsonField, NumericField, PositiveIntegerField, ReferentialAction, TextField,
    TimeField, UuidField,
};
pub use function::SqlFunction;
pub use index::Index;
pub use mixin::Mixin;
pub use model::{Model, Table};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::expression::Expression;
    pub use crate::field::{
        BooleanField, CharField, ColumnField, ColumnOptions, DateField, Field, ForeignKeyField,
        IntegerField, JsonField, NumericField, PositiveIntegerField, ReferentialAction, TextField,
        TimeField, UuidField,
    };
    pub use crate::{Index, Mixin, Model, SchemaError, SqlFunction, Table};
}
