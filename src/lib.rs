//! # ddlkit
//!
//! Describe PostgreSQL tables once, as plain values, and derive the DDL that
//! creates and documents them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ddlkit::prelude::*;
//! use ddlkit::TableSql;
//!
//! let users = Table::new("users")
//!     .field(
//!         UuidField::new("id")
//!             .primary_key()
//!             .with_default(SqlFunction::UUID_GENERATE_V4),
//!     )
//!     .field(CharField::new("email", 255).unique().comment("Login address"))
//!     .index(Index::new().expression(Expression::lower("email")).unique());
//!
//! let sql = TableSql::new(&users);
//! sql.validate().unwrap();
//!
//! assert_eq!(
//!     sql.create_table_sql(),
//!     r#"CREATE TABLE IF NOT EXISTS "users" ("id" uuid NOT NULL PRIMARY KEY DEFAULT uuid_generate_v4(), "email" VARCHAR(255) NOT NULL UNIQUE);"#
//! );
//! assert_eq!(
//!     sql.create_indexes_sql().unwrap(),
//!     [r#"CREATE UNIQUE INDEX IF NOT EXISTS "users_email_idx" ON "users" (LOWER("email"));"#]
//! );
//! ```
//!
//! ## Features
//!
//! | Feature   | Enables                                           |
//! |-----------|---------------------------------------------------|
//! | `serde`   | Serialize/deserialize tables, fields and indexes  |
//! | `tracing` | Debug events for generated SQL and failed checks  |

mod assembler;
mod codegen;

// =============================================================================
// Root-level exports
// =============================================================================

pub use assembler::TableSql;
pub use codegen::{GeneratedStructs, StructWriter};

/// Core definition types
pub use ddlkit_types as ddl;

pub use ddlkit_types::{
    ColumnField, Expression, Field, Index, Mixin, Model, SchemaError, SqlFunction, Table,
};

/// Error types
pub mod error {
    pub use ddlkit_types::{FieldKind, SchemaError};
}

/// Everything needed to declare tables
pub mod prelude {
    pub use ddlkit_types::prelude::*;

    pub use crate::{StructWriter, TableSql};
}
