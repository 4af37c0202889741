//! Whole-table DDL assembly
//!
//! [`TableSql`] walks a [`Model`] and its mixins and composes the per-column and
//! per-index primitives into complete statements.

use std::collections::HashSet;

use ddlkit_types::{ColumnField, Field, Index, Model, SchemaError};

/// DDL generator for one model
///
/// Columns are ordered own fields first, then each mixin's fields in mixin
/// order. Generation does not validate; call [`TableSql::validate`] first for
/// untrusted models.
///
/// ```
/// use ddlkit::prelude::*;
/// use ddlkit::TableSql;
///
/// let posts = Table::new("posts")
///     .field(UuidField::new("id").primary_key())
///     .field(ForeignKeyField::new("author_id", "users", "id"));
///
/// let sql = TableSql::new(&posts);
/// assert_eq!(
///     sql.create_table_sql(),
///     r#"CREATE TABLE IF NOT EXISTS "posts" ("id" uuid NOT NULL PRIMARY KEY, "author_id" INTEGER NOT NULL, FOREIGN KEY ("author_id") REFERENCES "users"("id"));"#
/// );
/// ```
#[derive(Debug)]
pub struct TableSql<'a, M: Model + ?Sized> {
    model: &'a M,
}

impl<'a, M: Model + ?Sized> TableSql<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// # Panics
    ///
    /// Panics if the model has no table name.
    pub fn table_name(&self) -> &'a str {
        self.model.table_name()
    }

    /// Own columns followed by mixin columns
    pub fn columns(&self) -> impl Iterator<Item = &'a Field> {
        let model = self.model;
        model
            .fields()
            .iter()
            .chain(model.mixins().iter().flat_map(|m| m.fields.iter()))
    }

    /// Validate every column and index, and reject duplicate column or index
    /// names
    ///
    /// Index names cover model indexes and the single-column indexes requested
    /// by indexed columns. Errors are wrapped in [`SchemaError::Table`].
    pub fn validate(&self) -> Result<(), SchemaError> {
        let table = self.table_name();
        let mut seen = HashSet::new();

        for field in self.columns() {
            field.validate().map_err(|e| e.in_table(table))?;
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateColumn {
                    column: field.name().to_string(),
                }
                .in_table(table));
            }
        }

        for (position, index) in self.model.indexes().iter().enumerate() {
            index
                .validate()
                .map_err(|e| label_index(e, index, position).in_table(table))?;
        }

        let field_indexes: Vec<Index> = self.columns().filter_map(ColumnField::index).collect();
        let mut names = HashSet::new();
        for index in self.model.indexes().iter().chain(&field_indexes) {
            let name = index.resolved_name(table);
            if !names.insert(name.to_string()) {
                return Err(SchemaError::DuplicateIndex {
                    name: name.into_owned(),
                }
                .in_table(table));
            }
        }

        Ok(())
    }

    /// `CREATE TABLE IF NOT EXISTS` with every column then every foreign key clause
    pub fn create_table_sql(&self) -> String {
        let table = self.table_name();

        let definitions = self
            .columns()
            .map(ColumnField::definition)
            .chain(self.columns().filter_map(|f| f.foreign_key_constraint(table)))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            ddlkit_types::sql::quote_ident(table),
            definitions
        );
        ddlkit_types::ddl_trace_sql!("table", table, sql);
        sql
    }

    /// `COMMENT ON COLUMN` statements for commented columns
    pub fn comment_sql(&self) -> Vec<String> {
        let table = self.table_name();
        self.columns().filter_map(|f| f.comment_sql(table)).collect()
    }

    /// One statement per model index, in declaration order
    pub fn create_indexes_sql(&self) -> Result<Vec<String>, SchemaError> {
        let table = self.table_name();
        self.model
            .indexes()
            .iter()
            .enumerate()
            .map(|(position, idx)| {
                idx.sql(table)
                    .map_err(|e| label_index(e, idx, position).in_table(table))
            })
            .collect()
    }

    /// Single-column indexes requested by the columns themselves
    pub fn field_indexes_sql(&self) -> Vec<String> {
        let table = self.table_name();
        self.columns().filter_map(|f| f.index_sql(table)).collect()
    }

    /// Every statement for this table: CREATE TABLE, comments, model indexes,
    /// column indexes
    pub fn statements(&self) -> Result<Vec<String>, SchemaError> {
        let mut statements = vec![self.create_table_sql()];
        statements.extend(self.comment_sql());
        statements.extend(self.create_indexes_sql()?);
        statements.extend(self.field_indexes_sql());
        Ok(statements)
    }
}

/// Name an unnamed index by its 1-based position in the model
fn label_index(err: SchemaError, index: &Index, position: usize) -> SchemaError {
    match err {
        SchemaError::EmptyIndex { .. } if index.explicit_name().is_none() => {
            SchemaError::EmptyIndex {
                index: format!("#{}", position + 1),
            }
        }
        err => err,
    }
}
