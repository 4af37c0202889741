//! Table models
//!
//! [`Model`] is the contract an assembler reads; [`Table`] is the owned
//! implementation used when tables are built at runtime or loaded from files.

use std::borrow::Cow;

use crate::field::Field;
use crate::index::Index;
use crate::mixin::Mixin;

/// Declarative description of one table
pub trait Model {
    /// Table name
    ///
    /// # Panics
    ///
    /// Implementations may panic when no table name has been configured.
    fn table_name(&self) -> &str;

    /// Own columns, in declaration order
    fn fields(&self) -> &[Field];

    /// Mixins whose columns follow the own columns
    fn mixins(&self) -> &[Mixin] {
        &[]
    }

    fn indexes(&self) -> &[Index] {
        &[]
    }
}

/// Owned table definition
///
/// ```
/// use ddlkit_types::prelude::*;
///
/// let users = Table::new("users")
///     .field(UuidField::new("id").primary_key())
///     .mixin(Mixin::timestamped())
///     .index(Index::on_columns(["id"]));
/// assert_eq!(users.table_name(), "users");
/// assert_eq!(users.mixins().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Table {
    pub name: Cow<'static, str>,
    pub fields: Vec<Field>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub indexes: Vec<Index>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub mixins: Vec<Mixin>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    #[must_use]
    pub fn mixin(mut self, mixin: Mixin) -> Self {
        self.mixins.push(mixin);
        self
    }

    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }
}

impl Model for Table {
    /// # Panics
    ///
    /// Panics if the table name is empty.
    fn table_name(&self) -> &str {
        assert!(!self.name.is_empty(), "table name not set for schema");
        &self.name
    }

    fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn mixins(&self) -> &[Mixin] {
        &self.mixins
    }

    fn indexes(&self) -> &[Index] {
        &self.indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::TextField;

    struct Notes;

    impl Model for Notes {
        fn table_name(&self) -> &str {
            "notes"
        }

        fn fields(&self) -> &[Field] {
            &[]
        }
    }

    #[test]
    fn test_trait_defaults_are_empty() {
        assert!(Notes.mixins().is_empty());
        assert!(Notes.indexes().is_empty());
    }

    #[test]
    fn test_table_builders() {
        let table = Table::new("posts")
            .field(TextField::new("body"))
            .index(Index::on_columns(["body"]));
        assert_eq!(table.table_name(), "posts");
        assert_eq!(table.fields().len(), 1);
        assert_eq!(table.indexes().len(), 1);
    }

    #[test]
    #[should_panic(expected = "table name not set for schema")]
    fn test_unset_table_name_panics() {
        let _ = Table::default().table_name();
    }
}
