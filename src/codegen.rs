//! Rust struct generation
//!
//! Renders one struct per model, one field per column (mixin columns included)
//! typed with [`ColumnField::rust_type`].

use ddlkit_types::{ColumnField, Model};
use heck::{ToPascalCase, ToSnakeCase};

use crate::TableSql;

/// Result of code generation
#[derive(Debug, Clone, Default)]
pub struct GeneratedStructs {
    /// The generated Rust source code
    pub code: String,
    /// Names of the generated structs
    pub structs: Vec<String>,
}

/// Writer for table structs
///
/// ```
/// use ddlkit::prelude::*;
/// use ddlkit::StructWriter;
///
/// let table = Table::new("user_accounts").field(TextField::new("bio").nullable());
/// let code = StructWriter::new().write_struct(&table);
/// assert_eq!(
///     code,
///     "#[derive(Debug, Clone)]\npub struct UserAccounts {\n    pub bio: Option<String>,\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StructWriter {
    module_doc: Option<String>,
    derives: Vec<String>,
    use_pub: bool,
}

impl Default for StructWriter {
    fn default() -> Self {
        Self {
            module_doc: None,
            derives: vec!["Debug".to_string(), "Clone".to_string()],
            use_pub: true,
        }
    }
}

impl StructWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Documentation placed at the top of [`write_all`](Self::write_all) output
    #[must_use]
    pub fn module_doc(mut self, doc: impl Into<String>) -> Self {
        self.module_doc = Some(doc.into());
        self
    }

    /// Add a derive to every struct
    #[must_use]
    pub fn derive(mut self, name: impl Into<String>) -> Self {
        self.derives.push(name.into());
        self
    }

    /// Generate private structs and fields
    #[must_use]
    pub fn private(mut self) -> Self {
        self.use_pub = false;
        self
    }

    /// Generate the struct for one model
    pub fn write_struct<M: Model + ?Sized>(&self, model: &M) -> String {
        let table = TableSql::new(model);
        let struct_name = table.table_name().to_pascal_case();
        let vis = if self.use_pub { "pub " } else { "" };

        let mut code = String::new();
        if !self.derives.is_empty() {
            code.push_str(&format!("#[derive({})]\n", self.derives.join(", ")));
        }
        code.push_str(&format!("{vis}struct {struct_name} {{\n"));

        for field in table.columns() {
            let options = field.options();
            if let Some(comment) = options.comment.as_deref().filter(|c| !c.is_empty()) {
                code.push_str(&format!("    /// {comment}\n"));
            }
            if let Some(tag) = options.struct_tag.as_deref().filter(|t| !t.is_empty()) {
                code.push_str(&format!("    #[{tag}]\n"));
            }
            let field_name = field.name().to_snake_case();
            code.push_str(&format!("    {vis}{field_name}: {},\n", field.rust_type()));
        }

        code.push_str("}\n");
        code
    }

    /// Generate a module holding one struct per model
    pub fn write_all<'m, M, I>(&self, models: I) -> GeneratedStructs
    where
        M: Model + ?Sized + 'm,
        I: IntoIterator<Item = &'m M>,
    {
        let mut result = GeneratedStructs::default();
        let mut code = String::new();

        code.push_str("//! Auto-generated table structs\n");
        if let Some(doc) = &self.module_doc {
            code.push_str("//!\n");
            for line in doc.lines() {
                code.push_str("//! ");
                code.push_str(line);
                code.push('\n');
            }
        }

        for model in models {
            code.push('\n');
            code.push_str(&self.write_struct(model));
            result
                .structs
                .push(model.table_name().to_pascal_case());
        }

        result.code = code;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlkit_types::prelude::*;

    #[test]
    fn test_struct_includes_mixin_fields_and_tags() {
        let table = Table::new("users")
            .field(UuidField::new("id").primary_key())
            .field(
                ForeignKeyField::new("orgId", "orgs", "id")
                    .nullable()
                    .referenced_type("uuid::Uuid"),
            )
            .mixin(Mixin::timestamped());

        let code = StructWriter::new().derive("PartialEq").write_struct(&table);
        let expected = "\
#[derive(Debug, Clone, PartialEq)]
pub struct Users {
    pub id: uuid::Uuid,
    pub org_id: Option<uuid::Uuid>,
    /// Creation timestamp
    #[serde(rename = \"created_at\")]
    pub created_at: chrono::NaiveDate,
    /// Update timestamp
    #[serde(rename = \"updated_at\")]
    pub updated_at: chrono::NaiveDate,
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_private_structs() {
        let table = Table::new("tags").field(BooleanField::new("hidden"));
        let code = StructWriter::new().private().write_struct(&table);
        assert!(code.contains("\nstruct Tags {\n    hidden: bool,\n}"));
    }

    #[test]
    fn test_write_all() {
        let tables = [
            Table::new("users").field(TextField::new("name")),
            Table::new("blog_posts").field(TextField::new("title")),
        ];
        let generated = StructWriter::new()
            .module_doc("Generated from schema.toml")
            .write_all(&tables);

        assert_eq!(generated.structs, ["Users", "BlogPosts"]);
        assert!(
            generated
                .code
                .starts_with("//! Auto-generated table structs\n//!\n//! Generated from schema.toml\n")
        );
        assert!(generated.code.contains("pub struct BlogPosts {"));
    }
}
