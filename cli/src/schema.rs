//! Schema file loading
//!
//! A schema file is TOML or JSON holding `mixins` and `tables`. Tables refer to
//! mixins by name; names resolve against every loaded file plus the built-in
//! `timestamped` mixin.
//!
//! ```toml
//! [[mixins]]
//! name = "audit"
//! fields = [{ kind = "uuid", name = "created_by", nullable = true }]
//!
//! [[tables]]
//! name = "users"
//! mixins = ["timestamped", "audit"]
//!
//! [[tables.fields]]
//! kind = "uuid"
//! name = "id"
//! primary_key = true
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use ddlkit::ddl::{Field, Index, Mixin, Table};
use serde::Deserialize;

/// One schema file as written on disk
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    #[serde(default)]
    pub mixins: Vec<Mixin>,
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

/// A table whose mixins are still names
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub indexes: Vec<Index>,
    #[serde(default)]
    pub mixins: Vec<String>,
}

impl SchemaFile {
    /// Read and parse a `.toml` or `.json` file
    pub fn read(path: &Path) -> Result<Self, Error> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::Io(path.into(), e))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| Error::Toml(path.into(), e))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| Error::Json(path.into(), e))
            }
            _ => Err(Error::UnsupportedFormat(path.into())),
        }
    }
}

/// Load every file and resolve mixin references
///
/// Tables keep file order, then declaration order within each file.
pub fn load(paths: &[PathBuf]) -> Result<Vec<Table>, Error> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let file = SchemaFile::read(path)?;
        tracing::debug!(
            path = %path.display(),
            tables = file.tables.len(),
            mixins = file.mixins.len(),
            "read schema file"
        );
        files.push((path, file));
    }

    let mut mixins: HashMap<String, Mixin> = HashMap::new();
    let builtin = Mixin::timestamped();
    mixins.insert(builtin.name.to_string(), builtin);
    for mixin in files.iter_mut().flat_map(|(_, f)| f.mixins.drain(..)) {
        mixins.insert(mixin.name.to_string(), mixin);
    }

    let mut seen = HashSet::new();
    let mut tables = Vec::new();
    for (path, def) in files
        .into_iter()
        .flat_map(|(path, f)| f.tables.into_iter().map(move |def| (path, def)))
    {
        if def.name.is_empty() {
            return Err(Error::EmptyTableName(path.clone()));
        }
        if !seen.insert(def.name.clone()) {
            return Err(Error::DuplicateTable(def.name));
        }
        tables.push(resolve(def, &mixins)?);
    }

    Ok(tables)
}

fn resolve(def: TableDef, mixins: &HashMap<String, Mixin>) -> Result<Table, Error> {
    let mut table = Table::new(def.name);
    table.fields = def.fields;
    table.indexes = def.indexes;

    for name in def.mixins {
        let Some(mixin) = mixins.get(&name) else {
            return Err(Error::UnknownMixin {
                table: table.name.to_string(),
                mixin: name,
            });
        };
        table.mixins.push(mixin.clone());
    }

    Ok(table)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("unsupported schema file {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("table \"{table}\" uses unknown mixin \"{mixin}\"")]
    UnknownMixin { table: String, mixin: String },

    #[error("table \"{0}\" is defined more than once")]
    DuplicateTable(String),

    #[error("{}: table name cannot be empty", .0.display())]
    EmptyTableName(PathBuf),
}

// ============================================================================
// Tests
// ============================================================================
