//! Configuration for the ddlkit CLI
//!
//! Handles loading `ddlkit.config.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "ddlkit.config.toml";

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_schema")]
    pub schema: Schema,

    /// SQL output file; stdout when unset
    #[serde(default)]
    pub out: Option<PathBuf>,

    /// Validate every table before generating
    #[serde(default = "yes")]
    pub validate: bool,

    /// Emit `COMMENT ON COLUMN` statements
    #[serde(default = "yes")]
    pub comments: bool,

    /// Emit `CREATE INDEX` statements
    #[serde(default = "yes")]
    pub indexes: bool,
}

fn default_schema() -> Schema { Schema::One("schema/*.toml".into()) }
fn yes() -> bool { true }

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            out: None,
            validate: true,
            comments: true,
            indexes: true,
        }
    }
}

/// Schema path(s), each a file or glob pattern
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    One(String),
    Many(Vec<String>),
}

impl Schema {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(s) => std::slice::from_ref(s).iter().map(String::as_str),
            Self::Many(v) => v.iter().map(String::as_str),
        }
    }
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Parse(path.into(), e))?;

        tracing::debug!(path = %path.display(), schema = %config.schema_display(), "loaded config");
        Ok(config)
    }

    /// Schema paths display string
    pub fn schema_display(&self) -> String {
        match &self.schema {
            Schema::One(s) => s.clone(),
            Schema::Many(v) => v.join(", "),
        }
    }

    /// Resolve schema files (with glob support), sorted within each pattern
    pub fn schema_files(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();

        for pattern in self.schema.iter() {
            match glob::glob(pattern) {
                Ok(paths) => {
                    let mut matched: Vec<_> = paths.filter_map(Result::ok).collect();
                    matched.sort();
                    if matched.is_empty() {
                        let p = PathBuf::from(pattern);
                        if p.exists() {
                            files.push(p);
                        }
                    } else {
                        files.extend(matched);
                    }
                }
                Err(e) => return Err(Error::Glob(pattern.into(), e)),
            }
        }

        if files.is_empty() {
            return Err(Error::NoSchemaFiles(self.schema_display()));
        }

        Ok(files)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid glob '{0}': {1}")]
    Glob(String, #[source] glob::PatternError),

    #[error("no schema files found: {0}")]
    NoSchemaFiles(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
