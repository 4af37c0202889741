//! CLI command implementations
//!
//! Each command module implements one ddlkit subcommand.

pub mod check;
pub mod generate;
pub mod structs;

use ddlkit::ddl::Table;

use crate::config::Config;
use crate::error::CliError;
use crate::schema;

/// Resolve the configured schema files and load every table
pub fn load_tables(config: &Config) -> Result<Vec<Table>, CliError> {
    let files = config.schema_files()?;
    let tables = schema::load(&files)?;
    tracing::info!(files = files.len(), tables = tables.len(), "loaded schema");
    Ok(tables)
}

/// Write `content` to `path`, creating parent directories
pub(crate) fn write_output(path: &std::path::Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError(e.to_string()))?;
    }
    std::fs::write(path, content).map_err(|e| CliError::IoError(e.to_string()))
}
