//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;
use crate::schema;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema file could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] schema::Error),

    /// A table failed validation
    #[error("Invalid schema: {0}")]
    Invalid(#[from] ddlkit::SchemaError),

    /// Several tables failed validation (details already printed)
    #[error("{0} table(s) failed validation")]
    ValidationFailed(usize),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
