//! ddlkit CLI - render schema files to PostgreSQL DDL
//!
//! Tables are described in TOML or JSON schema files and listed in a
//! `ddlkit.config.toml` configuration file.
//!
//! # Quick Start
//!
//! 1. Run `ddlkit init` to create a `ddlkit.config.toml`
//! 2. Describe tables in `schema/*.toml`
//! 3. Run `ddlkit generate` to print the SQL
//!
//! # Configuration
//!
//! ```toml
//! schema = "schema/*.toml"   # one pattern or a list
//! out = "schema.sql"         # omit to print to stdout
//! validate = true
//! comments = true
//! indexes = true
//! ```
//!
//! # Commands
//!
//! - `ddlkit init` - Create a new configuration file
//! - `ddlkit check` - Validate every table and report problems
//! - `ddlkit generate` - Render `CREATE TABLE`, comments and indexes
//! - `ddlkit structs` - Render one Rust struct per table

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod schema;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
