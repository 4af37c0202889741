//! ddlkit CLI - Main entry point

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ddlkit_cli::config::{CONFIG_FILE, Config};
use ddlkit_cli::error::CliError;

/// ddlkit - Render declarative table definitions to PostgreSQL DDL
#[derive(Parser, Debug)]
#[command(name = "ddlkit")]
#[command(author, version, about = "Render declarative table definitions to PostgreSQL DDL", long_about = None)]
struct Cli {
    /// Path to config file (default: ddlkit.config.toml)
    #[arg(short, long, global = true, value_name = "PATH", env = "DDLKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log loading and generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render CREATE TABLE, comment and index statements
    Generate {
        /// Output SQL to a file (default: config `out`, else stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Skip validation before rendering
        #[arg(long)]
        no_validate: bool,
    },

    /// Validate every table without rendering
    Check,

    /// Render one Rust struct per table
    Structs {
        /// Output Rust source to a file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Extra derives added to every struct (comma separated)
        #[arg(long, value_delimiter = ',')]
        derive: Vec<String>,
    },

    /// Initialize a new ddlkit.config.toml configuration file
    Init {
        /// Schema file pattern written to the config
        #[arg(short, long, default_value = "schema/*.toml")]
        schema: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init { schema } => run_init(&schema),
        Command::Generate { out, no_validate } => {
            let config = load_config(cli.config.as_deref())?;
            ddlkit_cli::commands::generate::run(&config, out.as_deref(), no_validate)
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            ddlkit_cli::commands::check::run(&config)
        }
        Command::Structs { out, derive } => {
            let config = load_config(cli.config.as_deref())?;
            ddlkit_cli::commands::structs::run(&config, out.as_deref(), &derive)
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}

/// Initialize a new ddlkit.config.toml file
fn run_init(schema: &str) -> Result<(), CliError> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            CONFIG_FILE
        )));
    }

    std::fs::write(&config_path, init_config(schema))
        .map_err(|e| CliError::IoError(e.to_string()))?;

    println!("{}", format!("✓ Created {}", CONFIG_FILE).bright_green());
    println!();
    println!("Next steps:");
    println!(
        "  1. Describe your tables in {}",
        schema.bright_cyan()
    );
    println!(
        "  2. Run {} to validate them",
        "ddlkit check".bright_cyan()
    );
    println!(
        "  3. Run {} to print the SQL",
        "ddlkit generate".bright_cyan()
    );

    Ok(())
}

fn init_config(schema: &str) -> String {
    format!(
        r#"# ddlkit configuration

# Schema files: one pattern or a list of patterns (.toml or .json)
schema = "{schema}"

# Write SQL to a file instead of stdout
# out = "schema.sql"

# Validate every table before rendering
validate = true

# Emit COMMENT ON COLUMN statements
comments = true

# Emit CREATE INDEX statements
indexes = true
"#
    )
}
