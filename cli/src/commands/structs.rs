//! Structs command - renders one Rust struct per table

use std::path::Path;

use colored::Colorize;
use ddlkit::StructWriter;

use crate::config::Config;
use crate::error::CliError;

pub fn run(config: &Config, out: Option<&Path>, derives: &[String]) -> Result<(), CliError> {
    let tables = super::load_tables(config)?;

    let writer = derives.iter().fold(
        StructWriter::new().module_doc(format!("Source: {}", config.schema_display())),
        |writer, derive| writer.derive(derive.clone()),
    );
    let generated = writer.write_all(&tables);

    match out {
        Some(path) => {
            super::write_output(path, &generated.code)?;
            println!(
                "{} Wrote {} struct(s) to {}",
                "✓".green().bold(),
                generated.structs.len(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", generated.code),
    }

    Ok(())
}
