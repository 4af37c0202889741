//! Check command - validates configuration and every table

use ddlkit::TableSql;

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    println!("{}", output::heading("Checking schema..."));
    println!();
    println!("  {}: {}", output::label("Schema"), config.schema_display());
    match &config.out {
        Some(out) => println!("  {}: {}", output::label("Output"), out.display()),
        None => println!("  {}: {}", output::label("Output"), output::muted("stdout")),
    }

    println!();
    print!("  {} Schema files... ", output::label("Checking"));
    let files = match config.schema_files() {
        Ok(files) => {
            println!("{}", output::status_ok());
            for f in &files {
                println!("    {}", f.display());
            }
            files
        }
        Err(e) => {
            println!("{}", output::status_error());
            return Err(e.into());
        }
    };

    let tables = crate::schema::load(&files)?;

    println!();
    let mut failed = 0;
    for table in &tables {
        let sql = TableSql::new(table);
        print!("  {} {}... ", output::label("Table"), sql.table_name());
        match sql.validate() {
            Ok(()) => println!("{}", output::status_ok()),
            Err(e) => {
                println!("{}", output::status_error());
                println!("    {}", output::err_line(&e.to_string()));
                tracing::debug!(table = %sql.table_name(), error = %e, "table failed validation");
                failed += 1;
            }
        }
    }

    println!();
    if failed > 0 {
        Err(CliError::ValidationFailed(failed))
    } else {
        println!(
            "{}",
            output::success(&format!("{} table(s) OK.", tables.len()))
        );
        Ok(())
    }
}
