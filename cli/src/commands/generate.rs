//! Generate command
//!
//! Renders every table to SQL:
//! 1. Validates each table (unless disabled)
//! 2. Emits `CREATE TABLE` with column definitions and foreign keys
//! 3. Emits column comments and indexes when enabled
//! 4. Writes to the output file, or stdout

use std::path::{Path, PathBuf};

use colored::Colorize;
use ddlkit::TableSql;
use ddlkit::ddl::Table;

use crate::config::Config;
use crate::error::CliError;

/// Which statements to render
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub out: Option<PathBuf>,
    pub validate: bool,
    pub comments: bool,
    pub indexes: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            out: config.out.clone(),
            validate: config.validate,
            comments: config.comments,
            indexes: config.indexes,
        }
    }
}

/// Render each table's statements, one block per table
pub fn render(tables: &[Table], opts: &GenerateOptions) -> Result<Vec<Vec<String>>, CliError> {
    let mut blocks = Vec::with_capacity(tables.len());

    for table in tables {
        let sql = TableSql::new(table);
        if opts.validate {
            sql.validate()?;
        }

        let mut statements = vec![sql.create_table_sql()];
        if opts.comments {
            statements.extend(sql.comment_sql());
        }
        if opts.indexes {
            statements.extend(sql.create_indexes_sql()?);
            statements.extend(sql.field_indexes_sql());
        }

        tracing::debug!(table = %sql.table_name(), statements = statements.len(), "rendered table");
        blocks.push(statements);
    }

    Ok(blocks)
}

pub fn run(config: &Config, out_override: Option<&Path>, no_validate: bool) -> Result<(), CliError> {
    let mut opts = GenerateOptions::from_config(config);
    if let Some(out) = out_override {
        opts.out = Some(out.to_path_buf());
    }
    if no_validate {
        opts.validate = false;
    }

    let tables = super::load_tables(config)?;
    let blocks = render(&tables, &opts)?;

    let mut sql = blocks
        .iter()
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    sql.push('\n');

    match &opts.out {
        Some(path) => {
            super::write_output(path, &sql)?;
            let count: usize = blocks.iter().map(Vec::len).sum();
            println!(
                "{} Wrote {} statement(s) for {} table(s) to {}",
                "✓".green().bold(),
                count,
                tables.len(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{sql}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlkit::prelude::*;

    fn tables() -> Vec<Table> {
        vec![
            Table::new("users")
                .field(UuidField::new("id").primary_key())
                .field(TextField::new("bio").blank().comment("Profile text").indexed()),
        ]
    }

    fn all() -> GenerateOptions {
        GenerateOptions {
            out: None,
            validate: true,
            comments: true,
            indexes: true,
        }
    }

    #[test]
    fn renders_every_statement() {
        let blocks = render(&tables(), &all()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            [
                r#"CREATE TABLE IF NOT EXISTS "users" ("id" uuid NOT NULL PRIMARY KEY, "bio" TEXT);"#,
                r#"COMMENT ON COLUMN "users"."bio" IS 'Profile text';"#,
                r#"CREATE INDEX IF NOT EXISTS "users_bio_idx" ON "users" ("bio");"#,
            ]
        );
    }

    #[test]
    fn toggles_skip_statements() {
        let opts = GenerateOptions {
            comments: false,
            indexes: false,
            ..all()
        };
        let blocks = render(&tables(), &opts).unwrap();
        assert_eq!(blocks[0].len(), 1);
    }

    #[test]
    fn validation_can_be_disabled() {
        let tables = vec![Table::new("t").field(CharField::new("c", 0))];
        assert!(matches!(
            render(&tables, &all()),
            Err(CliError::Invalid(_))
        ));

        let opts = GenerateOptions {
            validate: false,
            ..all()
        };
        assert_eq!(
            render(&tables, &opts).unwrap()[0][0],
            r#"CREATE TABLE IF NOT EXISTS "t" ("c" VARCHAR(0) NOT NULL);"#
        );
    }
}
