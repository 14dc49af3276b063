//! oxide-ddl CLI
//!
//! Command-line tool that turns JSON table definitions into DDL and DCL.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl_core::{Dialect, SchemaSynthesizer, TableDefinition, check_table, field_type_for};

/// Multi-dialect schema synthesis.
#[derive(Parser, Debug)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target dialect (mysql, postgresql, sqlserver, oracle).
    #[arg(short, long, env = "OXIDE_DDL_DIALECT", default_value = "mysql", global = true)]
    dialect: Dialect,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print CREATE TABLE, comment and index statements.
    Ddl {
        /// Table definition file (`-` for stdin).
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Print GRANT statements.
    Dcl {
        /// Table definition file (`-` for stdin).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Table name, overriding the definition's.
        #[arg(short, long)]
        table: Option<String>,

        /// Principal to grant SELECT to (repeatable).
        #[arg(short = 'g', long = "grant")]
        principals: Vec<String>,
    },

    /// Report reserved words, duplicate fields and broken index references.
    Check {
        /// Table definition file (`-` for stdin).
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },

    /// Print the rendered form of type strings.
    MapType {
        /// Type strings, e.g. `"decimal(10,2) unsigned"`.
        #[arg(required = true)]
        types: Vec<String>,

        /// Render for every dialect instead of the selected one.
        #[arg(long)]
        all_dialects: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging; stdout carries the SQL.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let synth = SchemaSynthesizer::default();

    match &cli.command {
        Commands::Ddl { input } => {
            let table = read_definition(input)?;
            println!("{}", synth.build_table(cli.dialect, &table)?);
        }

        Commands::Dcl {
            input,
            table,
            principals,
        } => {
            let grants = dcl_output(&synth, cli.dialect, input.as_deref(), table.clone(), principals)?;
            if grants.is_empty() {
                info!("Nothing to grant.");
            } else {
                println!("{grants}");
            }
        }

        Commands::Check { input } => {
            let table = read_definition(input)?;
            let warnings = check_table(cli.dialect, &table);
            if warnings.is_empty() {
                info!("No problems found in '{}' for {}.", table.name, cli.dialect);
                return Ok(ExitCode::SUCCESS);
            }
            for warning in &warnings {
                warn!("{warning}");
            }
            return Ok(ExitCode::FAILURE);
        }

        Commands::MapType {
            types,
            all_dialects,
        } => {
            for line in map_type_lines(cli.dialect, types, *all_dialects) {
                println!("{line}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads a table definition from a file, or stdin for `-`.
fn read_definition(path: &Path) -> anyhow::Result<TableDefinition> {
    let table = if path == Path::new("-") {
        debug!("Reading table definition from stdin");
        TableDefinition::from_reader(io::stdin().lock())?
    } else {
        debug!("Reading table definition from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("failed to open definition file {}", path.display()))?;
        TableDefinition::from_reader(file)
            .with_context(|| format!("failed to load definition file {}", path.display()))?
    };
    Ok(table)
}

/// Resolves table and principals from the flags and the optional
/// definition file. Flags win over the file.
fn dcl_output(
    synth: &SchemaSynthesizer,
    dialect: Dialect,
    input: Option<&Path>,
    table: Option<String>,
    principals: &[String],
) -> anyhow::Result<String> {
    let definition = input.map(read_definition).transpose()?;

    let table_name = match (table, &definition) {
        (Some(name), _) => name,
        (None, Some(def)) => def.name.clone(),
        (None, None) => bail!("either --table or --input is required"),
    };

    let principals: &[String] = match &definition {
        Some(def) if principals.is_empty() => &def.principals,
        _ => principals,
    };

    Ok(synth.build_dcl(dialect, &table_name, principals)?)
}

fn map_type_lines(dialect: Dialect, types: &[String], all_dialects: bool) -> Vec<String> {
    let dialects: &[Dialect] = if all_dialects {
        &Dialect::ALL
    } else {
        std::slice::from_ref(&dialect)
    };

    let mut lines = Vec::new();
    for raw in types {
        for d in dialects {
            let rendered = field_type_for(*d, raw);
            if all_dialects {
                lines.push(format!("{d:<10} {raw} -> {rendered}"));
            } else {
                lines.push(format!("{raw} -> {rendered}"));
            }
        }
    }
    lines
}
