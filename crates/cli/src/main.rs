use crate::{env::EnvManager, error::CliError};
use clap::Parser;
use commands::{Commands, DialectKind};
use predicate::{QueryParams, Translator, TranslatorConfig};
use query::{
    ast::{
        common::TableRef,
        expr::{Expr, Ident},
    },
    builder::select::SelectBuilder,
};
use serde_json::{Value, json};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;

#[derive(Parser)]
#[command(
    name = "predicate",
    version = "0.1.0",
    about = "Translate filter, order and pagination documents into SQL"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level, overridden by RUST_LOG"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Where the rendered query selects from.
struct Target {
    table: TableRef,
    alias: Option<String>,
    columns: Vec<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the query
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            table,
            schema,
            alias,
            columns,
            dialect,
            query,
            config,
            env_file,
            json,
        } => {
            let mut env = EnvManager::from_process();
            if let Some(path) = &env_file {
                env.load_from_file(path)?;
            }
            let config = load_config(config.as_deref(), &env)?;
            info!(?config, dialect = %dialect.dialect().name(), "Loaded translator config");

            let source = read_query(&query)?;
            let target = Target {
                table: TableRef { schema, name: table },
                alias,
                columns,
            };
            let (sql, params) = render(&target, &source, config, dialect)?;

            if json {
                let output = json!({ "sql": sql, "params": params });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{sql}");
                println!("{}", serde_json::to_string(&params)?);
            }
        }
    }

    Ok(())
}

/// Reads the translator config file, if any, then applies `PREDICATE_*`
/// overrides from the environment.
fn load_config(path: Option<&str>, env: &EnvManager) -> Result<TranslatorConfig, CliError> {
    let base = match path {
        Some(path) => {
            debug!(path, "Reading translator config");
            TranslatorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => TranslatorConfig::default(),
    };
    Ok(base.overridden_by(|key| env.get(key))?)
}

fn read_query(path: &str) -> Result<String, CliError> {
    if path == "-" {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn render(
    target: &Target,
    source: &str,
    config: TranslatorConfig,
    dialect: DialectKind,
) -> Result<(String, Vec<Value>), CliError> {
    let params = if source.trim().is_empty() {
        QueryParams::default()
    } else {
        QueryParams::from_json(source)?
    };

    let columns = target
        .columns
        .iter()
        .map(|column| match column.as_str() {
            "*" => Ok(Expr::Wildcard),
            column => Ident::parse(column).map(Expr::Identifier),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = SelectBuilder::new()
        .select(columns)
        .from(target.table.clone(), target.alias.as_deref());
    params.apply(&mut builder, &Translator::new(config))?;

    Ok(builder.to_sql(dialect.dialect()))
}
