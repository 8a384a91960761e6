use clap::{Subcommand, ValueEnum};
use query::dialect::{Dialect, MySql, Postgres};

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a query document into a parameterized SELECT
    Render {
        #[arg(long, help = "Table to select from")]
        table: String,

        #[arg(long, help = "Schema of the table")]
        schema: Option<String>,

        #[arg(long, help = "Alias for the table")]
        alias: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma separated columns to select, all columns if omitted"
        )]
        columns: Vec<String>,

        #[arg(long, value_enum, default_value_t = DialectKind::Postgres)]
        dialect: DialectKind,

        #[arg(
            long,
            default_value = "-",
            help = "Query document path, or - to read it from stdin"
        )]
        query: String,

        #[arg(long, help = "Translator config file (JSON)")]
        config: Option<String>,

        #[arg(long, help = "Env file whose PREDICATE_* entries override the config")]
        env_file: Option<String>,

        #[arg(long, help = "Print the SQL and parameters as one JSON object")]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    Postgres,
    Mysql,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Postgres => &Postgres,
            DialectKind::Mysql => &MySql,
        }
    }
}
