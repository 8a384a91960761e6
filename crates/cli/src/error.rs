use predicate::ConfigError;
use query::error::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the query document: {0}")]
    QueryDocument(#[from] serde_json::Error),

    #[error("Invalid translator configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build the query: {0}")]
    Query(#[from] QueryError),

    #[error("Invalid env file: {0}")]
    EnvFile(String),
}
