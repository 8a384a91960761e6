use thiserror::Error;

/// Errors raised while loading translator configuration.
///
/// Translation itself never fails on its own account; builder errors are
/// returned as the builder's error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An order direction other than `asc` or `desc`.
    #[error("Invalid order direction: {0}")]
    InvalidDirection(String),

    /// A configuration value that could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// Pages must hold at least one row.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}
