use thiserror::Error;

/// Errors raised while registering predicates on a builder.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// The comparator token has no SQL counterpart.
    #[error("Unsupported comparator: {0}")]
    UnsupportedComparator(String),

    /// A value of the wrong shape for the predicate it was given to.
    #[error("Unsupported value for column {column}: {reason}")]
    UnsupportedValue { column: String, reason: String },

    /// `IN` was given something other than a list.
    #[error("Expected a list of values for column {0}")]
    ExpectedList(String),

    /// `BETWEEN` was given something other than a two-element list.
    #[error("Expected a [lower, upper] pair for column {0}")]
    InvalidRange(String),

    /// A column name, or one of its parts, is empty.
    #[error("Empty column name: {0:?}")]
    EmptyColumn(String),
}
