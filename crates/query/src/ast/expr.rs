//! Defines the AST for SQL expressions.

use serde_json::Value;

use crate::error::QueryError;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A bound parameter value.
    Value(Value),

    /// A boolean keyword rendered inline, e.g. the `TRUE` in `active IS TRUE`.
    Boolean(bool),

    /// `*`
    Wildcard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}

impl Ident {
    /// Parses `column` or `table.column`.
    pub fn parse(column: &str) -> Result<Self, QueryError> {
        let (qualifier, name) = match column.split_once('.') {
            Some((qualifier, name)) => (Some(qualifier), name),
            None => (None, column),
        };

        if name.is_empty() || qualifier.is_some_and(str::is_empty) {
            return Err(QueryError::EmptyColumn(column.to_string()));
        }

        Ok(Ident {
            qualifier: qualifier.map(String::from),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Comparison
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=

    // Pattern matching
    Like,
    ILike,
    Regex,
    IRegex,

    // Boolean tests
    Is,
    IsNot,
}

impl BinaryOperator {
    /// Maps a comparator token to an operator. Tokens are matched
    /// case-insensitively.
    pub fn from_comparator(token: &str) -> Result<Self, QueryError> {
        let op = match token.trim().to_ascii_lowercase().as_str() {
            "=" => BinaryOperator::Eq,
            "<>" | "!=" => BinaryOperator::NotEq,
            "<" => BinaryOperator::Lt,
            "<=" => BinaryOperator::LtEq,
            ">" => BinaryOperator::Gt,
            ">=" => BinaryOperator::GtEq,
            "like" => BinaryOperator::Like,
            "ilike" => BinaryOperator::ILike,
            "re" => BinaryOperator::Regex,
            "ire" => BinaryOperator::IRegex,
            "is" => BinaryOperator::Is,
            "is not" => BinaryOperator::IsNot,
            _ => return Err(QueryError::UnsupportedComparator(token.to_string())),
        };
        Ok(op)
    }

    pub fn is_boolean_test(self) -> bool {
        matches!(self, BinaryOperator::Is | BinaryOperator::IsNot)
    }
}
