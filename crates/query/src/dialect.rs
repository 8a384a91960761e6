//! SQL dialects: identifier quoting, parameter placeholders and operator
//! spellings.

use crate::ast::expr::BinaryOperator;

pub trait Dialect: Send + Sync {
    /// Quotes a table or column name, doubling any embedded quote
    /// character: `"my_column"` on PostgreSQL, `` `my_column` `` on MySQL.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Placeholder for the zero-based parameter `index`.
    fn get_placeholder(&self, index: usize) -> String;

    /// Human readable name, used in logs.
    fn name(&self) -> String;

    /// The SQL spelling of a comparison operator.
    fn binary_operator(&self, op: BinaryOperator) -> &'static str {
        match op {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::Like => "LIKE",
            BinaryOperator::ILike => "ILIKE",
            BinaryOperator::Regex => "~",
            BinaryOperator::IRegex => "~*",
            BinaryOperator::Is => "IS",
            BinaryOperator::IsNot => "IS NOT",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        "?".into()
    }

    fn name(&self) -> String {
        "MySQL".into()
    }

    fn binary_operator(&self, op: BinaryOperator) -> &'static str {
        match op {
            // Case sensitivity follows the column collation.
            BinaryOperator::ILike => "LIKE",
            BinaryOperator::Regex | BinaryOperator::IRegex => "REGEXP",
            other => Postgres.binary_operator(other),
        }
    }
}
