//! Defines the AST for WHERE conditions.
//!
//! A [`WhereClause`] is a flat, ordered list of conditions, each joined to
//! the previous one by its own conjunction. Nesting happens through
//! [`Predicate::Group`], which renders in parentheses.

use crate::ast::expr::{BinaryOperator, Expr, Ident};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Ignored for the first condition of a clause.
    pub conjunction: Conjunction,
    pub negated: bool,
    pub predicate: Predicate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column <op> value`
    Compare {
        left: Ident,
        op: BinaryOperator,
        right: Expr,
    },

    /// `column IN (...)`
    InList { expr: Ident, list: Vec<Expr> },

    /// `column BETWEEN low AND high`
    Between { expr: Ident, low: Expr, high: Expr },

    /// `column IS NULL`
    IsNull(Ident),

    /// `( ... )`
    Group(WhereClause),
}
