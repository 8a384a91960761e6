//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::ast::{
    common::{OrderDir, TableRef},
    condition::WhereClause,
    expr::Expr,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    /// e.g., `id`, `name`, `*`
    pub columns: Vec<Expr>,

    /// The primary table for the query.
    /// e.g., `FROM users`
    pub from: Option<FromClause>,

    /// The WHERE clause conditions. Empty means no WHERE.
    pub where_clause: WhereClause,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,

    /// The LIMIT clause.
    pub limit: Option<Expr>,

    /// The OFFSET clause.
    pub offset: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}
