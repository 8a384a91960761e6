//! Typestate builder for `Select` queries.
//!
//! `SELECT` and `FROM` are fixed first. Once the builder reaches
//! [`FromState`] it accepts predicates, sort keys and the result window
//! through the `predicate` builder traits.

use predicate::{OrderBuilder, OrderDirection, PaginationBuilder};
use serde_json::Value;

use crate::{
    ast::{
        common::TableRef,
        expr::{Expr, Ident},
        select::{FromClause, OrderByExpr, Select},
    },
    dialect::Dialect,
    error::QueryError,
    renderer::to_sql,
};

/// Nothing chosen yet.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// Columns chosen, table pending.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// Columns and table chosen.
#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    pub(crate) ast: Select,
    state: State,
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: InitialState,
        }
    }

    /// Sets the selected columns. An empty list renders `*`.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }
}

impl SelectBuilder<FromState> {
    pub fn ast(&self) -> &Select {
        &self.ast
    }

    /// Renders the query for `dialect`.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        to_sql(&self.ast, dialect)
    }

    pub fn build(self) -> Select {
        let SelectBuilder { ast, state: _ } = self;
        ast
    }
}

impl OrderBuilder for SelectBuilder<FromState> {
    fn order_by(&mut self, column: &str, direction: OrderDirection) -> Result<(), QueryError> {
        self.ast.order_by.push(OrderByExpr {
            expr: Expr::Identifier(Ident::parse(column)?),
            direction: Some(direction.into()),
        });
        Ok(())
    }
}

impl PaginationBuilder for SelectBuilder<FromState> {
    fn limit(&mut self, limit: u64) -> Result<(), QueryError> {
        self.ast.limit = Some(Expr::Value(Value::from(limit)));
        Ok(())
    }

    fn offset(&mut self, offset: u64) -> Result<(), QueryError> {
        self.ast.offset = Some(Expr::Value(Value::from(offset)));
        Ok(())
    }
}
