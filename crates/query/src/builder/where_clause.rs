//! Registration of predicates on a [`WhereClause`], and the scoped
//! [`WhereBuilder`] handed to group callbacks.

use predicate::ScopeFn;
use serde_json::Value;
use tracing::trace;

use crate::{
    ast::{
        condition::{Condition, Conjunction, Predicate, WhereClause},
        expr::{BinaryOperator, Expr, Ident},
    },
    error::QueryError,
};

/// Collects the conditions of one parenthesized group.
#[derive(Debug, Default, Clone)]
pub struct WhereBuilder {
    pub(crate) clause: WhereClause,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> WhereClause {
        self.clause
    }
}

impl WhereClause {
    fn push(&mut self, conjunction: Conjunction, negated: bool, predicate: Predicate) {
        trace!(?conjunction, negated, ?predicate, "Adding condition");
        self.conditions.push(Condition {
            conjunction,
            negated,
            predicate,
        });
    }

    pub fn add_comparison(
        &mut self,
        conjunction: Conjunction,
        negated: bool,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), QueryError> {
        let left = Ident::parse(column)?;
        let op = BinaryOperator::from_comparator(comparator)?;
        let right = if op.is_boolean_test() {
            match value {
                Value::Bool(flag) => Expr::Boolean(*flag),
                _ => {
                    return Err(QueryError::UnsupportedValue {
                        column: column.to_string(),
                        reason: format!("{comparator} expects true or false"),
                    });
                }
            }
        } else {
            scalar(column, value)?
        };

        self.push(conjunction, negated, Predicate::Compare { left, op, right });
        Ok(())
    }

    /// Runs `scope` against a fresh [`WhereBuilder`] and adds its
    /// conditions as one group. A scope that adds nothing leaves the clause
    /// unchanged.
    pub fn add_group(
        &mut self,
        conjunction: Conjunction,
        negated: bool,
        scope: &mut ScopeFn<'_, WhereBuilder>,
    ) -> Result<(), QueryError> {
        let mut nested = WhereBuilder::new();
        scope(&mut nested)?;

        let clause = nested.build();
        if clause.is_empty() {
            trace!("Dropping empty group");
            return Ok(());
        }

        self.push(conjunction, negated, Predicate::Group(clause));
        Ok(())
    }

    pub fn add_in_list(
        &mut self,
        conjunction: Conjunction,
        negated: bool,
        column: &str,
        values: &Value,
    ) -> Result<(), QueryError> {
        let expr = Ident::parse(column)?;
        let Value::Array(items) = values else {
            return Err(QueryError::ExpectedList(column.to_string()));
        };
        let list = items
            .iter()
            .map(|item| scalar(column, item))
            .collect::<Result<Vec<_>, _>>()?;

        self.push(conjunction, negated, Predicate::InList { expr, list });
        Ok(())
    }

    pub fn add_between(
        &mut self,
        conjunction: Conjunction,
        negated: bool,
        column: &str,
        range: &Value,
    ) -> Result<(), QueryError> {
        let expr = Ident::parse(column)?;
        let (low, high) = match range.as_array().map(Vec::as_slice) {
            Some([low, high]) => (scalar(column, low)?, scalar(column, high)?),
            _ => return Err(QueryError::InvalidRange(column.to_string())),
        };

        self.push(conjunction, negated, Predicate::Between { expr, low, high });
        Ok(())
    }

    pub fn add_null_check(
        &mut self,
        conjunction: Conjunction,
        negated: bool,
        column: &str,
    ) -> Result<(), QueryError> {
        let expr = Ident::parse(column)?;
        self.push(conjunction, negated, Predicate::IsNull(expr));
        Ok(())
    }
}

/// Binds a string, number or boolean as a parameter.
fn scalar(column: &str, value: &Value) -> Result<Expr, QueryError> {
    let reason = match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            return Ok(Expr::Value(value.clone()));
        }
        Value::Null => "null can only be used in a null check",
        Value::Array(_) => "expected a scalar, got a list",
        Value::Object(_) => "expected a scalar, got an object",
    };
    Err(QueryError::UnsupportedValue {
        column: column.to_string(),
        reason: reason.to_string(),
    })
}
