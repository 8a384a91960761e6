//! Operator resolution and the dispatch tables that map resolved operators
//! onto builder methods.

use serde_json::Value;

use crate::{
    builder::{Builder, FilterBuilder, ScopeFn},
    key::{Combinator, GroupKey},
};

/// Prefix marking a negated operator, e.g. `not_eq`.
const NEGATION_PREFIX: &str = "not_";

pub type GroupMethod<B> = fn(
    &mut B,
    &mut ScopeFn<'_, <B as FilterBuilder>::Scope>,
) -> Result<(), <B as Builder>::Error>;

pub type ComparisonMethod<B> =
    fn(&mut B, &str, &str, &Value) -> Result<(), <B as Builder>::Error>;

pub type ValueMethod<B> =
    fn(&mut B, &str, &Value) -> Result<(), <B as Builder>::Error>;

pub type NullMethod<B> = fn(&mut B, &str) -> Result<(), <B as Builder>::Error>;

impl GroupKey {
    pub fn method<B: FilterBuilder>(self) -> GroupMethod<B> {
        match self {
            GroupKey::Or => B::or_where_group,
            GroupKey::And => B::and_where_group,
            GroupKey::Not | GroupKey::AndNot => B::and_where_not_group,
            GroupKey::OrNot => B::or_where_not_group,
        }
    }
}

/// Short comparison names and the comparator tokens they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
}

impl ComparisonOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(ComparisonOp::Eq),
            "gt" => Some(ComparisonOp::Gt),
            "gte" => Some(ComparisonOp::Gte),
            "lt" => Some(ComparisonOp::Lt),
            "lte" => Some(ComparisonOp::Lte),
            "ne" => Some(ComparisonOp::Ne),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Ne => "<>",
        }
    }
}

/// Resolves a short operator name to the comparator token handed to the
/// builder. Unknown names are passed through verbatim.
pub fn comparator_token(base: &str) -> &str {
    match ComparisonOp::from_name(base) {
        Some(op) => op.symbol(),
        None => base,
    }
}

pub fn comparison_method<B: FilterBuilder>(
    combinator: Combinator,
    negated: bool,
) -> ComparisonMethod<B> {
    match (combinator, negated) {
        (Combinator::And, false) => B::and_where,
        (Combinator::Or, false) => B::or_where,
        (Combinator::And, true) => B::and_where_not,
        (Combinator::Or, true) => B::or_where_not,
    }
}

/// Operators that take a list value rather than a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    In,
    Between,
}

impl RangeOp {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "in" => Some(RangeOp::In),
            "btw" => Some(RangeOp::Between),
            _ => None,
        }
    }

    pub fn method<B: FilterBuilder>(self, combinator: Combinator, negated: bool) -> ValueMethod<B> {
        match (self, combinator, negated) {
            (RangeOp::In, Combinator::And, false) => B::and_where_in,
            (RangeOp::In, Combinator::Or, false) => B::or_where_in,
            (RangeOp::In, Combinator::And, true) => B::and_where_not_in,
            (RangeOp::In, Combinator::Or, true) => B::or_where_not_in,
            (RangeOp::Between, Combinator::And, false) => B::and_where_between,
            (RangeOp::Between, Combinator::Or, false) => B::or_where_between,
            (RangeOp::Between, Combinator::And, true) => B::and_where_not_between,
            (RangeOp::Between, Combinator::Or, true) => B::or_where_not_between,
        }
    }
}

/// Null checks selected when the predicate value is `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullCheck {
    IsNull,
    IsNotNull,
}

impl NullCheck {
    /// `is_not`, `ne` and any `not_*` operator select `IS NOT NULL`,
    /// everything else `IS NULL`.
    pub fn from_operator(operator: &str) -> Self {
        if operator == "is_not" || operator == "ne" || operator.starts_with(NEGATION_PREFIX) {
            NullCheck::IsNotNull
        } else {
            NullCheck::IsNull
        }
    }

    pub fn method<B: FilterBuilder>(self, combinator: Combinator) -> NullMethod<B> {
        match (self, combinator) {
            (NullCheck::IsNull, Combinator::And) => B::and_where_null,
            (NullCheck::IsNull, Combinator::Or) => B::or_where_null,
            (NullCheck::IsNotNull, Combinator::And) => B::and_where_not_null,
            (NullCheck::IsNotNull, Combinator::Or) => B::or_where_not_null,
        }
    }
}

/// Splits one optional leading `not_` off an operator.
pub fn split_negation(operator: &str) -> (bool, &str) {
    match operator.strip_prefix(NEGATION_PREFIX) {
        Some(base) => (true, base),
        None => (false, operator),
    }
}

/// What a leaf predicate turns into once its operator and value are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    Null(NullCheck),
    Range { op: RangeOp, negated: bool },
    Comparison { comparator: &'a str, negated: bool },
}

impl<'a> Resolved<'a> {
    pub fn resolve(operator: &'a str, value: &Value) -> Self {
        if value.is_null() {
            return Resolved::Null(NullCheck::from_operator(operator));
        }

        let (negated, base) = split_negation(operator);
        match RangeOp::from_name(base) {
            Some(op) => Resolved::Range { op, negated },
            None => Resolved::Comparison {
                comparator: comparator_token(base),
                negated,
            },
        }
    }
}
