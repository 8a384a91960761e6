//! Translation of filter specifications into predicate calls.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    builder::FilterBuilder,
    key::{Key, Leaf},
    operator::{Resolved, comparison_method},
};

/// Applies a filter specification to `builder`.
///
/// Only JSON objects are translated; `null` or any other non-object value
/// leaves the builder untouched. Entries are visited in insertion order,
/// so the registered predicates follow the order of the keys.
///
/// ```text
/// { "column__eq": 0 }                         -> where column = 0
/// { "column1__eq": 0, "or__column2__eq": 1 }  -> where column1 = 0 or column2 = 1
/// { "not": { "a__eq": 1, "or__b__eq": 2 } }   -> where not (a = 1 or b = 2)
/// ```
///
/// Errors raised by the builder are returned unchanged and stop the
/// traversal where they occur.
pub fn apply_filter<'b, B: FilterBuilder>(
    builder: &'b mut B,
    filter: &Value,
) -> Result<&'b mut B, B::Error> {
    if let Value::Object(entries) = filter {
        apply_entries(builder, entries)?;
    } else {
        trace!("Filter is not an object, nothing to apply");
    }
    Ok(builder)
}

fn apply_entries<B: FilterBuilder>(
    builder: &mut B,
    entries: &Map<String, Value>,
) -> Result<(), B::Error> {
    for (key, value) in entries {
        match Key::parse(key) {
            Key::Group(group) => {
                trace!(key = %key, "Applying boolean group");
                let method = group.method::<B>();
                method(builder, &mut |scope: &mut B::Scope| {
                    apply_filter(scope, value).map(|_| ())
                })?;
            }
            Key::Leaf(leaf) => apply_leaf(builder, leaf, value)?,
            Key::Malformed => {
                debug!(key = %key, "Skipping filter key with unexpected segment count");
            }
        }
    }
    Ok(())
}

fn apply_leaf<B: FilterBuilder>(
    builder: &mut B,
    leaf: Leaf<'_>,
    value: &Value,
) -> Result<(), B::Error> {
    let Leaf {
        combinator,
        column,
        operator,
    } = leaf;

    match Resolved::resolve(operator, value) {
        Resolved::Null(check) => {
            trace!(column, ?check, %combinator, "Applying null check");
            check.method::<B>(combinator)(builder, column)
        }
        Resolved::Range { op, negated } => {
            trace!(column, ?op, negated, %combinator, "Applying range predicate");
            op.method::<B>(combinator, negated)(builder, column, value)
        }
        Resolved::Comparison {
            comparator,
            negated,
        } => {
            trace!(column, comparator, negated, %combinator, "Applying comparison");
            comparison_method::<B>(combinator, negated)(builder, column, comparator, value)
        }
    }
}
