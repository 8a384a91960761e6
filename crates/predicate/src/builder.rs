//! The capability set a query builder must expose to be driven by the
//! translators.
//!
//! Every method registers one piece of state on the builder and reports
//! failure through the builder's own error type. The translators never
//! inspect or wrap these errors, they are returned to the caller as-is.

use serde_json::Value;

use crate::order::OrderDirection;

/// Shared error type for all builder capabilities.
pub trait Builder {
    type Error;
}

/// Callback handed to the grouping methods. It receives the fresh scoped
/// builder whose predicates end up parenthesized as one condition.
pub type ScopeFn<'a, S> = dyn FnMut(&mut S) -> Result<(), <S as Builder>::Error> + 'a;

/// Predicate registration.
///
/// The `and_*` methods conjoin the new predicate with the ones already
/// registered at the same nesting level, the `or_*` methods disjoin it.
pub trait FilterBuilder: Builder {
    /// The builder handed to group callbacks.
    type Scope: FilterBuilder<Error = Self::Error>;

    /// `column <comparator> value`
    fn and_where(&mut self, column: &str, comparator: &str, value: &Value)
    -> Result<(), Self::Error>;
    fn or_where(&mut self, column: &str, comparator: &str, value: &Value)
    -> Result<(), Self::Error>;

    /// `NOT column <comparator> value`
    fn and_where_not(
        &mut self,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), Self::Error>;
    fn or_where_not(
        &mut self,
        column: &str,
        comparator: &str,
        value: &Value,
    ) -> Result<(), Self::Error>;

    /// `( ... )`
    fn and_where_group(&mut self, scope: &mut ScopeFn<'_, Self::Scope>)
    -> Result<(), Self::Error>;
    fn or_where_group(&mut self, scope: &mut ScopeFn<'_, Self::Scope>)
    -> Result<(), Self::Error>;

    /// `NOT ( ... )`
    fn and_where_not_group(
        &mut self,
        scope: &mut ScopeFn<'_, Self::Scope>,
    ) -> Result<(), Self::Error>;
    fn or_where_not_group(
        &mut self,
        scope: &mut ScopeFn<'_, Self::Scope>,
    ) -> Result<(), Self::Error>;

    /// `column IN (...)`. The value is expected to be a list.
    fn and_where_in(&mut self, column: &str, values: &Value) -> Result<(), Self::Error>;
    fn or_where_in(&mut self, column: &str, values: &Value) -> Result<(), Self::Error>;
    fn and_where_not_in(&mut self, column: &str, values: &Value) -> Result<(), Self::Error>;
    fn or_where_not_in(&mut self, column: &str, values: &Value) -> Result<(), Self::Error>;

    /// `column BETWEEN lower AND upper`. The value is expected to be a
    /// two-element list.
    fn and_where_between(&mut self, column: &str, range: &Value) -> Result<(), Self::Error>;
    fn or_where_between(&mut self, column: &str, range: &Value) -> Result<(), Self::Error>;
    fn and_where_not_between(&mut self, column: &str, range: &Value)
    -> Result<(), Self::Error>;
    fn or_where_not_between(&mut self, column: &str, range: &Value) -> Result<(), Self::Error>;

    /// `column IS NULL` / `column IS NOT NULL`
    fn and_where_null(&mut self, column: &str) -> Result<(), Self::Error>;
    fn or_where_null(&mut self, column: &str) -> Result<(), Self::Error>;
    fn and_where_not_null(&mut self, column: &str) -> Result<(), Self::Error>;
    fn or_where_not_null(&mut self, column: &str) -> Result<(), Self::Error>;
}

/// Ordering registration. Repeated calls add secondary sort keys.
pub trait OrderBuilder: Builder {
    fn order_by(&mut self, column: &str, direction: OrderDirection) -> Result<(), Self::Error>;
}

/// Result window registration.
pub trait PaginationBuilder: Builder {
    fn limit(&mut self, limit: u64) -> Result<(), Self::Error>;
    fn offset(&mut self, offset: u64) -> Result<(), Self::Error>;
}

/// A builder exposing the full capability set.
pub trait QueryBuilder: FilterBuilder + OrderBuilder + PaginationBuilder {}

impl<T> QueryBuilder for T where T: FilterBuilder + OrderBuilder + PaginationBuilder {}
