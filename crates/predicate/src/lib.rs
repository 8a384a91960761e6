//! Declarative filtering, ordering and pagination for query builders.
//!
//! Filters are plain JSON objects whose keys encode the column, the
//! operator and how the predicate joins its siblings:
//!
//! ```text
//! {
//!     "status__eq": "active",
//!     "or__score__gte": 90,
//!     "not": { "deleted_at__ne": null }
//! }
//! ```
//!
//! The translators replay such input as calls on any type implementing the
//! traits in [`builder`].

use serde_json::Value;

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod key;
pub mod operator;
pub mod order;
pub mod paginate;
pub mod params;
pub mod translator;

#[cfg(test)]
mod testing;

pub use builder::{Builder, FilterBuilder, OrderBuilder, PaginationBuilder, QueryBuilder, ScopeFn};
pub use config::{OffsetPolicy, TranslatorConfig};
pub use error::ConfigError;
pub use key::Combinator;
pub use order::OrderDirection;
pub use params::QueryParams;
pub use translator::Translator;

/// Applies a filter specification. See [`filter::apply_filter`].
pub fn apply_filter<'b, B: FilterBuilder>(
    builder: &'b mut B,
    spec: &Value,
) -> Result<&'b mut B, B::Error> {
    filter::apply_filter(builder, spec)
}

/// Applies order strings using the default configuration.
pub fn apply_order<'b, B, I, S>(builder: &'b mut B, specs: I) -> Result<&'b mut B, B::Error>
where
    B: OrderBuilder,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Translator::default().order(builder, specs)
}

/// Applies pagination using the default configuration.
pub fn apply_pagination<B: PaginationBuilder>(
    builder: &mut B,
    page: Option<i64>,
    page_size: Option<u64>,
) -> Result<&mut B, B::Error> {
    Translator::default().paginate(builder, page, page_size)
}
