use select::{FromState, SelectBuilder};
use where_clause::WhereBuilder;

pub mod select;
pub mod where_clause;

impl_filter_builder!(WhereBuilder => clause);
impl_filter_builder!(SelectBuilder<FromState> => ast.where_clause);
