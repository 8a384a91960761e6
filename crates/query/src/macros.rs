#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::ast::common::TableRef {
            schema: None,
            name: $name.to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::ast::common::TableRef {
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
}

#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident {
            qualifier: None,
            name: $name.to_string(),
        })
    };
    ($qualifier:expr, $name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        })
    };
}

/// Implements `predicate::FilterBuilder` for a type by forwarding every
/// method to the `WhereClause` found at the given field path.
///
/// `impl_filter_builder!(SelectBuilder<FromState> => ast.where_clause);`
macro_rules! impl_filter_builder {
    ($target:ty => $($clause:ident).+) => {
        impl ::predicate::Builder for $target {
            type Error = $crate::error::QueryError;
        }

        impl ::predicate::FilterBuilder for $target {
            type Scope = $crate::builder::where_clause::WhereBuilder;

            impl_filter_builder!(@compare [$($clause).+] and_where, And, false);
            impl_filter_builder!(@compare [$($clause).+] or_where, Or, false);
            impl_filter_builder!(@compare [$($clause).+] and_where_not, And, true);
            impl_filter_builder!(@compare [$($clause).+] or_where_not, Or, true);

            impl_filter_builder!(@group [$($clause).+] and_where_group, And, false);
            impl_filter_builder!(@group [$($clause).+] or_where_group, Or, false);
            impl_filter_builder!(@group [$($clause).+] and_where_not_group, And, true);
            impl_filter_builder!(@group [$($clause).+] or_where_not_group, Or, true);

            impl_filter_builder!(@values [$($clause).+] add_in_list, and_where_in, And, false);
            impl_filter_builder!(@values [$($clause).+] add_in_list, or_where_in, Or, false);
            impl_filter_builder!(@values [$($clause).+] add_in_list, and_where_not_in, And, true);
            impl_filter_builder!(@values [$($clause).+] add_in_list, or_where_not_in, Or, true);

            impl_filter_builder!(@values [$($clause).+] add_between, and_where_between, And, false);
            impl_filter_builder!(@values [$($clause).+] add_between, or_where_between, Or, false);
            impl_filter_builder!(@values [$($clause).+] add_between, and_where_not_between, And, true);
            impl_filter_builder!(@values [$($clause).+] add_between, or_where_not_between, Or, true);

            impl_filter_builder!(@null [$($clause).+] and_where_null, And, false);
            impl_filter_builder!(@null [$($clause).+] or_where_null, Or, false);
            impl_filter_builder!(@null [$($clause).+] and_where_not_null, And, true);
            impl_filter_builder!(@null [$($clause).+] or_where_not_null, Or, true);
        }
    };

    (@compare [$($clause:ident).+] $method:ident, $conjunction:ident, $negated:literal) => {
        fn $method(
            &mut self,
            column: &str,
            comparator: &str,
            value: &::serde_json::Value,
        ) -> Result<(), $crate::error::QueryError> {
            self.$($clause).+.add_comparison(
                $crate::ast::condition::Conjunction::$conjunction,
                $negated,
                column,
                comparator,
                value,
            )
        }
    };

    (@group [$($clause:ident).+] $method:ident, $conjunction:ident, $negated:literal) => {
        fn $method(
            &mut self,
            scope: &mut ::predicate::ScopeFn<'_, $crate::builder::where_clause::WhereBuilder>,
        ) -> Result<(), $crate::error::QueryError> {
            self.$($clause).+.add_group(
                $crate::ast::condition::Conjunction::$conjunction,
                $negated,
                scope,
            )
        }
    };

    (@values [$($clause:ident).+] $add:ident, $method:ident, $conjunction:ident, $negated:literal) => {
        fn $method(
            &mut self,
            column: &str,
            values: &::serde_json::Value,
        ) -> Result<(), $crate::error::QueryError> {
            self.$($clause).+.$add(
                $crate::ast::condition::Conjunction::$conjunction,
                $negated,
                column,
                values,
            )
        }
    };

    (@null [$($clause:ident).+] $method:ident, $conjunction:ident, $negated:literal) => {
        fn $method(&mut self, column: &str) -> Result<(), $crate::error::QueryError> {
            self.$($clause).+.add_null_check(
                $crate::ast::condition::Conjunction::$conjunction,
                $negated,
                column,
            )
        }
    };
}
