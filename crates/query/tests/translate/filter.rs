//! Filter documents rendered as WHERE clauses

use predicate::apply_filter;
use query::{dialect::MySql, error::QueryError};
use serde_json::{Value, json};

use crate::{render, users};

fn where_sql(filter: Value) -> (String, Vec<Value>) {
    let mut builder = users();
    apply_filter(&mut builder, &filter).unwrap();
    render(&builder)
}

fn filter_error(filter: Value) -> QueryError {
    let mut builder = users();
    apply_filter(&mut builder, &filter).unwrap_err()
}

#[test]
fn test_leaf_keys_are_conjoined() {
    let (sql, params) = where_sql(json!({ "name__eq": "Hello", "age__gt": 25 }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "name" = $1 AND "age" > $2"#
    );
    assert_eq!(params, vec![json!("Hello"), json!(25)]);
}

#[test]
fn test_or_prefix_disjoins() {
    let (sql, _) = where_sql(json!({ "status__eq": "active", "or__role__eq": "admin" }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "status" = $1 OR "role" = $2"#
    );
}

#[test]
fn test_unknown_prefix_conjoins() {
    let (sql, _) = where_sql(json!({ "a__eq": 1, "xor__b__eq": 2, "and__c__eq": 3 }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "a" = $1 AND "b" = $2 AND "c" = $3"#
    );
}

#[test]
fn test_nested_or_group() {
    let (sql, params) = where_sql(json!({
        "status__eq": "active",
        "or": { "role__eq": "admin", "age__gte": 18 }
    }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "status" = $1 OR ("role" = $2 AND "age" >= $3)"#
    );
    assert_eq!(params, vec![json!("active"), json!("admin"), json!(18)]);
}

#[test]
fn test_deeply_nested_groups() {
    let (sql, _) = where_sql(json!({
        "a__eq": 1,
        "and": {
            "b__eq": 2,
            "or": { "c__lt": 3, "not": { "d__eq": 4 } }
        }
    }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "a" = $1 AND ("b" = $2 OR ("c" < $3 AND NOT ("d" = $4)))"#
    );
}

#[test]
fn test_negated_groups() {
    let (sql, _) = where_sql(json!({ "not": { "a__eq": 1, "or__b__eq": 2 } }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE NOT ("a" = $1 OR "b" = $2)"#
    );

    let (sql, _) = where_sql(json!({
        "a__eq": 1,
        "or_not": { "b__eq": 2 },
        "and_not": { "c__eq": 3 }
    }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "a" = $1 OR NOT ("b" = $2) AND NOT ("c" = $3)"#
    );
}

#[test]
fn test_empty_group_adds_nothing() {
    let (sql, params) = where_sql(json!({ "or": {}, "not": 5 }));
    assert_eq!(sql, r#"SELECT * FROM "users""#);
    assert!(params.is_empty());
}

#[test]
fn test_null_values_become_null_checks() {
    let (sql, params) = where_sql(json!({
        "deleted_at__eq": null,
        "or__archived_at__not_eq": null,
        "parent_id__is_not": null,
        "owner_id__ne": null
    }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "deleted_at" IS NULL OR "archived_at" IS NOT NULL AND "parent_id" IS NOT NULL AND "owner_id" IS NOT NULL"#
    );
    assert!(params.is_empty());
}

#[test]
fn test_in_and_between() {
    let (sql, params) = where_sql(json!({
        "id__in": [1, 2, 3],
        "age__not_btw": [18, 65],
        "or__tag__not_in": ["x"],
        "or__score__btw": [0.5, 1.5]
    }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "id" IN ($1, $2, $3) AND "age" NOT BETWEEN $4 AND $5 OR "tag" NOT IN ($6) OR "score" BETWEEN $7 AND $8"#
    );
    assert_eq!(params.len(), 8);
    assert_eq!(params[5], json!("x"));
}

#[test]
fn test_empty_in_list() {
    let (sql, params) = where_sql(json!({ "id__in": [], "or__id__not_in": [] }));
    assert_eq!(sql, r#"SELECT * FROM "users" WHERE 1 = 0 OR 1 = 1"#);
    assert!(params.is_empty());
}

#[test]
fn test_not_eq_differs_from_ne() {
    let (sql, _) = where_sql(json!({ "a__not_eq": 1, "b__ne": 2 }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE NOT "a" = $1 AND "b" <> $2"#
    );
}

#[test]
fn test_raw_comparators_pass_through() {
    let filter = json!({ "name__like": "%jo%", "email__ilike": "%@example.com", "code__re": "^A" });

    let (sql, _) = where_sql(filter.clone());
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "name" LIKE $1 AND "email" ILIKE $2 AND "code" ~ $3"#
    );

    let mut builder = users();
    apply_filter(&mut builder, &filter).unwrap();
    let (sql, _) = builder.to_sql(&MySql);
    assert_eq!(
        sql,
        "SELECT * FROM `users` WHERE `name` LIKE ? AND `email` LIKE ? AND `code` REGEXP ?"
    );
}

#[test]
fn test_boolean_test_is_inlined() {
    let (sql, params) = where_sql(json!({ "active__is": true, "banned__not_is": false }));
    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE "active" IS TRUE AND NOT "banned" IS FALSE"#
    );
    assert!(params.is_empty());
}

#[test]
fn test_qualified_column() {
    let (sql, _) = where_sql(json!({ "u.id__eq": 5 }));
    assert_eq!(sql, r#"SELECT * FROM "users" WHERE "u"."id" = $1"#);
}

#[test]
fn test_malformed_keys_are_skipped() {
    let (sql, params) = where_sql(json!({
        "status": "active",
        "a__b__c__d": 1,
        "id__eq": 7
    }));
    assert_eq!(sql, r#"SELECT * FROM "users" WHERE "id" = $1"#);
    assert_eq!(params, vec![json!(7)]);
}

#[test]
fn test_non_object_filter_is_ignored() {
    for filter in [json!(null), json!([1, 2]), json!("id__eq")] {
        let (sql, params) = where_sql(filter);
        assert_eq!(sql, r#"SELECT * FROM "users""#);
        assert!(params.is_empty());
    }
}

#[test]
fn test_builder_errors_propagate() {
    assert_eq!(
        filter_error(json!({ "name__sounds_like": "x" })),
        QueryError::UnsupportedComparator("sounds_like".to_string())
    );
    assert_eq!(
        filter_error(json!({ "id__in": 5 })),
        QueryError::ExpectedList("id".to_string())
    );
    assert_eq!(
        filter_error(json!({ "age__btw": [1] })),
        QueryError::InvalidRange("age".to_string())
    );
    assert_eq!(
        filter_error(json!({ "a__eq": 1, "or": { "x__in": "y" } })),
        QueryError::ExpectedList("x".to_string())
    );
    assert!(matches!(
        filter_error(json!({ "tags__eq": ["a"] })),
        QueryError::UnsupportedValue { .. }
    ));
}

#[test]
fn test_error_stops_translation() {
    let mut builder = users();
    let filter = json!({ "a__eq": 1, "b__in": 2, "c__eq": 3 });
    assert!(apply_filter(&mut builder, &filter).is_err());
    assert_eq!(builder.ast().where_clause.len(), 1);
}
