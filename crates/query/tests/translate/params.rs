//! Whole query documents applied through `QueryParams`

use predicate::{QueryParams, Translator, TranslatorConfig};
use query::dialect::MySql;
use serde_json::json;

use crate::{render, users};

#[test]
fn test_full_document() {
    let params = QueryParams::from_json(
        r#"{
            "filter": {
                "status__eq": "active",
                "or": { "role__in": ["admin", "owner"], "age__gte": 21 }
            },
            "order": ["-created_at", "id"],
            "page": 3,
            "page_size": 20
        }"#,
    )
    .unwrap();

    let mut builder = users();
    params.apply(&mut builder, &Translator::default()).unwrap();
    let (sql, values) = builder.to_sql(&MySql);

    assert_eq!(
        sql,
        "SELECT * FROM `users` WHERE `status` = ? OR (`role` IN (?, ?) AND `age` >= ?) ORDER BY `created_at` DESC, `id` ASC LIMIT ? OFFSET ?"
    );
    assert_eq!(
        values,
        vec![
            json!("active"),
            json!("admin"),
            json!("owner"),
            json!(21),
            json!(20),
            json!(40)
        ]
    );
}

#[test]
fn test_document_without_window_is_unbounded() {
    let params = QueryParams::from_json(r#"{ "filter": { "id__gt": 100 }, "order": "-id" }"#)
        .unwrap();

    let mut builder = users();
    params.apply(&mut builder, &Translator::default()).unwrap();

    assert_eq!(
        render(&builder).0,
        r#"SELECT * FROM "users" WHERE "id" > $1 ORDER BY "id" DESC"#
    );
}

#[test]
fn test_env_overrides_apply() {
    let config = TranslatorConfig::default()
        .overridden_by(|key| match key {
            "PREDICATE_DEFAULT_PAGE_SIZE" => Some("5".to_string()),
            "PREDICATE_DEFAULT_DIRECTION" => Some("desc".to_string()),
            _ => None,
        })
        .unwrap();
    let params = QueryParams::from_json(r#"{ "order": ["name"], "page": 2 }"#).unwrap();

    let mut builder = users();
    params.apply(&mut builder, &Translator::new(config)).unwrap();
    let (sql, values) = render(&builder);

    assert_eq!(
        sql,
        r#"SELECT * FROM "users" ORDER BY "name" DESC LIMIT $1 OFFSET $2"#
    );
    assert_eq!(values, vec![json!(5), json!(5)]);
}

#[test]
fn test_builder_error_is_returned() {
    let params = QueryParams::from_json(r#"{ "filter": { "id__btw": 3 } }"#).unwrap();
    let mut builder = users();
    assert!(params.apply(&mut builder, &Translator::default()).is_err());
}
