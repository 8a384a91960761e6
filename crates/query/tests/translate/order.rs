//! Order strings rendered as ORDER BY

use predicate::{OrderDirection, Translator, TranslatorConfig, apply_order};
use query::error::QueryError;

use crate::{render, users};

fn order_sql(specs: &[&str]) -> String {
    let mut builder = users();
    apply_order(&mut builder, specs).unwrap();
    render(&builder).0
}

#[test]
fn test_sign_prefixes() {
    assert_eq!(
        order_sql(&["+a", "-b"]),
        r#"SELECT * FROM "users" ORDER BY "a" ASC, "b" DESC"#
    );
}

#[test]
fn test_direction_suffixes() {
    assert_eq!(
        order_sql(&["hello__asc", "hey__DESC", "name"]),
        r#"SELECT * FROM "users" ORDER BY "hello" ASC, "hey" DESC, "name" ASC"#
    );
}

#[test]
fn test_unknown_suffix_is_skipped() {
    assert_eq!(
        order_sql(&["a__sideways", "id"]),
        r#"SELECT * FROM "users" ORDER BY "id" ASC"#
    );
}

#[test]
fn test_no_order() {
    assert_eq!(order_sql(&[]), r#"SELECT * FROM "users""#);
}

#[test]
fn test_configured_default_direction() {
    let translator = Translator::new(TranslatorConfig {
        default_direction: OrderDirection::Desc,
        ..TranslatorConfig::default()
    });
    let mut builder = users();
    translator.order(&mut builder, ["created_at", "+id"]).unwrap();

    assert_eq!(
        render(&builder).0,
        r#"SELECT * FROM "users" ORDER BY "created_at" DESC, "id" ASC"#
    );
}

#[test]
fn test_empty_column_is_rejected() {
    let mut builder = users();
    let err = apply_order(&mut builder, ["-"]).unwrap_err();
    assert_eq!(err, QueryError::EmptyColumn(String::new()));
}
