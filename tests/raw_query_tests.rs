use dynaquery::{Body, EnvelopeError, PairValue, RawQuery, raw_query};
use serde_json::json;

fn as_body(value: serde_json::Value) -> Body {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_pair_view_matches_fields() -> anyhow::Result<()> {
    let mut query = raw_query!("Query", {"TableName": "Users", "Limit": 10});

    assert_eq!(query.get(0)?, PairValue::Operation("Query"));
    assert_eq!(query.get(1)?.as_body(), Some(query.body()));

    query.finalize();
    let body_after_first = query.body().clone();
    query.finalize();

    assert_eq!(query.get(0)?.as_operation(), Some("Query"));
    assert_eq!(query.get(1)?.as_body(), Some(&body_after_first));
    Ok(())
}

#[test]
fn test_count_ignores_body_size() {
    assert_eq!(RawQuery::new("Scan", Body::new()).len(), 2);
    assert_eq!(
        raw_query!("Scan", {"a": 1, "b": 2, "c": 3, "d": 4}).len(),
        2
    );
}

#[test]
fn test_finalize_keeps_booleans_and_numbers() {
    let mut query = raw_query!("Scan", {
        "a": false, "b": 0, "c": "", "d": [], "e": null, "f": "x", "g": {"k": 1}
    });
    query.finalize();

    assert_eq!(
        query.body(),
        &as_body(json!({"a": false, "b": 0, "f": "x", "g": {"k": 1}}))
    );
    let keys: Vec<_> = query.body().keys().cloned().collect();
    assert_eq!(keys, ["a", "b", "f", "g"]);
}

#[test]
fn test_out_of_range_access() {
    let mut query = raw_query!("Scan", {"TableName": "Foo"});

    assert!(query.get(0).is_ok());
    assert!(query.get(1).is_ok());
    assert!(matches!(query.get(2), Err(EnvelopeError::OutOfRange { .. })));
    assert!(matches!(
        query.set(2, "Query"),
        Err(EnvelopeError::OutOfRange { .. })
    ));
    assert!(matches!(
        query.set(2, Body::new()),
        Err(EnvelopeError::OutOfRange { .. })
    ));
}

#[test]
fn test_iteration_yields_pair_in_order() {
    let query = raw_query!("Scan", {"TableName": "Foo"});
    let expected = vec![(0, json!("Scan")), (1, json!({"TableName": "Foo"}))];

    for _ in 0..2 {
        let entries: Vec<_> = query.iter().map(|(i, v)| (i, v.to_json())).collect();
        assert_eq!(entries, expected);
    }

    let mut seen = 0;
    for (index, value) in &query {
        assert_eq!(value.slot().index(), index);
        seen += 1;
    }
    assert_eq!(seen, query.len());
}

#[test]
fn test_legacy_list_callers() -> anyhow::Result<()> {
    let legacy = json!([
        "PutItem",
        {"TableName": "Foo", "Item": {"id": {"S": "1"}}, "ConditionExpression": ""}
    ]);
    let mut query: RawQuery = serde_json::from_value(legacy)?;

    query.finalize();
    let written = serde_json::to_value(&query)?;

    assert_eq!(
        written,
        json!(["PutItem", {"TableName": "Foo", "Item": {"id": {"S": "1"}}}])
    );
    assert_eq!(written[0], query.get(0)?.to_json());
    assert_eq!(written[1], query.get(1)?.to_json());
    Ok(())
}

#[test]
fn test_keyed_write_then_remove() -> anyhow::Result<()> {
    let mut query = raw_query!("Scan", {"TableName": "Foo"});

    query.set(0, "Query")?;
    query.set(1, as_body(json!({"TableName": "Bar", "Limit": 0})))?;
    assert_eq!(query.operation(), "Query");
    assert_eq!(query.body()["Limit"], json!(0));

    query.remove(0);
    query.remove(1);
    assert_eq!(query, RawQuery::default());
    assert_eq!(query.len(), 2);
    Ok(())
}
