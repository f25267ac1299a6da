//! Integration tests for dynamic `serde_json::Value` sources and destinations.

#![cfg(feature = "json")]

use collection_utils::{
    filter, for_each, group_by, is_associative, map, sort_json_by, store_with, zip,
    CollectionError, MergePolicy, ProcessOptions, Shape, Source,
};
use serde_json::{json, Value};

fn users() -> Value {
    json!([
        {"name": "John", "surname": "Connor", "age": 10, "male": true},
        {"name": "Sarah", "surname": "Connor", "age": 43, "male": false},
        {"name": "Kyle", "surname": "Risk", "age": 43, "male": true}
    ])
}

fn users_by_name() -> Value {
    json!({
        "John": {"surname": "Connor", "male": true},
        "Sarah": {"surname": "Connor", "male": false},
        "Kyle": {"surname": "Risk", "male": true}
    })
}

fn field<'v>(value: &'v Value, name: &str) -> Result<&'v Value, collection_utils::BoxError> {
    value
        .get(name)
        .ok_or_else(|| format!("missing field '{}'", name).into())
}

#[test]
fn test_shape_inspection() {
    assert_eq!(Shape::of_value(&users()).unwrap(), Shape::Sequence);
    assert!(is_associative(&users_by_name()).unwrap());

    let err = is_associative(&json!("John")).unwrap_err();
    assert!(matches!(err, CollectionError::ShapeViolation { .. }));
}

#[test]
fn test_scalar_source_is_rejected_at_the_boundary() {
    let err = Source::from_json(&json!(42)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shape violation: expected a sequence or an associative container, found number"
    );
}

#[test]
fn test_map_array_into_array() {
    let users = users();
    let mut names = json!([]);
    map(
        |user: &Value| {
            let name = field(user, "name")?.as_str().unwrap_or_default();
            let surname = field(user, "surname")?.as_str().unwrap_or_default();
            Ok(json!(format!("{} {}", name, surname)))
        },
        Source::from_json(&users).unwrap(),
        &mut names,
    )
    .unwrap();

    assert_eq!(names, json!(["John Connor", "Sarah Connor", "Kyle Risk"]));
}

#[test]
fn test_map_object_into_object() {
    let users = users_by_name();
    let mut surnames = json!({});
    map(
        |entry: &Value| {
            let key = field(entry, "key")?;
            let surname = field(field(entry, "value")?, "surname")?;
            Ok(json!({"key": key, "value": surname}))
        },
        Source::from_json(&users).unwrap(),
        &mut surnames,
    )
    .unwrap();

    assert_eq!(
        surnames,
        json!({"John": "Connor", "Sarah": "Connor", "Kyle": "Risk"})
    );
}

#[test]
fn test_map_non_pair_into_object_is_reported() {
    let users = users();
    let mut dest = json!({});
    let report = map(
        |user: &Value| Ok(field(user, "name")?.clone()),
        Source::from_json(&users).unwrap(),
        &mut dest,
    )
    .unwrap_err();

    assert_eq!(report.index(), Some(0));
    assert!(matches!(report.error(), CollectionError::ShapeViolation { .. }));
    assert_eq!(dest, json!({}));
}

#[test]
fn test_filter_object_into_array() {
    let users = users_by_name();
    let mut males = json!([]);
    filter(
        |entry: &Value| Ok(entry["value"]["male"] == json!(true)),
        Source::from_json(&users).unwrap(),
        &mut males,
    )
    .unwrap();

    let mut names: Vec<&str> = males
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["key"].as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["John", "Kyle"]);
}

#[test]
fn test_group_by_into_object() {
    let users = users();
    let mut groups = json!({});
    group_by(
        |user: &Value| {
            let male = field(user, "male")?.as_bool().ok_or("male must be a bool")?;
            Ok(if male { "male" } else { "female" }.to_string())
        },
        Source::from_json(&users).unwrap(),
        &mut groups,
    )
    .unwrap();

    assert_eq!(groups["male"].as_array().unwrap().len(), 2);
    assert_eq!(groups["male"][0]["name"], "John");
    assert_eq!(groups["male"][1]["name"], "Kyle");
    assert_eq!(groups["female"][0]["name"], "Sarah");
}

#[test]
fn test_group_by_missing_field_reports_item() {
    let people = json!([{"name": "John", "age": 10}, {"name": "Nobody"}]);
    let mut groups = json!({});
    let report = group_by(
        |person: &Value| Ok(field(person, "age")?.to_string()),
        Source::from_json(&people).unwrap(),
        &mut groups,
    )
    .unwrap_err();

    assert_eq!(report.index(), Some(1));
    assert_eq!(report.item(), Some(&json!({"name": "Nobody"})));
    assert_eq!(report.error().to_string(), "Callback error: missing field 'age'");
    assert_eq!(groups, json!({"10": [{"name": "John", "age": 10}]}));
}

#[test]
fn test_for_each_counts_entries() {
    let users = users_by_name();
    let mut count = 0;
    for_each(
        |_, _: &Value| {
            count += 1;
            Ok(())
        },
        Source::from_json(&users).unwrap(),
    )
    .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn test_zip_into_object() {
    let mut dest = serde_json::Map::new();
    zip(
        &["a".to_string(), "b".to_string()],
        &[json!(1), json!([2])],
        &mut dest,
    )
    .unwrap();
    assert_eq!(Value::Object(dest), json!({"a": 1, "b": [2]}));
}

#[test]
fn test_explicit_merge_policies() {
    let mut dest = json!({"male": ["John"]});

    store_with(
        MergePolicy::AppendGroup,
        &mut dest,
        json!({"key": "male", "value": ["Kyle"]}),
    )
    .unwrap();
    assert_eq!(dest, json!({"male": ["John", "Kyle"]}));

    store_with(
        MergePolicy::Upsert,
        &mut dest,
        json!({"key": "male", "value": ["Kyle"]}),
    )
    .unwrap();
    assert_eq!(dest, json!({"male": ["Kyle"]}));
}

#[test]
fn test_sort_json() {
    let mut users = users();
    sort_json_by(
        |a, b| a["name"].as_str().cmp(&b["name"].as_str()),
        &mut users,
    )
    .unwrap();
    assert_eq!(users[0]["name"], "John");
    assert_eq!(users[1]["name"], "Kyle");
    assert_eq!(users[2]["name"], "Sarah");

    let mut object = users_by_name();
    let before = object.clone();
    assert!(sort_json_by(|_, _| 0, &mut object).is_err());
    assert_eq!(object, before);
}

#[test]
fn test_options_from_json() {
    let options = ProcessOptions::from_json(r#"{"catch_panics": false}"#).unwrap();
    assert!(!options.catch_panics);
    assert!(options.fault_policy.is_fail_fast());
}
