use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_default_is_empty_object() {
    let value = Value::default();
    assert!(value.is_object());
    assert!(value.is_empty());
    assert!(!value.is_falsy());
}

#[test]
fn test_falsy() {
    assert!(Value::False.is_falsy());
    assert!(Value::list().is_falsy());

    assert!(!Value::True.is_falsy());
    assert!(!Value::object().is_falsy());
    assert!(!Value::string("").is_falsy());
    assert!(!Value::from(vec![Value::False]).is_falsy());
}

#[test]
fn test_set_and_get() {
    let mut value = Value::object();
    assert_eq!(value.set("name", "stache"), Ok(()));
    assert_eq!(value.get("name").and_then(Value::as_str), Some("stache"));
    assert_eq!(value.get("missing"), None);

    value.set("name", true).unwrap();
    assert_eq!(value.get("name"), Some(&Value::True));
}

#[test]
fn test_set_on_non_object() {
    let mut value = Value::string("x");
    assert_eq!(
        value.set("name", "y"),
        Err(ValueError::InvalidAccess {
            expected: ValueKind::Object,
            found: ValueKind::String,
        })
    );
    assert_eq!(value, Value::string("x"));
}

#[test]
fn test_exists_reports_presence() {
    let value = Value::object().with("a", Value::False);
    assert!(value.exists("a"));
    assert!(!value.exists("b"));
    assert!(!Value::list().exists("a"));
}

#[test]
fn test_get_on_non_object() {
    assert_eq!(Value::True.get("a"), None);
    assert_eq!(Value::list().get("a"), None);
}

#[test]
fn test_push_and_index() {
    let mut list = Value::list();
    list.push("a").unwrap();
    list.push(Value::object().with("n", "1")).unwrap();

    assert_eq!(list.len(), 2);
    assert!(list.is_non_empty_list());
    assert_eq!(list.get_index(0).and_then(Value::as_str), Some("a"));
    assert!(list.get_index(1).is_some_and(Value::is_object));
    assert_eq!(list.get_index(2), None);
}

#[test]
fn test_push_on_non_list() {
    let mut value = Value::False;
    let err = value.push("a").unwrap_err();
    assert_eq!(err.to_string(), "invalid access: expected list, found false");
}

#[test]
fn test_deep_copy_on_insert() {
    let mut inner = Value::object().with("x", "before");
    let outer = Value::object().with("inner", inner.clone());

    inner.set("x", "after").unwrap();

    let copied = outer.get("inner").and_then(|v| v.get("x"));
    assert_eq!(copied.and_then(Value::as_str), Some("before"));
}

#[test]
fn test_collect() {
    let list: Value = ["a", "b"].into_iter().map(Value::from).collect();
    assert_eq!(list.len(), 2);

    let object: Value = [("k", Value::True)].into_iter().collect();
    assert!(object.exists("k"));
}

#[test]
fn test_kind_names() {
    assert_eq!(Value::object().kind().name(), "object");
    assert_eq!(Value::string("s").kind().to_string(), "string");
    assert_eq!(Value::from(false).kind(), ValueKind::False);
    assert_eq!(Value::from(true).kind(), ValueKind::True);
}
