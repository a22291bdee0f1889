//! Tests for Value conversions, comparisons, and rendering

use nested::{KeyPath, Nested, Value, path, split_path};

#[test]
fn test_value_from_primitives() {
    let cases: Vec<(Value, Value)> = vec![
        (Value::from(true), Value::Bool(true)),
        (Value::from(42i64), Value::Int(42)),
        (Value::from(42i32), Value::Int(42)),
        (Value::from(42u32), Value::Int(42)),
        (Value::from("text"), Value::Text("text".to_string())),
        (Value::from("owned".to_string()), Value::Text("owned".to_string())),
        (Value::from(()), Value::Null),
        (
            Value::from(vec!["a", "b"]),
            Value::List(vec![Value::from("a"), Value::from("b")]),
        ),
        (Value::from(Nested::new()), Value::Nested(Nested::new())),
    ];

    for (converted, expected) in cases {
        assert_eq!(converted, expected);
    }
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn test_value_compares_with_primitives() {
    let text = Value::from("hello");
    let number = Value::from(42);
    let flag = Value::from(false);

    assert_eq!(text, "hello");
    assert_eq!(text, "hello".to_string());
    assert_eq!(number, 42i64);
    assert_eq!(flag, false);
    assert!("hello" == text);
    assert!(42i64 == number);

    assert_ne!(text, 42);
    assert_ne!(number, "42");
    assert_ne!(Value::Null, false);
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::from("x").as_text(), Some("x"));
    assert_eq!(Value::from(vec![1]).as_list(), Some(&[Value::Int(1)][..]));

    assert_eq!(Value::from("3").as_int(), None);
    assert_eq!(Value::Int(1).as_bool(), None);
    assert!(Value::Int(1).as_nested().is_none());
    assert!(Value::Null.is_null());
}

#[test]
fn test_value_display() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::Null, "null"),
        (Value::Bool(true), "true"),
        (Value::Int(-7), "-7"),
        (Value::from("plain"), "plain"),
        (Value::from(vec![1, 2, 3]), "[1, 2, 3]"),
        (Value::List(Vec::new()), "[]"),
        (Value::from(Nested::new()), "{}"),
    ];

    for (value, expected) in cases {
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn test_nested_display_is_sorted() {
    let nested = Nested::new()
        .with("z", vec![true])
        .with("a", Nested::new().with("y", 2).with("x", 1))
        .with("m", ());

    assert_eq!(nested.to_string(), "{a: {x: 1, y: 2}, m: null, z: [true]}");
}

#[test]
fn test_nested_collect_and_extend() {
    let mut nested: Nested = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(nested.len(), 2);

    nested.extend([("c", "three")]);
    nested.extend(vec![("a".to_string(), Value::Null)]);

    assert_eq!(nested.to_string(), "{a: null, b: 2, c: three}");

    nested.clear();
    assert!(nested.is_empty());
}

#[test]
fn test_paths_are_interchangeable() {
    let mut nested = Nested::new();
    nested.set(&["a", "b"], 1).unwrap();

    let from_str: KeyPath = "a.b".parse().unwrap();
    let paths: Vec<KeyPath> = vec![
        from_str,
        KeyPath::parse("/a/b/", "/"),
        path!("a", "b"),
        KeyPath::from(split_path("a::b", "::")),
        ["a", "b"].into_iter().collect(),
    ];

    for path in paths {
        assert_eq!(nested.get_int(&path), Ok(1), "{path}");
    }
}

#[test]
fn test_parent_path_addresses_container() {
    let mut nested = Nested::new();
    let leaf = path!("server", "http", "port");
    nested.set(&leaf, 8080).unwrap();

    let parent = leaf.parent().unwrap();
    assert_eq!(parent.to_string(), "server.http");
    assert_eq!(nested.get_nested(&parent).unwrap().len(), 1);
    assert_eq!(nested.get_int(&parent.join(&["port"])), Ok(8080));
}

#[test]
#[cfg(feature = "json")]
fn test_json_values_are_opaque() {
    use serde_json::json;

    let object = json!({ "inner": { "deep": 1 } });
    let mut nested = Nested::new();
    nested.set(&["blob"], object.clone()).unwrap();

    assert_eq!(nested.get_as::<&serde_json::Value>(&["blob"]), Ok(&object));
    assert!(nested.get(&["blob", "inner"]).unwrap_err().is_not_found());
    assert!(nested.get_nested(&["blob"]).unwrap_err().is_type_error());
    assert_eq!(super::helpers::walk_order(&nested), vec!["blob"]);
    assert_eq!(
        nested.get(&["blob"]).unwrap().to_string(),
        r#"{"inner":{"deep":1}}"#
    );
}
