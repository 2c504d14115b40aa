use serde_aton::{aton, encode, AtonMap, Value};

#[test]
fn test_aton_macro_nil() {
    let value = aton!(nil);
    assert_eq!(value, Value::Nil);
}

#[test]
fn test_aton_macro_booleans() {
    let true_val = aton!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = aton!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_aton_macro_numbers() {
    let int_val = aton!(42);
    assert_eq!(int_val, Value::Int(42));

    let float_val = aton!(3.5);
    assert_eq!(float_val, Value::Float(3.5));

    let negative_val = aton!(-123);
    assert_eq!(negative_val, Value::Int(-123));

    let big = aton!(18_446_744_073_709_551_615u64);
    assert!(matches!(big, Value::UInt(u64::MAX)));
}

#[test]
fn test_aton_macro_strings() {
    let string_val = aton!("hello world");
    assert_eq!(string_val, Value::Str("hello world".to_string()));

    let empty_string = aton!("");
    assert_eq!(empty_string, Value::Str(String::new()));
    assert_ne!(empty_string, aton!(nil));
}

#[test]
fn test_aton_macro_lists() {
    let empty_list = aton!([]);
    assert_eq!(empty_list, Value::List(vec![]));

    let number_list = aton!([1, 2, 3]);
    assert_eq!(
        number_list,
        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );

    let mixed_list = aton!([1, "hello", true, nil]);
    assert_eq!(
        mixed_list,
        Value::List(vec![
            Value::Int(1),
            Value::Str("hello".to_string()),
            Value::Bool(true),
            Value::Nil,
        ])
    );
}

#[test]
fn test_aton_macro_dicts() {
    let empty_dict = aton!({});
    assert_eq!(empty_dict, Value::Dict(AtonMap::new()));

    let simple_dict = aton!({
        "name": "Alice",
        "age": 30
    });

    match simple_dict {
        Value::Dict(ref dict) => {
            assert_eq!(dict.len(), 2);
            assert_eq!(dict.get("name"), Some(&Value::Str("Alice".to_string())));
            assert_eq!(dict.get("age"), Some(&Value::Int(30)));
        }
        _ => panic!("Expected dict"),
    }
}

#[test]
fn test_aton_macro_nested() {
    let nested = aton!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let dict = nested.as_dict().expect("Expected dict");
    assert_eq!(dict.len(), 3);

    let user = nested.get("user").and_then(Value::as_dict).expect("Expected user dict");
    assert_eq!(user.get("id"), Some(&Value::Int(123)));
    assert_eq!(user.get("name"), Some(&Value::from("Bob")));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = nested.get("tags").and_then(Value::as_list).expect("Expected tags list");
    assert_eq!(tags, &vec![Value::from("admin"), Value::from("developer")]);

    assert_eq!(nested.get("count"), Some(&Value::Int(42)));
}

#[test]
fn test_aton_macro_keeps_key_order() {
    let value = aton!({ "z": 1, "a": 2, "m": 3 });
    assert_eq!(encode(&value).unwrap(), "@z <1>\n@a <2>\n@m <3>\n");
}

#[test]
fn test_aton_macro_duplicate_key_last_wins() {
    let value = aton!({ "k": 1, "other": 2, "k": 3 });
    assert_eq!(value.get("k"), Some(&Value::Int(3)));
    assert_eq!(encode(&value).unwrap(), "@k <3>\n@other <2>\n");
}

#[test]
fn test_value_methods() {
    let nil_val = aton!(nil);
    assert!(nil_val.is_nil());
    assert!(!nil_val.is_bool());
    assert!(!nil_val.is_number());
    assert!(!nil_val.is_str());
    assert!(!nil_val.is_list());
    assert!(!nil_val.is_dict());

    let bool_val = aton!(true);
    assert!(bool_val.is_bool());
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = aton!("hello");
    assert!(str_val.is_str());
    assert_eq!(str_val.as_str(), Some("hello"));

    let list_val = aton!([1, 2, 3]);
    assert!(list_val.is_list());
    assert!(list_val.is_container());
    assert_eq!(list_val.as_list().unwrap().len(), 3);

    let dict_val = aton!({"key": "value"});
    assert!(dict_val.is_dict());
    assert_eq!(dict_val.as_dict().unwrap().len(), 1);
    assert_eq!(dict_val.type_name(), "dict");
}

#[test]
fn test_aton_macro_expression_values() {
    let name = String::from("Carol");
    let scores = vec![1.5, 2.5];
    let value = aton!({ "name": name, "scores": scores });
    assert_eq!(value.get("name"), Some(&Value::from("Carol")));
    assert_eq!(
        value.get("scores"),
        Some(&Value::List(vec![Value::Float(1.5), Value::Float(2.5)]))
    );
}
