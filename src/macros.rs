/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// `nil`, `true`, and `false` are keywords; `[...]` builds a list and `{...}`
/// a dict with string-literal keys. Any other expression goes through
/// [`to_value`](crate::to_value).
///
/// # Panics
///
/// Panics if an expression cannot be represented as a [`Value`](crate::Value),
/// for example a map with non-string keys. Call [`to_value`](crate::to_value)
/// directly to handle that case as an error.
///
/// ```rust
/// use serde_aton::{aton, Value};
///
/// let doc = aton!({
///     "name": "Alice",
///     "age": 30,
///     "nickname": nil,
///     "hobbies": ["reading", "gaming"]
/// });
/// assert_eq!(doc.get("age"), Some(&Value::Int(30)));
/// assert_eq!(doc.get("nickname"), Some(&Value::Nil));
/// ```
#[macro_export]
macro_rules! aton {
    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::aton!($elem)),*])
    };

    ({}) => {
        $crate::Value::Dict($crate::AtonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dict = $crate::AtonMap::new();
        $(
            dict.insert($key.to_string(), $crate::aton!($value));
        )*
        $crate::Value::Dict(dict)
    }};

    ($s:expr) => {
        match $crate::to_value(&$s) {
            Ok(value) => value,
            Err(err) => panic!("aton!: {}", err),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{AtonMap, Value};

    #[test]
    fn test_aton_macro_primitives() {
        assert_eq!(aton!(nil), Value::Nil);
        assert_eq!(aton!(true), Value::Bool(true));
        assert_eq!(aton!(false), Value::Bool(false));
        assert_eq!(aton!(42), Value::Int(42));
        assert_eq!(aton!(3.5), Value::Float(3.5));
        assert_eq!(aton!("hello"), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_aton_macro_lists() {
        assert_eq!(aton!([]), Value::List(vec![]));
        assert_eq!(
            aton!([1, "two", nil, [false]]),
            Value::List(vec![
                Value::Int(1),
                Value::from("two"),
                Value::Nil,
                Value::List(vec![Value::Bool(false)]),
            ])
        );
    }

    #[test]
    fn test_aton_macro_dicts() {
        assert_eq!(aton!({}), Value::Dict(AtonMap::new()));

        let dict = aton!({
            "name": "Alice",
            "age": 30,
        });
        let map = dict.as_dict().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some(&Value::from("Alice")));
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "age"]);
    }

    #[test]
    fn test_aton_macro_expression_fallback() {
        let limit = u64::MAX;
        assert!(matches!(aton!(limit), Value::UInt(u64::MAX)));
        let owned = String::from("x y");
        assert_eq!(aton!(owned), Value::from("x y"));
    }

    #[test]
    #[should_panic(expected = "dict keys must be strings")]
    fn test_aton_macro_rejects_int_keyed_map() {
        let mut by_id = std::collections::BTreeMap::new();
        by_id.insert(1, "one");
        let _ = aton!({ "k": by_id });
    }
}
