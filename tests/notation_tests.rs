//! Conformance tests for the notation: the examples every implementation must agree on.

use serde_aton::{
    aton, decode, decode_value, decode_with_options, encode, encode_value, encode_with_options,
    AtonMap, AtonOptions, ContainerKind, Error, Value,
};

fn dict(entries: Vec<(&str, Value)>) -> Value {
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<AtonMap>(),
    )
}

fn scalar(text: &str) -> Result<Value, Error> {
    decode_value(text, &AtonOptions::default())
}

#[test]
fn test_escaping_example() {
    let options = AtonOptions::default();
    let original = Value::from(r"a]b\c");
    let encoded = encode_value(&original, &options).unwrap();
    assert_eq!(encoded, r"[a\]b\\c]");
    assert_eq!(decode_value(&encoded, &options).unwrap(), original);
}

#[test]
fn test_numeral_classification() {
    assert_eq!(scalar("<true>").unwrap(), Value::Bool(true));
    assert_eq!(scalar("<false>").unwrap(), Value::Bool(false));
    assert_eq!(scalar("<nil>").unwrap(), Value::Nil);
    assert!(matches!(scalar("<42>").unwrap(), Value::Int(42)));
    assert!(matches!(scalar("<-7>").unwrap(), Value::Int(-7)));
    assert!(matches!(scalar("<3.14>").unwrap(), Value::Float(f) if f.to_string() == "3.14"));
    assert!(matches!(
        scalar("<9223372036854775807>").unwrap(),
        Value::Int(i64::MAX)
    ));
    assert!(matches!(
        scalar("<9223372036854775808>").unwrap(),
        Value::UInt(9223372036854775808)
    ));
    assert!(matches!(
        scalar("<-9223372036854775809>").unwrap(),
        Value::Float(_)
    ));

    let err = scalar("<abc>").unwrap_err();
    assert_eq!(err, Error::invalid_numeral("abc", 1, 1));
}

#[test]
fn test_bare_words_are_strings() {
    assert_eq!(scalar("true").unwrap(), Value::from("true"));
    assert_eq!(scalar("42").unwrap(), Value::from("42"));
    assert_eq!(scalar("nil").unwrap(), Value::from("nil"));
}

#[test]
fn test_implicit_root() {
    let expected = dict(vec![("a", Value::Int(1)), ("b", Value::Int(2))]);
    assert_eq!(decode("@a <1> @b <2>").unwrap(), expected);
    assert_eq!(decode("{ @a <1> @b <2> }").unwrap(), expected);
}

#[test]
fn test_duplicate_key_policy() {
    assert_eq!(
        decode("{ @x <1> @x <2> }").unwrap(),
        dict(vec![("x", Value::Int(2))])
    );
}

#[test]
fn test_nested_structure_example() {
    let value = decode("{ @name [Alice] @hobbies ( reading gaming ) }").unwrap();
    assert_eq!(
        value,
        dict(vec![
            ("name", Value::from("Alice")),
            (
                "hobbies",
                Value::List(vec![Value::from("reading"), Value::from("gaming")])
            ),
        ])
    );
}

#[test]
fn test_depth_limit() {
    let options = AtonOptions::new().with_max_depth(4);
    let deep = format!("@a {}", "( ".repeat(10));
    let err = decode_with_options(&deep, &options).unwrap_err();
    assert_eq!(err, Error::DepthExceeded { limit: 4 });

    let shallow = "@a ( ( ( ) ) )";
    assert!(decode_with_options(shallow, &options).is_ok());

    let mut value = Value::List(vec![]);
    for _ in 0..10 {
        value = Value::List(vec![value]);
    }
    let doc = dict(vec![("a", value)]);
    assert!(matches!(
        encode_with_options(&doc, &options),
        Err(Error::DepthExceeded { limit: 4 })
    ));
}

#[test]
fn test_round_trip_and_idempotence() {
    let doc = aton!({
        "name": "Alice Smith",
        "age": 30,
        "score": 97.5,
        "admin": false,
        "manager": nil,
        "hobbies": ["reading", "gaming", ""],
        "address": {
            "street": "1 Main St",
            "zip": "01234"
        },
        "matrix": [[1, 2], [], [{}]]
    });

    let text = encode(&doc).unwrap();
    let decoded = decode(&text).unwrap();
    assert_eq!(decoded, doc);
    assert_eq!(encode(&decoded).unwrap(), text);
}

#[test]
fn test_canonical_output() {
    let doc = aton!({
        "name": "Alice Smith",
        "hobbies": ["reading", "gaming"],
        "address": { "zip": 12345 },
        "empty": []
    });
    assert_eq!(
        encode(&doc).unwrap(),
        "@name [Alice Smith]\n\
         @hobbies (\n\treading\n\tgaming\n)\n\
         @address {\n\t@zip <12345>\n}\n\
         @empty ()\n"
    );
}

#[test]
fn test_order_is_preserved_but_not_compared() {
    let text = "@z <1> @a <2> @m <3>";
    let value = decode(text).unwrap();
    let keys: Vec<_> = value
        .as_dict()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(value, decode("@a <2> @m <3> @z <1>").unwrap());
    assert_eq!(encode(&value).unwrap(), "@z <1>\n@a <2>\n@m <3>\n");
}

#[test]
fn test_empty_inputs() {
    assert_eq!(decode("").unwrap(), dict(vec![]));
    assert_eq!(encode(&dict(vec![])).unwrap(), "");
    assert_eq!(decode("@s [] @k <nil>").unwrap(), aton!({ "s": "", "k": nil }));
    assert_ne!(decode("@s []").unwrap(), decode("@s <nil>").unwrap());
}

#[test]
fn test_bracketed_keys() {
    let doc = dict(vec![("first name", Value::from("Ann")), ("", Value::Nil)]);
    let text = encode(&doc).unwrap();
    assert_eq!(text, "@[first name] Ann\n@[] <nil>\n");
    assert_eq!(decode(&text).unwrap(), doc);
}

#[test]
fn test_whitespace_is_insignificant() {
    let compact = decode("{@a(x y)@b{@c<1>}}").unwrap();
    let spread = decode("\r\n{\n\t@a (\n x\n y\n )\n @b {\n  @c <1>\n }\n}\n").unwrap();
    assert_eq!(compact, spread);
}

#[test]
fn test_unexpected_tokens() {
    let err = decode("@a <1>\n}").unwrap_err();
    assert_eq!(err, Error::unexpected_token("'}'", 2, 1));

    let err = decode("@a @b <1>").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { line: 1, col: 4, .. }));

    let err = decode("{ @a <1> } extra").unwrap_err();
    assert!(matches!(err, Error::UnexpectedToken { line: 1, col: 12, .. }));

    let err = decode("value").unwrap_err();
    assert!(err.to_string().contains("string 'value'"));
}

#[test]
fn test_leniency_at_end_of_input() {
    let lenient = decode("@list (a b").unwrap();
    assert_eq!(lenient, aton!({ "list": ["a", "b"] }));

    let strict = AtonOptions::strict();
    let err = decode_with_options("@list (a b", &strict).unwrap_err();
    assert_eq!(
        err,
        Error::UnterminatedContainer {
            kind: ContainerKind::List,
            line: 1,
            col: 7
        }
    );

    let err = decode_with_options("{\n@d { @x <1>", &strict).unwrap_err();
    assert_eq!(err, Error::unterminated(ContainerKind::Dict, 2, 4));
}

#[test]
fn test_unterminated_literals() {
    let err = decode("@a [never closed").unwrap_err();
    assert_eq!(err, Error::unterminated(ContainerKind::String, 1, 4));
    let err = decode("@a <12").unwrap_err();
    assert_eq!(err, Error::unterminated(ContainerKind::Scalar, 1, 4));
    let err = decode(r"@a [escaped end\]").unwrap_err();
    assert!(matches!(
        err,
        Error::UnterminatedContainer {
            kind: ContainerKind::String,
            ..
        }
    ));
}

#[test]
fn test_display_matches_single_line_fragment() {
    let value = aton!({ "a": [1, "b c"], "d": {} });
    let text = value.to_string();
    assert_eq!(text, "{@a (<1> [b c]) @d {}}");
    assert_eq!(decode(&text).unwrap(), value);
}
