//! # serde_aton
//!
//! A Serde-compatible library for ATON, a bracket-delimited, human-readable
//! alternative to JSON.
//!
//! ## What is ATON?
//!
//! ATON writes nested data with four kinds of brackets and an `@` for keys:
//!
//! ```text
//! @name [Alice Smith]
//! @age <30>
//! @hobbies (
//! 	reading
//! 	gaming
//! )
//! @address {
//! 	@city Springfield
//! }
//! ```
//!
//! - `{ ... }` is a dict of `@key value` entries
//! - `( ... )` is a list of values
//! - `[ ... ]` is a string that needs delimiting; `\` escapes the next character
//! - `< ... >` is a typed scalar: `true`, `false`, `nil`, or a number
//! - anything else is a bare string
//!
//! A document is a dict whose outer braces may be left out. See [`grammar`]
//! for the full notation.
//!
//! ## Key Features
//!
//! - **Round-trip Safe**: `decode(encode(v)) == v` for every [`Value`], including
//!   empty strings, strings that look like numbers, and special floats
//! - **Serde Compatible**: Works with existing Rust types via `#[derive(Serialize, Deserialize)]`
//! - **Ordered Dicts**: Entries keep their written order, so output is byte-stable
//! - **Bounded Recursion**: Nesting depth is capped for untrusted input
//! - **Positioned Errors**: Syntax errors carry the line and column of the offending token
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_aton::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "@id <123>\n@name Alice\n@active <true>\n");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Working with Values
//!
//! ```rust
//! use serde_aton::{aton, decode, encode, Value};
//!
//! let doc = aton!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! let text = encode(&doc).unwrap();
//! assert_eq!(decode(&text).unwrap(), doc);
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("Alice"));
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Serializing a struct and reading it back
//! - **`macro.rs`** - Building values with the aton! macro
//! - **`dynamic_values.rs`** - Decoding and inspecting documents without a schema
//! - **`custom_options.rs`** - Indentation, line endings, root braces, strict mode
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{Parser, ValueDeserializer};
pub use error::{ContainerKind, Error, Result};
pub use map::AtonMap;
pub use options::{AtonOptions, Indent, LineEnding};
pub use ser::{ValueSerializer, Writer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use tracing::debug;

/// Encode a document root to ATON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{aton, encode};
///
/// let text = encode(&aton!({ "a": 1, "b": [true, nil] })).unwrap();
/// assert_eq!(text, "@a <1>\n@b (\n\t<true>\n\t<nil>\n)\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if `value` is not a dict, and
/// [`Error::DepthExceeded`] if it nests deeper than the default limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &AtonOptions::default())
}

/// Encode a document root to ATON text with custom options.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if `value` is not a dict, and
/// [`Error::DepthExceeded`] if it nests deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: &AtonOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    writer.write_document(value)?;
    let text = writer.into_inner();
    debug!(bytes = text.len(), "encoded document");
    Ok(text)
}

/// Encode a single value of any variant, with no trailing line ending.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{encode_value, AtonOptions, Value};
///
/// let options = AtonOptions::default();
/// assert_eq!(encode_value(&Value::Float(2.0), &options).unwrap(), "<2.0>");
/// assert_eq!(encode_value(&Value::from("a b"), &options).unwrap(), "[a b]");
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] if `value` nests deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_value(value: &Value, options: &AtonOptions) -> Result<String> {
    let mut writer = Writer::new(options);
    writer.write_value(value, 0)?;
    Ok(writer.into_inner())
}

/// Decode ATON text into its root dict with default options.
///
/// The result is always a [`Value::Dict`]. Empty input decodes to an empty dict.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{decode, Value};
///
/// let doc = decode("@a <1> @b <2>").unwrap();
/// assert_eq!(doc, decode("{ @a <1> @b <2> }").unwrap());
/// assert_eq!(doc.get("b"), Some(&Value::Int(2)));
/// ```
///
/// # Errors
///
/// Returns an error describing the first problem found: an unexpected token,
/// an unterminated string or scalar, an invalid numeral, or excessive nesting.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &AtonOptions::default())
}

/// Decode ATON text into its root dict with custom options.
///
/// # Errors
///
/// As [`decode`]. With `options.strict` set, a `{` or `(` still open at end
/// of input is also an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(text: &str, options: &AtonOptions) -> Result<Value> {
    let value = Parser::new(text, options).parse_document()?;
    debug!(
        bytes = text.len(),
        entries = value.as_dict().map_or(0, AtonMap::len),
        "decoded document"
    );
    Ok(value)
}

/// Decode exactly one value of any variant.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{decode_value, AtonOptions, Value};
///
/// let options = AtonOptions::default();
/// assert_eq!(decode_value("<nil>", &options).unwrap(), Value::Nil);
/// assert_eq!(
///     decode_value("(a [b c])", &options).unwrap(),
///     Value::List(vec![Value::from("a"), Value::from("b c")])
/// );
/// assert!(decode_value("a b", &options).is_err());
/// ```
///
/// # Errors
///
/// As [`decode`], and [`Error::UnexpectedToken`] if anything follows the value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_value(text: &str, options: &AtonOptions) -> Result<Value> {
    Parser::new(text, options).parse_fragment()
}

/// Serialize any `T: Serialize` to an ATON document.
///
/// `T` must serialize as a map or struct, since a document root is a dict.
///
/// # Examples
///
/// ```rust
/// use serde_aton::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "@x <1>\n@y <2>\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] for non-map roots or non-string map keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &AtonOptions::default())
}

/// Serialize any `T: Serialize` to an ATON document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{to_string_with_options, AtonOptions, Indent};
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("alice", vec![1, 2]);
///
/// let options = AtonOptions::new().with_indent(Indent::Spaces(4));
/// let text = to_string_with_options(&scores, &options).unwrap();
/// assert_eq!(text, "@alice (\n    <1>\n    <2>\n)\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or nests too deeply.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &AtonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_with_options(&to_value(value)?, options)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Unlike [`to_string`], any shape is accepted here.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_dict());
/// assert_eq!(to_value(&vec![1, 2]).unwrap(), Value::List(vec![Value::Int(1), Value::Int(2)]));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as an ATON document.
///
/// # Examples
///
/// ```rust
/// use serde_aton::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"@x <1>\n@y <2>\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &AtonOptions::default())
}

/// Serialize any `T: Serialize` to a writer as an ATON document with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &AtonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from an ATON document.
///
/// # Examples
///
/// ```rust
/// use serde_aton::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("@x <1> @y <2>").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid ATON or does not match `T`.
/// Syntax errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &AtonOptions::default())
}

/// Deserialize an instance of type `T` from an ATON document with custom options.
///
/// # Errors
///
/// As [`from_str`], with the parsing rules of `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &AtonOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(s, options)?)
}

/// Deserialize an instance of type `T` from an I/O stream of ATON.
///
/// # Examples
///
/// ```rust
/// use serde_aton::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(b"@x <1>\n@y <2>\n");
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid ATON, or the
/// data does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of ATON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid ATON, or do
/// not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Interpret a [`Value`] as an instance of type `T`.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{aton, from_value};
///
/// let pair: (String, u8) = from_value(aton!(["x", 7])).unwrap();
/// assert_eq!(pair, ("x".to_string(), 7));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}
