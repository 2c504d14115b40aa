//! ATON encoding.
//!
//! This module provides the [`Writer`], which renders a [`Value`] tree as
//! canonical ATON text, and the [`ValueSerializer`], which turns any
//! `T: Serialize` into a [`Value`] first.
//!
//! ## Overview
//!
//! The writer output is deterministic for a given value and options:
//!
//! - **One entry per line**: every dict entry and list element sits on its own
//!   line, indented once per nesting level
//! - **Implicit root**: by default the document root is written as bare
//!   `@key value` lines with no surrounding braces
//! - **Minimal brackets**: strings are written bare unless they would read
//!   back differently or contain `\` or `]`, the only escaped characters
//! - **Typed scalars**: nil, booleans, and numbers always use `<...>`, and
//!   floats always keep a `.` or exponent so they never read back as integers
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_aton::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: f64 }
//!
//! let text = to_string(&Point { x: 1, y: 2.5 }).unwrap();
//! assert_eq!(text, "@x <1>\n@y <2.5>\n");
//! ```
//!
//! ## Direct Writer Usage
//!
//! ```rust
//! use serde_aton::{aton, AtonOptions, Indent, Writer};
//!
//! let options = AtonOptions::new().with_indent(Indent::Spaces(2));
//! let mut writer = Writer::new(&options);
//! writer.write_document(&aton!({ "point": { "x": 1 } })).unwrap();
//! assert_eq!(writer.into_inner(), "@point {\n  @x <1>\n}\n");
//! ```

use crate::escape::write_string;
use crate::options::DEFAULT_MAX_DEPTH;
use crate::{AtonMap, AtonOptions, Error, Result, Value};
use serde::{ser, Serialize};
use tracing::trace;

/// Renders [`Value`]s as ATON text.
///
/// Created via [`Writer::new`]; each writer accumulates into its own buffer.
pub struct Writer {
    output: String,
    indent: String,
    newline: &'static str,
    root_braces: bool,
    max_depth: usize,
    depth: usize,
}

impl Writer {
    pub fn new(options: &AtonOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            indent: options.indent.unit(),
            newline: options.line_ending.as_str(),
            root_braces: options.root_braces,
            max_depth: options.depth_limit(),
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.output.push_str(&self.indent);
        }
    }

    fn write_key(&mut self, key: &str) {
        self.output.push('@');
        write_string(&mut self.output, key);
    }

    /// Writes a whole document. The root must be a dict.
    ///
    /// Every root entry is followed by a line ending, so an empty root without
    /// braces produces an empty document.
    pub fn write_document(&mut self, value: &Value) -> Result<()> {
        let root = match value {
            Value::Dict(dict) => dict,
            other => {
                return Err(Error::unsupported_value(&format!(
                    "document root must be a dict, found {}",
                    other.type_name()
                )))
            }
        };

        self.enter()?;
        if self.root_braces {
            self.write_dict(root, 0)?;
            self.output.push_str(self.newline);
        } else {
            for (key, value) in root {
                self.write_key(key);
                self.output.push(' ');
                self.write_value(value, 0)?;
                self.output.push_str(self.newline);
            }
        }
        self.leave();
        Ok(())
    }

    /// Writes one value whose opening token sits at indentation `level`.
    pub fn write_value(&mut self, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Dict(dict) => {
                self.enter()?;
                trace!(depth = self.depth, entries = dict.len(), "writing dict");
                self.write_dict(dict, level)?;
                self.leave();
            }
            Value::List(list) => {
                self.enter()?;
                trace!(depth = self.depth, elements = list.len(), "writing list");
                self.write_list(list, level)?;
                self.leave();
            }
            scalar => write_compact(&mut self.output, scalar, self.depth)?,
        }
        Ok(())
    }

    fn write_dict(&mut self, dict: &AtonMap, level: usize) -> Result<()> {
        if dict.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }
        self.output.push('{');
        for (key, value) in dict {
            self.output.push_str(self.newline);
            self.write_indent(level + 1);
            self.write_key(key);
            self.output.push(' ');
            self.write_value(value, level + 1)?;
        }
        self.output.push_str(self.newline);
        self.write_indent(level);
        self.output.push('}');
        Ok(())
    }

    fn write_list(&mut self, list: &[Value], level: usize) -> Result<()> {
        if list.is_empty() {
            self.output.push_str("()");
            return Ok(());
        }
        self.output.push('(');
        for element in list {
            self.output.push_str(self.newline);
            self.write_indent(level + 1);
            self.write_value(element, level + 1)?;
        }
        self.output.push_str(self.newline);
        self.write_indent(level);
        self.output.push(')');
        Ok(())
    }
}

/// Appends `value` on a single line: `{@k v @k2 v2}`, `(a b)`, or a scalar.
///
/// This is the [`Display`](std::fmt::Display) form of [`Value`]. `depth` is the
/// number of containers already open around `value`; nesting past
/// [`DEFAULT_MAX_DEPTH`] fails with [`Error::DepthExceeded`].
pub(crate) fn write_compact(output: &mut String, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Nil => output.push_str("<nil>"),
        Value::Bool(b) => output.push_str(if *b { "<true>" } else { "<false>" }),
        Value::Int(i) => {
            output.push('<');
            output.push_str(&i.to_string());
            output.push('>');
        }
        Value::UInt(u) => {
            output.push('<');
            output.push_str(&u.to_string());
            output.push('>');
        }
        Value::Float(f) => {
            output.push('<');
            output.push_str(&format_float(*f));
            output.push('>');
        }
        Value::Str(s) => write_string(output, s),
        Value::Dict(dict) => {
            let depth = compact_depth(depth)?;
            output.push('{');
            for (i, (key, value)) in dict.iter().enumerate() {
                if i > 0 {
                    output.push(' ');
                }
                output.push('@');
                write_string(output, key);
                output.push(' ');
                write_compact(output, value, depth)?;
            }
            output.push('}');
        }
        Value::List(list) => {
            let depth = compact_depth(depth)?;
            output.push('(');
            for (i, element) in list.iter().enumerate() {
                if i > 0 {
                    output.push(' ');
                }
                write_compact(output, element, depth)?;
            }
            output.push(')');
        }
    }
    Ok(())
}

#[inline]
fn compact_depth(depth: usize) -> Result<usize> {
    let depth = depth + 1;
    if depth > DEFAULT_MAX_DEPTH {
        return Err(Error::depth_exceeded(DEFAULT_MAX_DEPTH));
    }
    Ok(depth)
}

/// Shortest text that parses back to the same `f64` and is never an integer literal.
#[inline]
fn format_float(f: f64) -> String {
    format!("{:?}", f)
}

/// Serializes Rust values into [`Value`] trees.
///
/// Enum variants with data become a single-entry dict keyed by the variant name.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: AtonMap,
    current_key: Option<String>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: AtonMap,
}

fn tagged(variant: &'static str, value: Value) -> Value {
    let mut dict = AtonMap::with_capacity(1);
    dict.insert(variant.to_string(), value);
    Value::Dict(dict)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        if let Ok(i) = i64::try_from(v) {
            Ok(Value::Int(i))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(Value::UInt(u))
        } else {
            Err(Error::unsupported_value(&format!(
                "integer {} does not fit in 64 bits",
                v
            )))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v).map(Value::from).map_err(|_| {
            Error::unsupported_value(&format!("integer {} does not fit in 64 bits", v))
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::Int(b as i64)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: AtonMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: AtonMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::List(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::Str(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::unsupported_value(&format!(
                "dict keys must be strings, found {}",
                other.type_name()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Dict(self.map)))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
