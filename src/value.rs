//! Dynamic value representation for ATON data.
//!
//! This module provides the [`Value`] enum, the closed set of data an ATON
//! document can hold. The parser produces it, the writer consumes it, and the
//! serde layer converts Rust types to and from it.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_aton::{aton, Value};
//!
//! let nil = Value::Nil;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("hello");
//!
//! let doc = aton!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(doc.is_dict());
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use serde_aton::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ## Equality
//!
//! Equality is structural and numeric-aware: `Int(5)` equals `UInt(5)`, and
//! dicts compare without regard to entry order. Floats compare with IEEE
//! semantics, so a `NaN` is never equal to itself.

use crate::AtonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Any datum an ATON document can hold.
///
/// `Int` and `UInt` are both integer forms: the parser produces `UInt` only
/// for literals above `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// use serde_aton::Value;
///
/// let nil = Value::Nil;
/// let num = Value::Int(42);
/// let text = Value::Str("hello".to_string());
///
/// assert!(nil.is_nil());
/// assert!(num.is_number());
/// assert!(text.is_str());
/// assert_ne!(Value::Nil, Value::Str(String::new()));
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Dict(AtonMap),
    List(Vec<Value>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
                u64::try_from(*i).map_or(false, |i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns `true` if the value is `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` for `Int`, `UInt`, and `Float`.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    /// Returns `true` for `Int` and `UInt`.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Returns `true` for dicts and lists.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Dict(_) | Value::List(_))
    }

    /// Returns the variant name, as used in error messages.
    ///
    /// ```rust
    /// use serde_aton::Value;
    ///
    /// assert_eq!(Value::UInt(1).type_name(), "uint");
    /// assert_eq!(Value::List(vec![]).type_name(), "list");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Dict(_) => "dict",
            Value::List(_) => "list",
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer that fits in `i64`, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_aton::Value;
    ///
    /// assert_eq!(Value::Int(-7).as_i64(), Some(-7));
    /// assert_eq!(Value::UInt(7).as_i64(), Some(7));
    /// assert_eq!(Value::UInt(u64::MAX).as_i64(), None);
    /// assert_eq!(Value::Float(1.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::UInt(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// If the value is a non-negative integer, returns it as `u64`.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns any numeric value as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::UInt(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&AtonMap> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut AtonMap> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a dict.
    ///
    /// ```rust
    /// use serde_aton::decode;
    ///
    /// let doc = decode("@server { @port <8080> }").unwrap();
    /// let port = doc.get("server").and_then(|s| s.get("port"));
    /// assert_eq!(port.and_then(|p| p.as_i64()), Some(8080));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict().and_then(|dict| dict.get(key))
    }
}

/// Writes the value as a single-line ATON fragment.
///
/// Nesting deeper than [`DEFAULT_MAX_DEPTH`](crate::options::DEFAULT_MAX_DEPTH)
/// makes formatting fail with [`fmt::Error`].
///
/// ```rust
/// use serde_aton::aton;
///
/// let value = aton!({ "name": "Alice Smith", "tags": ["a", "b"] });
/// assert_eq!(value.to_string(), "{@name [Alice Smith] @tags (a b)}");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::ser::write_compact(&mut out, self, 0).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::UInt(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Dict(dict) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (k, v) in dict {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid ATON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    list.push(elem);
                }
                Ok(Value::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut dict = AtonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    dict.insert(key, value);
                }
                Ok(Value::Dict(dict))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_i64().ok_or_else(|| {
            crate::Error::custom(format!("expected int, found {}", value.type_name()))
        })
    }
}

impl TryFrom<Value> for u64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_u64().ok_or_else(|| {
            crate::Error::custom(format!("expected uint, found {}", value.type_name()))
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            crate::Error::custom(format!("expected number, found {}", value.type_name()))
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(crate::Error::custom(format!(
                "expected string, found {}",
                other.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    let value = value as u64;
                    match i64::try_from(value) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::UInt(value),
                    }
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<AtonMap> for Value {
    fn from(value: AtonMap) -> Self {
        Value::Dict(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}
