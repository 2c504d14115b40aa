//! ATON decoding.
//!
//! This module provides the [`Parser`], a recursive-descent parser over the
//! token sequence produced by [`lexer`](crate::lexer), and the serde plumbing
//! that turns a decoded [`Value`] into any `T: Deserialize`.
//!
//! ## Overview
//!
//! - **Implicit root**: a document may omit its outer `{ }` and be written as a
//!   plain sequence of `@key value` pairs
//! - **Last key wins**: a repeated key replaces the earlier value
//! - **Numeral inference**: `<...>` content is tried as bool, nil, `i64`, `u64`,
//!   then `f64`, in that order
//! - **Depth limit**: nesting beyond [`AtonOptions::max_depth`] fails cleanly
//!   instead of exhausting the stack
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_aton::{decode, Value};
//!
//! let doc = decode("{ @name [Alice] @hobbies ( reading gaming ) }").unwrap();
//! assert_eq!(doc.get("name"), Some(&Value::from("Alice")));
//! assert_eq!(doc.get("hobbies").and_then(|h| h.as_list()).map(|h| h.len()), Some(2));
//! ```

use crate::error::ContainerKind;
use crate::escape::unescape;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::{AtonMap, AtonOptions, Error, Result, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;
use tracing::trace;

/// Classifies the content of an angle scalar.
///
/// Tries `true`/`false`/`nil`, then a signed integer, then an unsigned integer,
/// then a float. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```rust
/// use serde_aton::de::parse_numeral;
/// use serde_aton::Value;
///
/// assert_eq!(parse_numeral("nil"), Some(Value::Nil));
/// assert_eq!(parse_numeral("-7"), Some(Value::Int(-7)));
/// assert!(matches!(parse_numeral("18446744073709551615"), Some(Value::UInt(u64::MAX))));
/// assert_eq!(parse_numeral("2.5"), Some(Value::Float(2.5)));
/// assert_eq!(parse_numeral("abc"), None);
/// ```
#[must_use]
pub fn parse_numeral(raw: &str) -> Option<Value> {
    match raw {
        "true" => return Some(Value::Bool(true)),
        "false" => return Some(Value::Bool(false)),
        "nil" => return Some(Value::Nil),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Value::Int(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Some(Value::UInt(u));
    }
    raw.parse::<f64>().ok().map(Value::Float)
}

/// Recursive-descent parser over a tokenized ATON text.
///
/// Each parser owns its tokens and cursor, so independent parses share no state.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    depth: usize,
    max_depth: usize,
    strict: bool,
}

impl Parser {
    pub fn new(input: &str, options: &AtonOptions) -> Self {
        Parser {
            tokens: tokenize(input),
            cursor: 0,
            depth: 0,
            max_depth: options.depth_limit(),
            strict: options.strict,
        }
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.cursor.min(last)]
    }

    /// Takes the current token and moves past it. `Eof` is never consumed.
    fn advance(&mut self) -> Token {
        let last = self.tokens.len() - 1;
        if self.cursor >= last {
            return self.tokens[last].clone();
        }
        let token = &mut self.tokens[self.cursor];
        let placeholder = Token {
            kind: TokenKind::Eof,
            line: token.line,
            col: token.col,
        };
        self.cursor += 1;
        std::mem::replace(token, placeholder)
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

    fn expect_eof(&self) -> Result<()> {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => Ok(()),
            _ => Err(unexpected(token)),
        }
    }

    /// Parses a whole document into its root dict.
    ///
    /// A leading `{` makes the root braced, and nothing may follow its `}`.
    /// Otherwise the document is an implicit root that runs to end of input.
    pub fn parse_document(&mut self) -> Result<Value> {
        self.enter()?;
        let root = if self.peek().kind == TokenKind::DictOpen {
            let open = self.advance();
            let dict = self.parse_dict(Some((open.line, open.col)))?;
            self.expect_eof()?;
            dict
        } else {
            self.parse_dict(None)?
        };
        self.leave();
        Ok(Value::Dict(root))
    }

    /// Parses exactly one value followed by end of input.
    pub fn parse_fragment(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.expect_eof()?;
        Ok(value)
    }

    /// Parses `@key value` entries up to the matching `}`.
    ///
    /// `open` is the position of the `{`, or `None` for an implicit root, which
    /// only ends at end of input.
    fn parse_dict(&mut self, open: Option<(usize, usize)>) -> Result<AtonMap> {
        let mut dict = AtonMap::new();
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::Key {
                    text,
                    bracketed,
                    terminated,
                } => {
                    if !terminated {
                        return Err(Error::unterminated(
                            ContainerKind::String,
                            token.line,
                            token.col + 1,
                        ));
                    }
                    let key = if bracketed { unescape(&text) } else { text };
                    let value = self.parse_value()?;
                    dict.insert(key, value);
                }
                TokenKind::DictClose if open.is_some() => break,
                TokenKind::Eof => match open {
                    Some((line, col)) if self.strict => {
                        return Err(Error::unterminated(ContainerKind::Dict, line, col))
                    }
                    _ => break,
                },
                _ => return Err(unexpected(&token)),
            }
        }
        Ok(dict)
    }

    /// Parses values up to the matching `)`.
    fn parse_list(&mut self, open: (usize, usize)) -> Result<Vec<Value>> {
        let mut list = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::ListClose => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    if self.strict {
                        return Err(Error::unterminated(ContainerKind::List, open.0, open.1));
                    }
                    break;
                }
                _ => list.push(self.parse_value()?),
            }
        }
        Ok(list)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = self.advance();
        let (line, col) = (token.line, token.col);
        match token.kind {
            TokenKind::DictOpen => {
                self.enter()?;
                trace!(line, col, depth = self.depth, "parsing dict");
                let dict = self.parse_dict(Some((line, col)))?;
                self.leave();
                Ok(Value::Dict(dict))
            }
            TokenKind::ListOpen => {
                self.enter()?;
                trace!(line, col, depth = self.depth, "parsing list");
                let list = self.parse_list((line, col))?;
                self.leave();
                Ok(Value::List(list))
            }
            TokenKind::Angle { raw, terminated } => {
                if !terminated {
                    return Err(Error::unterminated(ContainerKind::Scalar, line, col));
                }
                parse_numeral(&raw).ok_or_else(|| Error::invalid_numeral(&raw, line, col))
            }
            TokenKind::Bracketed { raw, terminated } => {
                if !terminated {
                    return Err(Error::unterminated(ContainerKind::String, line, col));
                }
                Ok(Value::Str(unescape(&raw)))
            }
            TokenKind::Bare(text) => Ok(Value::Str(text)),
            _ => Err(unexpected(&token)),
        }
    }
}

fn unexpected(token: &Token) -> Error {
    Error::unexpected_token(&token.to_string(), token.line, token.col)
}

/// Serde deserializer over an owned [`Value`].
///
/// Used by [`from_str`](crate::from_str) and [`from_value`](crate::from_value)
/// once the text has been decoded.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        ValueDeserializer::new(self)
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::UInt(u) => visitor.visit_u64(u),
            Value::Float(f) => visitor.visit_f64(f),
            Value::Str(s) => visitor.visit_string(s),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            Value::Dict(dict) => visitor.visit_map(MapDeserializer::new(dict)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Nil => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Str(variant) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            Value::Dict(dict) if dict.len() == 1 => {
                let mut iter = dict.into_iter();
                match iter.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(Error::custom("expected enum variant")),
                }
            }
            other => Err(Error::custom(format!(
                "expected enum as string or single-entry dict, found {}",
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: AtonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::Str(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

/// Externally tagged enum: a bare variant name, or `{ @Variant payload }`.
struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::Str(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Nil) | None => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::List(list)) => visitor.visit_seq(SeqDeserializer::new(list)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Dict(dict)) => visitor.visit_map(MapDeserializer::new(dict)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}
