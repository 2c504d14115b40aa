//! ATON Notation Reference
//!
//! This module documents the ATON notation as read and written by this library.
//!
//! # Overview
//!
//! An ATON document is a tree of dicts, lists, strings, and typed scalars. Every
//! construct is delimited by its own pair of brackets, so the notation needs no
//! commas, colons, or significant whitespace.
//!
//! | Construct | Syntax | Example |
//! |-----------|--------|---------|
//! | Dict | `{ @key value ... }` | `{ @x <1> @y <2> }` |
//! | List | `( value ... )` | `( red green blue )` |
//! | Bracketed string | `[text]` | `[Alice Smith]` |
//! | Bare string | text with no separators or structural characters | `reading` |
//! | Typed scalar | `<true>`, `<false>`, `<nil>`, `<number>` | `<42>`, `<-7>`, `<3.14>` |
//!
//! # Tokens
//!
//! Space, tab, `\n`, and `\r` separate tokens and are otherwise ignored outside
//! `[...]` and `<...>`. A byte-order mark (U+FEFF) at the very start of the
//! input is skipped; anywhere else it is ordinary text.
//!
//! The structural characters are `{ } ( ) < [`. A bare string is a maximal run
//! of characters that are neither separators nor structural, so `]`, `>`, and `@`
//! may appear inside one: `a]b>c` is a single bare string on input.
//!
//! ## Keys
//!
//! A key is `@` followed by either a bare run or a bracketed string:
//!
//! ```text
//! @name Alice
//! @[first name] Alice
//! ```
//!
//! `@` directly followed by a separator is the empty key. The writer emits it as
//! `@[]`.
//!
//! ## Bracketed Strings
//!
//! A bracketed string runs from `[` to the next unescaped `]`. Inside it a
//! backslash makes the next character literal, whatever it is:
//!
//! ```text
//! [a\]b\\c]     →  a]b\c
//! [line one
//! line two]     →  "line one\nline two"
//! ```
//!
//! The writer escapes only `\` and `]`, and uses the bracketed form exactly when
//! the string:
//!
//! - is empty
//! - starts with `@`
//! - contains a separator
//! - contains any of `{ } ( ) < [`
//! - contains `]` or `\`
//!
//! ## Typed Scalars
//!
//! The content between `<` and `>` is classified in this order, with no trimming:
//!
//! 1. `true`, `false` → bool
//! 2. `nil` → nil
//! 3. a signed 64-bit integer → `Int`
//! 4. an unsigned 64-bit integer → `UInt` (only above `i64::MAX`)
//! 5. a 64-bit float, including `inf`, `-inf`, and `NaN` → `Float`
//!
//! Anything else is an invalid numeral. The writer always keeps a `.` or an
//! exponent in floats (`<1.0>`, `<1e21>`), so a float never reads back as an
//! integer. A number written as a bare string (`42`) is a string.
//!
//! # Documents
//!
//! A document is a single dict. Its braces may be omitted:
//!
//! ```text
//! @a <1>
//! @b <2>
//! ```
//!
//! decodes the same as `{ @a <1> @b <2> }`. When the document starts with `{`,
//! nothing but whitespace may follow the matching `}`. Empty input is an empty
//! dict.
//!
//! A key that appears twice in one dict keeps its first position and its last
//! value.
//!
//! ## Canonical Layout
//!
//! The writer puts each dict entry and list element on its own line, indented
//! once per level (a tab by default), and closes containers on their own line:
//!
//! ```text
//! @name [Alice Smith]
//! @hobbies (
//! 	reading
//! 	gaming
//! )
//! @address {
//! 	@zip <12345>
//! }
//! @empty ()
//! ```
//!
//! The root is written without braces unless
//! [`AtonOptions::with_root_braces`](crate::AtonOptions::with_root_braces) is set.
//!
//! # Leniency
//!
//! By default a `{` or `(` still open at end of input is closed implicitly, so
//! `@list (a b` decodes to a one-entry dict. With
//! [`AtonOptions::strict`](crate::AtonOptions::strict) this is an
//! unterminated-container error. An unclosed `[` or `<` is always an error.
//!
//! # Limits
//!
//! Nesting is limited to [`DEFAULT_MAX_DEPTH`](crate::options::DEFAULT_MAX_DEPTH)
//! levels by default, counting the document root as level 1. Both the parser and
//! the writer enforce the limit.
//!
//! ```rust
//! use serde_aton::{decode, Error};
//!
//! let deep = format!("@a {}", "(".repeat(1000));
//! assert!(matches!(decode(&deep), Err(Error::DepthExceeded { .. })));
//! ```
//!
//! # Not Supported
//!
//! - Comments
//! - Numeric bases other than decimal
//! - Schemas or document versioning
//! - Streaming or incremental parsing
