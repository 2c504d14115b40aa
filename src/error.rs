//! Error types for ATON encoding and decoding.
//!
//! This module provides error reporting with the position of the offending
//! token, so a bad document can be fixed without guessing.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: unexpected tokens and unterminated containers, with line/column
//! - **Invalid Numerals**: angle-bracketed content that is not a bool, nil, or number
//! - **Depth Errors**: nesting beyond the configured maximum depth
//! - **Unsupported Values**: values that cannot be represented as an ATON document
//! - **I/O Errors**: reader/writer failures
//!
//! Every decode either returns one [`Value`](crate::Value) or the first error found;
//! there is no recovery mode and no multi-error aggregation.
//!
//! ## Examples
//!
//! ```rust
//! use serde_aton::{decode, Error};
//!
//! let err = decode("@port <eighty>").unwrap_err();
//! assert!(matches!(err, Error::InvalidNumeral { .. }));
//! assert_eq!(err.position(), Some((1, 7)));
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of bracketed construct an [`Error::UnterminatedContainer`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// `{ ... }`
    Dict,
    /// `( ... )`
    List,
    /// `[ ... ]`
    String,
    /// `< ... >`
    Scalar,
}

impl ContainerKind {
    /// Returns the opening bracket of this container.
    #[must_use]
    pub const fn open(&self) -> char {
        match self {
            ContainerKind::Dict => '{',
            ContainerKind::List => '(',
            ContainerKind::String => '[',
            ContainerKind::Scalar => '<',
        }
    }

    /// Returns the closing bracket of this container.
    #[must_use]
    pub const fn close(&self) -> char {
        match self {
            ContainerKind::Dict => '}',
            ContainerKind::List => ')',
            ContainerKind::String => ']',
            ContainerKind::Scalar => '>',
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContainerKind::Dict => "dict",
            ContainerKind::List => "list",
            ContainerKind::String => "bracketed string",
            ContainerKind::Scalar => "angle scalar",
        };
        write!(f, "{} '{}'", name, self.open())
    }
}

/// Represents all possible errors that can occur during ATON encoding/decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token appeared where the grammar does not allow it.
    #[error("Unexpected {token} at line {line}, column {col}")]
    UnexpectedToken {
        token: String,
        line: usize,
        col: usize,
    },

    /// A container or delimited literal reached end of input without its closing bracket.
    #[error("Unterminated {kind} opened at line {line}, column {col}: expected '{}' before end of input", .kind.close())]
    UnterminatedContainer {
        kind: ContainerKind,
        line: usize,
        col: usize,
    },

    /// Angle-bracketed content that is not `true`, `false`, `nil`, or a number.
    #[error("Invalid numeral <{token}> at line {line}, column {col}")]
    InvalidNumeral {
        token: String,
        line: usize,
        col: usize,
    },

    /// Containers nested deeper than the configured limit.
    #[error("Nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A value that cannot be written as ATON.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_aton::Error;
    ///
    /// let err = Error::unexpected_token("'}'", 3, 1);
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn unexpected_token(token: &str, line: usize, col: usize) -> Self {
        Error::UnexpectedToken {
            token: token.to_string(),
            line,
            col,
        }
    }

    /// Creates an unterminated-container error pointing at the opening bracket.
    pub fn unterminated(kind: ContainerKind, line: usize, col: usize) -> Self {
        Error::UnterminatedContainer { kind, line, col }
    }

    /// Creates an invalid-numeral error carrying the raw angle content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_aton::Error;
    ///
    /// let err = Error::invalid_numeral("abc", 1, 4);
    /// assert_eq!(err.to_string(), "Invalid numeral <abc> at line 1, column 4");
    /// ```
    pub fn invalid_numeral(token: &str, line: usize, col: usize) -> Self {
        Error::InvalidNumeral {
            token: token.to_string(),
            line,
            col,
        }
    }

    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    /// Creates an unsupported-value error for values that have no ATON representation.
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for structural syntax errors (unexpected or unterminated tokens).
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedToken { .. } | Error::UnterminatedContainer { .. }
        )
    }

    /// Returns the 1-based `(line, column)` the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnexpectedToken { line, col, .. }
            | Error::UnterminatedContainer { line, col, .. }
            | Error::InvalidNumeral { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
