//! Configuration options for ATON encoding and decoding.
//!
//! This module provides types to customize both directions:
//!
//! - [`AtonOptions`]: Main configuration struct
//! - [`Indent`]: Indentation unit per nesting level (tab or spaces)
//! - [`LineEnding`]: Line terminator used by the writer
//!
//! ## Examples
//!
//! ```rust
//! use serde_aton::{AtonOptions, Indent, LineEnding, Value, AtonMap, encode_with_options};
//!
//! let mut root = AtonMap::new();
//! root.insert("tags".to_string(), Value::List(vec![Value::from("a")]));
//!
//! let options = AtonOptions::new()
//!     .with_indent(Indent::Spaces(2))
//!     .with_line_ending(LineEnding::Lf);
//! let text = encode_with_options(&Value::Dict(root), &options).unwrap();
//! assert_eq!(text, "@tags (\n  a\n)\n");
//! ```

/// Indentation unit written once per nesting level.
///
/// # Examples
///
/// ```rust
/// use serde_aton::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text of a single indentation level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Line terminator written after each entry or element.
///
/// ```rust
/// use serde_aton::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for ATON encoding and decoding.
///
/// The writer reads `indent`, `line_ending`, `root_braces`, and `max_depth`.
/// The parser reads `max_depth` and `strict`.
///
/// # Examples
///
/// ```rust
/// use serde_aton::{AtonOptions, Indent};
///
/// // Defaults: tab indent, LF, root written without braces, lenient parsing
/// let options = AtonOptions::new();
/// assert_eq!(options.indent, Indent::Tab);
/// assert!(!options.root_braces);
/// assert!(!options.strict);
///
/// // Strict parsing rejects containers left open at end of input
/// let options = AtonOptions::strict().with_max_depth(16);
/// assert!(options.strict);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug)]
pub struct AtonOptions {
    pub indent: Indent,
    pub line_ending: LineEnding,
    /// Write the document root as `{ ... }` instead of a bare `@key value` sequence.
    pub root_braces: bool,
    /// Maximum container nesting; the document root counts as depth 1.
    pub max_depth: usize,
    /// Reject `{`/`(` that are still open at end of input.
    pub strict: bool,
}

/// Default nesting limit shared by the parser and the writer.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for AtonOptions {
    fn default() -> Self {
        AtonOptions {
            indent: Indent::default(),
            line_ending: LineEnding::default(),
            root_braces: false,
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

impl AtonOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for strict parsing, where every `{` and `(` must be closed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_aton::{decode_with_options, AtonOptions, Error};
    ///
    /// let err = decode_with_options("@list (a b", &AtonOptions::strict()).unwrap_err();
    /// assert!(matches!(err, Error::UnterminatedContainer { .. }));
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        AtonOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the line ending.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Chooses whether the document root is wrapped in braces.
    ///
    /// Both forms decode to the same value.
    ///
    /// ```rust
    /// use serde_aton::{encode_with_options, AtonOptions, aton};
    ///
    /// let doc = aton!({ "a": 1 });
    /// let braced = encode_with_options(&doc, &AtonOptions::new().with_root_braces(true)).unwrap();
    /// assert_eq!(braced, "{\n\t@a <1>\n}\n");
    /// ```
    #[must_use]
    pub fn with_root_braces(mut self, root_braces: bool) -> Self {
        self.root_braces = root_braces;
        self
    }

    /// Sets the maximum nesting depth.
    ///
    /// The document root always occupies depth 1, so a limit of 0 acts as 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The nesting limit the parser and writer enforce, never below 1.
    ///
    /// ```rust
    /// use serde_aton::AtonOptions;
    ///
    /// assert_eq!(AtonOptions::new().with_max_depth(0).depth_limit(), 1);
    /// assert_eq!(AtonOptions::new().with_max_depth(8).depth_limit(), 8);
    /// ```
    #[must_use]
    pub fn depth_limit(&self) -> usize {
        self.max_depth.max(1)
    }

    /// Enables or disables strict parsing.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
