//! ATON tokenizer.
//!
//! The [`Lexer`] turns raw text into a flat sequence of [`Token`]s. It never
//! fails: malformed content (an unclosed `[` or `<`) is passed through with
//! `terminated: false`, and the parser decides what to reject.
//!
//! ```rust
//! use serde_aton::lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<_> = tokenize("@a (x)").into_iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::Key { text: "a".to_string(), bracketed: false, terminated: true },
//!     TokenKind::ListOpen,
//!     TokenKind::Bare("x".to_string()),
//!     TokenKind::ListClose,
//!     TokenKind::Eof,
//! ]);
//! ```

use std::fmt;

/// Whitespace that separates tokens.
#[inline]
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Characters that end a bare run.
#[inline]
pub(crate) fn is_structural(ch: char) -> bool {
    matches!(ch, '{' | '}' | '(' | ')' | '<' | '[')
}

/// The lexical category of a token, with its text where it has one.
///
/// Bracketed text (`Key` with `bracketed: true` and `Bracketed`) is kept raw,
/// backslash escapes included.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    DictOpen,
    DictClose,
    ListOpen,
    ListClose,
    /// `@name` or `@[name]`, without the `@`.
    Key {
        text: String,
        bracketed: bool,
        terminated: bool,
    },
    /// `[text]`, without the brackets.
    Bracketed { raw: String, terminated: bool },
    /// `<text>`, without the angle brackets.
    Angle { raw: String, terminated: bool },
    Bare(String),
    Eof,
}

/// A token and the 1-based position of its first character.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::DictOpen => write!(f, "'{{'"),
            TokenKind::DictClose => write!(f, "'}}'"),
            TokenKind::ListOpen => write!(f, "'('"),
            TokenKind::ListClose => write!(f, "')'"),
            TokenKind::Key {
                text,
                bracketed: true,
                ..
            } => write!(f, "key '@[{}]'", text),
            TokenKind::Key { text, .. } => write!(f, "key '@{}'", text),
            TokenKind::Bracketed { raw, .. } => write!(f, "string '[{}]'", raw),
            TokenKind::Angle { raw, .. } => write!(f, "scalar '<{}>'", raw),
            TokenKind::Bare(text) => write!(f, "string '{}'", text),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Streaming tokenizer over a text buffer.
///
/// As an [`Iterator`] it yields every token up to and including a single
/// [`TokenKind::Eof`].
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`. A leading byte-order mark is skipped.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: input.strip_prefix('\u{feff}').map_or(0, |_| '\u{feff}'.len_utf8()),
            line: 1,
            column: 1,
            done: false,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_separators(&mut self) {
        while let Some(ch) = self.peek_char() {
            if is_separator(ch) {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a maximal run of characters that are neither separators nor structural.
    fn read_bare(&mut self) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_separator(ch) || is_structural(ch) {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }

    /// Reads up to the next unescaped `]`, after the opening `[` was consumed.
    /// Returns the raw text and whether the closing bracket was found.
    fn read_bracketed(&mut self) -> (String, bool) {
        let start = self.position;
        loop {
            match self.next_char() {
                Some(']') => {
                    let end = self.position - 1;
                    return (self.input[start..end].to_string(), true);
                }
                Some('\\') => {
                    self.next_char();
                }
                Some(_) => {}
                None => return (self.input[start..].to_string(), false),
            }
        }
    }

    /// Reads up to the next `>`, after the opening `<` was consumed.
    fn read_angle(&mut self) -> (String, bool) {
        let start = self.position;
        while let Some(ch) = self.next_char() {
            if ch == '>' {
                let end = self.position - 1;
                return (self.input[start..end].to_string(), true);
            }
        }
        (self.input[start..].to_string(), false)
    }

    /// Scans the next token. Returns `Eof` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_separators();
        let (line, col) = (self.line, self.column);

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(ch) => match ch {
                '{' | '}' | '(' | ')' => {
                    self.next_char();
                    match ch {
                        '{' => TokenKind::DictOpen,
                        '}' => TokenKind::DictClose,
                        '(' => TokenKind::ListOpen,
                        _ => TokenKind::ListClose,
                    }
                }
                '[' => {
                    self.next_char();
                    let (raw, terminated) = self.read_bracketed();
                    TokenKind::Bracketed { raw, terminated }
                }
                '<' => {
                    self.next_char();
                    let (raw, terminated) = self.read_angle();
                    TokenKind::Angle { raw, terminated }
                }
                '@' => {
                    self.next_char();
                    if self.peek_char() == Some('[') {
                        self.next_char();
                        let (text, terminated) = self.read_bracketed();
                        TokenKind::Key {
                            text,
                            bracketed: true,
                            terminated,
                        }
                    } else {
                        TokenKind::Key {
                            text: self.read_bare().to_string(),
                            bracketed: false,
                            terminated: true,
                        }
                    }
                }
                _ => TokenKind::Bare(self.read_bare().to_string()),
            },
        };

        Token { kind, line, col }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}

/// Tokenizes the whole input. The last token is always [`TokenKind::Eof`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn bare(s: &str) -> TokenKind {
        TokenKind::Bare(s.to_string())
    }

    #[test]
    fn test_empty_input_yields_eof_only() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_leading_byte_order_mark_is_skipped() {
        let tokens = tokenize("\u{feff}@a x");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Key { text: "a".to_string(), bracketed: false, terminated: true }
        );
        assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
        assert_eq!(kinds("a\u{feff}"), vec![bare("a\u{feff}"), TokenKind::Eof]);
    }

    #[test]
    fn test_structural_tokens_split_bare_runs() {
        assert_eq!(
            kinds("a{b}c(d)e"),
            vec![
                bare("a"),
                TokenKind::DictOpen,
                bare("b"),
                TokenKind::DictClose,
                bare("c"),
                TokenKind::ListOpen,
                bare("d"),
                TokenKind::ListClose,
                bare("e"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_bare_run_keeps_closing_brackets_and_at() {
        assert_eq!(kinds("a]b>c@d"), vec![bare("a]b>c@d"), TokenKind::Eof]);
    }

    #[test]
    fn test_bracketed_keeps_escapes_raw() {
        assert_eq!(
            kinds(r"[a\]b\\c]"),
            vec![
                TokenKind::Bracketed {
                    raw: r"a\]b\\c".to_string(),
                    terminated: true
                },
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_bracketed_spans_whitespace_and_structure() {
        assert_eq!(
            kinds("[x { y\n}]"),
            vec![
                TokenKind::Bracketed {
                    raw: "x { y\n}".to_string(),
                    terminated: true
                },
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_literals_pass_through() {
        assert_eq!(
            kinds("[abc"),
            vec![
                TokenKind::Bracketed {
                    raw: "abc".to_string(),
                    terminated: false
                },
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("<12"),
            vec![
                TokenKind::Angle {
                    raw: "12".to_string(),
                    terminated: false
                },
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds(r"[ends with \"),
            vec![
                TokenKind::Bracketed {
                    raw: r"ends with \".to_string(),
                    terminated: false
                },
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            kinds("@name @[two words] @ x"),
            vec![
                TokenKind::Key {
                    text: "name".to_string(),
                    bracketed: false,
                    terminated: true
                },
                TokenKind::Key {
                    text: "two words".to_string(),
                    bracketed: true,
                    terminated: true
                },
                TokenKind::Key {
                    text: String::new(),
                    bracketed: false,
                    terminated: true
                },
                bare("x"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_key_stops_at_structural() {
        assert_eq!(
            kinds("@a<1>"),
            vec![
                TokenKind::Key {
                    text: "a".to_string(),
                    bracketed: false,
                    terminated: true
                },
                TokenKind::Angle {
                    raw: "1".to_string(),
                    terminated: true
                },
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("@a <1>\n  @b été");
        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.col)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 4), (2, 3), (2, 6), (2, 9)]);
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.next().is_some());
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("} @k");
        assert_eq!(tokens[0].to_string(), "'}'");
        assert_eq!(tokens[1].to_string(), "key '@k'");
        assert_eq!(tokens[2].to_string(), "end of input");
    }
}
