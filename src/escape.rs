//! Bare and bracketed string forms.
//!
//! A string is written bare when the tokenizer would read it back as exactly
//! one bare token and it holds nothing that needs escaping. Otherwise it is
//! written as `[...]` with `\` and `]` escaped by a backslash. The same rule
//! applies to dict keys after the `@`.

use crate::lexer::{is_separator, is_structural};

/// Returns `true` if `s` cannot be written as a bare token.
///
/// ```rust
/// use serde_aton::escape::needs_brackets;
///
/// assert!(!needs_brackets("reading"));
/// assert!(!needs_brackets("a>b@c"));
/// assert!(needs_brackets(""));
/// assert!(needs_brackets("a]b"));
/// assert!(needs_brackets(r"c:\dir"));
/// assert!(needs_brackets("two words"));
/// assert!(needs_brackets("f(x)"));
/// assert!(needs_brackets("@handle"));
/// ```
#[inline]
#[must_use]
pub fn needs_brackets(s: &str) -> bool {
    s.is_empty()
        || s.starts_with('@')
        || s.chars()
            .any(|ch| is_separator(ch) || is_structural(ch) || ch == ']' || ch == '\\')
}

/// Appends `s` in bracketed form, escaping `\` and `]`.
///
/// ```rust
/// use serde_aton::escape::write_bracketed;
///
/// let mut out = String::new();
/// write_bracketed(&mut out, r"a]b\c");
/// assert_eq!(out, r"[a\]b\\c]");
/// ```
pub fn write_bracketed(output: &mut String, s: &str) {
    output.reserve(s.len() + 2);
    output.push('[');
    for ch in s.chars() {
        if ch == '\\' || ch == ']' {
            output.push('\\');
        }
        output.push(ch);
    }
    output.push(']');
}

/// Appends `s` bare when that is unambiguous, bracketed otherwise.
#[inline]
pub fn write_string(output: &mut String, s: &str) {
    if needs_brackets(s) {
        write_bracketed(output, s);
    } else {
        output.push_str(s);
    }
}

/// Resolves backslash escapes in raw bracketed text: `\x` becomes `x` for any `x`.
///
/// A lone trailing backslash is kept as is.
///
/// ```rust
/// use serde_aton::escape::unescape;
///
/// assert_eq!(unescape(r"a\]b\\c"), r"a]b\c");
/// assert_eq!(unescape(r"\n"), "n");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => result.push(escaped),
                None => result.push('\\'),
            }
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, TokenKind};

    #[test]
    fn test_bare_output_reads_back_as_one_token() {
        for s in ["plain", "x>y", "a@b", "semi;colon", "été"] {
            assert!(!needs_brackets(s), "{s:?}");
            let tokens = tokenize(s);
            assert_eq!(tokens.len(), 2);
            assert_eq!(tokens[0].kind, TokenKind::Bare(s.to_string()));
        }
    }

    #[test]
    fn test_bracketed_output_reads_back_exactly() {
        for s in [
            "",
            "two words",
            "tab\there",
            "line\nbreak",
            "{x}",
            "(",
            "<1>",
            "[",
            "a]b",
            "c:\\path",
            "[x]\\",
            "@k",
        ] {
            let mut out = String::new();
            write_string(&mut out, s);
            let tokens = tokenize(&out);
            assert_eq!(tokens.len(), 2, "{out:?}");
            match &tokens[0].kind {
                TokenKind::Bracketed {
                    raw,
                    terminated: true,
                } => assert_eq!(unescape(raw), s),
                other => panic!("expected bracketed token, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unescape_without_escapes_is_identity() {
        assert_eq!(unescape("no escapes here"), "no escapes here");
        assert_eq!(unescape(r"trailing\"), r"trailing\");
    }
}
