//! Inline CSS declaration parser.
//!
//! Grammar, per declaration:
//!
//! ```text
//! comment*  property  comment?  ':'  value  [;\s]*
//! ```
//!
//! where `property` is `[-#/*\\\w]+` with an optional `[hack]` suffix, and
//! `value` is a run of quoted strings, parenthesised groups, or any character
//! other than `;` and `}`.

use crate::error::{StyleError, StyleErrorKind};
use crate::tracing_macros::trace;

/// One `property: value` pair, with comments removed and whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property as written, for example `background-color`.
    pub property: String,
    /// The value, for example `#dedede`. May be empty.
    pub value: String,
    /// 1-based line the declaration starts on.
    pub line: usize,
    /// 1-based column the declaration starts at.
    pub column: usize,
}

/// Parse inline style text into its declarations, in source order.
pub fn parse(style: &str) -> Result<Vec<Declaration>, StyleError> {
    if style.is_empty() {
        return Ok(Vec::new());
    }

    let mut parser = Parser {
        rest: style,
        line: 1,
        column: 1,
    };
    parser.whitespace();
    parser.declarations()
}

struct Parser<'a> {
    rest: &'a str,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn declarations(&mut self) -> Result<Vec<Declaration>, StyleError> {
        let mut declarations = Vec::new();
        self.comments()?;
        while let Some(declaration) = self.declaration()? {
            trace!(
                property = %declaration.property,
                value = %declaration.value,
                line = declaration.line,
                "parsed declaration"
            );
            declarations.push(declaration);
            self.comments()?;
        }
        Ok(declarations)
    }

    fn declaration(&mut self) -> Result<Option<Declaration>, StyleError> {
        let (line, column) = (self.line, self.column);
        let Some(len) = property_len(self.rest) else {
            return Ok(None);
        };
        let property = self.advance(len);

        self.comment()?;

        if !self.rest.starts_with(':') {
            return Err(self.error(StyleErrorKind::MissingColon));
        }
        self.advance(1);
        self.whitespace();

        let value = match value_len(self.rest) {
            0 => "",
            len => self.advance(len),
        };

        let declaration = Declaration {
            property: strip_comments(property).trim().to_owned(),
            value: strip_comments(value).trim().to_owned(),
            line,
            column,
        };

        self.whitespace();
        let separators = self
            .rest
            .find(|c: char| c != ';' && !c.is_whitespace())
            .unwrap_or(self.rest.len());
        self.advance(separators);

        Ok(Some(declaration))
    }

    fn comments(&mut self) -> Result<(), StyleError> {
        while self.comment()? {}
        Ok(())
    }

    /// Consume one `/* ... */` comment and the whitespace after it.
    fn comment(&mut self) -> Result<bool, StyleError> {
        if !self.rest.starts_with("/*") {
            return Ok(false);
        }
        let Some(end) = self.rest[2..].find("*/") else {
            return Err(self.error(StyleErrorKind::UnterminatedComment));
        };

        let body = &self.rest[2..2 + end];
        self.column += 2;
        self.update_position(body);
        self.rest = &self.rest[2 + end + 2..];
        self.column += 2;

        self.whitespace();
        Ok(true)
    }

    fn whitespace(&mut self) {
        let len = self.rest.len() - self.rest.trim_start().len();
        self.advance(len);
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let (consumed, rest) = self.rest.split_at(len);
        self.update_position(consumed);
        self.rest = rest;
        consumed
    }

    fn update_position(&mut self, consumed: &str) {
        self.line += consumed.matches('\n').count();
        match consumed.rfind('\n') {
            Some(index) => self.column = consumed[index..].chars().count(),
            None => self.column += consumed.chars().count(),
        }
    }

    fn error(&self, kind: StyleErrorKind) -> StyleError {
        StyleError::new(kind, self.line, self.column)
    }
}

fn is_property_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'#' | b'/' | b'*' | b'\\')
}

/// Length of the property at the start of `input`, including trailing
/// whitespace, or `None` if no property starts there.
fn property_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut len = bytes.iter().take_while(|b| is_property_byte(**b)).count();
    if len == 0 {
        return None;
    }

    // IE hacks such as `width[hack]`.
    if bytes.get(len) == Some(&b'[') {
        let inner = bytes[len + 1..]
            .iter()
            .take_while(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'_' | b'-'))
            .count();
        if inner > 0 && bytes.get(len + 1 + inner) == Some(&b']') {
            len += inner + 2;
        }
    }

    let tail = &input[len..];
    Some(len + tail.len() - tail.trim_start().len())
}

/// Length of the value at the start of `input`.
fn value_len(input: &str) -> usize {
    let mut len = 0;
    while let Some(c) = input[len..].chars().next() {
        len += match c {
            ';' | '}' => break,
            '\'' | '"' => quoted_len(&input[len..], c).unwrap_or(1),
            '(' => input[len..].find(')').map_or(1, |end| end + 1),
            c => c.len_utf8(),
        };
    }
    len
}

/// Length of a quoted string at the start of `input`, quotes included.
///
/// The string may not span lines. `\'` (or `\"`) does not close the string,
/// unless no later quote does, in which case the last escaped quote closes it.
fn quoted_len(input: &str, quote: char) -> Option<usize> {
    let mut last_escaped = None;
    let mut chars = input.char_indices().skip(1).peekable();
    while let Some((index, c)) = chars.next() {
        if c == quote {
            return Some(index + 1);
        }
        if is_line_terminator(c) {
            break;
        }
        if c == '\\' && chars.peek().is_some_and(|(_, next)| *next == quote) {
            if let Some((quote_index, _)) = chars.next() {
                last_escaped = Some(quote_index + 1);
            }
        }
    }
    last_escaped
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Remove every complete `/* ... */` comment.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        let Some(end) = rest[start + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(style: &str) -> Vec<(String, String)> {
        parse(style)
            .unwrap()
            .into_iter()
            .map(|d| (d.property, d.value))
            .collect()
    }

    #[test]
    fn test_property_len() {
        assert_eq!(property_len("color: red"), Some(5));
        assert_eq!(property_len("color : red"), Some(6));
        assert_eq!(property_len("*zoom: 1"), Some(5));
        assert_eq!(property_len("width[hack]: 1"), Some(11));
        assert_eq!(property_len("width[]: 1"), Some(5));
        assert_eq!(property_len(": red"), None);
        assert_eq!(property_len(""), None);
    }

    #[test]
    fn test_value_len() {
        assert_eq!(value_len("red; top: 0"), 3);
        assert_eq!(value_len("url(a;b); x"), 8);
        assert_eq!(value_len("'a;b'; x"), 5);
        assert_eq!(value_len("\"a}b\""), 5);
        assert_eq!(value_len("red } x"), 4);
        assert_eq!(value_len(""), 0);
    }

    #[test]
    fn test_unclosed_quote_is_plain_text() {
        assert_eq!(value_len("'abc; x"), 4);
        assert_eq!(value_len("(abc; x"), 4);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(quoted_len(r"'a\'b'", '\''), Some(6));
        assert_eq!(quoted_len(r"'a\'b", '\''), Some(4));
        assert_eq!(quoted_len("'a\nb'", '\''), None);
    }

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a/* x */b"), "ab");
        assert_eq!(strip_comments("a/**/b/* c **/d"), "abd");
        assert_eq!(strip_comments("a/* open"), "a/* open");
    }

    #[test]
    fn test_basic_declarations() {
        assert_eq!(
            pairs("color: red; top: 0"),
            vec![
                ("color".to_string(), "red".to_string()),
                ("top".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n ").unwrap().is_empty());
        assert!(parse(";;").unwrap().is_empty());
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(pairs("color:"), vec![("color".to_string(), String::new())]);
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(
            pairs("/* lead */ color /* mid */: red /* tail */; /* end */"),
            vec![("color".to_string(), "red".to_string())]
        );
    }

    #[test]
    fn test_stops_where_no_property_starts() {
        assert_eq!(
            pairs("color: red; {top: 0}"),
            vec![("color".to_string(), "red".to_string())]
        );
    }

    #[test]
    fn test_positions() {
        let declarations = parse("color: red;\n  top: 0").unwrap();
        assert_eq!((declarations[0].line, declarations[0].column), (1, 1));
        assert_eq!((declarations[1].line, declarations[1].column), (2, 3));
    }

    #[test]
    fn test_missing_colon() {
        let error = parse("color red").unwrap_err();
        assert_eq!(error.kind(), StyleErrorKind::MissingColon);
        assert_eq!((error.line(), error.column()), (1, 7));
    }

    #[test]
    fn test_unterminated_comment() {
        let error = parse("color: red; /* open").unwrap_err();
        assert_eq!(error.kind(), StyleErrorKind::UnterminatedComment);
        assert_eq!((error.line(), error.column()), (1, 13));
    }
}
