//! Style parsing error types.

use core::fmt;

/// Error returned when style text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleError {
    kind: StyleErrorKind,
    line: usize,
    column: usize,
}

impl StyleError {
    /// Create an error of the given kind at a 1-based line and column.
    pub const fn new(kind: StyleErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Get the error kind.
    pub const fn kind(&self) -> StyleErrorKind {
        self.kind
    }

    /// 1-based line the error was found on.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// 1-based column the error was found at.
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

impl std::error::Error for StyleError {}

/// Specific kinds of style errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleErrorKind {
    /// A property name is not followed by `:`.
    MissingColon,
    /// A `/*` comment has no closing `*/`.
    UnterminatedComment,
}

impl fmt::Display for StyleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleErrorKind::MissingColon => f.write_str("property missing ':'"),
            StyleErrorKind::UnterminatedComment => f.write_str("End of comment missing"),
        }
    }
}
