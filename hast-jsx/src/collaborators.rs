//! The lookups and encoders the mapper depends on.
//!
//! [`AttributeMapper`](crate::AttributeMapper) only talks to these traits, so
//! each can be swapped for a table of your own. The unit structs here are the
//! defaults, backed by `hast-jsx-info`, `hast-jsx-style` and `hast-jsx-estree`.

use hast_jsx_estree::{Expression, value_to_estree};
use hast_jsx_info::{Info, Schema, find, hast_to_react};
use hast_jsx_style::{StyleError, StyleOptions, style_to_object};
use serde_json::Value;

/// Resolves a property key to what the schema knows about it.
pub trait PropertySchema {
    /// Look `key` up in `schema`. Must return an [`Info`] for every key.
    fn lookup(&self, schema: Schema, key: &str) -> Info;
}

/// Alternate spellings for namespaced property names.
pub trait NameCasing {
    /// The alternate spelling of `property`, if there is one.
    fn alternate(&self, property: &str) -> Option<&str>;
}

/// Parses the text of a `style` attribute.
pub trait StyleParser {
    /// Parse `style` into ordered `(key, value)` pairs.
    fn parse(&self, style: &str) -> Result<Vec<(String, String)>, StyleError>;
}

/// Turns a plain value into an expression.
pub trait ValueEncoder {
    /// Encode `value` as the expression that evaluates to it.
    fn encode(&self, value: &Value) -> Expression;
}

/// The html and svg schemas of [`hast_jsx_info`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoSchema;

impl PropertySchema for InfoSchema {
    fn lookup(&self, schema: Schema, key: &str) -> Info {
        find(schema, key)
    }
}

/// React's spellings, from [`hast_to_react`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactCasing;

impl NameCasing for ReactCasing {
    fn alternate(&self, property: &str) -> Option<&str> {
        hast_to_react(property)
    }
}

/// Inline style parsing with [`style_to_object`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyle {
    /// Options passed to the parser.
    pub options: StyleOptions,
}

impl InlineStyle {
    /// A parser with the given options.
    pub const fn new(options: StyleOptions) -> Self {
        Self { options }
    }
}

impl StyleParser for InlineStyle {
    fn parse(&self, style: &str) -> Result<Vec<(String, String)>, StyleError> {
        style_to_object(style, &self.options)
    }
}

/// ESTree encoding with [`value_to_estree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EstreeEncoder;

impl ValueEncoder for EstreeEncoder {
    fn encode(&self, value: &Value) -> Expression {
        value_to_estree(value)
    }
}
