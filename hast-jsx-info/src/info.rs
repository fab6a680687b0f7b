use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{self, Types};

/// The property vocabulary used to resolve hast property names.
///
/// Elements inside `<svg>` use a case-sensitive vocabulary with its own
/// attribute spellings (`strokeDashArray` ↔ `stroke-dasharray`), everything
/// else uses the HTML one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// HTML, merged with the ARIA, XML, XLink and XMLNS vocabularies.
    #[default]
    Html,
    /// SVG, merged with the ARIA, XML, XLink and XMLNS vocabularies.
    Svg,
}

impl Schema {
    /// Name of this schema as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Schema::Html => "html",
            Schema::Svg => "svg",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The namespace a known property is defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// HTML attributes.
    Html,
    /// SVG attributes.
    Svg,
    /// `xml:*` attributes.
    Xml,
    /// `xlink:*` attributes.
    #[serde(rename = "xlink")]
    XLink,
    /// `xmlns` and `xmlns:*` attributes.
    Xmlns,
}

/// Everything known about one hast property.
///
/// Unknown properties still produce an `Info`: property and attribute are the
/// looked-up name, `space` is `None`, and every flag is `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    /// Property name as used in hast (`className`).
    pub property: String,
    /// Attribute name as used in markup (`class`).
    pub attribute: String,
    /// Namespace the property is defined in, if it is a known one.
    pub space: Option<Space>,
    /// Presence-only attribute (`disabled`); a falsy value means "not set".
    pub boolean: bool,
    /// Takes the strings `"true"` / `"false"` (`draggable`).
    pub booleanish: bool,
    /// Presence-only or a string (`download`).
    pub overloaded_boolean: bool,
    /// Numeric value (`width`).
    pub number: bool,
    /// Comma separated tokens (`accept`).
    pub comma_separated: bool,
    /// Space separated tokens (`className`).
    pub space_separated: bool,
    /// Comma or space separated tokens (`strokeDashArray` in SVG).
    pub comma_or_space_separated: bool,
    /// Must be set through the DOM property rather than the attribute.
    pub must_use_property: bool,
    /// Whether the property is defined by a schema or is a `data-*` property.
    pub defined: bool,
}

impl Info {
    /// Info for a property no schema knows about.
    pub fn new(property: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            attribute: attribute.into(),
            space: None,
            boolean: false,
            booleanish: false,
            overloaded_boolean: false,
            number: false,
            comma_separated: false,
            space_separated: false,
            comma_or_space_separated: false,
            must_use_property: false,
            defined: false,
        }
    }

    /// Info for a property that is known but carries no namespace or value flags.
    pub(crate) fn defined(property: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            defined: true,
            ..Self::new(property, attribute)
        }
    }

    pub(crate) fn from_types(
        property: &str,
        attribute: String,
        space: Option<Space>,
        types: Types,
    ) -> Self {
        Self {
            property: property.to_owned(),
            attribute,
            space,
            boolean: types.has(schema::BOOL),
            booleanish: types.has(schema::BOOLISH),
            overloaded_boolean: types.has(schema::OVERLOADED),
            number: types.has(schema::NUM),
            comma_separated: types.has(schema::COMMAS),
            space_separated: types.has(schema::SPACES),
            comma_or_space_separated: types.has(schema::COMMAS_OR_SPACES),
            must_use_property: false,
            defined: true,
        }
    }
}
