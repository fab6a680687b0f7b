use std::fmt;
use std::sync::Arc;

use hast_jsx_estree::Expression;
use hast_jsx_info::Schema;
use serde::Deserialize;

use crate::properties::PropertyValue;

/// Signature of [`Options::transform`].
///
/// Called with the attribute name, the computed value (`None` for a
/// presence-only attribute) and the property value as it was in the input.
pub type Transform =
    dyn Fn(&str, Option<&str>, &PropertyValue) -> TransformedValue + Send + Sync;

/// Options for [`properties_to_mdx_jsx_attributes`](crate::properties_to_mdx_jsx_attributes).
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// The casing to use for attribute names. This should match the
    /// `elementAttributeNameCase` option given to the MDX compiler.
    pub element_attribute_name_case: NameCase,

    /// The schema the properties belong to.
    pub space: Schema,

    /// Replace the value computed for an attribute.
    #[serde(skip)]
    pub transform: Option<Arc<Transform>>,
}

impl Options {
    /// Set [`element_attribute_name_case`](Self::element_attribute_name_case).
    pub fn with_name_case(mut self, case: NameCase) -> Self {
        self.element_attribute_name_case = case;
        self
    }

    /// Set [`space`](Self::space).
    pub fn with_space(mut self, space: Schema) -> Self {
        self.space = space;
        self
    }

    /// Set [`transform`](Self::transform).
    pub fn with_transform<F, R>(mut self, transform: F) -> Self
    where
        F: Fn(&str, Option<&str>, &PropertyValue) -> R + Send + Sync + 'static,
        R: Into<TransformedValue>,
    {
        self.transform = Some(Arc::new(
            move |name: &str, value: Option<&str>, original: &PropertyValue| {
                transform(name, value, original).into()
            },
        ));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("element_attribute_name_case", &self.element_attribute_name_case)
            .field("space", &self.space)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// How attribute names are cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// Keep the property name the schema resolves to, e.g. `xmlnsXLink`.
    #[serde(alias = "preserve")]
    Html,
    /// Use React's spelling for namespaced attributes, e.g. `xmlnsXlink`.
    #[default]
    #[serde(alias = "alternate")]
    React,
}

/// What a transform returns.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformedValue {
    /// No value: the attribute is emitted presence-only.
    None,
    /// A plain text value.
    Text(String),
    /// An expression value, used as-is.
    Expression(Expression),
}

impl From<()> for TransformedValue {
    fn from((): ()) -> Self {
        TransformedValue::None
    }
}

impl From<&str> for TransformedValue {
    fn from(value: &str) -> Self {
        TransformedValue::Text(value.to_owned())
    }
}

impl From<String> for TransformedValue {
    fn from(value: String) -> Self {
        TransformedValue::Text(value)
    }
}

impl From<Option<String>> for TransformedValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(TransformedValue::None, TransformedValue::Text)
    }
}

impl From<Option<&str>> for TransformedValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(TransformedValue::None, Into::into)
    }
}

impl From<Expression> for TransformedValue {
    fn from(value: Expression) -> Self {
        TransformedValue::Expression(value)
    }
}
