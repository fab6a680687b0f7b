use hast_jsx_info::Info;
use hast_jsx_style::{StyleError, StyleOptions};
use serde_json::{Map, Value};

use crate::attribute::MdxJsxAttribute;
use crate::collaborators::{
    EstreeEncoder, InfoSchema, InlineStyle, NameCasing, PropertySchema, ReactCasing, StyleParser,
    ValueEncoder,
};
use crate::options::{NameCase, Options, TransformedValue};
use crate::properties::{ListItem, Properties, PropertyValue};
use crate::tracing_macros::{trace, trace_span};

static INFO_SCHEMA: InfoSchema = InfoSchema;
static REACT_CASING: ReactCasing = ReactCasing;
static INLINE_STYLE: InlineStyle = InlineStyle::new(StyleOptions {
    react_compat: false,
});
static ESTREE_ENCODER: EstreeEncoder = EstreeEncoder;

/// Transform hast properties into a list of `mdxJsxAttribute` nodes, using the
/// default schemas, React casing table, style parser and ESTree encoder.
///
/// Only the map's own entries are transformed, in order. Entries whose value
/// is `null`, `false` or `NaN` are dropped, as are falsy values of boolean
/// attributes such as `disabled`.
///
/// # Errors
///
/// Fails if a `style` property holds text the style parser rejects.
pub fn properties_to_mdx_jsx_attributes(
    properties: &Properties,
    options: &Options,
) -> Result<Vec<MdxJsxAttribute>, StyleError> {
    AttributeMapper::new().map(properties, options)
}

/// Maps hast properties to JSX attributes through swappable lookups.
///
/// ```rust
/// use hast_jsx::{AttributeMapper, NameCasing, Options, Properties};
///
/// struct Shouting;
///
/// impl NameCasing for Shouting {
///     fn alternate(&self, property: &str) -> Option<&str> {
///         (property == "classId").then_some("CLASSID")
///     }
/// }
///
/// let properties = Properties::from([("classId", "x")]);
/// let attributes = AttributeMapper::new()
///     .with_casing(&Shouting)
///     .map(&properties, &Options::default())?;
/// assert_eq!(attributes[0].name, "CLASSID");
/// # Ok::<(), hast_jsx::StyleError>(())
/// ```
#[derive(Clone, Copy)]
pub struct AttributeMapper<'a> {
    schema: &'a dyn PropertySchema,
    casing: &'a dyn NameCasing,
    style: &'a dyn StyleParser,
    encoder: &'a dyn ValueEncoder,
}

impl AttributeMapper<'static> {
    /// A mapper using the default collaborators.
    pub fn new() -> Self {
        Self {
            schema: &INFO_SCHEMA,
            casing: &REACT_CASING,
            style: &INLINE_STYLE,
            encoder: &ESTREE_ENCODER,
        }
    }
}

impl Default for AttributeMapper<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AttributeMapper<'a> {
    /// Use `schema` to resolve property keys.
    pub fn with_schema(mut self, schema: &'a dyn PropertySchema) -> Self {
        self.schema = schema;
        self
    }

    /// Use `casing` for alternate name spellings.
    pub fn with_casing(mut self, casing: &'a dyn NameCasing) -> Self {
        self.casing = casing;
        self
    }

    /// Use `style` to parse `style` attribute text.
    pub fn with_style(mut self, style: &'a dyn StyleParser) -> Self {
        self.style = style;
        self
    }

    /// Use `encoder` to turn parsed styles into expressions.
    pub fn with_encoder(mut self, encoder: &'a dyn ValueEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Transform `properties` into attributes.
    ///
    /// See [`properties_to_mdx_jsx_attributes`].
    pub fn map(
        &self,
        properties: &Properties,
        options: &Options,
    ) -> Result<Vec<MdxJsxAttribute>, StyleError> {
        trace_span!("map_properties", space = %options.space, count = properties.len());

        let mut attributes = Vec::with_capacity(properties.len());
        for (key, original) in properties.iter() {
            let info = self.schema.lookup(options.space, key);
            let name = self.name(&info, options.element_attribute_name_case);

            if is_skipped(original, &info) {
                trace!(key, "skipping property");
                continue;
            }

            let value = value_of(original, &info);
            let value = match &options.transform {
                Some(transform) => {
                    let transformed = transform(name, value.as_deref(), original);
                    trace!(name, ?transformed, "transformed value");
                    transformed
                }
                None => value.into(),
            };

            attributes.push(self.attribute(name, value)?);
        }
        Ok(attributes)
    }

    fn name<'i>(&self, info: &'i Info, case: NameCase) -> &'i str
    where
        'a: 'i,
    {
        let property = info.property.as_str();
        if case != NameCase::React || info.space.is_none() {
            return property;
        }
        match self.casing.alternate(property) {
            Some(alternate) => {
                trace!(property, alternate, "using alternate spelling");
                alternate
            }
            None => property,
        }
    }

    fn attribute(&self, name: &str, value: TransformedValue) -> Result<MdxJsxAttribute, StyleError> {
        Ok(match value {
            TransformedValue::None => MdxJsxAttribute::presence(name),
            TransformedValue::Expression(expression) => MdxJsxAttribute::expression(name, expression),
            TransformedValue::Text(text) if name == "style" => {
                let object: Map<String, Value> = self
                    .style
                    .parse(&text)?
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                trace!(declarations = object.len(), "expanded style");
                MdxJsxAttribute::expression(name, self.encoder.encode(&Value::Object(object)))
            }
            TransformedValue::Text(text) => MdxJsxAttribute::text(name, text),
        })
    }
}

/// `null`, `false` and `NaN` never make an attribute. Boolean attributes are
/// also dropped for any other falsy value.
fn is_skipped(value: &PropertyValue, info: &Info) -> bool {
    match value {
        PropertyValue::Null | PropertyValue::Bool(false) => true,
        _ if value.is_nan() => true,
        _ => info.boolean && value.is_falsy(),
    }
}

/// The text of an attribute, or `None` for a presence-only attribute.
fn value_of(value: &PropertyValue, info: &Info) -> Option<String> {
    match value {
        PropertyValue::List(items) if info.comma_separated => Some(join_commas(items)),
        PropertyValue::List(items) => Some(join_spaces(items)),
        PropertyValue::Bool(true) => None,
        other => Some(other.to_string()),
    }
}

fn join_spaces(items: &[ListItem]) -> String {
    join(items, " ").trim().to_owned()
}

/// Joins with `", "`. A trailing empty token stays visible as a trailing
/// separator.
fn join_commas(items: &[ListItem]) -> String {
    let mut joined = join(items, ", ");
    if matches!(items.last(), Some(ListItem::String(last)) if last.is_empty()) {
        joined.push_str(", ");
    }
    joined.trim().to_owned()
}

fn join(items: &[ListItem], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
