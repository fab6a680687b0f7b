use hast_jsx_estree::{Expression, Program};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One JSX attribute, as found in an mdast `mdxJsxFlowElement` or
/// `mdxJsxTextElement`.
///
/// Serializes to the mdast node shape:
///
/// ```json
/// { "type": "mdxJsxAttribute", "name": "id", "value": "main" }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MdxJsxAttribute {
    /// The attribute name.
    pub name: String,
    /// The attribute value.
    pub value: AttributeValue,
}

impl MdxJsxAttribute {
    /// An attribute without a value, such as `<input disabled />`.
    pub fn presence(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Absent,
        }
    }

    /// An attribute with a string value.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    /// An attribute whose value is an expression, such as `style={{...}}`.
    pub fn expression(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Expression(expression),
        }
    }
}

/// The value of an [`MdxJsxAttribute`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// No value; the attribute is present only.
    Absent,
    /// A string value.
    Text(String),
    /// An expression value.
    Expression(Expression),
}

impl AttributeValue {
    /// The text value, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The expression value, if this is one.
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            AttributeValue::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

impl Serialize for MdxJsxAttribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self.value {
            AttributeValue::Absent => 2,
            _ => 3,
        };
        let mut node = serializer.serialize_struct("MdxJsxAttribute", fields)?;
        node.serialize_field("type", "mdxJsxAttribute")?;
        node.serialize_field("name", &self.name)?;
        match &self.value {
            AttributeValue::Absent => node.skip_field("value")?,
            AttributeValue::Text(text) => node.serialize_field("value", text)?,
            AttributeValue::Expression(expression) => {
                node.serialize_field("value", &ValueExpression::new(expression))?
            }
        }
        node.end()
    }
}

/// `mdxJsxAttributeValueExpression`: an empty source string plus the parsed
/// program in `data.estree`.
struct ValueExpression {
    estree: Program,
}

impl ValueExpression {
    fn new(expression: &Expression) -> Self {
        Self {
            estree: Program::expression(expression.clone()),
        }
    }
}

impl Serialize for ValueExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Data<'a> {
            estree: &'a Program,
        }

        let mut node = serializer.serialize_struct("MdxJsxAttributeValueExpression", 3)?;
        node.serialize_field("type", "mdxJsxAttributeValueExpression")?;
        node.serialize_field("value", "")?;
        node.serialize_field(
            "data",
            &Data {
                estree: &self.estree,
            },
        )?;
        node.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_has_no_value_key() {
        let value = serde_json::to_value(MdxJsxAttribute::presence("disabled")).unwrap();
        assert_eq!(value, json!({ "type": "mdxJsxAttribute", "name": "disabled" }));
    }

    #[test]
    fn test_text_value() {
        let value = serde_json::to_value(MdxJsxAttribute::text("id", "main")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "mdxJsxAttribute", "name": "id", "value": "main" })
        );
    }

    #[test]
    fn test_expression_value_is_wrapped_in_program() {
        let attribute = MdxJsxAttribute::expression("id", Expression::literal(42));
        assert_eq!(
            serde_json::to_value(attribute).unwrap(),
            json!({
                "type": "mdxJsxAttribute",
                "name": "id",
                "value": {
                    "type": "mdxJsxAttributeValueExpression",
                    "value": "",
                    "data": {
                        "estree": {
                            "type": "Program",
                            "sourceType": "module",
                            "body": [{
                                "type": "ExpressionStatement",
                                "expression": { "type": "Literal", "value": 42 },
                            }],
                        },
                    },
                },
            })
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(MdxJsxAttribute::text("a", "b").value.as_text(), Some("b"));
        assert_eq!(MdxJsxAttribute::presence("a").value.as_text(), None);
        assert!(
            MdxJsxAttribute::expression("a", Expression::literal(1))
                .value
                .as_expression()
                .is_some()
        );
    }
}
