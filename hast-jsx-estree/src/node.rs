use serde::{Deserialize, Serialize, Serializer};

/// An ESTree expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// `null`, `true`, `1`, `"a"`
    Literal(Literal),
    /// `undefined`, `NaN`, `foo`
    Identifier(Identifier),
    /// `[a, , b]`
    ArrayExpression(ArrayExpression),
    /// `{a: 1}`
    ObjectExpression(ObjectExpression),
    /// `-1`, `!a`
    UnaryExpression(UnaryExpression),
    /// Any other ESTree expression (`a.b`, `f()`, `` `t` ``), kept as its
    /// JSON form and written back unchanged.
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl Expression {
    /// A literal expression.
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expression::Literal(Literal {
            value: value.into(),
        })
    }

    /// An identifier expression.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier { name: name.into() })
    }

    /// An expression node given as ESTree JSON, such as one produced by a
    /// JavaScript parser.
    pub fn other(node: serde_json::Value) -> Self {
        Expression::Other(node)
    }

    /// `operator argument`, as a prefix unary expression.
    pub fn unary(operator: UnaryOperator, argument: Expression) -> Self {
        Expression::UnaryExpression(UnaryExpression {
            operator,
            prefix: true,
            argument: Box::new(argument),
        })
    }
}

/// A literal value node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    /// The literal's value.
    pub value: LiteralValue,
}

/// The value of a [`Literal`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// A number. Negative numbers and non-finite values are not literals in
    /// ESTree; see [`number_to_estree`](crate::number_to_estree).
    Number(f64),
    /// A string.
    String(String),
}

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Null => serializer.serialize_unit(),
            LiteralValue::Bool(value) => serializer.serialize_bool(*value),
            // Integral numbers are written as JSON integers, like JavaScript does.
            LiteralValue::Number(value)
                if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER =>
            {
                serializer.serialize_i64(*value as i64)
            }
            LiteralValue::Number(value) => serializer.serialize_f64(*value),
            LiteralValue::String(value) => serializer.serialize_str(value),
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        LiteralValue::Number(value.into())
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_owned())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

/// An identifier node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier's name.
    pub name: String,
}

/// An array literal. `None` elements are holes (`[a, , b]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    /// The array's elements.
    pub elements: Vec<Option<Expression>>,
}

/// An object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    /// The object's properties, in source order.
    pub properties: Vec<Property>,
}

/// One `key: value` entry of an [`ObjectExpression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Property {
    /// Whether the key is written as `[key]`.
    pub computed: bool,
    /// The property key.
    pub key: Box<Expression>,
    /// Always [`PropertyKind::Init`] for data properties.
    pub kind: PropertyKind,
    /// Whether this is a method shorthand (`a() {}`).
    pub method: bool,
    /// Whether this is a shorthand property (`{a}`).
    pub shorthand: bool,
    /// The property value.
    pub value: Box<Expression>,
}

impl Property {
    /// A plain `"key": value` data property.
    ///
    /// `__proto__` is emitted as a computed key: written plainly it would set
    /// the object's prototype instead of defining a property.
    pub fn init(key: impl Into<String>, value: Expression) -> Self {
        let key = key.into();
        Self {
            computed: key == "__proto__",
            key: Box::new(Expression::literal(key)),
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
            value: Box::new(value),
        }
    }
}

/// The kind of an object [`Property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// A data property.
    Init,
    /// A getter.
    Get,
    /// A setter.
    Set,
}

/// A unary expression such as `-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operator.
    pub operator: UnaryOperator,
    /// Always `true` in ESTree.
    pub prefix: bool,
    /// The operand.
    pub argument: Box<Expression>,
}

/// Operators of a [`UnaryExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// `-`
    #[serde(rename = "-")]
    Minus,
    /// `+`
    #[serde(rename = "+")]
    Plus,
    /// `!`
    #[serde(rename = "!")]
    Not,
    /// `~`
    #[serde(rename = "~")]
    BitwiseNot,
    /// `typeof`
    #[serde(rename = "typeof")]
    Typeof,
    /// `void`
    #[serde(rename = "void")]
    Void,
    /// `delete`
    #[serde(rename = "delete")]
    Delete,
}

/// A whole ESTree program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Program {
    /// How the program is parsed.
    pub source_type: SourceType,
    /// Top-level statements.
    pub body: Vec<Statement>,
}

impl Program {
    /// A module containing the single statement `expression;`.
    ///
    /// This is the shape MDX expects inside attribute value expressions.
    pub fn expression(expression: Expression) -> Self {
        Self {
            source_type: SourceType::Module,
            body: vec![Statement::ExpressionStatement(ExpressionStatement {
                expression,
            })],
        }
    }
}

/// Whether a [`Program`] is a script or a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Classic script.
    Script,
    /// ES module.
    Module,
}

/// An ESTree statement. Only expression statements are modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `expression;`
    ExpressionStatement(ExpressionStatement),
}

/// A statement consisting of one expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// The expression.
    pub expression: Expression,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_serializes_with_type_tag() {
        let value = serde_json::to_value(Expression::literal(42)).unwrap();
        assert_eq!(value, json!({ "type": "Literal", "value": 42 }));

        let value = serde_json::to_value(Expression::literal(1.5)).unwrap();
        assert_eq!(value, json!({ "type": "Literal", "value": 1.5 }));

        let value = serde_json::to_value(Expression::literal(LiteralValue::Null)).unwrap();
        assert_eq!(value, json!({ "type": "Literal", "value": null }));
    }

    #[test]
    fn property_serializes_with_type_tag() {
        let property = Property::init("a", Expression::literal(true));
        assert_eq!(
            serde_json::to_value(property).unwrap(),
            json!({
                "type": "Property",
                "computed": false,
                "key": { "type": "Literal", "value": "a" },
                "kind": "init",
                "method": false,
                "shorthand": false,
                "value": { "type": "Literal", "value": true },
            })
        );
    }

    #[test]
    fn proto_key_is_computed() {
        assert!(Property::init("__proto__", Expression::literal(1)).computed);
        assert!(!Property::init("proto", Expression::literal(1)).computed);
    }

    #[test]
    fn program_wraps_expression() {
        let program = Program::expression(Expression::identifier("undefined"));
        assert_eq!(
            serde_json::to_value(program).unwrap(),
            json!({
                "type": "Program",
                "sourceType": "module",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": { "type": "Identifier", "name": "undefined" },
                }],
            })
        );
    }

    #[test]
    fn other_expressions_pass_through() {
        let node = json!({
            "type": "MemberExpression",
            "object": { "type": "Identifier", "name": "props" },
            "property": { "type": "Identifier", "name": "id" },
            "computed": false,
            "optional": false,
        });
        let expression = Expression::other(node.clone());
        assert_eq!(serde_json::to_value(&expression).unwrap(), node);

        let decoded: Expression = serde_json::from_value(node.clone()).unwrap();
        assert_eq!(decoded, Expression::Other(node));
    }

    #[test]
    fn expression_deserializes_from_estree_json() {
        let expression: Expression =
            serde_json::from_value(json!({ "type": "Literal", "value": 42 })).unwrap();
        assert_eq!(expression, Expression::literal(42));

        let expression: Expression = serde_json::from_value(json!({
            "type": "UnaryExpression",
            "operator": "-",
            "prefix": true,
            "argument": { "type": "Literal", "value": 1 },
        }))
        .unwrap();
        assert_eq!(
            expression,
            Expression::unary(UnaryOperator::Minus, Expression::literal(1))
        );
    }
}
