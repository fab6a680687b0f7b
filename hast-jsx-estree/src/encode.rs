use serde_json::Value;

use crate::node::{ArrayExpression, Expression, ObjectExpression, Property, UnaryOperator};

/// Turn a JSON-like value into the ESTree expression that evaluates to it.
///
/// - `null`, booleans and strings become literals
/// - numbers go through [`number_to_estree`]
/// - arrays become array expressions
/// - objects become object expressions with literal keys, in map order
pub fn value_to_estree(value: &Value) -> Expression {
    match value {
        Value::Null => Expression::literal(crate::LiteralValue::Null),
        Value::Bool(value) => Expression::literal(*value),
        Value::Number(number) => match number.as_f64() {
            Some(number) => number_to_estree(number),
            // Only reachable with arbitrary precision numbers.
            None => Expression::literal(number.to_string()),
        },
        Value::String(value) => Expression::literal(value.as_str()),
        Value::Array(items) => Expression::ArrayExpression(ArrayExpression {
            elements: items.iter().map(|item| Some(value_to_estree(item))).collect(),
        }),
        Value::Object(map) => Expression::ObjectExpression(ObjectExpression {
            properties: map
                .iter()
                .map(|(key, value)| Property::init(key.as_str(), value_to_estree(value)))
                .collect(),
        }),
    }
}

/// Turn a number into the ESTree expression that evaluates to it.
///
/// ESTree literals only hold non-negative finite numbers, so:
///
/// - `NaN` becomes the identifier `NaN`
/// - `Infinity` becomes the identifier `Infinity`
/// - negative numbers, `-Infinity` and `-0` become `-` applied to their
///   absolute value
pub fn number_to_estree(number: f64) -> Expression {
    if number.is_nan() {
        return Expression::identifier("NaN");
    }
    if number.is_sign_negative() {
        return Expression::unary(UnaryOperator::Minus, number_to_estree(-number));
    }
    if number.is_infinite() {
        return Expression::identifier("Infinity");
    }
    Expression::literal(number)
}
