use std::sync::{Arc, Mutex};

use hast_jsx::{
    AttributeValue, Expression, ListItem, MdxJsxAttribute, NameCase, Options, Properties,
    PropertyValue, Schema, properties_to_mdx_jsx_attributes,
};
use serde_json::{Value, json};

fn map(properties: &Properties, options: &Options) -> Value {
    let attributes = properties_to_mdx_jsx_attributes(properties, options).unwrap();
    serde_json::to_value(attributes).unwrap()
}

#[test]
fn skip_over_unwanted_values() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([
        ("null", PropertyValue::Null),
        ("false", PropertyValue::Bool(false)),
        ("NaN", PropertyValue::Number(f64::NAN)),
        ("disabled", PropertyValue::from("")),
    ]);

    assert_eq!(map(&properties, &Options::default()), json!([]));
}

#[test]
fn numeric_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("width", 1080), ("height", 0)]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([
            { "type": "mdxJsxAttribute", "name": "width", "value": "1080" },
            { "type": "mdxJsxAttribute", "name": "height", "value": "0" },
        ])
    );
}

#[test]
fn boolean_true_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("disabled", true)]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([{ "type": "mdxJsxAttribute", "name": "disabled" }])
    );
}

#[test]
fn space_separated_html_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("className", vec!["button", "primary"])]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([{ "type": "mdxJsxAttribute", "name": "className", "value": "button primary" }])
    );
}

#[test]
fn space_separated_svg_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("className", vec!["button", "primary"])]);
    let options = Options::default().with_space(Schema::Svg);

    assert_eq!(
        map(&properties, &options),
        json!([{ "type": "mdxJsxAttribute", "name": "className", "value": "button primary" }])
    );
}

#[test]
fn comma_separated_html_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("accept", vec!["image/*", "video/*"])]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([{ "type": "mdxJsxAttribute", "name": "accept", "value": "image/*, video/*" }])
    );
}

#[test]
fn comma_separated_svg_value() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("glyphName", vec!["A", "B"])]);
    let options = Options::default().with_space(Schema::Svg);

    assert_eq!(
        map(&properties, &options),
        json!([{ "type": "mdxJsxAttribute", "name": "glyphName", "value": "A, B" }])
    );
}

#[test]
fn element_attribute_name_case_html() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("xmlnsXLink", "http://www.w3.org/1999/xlink")]);
    let options = Options::default().with_name_case(NameCase::Html);

    assert_eq!(
        map(&properties, &options),
        json!([{
            "type": "mdxJsxAttribute",
            "name": "xmlnsXLink",
            "value": "http://www.w3.org/1999/xlink",
        }])
    );
}

#[test]
fn element_attribute_name_case_react() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("xmlnsXLink", "http://www.w3.org/1999/xlink")]);
    let options = Options::default().with_name_case(NameCase::React);

    assert_eq!(
        map(&properties, &options),
        json!([{
            "type": "mdxJsxAttribute",
            "name": "xmlnsXlink",
            "value": "http://www.w3.org/1999/xlink",
        }])
    );
}

#[test]
fn element_attribute_name_case_default() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("xmlnsXLink", "http://www.w3.org/1999/xlink")]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([{
            "type": "mdxJsxAttribute",
            "name": "xmlnsXlink",
            "value": "http://www.w3.org/1999/xlink",
        }])
    );
}

#[test]
fn svg_names_get_react_spelling() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([
        ("strokeDashArray", PropertyValue::from(vec!["4", "2"])),
        ("xLinkHref", PropertyValue::from("#a")),
        ("dataFooBar", PropertyValue::from("x")),
    ]);
    let options = Options::default().with_space(Schema::Svg);

    assert_eq!(
        map(&properties, &options),
        json!([
            { "type": "mdxJsxAttribute", "name": "strokeDasharray", "value": "4 2" },
            { "type": "mdxJsxAttribute", "name": "xlinkHref", "value": "#a" },
            { "type": "mdxJsxAttribute", "name": "dataFooBar", "value": "x" },
        ])
    );
}

#[test]
fn attribute_names_resolve_to_properties() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("class", "a"), ("for", "b"), ("data-foo", "c")]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([
            { "type": "mdxJsxAttribute", "name": "className", "value": "a" },
            { "type": "mdxJsxAttribute", "name": "htmlFor", "value": "b" },
            { "type": "mdxJsxAttribute", "name": "dataFoo", "value": "c" },
        ])
    );
}

#[test]
fn style_to_object() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("style", "color: red; background-color: #dedede; top: 0")]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([{
            "type": "mdxJsxAttribute",
            "name": "style",
            "value": {
                "type": "mdxJsxAttributeValueExpression",
                "value": "",
                "data": {
                    "estree": {
                        "type": "Program",
                        "sourceType": "module",
                        "body": [{
                            "type": "ExpressionStatement",
                            "expression": {
                                "type": "ObjectExpression",
                                "properties": [
                                    {
                                        "type": "Property",
                                        "computed": false,
                                        "key": { "type": "Literal", "value": "color" },
                                        "kind": "init",
                                        "method": false,
                                        "shorthand": false,
                                        "value": { "type": "Literal", "value": "red" },
                                    },
                                    {
                                        "type": "Property",
                                        "computed": false,
                                        "key": { "type": "Literal", "value": "backgroundColor" },
                                        "kind": "init",
                                        "method": false,
                                        "shorthand": false,
                                        "value": { "type": "Literal", "value": "#dedede" },
                                    },
                                    {
                                        "type": "Property",
                                        "computed": false,
                                        "key": { "type": "Literal", "value": "top" },
                                        "kind": "init",
                                        "method": false,
                                        "shorthand": false,
                                        "value": { "type": "Literal", "value": "0" },
                                    },
                                ],
                            },
                        }],
                    },
                },
            },
        }])
    );
}

#[test]
fn malformed_style_fails_the_call() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("id", "a"), ("style", "color red")]);
    let error = properties_to_mdx_jsx_attributes(&properties, &Options::default()).unwrap_err();

    insta::assert_snapshot!(error.to_string(), @"1:7: property missing ':'");
}

#[test]
fn transform_to_null() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("id", "some-id")]);
    let options = Options::default().with_transform(|_, _, _| None::<String>);

    assert_eq!(
        map(&properties, &options),
        json!([{ "type": "mdxJsxAttribute", "name": "id" }])
    );
}

#[test]
fn transform_to_undefined() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("id", "some-id")]);
    let options = Options::default().with_transform(|_, _, _| {});

    assert_eq!(
        map(&properties, &options),
        json!([{ "type": "mdxJsxAttribute", "name": "id" }])
    );
}

#[test]
fn transform_to_string() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("id", "some-id")]);
    let options = Options::default().with_transform(|_, _, _| "another-id");

    assert_eq!(
        map(&properties, &options),
        json!([{ "type": "mdxJsxAttribute", "name": "id", "value": "another-id" }])
    );
}

#[test]
fn transform_to_estree_expression() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("id", "some-id")]);
    let options = Options::default().with_transform(|_, _, _| Expression::literal(42));

    assert_eq!(
        map(&properties, &options),
        json!([{
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
        }])
    );
}

#[test]
fn transform_to_any_estree_node() {
    hast_jsx_testhelpers::setup();

    let call = json!({
        "type": "CallExpression",
        "callee": { "type": "Identifier", "name": "t" },
        "arguments": [{ "type": "Literal", "value": "title" }],
        "optional": false,
    });
    let properties = Properties::from([("title", "Title")]);
    let options = Options::default().with_transform({
        let call = call.clone();
        move |_: &str, _: Option<&str>, _: &PropertyValue| Expression::other(call.clone())
    });

    let attributes = map(&properties, &options);
    assert_eq!(
        attributes[0]["value"]["data"]["estree"]["body"][0]["expression"],
        call
    );
}

#[test]
fn transformer_arguments() {
    hast_jsx_testhelpers::setup();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let options = Options::default().with_transform({
        let seen = Arc::clone(&seen);
        move |name: &str, value: Option<&str>, original: &PropertyValue| {
            if let Ok(mut seen) = seen.lock() {
                seen.push((name.to_owned(), value.map(str::to_owned), original.clone()));
            }
        }
    });

    let properties = Properties::from([("className", vec!["a", "b"])]);
    properties_to_mdx_jsx_attributes(&properties, &options).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(
            "className".to_string(),
            Some("a b".to_string()),
            PropertyValue::List(vec![ListItem::from("a"), ListItem::from("b")]),
        )]
    );
}

#[test]
fn transform_sees_presence_only_value_and_react_name() {
    hast_jsx_testhelpers::setup();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let options = Options::default().with_transform({
        let seen = Arc::clone(&seen);
        move |name: &str, value: Option<&str>, _: &PropertyValue| {
            if let Ok(mut seen) = seen.lock() {
                seen.push((name.to_owned(), value.map(str::to_owned)));
            }
            value.map(str::to_owned)
        }
    });

    let properties = Properties::from([
        ("disabled", PropertyValue::Bool(true)),
        ("classId", PropertyValue::from("x")),
    ]);
    properties_to_mdx_jsx_attributes(&properties, &options).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ("disabled".to_string(), None),
            ("classID".to_string(), Some("x".to_string())),
        ]
    );
}

#[test]
fn transform_text_for_style_is_expanded() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([("style", "color: red")]);
    let options = Options::default().with_transform(|_, _, _| "top: 0");

    let attributes = properties_to_mdx_jsx_attributes(&properties, &options).unwrap();
    let expression = attributes[0].value.as_expression().unwrap();
    assert_eq!(
        serde_json::to_value(expression).unwrap()["properties"][0]["key"]["value"],
        json!("top")
    );
}

#[test]
fn skip_prototype_properties() {
    hast_jsx_testhelpers::setup();

    let prototype = Arc::new(Properties::from([("id", "some-id")]));
    let properties = Properties::inheriting(prototype);

    assert_eq!(properties.get("id"), Some(&PropertyValue::from("some-id")));
    assert_eq!(map(&properties, &Options::default()), json!([]));
}

#[test]
fn output_follows_input_order() {
    hast_jsx_testhelpers::setup();

    let mut properties = Properties::from([
        ("title", PropertyValue::from("t")),
        ("hidden", PropertyValue::Bool(false)),
        ("id", PropertyValue::from("i")),
        ("tabIndex", PropertyValue::from(-1)),
    ]);
    properties.insert("title", "again");

    let names: Vec<_> = properties_to_mdx_jsx_attributes(&properties, &Options::default())
        .unwrap()
        .into_iter()
        .map(|attribute| (attribute.name, attribute.value))
        .collect();

    assert_eq!(
        names,
        vec![
            ("title".to_string(), AttributeValue::Text("again".to_string())),
            ("id".to_string(), AttributeValue::Text("i".to_string())),
            ("tabIndex".to_string(), AttributeValue::Text("-1".to_string())),
        ]
    );
}

#[test]
fn numbers_print_like_javascript() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([
        ("width", PropertyValue::from(0.5)),
        ("height", PropertyValue::from(1e21)),
        ("x", PropertyValue::from(-0.0)),
        ("y", PropertyValue::from(f64::INFINITY)),
    ]);

    assert_eq!(
        map(&properties, &Options::default()),
        json!([
            { "type": "mdxJsxAttribute", "name": "width", "value": "0.5" },
            { "type": "mdxJsxAttribute", "name": "height", "value": "1e+21" },
            { "type": "mdxJsxAttribute", "name": "x", "value": "0" },
            { "type": "mdxJsxAttribute", "name": "y", "value": "Infinity" },
        ])
    );
}

#[test]
fn properties_and_options_from_json() {
    hast_jsx_testhelpers::setup();

    let properties: Properties = serde_json::from_value(json!({
        "className": ["a", 1],
        "glyphName": ["A", "B"],
        "hidden": null,
    }))
    .unwrap();
    let options: Options = serde_json::from_value(json!({
        "elementAttributeNameCase": "html",
        "space": "svg",
    }))
    .unwrap();

    assert_eq!(
        map(&properties, &options),
        json!([
            { "type": "mdxJsxAttribute", "name": "className", "value": "a 1" },
            { "type": "mdxJsxAttribute", "name": "glyphName", "value": "A, B" },
        ])
    );
}

#[test]
fn mapping_its_own_output_is_stable() {
    hast_jsx_testhelpers::setup();

    let properties = Properties::from([
        ("className", PropertyValue::from(vec!["a", "b"])),
        ("disabled", PropertyValue::Bool(true)),
        ("width", PropertyValue::from(10)),
        ("hidden", PropertyValue::from("")),
    ]);
    let first = properties_to_mdx_jsx_attributes(&properties, &Options::default()).unwrap();

    let decoded: Properties = first
        .iter()
        .map(|MdxJsxAttribute { name, value }| {
            let value = match value {
                AttributeValue::Absent => PropertyValue::Bool(true),
                AttributeValue::Text(text) => PropertyValue::from(text.as_str()),
                AttributeValue::Expression(_) => PropertyValue::Null,
            };
            (name.clone(), value)
        })
        .collect();
    let second = properties_to_mdx_jsx_attributes(&decoded, &Options::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn options_can_be_shared_across_threads() {
    hast_jsx_testhelpers::setup();

    let options = Options::default().with_transform(|name: &str, value: Option<&str>, _: &PropertyValue| {
        value.map(|value| format!("{name}={value}"))
    });
    let properties = Arc::new(Properties::from([("id", "a")]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let options = options.clone();
            let properties = Arc::clone(&properties);
            std::thread::spawn(move || properties_to_mdx_jsx_attributes(&properties, &options))
        })
        .collect();

    for handle in handles {
        let attributes = handle.join().unwrap().unwrap();
        assert_eq!(attributes, vec![MdxJsxAttribute::text("id", "id=a")]);
    }
}
