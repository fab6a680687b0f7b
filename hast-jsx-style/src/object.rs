use indexmap::IndexMap;
use serde::Deserialize;

use crate::case::camel_case;
use crate::error::StyleError;
use crate::parser::parse;
use crate::tracing_macros::trace;

/// Options for [`style_to_object`] and [`camel_case`](crate::camel_case).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    /// Keep `Webkit`, `Moz`, `O` and `Khtml` vendor prefixes capitalized, the
    /// way React spells them. `-ms-` always becomes `ms`.
    pub react_compat: bool,
}

/// Parse inline style text into `(key, value)` pairs with camel-cased keys.
///
/// Declarations with an empty property or value are skipped. When a key
/// repeats, the later value replaces the earlier one but the key keeps its
/// first position.
///
/// Keys follow JavaScript object semantics: `__proto__` is dropped, and
/// array-index keys (`0`, `12`) come first in ascending order.
pub fn style_to_object(
    style: &str,
    options: &StyleOptions,
) -> Result<Vec<(String, String)>, StyleError> {
    let mut object = IndexMap::new();
    for declaration in parse(style)? {
        if declaration.property.is_empty() || declaration.value.is_empty() {
            trace!(property = %declaration.property, "skipping empty declaration");
            continue;
        }
        let key = camel_case(&declaration.property, options).into_owned();
        if key == "__proto__" {
            trace!("dropping __proto__ declaration");
            continue;
        }
        object.insert(key, declaration.value);
    }

    let (mut indexes, named): (Vec<_>, Vec<_>) = object
        .into_iter()
        .partition(|(key, _)| array_index(key).is_some());
    indexes.sort_by_key(|(key, _)| array_index(key));
    indexes.extend(named);
    Ok(indexes)
}

/// The value of `key` as a JavaScript array index: a canonical decimal
/// below `2^32 - 1`.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(style: &str) -> Vec<(String, String)> {
        style_to_object(style, &StyleOptions::default()).unwrap()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_keys_are_camel_cased() {
        assert_eq!(
            object("color: red; background-color: #dedede; top: 0"),
            vec![
                pair("color", "red"),
                pair("backgroundColor", "#dedede"),
                pair("top", "0"),
            ]
        );
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        assert_eq!(
            object("color: red; top: 0; color: blue"),
            vec![pair("color", "blue"), pair("top", "0")]
        );
        // Keys are compared after camel-casing.
        assert_eq!(
            object("background-color: red; backgroundColor: blue"),
            vec![pair("backgroundColor", "blue")]
        );
    }

    #[test]
    fn test_proto_is_dropped() {
        assert_eq!(object("__proto__: x; color: red"), vec![pair("color", "red")]);
    }

    #[test]
    fn test_index_keys_come_first() {
        assert_eq!(
            object("b: 1; 10: y; 2: x; 02: z"),
            vec![pair("2", "x"), pair("10", "y"), pair("b", "1"), pair("02", "z")]
        );
    }

    #[test]
    fn test_array_index() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("4294967294"), Some(4_294_967_294));
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index("01"), None);
        assert_eq!(array_index("+1"), None);
        assert_eq!(array_index(""), None);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        assert_eq!(object("color:; top: 0"), vec![pair("top", "0")]);
        assert!(object("").is_empty());
    }

    #[test]
    fn test_react_compat() {
        let options = StyleOptions { react_compat: true };
        assert_eq!(
            style_to_object("-webkit-user-select: none", &options).unwrap(),
            vec![pair("WebkitUserSelect", "none")]
        );
    }

    #[test]
    fn test_errors_propagate() {
        assert!(style_to_object("color red", &StyleOptions::default()).is_err());
    }

    #[test]
    fn test_options_deserialize() {
        let options: StyleOptions = serde_json::from_str(r#"{"reactCompat": true}"#).unwrap();
        assert!(options.react_compat);
        let options: StyleOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.react_compat);
    }
}
