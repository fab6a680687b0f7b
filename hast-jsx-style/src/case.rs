//! CSS property name to JSX style key conversion.
//!
//! Examples:
//! - `background-color` → `backgroundColor`
//! - `-webkit-transition` → `webkitTransition`
//! - `-ms-transform` → `msTransform`
//! - `--brand-color` → `--brand-color`

use std::borrow::Cow;

use crate::object::StyleOptions;

const VENDOR_PREFIXES: &[&str] = &["webkit", "moz", "ms", "o", "khtml"];

/// Convert a CSS property name to the key JSX uses for it.
///
/// Names without a hyphen and custom properties are returned borrowed.
pub fn camel_case<'a>(property: &'a str, options: &StyleOptions) -> Cow<'a, str> {
    if property.is_empty() || !property.contains('-') || is_custom_property(property) {
        return Cow::Borrowed(property);
    }

    let lowered = property.to_lowercase();
    let unprefixed = strip_vendor_dash(&lowered, options.react_compat);

    let mut out = String::with_capacity(unprefixed.len());
    let mut chars = unprefixed.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// `--name`, where the name is made of ASCII word characters and dashes.
fn is_custom_property(property: &str) -> bool {
    property.strip_prefix("--").is_some_and(|name| {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    })
}

/// Drop the leading dash of a vendor prefix, so the prefix is capitalized
/// like any other word except the first.
///
/// React keeps `Webkit`, `Moz` and `O` capitalized, so with `react_compat`
/// only `-ms-` loses its dash.
fn strip_vendor_dash(property: &str, react_compat: bool) -> &str {
    let Some(rest) = property.strip_prefix('-') else {
        return property;
    };
    let prefixes: &[&str] = if react_compat { &["ms"] } else { VENDOR_PREFIXES };
    let is_vendor = prefixes.iter().any(|prefix| {
        rest.strip_prefix(prefix)
            .is_some_and(|tail| tail.starts_with('-'))
    });
    if is_vendor { rest } else { property }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camel(property: &str) -> String {
        camel_case(property, &StyleOptions::default()).into_owned()
    }

    fn react(property: &str) -> String {
        camel_case(property, &StyleOptions { react_compat: true }).into_owned()
    }

    #[test]
    fn test_hyphenated_names() {
        assert_eq!(camel("background-color"), "backgroundColor");
        assert_eq!(camel("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(camel("Background-Color"), "backgroundColor");
    }

    #[test]
    fn test_unchanged_names_borrow() {
        assert!(matches!(camel_case("color", &StyleOptions::default()), Cow::Borrowed(_)));
        assert!(matches!(camel_case("COLOR", &StyleOptions::default()), Cow::Borrowed("COLOR")));
        assert!(matches!(camel_case("", &StyleOptions::default()), Cow::Borrowed("")));
        assert!(matches!(
            camel_case("--brand-color", &StyleOptions::default()),
            Cow::Borrowed("--brand-color")
        ));
    }

    #[test]
    fn test_custom_property_with_other_chars_is_converted() {
        assert_eq!(camel("--a.b-c"), "-A.bC");
    }

    #[test]
    fn test_vendor_prefixes() {
        assert_eq!(camel("-webkit-transition"), "webkitTransition");
        assert_eq!(camel("-moz-user-select"), "mozUserSelect");
        assert_eq!(camel("-ms-transform"), "msTransform");
        assert_eq!(camel("-o-transition"), "oTransition");
        assert_eq!(camel("-khtml-user-select"), "khtmlUserSelect");
        assert_eq!(camel("-unknown-thing"), "UnknownThing");
    }

    #[test]
    fn test_react_compat_prefixes() {
        assert_eq!(react("-webkit-transition"), "WebkitTransition");
        assert_eq!(react("-moz-user-select"), "MozUserSelect");
        assert_eq!(react("-ms-transform"), "msTransform");
        assert_eq!(react("background-color"), "backgroundColor");
    }

    #[test]
    fn test_only_letters_after_dash_capitalize() {
        assert_eq!(camel("grid-row-1"), "gridRow-1");
        assert_eq!(camel("a--b"), "a-B");
        assert_eq!(camel("trailing-"), "trailing-");
    }
}
