//! Name conversion for `data-*` properties.
//!
//! hast spells `data-*` attributes as camel-cased properties prefixed with
//! `data`:
//!
//! - `data-foo-bar` → `dataFooBar`
//! - `dataFooBar` → `data-foo-bar`

use std::borrow::Cow;

/// Whether `name` can be a `data-*` property or attribute at all:
/// `data` followed by one or more word characters, `-`, `.` or `:`.
pub(crate) fn is_data_name(name: &str) -> bool {
    let Some(prefix) = name.get(..4) else {
        return false;
    };
    let rest = &name[4..];
    prefix.eq_ignore_ascii_case("data")
        && !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

/// `data-foo-bar` → `dataFooBar`. Only `-` followed by a lowercase ASCII letter
/// is folded.
pub(crate) fn data_property(attribute: &str) -> String {
    let rest = fold_dashes(&attribute["data-".len()..]);
    let mut chars = rest.chars();
    let mut property = String::from("data");
    if let Some(first) = chars.next() {
        property.extend(first.to_uppercase());
        property.push_str(chars.as_str());
    }
    property
}

/// `dataFooBar` → `data-foo-bar`, or `None` when the name already contains a
/// dash followed by a lowercase letter and is left alone.
pub(crate) fn data_attribute(property: &str) -> Option<String> {
    let rest = &property["data".len()..];
    if has_dash_lower(rest) {
        return None;
    }

    let mut dashes = String::with_capacity(rest.len() + 4);
    for c in rest.chars() {
        if c.is_ascii_uppercase() {
            dashes.push('-');
            dashes.push(c.to_ascii_lowercase());
        } else {
            dashes.push(c);
        }
    }
    if !dashes.starts_with('-') {
        dashes.insert(0, '-');
    }
    Some(format!("data{dashes}"))
}

/// Replace each `-x` (x a lowercase ASCII letter) with `X`, borrowing when
/// there is nothing to replace.
fn fold_dashes(value: &str) -> Cow<'_, str> {
    if !has_dash_lower(value) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
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

fn has_dash_lower(value: &str) -> bool {
    value
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'-' && pair[1].is_ascii_lowercase())
}
