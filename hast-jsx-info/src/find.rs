use crate::info::{Info, Schema};
use crate::naming::{data_attribute, data_property, is_data_name};
use crate::schema;

/// Look up the info for a property or attribute name in `schema`.
///
/// The name is matched case-insensitively against both the property names
/// (`className`) and the attribute names (`class`) the schema defines. Names
/// the schema does not know resolve to:
///
/// - a defined, namespace-less info for `data-*` names, converting between the
///   attribute form (`data-foo-bar`) and the property form (`dataFooBar`);
/// - otherwise an undefined info whose property and attribute are `value`.
///
/// This never fails.
pub fn find(schema: Schema, value: &str) -> Info {
    let normal = value.to_lowercase();
    if let Some(info) = schema::table(schema).lookup(&normal) {
        return info.clone();
    }

    if normal.len() > 4 && is_data_name(value) {
        if value.as_bytes()[4] == b'-' {
            return Info::defined(data_property(value), value);
        }
        let attribute = data_attribute(value).unwrap_or_else(|| value.to_owned());
        return Info::defined(value, attribute);
    }

    Info::new(value, value)
}
