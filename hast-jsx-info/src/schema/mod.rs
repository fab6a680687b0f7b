//! Property tables and the merged per-schema lookup maps built from them.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::info::{Info, Schema, Space};

mod aria;
mod html;
mod svg;
mod xml;

/// Value shape flags of a property definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Types(u8);

impl Types {
    pub(crate) const fn and(self, other: Types) -> Types {
        Types(self.0 | other.0)
    }

    pub(crate) const fn has(self, other: Types) -> bool {
        self.0 & other.0 != 0
    }
}

pub(crate) const PLAIN: Types = Types(0);
pub(crate) const BOOL: Types = Types(1);
pub(crate) const BOOLISH: Types = Types(1 << 1);
pub(crate) const OVERLOADED: Types = Types(1 << 2);
pub(crate) const NUM: Types = Types(1 << 3);
pub(crate) const COMMAS: Types = Types(1 << 4);
pub(crate) const SPACES: Types = Types(1 << 5);
pub(crate) const COMMAS_OR_SPACES: Types = Types(1 << 6);

/// One vocabulary of properties sharing a namespace and an attribute naming rule.
pub(crate) struct PropertySet {
    pub(crate) space: Option<Space>,
    /// Derives the attribute name candidate from a property name.
    pub(crate) attribute: fn(&str) -> String,
    /// Attribute names that differ from the derived candidate, keyed by candidate.
    pub(crate) overrides: &'static [(&'static str, &'static str)],
    pub(crate) must_use_property: &'static [&'static str],
    pub(crate) properties: &'static [(&'static str, Types)],
}

impl PropertySet {
    fn attribute_for(&self, property: &str) -> String {
        let candidate = (self.attribute)(property);
        match self.overrides.iter().find(|(key, _)| *key == candidate) {
            Some((_, attribute)) => (*attribute).to_owned(),
            None => candidate,
        }
    }
}

/// Merged lookup maps for one schema.
pub(crate) struct SchemaTable {
    /// Property name to its info.
    pub(crate) property: HashMap<&'static str, Info>,
    /// Lowercased property or attribute name to property name.
    pub(crate) normal: HashMap<String, &'static str>,
}

impl SchemaTable {
    /// Later sets win over earlier ones on conflicting names.
    fn merge(sets: &[&PropertySet]) -> Self {
        let mut property = HashMap::new();
        let mut normal = HashMap::new();

        for set in sets {
            for &(name, types) in set.properties {
                let attribute = set.attribute_for(name);
                let mut info = Info::from_types(name, attribute, set.space, types);
                info.must_use_property = set.must_use_property.contains(&name);

                normal.insert(name.to_lowercase(), name);
                normal.insert(info.attribute.to_lowercase(), name);
                property.insert(name, info);
            }
        }

        Self { property, normal }
    }

    /// Resolve a name through the case-insensitive `normal` map.
    pub(crate) fn lookup(&self, normalized: &str) -> Option<&Info> {
        let name = self.normal.get(normalized)?;
        self.property.get(name)
    }
}

static HTML: LazyLock<SchemaTable> = LazyLock::new(|| {
    SchemaTable::merge(&[
        &xml::XML,
        &xml::XLINK,
        &xml::XMLNS,
        &aria::ARIA,
        &html::HTML,
    ])
});

static SVG: LazyLock<SchemaTable> = LazyLock::new(|| {
    SchemaTable::merge(&[&xml::XML, &xml::XLINK, &xml::XMLNS, &aria::ARIA, &svg::SVG])
});

pub(crate) fn table(schema: Schema) -> &'static SchemaTable {
    match schema {
        Schema::Html => &HTML,
        Schema::Svg => &SVG,
    }
}

/// Attribute naming rule for case-insensitive vocabularies.
pub(crate) fn lowercase(property: &str) -> String {
    property.to_lowercase()
}

/// Attribute naming rule for case-sensitive vocabularies.
pub(crate) fn preserve(property: &str) -> String {
    property.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_sets_override_earlier_ones() {
        // `lang` is in html and is not shadowed by `xmlLang`.
        let html = table(Schema::Html);
        assert_eq!(html.lookup("lang").unwrap().space, Some(Space::Html));
        assert_eq!(html.lookup("xml:lang").unwrap().property, "xmlLang");
    }

    #[test]
    fn normal_map_covers_property_and_attribute() {
        let html = table(Schema::Html);
        assert_eq!(html.lookup("classname").unwrap().property, "className");
        assert_eq!(html.lookup("class").unwrap().property, "className");
        assert_eq!(html.lookup("accept-charset").unwrap().property, "acceptCharset");
    }

    #[test]
    fn types_flags_compose() {
        let both = NUM.and(COMMAS);
        assert!(both.has(NUM));
        assert!(both.has(COMMAS));
        assert!(!both.has(BOOL));
        assert!(!PLAIN.has(BOOL));
    }
}
