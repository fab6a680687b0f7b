//! The `xml:*`, `xlink:*` and `xmlns` vocabularies shared by HTML and SVG.

use super::{PLAIN, PropertySet, lowercase};
use crate::info::Space;

fn xml_attribute(property: &str) -> String {
    format!("xml:{}", property["xml".len()..].to_lowercase())
}

fn xlink_attribute(property: &str) -> String {
    format!("xlink:{}", property["xLink".len()..].to_lowercase())
}

pub(crate) static XML: PropertySet = PropertySet {
    space: Some(Space::Xml),
    attribute: xml_attribute,
    overrides: &[],
    must_use_property: &[],
    properties: &[("xmlBase", PLAIN), ("xmlLang", PLAIN), ("xmlSpace", PLAIN)],
};

pub(crate) static XLINK: PropertySet = PropertySet {
    space: Some(Space::XLink),
    attribute: xlink_attribute,
    overrides: &[],
    must_use_property: &[],
    properties: &[
        ("xLinkActuate", PLAIN),
        ("xLinkArcRole", PLAIN),
        ("xLinkHref", PLAIN),
        ("xLinkRole", PLAIN),
        ("xLinkShow", PLAIN),
        ("xLinkTitle", PLAIN),
        ("xLinkType", PLAIN),
    ],
};

pub(crate) static XMLNS: PropertySet = PropertySet {
    space: Some(Space::Xmlns),
    attribute: lowercase,
    overrides: &[("xmlnsxlink", "xmlns:xlink")],
    must_use_property: &[],
    properties: &[("xmlnsXLink", PLAIN), ("xmlns", PLAIN)],
};
