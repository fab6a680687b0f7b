/// Properties whose React (and most JSX runtimes') spelling differs from hast.
const HAST_TO_REACT: &[(&str, &str)] = &[
    ("classId", "classID"),
    ("dataType", "datatype"),
    ("itemId", "itemID"),
    ("strokeDashArray", "strokeDasharray"),
    ("strokeDashOffset", "strokeDashoffset"),
    ("strokeLineCap", "strokeLinecap"),
    ("strokeLineJoin", "strokeLinejoin"),
    ("strokeMiterLimit", "strokeMiterlimit"),
    ("typeOf", "typeof"),
    ("xLinkActuate", "xlinkActuate"),
    ("xLinkArcRole", "xlinkArcrole"),
    ("xLinkHref", "xlinkHref"),
    ("xLinkRole", "xlinkRole"),
    ("xLinkShow", "xlinkShow"),
    ("xLinkTitle", "xlinkTitle"),
    ("xLinkType", "xlinkType"),
    ("xmlnsXLink", "xmlnsXlink"),
];

/// The React spelling of a hast property name, if it has a different one.
///
/// The match is exact: `classId` has an alternate spelling, `classid` does not.
pub fn hast_to_react(property: &str) -> Option<&'static str> {
    HAST_TO_REACT
        .iter()
        .find(|(hast, _)| *hast == property)
        .map(|(_, react)| *react)
}
