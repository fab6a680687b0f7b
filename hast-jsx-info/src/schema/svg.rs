//! SVG properties. Attribute names are case-sensitive; the ones that are not
//! the property name verbatim are listed in the overrides.

use super::{BOOL, COMMAS, COMMAS_OR_SPACES, NUM, PLAIN, PropertySet, SPACES, preserve};
use crate::info::Space;

/// Event handler attributes are all lowercase (`onClick` → `onclick`).
fn svg_attribute(property: &str) -> String {
    let mut chars = property.chars();
    let is_handler = property.starts_with("on")
        && chars.nth(2).is_some_and(|c| c.is_ascii_uppercase());
    if is_handler {
        property.to_lowercase()
    } else {
        preserve(property)
    }
}

pub(crate) static SVG: PropertySet = PropertySet {
    space: Some(Space::Svg),
    attribute: svg_attribute,
    overrides: &[
        ("accentHeight", "accent-height"),
        ("alignmentBaseline", "alignment-baseline"),
        ("arabicForm", "arabic-form"),
        ("baselineShift", "baseline-shift"),
        ("capHeight", "cap-height"),
        ("className", "class"),
        ("clipPath", "clip-path"),
        ("clipRule", "clip-rule"),
        ("colorInterpolation", "color-interpolation"),
        ("colorInterpolationFilters", "color-interpolation-filters"),
        ("colorProfile", "color-profile"),
        ("colorRendering", "color-rendering"),
        ("crossOrigin", "crossorigin"),
        ("dataType", "datatype"),
        ("dominantBaseline", "dominant-baseline"),
        ("enableBackground", "enable-background"),
        ("fillOpacity", "fill-opacity"),
        ("fillRule", "fill-rule"),
        ("floodColor", "flood-color"),
        ("floodOpacity", "flood-opacity"),
        ("fontFamily", "font-family"),
        ("fontSize", "font-size"),
        ("fontSizeAdjust", "font-size-adjust"),
        ("fontStretch", "font-stretch"),
        ("fontStyle", "font-style"),
        ("fontVariant", "font-variant"),
        ("fontWeight", "font-weight"),
        ("glyphName", "glyph-name"),
        ("glyphOrientationHorizontal", "glyph-orientation-horizontal"),
        ("glyphOrientationVertical", "glyph-orientation-vertical"),
        ("hrefLang", "hreflang"),
        ("horizAdvX", "horiz-adv-x"),
        ("horizOriginX", "horiz-origin-x"),
        ("horizOriginY", "horiz-origin-y"),
        ("imageRendering", "image-rendering"),
        ("letterSpacing", "letter-spacing"),
        ("lightingColor", "lighting-color"),
        ("markerEnd", "marker-end"),
        ("markerMid", "marker-mid"),
        ("markerStart", "marker-start"),
        ("navDown", "nav-down"),
        ("navDownLeft", "nav-down-left"),
        ("navDownRight", "nav-down-right"),
        ("navLeft", "nav-left"),
        ("navNext", "nav-next"),
        ("navPrev", "nav-prev"),
        ("navRight", "nav-right"),
        ("navUp", "nav-up"),
        ("navUpLeft", "nav-up-left"),
        ("navUpRight", "nav-up-right"),
        ("overlinePosition", "overline-position"),
        ("overlineThickness", "overline-thickness"),
        ("paintOrder", "paint-order"),
        ("panose1", "panose-1"),
        ("playbackOrder", "playbackorder"),
        ("pointerEvents", "pointer-events"),
        ("referrerPolicy", "referrerpolicy"),
        ("renderingIntent", "rendering-intent"),
        ("shapeRendering", "shape-rendering"),
        ("stopColor", "stop-color"),
        ("stopOpacity", "stop-opacity"),
        ("strikethroughPosition", "strikethrough-position"),
        ("strikethroughThickness", "strikethrough-thickness"),
        ("strokeDashArray", "stroke-dasharray"),
        ("strokeDashOffset", "stroke-dashoffset"),
        ("strokeLineCap", "stroke-linecap"),
        ("strokeLineJoin", "stroke-linejoin"),
        ("strokeMiterLimit", "stroke-miterlimit"),
        ("strokeOpacity", "stroke-opacity"),
        ("strokeWidth", "stroke-width"),
        ("tabIndex", "tabindex"),
        ("textAnchor", "text-anchor"),
        ("textDecoration", "text-decoration"),
        ("textRendering", "text-rendering"),
        ("timelineBegin", "timelinebegin"),
        ("transformOrigin", "transform-origin"),
        ("typeOf", "typeof"),
        ("underlinePosition", "underline-position"),
        ("underlineThickness", "underline-thickness"),
        ("unicodeBidi", "unicode-bidi"),
        ("unicodeRange", "unicode-range"),
        ("unitsPerEm", "units-per-em"),
        ("vAlphabetic", "v-alphabetic"),
        ("vHanging", "v-hanging"),
        ("vIdeographic", "v-ideographic"),
        ("vMathematical", "v-mathematical"),
        ("vectorEffect", "vector-effect"),
        ("vertAdvY", "vert-adv-y"),
        ("vertOriginX", "vert-origin-x"),
        ("vertOriginY", "vert-origin-y"),
        ("wordSpacing", "word-spacing"),
        ("writingMode", "writing-mode"),
        ("xHeight", "x-height"),
    ],
    must_use_property: &[],
    properties: &[
        ("about", COMMAS_OR_SPACES),
        ("accentHeight", NUM),
        ("accumulate", PLAIN),
        ("additive", PLAIN),
        ("alignmentBaseline", PLAIN),
        ("alphabetic", NUM),
        ("amplitude", NUM),
        ("arabicForm", PLAIN),
        ("ascent", NUM),
        ("attributeName", PLAIN),
        ("attributeType", PLAIN),
        ("azimuth", NUM),
        ("bandwidth", PLAIN),
        ("baselineShift", PLAIN),
        ("baseFrequency", PLAIN),
        ("baseProfile", PLAIN),
        ("bbox", PLAIN),
        ("begin", PLAIN),
        ("bias", NUM),
        ("by", PLAIN),
        ("calcMode", PLAIN),
        ("capHeight", NUM),
        ("className", SPACES),
        ("clip", PLAIN),
        ("clipPath", PLAIN),
        ("clipPathUnits", PLAIN),
        ("clipRule", PLAIN),
        ("color", PLAIN),
        ("colorInterpolation", PLAIN),
        ("colorInterpolationFilters", PLAIN),
        ("colorProfile", PLAIN),
        ("colorRendering", PLAIN),
        ("content", PLAIN),
        ("contentScriptType", PLAIN),
        ("contentStyleType", PLAIN),
        ("crossOrigin", PLAIN),
        ("cursor", PLAIN),
        ("cx", PLAIN),
        ("cy", PLAIN),
        ("d", PLAIN),
        ("dataType", PLAIN),
        ("defaultAction", PLAIN),
        ("descent", NUM),
        ("diffuseConstant", NUM),
        ("direction", PLAIN),
        ("display", PLAIN),
        ("dur", PLAIN),
        ("divisor", NUM),
        ("dominantBaseline", PLAIN),
        ("download", BOOL),
        ("dx", PLAIN),
        ("dy", PLAIN),
        ("edgeMode", PLAIN),
        ("editable", PLAIN),
        ("elevation", NUM),
        ("enableBackground", PLAIN),
        ("end", PLAIN),
        ("event", PLAIN),
        ("exponent", NUM),
        ("externalResourcesRequired", PLAIN),
        ("fill", PLAIN),
        ("fillOpacity", NUM),
        ("fillRule", PLAIN),
        ("filter", PLAIN),
        ("filterRes", PLAIN),
        ("filterUnits", PLAIN),
        ("floodColor", PLAIN),
        ("floodOpacity", PLAIN),
        ("focusable", PLAIN),
        ("focusHighlight", PLAIN),
        ("fontFamily", PLAIN),
        ("fontSize", PLAIN),
        ("fontSizeAdjust", PLAIN),
        ("fontStretch", PLAIN),
        ("fontStyle", PLAIN),
        ("fontVariant", PLAIN),
        ("fontWeight", PLAIN),
        ("format", PLAIN),
        ("fr", PLAIN),
        ("from", PLAIN),
        ("fx", PLAIN),
        ("fy", PLAIN),
        ("g1", COMMAS),
        ("g2", COMMAS),
        ("glyphName", COMMAS),
        ("glyphOrientationHorizontal", PLAIN),
        ("glyphOrientationVertical", PLAIN),
        ("glyphRef", PLAIN),
        ("gradientTransform", PLAIN),
        ("gradientUnits", PLAIN),
        ("handler", PLAIN),
        ("hanging", NUM),
        ("hatchContentUnits", PLAIN),
        ("hatchUnits", PLAIN),
        ("height", PLAIN),
        ("href", PLAIN),
        ("hrefLang", PLAIN),
        ("horizAdvX", NUM),
        ("horizOriginX", NUM),
        ("horizOriginY", NUM),
        ("id", PLAIN),
        ("ideographic", NUM),
        ("imageRendering", PLAIN),
        ("initialVisibility", PLAIN),
        ("in", PLAIN),
        ("in2", PLAIN),
        ("intercept", NUM),
        ("k", NUM),
        ("k1", NUM),
        ("k2", NUM),
        ("k3", NUM),
        ("k4", NUM),
        ("kernelMatrix", COMMAS_OR_SPACES),
        ("kernelUnitLength", PLAIN),
        ("keyPoints", PLAIN),
        ("keySplines", PLAIN),
        ("keyTimes", PLAIN),
        ("kerning", PLAIN),
        ("lang", PLAIN),
        ("lengthAdjust", PLAIN),
        ("letterSpacing", PLAIN),
        ("lightingColor", PLAIN),
        ("limitingConeAngle", NUM),
        ("local", PLAIN),
        ("markerEnd", PLAIN),
        ("markerMid", PLAIN),
        ("markerStart", PLAIN),
        ("markerHeight", PLAIN),
        ("markerUnits", PLAIN),
        ("markerWidth", PLAIN),
        ("mask", PLAIN),
        ("maskContentUnits", PLAIN),
        ("maskUnits", PLAIN),
        ("mathematical", PLAIN),
        ("max", PLAIN),
        ("media", PLAIN),
        ("mediaCharacterEncoding", PLAIN),
        ("mediaContentEncodings", PLAIN),
        ("mediaSize", NUM),
        ("mediaTime", PLAIN),
        ("method", PLAIN),
        ("min", PLAIN),
        ("mode", PLAIN),
        ("name", PLAIN),
        ("navDown", PLAIN),
        ("navDownLeft", PLAIN),
        ("navDownRight", PLAIN),
        ("navLeft", PLAIN),
        ("navNext", PLAIN),
        ("navPrev", PLAIN),
        ("navRight", PLAIN),
        ("navUp", PLAIN),
        ("navUpLeft", PLAIN),
        ("navUpRight", PLAIN),
        ("numOctaves", PLAIN),
        ("observer", PLAIN),
        ("offset", PLAIN),
        ("onAbort", PLAIN),
        ("onActivate", PLAIN),
        ("onBlur", PLAIN),
        ("onChange", PLAIN),
        ("onClick", PLAIN),
        ("onDblClick", PLAIN),
        ("onError", PLAIN),
        ("onFocus", PLAIN),
        ("onFocusIn", PLAIN),
        ("onFocusOut", PLAIN),
        ("onInput", PLAIN),
        ("onKeyDown", PLAIN),
        ("onKeyUp", PLAIN),
        ("onLoad", PLAIN),
        ("onMouseDown", PLAIN),
        ("onMouseMove", PLAIN),
        ("onMouseOut", PLAIN),
        ("onMouseOver", PLAIN),
        ("onMouseUp", PLAIN),
        ("onResize", PLAIN),
        ("onScroll", PLAIN),
        ("onUnload", PLAIN),
        ("onZoom", PLAIN),
        ("opacity", PLAIN),
        ("operator", PLAIN),
        ("order", PLAIN),
        ("orient", PLAIN),
        ("orientation", PLAIN),
        ("origin", PLAIN),
        ("overflow", PLAIN),
        ("overlay", PLAIN),
        ("overlinePosition", NUM),
        ("overlineThickness", NUM),
        ("paintOrder", PLAIN),
        ("panose1", PLAIN),
        ("path", PLAIN),
        ("pathLength", NUM),
        ("patternContentUnits", PLAIN),
        ("patternTransform", PLAIN),
        ("patternUnits", PLAIN),
        ("phase", PLAIN),
        ("ping", SPACES),
        ("pitch", PLAIN),
        ("playbackOrder", PLAIN),
        ("pointerEvents", PLAIN),
        ("points", PLAIN),
        ("pointsAtX", NUM),
        ("pointsAtY", NUM),
        ("pointsAtZ", NUM),
        ("preserveAlpha", PLAIN),
        ("preserveAspectRatio", PLAIN),
        ("primitiveUnits", PLAIN),
        ("propagate", PLAIN),
        ("property", COMMAS_OR_SPACES),
        ("r", PLAIN),
        ("radius", PLAIN),
        ("referrerPolicy", PLAIN),
        ("refX", PLAIN),
        ("refY", PLAIN),
        ("rel", COMMAS_OR_SPACES),
        ("rev", COMMAS_OR_SPACES),
        ("renderingIntent", PLAIN),
        ("repeatCount", PLAIN),
        ("repeatDur", PLAIN),
        ("requiredExtensions", COMMAS_OR_SPACES),
        ("requiredFeatures", COMMAS_OR_SPACES),
        ("requiredFonts", COMMAS_OR_SPACES),
        ("requiredFormats", COMMAS_OR_SPACES),
        ("resource", PLAIN),
        ("restart", PLAIN),
        ("result", PLAIN),
        ("rotate", PLAIN),
        ("rx", PLAIN),
        ("ry", PLAIN),
        ("scale", PLAIN),
        ("seed", PLAIN),
        ("shapeRendering", PLAIN),
        ("side", PLAIN),
        ("slope", PLAIN),
        ("snapshotTime", PLAIN),
        ("specularConstant", NUM),
        ("specularExponent", NUM),
        ("spreadMethod", PLAIN),
        ("spacing", PLAIN),
        ("startOffset", PLAIN),
        ("stdDeviation", PLAIN),
        ("stemh", PLAIN),
        ("stemv", PLAIN),
        ("stitchTiles", PLAIN),
        ("stopColor", PLAIN),
        ("stopOpacity", PLAIN),
        ("strikethroughPosition", NUM),
        ("strikethroughThickness", NUM),
        ("string", PLAIN),
        ("stroke", PLAIN),
        ("strokeDashArray", COMMAS_OR_SPACES),
        ("strokeDashOffset", PLAIN),
        ("strokeLineCap", PLAIN),
        ("strokeLineJoin", PLAIN),
        ("strokeMiterLimit", NUM),
        ("strokeOpacity", NUM),
        ("strokeWidth", PLAIN),
        ("style", PLAIN),
        ("surfaceScale", NUM),
        ("syncBehavior", PLAIN),
        ("syncBehaviorDefault", PLAIN),
        ("syncMaster", PLAIN),
        ("syncTolerance", PLAIN),
        ("syncToleranceDefault", PLAIN),
        ("systemLanguage", COMMAS_OR_SPACES),
        ("tabIndex", NUM),
        ("tableValues", PLAIN),
        ("target", PLAIN),
        ("targetX", NUM),
        ("targetY", NUM),
        ("textAnchor", PLAIN),
        ("textDecoration", PLAIN),
        ("textRendering", PLAIN),
        ("textLength", PLAIN),
        ("timelineBegin", PLAIN),
        ("title", PLAIN),
        ("transformBehavior", PLAIN),
        ("type", PLAIN),
        ("typeOf", COMMAS_OR_SPACES),
        ("to", PLAIN),
        ("transform", PLAIN),
        ("transformOrigin", PLAIN),
        ("u1", PLAIN),
        ("u2", PLAIN),
        ("underlinePosition", NUM),
        ("underlineThickness", NUM),
        ("unicode", PLAIN),
        ("unicodeBidi", PLAIN),
        ("unicodeRange", PLAIN),
        ("unitsPerEm", NUM),
        ("values", PLAIN),
        ("vAlphabetic", NUM),
        ("vMathematical", NUM),
        ("vectorEffect", PLAIN),
        ("vHanging", NUM),
        ("vIdeographic", NUM),
        ("version", PLAIN),
        ("vertAdvY", NUM),
        ("vertOriginX", NUM),
        ("vertOriginY", NUM),
        ("viewBox", PLAIN),
        ("viewTarget", PLAIN),
        ("visibility", PLAIN),
        ("width", PLAIN),
        ("widths", PLAIN),
        ("wordSpacing", PLAIN),
        ("writingMode", PLAIN),
        ("x", PLAIN),
        ("x1", PLAIN),
        ("x2", PLAIN),
        ("xChannelSelector", PLAIN),
        ("xHeight", NUM),
        ("y", PLAIN),
        ("y1", PLAIN),
        ("y2", PLAIN),
        ("yChannelSelector", PLAIN),
        ("z", PLAIN),
        ("zoomAndPan", PLAIN),
    ],
};
