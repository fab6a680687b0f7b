//! WAI-ARIA properties. These carry no namespace.

use super::{BOOLISH, NUM, PLAIN, PropertySet, SPACES};

fn aria_attribute(property: &str) -> String {
    if property == "role" {
        return property.to_owned();
    }
    format!("aria-{}", property["aria".len()..].to_lowercase())
}

pub(crate) static ARIA: PropertySet = PropertySet {
    space: None,
    attribute: aria_attribute,
    overrides: &[],
    must_use_property: &[],
    properties: &[
        ("ariaActiveDescendant", PLAIN),
        ("ariaAtomic", BOOLISH),
        ("ariaAutoComplete", PLAIN),
        ("ariaBusy", BOOLISH),
        ("ariaChecked", BOOLISH),
        ("ariaColCount", NUM),
        ("ariaColIndex", NUM),
        ("ariaColSpan", NUM),
        ("ariaControls", SPACES),
        ("ariaCurrent", PLAIN),
        ("ariaDescribedBy", SPACES),
        ("ariaDetails", PLAIN),
        ("ariaDisabled", BOOLISH),
        ("ariaDropEffect", SPACES),
        ("ariaErrorMessage", PLAIN),
        ("ariaExpanded", BOOLISH),
        ("ariaFlowTo", SPACES),
        ("ariaGrabbed", BOOLISH),
        ("ariaHasPopup", PLAIN),
        ("ariaHidden", BOOLISH),
        ("ariaInvalid", PLAIN),
        ("ariaKeyShortcuts", PLAIN),
        ("ariaLabel", PLAIN),
        ("ariaLabelledBy", SPACES),
        ("ariaLevel", NUM),
        ("ariaLive", PLAIN),
        ("ariaModal", BOOLISH),
        ("ariaMultiLine", BOOLISH),
        ("ariaMultiSelectable", BOOLISH),
        ("ariaOrientation", PLAIN),
        ("ariaOwns", SPACES),
        ("ariaPlaceholder", PLAIN),
        ("ariaPosInSet", NUM),
        ("ariaPressed", BOOLISH),
        ("ariaReadOnly", BOOLISH),
        ("ariaRelevant", PLAIN),
        ("ariaRequired", BOOLISH),
        ("ariaRoleDescription", SPACES),
        ("ariaRowCount", NUM),
        ("ariaRowIndex", NUM),
        ("ariaRowSpan", NUM),
        ("ariaSelected", BOOLISH),
        ("ariaSetSize", NUM),
        ("ariaSort", PLAIN),
        ("ariaValueMax", NUM),
        ("ariaValueMin", NUM),
        ("ariaValueNow", NUM),
        ("ariaValueText", PLAIN),
        ("role", PLAIN),
    ],
};
