//! HTML properties, including legacy and widely used non-standard ones.

use super::{BOOL, BOOLISH, COMMAS, NUM, OVERLOADED, PLAIN, PropertySet, SPACES, lowercase};
use crate::info::Space;

pub(crate) static HTML: PropertySet = PropertySet {
    space: Some(Space::Html),
    attribute: lowercase,
    overrides: &[
        ("acceptcharset", "accept-charset"),
        ("classname", "class"),
        ("htmlfor", "for"),
        ("httpequiv", "http-equiv"),
    ],
    must_use_property: &["checked", "multiple", "muted", "selected"],
    properties: &[
        // Standard
        ("abbr", PLAIN),
        ("accept", COMMAS),
        ("acceptCharset", SPACES),
        ("accessKey", SPACES),
        ("action", PLAIN),
        ("allow", PLAIN),
        ("allowFullScreen", BOOL),
        ("allowPaymentRequest", BOOL),
        ("allowUserMedia", BOOL),
        ("alt", PLAIN),
        ("as", PLAIN),
        ("async", BOOL),
        ("autoCapitalize", PLAIN),
        ("autoComplete", SPACES),
        ("autoFocus", BOOL),
        ("autoPlay", BOOL),
        ("blocking", SPACES),
        ("capture", PLAIN),
        ("charSet", PLAIN),
        ("checked", BOOL),
        ("cite", PLAIN),
        ("className", SPACES),
        ("cols", NUM),
        ("colSpan", PLAIN),
        ("content", PLAIN),
        ("contentEditable", BOOLISH),
        ("controls", BOOL),
        ("controlsList", SPACES),
        ("coords", NUM.and(COMMAS)),
        ("crossOrigin", PLAIN),
        ("data", PLAIN),
        ("dateTime", PLAIN),
        ("decoding", PLAIN),
        ("default", BOOL),
        ("defer", BOOL),
        ("dir", PLAIN),
        ("dirName", PLAIN),
        ("disabled", BOOL),
        ("download", OVERLOADED),
        ("draggable", BOOLISH),
        ("encType", PLAIN),
        ("enterKeyHint", PLAIN),
        ("fetchPriority", PLAIN),
        ("form", PLAIN),
        ("formAction", PLAIN),
        ("formEncType", PLAIN),
        ("formMethod", PLAIN),
        ("formNoValidate", BOOL),
        ("formTarget", PLAIN),
        ("headers", SPACES),
        ("height", NUM),
        ("hidden", BOOL),
        ("high", NUM),
        ("href", PLAIN),
        ("hrefLang", PLAIN),
        ("htmlFor", SPACES),
        ("httpEquiv", SPACES),
        ("id", PLAIN),
        ("imageSizes", PLAIN),
        ("imageSrcSet", PLAIN),
        ("inert", BOOL),
        ("inputMode", PLAIN),
        ("integrity", PLAIN),
        ("is", PLAIN),
        ("isMap", BOOL),
        ("itemId", PLAIN),
        ("itemProp", SPACES),
        ("itemRef", SPACES),
        ("itemScope", BOOL),
        ("itemType", SPACES),
        ("kind", PLAIN),
        ("label", PLAIN),
        ("lang", PLAIN),
        ("language", PLAIN),
        ("list", PLAIN),
        ("loading", PLAIN),
        ("loop", BOOL),
        ("low", NUM),
        ("manifest", PLAIN),
        ("max", PLAIN),
        ("maxLength", NUM),
        ("media", PLAIN),
        ("method", PLAIN),
        ("min", PLAIN),
        ("minLength", NUM),
        ("multiple", BOOL),
        ("muted", BOOL),
        ("name", PLAIN),
        ("nonce", PLAIN),
        ("noModule", BOOL),
        ("noValidate", BOOL),
        ("onAbort", PLAIN),
        ("onAfterPrint", PLAIN),
        ("onAuxClick", PLAIN),
        ("onBeforeMatch", PLAIN),
        ("onBeforePrint", PLAIN),
        ("onBeforeToggle", PLAIN),
        ("onBeforeUnload", PLAIN),
        ("onBlur", PLAIN),
        ("onCancel", PLAIN),
        ("onCanPlay", PLAIN),
        ("onCanPlayThrough", PLAIN),
        ("onChange", PLAIN),
        ("onClick", PLAIN),
        ("onClose", PLAIN),
        ("onContextLost", PLAIN),
        ("onContextMenu", PLAIN),
        ("onContextRestored", PLAIN),
        ("onCopy", PLAIN),
        ("onCueChange", PLAIN),
        ("onCut", PLAIN),
        ("onDblClick", PLAIN),
        ("onDrag", PLAIN),
        ("onDragEnd", PLAIN),
        ("onDragEnter", PLAIN),
        ("onDragExit", PLAIN),
        ("onDragLeave", PLAIN),
        ("onDragOver", PLAIN),
        ("onDragStart", PLAIN),
        ("onDrop", PLAIN),
        ("onDurationChange", PLAIN),
        ("onEmptied", PLAIN),
        ("onEnded", PLAIN),
        ("onError", PLAIN),
        ("onFocus", PLAIN),
        ("onFormData", PLAIN),
        ("onHashChange", PLAIN),
        ("onInput", PLAIN),
        ("onInvalid", PLAIN),
        ("onKeyDown", PLAIN),
        ("onKeyPress", PLAIN),
        ("onKeyUp", PLAIN),
        ("onLanguageChange", PLAIN),
        ("onLoad", PLAIN),
        ("onLoadedData", PLAIN),
        ("onLoadedMetadata", PLAIN),
        ("onLoadEnd", PLAIN),
        ("onLoadStart", PLAIN),
        ("onMessage", PLAIN),
        ("onMessageError", PLAIN),
        ("onMouseDown", PLAIN),
        ("onMouseEnter", PLAIN),
        ("onMouseLeave", PLAIN),
        ("onMouseMove", PLAIN),
        ("onMouseOut", PLAIN),
        ("onMouseOver", PLAIN),
        ("onMouseUp", PLAIN),
        ("onOffline", PLAIN),
        ("onOnline", PLAIN),
        ("onPageHide", PLAIN),
        ("onPageShow", PLAIN),
        ("onPaste", PLAIN),
        ("onPause", PLAIN),
        ("onPlay", PLAIN),
        ("onPlaying", PLAIN),
        ("onPopState", PLAIN),
        ("onProgress", PLAIN),
        ("onRateChange", PLAIN),
        ("onRejectionHandled", PLAIN),
        ("onReset", PLAIN),
        ("onResize", PLAIN),
        ("onScroll", PLAIN),
        ("onScrollEnd", PLAIN),
        ("onSecurityPolicyViolation", PLAIN),
        ("onSeeked", PLAIN),
        ("onSeeking", PLAIN),
        ("onSelect", PLAIN),
        ("onSlotChange", PLAIN),
        ("onStalled", PLAIN),
        ("onStorage", PLAIN),
        ("onSubmit", PLAIN),
        ("onSuspend", PLAIN),
        ("onTimeUpdate", PLAIN),
        ("onToggle", PLAIN),
        ("onUnhandledRejection", PLAIN),
        ("onUnload", PLAIN),
        ("onVolumeChange", PLAIN),
        ("onWaiting", PLAIN),
        ("onWheel", PLAIN),
        ("open", BOOL),
        ("optimum", NUM),
        ("pattern", PLAIN),
        ("ping", SPACES),
        ("placeholder", PLAIN),
        ("playsInline", BOOL),
        ("popover", PLAIN),
        ("popoverTarget", PLAIN),
        ("popoverTargetAction", PLAIN),
        ("poster", PLAIN),
        ("preload", PLAIN),
        ("readOnly", BOOL),
        ("referrerPolicy", PLAIN),
        ("rel", SPACES),
        ("required", BOOL),
        ("reversed", BOOL),
        ("rows", NUM),
        ("rowSpan", NUM),
        ("sandbox", SPACES),
        ("scope", PLAIN),
        ("scoped", BOOL),
        ("seamless", BOOL),
        ("selected", BOOL),
        ("shadowRootClonable", BOOL),
        ("shadowRootDelegatesFocus", BOOL),
        ("shadowRootMode", PLAIN),
        ("shape", PLAIN),
        ("size", NUM),
        ("sizes", PLAIN),
        ("slot", PLAIN),
        ("span", NUM),
        ("spellCheck", BOOLISH),
        ("src", PLAIN),
        ("srcDoc", PLAIN),
        ("srcLang", PLAIN),
        ("srcSet", PLAIN),
        ("start", NUM),
        ("step", PLAIN),
        ("style", PLAIN),
        ("tabIndex", NUM),
        ("target", PLAIN),
        ("title", PLAIN),
        ("translate", PLAIN),
        ("type", PLAIN),
        ("typeMustMatch", BOOL),
        ("useMap", PLAIN),
        ("value", BOOLISH),
        ("width", NUM),
        ("wrap", PLAIN),
        ("writingSuggestions", PLAIN),
        // Legacy
        ("align", PLAIN),
        ("aLink", PLAIN),
        ("archive", SPACES),
        ("axis", PLAIN),
        ("background", PLAIN),
        ("bgColor", PLAIN),
        ("border", NUM),
        ("borderColor", PLAIN),
        ("bottomMargin", NUM),
        ("cellPadding", PLAIN),
        ("cellSpacing", PLAIN),
        ("char", PLAIN),
        ("charOff", PLAIN),
        ("classId", PLAIN),
        ("clear", PLAIN),
        ("code", PLAIN),
        ("codeBase", PLAIN),
        ("codeType", PLAIN),
        ("color", PLAIN),
        ("compact", BOOL),
        ("declare", BOOL),
        ("event", PLAIN),
        ("face", PLAIN),
        ("frame", PLAIN),
        ("frameBorder", PLAIN),
        ("hSpace", NUM),
        ("leftMargin", NUM),
        ("link", PLAIN),
        ("longDesc", PLAIN),
        ("lowSrc", PLAIN),
        ("marginHeight", NUM),
        ("marginWidth", NUM),
        ("noResize", BOOL),
        ("noHref", BOOL),
        ("noShade", BOOL),
        ("noWrap", BOOL),
        ("object", PLAIN),
        ("profile", PLAIN),
        ("prompt", PLAIN),
        ("rev", PLAIN),
        ("rightMargin", NUM),
        ("rules", PLAIN),
        ("scheme", PLAIN),
        ("scrolling", BOOLISH),
        ("standby", PLAIN),
        ("summary", PLAIN),
        ("text", PLAIN),
        ("topMargin", NUM),
        ("valueType", PLAIN),
        ("version", PLAIN),
        ("vAlign", PLAIN),
        ("vLink", PLAIN),
        ("vSpace", NUM),
        // Non-standard
        ("allowTransparency", PLAIN),
        ("autoCorrect", PLAIN),
        ("autoSave", PLAIN),
        ("disablePictureInPicture", BOOL),
        ("disableRemotePlayback", BOOL),
        ("prefix", PLAIN),
        ("property", PLAIN),
        ("results", NUM),
        ("security", PLAIN),
        ("unselectable", PLAIN),
    ],
};
