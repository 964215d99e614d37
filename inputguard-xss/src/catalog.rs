//! Recognized DOM event names.
//!
//! The catalog is read-only process-wide data. Lookups and the derived token
//! pattern are built lazily on first use and never mutated afterwards, so any
//! number of threads may read them without coordination.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// DOM event names whose `on<name>` attribute binds script to an event.
pub const EVENT_NAMES: &[&str] = &[
    // Mouse
    "auxclick",
    "click",
    "contextmenu",
    "dblclick",
    "mousedown",
    "mouseenter",
    "mouseleave",
    "mousemove",
    "mouseout",
    "mouseover",
    "mouseup",
    "wheel",
    // Keyboard and input
    "beforeinput",
    "change",
    "input",
    "invalid",
    "keydown",
    "keypress",
    "keyup",
    "reset",
    "search",
    "select",
    "selectionchange",
    "selectstart",
    "submit",
    "formdata",
    // Focus
    "blur",
    "focus",
    "focusin",
    "focusout",
    // Clipboard
    "copy",
    "cut",
    "paste",
    // Drag and drop
    "drag",
    "dragend",
    "dragenter",
    "dragleave",
    "dragover",
    "dragstart",
    "drop",
    // Touch
    "touchcancel",
    "touchend",
    "touchmove",
    "touchstart",
    // Pointer
    "gotpointercapture",
    "lostpointercapture",
    "pointercancel",
    "pointerdown",
    "pointerenter",
    "pointerleave",
    "pointermove",
    "pointerout",
    "pointerover",
    "pointerup",
    // Document and window
    "abort",
    "afterprint",
    "beforeprint",
    "beforeunload",
    "error",
    "fullscreenchange",
    "hashchange",
    "load",
    "message",
    "offline",
    "online",
    "pagehide",
    "pageshow",
    "popstate",
    "resize",
    "scroll",
    "storage",
    "unload",
    // Media
    "canplay",
    "canplaythrough",
    "cuechange",
    "durationchange",
    "emptied",
    "ended",
    "loadeddata",
    "loadedmetadata",
    "loadstart",
    "pause",
    "play",
    "playing",
    "progress",
    "ratechange",
    "seeked",
    "seeking",
    "stalled",
    "suspend",
    "timeupdate",
    "volumechange",
    "waiting",
    // Animation, transition and dialog
    "animationend",
    "animationiteration",
    "animationstart",
    "transitionend",
    "cancel",
    "close",
    "show",
    "toggle",
];

static EVENT_CATALOG: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EVENT_NAMES.iter().copied().collect());

/// `on` followed by any catalog name, longest names first so `ondragstart`
/// is consumed whole instead of as `ondrag` + `start`.
pub(crate) static EVENT_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let mut names: Vec<&str> = EVENT_NAMES.to_vec();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)on(?:{})", alternation)).unwrap()
});

/// Check whether `name` (without the `on` prefix) is a recognized event.
pub fn is_event_name(name: &str) -> bool {
    EVENT_CATALOG.contains(name.to_ascii_lowercase().as_str())
}

/// Check whether `attribute` is an `on<event>` handler attribute name.
pub fn is_handler_attribute(attribute: &str) -> bool {
    attribute
        .get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("on"))
        .and_then(|_| attribute.get(2..))
        .is_some_and(is_event_name)
}
