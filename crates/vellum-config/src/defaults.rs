//! Default values shared across the workspace.

use std::time::Duration;

/// Coalescing window applied to selection and change notifications.
///
/// Bursts of selection-affecting interactions within this window collapse
/// into a single outbound event message.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// Default threshold separating a short press from a long press.
pub const DEFAULT_LONG_PRESS_DELAY: Duration = Duration::from_millis(500);

/// Element id of the single injected stylesheet inside the embedded document.
///
/// At most one style element with this id exists at any time; inserting a new
/// stylesheet removes the prior instance first.
pub const STYLE_ELEMENT_ID: &str = "vellum-style";

/// Element id of the editable root inside the embedded document.
pub const ROOT_ELEMENT_ID: &str = "vellum-root";

/// Allow-list entry meaning "register every built-in command".
pub const COMMAND_WILDCARD: &str = "*";

/// Placeholder content a browser leaves behind in an emptied contentEditable
/// root. A root containing exactly this markup is reported as true-empty.
pub const LINE_BREAK_PLACEHOLDER: &str = "<br>";

/// Default log filter expression used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used when none is configured.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format.
#[must_use]
pub fn default_log_format() -> crate::LogFormat {
    crate::LogFormat::Json
}
