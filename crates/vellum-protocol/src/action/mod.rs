//! Dispatch messages sent from the host into the embedded context.
//!
//! An [`Action`] is a serialized request to execute one named command. The
//! host produces it, the transport carries it as a single JSON string, and the
//! embedded runtime consumes it exactly once. The optional [`ActionMeta`]
//! block carries side-channel hints the runtime honours around execution:
//! focus the root first, or re-post a selection snapshot afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A serialized request to execute a command inside the embedded document.
///
/// # Example
///
/// ```
/// use vellum_protocol::{Action, ActionMeta};
///
/// let action = Action::new("bold").with_meta(ActionMeta::focus_and_select());
/// let wire = action.to_wire().expect("serialise");
/// let parsed = Action::from_wire(&wire).expect("parse");
/// assert_eq!(parsed.kind(), "bold");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ActionMeta>,
}

impl Action {
    /// Creates an action targeting the given command id with no payload.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            meta: None,
        }
    }

    /// Attaches a payload value.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<serde_json::Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attaches dispatch metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: ActionMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Returns the target command id.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    /// Returns the dispatch metadata, if any.
    #[must_use]
    pub const fn meta(&self) -> Option<&ActionMeta> {
        self.meta.as_ref()
    }

    /// Serialises the action to its wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Serialize`] if the payload cannot be encoded.
    pub fn to_wire(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Serialize)
    }

    /// Parses an inbound wire string as an action.
    ///
    /// Surrounding whitespace is trimmed before parsing. Unknown fields are
    /// tolerated so older hosts and newer runtimes can interoperate.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Malformed`] if the input is empty, is not
    /// valid JSON, or lacks a string `type` field.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProtocolError::malformed("empty action message"));
        }
        serde_json::from_str(trimmed).map_err(|error| ProtocolError::from_json_error(&error))
    }
}

/// Side-channel hints carried alongside an action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionMeta {
    /// Focus the editable root before executing the command.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub focusable: bool,
    /// Re-post a selection snapshot after executing the command.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selectable: bool,
    /// Request the soft keyboard alongside focus, where the platform has one.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub show_keyboard: bool,
}

impl ActionMeta {
    /// Meta for formatting commands: focus first, refresh selection after.
    #[must_use]
    pub const fn focus_and_select() -> Self {
        Self {
            focusable: true,
            selectable: true,
            show_keyboard: false,
        }
    }

    /// Meta requesting only a focus of the editable root.
    #[must_use]
    pub const fn focus_only() -> Self {
        Self {
            focusable: true,
            selectable: false,
            show_keyboard: false,
        }
    }

    /// Meta requesting only a post-exec selection snapshot.
    #[must_use]
    pub const fn select_only() -> Self {
        Self {
            focusable: false,
            selectable: true,
            show_keyboard: false,
        }
    }
}

#[cfg(test)]
mod tests;
