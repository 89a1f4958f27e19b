//! Event messages emitted by the embedded context.
//!
//! Every notification crossing the boundary is one wire line shaped as
//! `{"type": <kind>, "payload": <kind-specific shape>}`. The host parses the
//! line back into an [`EventMessage`] and re-hydrates it as a typed
//! [`EditorEvent`] carrying a capture timestamp, then delivers it to the one
//! callback registered for that kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ProtocolError;
use crate::snapshot::CommandsInfo;

/// The closed set of event kinds the embedded context can emit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EventKind {
    /// The editable root lost focus.
    Blur,
    /// The editable root gained focus.
    Focus,
    /// The document content changed (debounced).
    Change,
    /// A key was pressed down.
    #[serde(rename = "keydown")]
    #[strum(serialize = "keydown")]
    KeyDown,
    /// A key was released.
    #[serde(rename = "keyup")]
    #[strum(serialize = "keyup")]
    KeyUp,
    /// The text selection changed (synthesized, debounced).
    Select,
    /// Content was pasted into the document.
    Paste,
    /// A raw input event fired.
    Input,
    /// A short press on a document element.
    Press,
    /// A long press on a document element.
    LongPress,
}

impl EventKind {
    /// Every event kind, in a stable order.
    pub const ALL: [Self; 10] = [
        Self::Blur,
        Self::Focus,
        Self::Change,
        Self::KeyDown,
        Self::KeyUp,
        Self::Select,
        Self::Paste,
        Self::Input,
        Self::Press,
        Self::LongPress,
    ];
}

/// Payload carrying a full text snapshot of the document root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextPayload {
    /// Markup content of the editable root.
    pub text: String,
}

impl TextPayload {
    /// Creates a text payload.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Payload carrying the key involved in a keyboard event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPayload {
    /// Key string as reported by the embedded context.
    pub key: String,
}

impl KeyPayload {
    /// Creates a key payload.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Payload describing a raw input event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputPayload {
    /// The native input type (for example `insertText`).
    pub input_type: String,
    /// The inserted data, when the input type carries any.
    #[serde(default)]
    pub data: Option<String>,
}

impl InputPayload {
    /// Creates an input payload.
    #[must_use]
    pub fn new(input_type: impl Into<String>, data: Option<String>) -> Self {
        Self {
            input_type: input_type.into(),
            data,
        }
    }
}

/// Payload carrying the command-state snapshot of a selection change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectPayload {
    /// State and enablement for every registered command.
    pub data: CommandsInfo,
}

impl SelectPayload {
    /// Creates a select payload.
    #[must_use]
    pub const fn new(data: CommandsInfo) -> Self {
        Self { data }
    }
}

/// Description of the document element under a press interaction.
///
/// Attribute name/value pairs are flattened into the wire object alongside
/// the tag name and bounding rectangle, matching the embedded context's
/// attribute bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    /// Upper-case tag name of the element.
    pub tag_name: String,
    /// Left edge of the bounding rectangle.
    pub x: f64,
    /// Top edge of the bounding rectangle.
    pub y: f64,
    /// Width of the bounding rectangle.
    pub width: f64,
    /// Height of the bounding rectangle.
    pub height: f64,
    /// Remaining element attributes, flattened on the wire.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl ElementInfo {
    /// Creates an element info with the given tag and an empty rectangle.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// Sets the bounding rectangle.
    #[must_use]
    pub const fn with_rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    /// Adds an attribute name/value pair.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// A state or interaction notification posted by the embedded context.
///
/// Serialised adjacently tagged, so the wire form is exactly
/// `{"type": "change", "payload": {"text": "..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum EventMessage {
    /// The editable root lost focus.
    Blur(TextPayload),
    /// The editable root gained focus.
    Focus(TextPayload),
    /// The document content changed.
    Change(TextPayload),
    /// A key was pressed down.
    #[serde(rename = "keydown")]
    KeyDown(KeyPayload),
    /// A key was released.
    #[serde(rename = "keyup")]
    KeyUp(KeyPayload),
    /// The text selection changed.
    Select(SelectPayload),
    /// Content was pasted into the document.
    Paste(TextPayload),
    /// A raw input event fired.
    Input(InputPayload),
    /// A short press on a document element.
    Press(ElementInfo),
    /// A long press on a document element.
    LongPress(ElementInfo),
}

impl EventMessage {
    /// Returns the kind discriminant of this message.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Blur(_) => EventKind::Blur,
            Self::Focus(_) => EventKind::Focus,
            Self::Change(_) => EventKind::Change,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::Select(_) => EventKind::Select,
            Self::Paste(_) => EventKind::Paste,
            Self::Input(_) => EventKind::Input,
            Self::Press(_) => EventKind::Press,
            Self::LongPress(_) => EventKind::LongPress,
        }
    }

    /// Serialises the message to its wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Serialize`] if the payload cannot be encoded.
    pub fn to_wire(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Serialize)
    }

    /// Parses an inbound wire string as an event message.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnrecognisedShape`] if the input parses as
    /// JSON but is not an object carrying a string `type`, and
    /// [`ProtocolError::Malformed`] for everything else. Callers are expected
    /// to route either failure to a raw-message fallback.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProtocolError::malformed("empty event message"));
        }

        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|error| ProtocolError::from_json_error(&error))?;
        let is_tagged_object = value
            .as_object()
            .is_some_and(|object| object.get("type").is_some_and(serde_json::Value::is_string));
        if !is_tagged_object {
            return Err(ProtocolError::UnrecognisedShape);
        }

        serde_json::from_value(value).map_err(|error| ProtocolError::from_json_error(&error))
    }
}

/// Host-side typed re-hydration of an [`EventMessage`].
///
/// Carries the kind, a capture timestamp taken when the host parsed the
/// message, and the original payload as `native_event`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorEvent<T> {
    kind: EventKind,
    time_stamp: u64,
    native_event: T,
}

impl<T> EditorEvent<T> {
    /// Creates a typed event with the given capture timestamp (milliseconds).
    #[must_use]
    pub const fn new(kind: EventKind, time_stamp: u64, native_event: T) -> Self {
        Self {
            kind,
            time_stamp,
            native_event,
        }
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the capture timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn time_stamp(&self) -> u64 {
        self.time_stamp
    }

    /// Returns the original message payload.
    #[must_use]
    pub const fn native_event(&self) -> &T {
        &self.native_event
    }

    /// Consumes the event and returns the payload.
    #[must_use]
    pub fn into_native_event(self) -> T {
        self.native_event
    }
}
