//! Boot configuration injected into the embedded context.
//!
//! The host serialises one [`EditorTransferObject`] into the embedded context
//! before its content executes. The runtime reads it exactly once at
//! construction; it is immutable thereafter, and changing listeners or
//! commands afterwards requires a full reload rather than a patch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ProtocolError;
use crate::event::EventKind;
use crate::extension::ExtensionSpec;

/// Host platform identifier carried in the boot configuration.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    /// Apple mobile platforms.
    Ios,
    /// Android platforms.
    Android,
    /// Desktop or browser hosts.
    #[default]
    Web,
}

/// Which event kinds have a registered host callback.
///
/// The runtime wires a DOM listener only for kinds marked active here, so
/// unused host callbacks produce no event traffic at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerSet {
    listeners: BTreeMap<EventKind, bool>,
}

impl ListenerSet {
    /// Creates a set with every kind inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a kind as having a registered callback.
    #[must_use]
    pub fn with(mut self, kind: EventKind) -> Self {
        self.listeners.insert(kind, true);
        self
    }

    /// Sets the flag for a kind explicitly.
    pub fn set(&mut self, kind: EventKind, active: bool) {
        self.listeners.insert(kind, active);
    }

    /// Returns whether a kind has a registered callback.
    #[must_use]
    pub fn is_active(&self, kind: EventKind) -> bool {
        self.listeners.get(&kind).copied().unwrap_or(false)
    }
}

/// Boot configuration for one embedded editor instance.
///
/// # Example
///
/// ```
/// use vellum_protocol::{EditorTransferObject, EventKind, ListenerSet, Platform};
///
/// let options = EditorTransferObject::new(Platform::Android)
///     .with_commands(vec!["bold".into(), "italic".into()])
///     .with_listeners(ListenerSet::new().with(EventKind::Select));
/// let wire = options.to_wire().expect("serialise");
/// let parsed = EditorTransferObject::from_wire(&wire).expect("parse");
/// assert!(parsed.listeners().is_active(EventKind::Select));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorTransferObject {
    platform: Platform,
    #[serde(default)]
    commands: Vec<String>,
    #[serde(default)]
    extra_commands: Vec<ExtensionSpec>,
    #[serde(default = "EditorTransferObject::default_delay_long_press")]
    delay_long_press: u64,
    #[serde(default)]
    listeners: ListenerSet,
}

impl EditorTransferObject {
    fn default_delay_long_press() -> u64 {
        let millis = vellum_config::defaults::DEFAULT_LONG_PRESS_DELAY.as_millis();
        u64::try_from(millis).unwrap_or(u64::MAX)
    }

    /// Creates a configuration for the given platform with an empty
    /// allow-list (all built-ins), no extensions, the default long-press
    /// delay, and no active listeners.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            commands: Vec::new(),
            extra_commands: Vec::new(),
            delay_long_press: Self::default_delay_long_press(),
            listeners: ListenerSet::new(),
        }
    }

    /// Sets the command allow-list.
    #[must_use]
    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    /// Sets the extension command descriptors.
    #[must_use]
    pub fn with_extra_commands(mut self, extra_commands: Vec<ExtensionSpec>) -> Self {
        self.extra_commands = extra_commands;
        self
    }

    /// Sets the long-press threshold in milliseconds.
    #[must_use]
    pub const fn with_delay_long_press(mut self, millis: u64) -> Self {
        self.delay_long_press = millis;
        self
    }

    /// Sets the listener-presence map.
    #[must_use]
    pub fn with_listeners(mut self, listeners: ListenerSet) -> Self {
        self.listeners = listeners;
        self
    }

    /// Returns the host platform.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the command allow-list.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Returns the extension command descriptors.
    #[must_use]
    pub fn extra_commands(&self) -> &[ExtensionSpec] {
        &self.extra_commands
    }

    /// Returns the long-press threshold in milliseconds.
    #[must_use]
    pub const fn delay_long_press(&self) -> u64 {
        self.delay_long_press
    }

    /// Returns the listener-presence map.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// Serialises the configuration for injection into the embedded context.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Serialize`] if encoding fails.
    pub fn to_wire(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Serialize)
    }

    /// Parses an injected configuration string.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Malformed`] if the input is not a valid
    /// configuration object.
    pub fn from_wire(raw: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(raw.trim()).map_err(|error| ProtocolError::from_json_error(&error))
    }
}
