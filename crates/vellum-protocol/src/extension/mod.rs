//! Data-described extension commands.
//!
//! Host-supplied commands must cross the same isolation boundary as every
//! other message, and only data survives that crossing. An [`ExtensionSpec`]
//! is the serializable description of an extension command: which id it
//! registers under, which native command it delegates to, how it reports
//! state, and how a dispatched value is shaped before delegation. The command
//! registry compiles each descriptor into an executable command at boot,
//! never at dispatch time.

use serde::{Deserialize, Serialize};

/// How a compiled extension command reports its state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateMode {
    /// Report the delegate's boolean toggle state.
    #[default]
    Toggle,
    /// Report the delegate's current value string.
    Value,
    /// Report a constant inactive state.
    None,
}

/// Serializable description of an extension command.
///
/// Travels inside the boot configuration. The placeholder `{}` inside
/// [`value_template`](Self::value_template) is replaced with the dispatched
/// payload before the delegate executes, so a block-format style extension
/// can be expressed as `template: "<{}>"`.
///
/// # Example
///
/// ```
/// use vellum_protocol::{ExtensionSpec, StateMode};
///
/// let spec = ExtensionSpec::new("custom.highlight")
///     .with_target("backColor")
///     .with_state_mode(StateMode::Value);
/// assert_eq!(spec.id(), "custom.highlight");
/// assert_eq!(spec.target(), Some("backColor"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionSpec {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(default)]
    state_mode: StateMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value_template: Option<String>,
}

impl ExtensionSpec {
    /// Creates a descriptor registering under the given id and delegating to
    /// the native command of the same name.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: None,
            state_mode: StateMode::default(),
            value_template: None,
        }
    }

    /// Sets the native command the extension delegates to.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets how the compiled command reports state.
    #[must_use]
    pub const fn with_state_mode(mut self, mode: StateMode) -> Self {
        self.state_mode = mode;
        self
    }

    /// Sets the value template applied to dispatched payloads.
    #[must_use]
    pub fn with_value_template(mut self, template: impl Into<String>) -> Self {
        self.value_template = Some(template.into());
        self
    }

    /// Returns the registration id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the delegate target, when one is declared.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Returns the state reporting mode.
    #[must_use]
    pub const fn state_mode(&self) -> StateMode {
        self.state_mode
    }

    /// Returns the value template, when one is declared.
    #[must_use]
    pub fn value_template(&self) -> Option<&str> {
        self.value_template.as_deref()
    }
}

#[cfg(test)]
mod tests;
