//! Command-state snapshots.
//!
//! A [`CommandsInfo`] maps every registered command id to its current state
//! and enablement. Snapshots are recomputed on demand, on selection change,
//! never cached across document mutations, and carried to the host inside
//! `select` events so toolbar consumers can decide active/disabled visuals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The queryable state of a single command.
///
/// Toggle commands (bold, italic, …) report a boolean. Value commands (font
/// name, block tag, colours) report their current value as a string; "active"
/// for those means "current value equals the dispatched value", a comparison
/// performed by the consumer rather than the command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CommandState {
    /// Discrete on/off state of a toggle command.
    Toggled(bool),
    /// Current value of a value-domain command.
    Value(String),
}

impl CommandState {
    /// Returns the boolean state, if this is a toggle command.
    #[must_use]
    pub const fn as_toggled(&self) -> Option<bool> {
        match self {
            Self::Toggled(state) => Some(*state),
            Self::Value(_) => None,
        }
    }

    /// Returns the string value, if this is a value command.
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Toggled(_) => None,
            Self::Value(value) => Some(value.as_str()),
        }
    }
}

impl From<bool> for CommandState {
    fn from(state: bool) -> Self {
        Self::Toggled(state)
    }
}

impl From<String> for CommandState {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for CommandState {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

/// State and enablement of one command at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandInfo {
    /// Current command state.
    pub state: CommandState,
    /// Whether the command can currently execute.
    pub enabled: bool,
}

impl CommandInfo {
    /// Creates a command info entry.
    #[must_use]
    pub fn new(state: impl Into<CommandState>, enabled: bool) -> Self {
        Self {
            state: state.into(),
            enabled,
        }
    }
}

/// Snapshot of every registered command id at a point in time.
pub type CommandsInfo = BTreeMap<String, CommandInfo>;
