//! The command object protocol.
//!
//! Every command exposes the same four operations regardless of what it does
//! underneath: `query_state`, `query_value`, `query_enabled`, `exec`. The
//! differences live in [`CommandBehaviour`], a closed variant set selected at
//! construction. No inheritance chain, one match per operation.

use vellum_config::defaults::STYLE_ELEMENT_ID;
use vellum_protocol::snapshot::CommandState;
use vellum_protocol::{ExtensionSpec, StateMode, ids};

use crate::document::DocumentApi;
use crate::error::RegistryError;

/// How a command queries and mutates the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandBehaviour {
    /// Thin adapter over a native command with a discrete boolean state.
    Toggle {
        /// Native command name, identical to the command id for built-ins.
        native: String,
    },
    /// Adapter over a native command with a value domain; state reporting
    /// delegates to the value query.
    Value {
        /// Native command name.
        native: String,
    },
    /// Block formatting: the dispatched tag is wrapped in angle brackets
    /// before delegation, matching the native call's expected argument shape.
    FormatBlock,
    /// Pseudo-command applying a batch of attribute mutations to the root,
    /// with `innerHTML` special-cased as a content replacement.
    SetAttribute,
    /// Pseudo-command replacing the single injected stylesheet.
    InsertStyle,
    /// Compiled extension descriptor delegating to a native command.
    Delegate {
        /// Native command the extension delegates to.
        target: String,
        /// How the extension reports state.
        state_mode: StateMode,
        /// Optional template applied to dispatched values; `{}` marks the
        /// payload position.
        value_template: Option<String>,
    },
}

/// A named, queryable, executable unit of document mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    id: String,
    behaviour: CommandBehaviour,
}

impl Command {
    /// Creates a toggle command over the native command of the same name.
    #[must_use]
    pub fn toggle(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            behaviour: CommandBehaviour::Toggle {
                native: id.to_owned(),
            },
        }
    }

    /// Creates a value command over the native command of the same name.
    #[must_use]
    pub fn value(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            behaviour: CommandBehaviour::Value {
                native: id.to_owned(),
            },
        }
    }

    /// Creates the block-format command.
    #[must_use]
    pub fn format_block() -> Self {
        Self {
            id: ids::FORMAT_BLOCK.to_owned(),
            behaviour: CommandBehaviour::FormatBlock,
        }
    }

    /// Creates the attribute-mutation pseudo-command.
    #[must_use]
    pub fn set_attribute() -> Self {
        Self {
            id: ids::SET_ATTRIBUTE.to_owned(),
            behaviour: CommandBehaviour::SetAttribute,
        }
    }

    /// Creates the stylesheet-replacement pseudo-command.
    #[must_use]
    pub fn insert_style() -> Self {
        Self {
            id: ids::INSERT_STYLE.to_owned(),
            behaviour: CommandBehaviour::InsertStyle,
        }
    }

    /// Compiles an extension descriptor into an executable command.
    ///
    /// Compilation happens once at registry construction; a bad descriptor is
    /// a boot-time failure, never a per-dispatch one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyExtensionId`] when the id is blank and
    /// [`RegistryError::InvalidTemplate`] when a declared value template has
    /// no `{}` payload slot.
    pub fn from_spec(spec: &ExtensionSpec) -> Result<Self, RegistryError> {
        let id = spec.id().trim();
        if id.is_empty() {
            return Err(RegistryError::EmptyExtensionId);
        }
        if let Some(template) = spec.value_template() {
            if !template.contains("{}") {
                return Err(RegistryError::InvalidTemplate {
                    id: id.to_owned(),
                    message: "template has no `{}` payload slot".to_owned(),
                });
            }
        }
        let target = spec.target().unwrap_or(id).to_owned();
        Ok(Self {
            id: id.to_owned(),
            behaviour: CommandBehaviour::Delegate {
                target,
                state_mode: spec.state_mode(),
                value_template: spec.value_template().map(str::to_owned),
            },
        })
    }

    /// Returns the command id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the command behaviour.
    #[must_use]
    pub const fn behaviour(&self) -> &CommandBehaviour {
        &self.behaviour
    }

    /// Queries the command's current state.
    #[must_use]
    pub fn query_state(&self, doc: &dyn DocumentApi) -> CommandState {
        match &self.behaviour {
            CommandBehaviour::Toggle { native } => {
                CommandState::Toggled(doc.query_command_state(native))
            }
            CommandBehaviour::Value { native } => {
                CommandState::Value(doc.query_command_value(native))
            }
            CommandBehaviour::FormatBlock => {
                CommandState::Value(doc.query_command_value(ids::FORMAT_BLOCK))
            }
            CommandBehaviour::SetAttribute | CommandBehaviour::InsertStyle => {
                CommandState::Toggled(false)
            }
            CommandBehaviour::Delegate {
                target, state_mode, ..
            } => match state_mode {
                StateMode::Toggle => CommandState::Toggled(doc.query_command_state(target)),
                StateMode::Value => CommandState::Value(doc.query_command_value(target)),
                StateMode::None => CommandState::Toggled(false),
            },
        }
    }

    /// Queries the command's current value.
    #[must_use]
    pub fn query_value(&self, doc: &dyn DocumentApi) -> String {
        match &self.behaviour {
            CommandBehaviour::Toggle { native } | CommandBehaviour::Value { native } => {
                doc.query_command_value(native)
            }
            CommandBehaviour::FormatBlock => doc.query_command_value(ids::FORMAT_BLOCK),
            CommandBehaviour::SetAttribute | CommandBehaviour::InsertStyle => String::new(),
            CommandBehaviour::Delegate { target, .. } => doc.query_command_value(target),
        }
    }

    /// Queries whether the command can currently execute.
    #[must_use]
    pub fn query_enabled(&self, doc: &dyn DocumentApi) -> bool {
        match &self.behaviour {
            CommandBehaviour::Toggle { native } | CommandBehaviour::Value { native } => {
                doc.query_command_enabled(native)
            }
            CommandBehaviour::FormatBlock => doc.query_command_enabled(ids::FORMAT_BLOCK),
            CommandBehaviour::SetAttribute | CommandBehaviour::InsertStyle => true,
            CommandBehaviour::Delegate { target, .. } => doc.query_command_enabled(target),
        }
    }

    /// Executes the command with an optional payload.
    ///
    /// Failure is reported as `false`, mirroring the native facility; it is
    /// never raised as an error.
    pub fn exec(&self, doc: &dyn DocumentApi, payload: Option<&serde_json::Value>) -> bool {
        match &self.behaviour {
            CommandBehaviour::Toggle { native } | CommandBehaviour::Value { native } => {
                doc.exec_command(native, coerce_value(payload).as_deref())
            }
            CommandBehaviour::FormatBlock => coerce_value(payload).is_some_and(|tag| {
                doc.exec_command(ids::FORMAT_BLOCK, Some(&format!("<{tag}>")))
            }),
            CommandBehaviour::SetAttribute => exec_set_attribute(doc, payload),
            CommandBehaviour::InsertStyle => exec_insert_style(doc, payload),
            CommandBehaviour::Delegate {
                target,
                value_template,
                ..
            } => {
                let value = coerce_value(payload);
                let shaped = match (value_template, value) {
                    (Some(template), value) => {
                        Some(template.replace("{}", value.as_deref().unwrap_or_default()))
                    }
                    (None, value) => value,
                };
                doc.exec_command(target, shaped.as_deref())
            }
        }
    }
}

/// Coerces a dispatched payload into the string form native commands accept.
///
/// Strings pass through unchanged; other JSON values use their compact JSON
/// text; an absent or null payload coerces to nothing.
fn coerce_value(payload: Option<&serde_json::Value>) -> Option<String> {
    match payload {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Applies a batch of attribute mutations; `innerHTML` replaces content.
fn exec_set_attribute(doc: &dyn DocumentApi, payload: Option<&serde_json::Value>) -> bool {
    let Some(serde_json::Value::Object(values)) = payload else {
        return false;
    };
    for (name, value) in values {
        let text = match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        if name == "innerHTML" {
            doc.set_inner_html(&text);
        } else {
            doc.set_attribute(name, &text);
        }
    }
    true
}

/// Replaces the single injected stylesheet, removing any prior instance.
fn exec_insert_style(doc: &dyn DocumentApi, payload: Option<&serde_json::Value>) -> bool {
    let Some(css) = coerce_value(payload).filter(|css| !css.is_empty()) else {
        return false;
    };
    doc.remove_style_element(STYLE_ELEMENT_ID);
    doc.insert_style_element(STYLE_ELEMENT_ID, &css)
}
