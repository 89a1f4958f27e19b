//! The command registry.
//!
//! Built fresh on each runtime boot from three sources: the built-in catalog,
//! a host allow-list filter, and host-supplied extension descriptors. The two
//! pseudo-commands and every extension are appended regardless of the
//! allow-list; they are the integration seam for host customisation, so the
//! filter never touches them. Storage is a key-unique map: registration order
//! decides which definition wins for a shared id, and extensions register
//! last so they can override built-ins.

use std::collections::HashMap;

use tracing::debug;

use vellum_config::defaults::COMMAND_WILDCARD;
use vellum_protocol::ExtensionSpec;
use vellum_protocol::snapshot::{CommandInfo, CommandsInfo};

use crate::catalog;
use crate::command::Command;
use crate::document::DocumentApi;
use crate::error::RegistryError;

/// Tracing target for registry construction.
const REGISTRY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::registry");

/// The active command set of one editor runtime instance.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    /// Builds the active command set.
    ///
    /// The built-in catalog is filtered by `allow_list` (empty, or containing
    /// the `*` wildcard, keeps everything; unknown allow-listed ids are
    /// harmless no-ops). Pseudo-commands and extensions are then appended
    /// unconditionally, later registrations replacing earlier ones that share
    /// an id.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when an extension descriptor fails to
    /// compile. This aborts the boot: a bad extension is never silently
    /// skipped.
    pub fn build(
        allow_list: &[String],
        extensions: &[ExtensionSpec],
    ) -> Result<Self, RegistryError> {
        let mut commands = HashMap::new();

        for command in catalog::built_ins() {
            if is_allowed(allow_list, command.id()) {
                commands.insert(command.id().to_owned(), command);
            }
        }

        for pseudo in [Command::insert_style(), Command::set_attribute()] {
            commands.insert(pseudo.id().to_owned(), pseudo);
        }

        for spec in extensions {
            let command = Command::from_spec(spec)?;
            if let Some(replaced) = commands.insert(command.id().to_owned(), command) {
                debug!(
                    target: REGISTRY_TARGET,
                    id = replaced.id(),
                    "extension command replaced an earlier registration"
                );
            }
        }

        Ok(Self { commands })
    }

    /// Looks up a command by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.get(id)
    }

    /// Returns the number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` when no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the registered command ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Recomputes the state/enabled snapshot over every registered command.
    ///
    /// Computed on demand and never cached: a snapshot taken after a document
    /// mutation always reflects that mutation.
    #[must_use]
    pub fn snapshot(&self, doc: &dyn DocumentApi) -> CommandsInfo {
        self.commands
            .iter()
            .map(|(id, command)| {
                let info = CommandInfo {
                    state: command.query_state(doc),
                    enabled: command.query_enabled(doc),
                };
                (id.clone(), info)
            })
            .collect()
    }
}

/// Applies the allow-list filter to a built-in command id.
fn is_allowed(allow_list: &[String], id: &str) -> bool {
    allow_list.is_empty()
        || allow_list
            .iter()
            .any(|entry| entry == COMMAND_WILDCARD || entry == id)
}
