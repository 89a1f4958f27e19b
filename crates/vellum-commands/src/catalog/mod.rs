//! The built-in command catalog.
//!
//! A fixed, compile-time enumerable list of constructors for every
//! document-native command. Pseudo-commands are not part of the catalog; the
//! registry appends them unconditionally after allow-list filtering.

use vellum_protocol::ids;

use crate::command::Command;

/// Built-in commands whose state is a discrete boolean toggle, keyed by their
/// own id as the native command name.
const TOGGLE_IDS: &[&str] = &[
    ids::BOLD,
    ids::ITALIC,
    ids::UNDERLINE,
    ids::STRIKE_THROUGH,
    ids::SUBSCRIPT,
    ids::SUPERSCRIPT,
    ids::REMOVE_FORMAT,
    ids::INSERT_ORDERED_LIST,
    ids::INSERT_UNORDERED_LIST,
    ids::INSERT_HORIZONTAL_RULE,
    ids::REDO,
    ids::UNDO,
    ids::INDENT,
    ids::OUTDENT,
    ids::JUSTIFY_LEFT,
    ids::JUSTIFY_RIGHT,
    ids::JUSTIFY_CENTER,
    ids::JUSTIFY_FULL,
    ids::INSERT_HTML,
    ids::INSERT_TEXT,
    ids::INSERT_IMAGE,
    ids::UNLINK,
    ids::INSERT_PARAGRAPH,
    ids::COPY,
    ids::CUT,
    ids::SELECT_ALL,
    ids::DELETE,
    ids::FORWARD_DELETE,
    ids::DECREASE_FONT_SIZE,
    ids::INCREASE_FONT_SIZE,
    ids::DEFAULT_PARAGRAPH_SEPARATOR,
    ids::STYLE_WITH_CSS,
    ids::CREATE_LINK,
];

/// Built-in commands with a value domain; "active" for these means "current
/// value equals the dispatched value", compared by the consumer.
const VALUE_IDS: &[&str] = &[
    ids::FORE_COLOR,
    ids::BACK_COLOR,
    ids::FONT_SIZE,
    ids::FONT_NAME,
];

/// Constructs one instance of every built-in command.
#[must_use]
pub fn built_ins() -> Vec<Command> {
    let mut commands = Vec::with_capacity(TOGGLE_IDS.len() + VALUE_IDS.len() + 1);
    commands.extend(TOGGLE_IDS.iter().map(|id| Command::toggle(id)));
    commands.extend(VALUE_IDS.iter().map(|id| Command::value(id)));
    commands.push(Command::format_block());
    commands
}
