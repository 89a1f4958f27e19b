//! Action constructors for every built-in command.
//!
//! Each constructor attaches the meta flags the command conventionally
//! carries: formatting commands focus the document first and refresh the
//! selection snapshot afterwards, `focus` only focuses, `select` only
//! refreshes, and the pseudo-commands carry no meta at all.

use vellum_protocol::{ids, Action, ActionMeta};

use crate::props::FocusPosition;

fn formatting(id: &str) -> Action {
    Action::new(id).with_meta(ActionMeta::focus_and_select())
}

fn formatting_with(id: &str, value: impl Into<String>) -> Action {
    formatting(id).with_payload(value.into())
}

macro_rules! plain_actions {
    ($($(#[$doc:meta])* $name:ident => $id:expr;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name() -> Action {
                formatting($id)
            }
        )*
    };
}

plain_actions! {
    /// Toggles bold formatting on the selection.
    bold => ids::BOLD;
    /// Toggles italic formatting on the selection.
    italic => ids::ITALIC;
    /// Toggles underline formatting on the selection.
    underline => ids::UNDERLINE;
    /// Toggles strike-through formatting on the selection.
    strike_through => ids::STRIKE_THROUGH;
    /// Toggles subscript formatting on the selection.
    subscript => ids::SUBSCRIPT;
    /// Toggles superscript formatting on the selection.
    superscript => ids::SUPERSCRIPT;
    /// Removes inline formatting from the selection.
    remove_format => ids::REMOVE_FORMAT;
    /// Toggles an ordered list around the selection.
    ordered_list => ids::INSERT_ORDERED_LIST;
    /// Toggles an unordered list around the selection.
    unordered_list => ids::INSERT_UNORDERED_LIST;
    /// Inserts a horizontal rule at the caret.
    horizontal_rule => ids::INSERT_HORIZONTAL_RULE;
    /// Redoes the last undone mutation.
    redo => ids::REDO;
    /// Undoes the last mutation.
    undo => ids::UNDO;
    /// Increases the selection's indentation.
    indent => ids::INDENT;
    /// Decreases the selection's indentation.
    outdent => ids::OUTDENT;
    /// Left-aligns the selected block.
    justify_left => ids::JUSTIFY_LEFT;
    /// Right-aligns the selected block.
    justify_right => ids::JUSTIFY_RIGHT;
    /// Centres the selected block.
    justify_center => ids::JUSTIFY_CENTER;
    /// Justifies the selected block.
    justify_full => ids::JUSTIFY_FULL;
    /// Removes the link around the selection.
    unlink => ids::UNLINK;
    /// Inserts a paragraph break at the caret.
    paragraph => ids::INSERT_PARAGRAPH;
    /// Cuts the selection to the clipboard.
    cut => ids::CUT;
    /// Selects the entire document.
    select_all => ids::SELECT_ALL;
    /// Deletes the selection backwards.
    delete => ids::DELETE;
    /// Deletes forwards from the caret.
    forward_delete => ids::FORWARD_DELETE;
    /// Decreases the font size of the selection by one step.
    decrease_font_size => ids::DECREASE_FONT_SIZE;
    /// Increases the font size of the selection by one step.
    increase_font_size => ids::INCREASE_FONT_SIZE;
}

/// Copies the selection to the clipboard without disturbing it.
#[must_use]
pub fn copy() -> Action {
    Action::new(ids::COPY).with_meta(ActionMeta::focus_only())
}

/// Wraps the selected block in the given tag.
#[must_use]
pub fn format_block(tag: impl Into<String>) -> Action {
    formatting_with(ids::FORMAT_BLOCK, tag)
}

/// Sets the text colour of the selection.
#[must_use]
pub fn fore_color(color: impl Into<String>) -> Action {
    formatting_with(ids::FORE_COLOR, color)
}

/// Sets the background colour of the selection.
#[must_use]
pub fn back_color(color: impl Into<String>) -> Action {
    formatting_with(ids::BACK_COLOR, color)
}

/// Sets the font size of the selection.
#[must_use]
pub fn font_size(size: impl Into<String>) -> Action {
    formatting_with(ids::FONT_SIZE, size)
}

/// Sets the font family of the selection.
#[must_use]
pub fn font_name(name: impl Into<String>) -> Action {
    formatting_with(ids::FONT_NAME, name)
}

/// Wraps the selection in a link to the given URL.
#[must_use]
pub fn create_link(url: impl Into<String>) -> Action {
    formatting_with(ids::CREATE_LINK, url)
}

/// Inserts an image at the caret.
#[must_use]
pub fn insert_image(src: impl Into<String>) -> Action {
    formatting_with(ids::INSERT_IMAGE, src)
}

/// Inserts raw markup at the caret.
#[must_use]
pub fn insert_html(html: impl Into<String>) -> Action {
    formatting_with(ids::INSERT_HTML, html)
}

/// Inserts plain text at the caret.
#[must_use]
pub fn insert_text(text: impl Into<String>) -> Action {
    formatting_with(ids::INSERT_TEXT, text)
}

/// Sets the default paragraph separator tag.
#[must_use]
pub fn default_paragraph_separator(tag: impl Into<String>) -> Action {
    formatting_with(ids::DEFAULT_PARAGRAPH_SEPARATOR, tag)
}

/// Toggles CSS-based styling for formatting commands.
#[must_use]
pub fn style_with_css(enabled: bool) -> Action {
    formatting_with(ids::STYLE_WITH_CSS, if enabled { "true" } else { "false" })
}

/// Replaces the single injected stylesheet with the given CSS.
#[must_use]
pub fn insert_style(css: impl Into<String>) -> Action {
    Action::new(ids::INSERT_STYLE).with_payload(css.into())
}

/// Applies a batch of attribute mutations to the editable root.
///
/// The reserved `innerHTML` key replaces the root's markup instead of
/// setting an attribute.
#[must_use]
pub fn set_attribute<I, K, V>(attributes: I) -> Action
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let map: serde_json::Map<String, serde_json::Value> = attributes
        .into_iter()
        .map(|(name, value)| (name.into(), serde_json::Value::String(value.into())))
        .collect();
    Action::new(ids::SET_ATTRIBUTE).with_payload(serde_json::Value::Object(map))
}

/// Focuses the editable root, optionally at a caret position.
#[must_use]
pub fn focus(position: Option<FocusPosition>) -> Action {
    let action = Action::new(ids::FOCUS).with_meta(ActionMeta::focus_only());
    match position {
        Some(position) => action.with_payload(position.to_string()),
        None => action,
    }
}

/// Requests a fresh selection snapshot without executing anything.
#[must_use]
pub fn select() -> Action {
    Action::new(ids::SELECT).with_meta(ActionMeta::select_only())
}
