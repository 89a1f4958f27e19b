//! Stable command identifiers.
//!
//! Built-in command ids form a closed enumeration shared by both sides of the
//! boundary: the registry keys its command set by these strings and the host's
//! action constructors dispatch against them. Extension commands register
//! under arbitrary host-chosen ids outside this list.

/// Toggle bold formatting.
pub const BOLD: &str = "bold";
/// Toggle italic formatting.
pub const ITALIC: &str = "italic";
/// Toggle underline formatting.
pub const UNDERLINE: &str = "underline";
/// Toggle strike-through formatting.
pub const STRIKE_THROUGH: &str = "strikeThrough";
/// Toggle subscript formatting.
pub const SUBSCRIPT: &str = "subscript";
/// Toggle superscript formatting.
pub const SUPERSCRIPT: &str = "superscript";
/// Remove inline formatting from the selection.
pub const REMOVE_FORMAT: &str = "removeFormat";
/// Toggle an ordered list around the selection.
pub const INSERT_ORDERED_LIST: &str = "insertOrderedList";
/// Toggle an unordered list around the selection.
pub const INSERT_UNORDERED_LIST: &str = "insertUnorderedList";
/// Insert a horizontal rule.
pub const INSERT_HORIZONTAL_RULE: &str = "insertHorizontalRule";
/// Redo the last undone mutation.
pub const REDO: &str = "redo";
/// Undo the last mutation.
pub const UNDO: &str = "undo";
/// Increase the selection's indentation.
pub const INDENT: &str = "indent";
/// Decrease the selection's indentation.
pub const OUTDENT: &str = "outdent";
/// Left-align the selected block.
pub const JUSTIFY_LEFT: &str = "justifyLeft";
/// Right-align the selected block.
pub const JUSTIFY_RIGHT: &str = "justifyRight";
/// Centre the selected block.
pub const JUSTIFY_CENTER: &str = "justifyCenter";
/// Justify the selected block.
pub const JUSTIFY_FULL: &str = "justifyFull";
/// Set the text colour of the selection.
pub const FORE_COLOR: &str = "foreColor";
/// Set the background colour of the selection.
pub const BACK_COLOR: &str = "backColor";
/// Set the font size of the selection.
pub const FONT_SIZE: &str = "fontSize";
/// Set the font family of the selection.
pub const FONT_NAME: &str = "fontName";
/// Wrap the selected block in the given tag.
pub const FORMAT_BLOCK: &str = "formatBlock";
/// Insert raw markup at the caret.
pub const INSERT_HTML: &str = "insertHTML";
/// Insert plain text at the caret.
pub const INSERT_TEXT: &str = "insertText";
/// Insert an image at the caret.
pub const INSERT_IMAGE: &str = "insertImage";
/// Remove the link around the selection.
pub const UNLINK: &str = "unlink";
/// Insert a paragraph break at the caret.
pub const INSERT_PARAGRAPH: &str = "insertParagraph";
/// Copy the selection to the clipboard.
pub const COPY: &str = "copy";
/// Cut the selection to the clipboard.
pub const CUT: &str = "cut";
/// Select the entire document.
pub const SELECT_ALL: &str = "selectAll";
/// Delete the selection backwards.
pub const DELETE: &str = "delete";
/// Delete forwards from the caret.
pub const FORWARD_DELETE: &str = "forwardDelete";
/// Decrease the font size of the selection by one step.
pub const DECREASE_FONT_SIZE: &str = "decreaseFontSize";
/// Increase the font size of the selection by one step.
pub const INCREASE_FONT_SIZE: &str = "increaseFontSize";
/// Set the default paragraph separator tag.
pub const DEFAULT_PARAGRAPH_SEPARATOR: &str = "defaultParagraphSeparator";
/// Toggle CSS-based styling for formatting commands.
pub const STYLE_WITH_CSS: &str = "styleWithCSS";
/// Wrap the selection in a link.
pub const CREATE_LINK: &str = "createLink";

/// Apply a batch of attribute mutations to the editable root (pseudo-command).
pub const SET_ATTRIBUTE: &str = "setAttribute";
/// Replace the single injected stylesheet (pseudo-command).
pub const INSERT_STYLE: &str = "insertStyle";
/// Focus the editable root (runtime intrinsic, never registered).
pub const FOCUS: &str = "focus";
/// Trigger a selection snapshot (dispatch type with no registered command).
pub const SELECT: &str = "select";
