//! The document capability seam.
//!
//! The editable document lives in an isolated context; this crate never
//! manipulates it directly. Implementations of [`DocumentApi`] adapt whatever
//! native facility is actually available: a contentEditable surface, a glue
//! layer, or the in-memory `FakeDocument` double used in tests.

/// The native capabilities of the embedded editable document.
///
/// All methods take `&self`; implementations are expected to use interior
/// mutability, matching the single-threaded cooperative model on each side of
/// the boundary. Native command failures are reported as `false` returns,
/// never as panics.
pub trait DocumentApi {
    /// Executes a native document command with an optional value argument.
    ///
    /// Returns `false` when the native facility reports failure; callers do
    /// not retry.
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool;

    /// Queries the boolean toggle state of a native command.
    fn query_command_state(&self, command: &str) -> bool;

    /// Queries the current value of a native command.
    fn query_command_value(&self, command: &str) -> String;

    /// Queries whether a native command can currently execute.
    fn query_command_enabled(&self, command: &str) -> bool;

    /// Focuses the editable root element.
    fn focus(&self);

    /// Collapses the text selection to the end of the editable root.
    fn collapse_selection_to_end(&self);

    /// Sets one attribute on the editable root element.
    fn set_attribute(&self, name: &str, value: &str);

    /// Replaces the markup content of the editable root.
    fn set_inner_html(&self, html: &str);

    /// Returns the markup content of the editable root.
    fn inner_html(&self) -> String;

    /// Removes the style element with the given id, if present.
    fn remove_style_element(&self, id: &str);

    /// Appends a style element with the given id and CSS text.
    ///
    /// Returns `false` when the document rejects the insertion.
    fn insert_style_element(&self, id: &str, css: &str) -> bool;
}
