//! The native view seam.

#[cfg(test)]
use mockall::automock;

/// Capabilities of the native view hosting the embedded document.
///
/// The two operations are the full extent of the host's reach: push one
/// string through the message channel, or focus the native view itself.
/// Everything richer is built on top of them.
#[cfg_attr(test, automock)]
pub trait EditorPort {
    /// Transmits one serialised action into the embedded context.
    fn post_message(&self, message: &str);

    /// Focuses the native view hosting the document.
    fn request_focus(&self);
}
