//! DOM signals fed into the runtime by the embedding glue.
//!
//! The glue layer that owns the real DOM listeners translates each raw event
//! into one of these variants. The runtime decides, based on the boot
//! configuration's listener map, whether a signal produces an outbound
//! event, feeds a synthesized detector, or is ignored entirely.

use vellum_protocol::ElementInfo;

/// A raw interaction observed on the editable root.
#[derive(Debug, Clone, PartialEq)]
pub enum DomSignal {
    /// An input event mutated the document.
    Input {
        /// Native input type (for example `insertText`).
        input_type: String,
        /// Inserted data, when the input type carries any.
        data: Option<String>,
    },
    /// A key was pressed down.
    KeyDown {
        /// Key string as reported by the document.
        key: String,
    },
    /// A key was released.
    KeyUp {
        /// Key string as reported by the document.
        key: String,
    },
    /// The primary mouse button was released over the root.
    MouseUp,
    /// A touch interaction ended.
    TouchEnd,
    /// A touch interaction was cancelled.
    TouchCancel,
    /// The editable root gained focus.
    FocusIn,
    /// The editable root lost focus.
    FocusOut,
    /// Content was pasted into the document.
    Paste {
        /// Plain-text clipboard snapshot.
        text: String,
    },
    /// A pointer went down on a document element.
    PointerDown {
        /// The element under the pointer.
        target: ElementInfo,
    },
    /// A pointer was lifted from a document element.
    PointerUp {
        /// The element under the pointer.
        target: ElementInfo,
    },
    /// The pointer left the editable root.
    PointerLeave,
    /// The pointer interaction was cancelled.
    PointerCancel,
}
