//! The host-side transport bridge.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use vellum_protocol::{
    Action, CommandsInfo, EditorEvent, EditorTransferObject, EventMessage, ProtocolError,
};

use crate::actions;
use crate::callbacks::EditorCallbacks;
use crate::error::BridgeError;
use crate::port::EditorPort;
use crate::props::{EditorProps, FocusPosition};

const BRIDGE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::bridge");

/// A swallowed failure surfaced for observability.
///
/// The bridge never lets a boundary failure escape as an error return; hosts
/// that want to see them register a diagnostics hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeDiagnostic {
    /// A dispatch was dropped because the content had not loaded yet.
    NotReady {
        /// Command id of the dropped action.
        kind: String,
    },
    /// An outbound action could not be serialised.
    Unserialisable {
        /// Command id of the dropped action.
        kind: String,
    },
    /// An inbound message was dropped with no raw fallback registered.
    Unparseable {
        /// Parse failure description.
        detail: String,
    },
}

/// The host-side half of the editor boundary.
///
/// Owns the native port, the declared props, the registered callbacks and
/// the readiness flag. Outbound traffic is gated on readiness; inbound
/// traffic is re-hydrated into typed events and fanned out.
pub struct EditorBridge<P> {
    port: P,
    props: EditorProps,
    callbacks: EditorCallbacks,
    diagnostics: Option<Box<dyn FnMut(BridgeDiagnostic)>>,
    ready: bool,
    data: CommandsInfo,
}

impl<P: EditorPort> EditorBridge<P> {
    /// Creates a bridge over the given port.
    ///
    /// The bridge starts not-ready; [`EditorBridge::handle_load`] flips it
    /// once the embedded content signals that it has loaded.
    #[must_use]
    pub fn new(port: P, props: EditorProps, callbacks: EditorCallbacks) -> Self {
        Self {
            port,
            props,
            callbacks,
            diagnostics: None,
            ready: false,
            data: CommandsInfo::new(),
        }
    }

    /// Registers a hook receiving every swallowed failure.
    #[must_use]
    pub fn with_diagnostics(mut self, hook: impl FnMut(BridgeDiagnostic) + 'static) -> Self {
        self.diagnostics = Some(Box::new(hook));
        self
    }

    /// Serialises the boot configuration for injection before content loads.
    ///
    /// The listener map is derived from which callbacks are registered, so
    /// the embedded context wires exactly the listeners the host consumes.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Boot`] if the configuration cannot be encoded.
    pub fn boot_config(&self) -> Result<String, BridgeError> {
        let options = EditorTransferObject::new(self.props.platform())
            .with_commands(self.props.commands().to_vec())
            .with_extra_commands(self.props.extensions().to_vec())
            .with_delay_long_press(self.props.delay_long_press())
            .with_listeners(self.callbacks.listener_set());
        Ok(options.to_wire()?)
    }

    /// Returns whether the embedded content has signalled readiness.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the last received command-state snapshot.
    #[must_use]
    pub const fn data(&self) -> &CommandsInfo {
        &self.data
    }

    /// Returns the declared props.
    #[must_use]
    pub const fn props(&self) -> &EditorProps {
        &self.props
    }

    /// Serialises and transmits one action.
    ///
    /// Dispatches before readiness are dropped and reported; the prop
    /// setters re-issue their syncs after [`EditorBridge::handle_load`], so
    /// declarative state is never permanently lost.
    pub fn dispatch(&mut self, action: &Action) {
        if !self.ready {
            debug!(
                target: BRIDGE_TARGET,
                command = action.kind(),
                "dropping dispatch before content load"
            );
            self.report(BridgeDiagnostic::NotReady {
                kind: action.kind().to_owned(),
            });
            return;
        }
        // The soft keyboard lives with the native view, not the document.
        if action.meta().is_some_and(|meta| meta.show_keyboard) {
            self.port.request_focus();
        }
        match action.to_wire() {
            Ok(wire) => self.port.post_message(&wire),
            Err(error) => {
                debug!(target: BRIDGE_TARGET, %error, "dropping unserialisable action");
                self.report(BridgeDiagnostic::Unserialisable {
                    kind: action.kind().to_owned(),
                });
            }
        }
    }

    /// Focuses the editor.
    ///
    /// Requests native view focus and dispatches a focus action, so the host
    /// view and the document selection stay consistent.
    pub fn focus(&mut self, position: Option<FocusPosition>) {
        self.port.request_focus();
        self.dispatch(&actions::focus(position));
    }

    /// Marks the content as loading; dispatches are dropped until
    /// [`EditorBridge::handle_load`].
    pub fn handle_load_start(&mut self) {
        self.ready = false;
    }

    /// Marks the content as loaded and syncs the declared props into it.
    pub fn handle_load(&mut self) {
        self.ready = true;
        self.sync_props();
        if let Some(position) = self.props.autofocus() {
            self.focus(Some(position));
        }
        if self.props.auto_select() {
            self.dispatch(&actions::select());
        }
    }

    /// Updates the placeholder text, syncing immediately when ready.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        if self.ready {
            self.dispatch(&actions::set_attribute([(
                "placeholder",
                placeholder.as_str(),
            )]));
        }
        self.props.set_placeholder(Some(placeholder));
    }

    /// Replaces the document content, syncing immediately when ready.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        if self.ready {
            self.dispatch(&actions::set_attribute([("innerHTML", content.as_str())]));
        }
        self.props.set_content(Some(content));
    }

    /// Replaces the injected stylesheet, syncing immediately when ready.
    pub fn set_styles(&mut self, css: impl Into<String>) {
        let css = css.into();
        if self.ready {
            self.dispatch(&actions::insert_style(css.clone()));
        }
        self.props.set_styles(Some(css));
    }

    /// Toggles document editability, syncing immediately when ready.
    pub fn set_content_editable(&mut self, editable: bool) {
        self.props.set_content_editable(editable);
        if self.ready {
            self.dispatch(&actions::set_attribute([(
                "contenteditable",
                if editable { "true" } else { "false" },
            )]));
        }
    }

    /// Handles one inbound wire message from the embedded context.
    ///
    /// Recognised messages become typed events with a capture timestamp and
    /// go to the callback registered for their kind; a `select` message also
    /// refreshes [`EditorBridge::data`]. Everything else goes to the raw
    /// fallback, or is reported and dropped when none is registered.
    pub fn handle_message(&mut self, raw: &str) {
        match EventMessage::from_wire(raw) {
            Ok(message) => self.deliver(message),
            Err(error) => self.fall_back(raw, &error),
        }
    }

    fn deliver(&mut self, message: EventMessage) {
        let kind = message.kind();
        let time_stamp = capture_timestamp();
        match message {
            EventMessage::Blur(payload) => {
                if let Some(callback) = self.callbacks.blur_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Focus(payload) => {
                if let Some(callback) = self.callbacks.focus_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Change(payload) => {
                if let Some(callback) = self.callbacks.change_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::KeyDown(payload) => {
                if let Some(callback) = self.callbacks.key_down_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::KeyUp(payload) => {
                if let Some(callback) = self.callbacks.key_up_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Select(payload) => {
                self.data = payload.data.clone();
                if let Some(callback) = self.callbacks.select_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Paste(payload) => {
                if let Some(callback) = self.callbacks.paste_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Input(payload) => {
                if let Some(callback) = self.callbacks.input_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::Press(payload) => {
                if let Some(callback) = self.callbacks.press_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
            EventMessage::LongPress(payload) => {
                if let Some(callback) = self.callbacks.long_press_mut() {
                    callback(EditorEvent::new(kind, time_stamp, payload));
                }
            }
        }
    }

    fn fall_back(&mut self, raw: &str, error: &ProtocolError) {
        if let Some(callback) = self.callbacks.raw_message_mut() {
            callback(raw);
            return;
        }
        debug!(target: BRIDGE_TARGET, %error, "dropping unparseable message");
        self.report(BridgeDiagnostic::Unparseable {
            detail: error.to_string(),
        });
    }

    fn report(&mut self, diagnostic: BridgeDiagnostic) {
        if let Some(hook) = self.diagnostics.as_mut() {
            hook(diagnostic);
        }
    }

    fn sync_props(&mut self) {
        self.dispatch(&actions::set_attribute([(
            "contenteditable",
            if self.props.content_editable() {
                "true"
            } else {
                "false"
            },
        )]));
        if let Some(placeholder) = self.props.placeholder() {
            let placeholder = placeholder.to_owned();
            self.dispatch(&actions::set_attribute([(
                "placeholder",
                placeholder.as_str(),
            )]));
        }
        if let Some(content) = self.props.content() {
            let content = content.to_owned();
            self.dispatch(&actions::set_attribute([("innerHTML", content.as_str())]));
        }
        if let Some(css) = self.props.styles() {
            let css = css.to_owned();
            self.dispatch(&actions::insert_style(css));
        }
    }
}

/// Milliseconds since the Unix epoch, saturating at zero on clock skew.
fn capture_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

#[cfg(test)]
mod tests;
