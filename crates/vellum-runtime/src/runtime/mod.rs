//! The embedded-context state machine.

use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;
use vellum_commands::{CommandRegistry, DocumentApi, RegistryError};
use vellum_config::defaults;
use vellum_protocol::{
    ids, Action, EditorTransferObject, ElementInfo, EventKind, EventMessage, InputPayload,
    KeyPayload, ListenerSet, SelectPayload, TextPayload,
};

use crate::schedule::{DebounceSlot, LongPressTracker, PressClass};
use crate::signal::DomSignal;
use crate::sink::EventSink;

const RUNTIME_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::runtime");

/// The runtime living next to the editable document.
///
/// Constructed once per page load from the injected boot configuration. All
/// entry points take a caller-supplied monotonic `now`; the embedding glue
/// is expected to pump [`EditorRuntime::tick`] so debounced slots and the
/// long-press deadline actually fire.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use std::time::Instant;
///
/// use vellum_protocol::{EditorTransferObject, Platform};
/// use vellum_runtime::EditorRuntime;
///
/// # struct NullDoc;
/// # impl vellum_commands::DocumentApi for NullDoc {
/// #     fn exec_command(&self, _: &str, _: Option<&str>) -> bool { false }
/// #     fn query_command_state(&self, _: &str) -> bool { false }
/// #     fn query_command_value(&self, _: &str) -> String { String::new() }
/// #     fn query_command_enabled(&self, _: &str) -> bool { false }
/// #     fn focus(&self) {}
/// #     fn collapse_selection_to_end(&self) {}
/// #     fn set_attribute(&self, _: &str, _: &str) {}
/// #     fn set_inner_html(&self, _: &str) {}
/// #     fn inner_html(&self) -> String { String::new() }
/// #     fn remove_style_element(&self, _: &str) {}
/// #     fn insert_style_element(&self, _: &str, _: &str) -> bool { true }
/// # }
/// let options = EditorTransferObject::new(Platform::Web);
/// let mut runtime = EditorRuntime::new(options, Rc::new(NullDoc), None).expect("registry");
/// runtime.handle_message(r#"{"type":"bold"}"#, Instant::now());
/// ```
pub struct EditorRuntime {
    registry: CommandRegistry,
    document: Rc<dyn DocumentApi>,
    sink: Option<Box<dyn EventSink>>,
    listeners: ListenerSet,
    select_slot: DebounceSlot,
    change_slot: DebounceSlot,
    long_press: LongPressTracker,
}

impl EditorRuntime {
    /// Builds a runtime from the injected boot configuration.
    ///
    /// A `None` sink leaves the runtime mute: every outbound post becomes a
    /// no-op while inbound dispatch keeps working.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when an extension descriptor in the
    /// configuration fails to compile, in which case no runtime is created.
    pub fn new(
        options: EditorTransferObject,
        document: Rc<dyn DocumentApi>,
        sink: Option<Box<dyn EventSink>>,
    ) -> Result<Self, RegistryError> {
        let registry = CommandRegistry::build(options.commands(), options.extra_commands())?;
        let delay = Duration::from_millis(options.delay_long_press());
        Ok(Self {
            registry,
            document,
            sink,
            listeners: options.listeners().clone(),
            select_slot: DebounceSlot::new(defaults::DEBOUNCE_WINDOW),
            change_slot: DebounceSlot::new(defaults::DEBOUNCE_WINDOW),
            long_press: LongPressTracker::new(delay),
        })
    }

    /// Returns the command registry built at construction.
    #[must_use]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Feeds one raw DOM signal into the state machine.
    ///
    /// Signals whose event kind has no registered host callback are dropped
    /// at this edge, except where they also feed a synthesized detector
    /// whose own kind is wired.
    pub fn handle_signal(&mut self, signal: DomSignal, now: Instant) {
        match signal {
            DomSignal::Input { input_type, data } => {
                if self.listeners.is_active(EventKind::Input) {
                    self.post(&EventMessage::Input(InputPayload::new(input_type, data)));
                }
                if self.listeners.is_active(EventKind::Change) {
                    self.change_slot.trigger(now);
                }
            }
            DomSignal::KeyDown { key } => {
                // Deletions do not raise a native selection event.
                if self.listeners.is_active(EventKind::Select) && key == "Backspace" {
                    self.select_slot.trigger(now);
                }
                if self.listeners.is_active(EventKind::KeyDown) {
                    self.post(&EventMessage::KeyDown(KeyPayload::new(key)));
                }
            }
            DomSignal::KeyUp { key } => {
                if self.listeners.is_active(EventKind::Select) {
                    self.select_slot.trigger(now);
                }
                if self.listeners.is_active(EventKind::KeyUp) {
                    self.post(&EventMessage::KeyUp(KeyPayload::new(key)));
                }
            }
            DomSignal::MouseUp | DomSignal::TouchEnd | DomSignal::TouchCancel => {
                if self.listeners.is_active(EventKind::Select) {
                    self.select_slot.trigger(now);
                }
            }
            DomSignal::FocusIn => {
                if self.listeners.is_active(EventKind::Focus) {
                    let text = self.snapshot_text();
                    self.post(&EventMessage::Focus(TextPayload::new(text)));
                }
            }
            DomSignal::FocusOut => {
                if self.listeners.is_active(EventKind::Blur) {
                    let text = self.snapshot_text();
                    self.post(&EventMessage::Blur(TextPayload::new(text)));
                }
            }
            DomSignal::Paste { text } => {
                if self.listeners.is_active(EventKind::Paste) {
                    self.post(&EventMessage::Paste(TextPayload::new(text)));
                }
            }
            DomSignal::PointerDown { target } => {
                if self.listeners.is_active(EventKind::LongPress) {
                    self.long_press.press(now, target);
                }
            }
            DomSignal::PointerUp { target } => self.pointer_up(target, now),
            DomSignal::PointerLeave | DomSignal::PointerCancel => self.long_press.cancel(),
        }
    }

    /// Flushes every due slot.
    ///
    /// Selection snapshots are taken at flush time, not trigger time, so the
    /// posted state reflects the document after the burst that armed the
    /// slot.
    pub fn tick(&mut self, now: Instant) {
        if self.select_slot.fire_due(now) {
            let snapshot = self.registry.snapshot(self.document.as_ref());
            self.post(&EventMessage::Select(SelectPayload::new(snapshot)));
        }
        if self.change_slot.fire_due(now) {
            let text = self.snapshot_text();
            self.post(&EventMessage::Change(TextPayload::new(text)));
        }
        if let Some(target) = self.long_press.fire_due(now) {
            self.post(&EventMessage::LongPress(target));
        }
    }

    /// Handles one inbound dispatch string from the host.
    ///
    /// Malformed messages and unknown command ids are dropped without any
    /// outbound reaction; a trace line is the only witness.
    pub fn handle_message(&mut self, raw: &str, now: Instant) {
        let action = match Action::from_wire(raw) {
            Ok(action) => action,
            Err(error) => {
                debug!(target: RUNTIME_TARGET, %error, "dropping malformed dispatch");
                return;
            }
        };

        let meta = action.meta().copied().unwrap_or_default();
        if meta.focusable {
            self.document.focus();
        }

        if action.kind() == ids::FOCUS {
            // Focus is a runtime intrinsic, never a registry entry.
            if !meta.focusable {
                self.document.focus();
            }
            if action.payload().and_then(serde_json::Value::as_str) == Some("end") {
                self.document.collapse_selection_to_end();
            }
        } else if let Some(command) = self.registry.get(action.kind()) {
            let applied = command.exec(self.document.as_ref(), action.payload());
            if !applied {
                debug!(
                    target: RUNTIME_TARGET,
                    command = action.kind(),
                    "document refused command"
                );
            }
        } else {
            debug!(
                target: RUNTIME_TARGET,
                command = action.kind(),
                "dropping dispatch for unregistered command"
            );
        }

        // The host asked for a fresh snapshot whether or not a select
        // listener produced the command in the first place.
        if meta.selectable {
            self.select_slot.trigger(now);
        }
    }

    fn pointer_up(&mut self, target: ElementInfo, now: Instant) {
        match self.long_press.release(now) {
            PressClass::Long { unfired } => {
                if let Some(pressed) = unfired {
                    self.post(&EventMessage::LongPress(pressed));
                }
            }
            PressClass::Short => {
                if self.listeners.is_active(EventKind::Press) {
                    self.post(&EventMessage::Press(target));
                }
            }
        }
    }

    /// Reads the root markup, normalising a placeholder-only root to empty.
    fn snapshot_text(&self) -> String {
        let html = self.document.inner_html();
        if html.trim() == defaults::LINE_BREAK_PLACEHOLDER {
            String::new()
        } else {
            html
        }
    }

    fn post(&self, message: &EventMessage) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        match message.to_wire() {
            Ok(wire) => sink.post(&wire),
            Err(error) => {
                debug!(target: RUNTIME_TARGET, %error, "dropping unserialisable event");
            }
        }
    }
}
