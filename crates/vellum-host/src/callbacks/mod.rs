//! Typed event callbacks registered by the host application.
//!
//! One callback per event kind, plus a raw fallback for messages the typed
//! parser does not recognise. The set of registered callbacks doubles as the
//! listener map sent to the embedded context at boot, so an event kind
//! nobody listens to produces no boundary traffic at all.

use vellum_protocol::{
    EditorEvent, ElementInfo, EventKind, InputPayload, KeyPayload, ListenerSet, SelectPayload,
    TextPayload,
};

type Callback<T> = Box<dyn FnMut(EditorEvent<T>)>;

/// The callbacks one editor instance fans events out to.
#[derive(Default)]
pub struct EditorCallbacks {
    blur: Option<Callback<TextPayload>>,
    focus: Option<Callback<TextPayload>>,
    change: Option<Callback<TextPayload>>,
    key_down: Option<Callback<KeyPayload>>,
    key_up: Option<Callback<KeyPayload>>,
    select: Option<Callback<SelectPayload>>,
    paste: Option<Callback<TextPayload>>,
    input: Option<Callback<InputPayload>>,
    press: Option<Callback<ElementInfo>>,
    long_press: Option<Callback<ElementInfo>>,
    raw_message: Option<Box<dyn FnMut(&str)>>,
}

impl EditorCallbacks {
    /// Creates an empty callback set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the blur callback.
    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut(EditorEvent<TextPayload>) + 'static) -> Self {
        self.blur = Some(Box::new(callback));
        self
    }

    /// Registers the focus callback.
    #[must_use]
    pub fn on_focus(mut self, callback: impl FnMut(EditorEvent<TextPayload>) + 'static) -> Self {
        self.focus = Some(Box::new(callback));
        self
    }

    /// Registers the debounced content-change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(EditorEvent<TextPayload>) + 'static) -> Self {
        self.change = Some(Box::new(callback));
        self
    }

    /// Registers the key-down callback.
    #[must_use]
    pub fn on_key_down(mut self, callback: impl FnMut(EditorEvent<KeyPayload>) + 'static) -> Self {
        self.key_down = Some(Box::new(callback));
        self
    }

    /// Registers the key-up callback.
    #[must_use]
    pub fn on_key_up(mut self, callback: impl FnMut(EditorEvent<KeyPayload>) + 'static) -> Self {
        self.key_up = Some(Box::new(callback));
        self
    }

    /// Registers the selection-snapshot callback.
    #[must_use]
    pub fn on_select(
        mut self,
        callback: impl FnMut(EditorEvent<SelectPayload>) + 'static,
    ) -> Self {
        self.select = Some(Box::new(callback));
        self
    }

    /// Registers the paste callback.
    #[must_use]
    pub fn on_paste(mut self, callback: impl FnMut(EditorEvent<TextPayload>) + 'static) -> Self {
        self.paste = Some(Box::new(callback));
        self
    }

    /// Registers the raw input-event callback.
    #[must_use]
    pub fn on_input(mut self, callback: impl FnMut(EditorEvent<InputPayload>) + 'static) -> Self {
        self.input = Some(Box::new(callback));
        self
    }

    /// Registers the short-press callback.
    #[must_use]
    pub fn on_press(mut self, callback: impl FnMut(EditorEvent<ElementInfo>) + 'static) -> Self {
        self.press = Some(Box::new(callback));
        self
    }

    /// Registers the long-press callback.
    #[must_use]
    pub fn on_long_press(
        mut self,
        callback: impl FnMut(EditorEvent<ElementInfo>) + 'static,
    ) -> Self {
        self.long_press = Some(Box::new(callback));
        self
    }

    /// Registers the fallback for messages the typed parser rejects.
    #[must_use]
    pub fn on_raw_message(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.raw_message = Some(Box::new(callback));
        self
    }

    /// Derives the listener map sent to the embedded context at boot.
    #[must_use]
    pub fn listener_set(&self) -> ListenerSet {
        let mut listeners = ListenerSet::new();
        listeners.set(EventKind::Blur, self.blur.is_some());
        listeners.set(EventKind::Focus, self.focus.is_some());
        listeners.set(EventKind::Change, self.change.is_some());
        listeners.set(EventKind::KeyDown, self.key_down.is_some());
        listeners.set(EventKind::KeyUp, self.key_up.is_some());
        listeners.set(EventKind::Select, self.select.is_some());
        listeners.set(EventKind::Paste, self.paste.is_some());
        listeners.set(EventKind::Input, self.input.is_some());
        listeners.set(EventKind::Press, self.press.is_some());
        listeners.set(EventKind::LongPress, self.long_press.is_some());
        listeners
    }

    pub(crate) fn blur_mut(&mut self) -> Option<&mut Callback<TextPayload>> {
        self.blur.as_mut()
    }

    pub(crate) fn focus_mut(&mut self) -> Option<&mut Callback<TextPayload>> {
        self.focus.as_mut()
    }

    pub(crate) fn change_mut(&mut self) -> Option<&mut Callback<TextPayload>> {
        self.change.as_mut()
    }

    pub(crate) fn key_down_mut(&mut self) -> Option<&mut Callback<KeyPayload>> {
        self.key_down.as_mut()
    }

    pub(crate) fn key_up_mut(&mut self) -> Option<&mut Callback<KeyPayload>> {
        self.key_up.as_mut()
    }

    pub(crate) fn select_mut(&mut self) -> Option<&mut Callback<SelectPayload>> {
        self.select.as_mut()
    }

    pub(crate) fn paste_mut(&mut self) -> Option<&mut Callback<TextPayload>> {
        self.paste.as_mut()
    }

    pub(crate) fn input_mut(&mut self) -> Option<&mut Callback<InputPayload>> {
        self.input.as_mut()
    }

    pub(crate) fn press_mut(&mut self) -> Option<&mut Callback<ElementInfo>> {
        self.press.as_mut()
    }

    pub(crate) fn long_press_mut(&mut self) -> Option<&mut Callback<ElementInfo>> {
        self.long_press.as_mut()
    }

    pub(crate) fn raw_message_mut(&mut self) -> Option<&mut Box<dyn FnMut(&str)>> {
        self.raw_message.as_mut()
    }
}

impl std::fmt::Debug for EditorCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorCallbacks")
            .field("listeners", &self.listener_set())
            .field("raw_message", &self.raw_message.is_some())
            .finish()
    }
}
