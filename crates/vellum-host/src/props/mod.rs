//! Declared editor properties.
//!
//! Props describe the desired editor surface: which commands are available,
//! what the document should contain, how it should look. The bridge reads
//! them at boot and re-issues the relevant sync whenever a setter changes
//! one after the content has loaded.

use strum::{Display, EnumString};
use vellum_protocol::{ExtensionSpec, Platform};

/// Caret position for a programmatic focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FocusPosition {
    /// Place the caret at the start of the document.
    Start,
    /// Collapse the selection to the end of the document.
    End,
}

/// Declared properties of one editor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorProps {
    platform: Platform,
    commands: Vec<String>,
    extensions: Vec<ExtensionSpec>,
    delay_long_press: u64,
    placeholder: Option<String>,
    content: Option<String>,
    styles: Option<String>,
    content_editable: bool,
    autofocus: Option<FocusPosition>,
    auto_select: bool,
}

impl EditorProps {
    /// Creates props for the given platform.
    ///
    /// Defaults: every built-in command, no extensions, the default
    /// long-press delay, an editable document, no placeholder, no initial
    /// content, no styles, no autofocus and no auto-select.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let delay = vellum_config::defaults::DEFAULT_LONG_PRESS_DELAY.as_millis();
        Self {
            platform,
            commands: Vec::new(),
            extensions: Vec::new(),
            delay_long_press: u64::try_from(delay).unwrap_or(u64::MAX),
            placeholder: None,
            content: None,
            styles: None,
            content_editable: true,
            autofocus: None,
            auto_select: false,
        }
    }

    /// Sets the command allow-list.
    #[must_use]
    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    /// Sets the extension command descriptors.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<ExtensionSpec>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the long-press threshold in milliseconds.
    #[must_use]
    pub const fn with_delay_long_press(mut self, millis: u64) -> Self {
        self.delay_long_press = millis;
        self
    }

    /// Sets the placeholder text shown while the document is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the initial markup content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the stylesheet injected into the document.
    #[must_use]
    pub fn with_styles(mut self, css: impl Into<String>) -> Self {
        self.styles = Some(css.into());
        self
    }

    /// Sets whether the document accepts edits.
    #[must_use]
    pub const fn with_content_editable(mut self, editable: bool) -> Self {
        self.content_editable = editable;
        self
    }

    /// Requests focus at the given position once the content has loaded.
    #[must_use]
    pub const fn with_autofocus(mut self, position: FocusPosition) -> Self {
        self.autofocus = Some(position);
        self
    }

    /// Requests a selection snapshot once the content has loaded.
    #[must_use]
    pub const fn with_auto_select(mut self, auto_select: bool) -> Self {
        self.auto_select = auto_select;
        self
    }

    /// Returns the host platform.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns the command allow-list.
    #[must_use]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Returns the extension command descriptors.
    #[must_use]
    pub fn extensions(&self) -> &[ExtensionSpec] {
        &self.extensions
    }

    /// Returns the long-press threshold in milliseconds.
    #[must_use]
    pub const fn delay_long_press(&self) -> u64 {
        self.delay_long_press
    }

    /// Returns the placeholder text, if any.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Returns the declared markup content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the declared stylesheet, if any.
    #[must_use]
    pub fn styles(&self) -> Option<&str> {
        self.styles.as_deref()
    }

    /// Returns whether the document accepts edits.
    #[must_use]
    pub const fn content_editable(&self) -> bool {
        self.content_editable
    }

    /// Returns the on-load focus request, if any.
    #[must_use]
    pub const fn autofocus(&self) -> Option<FocusPosition> {
        self.autofocus
    }

    /// Returns whether a selection snapshot is requested on load.
    #[must_use]
    pub const fn auto_select(&self) -> bool {
        self.auto_select
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.placeholder = placeholder;
    }

    pub(crate) fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub(crate) fn set_styles(&mut self, styles: Option<String>) {
        self.styles = styles;
    }

    pub(crate) fn set_content_editable(&mut self, editable: bool) {
        self.content_editable = editable;
    }
}
