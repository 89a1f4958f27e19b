//! In-memory test double for the embedded document.
//!
//! [`FakeDocument`] models just enough of a contentEditable surface to
//! exercise the command layer and the runtime: toggle commands flip a
//! membership set, value commands record their last value, content-inserting
//! commands append to the root markup, and the pseudo-command surfaces
//! (attributes, stylesheet slots, focus, selection) record what happened so
//! tests can assert on it. Downstream crates enable the `test-support`
//! feature to drive their own tests against it.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use vellum_protocol::ids;

use crate::document::DocumentApi;

/// Native commands the fake treats as value commands.
const VALUE_NATIVE: &[&str] = &[
    ids::FORE_COLOR,
    ids::BACK_COLOR,
    ids::FONT_SIZE,
    ids::FONT_NAME,
    ids::FORMAT_BLOCK,
    ids::DEFAULT_PARAGRAPH_SEPARATOR,
];

/// Native commands the fake treats as content insertion.
const INSERT_NATIVE: &[&str] = &[ids::INSERT_HTML, ids::INSERT_TEXT];

#[derive(Debug, Default)]
struct FakeState {
    toggles: BTreeSet<String>,
    values: BTreeMap<String, String>,
    disabled: BTreeSet<String>,
    failing: BTreeSet<String>,
    inner_html: String,
    attributes: BTreeMap<String, String>,
    styles: Vec<(String, String)>,
    exec_log: Vec<(String, Option<String>)>,
    focus_count: usize,
    selection_at_end: bool,
}

/// Stateful in-memory implementation of [`DocumentApi`].
#[derive(Debug, Default)]
pub struct FakeDocument {
    state: RefCell<FakeState>,
}

impl FakeDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a native command as failing: `exec_command` will report `false`.
    pub fn set_failing(&self, command: &str) {
        self.state.borrow_mut().failing.insert(command.to_owned());
    }

    /// Marks a native command as disabled.
    pub fn set_disabled(&self, command: &str) {
        self.state.borrow_mut().disabled.insert(command.to_owned());
    }

    /// Seeds the current value of a value command.
    pub fn set_value(&self, command: &str, value: &str) {
        self.state
            .borrow_mut()
            .values
            .insert(command.to_owned(), value.to_owned());
    }

    /// Seeds the root markup directly, bypassing the exec log.
    pub fn seed_inner_html(&self, html: &str) {
        self.state.borrow_mut().inner_html = html.to_owned();
    }

    /// Returns one root attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    /// Returns the style elements currently present, in insertion order.
    #[must_use]
    pub fn style_elements(&self) -> Vec<(String, String)> {
        self.state.borrow().styles.clone()
    }

    /// Returns how many times the root was focused.
    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.state.borrow().focus_count
    }

    /// Returns whether the selection was collapsed to the end of the root.
    #[must_use]
    pub fn selection_at_end(&self) -> bool {
        self.state.borrow().selection_at_end
    }

    /// Returns the native commands executed so far, with their values.
    #[must_use]
    pub fn exec_log(&self) -> Vec<(String, Option<String>)> {
        self.state.borrow().exec_log.clone()
    }
}

impl DocumentApi for FakeDocument {
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        let mut state = self.state.borrow_mut();
        state
            .exec_log
            .push((command.to_owned(), value.map(str::to_owned)));
        if state.failing.contains(command) {
            return false;
        }
        if VALUE_NATIVE.contains(&command) {
            state
                .values
                .insert(command.to_owned(), value.unwrap_or_default().to_owned());
        } else if INSERT_NATIVE.contains(&command) {
            let inserted = value.unwrap_or_default().to_owned();
            state.inner_html.push_str(&inserted);
        } else if state.toggles.contains(command) {
            state.toggles.remove(command);
        } else {
            state.toggles.insert(command.to_owned());
        }
        true
    }

    fn query_command_state(&self, command: &str) -> bool {
        self.state.borrow().toggles.contains(command)
    }

    fn query_command_value(&self, command: &str) -> String {
        self.state
            .borrow()
            .values
            .get(command)
            .cloned()
            .unwrap_or_default()
    }

    fn query_command_enabled(&self, command: &str) -> bool {
        !self.state.borrow().disabled.contains(command)
    }

    fn focus(&self) {
        self.state.borrow_mut().focus_count += 1;
    }

    fn collapse_selection_to_end(&self) {
        self.state.borrow_mut().selection_at_end = true;
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_inner_html(&self, html: &str) {
        self.state.borrow_mut().inner_html = html.to_owned();
    }

    fn inner_html(&self) -> String {
        self.state.borrow().inner_html.clone()
    }

    fn remove_style_element(&self, id: &str) {
        self.state
            .borrow_mut()
            .styles
            .retain(|(existing, _)| existing != id);
    }

    fn insert_style_element(&self, id: &str, css: &str) -> bool {
        self.state
            .borrow_mut()
            .styles
            .push((id.to_owned(), css.to_owned()));
        true
    }
}
