//! Unit tests for the transport bridge.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use vellum_protocol::{
    Action, CommandInfo, CommandsInfo, EditorEvent, EditorTransferObject, EventKind, EventMessage,
    Platform, SelectPayload, TextPayload,
};

use super::{BridgeDiagnostic, EditorBridge};
use crate::actions;
use crate::callbacks::EditorCallbacks;
use crate::port::{EditorPort, MockEditorPort};
use crate::props::{EditorProps, FocusPosition};

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct RecordingPort {
    posted: Rc<RefCell<Vec<String>>>,
    focus_requests: Rc<RefCell<usize>>,
}

impl RecordingPort {
    fn actions(&self) -> Vec<Action> {
        self.posted
            .borrow()
            .iter()
            .map(|raw| Action::from_wire(raw).expect("posted action parses"))
            .collect()
    }

    fn focus_requests(&self) -> usize {
        *self.focus_requests.borrow()
    }
}

impl EditorPort for RecordingPort {
    fn post_message(&self, message: &str) {
        self.posted.borrow_mut().push(message.to_owned());
    }

    fn request_focus(&self) {
        *self.focus_requests.borrow_mut() += 1;
    }
}

#[derive(Clone, Default)]
struct DiagnosticLog {
    entries: Rc<RefCell<Vec<BridgeDiagnostic>>>,
}

impl DiagnosticLog {
    fn hook(&self) -> impl FnMut(BridgeDiagnostic) + 'static {
        let entries = Rc::clone(&self.entries);
        move |diagnostic| entries.borrow_mut().push(diagnostic)
    }

    fn entries(&self) -> Vec<BridgeDiagnostic> {
        self.entries.borrow().clone()
    }
}

fn bridge(callbacks: EditorCallbacks) -> (EditorBridge<RecordingPort>, RecordingPort) {
    let port = RecordingPort::default();
    let bridge = EditorBridge::new(
        port.clone(),
        EditorProps::new(Platform::Web),
        callbacks,
    );
    (bridge, port)
}

// ---------------------------------------------------------------------------
// Boot configuration
// ---------------------------------------------------------------------------

#[test]
fn boot_config_derives_listeners_from_registered_callbacks() {
    let callbacks = EditorCallbacks::new()
        .on_change(|_| {})
        .on_select(|_| {});
    let props = EditorProps::new(Platform::Ios)
        .with_commands(vec!["bold".into()])
        .with_delay_long_press(750);
    let bridge = EditorBridge::new(MockEditorPort::new(), props, callbacks);

    let wire = bridge.boot_config().expect("boot config serialises");
    let options = EditorTransferObject::from_wire(&wire).expect("boot config parses");

    assert_eq!(options.platform(), Platform::Ios);
    assert_eq!(options.commands(), ["bold"]);
    assert_eq!(options.delay_long_press(), 750);
    assert!(options.listeners().is_active(EventKind::Change));
    assert!(options.listeners().is_active(EventKind::Select));
    assert!(!options.listeners().is_active(EventKind::KeyDown));
    assert!(!options.listeners().is_active(EventKind::LongPress));
}

// ---------------------------------------------------------------------------
// Dispatch gating
// ---------------------------------------------------------------------------

#[test]
fn dispatch_before_load_is_dropped_and_reported() {
    let mut port = MockEditorPort::new();
    port.expect_post_message().never();
    let log = DiagnosticLog::default();
    let mut bridge = EditorBridge::new(
        port,
        EditorProps::new(Platform::Web),
        EditorCallbacks::new(),
    )
    .with_diagnostics(log.hook());

    bridge.dispatch(&actions::bold());

    assert_eq!(
        log.entries(),
        vec![BridgeDiagnostic::NotReady {
            kind: "bold".to_owned()
        }]
    );
}

#[test]
fn dispatch_after_load_posts_the_wire() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.handle_load();
    bridge.dispatch(&actions::bold());

    let actions = port.actions();
    let last = actions.last().expect("at least one action posted");
    assert_eq!(last.kind(), "bold");
}

#[test]
fn load_start_gates_dispatch_again() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.handle_load();
    assert!(bridge.is_ready());

    bridge.handle_load_start();
    assert!(!bridge.is_ready());
    let before = port.actions().len();
    bridge.dispatch(&actions::italic());
    assert_eq!(port.actions().len(), before);
}

#[test]
fn focus_requests_native_focus_and_dispatches_the_action() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.handle_load();
    bridge.focus(Some(FocusPosition::End));

    assert_eq!(port.focus_requests(), 1);
    let actions = port.actions();
    let last = actions.last().expect("focus action posted");
    assert_eq!(last.kind(), "focus");
    assert_eq!(last.payload(), Some(&json!("end")));
}

#[test]
fn show_keyboard_meta_requests_native_focus() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.handle_load();

    let meta = vellum_protocol::ActionMeta {
        focusable: true,
        selectable: true,
        show_keyboard: true,
    };
    bridge.dispatch(&Action::new("bold").with_meta(meta));

    assert_eq!(port.focus_requests(), 1);
}

// ---------------------------------------------------------------------------
// Prop syncing
// ---------------------------------------------------------------------------

#[test]
fn handle_load_syncs_the_declared_props() {
    let props = EditorProps::new(Platform::Web)
        .with_placeholder("Start writing")
        .with_content("<p>draft</p>")
        .with_styles("p { margin: 0 }")
        .with_content_editable(false)
        .with_autofocus(FocusPosition::End)
        .with_auto_select(true);
    let port = RecordingPort::default();
    let mut bridge = EditorBridge::new(port.clone(), props, EditorCallbacks::new());

    bridge.handle_load();

    let kinds: Vec<String> = port
        .actions()
        .iter()
        .map(|action| action.kind().to_owned())
        .collect();
    assert_eq!(
        kinds,
        [
            "setAttribute",
            "setAttribute",
            "setAttribute",
            "insertStyle",
            "focus",
            "select"
        ]
    );

    let actions = port.actions();
    assert_eq!(
        actions[0].payload(),
        Some(&json!({"contenteditable": "false"}))
    );
    assert_eq!(
        actions[1].payload(),
        Some(&json!({"placeholder": "Start writing"}))
    );
    assert_eq!(
        actions[2].payload(),
        Some(&json!({"innerHTML": "<p>draft</p>"}))
    );
    assert_eq!(actions[3].payload(), Some(&json!("p { margin: 0 }")));
    assert_eq!(actions[4].payload(), Some(&json!("end")));
    assert_eq!(port.focus_requests(), 1);
}

#[test]
fn setters_record_props_while_loading_and_sync_on_load() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.set_placeholder("Later");
    assert!(port.actions().is_empty());

    bridge.handle_load();
    let placeholders: Vec<Action> = port
        .actions()
        .into_iter()
        .filter(|action| action.payload() == Some(&json!({"placeholder": "Later"})))
        .collect();
    assert_eq!(placeholders.len(), 1);
}

#[test]
fn setters_resync_immediately_when_ready() {
    let (mut bridge, port) = bridge(EditorCallbacks::new());
    bridge.handle_load();

    bridge.set_content("<p>next</p>");
    bridge.set_styles("em { color: red }");
    bridge.set_content_editable(false);

    let actions = port.actions();
    let tail = &actions[actions.len() - 3..];
    assert_eq!(tail[0].payload(), Some(&json!({"innerHTML": "<p>next</p>"})));
    assert_eq!(tail[1].payload(), Some(&json!("em { color: red }")));
    assert_eq!(
        tail[2].payload(),
        Some(&json!({"contenteditable": "false"}))
    );
}

// ---------------------------------------------------------------------------
// Inbound delivery
// ---------------------------------------------------------------------------

#[test]
fn typed_events_reach_their_callbacks_with_a_timestamp() {
    let seen: Rc<RefCell<Vec<EditorEvent<TextPayload>>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let callbacks = EditorCallbacks::new().on_change(move |event| sink.borrow_mut().push(event));
    let (mut bridge, _port) = bridge(callbacks);

    let wire = EventMessage::Change(TextPayload::new("<p>x</p>"))
        .to_wire()
        .expect("serialise");
    bridge.handle_message(&wire);

    let events = seen.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), EventKind::Change);
    assert_eq!(events[0].native_event(), &TextPayload::new("<p>x</p>"));
    assert!(events[0].time_stamp() > 0);
}

#[test]
fn select_events_refresh_the_data_snapshot() {
    let invocations = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&invocations);
    let callbacks = EditorCallbacks::new().on_select(move |_| *counter.borrow_mut() += 1);
    let (mut bridge, _port) = bridge(callbacks);

    let mut data = CommandsInfo::new();
    data.insert("bold".to_owned(), CommandInfo::new(true, true));
    let wire = EventMessage::Select(SelectPayload::new(data))
        .to_wire()
        .expect("serialise");
    bridge.handle_message(&wire);

    assert_eq!(*invocations.borrow(), 1);
    let info = bridge.data().get("bold").expect("snapshot retained");
    assert!(info.enabled);
}

#[test]
fn unrecognised_messages_fall_back_to_the_raw_callback() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let callbacks =
        EditorCallbacks::new().on_raw_message(move |raw| sink.borrow_mut().push(raw.to_owned()));
    let log = DiagnosticLog::default();
    let (bridge, _port) = bridge(callbacks);
    let mut bridge = bridge.with_diagnostics(log.hook());

    bridge.handle_message(r#"{"custom": "ping"}"#);
    bridge.handle_message("not json at all");

    assert_eq!(
        *seen.borrow(),
        vec![r#"{"custom": "ping"}"#.to_owned(), "not json at all".to_owned()]
    );
    assert!(log.entries().is_empty());
}

#[test]
fn unparseable_without_a_fallback_is_reported_and_dropped() {
    let log = DiagnosticLog::default();
    let (bridge, _port) = bridge(EditorCallbacks::new());
    let mut bridge = bridge.with_diagnostics(log.hook());

    bridge.handle_message("garbage");

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert!(matches!(entries[0], BridgeDiagnostic::Unparseable { .. }));
}

#[test]
fn events_without_a_callback_are_dropped_silently() {
    let log = DiagnosticLog::default();
    let (bridge, _port) = bridge(EditorCallbacks::new());
    let mut bridge = bridge.with_diagnostics(log.hook());

    let wire = EventMessage::KeyDown(vellum_protocol::KeyPayload::new("a"))
        .to_wire()
        .expect("serialise");
    bridge.handle_message(&wire);

    assert!(log.entries().is_empty());
}
