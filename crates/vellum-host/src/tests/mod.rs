//! Host ↔ runtime loopback integration.
//!
//! Wires a real bridge to a real runtime through in-memory string channels,
//! with the in-memory document double standing in for the editable surface.
//! Nothing crosses either boundary except the wire strings, exactly as in
//! production.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use vellum_commands::testing::FakeDocument;
use vellum_commands::DocumentApi;
use vellum_protocol::{
    CommandState, EditorEvent, EditorTransferObject, ExtensionSpec, Platform, SelectPayload,
    StateMode, TextPayload,
};
use vellum_runtime::{DomSignal, EditorRuntime, EventSink};

use crate::actions;
use crate::bridge::EditorBridge;
use crate::callbacks::EditorCallbacks;
use crate::port::EditorPort;
use crate::props::{EditorProps, FocusPosition};

/// One direction of the string boundary.
#[derive(Clone, Default)]
struct Channel {
    queue: Rc<RefCell<Vec<String>>>,
}

impl Channel {
    fn drain(&self) -> Vec<String> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl EditorPort for Channel {
    fn post_message(&self, message: &str) {
        self.queue.borrow_mut().push(message.to_owned());
    }

    fn request_focus(&self) {}
}

impl EventSink for Channel {
    fn post(&self, message: &str) {
        self.queue.borrow_mut().push(message.to_owned());
    }
}

struct Loopback {
    bridge: EditorBridge<Channel>,
    runtime: EditorRuntime,
    doc: Rc<FakeDocument>,
    outbound: Channel,
    inbound: Channel,
    start: Instant,
}

impl Loopback {
    /// Boots a bridge and a runtime joined by two channels.
    fn boot(props: EditorProps, callbacks: EditorCallbacks) -> Self {
        let outbound = Channel::default();
        let inbound = Channel::default();
        let bridge = EditorBridge::new(outbound.clone(), props, callbacks);

        let wire = bridge.boot_config().expect("boot config serialises");
        let options = EditorTransferObject::from_wire(&wire).expect("boot config parses");
        let doc = Rc::new(FakeDocument::new());
        let runtime = EditorRuntime::new(
            options,
            Rc::clone(&doc) as Rc<dyn DocumentApi>,
            Some(Box::new(inbound.clone())),
        )
        .expect("runtime boots");

        Self {
            bridge,
            runtime,
            doc,
            outbound,
            inbound,
            start: Instant::now(),
        }
    }

    fn at(&self, millis: u64) -> Instant {
        self.start + Duration::from_millis(millis)
    }

    /// Carries pending host dispatches into the runtime.
    fn pump_outbound(&mut self, now: Instant) {
        for message in self.outbound.drain() {
            self.runtime.handle_message(&message, now);
        }
    }

    /// Carries pending runtime events back into the bridge.
    fn pump_inbound(&mut self) {
        for message in self.inbound.drain() {
            self.bridge.handle_message(&message);
        }
    }
}

#[test]
fn boot_dispatch_and_select_round_trip() {
    let selections: Rc<RefCell<Vec<EditorEvent<SelectPayload>>>> = Rc::default();
    let seen = Rc::clone(&selections);
    let callbacks = EditorCallbacks::new().on_select(move |event| seen.borrow_mut().push(event));
    let props = EditorProps::new(Platform::Android).with_commands(vec!["bold".into()]);
    let mut rig = Loopback::boot(props, callbacks);

    rig.bridge.handle_load();
    rig.pump_outbound(rig.start);

    rig.bridge.dispatch(&actions::bold());
    rig.pump_outbound(rig.start);
    assert_eq!(rig.doc.exec_log(), vec![("bold".to_owned(), None)]);
    assert_eq!(rig.doc.focus_count(), 1);

    rig.runtime.tick(rig.at(100));
    rig.pump_inbound();

    let events = selections.borrow();
    assert_eq!(events.len(), 1);
    let data = &events[0].native_event().data;
    assert_eq!(data.len(), 3);
    assert_eq!(
        data.get("bold").map(|info| &info.state),
        Some(&CommandState::Toggled(true))
    );
    assert_eq!(
        rig.bridge.data().get("bold").map(|info| &info.state),
        Some(&CommandState::Toggled(true))
    );
}

#[test]
fn typing_produces_one_debounced_change() {
    let changes: Rc<RefCell<Vec<EditorEvent<TextPayload>>>> = Rc::default();
    let seen = Rc::clone(&changes);
    let callbacks = EditorCallbacks::new().on_change(move |event| seen.borrow_mut().push(event));
    let mut rig = Loopback::boot(EditorProps::new(Platform::Web), callbacks);

    rig.bridge.handle_load();
    rig.pump_outbound(rig.start);
    rig.doc.seed_inner_html("<p>hello</p>");

    for offset in 0..4 {
        let now = rig.at(offset);
        rig.runtime.handle_signal(
            DomSignal::Input {
                input_type: "insertText".into(),
                data: Some("h".into()),
            },
            now,
        );
        rig.runtime.tick(now);
    }
    rig.runtime.tick(rig.at(200));
    rig.pump_inbound();

    let events = changes.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].native_event(), &TextPayload::new("<p>hello</p>"));
}

#[test]
fn declared_props_reach_the_document_on_load() {
    let props = EditorProps::new(Platform::Web)
        .with_placeholder("Start writing")
        .with_content("<p>seed</p>")
        .with_styles("p { margin: 0 }")
        .with_autofocus(FocusPosition::End);
    let mut rig = Loopback::boot(props, EditorCallbacks::new());

    rig.bridge.handle_load();
    rig.pump_outbound(rig.start);

    assert_eq!(
        rig.doc.attribute("placeholder"),
        Some("Start writing".to_owned())
    );
    assert_eq!(
        rig.doc.attribute("contenteditable"),
        Some("true".to_owned())
    );
    assert_eq!(rig.doc.inner_html(), "<p>seed</p>");
    assert_eq!(
        rig.doc.style_elements(),
        vec![("vellum-style".to_owned(), "p { margin: 0 }".to_owned())]
    );
    assert_eq!(rig.doc.focus_count(), 1);
    assert!(rig.doc.selection_at_end());
}

#[test]
fn extension_commands_ride_the_same_pipeline() {
    let spec = ExtensionSpec::new("custom.highlight")
        .with_target("backColor")
        .with_state_mode(StateMode::Value)
        .with_value_template("hl-{}");
    let props = EditorProps::new(Platform::Web)
        .with_commands(vec!["bold".into()])
        .with_extensions(vec![spec]);
    let mut rig = Loopback::boot(props, EditorCallbacks::new());

    rig.bridge.handle_load();
    rig.pump_outbound(rig.start);

    let action = actions::set_attribute([("data-theme", "dark")]);
    rig.bridge.dispatch(&action);
    rig.bridge.dispatch(
        &vellum_protocol::Action::new("custom.highlight").with_payload("yellow"),
    );
    rig.pump_outbound(rig.start);

    assert_eq!(rig.doc.attribute("data-theme"), Some("dark".to_owned()));
    assert_eq!(
        rig.doc.exec_log().last(),
        Some(&("backColor".to_owned(), Some("hl-yellow".to_owned())))
    );
}
