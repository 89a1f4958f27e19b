//! The embedded-context editor runtime.
//!
//! One [`EditorRuntime`] lives next to the editable document inside the
//! isolated context. It reads its boot configuration exactly once, builds the
//! command registry, and then shuttles between two message streams:
//!
//! - **Inbound**: string-serialized actions from the host, parsed, routed to
//!   a registered command, and executed against the document. Malformed or
//!   unknown dispatches are dropped silently; the boundary is a fault
//!   barrier, not an error surface.
//! - **Outbound**: DOM signals translated into `{type, payload}` event
//!   messages. Selection changes are synthesized from several independent
//!   signals and coalesced through a single-slot debouncer, as are change
//!   notifications, so a burst of keystrokes produces one message instead of
//!   many.
//!
//! Timing is explicit: callers feed a monotonic `now` into every entry point
//! and pump [`EditorRuntime::tick`] to flush due slots, which keeps the whole
//! state machine deterministic under test.

pub mod runtime;
pub mod schedule;
pub mod signal;
pub mod sink;

pub use self::runtime::EditorRuntime;
pub use self::schedule::{DebounceSlot, LongPressTracker, PressClass};
pub use self::signal::DomSignal;
pub use self::sink::EventSink;
