//! Host-side transport bridge for the Vellum editor.
//!
//! The host owns the native view embedding the editable document but can
//! only reach it through a string-message port. [`EditorBridge`] wraps that
//! port: it assembles the boot configuration from declared props and
//! registered callbacks, gates outbound dispatches on content readiness,
//! re-issues prop syncs reactively once the content has loaded, and
//! re-hydrates inbound wire messages into typed [`EditorEvent`]s delivered to
//! one callback per event kind.
//!
//! The boundary is a fault barrier in both directions. A failed dispatch or
//! an unparseable inbound message never panics and never surfaces as an
//! error return; it is logged, optionally reported through the
//! [`BridgeDiagnostic`] hook, and otherwise swallowed.
//!
//! [`EditorEvent`]: vellum_protocol::EditorEvent

pub mod actions;
pub mod bridge;
pub mod callbacks;
pub mod error;
pub mod port;
pub mod props;
pub mod telemetry;

pub use self::bridge::{BridgeDiagnostic, EditorBridge};
pub use self::callbacks::EditorCallbacks;
pub use self::error::BridgeError;
pub use self::port::EditorPort;
pub use self::props::{EditorProps, FocusPosition};
pub use self::telemetry::{TelemetryError, TelemetryHandle, TelemetrySettings};

#[cfg(test)]
mod tests;
