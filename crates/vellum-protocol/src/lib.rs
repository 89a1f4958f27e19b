//! Wire types for the Vellum editor bridge.
//!
//! The host application and the embedded editable document live in isolated
//! contexts that exchange nothing but strings. This crate defines every shape
//! that crosses that boundary and its JSON wire form:
//!
//! - [`Action`]: a host request to execute one named command (host → embedded).
//! - [`EventMessage`]: a state or interaction notification (embedded → host).
//! - [`EditorTransferObject`]: the boot configuration injected into the
//!   embedded context before its content executes.
//! - [`CommandsInfo`]: the per-command state/enabled snapshot carried by
//!   `select` events and mirrored on the host side.
//!
//! Parsing is deliberately forgiving at the edges: unknown fields are
//! tolerated, and malformed input yields a [`ProtocolError`] rather than a
//! panic, so either side can drop a bad message and carry on.

pub mod action;
pub mod boot;
pub mod error;
pub mod event;
pub mod extension;
pub mod ids;
pub mod snapshot;

pub use self::action::{Action, ActionMeta};
pub use self::boot::{EditorTransferObject, ListenerSet, Platform};
pub use self::error::ProtocolError;
pub use self::event::{
    EditorEvent, ElementInfo, EventKind, EventMessage, InputPayload, KeyPayload, SelectPayload,
    TextPayload,
};
pub use self::extension::{ExtensionSpec, StateMode};
pub use self::snapshot::{CommandInfo, CommandState, CommandsInfo};
